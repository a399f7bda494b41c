pub static ABOUT_HELP: &str = "Convert an equirectangular HDR panorama into an octahedral map

The output is a square radiance file whose side is the height
of the input. Every output texel copies the nearest panorama
pixel in the direction it represents.";

pub static OUTPUT_HELP: &str = "Where to write the octahedral map

When omitted the map is written next to the input as
<input name>_octahedral.hdr

An existing file is only replaced after confirmation, see --yes";

pub static THREADS_HELP: &str = "Number of threads used for resampling

Output rows are split between threads.
0 uses one thread per available core.";
