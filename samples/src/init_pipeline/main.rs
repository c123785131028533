//!
//! Vulkan Sample - Init pipeline
//!
//! Add the shader modules, the framebuffers, the cube vertex buffer, a descriptor set for the MVP matrix
//! and a graphics pipeline with a fixed-function state for the cube. Nothing is drawn.
//!

mod example;

use clap::Parser;

fn main() {

    let args = vksamples::SampleArgs::parse();
    vksamples::init_tracing();

    let app = example::VulkanExample::new(args);
    vksamples::launch(app);
}
