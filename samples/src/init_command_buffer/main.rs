//!
//! Vulkan Sample - Init command buffer
//!
//! Select a physical device, create a logical device with one graphics queue and allocate a primary command buffer.
//!

mod example;

use clap::Parser;

fn main() {

    let args = vksamples::SampleArgs::parse();
    vksamples::init_tracing();

    let app = example::VulkanExample::new(args);
    vksamples::launch(app);
}
