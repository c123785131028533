//!
//! Vulkan Sample - Init swapchain
//!
//! Create a window surface, pick the graphics and present queues, and build a swapchain with one view per image.
//!

mod example;

use clap::Parser;

fn main() {

    let args = vksamples::SampleArgs::parse();
    vksamples::init_tracing();

    let app = example::VulkanExample::new(args);
    vksamples::launch(app);
}
