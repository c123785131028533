//!
//! Vulkan Sample - Init instance
//!
//! Create a Vulkan instance with the extensions required by the window system.
//!

mod example;

use clap::Parser;

fn main() {

    let args = vksamples::SampleArgs::parse();
    vksamples::init_tracing();

    let app = example::VulkanExample::new(args);
    vksamples::launch(app);
}
