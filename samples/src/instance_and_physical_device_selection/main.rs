//!
//! Vulkan Sample - Instance and physical device selection
//!
//! List the instance layers, create the instance and describe every physical device it can see.
//!

mod example;

use clap::Parser;

fn main() {

    let args = vksamples::SampleArgs::parse();
    vksamples::init_tracing();

    let app = example::VulkanExample::new(args);
    vksamples::launch(app);
}
