//!
//! Vulkan Sample - Init render pass
//!
//! Add a depth image, a uniform buffer with the MVP matrix, the descriptor set and pipeline layouts, and a render pass.
//!

mod example;

use clap::Parser;

fn main() {

    let args = vksamples::SampleArgs::parse();
    vksamples::init_tracing();

    let app = example::VulkanExample::new(args);
    vksamples::launch(app);
}
