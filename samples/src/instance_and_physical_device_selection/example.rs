
use winit::window::Window;

use vkbase::context::{VkInstance, VkDebugger, VkPhysicalDevice, DebugUtilsConfig};
use vkbase::{VkResult, VkError, Workflow};

use vksamples::SampleArgs;

pub struct VulkanExample {

    args: SampleArgs,

    instance: Option<VkInstance>,
    debugger: Option<VkDebugger>,
}

impl VulkanExample {

    pub fn new(args: SampleArgs) -> VulkanExample {
        VulkanExample { args, instance: None, debugger: None }
    }
}

impl Workflow for VulkanExample {

    fn init(&mut self, window: &Window) -> VkResult<()> {

        let mut config = self.args.instance_config();
        config.print_available_layers = true;

        let instance = self.instance.insert(VkInstance::new(&config, window)?);
        self.debugger = Some(VkDebugger::new(instance, config.debug, &DebugUtilsConfig::default())?);

        let summaries = VkPhysicalDevice::query_summaries(instance)?;
        if summaries.is_empty() {
            return Err(VkError::unsupported("Vulkan physical device"))
        }

        for (i, summary) in summaries.iter().enumerate() {
            tracing::info!("[{}] {}", i, summary);
        }

        Ok(())
    }

    fn deinit(&mut self) -> VkResult<()> {

        if let Some(debugger) = self.debugger.take() {
            debugger.discard();
        }
        if let Some(instance) = self.instance.take() {
            instance.discard();
        }

        Ok(())
    }
}
