
use winit::window::Window;

use vkbase::context::{VkInstance, VkDebugger, DebugUtilsConfig};
use vkbase::{VkResult, Workflow};

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

        let config = self.args.instance_config();

        let instance = self.instance.insert(VkInstance::new(&config, window)?);
        self.debugger = Some(VkDebugger::new(instance, config.debug, &DebugUtilsConfig::default())?);

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
