
use ash::vk;
use winit::window::Window;

use vkbase::context::{VkInstance, VkDebugger, VkDevice, VkPhysicalDevice, VkLogicalDevice};
use vkbase::context::{DebugUtilsConfig, LogicDevConfig, select_queue_families};
use vkbase::ci::command::{CommandPoolCI, CommandBufferAI};
use vkbase::{VkResult, Workflow, discard_after_wait};

use vksamples::SampleArgs;

pub struct VulkanExample {

    args: SampleArgs,

    instance: Option<VkInstance>,
    debugger: Option<VkDebugger>,
    device  : Option<VkDevice>,

    command_pool: vk::CommandPool,
    command: vk::CommandBuffer,
}

impl VulkanExample {

    pub fn new(args: SampleArgs) -> VulkanExample {

        VulkanExample {
            args,
            instance: None,
            debugger: None,
            device  : None,
            command_pool: vk::CommandPool::null(),
            command: vk::CommandBuffer::null(),
        }
    }
}

impl Workflow for VulkanExample {

    fn init(&mut self, window: &Window) -> VkResult<()> {

        let config = self.args.instance_config();
        let instance = self.instance.insert(VkInstance::new(&config, window)?);
        self.debugger = Some(VkDebugger::new(instance, config.debug, &DebugUtilsConfig::default())?);

        let phy = VkPhysicalDevice::new(instance, self.args.physical_config(vk::PhysicalDeviceType::DISCRETE_GPU))?;

        // no surface yet, the first graphics family is enough.
        let families = select_queue_families(&phy.families, None)?;
        tracing::info!("Using queue family {}", families.graphics);

        let logic = VkLogicalDevice::new(instance, &phy, families, LogicDevConfig::default())?;
        let device = self.device.insert(VkDevice::new(logic, phy));

        self.command_pool = device.build(&CommandPoolCI::new(families.graphics))?;
        let commands = device.build(&CommandBufferAI::new(self.command_pool, 1))?;
        self.command = commands[0];

        Ok(())
    }

    fn deinit(&mut self) -> VkResult<()> {

        let idle = match self.device.take() {
            | Some(device) => discard_after_wait(device.wait_idle(), || {
                if self.command != vk::CommandBuffer::null() {
                    device.free(self.command, self.command_pool);
                }
                if self.command_pool != vk::CommandPool::null() {
                    device.discard(self.command_pool);
                }
                device.discard_self();
            }),
            | None => Ok(()),
        };

        if let Some(debugger) = self.debugger.take() {
            debugger.discard();
        }
        if let Some(instance) = self.instance.take() {
            instance.discard();
        }

        idle
    }
}
