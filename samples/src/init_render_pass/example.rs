
use ash::vk;
use winit::window::Window;

use vkbase::context::{VkInstance, VkDebugger, VkSurface, VkDevice, VkPhysicalDevice, VkLogicalDevice, VkSwapchain};
use vkbase::context::{DebugUtilsConfig, LogicDevConfig, select_queue_families, query_present_support};
use vkbase::ci::command::{CommandPoolCI, CommandBufferAI};
use vkbase::ci::descriptor::DescriptorSetLayoutCI;
use vkbase::ci::pipeline::{PipelineLayoutCI, RenderPassCI, AttachmentDescCI, SubpassDescCI};
use vkbase::{VkResult, Workflow, discard_after_wait};

use vksamples::resource::{DepthImage, HostBuffer};
use vksamples::{SampleArgs, cube};

pub struct VulkanExample {

    args: SampleArgs,

    instance : Option<VkInstance>,
    debugger : Option<VkDebugger>,
    surface  : Option<VkSurface>,
    device   : Option<VkDevice>,
    swapchain: Option<VkSwapchain>,

    command_pool: vk::CommandPool,
    command: vk::CommandBuffer,

    depth_image: Option<DepthImage>,
    /// holds the MVP matrix read by the vertex shader.
    uniform_buffer: Option<HostBuffer>,

    descriptor_set_layout: vk::DescriptorSetLayout,
    pipeline_layout: vk::PipelineLayout,
    render_pass: vk::RenderPass,
}

impl VulkanExample {

    pub fn new(args: SampleArgs) -> VulkanExample {

        VulkanExample {
            args,
            instance : None,
            debugger : None,
            surface  : None,
            device   : None,
            swapchain: None,
            command_pool: vk::CommandPool::null(),
            command: vk::CommandBuffer::null(),
            depth_image: None,
            uniform_buffer: None,
            descriptor_set_layout: vk::DescriptorSetLayout::null(),
            pipeline_layout: vk::PipelineLayout::null(),
            render_pass: vk::RenderPass::null(),
        }
    }
}

impl Workflow for VulkanExample {

    fn init(&mut self, window: &Window) -> VkResult<()> {

        let config = self.args.instance_config();
        let instance = self.instance.insert(VkInstance::new(&config, window)?);
        self.debugger = Some(VkDebugger::new(instance, config.debug, &DebugUtilsConfig::default())?);

        let surface = self.surface.insert(VkSurface::new(instance, window)?);

        let phy_config = self.args.physical_config(vk::PhysicalDeviceType::DISCRETE_GPU).with_swapchain();
        let phy = VkPhysicalDevice::new(instance, phy_config)?;

        let present_support = query_present_support(surface, phy.handle, phy.families.len())?;
        let families = select_queue_families(&phy.families, Some(present_support.as_slice()))?;

        let logic = VkLogicalDevice::new(instance, &phy, families, LogicDevConfig::default())?;
        let device = self.device.insert(VkDevice::new(logic, phy));

        self.command_pool = device.build(&CommandPoolCI::new(families.graphics))?;
        let commands = device.build(&CommandBufferAI::new(self.command_pool, 1))?;
        self.command = commands[0];

        let swapchain = self.swapchain.insert(VkSwapchain::new(instance, device, surface, families, &self.args.swapchain_config())?);

        let depth_image = self.depth_image.insert(DepthImage::new(instance, device, swapchain.dimension)?);

        let mvp = cube::mvp_uniform();
        self.uniform_buffer = Some(HostBuffer::new(device, vk::BufferUsageFlags::UNIFORM_BUFFER, &mvp)?);

        let set_layout_ci = DescriptorSetLayoutCI::new()
            .add_binding(0, vk::DescriptorType::UNIFORM_BUFFER, 1, vk::ShaderStageFlags::VERTEX);
        self.descriptor_set_layout = device.build(&set_layout_ci)?;

        let pipeline_layout_ci = PipelineLayoutCI::new()
            .add_set_layout(self.descriptor_set_layout);
        self.pipeline_layout = device.build(&pipeline_layout_ci)?;

        let color_attachment = AttachmentDescCI::new(swapchain.format)
            .op(vk::AttachmentLoadOp::CLEAR, vk::AttachmentStoreOp::STORE)
            .layout(vk::ImageLayout::UNDEFINED, vk::ImageLayout::PRESENT_SRC_KHR);
        let depth_attachment = AttachmentDescCI::new(depth_image.format)
            .op(vk::AttachmentLoadOp::CLEAR, vk::AttachmentStoreOp::DONT_CARE)
            .layout(vk::ImageLayout::UNDEFINED, vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL);

        let subpass = SubpassDescCI::new(vk::PipelineBindPoint::GRAPHICS)
            .add_color_attachment(0, vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL)
            .set_depth_stencil_attachment(1, vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL);

        let render_pass_ci = RenderPassCI::new()
            .add_attachment(color_attachment)
            .add_attachment(depth_attachment)
            .add_subpass(subpass);
        self.render_pass = device.build(&render_pass_ci)?;

        Ok(())
    }

    fn deinit(&mut self) -> VkResult<()> {

        let idle = match self.device.take() {
            | Some(device) => discard_after_wait(device.wait_idle(), || {
                device.discard(self.render_pass);
                device.discard(self.pipeline_layout);
                device.discard(self.descriptor_set_layout);

                if let Some(uniform_buffer) = self.uniform_buffer.take() {
                    uniform_buffer.discard(&device);
                }
                if let Some(depth_image) = self.depth_image.take() {
                    depth_image.discard(&device);
                }
                if let Some(swapchain) = self.swapchain.take() {
                    swapchain.discard(&device);
                }
                if self.command != vk::CommandBuffer::null() {
                    device.free(self.command, self.command_pool);
                }
                device.discard(self.command_pool);
                device.discard_self();
            }),
            | None => Ok(()),
        };

        if let Some(surface) = self.surface.take() {
            surface.discard();
        }
        if let Some(debugger) = self.debugger.take() {
            debugger.discard();
        }
        if let Some(instance) = self.instance.take() {
            instance.discard();
        }

        idle
    }
}
