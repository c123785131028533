
use ash::vk;
use winit::window::Window;

use vkbase::context::{VkInstance, VkDebugger, VkSurface, VkDevice, VkPhysicalDevice, VkLogicalDevice, VkSwapchain};
use vkbase::context::{DebugUtilsConfig, LogicDevConfig, select_queue_families, query_present_support};
use vkbase::ci::command::{CommandPoolCI, CommandBufferAI};
use vkbase::ci::descriptor::{DescriptorSetLayoutCI, DescriptorPoolCI, DescriptorSetAI, DescriptorBufferSetWI};
use vkbase::ci::pipeline::{PipelineLayoutCI, RenderPassCI, AttachmentDescCI, SubpassDescCI, FramebufferCI, GraphicsPipelineCI};
use vkbase::ci::pipeline::{VertexInputSCI, InputAssemblySCI, RasterizationSCI, ColorBlendSCI, BlendAttachmentSCI};
use vkbase::ci::pipeline::{ViewportSCI, DepthStencilSCI, MultisampleSCI, DynamicSCI};
use vkbase::ci::shader::{ShaderModuleCI, ShaderStageCI};
use vkbase::{VkResult, VkError, Workflow, discard_after_wait};

use vksamples::resource::{DepthImage, HostBuffer};
use vksamples::cube::{self, Vertex};
use vksamples::SampleArgs;

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
    uniform_buffer: Option<HostBuffer>,

    descriptor_set_layout: vk::DescriptorSetLayout,
    pipeline_layout: vk::PipelineLayout,
    render_pass: vk::RenderPass,

    vert_module: vk::ShaderModule,
    frag_module: vk::ShaderModule,

    /// one framebuffer for each swapchain image, sharing the depth image.
    framebuffers: Vec<vk::Framebuffer>,
    vertex_buffer: Option<HostBuffer>,

    /// the descriptor set is returned to the pool when the pool is destroyed.
    descriptor_pool: vk::DescriptorPool,
    descriptor_set : vk::DescriptorSet,

    pipeline: vk::Pipeline,
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
            vert_module: vk::ShaderModule::null(),
            frag_module: vk::ShaderModule::null(),
            framebuffers: Vec::new(),
            vertex_buffer: None,
            descriptor_pool: vk::DescriptorPool::null(),
            descriptor_set : vk::DescriptorSet::null(),
            pipeline: vk::Pipeline::null(),
        }
    }
}

impl Workflow for VulkanExample {

    fn init(&mut self, window: &Window) -> VkResult<()> {

        let config = self.args.instance_config();
        let instance = self.instance.insert(VkInstance::new(&config, window)?);
        self.debugger = Some(VkDebugger::new(instance, config.debug, &DebugUtilsConfig::default())?);

        let surface = self.surface.insert(VkSurface::new(instance, window)?);

        let mut phy_config = self.args.physical_config(vk::PhysicalDeviceType::INTEGRATED_GPU).with_swapchain();
        // the rasterization state clamps depth instead of clipping.
        phy_config.request_features.depth_clamp = vk::TRUE;
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
        let uniform_buffer = self.uniform_buffer.insert(HostBuffer::new(device, vk::BufferUsageFlags::UNIFORM_BUFFER, &mvp)?);

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

        self.vert_module = device.build(&ShaderModuleCI::from_spirv(&cube::VERT_SPV))?;
        self.frag_module = device.build(&ShaderModuleCI::from_spirv(&cube::FRAG_SPV))?;

        for view in swapchain.image_views() {

            let framebuffer_ci = FramebufferCI::new_2d(self.render_pass, swapchain.dimension)
                .add_attachment(view)
                .add_attachment(depth_image.view);
            self.framebuffers.push(device.build(&framebuffer_ci)?);
        }

        self.vertex_buffer = Some(HostBuffer::new(device, vk::BufferUsageFlags::VERTEX_BUFFER, &cube::VERTICES)?);

        let descriptor_pool_ci = DescriptorPoolCI::new(1)
            .add_descriptor(vk::DescriptorType::UNIFORM_BUFFER, 1);
        self.descriptor_pool = device.build(&descriptor_pool_ci)?;

        let descriptor_set_ai = DescriptorSetAI::new(self.descriptor_pool)
            .add_set_layout(self.descriptor_set_layout);
        self.descriptor_set = device.build(&descriptor_set_ai)?
            .into_iter().next()
            .ok_or(VkError::create("Descriptor Set"))?;

        DescriptorBufferSetWI::new(self.descriptor_set, 0, vk::DescriptorType::UNIFORM_BUFFER)
            .add_buffer(uniform_buffer.descriptor())
            .update(device);

        let pipeline_ci = pipeline_ci(self.render_pass, self.pipeline_layout, self.vert_module, self.frag_module);
        self.pipeline = device.build(&pipeline_ci)?;
        tracing::info!("created graphics pipeline for {} vertices", cube::VERTEX_COUNT);

        Ok(())
    }

    fn deinit(&mut self) -> VkResult<()> {

        let idle = match self.device.take() {
            | Some(device) => discard_after_wait(device.wait_idle(), || {
                device.discard(self.pipeline);
                device.discard(self.descriptor_pool);

                if let Some(vertex_buffer) = self.vertex_buffer.take() {
                    vertex_buffer.discard(&device);
                }
                device.discard(self.framebuffers.as_slice());
                self.framebuffers.clear();

                device.discard(self.frag_module);
                device.discard(self.vert_module);
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

fn pipeline_ci(render_pass: vk::RenderPass, layout: vk::PipelineLayout, vert_module: vk::ShaderModule, frag_module: vk::ShaderModule) -> GraphicsPipelineCI {

    let [binding] = Vertex::binding_descriptions();
    let [position, color] = Vertex::attribute_descriptions();

    let vertex_input = VertexInputSCI::new()
        .add_binding(binding)
        .add_attribute(position)
        .add_attribute(color);

    let rasterization = RasterizationSCI::new()
        .depth_clamp(true)
        .cull_face(vk::CullModeFlags::BACK, vk::FrontFace::CLOCKWISE);

    let color_blend = ColorBlendSCI::new()
        .add_attachment(BlendAttachmentSCI::new());

    // the viewport and scissor come from the command buffer.
    let dynamics = DynamicSCI::new()
        .add_dynamic(vk::DynamicState::VIEWPORT)
        .add_dynamic(vk::DynamicState::SCISSOR);

    GraphicsPipelineCI::new(render_pass, layout)
        .add_shader_stage(ShaderStageCI::new(vk::ShaderStageFlags::VERTEX, vert_module))
        .add_shader_stage(ShaderStageCI::new(vk::ShaderStageFlags::FRAGMENT, frag_module))
        .set_vertex_input(vertex_input)
        .set_input_assembly(InputAssemblySCI::new())
        .set_viewport(ViewportSCI::dynamic(1, 1))
        .set_rasterization(rasterization)
        .set_multisample(MultisampleSCI::new())
        .set_depth_stencil(DepthStencilSCI::new())
        .set_color_blend(color_blend)
        .set_dynamic(dynamics)
}
