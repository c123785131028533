
pub use self::renderpass::{RenderPassCI, AttachmentDescCI, SubpassDescCI};
pub use self::state::{VertexInputSCI, InputAssemblySCI, RasterizationSCI, ColorBlendSCI, BlendAttachmentSCI};
pub use self::state::{ViewportSCI, DepthStencilSCI, MultisampleSCI, DynamicSCI};

mod renderpass;
mod state;

use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable};
use crate::ci::shader::ShaderStageCI;
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::error::{VkResult, VkError};
use crate::vkuint;

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineLayoutCreateInfo.
#[derive(Debug, Clone)]
pub struct PipelineLayoutCI {

    inner: vk::PipelineLayoutCreateInfo<'static>,
    set_layouts: Vec<vk::DescriptorSetLayout>,
}

impl VulkanCI<vk::PipelineLayoutCreateInfo<'static>> for PipelineLayoutCI {

    fn default_ci() -> vk::PipelineLayoutCreateInfo<'static> {

        vk::PipelineLayoutCreateInfo::default()
            .flags(vk::PipelineLayoutCreateFlags::empty())
    }
}

impl VkObjectBuildableCI for PipelineLayoutCI {
    type ObjectType = vk::PipelineLayout;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let pipeline_layout = unsafe {
            device.logic.handle.create_pipeline_layout(&self.value(), None)
                .map_err(|e| VkError::create("Pipeline Layout").caused_by(e))?
        };
        Ok(pipeline_layout)
    }
}

impl PipelineLayoutCI {

    pub fn new() -> PipelineLayoutCI {

        PipelineLayoutCI {
            inner: PipelineLayoutCI::default_ci(),
            set_layouts: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::PipelineLayoutCreateInfo<'_> {

        let ci: vk::PipelineLayoutCreateInfo<'_> = self.inner;
        ci.set_layouts(&self.set_layouts)
    }

    #[inline]
    pub fn add_set_layout(mut self, set_layout: vk::DescriptorSetLayout) -> PipelineLayoutCI {
        self.set_layouts.push(set_layout); self
    }

}

impl VkObjectDiscardable for vk::PipelineLayout {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_pipeline_layout(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::FramebufferCreateInfo.
#[derive(Debug, Clone)]
pub struct FramebufferCI {

    inner: vk::FramebufferCreateInfo<'static>,
    attachments: Vec<vk::ImageView>,
}

impl VulkanCI<vk::FramebufferCreateInfo<'static>> for FramebufferCI {

    fn default_ci() -> vk::FramebufferCreateInfo<'static> {

        vk::FramebufferCreateInfo::default()
            .flags(vk::FramebufferCreateFlags::empty())
            .layers(1)
    }
}

impl VkObjectBuildableCI for FramebufferCI {
    type ObjectType = vk::Framebuffer;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let framebuffer = unsafe {
            device.logic.handle.create_framebuffer(&self.value(), None)
                .map_err(|e| VkError::create("Framebuffer").caused_by(e))?
        };
        Ok(framebuffer)
    }
}

impl FramebufferCI {

    pub fn new_2d(render_pass: vk::RenderPass, dimension: vk::Extent2D) -> FramebufferCI {

        FramebufferCI {
            inner: FramebufferCI::default_ci()
                .render_pass(render_pass)
                .width(dimension.width)
                .height(dimension.height),
            attachments: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::FramebufferCreateInfo<'_> {

        let ci: vk::FramebufferCreateInfo<'_> = self.inner;
        ci.attachments(&self.attachments)
    }

    /// Attachments must be added in the order the render pass declares them.
    #[inline]
    pub fn add_attachment(mut self, attachment: vk::ImageView) -> FramebufferCI {
        self.attachments.push(attachment); self
    }

    #[inline(always)]
    pub fn layers(mut self, layers: vkuint) -> FramebufferCI {
        self.inner.layers = layers; self
    }
}

impl VkObjectDiscardable for vk::Framebuffer {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_framebuffer(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::GraphicsPipelineCreateInfo.
///
/// Every fixed-function state starts from the default of its wrapper.
#[derive(Debug, Clone)]
pub struct GraphicsPipelineCI {

    inner: vk::GraphicsPipelineCreateInfo<'static>,

    shader_stages : Vec<ShaderStageCI>,
    vertex_input  : VertexInputSCI,
    input_assembly: InputAssemblySCI,
    viewport      : ViewportSCI,
    rasterization : RasterizationSCI,
    multisample   : MultisampleSCI,
    depth_stencil : DepthStencilSCI,
    color_blend   : ColorBlendSCI,
    dynamics      : DynamicSCI,
}

impl VulkanCI<vk::GraphicsPipelineCreateInfo<'static>> for GraphicsPipelineCI {

    fn default_ci() -> vk::GraphicsPipelineCreateInfo<'static> {

        vk::GraphicsPipelineCreateInfo::default()
            .flags(vk::PipelineCreateFlags::empty())
            .subpass(0)
            .base_pipeline_handle(vk::Pipeline::null())
            .base_pipeline_index(-1)
    }
}

impl VkObjectBuildableCI for GraphicsPipelineCI {
    type ObjectType = vk::Pipeline;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let shader_stages: Vec<vk::PipelineShaderStageCreateInfo> = self.shader_stages.iter()
            .map(ShaderStageCI::value)
            .collect();

        let vertex_input   = self.vertex_input.value();
        let input_assembly = self.input_assembly.value();
        let viewport       = self.viewport.value();
        let rasterization  = self.rasterization.value();
        let multisample    = self.multisample.value();
        let depth_stencil  = self.depth_stencil.value();
        let color_blend    = self.color_blend.value();
        let dynamics       = self.dynamics.value();

        let ci: vk::GraphicsPipelineCreateInfo = self.inner;
        let mut pipeline_ci = ci
            .stages(&shader_stages)
            .vertex_input_state(&vertex_input)
            .input_assembly_state(&input_assembly)
            .viewport_state(&viewport)
            .rasterization_state(&rasterization)
            .multisample_state(&multisample)
            .depth_stencil_state(&depth_stencil)
            .color_blend_state(&color_blend);

        if !self.dynamics.is_empty() {
            pipeline_ci = pipeline_ci.dynamic_state(&dynamics);
        }

        let pipelines = unsafe {
            device.logic.handle.create_graphics_pipelines(vk::PipelineCache::null(), &[pipeline_ci], None)
                .map_err(|(_, e)| VkError::create("Graphics Pipeline").caused_by(e))?
        };

        pipelines.into_iter().next()
            .ok_or(VkError::create("Graphics Pipeline"))
    }
}

impl GraphicsPipelineCI {

    pub fn new(pass: vk::RenderPass, layout: vk::PipelineLayout) -> GraphicsPipelineCI {

        GraphicsPipelineCI {
            inner: GraphicsPipelineCI::default_ci()
                .render_pass(pass)
                .layout(layout),
            shader_stages : Vec::new(),
            vertex_input  : VertexInputSCI::new(),
            input_assembly: InputAssemblySCI::new(),
            viewport      : ViewportSCI::new(),
            rasterization : RasterizationSCI::new(),
            multisample   : MultisampleSCI::new(),
            depth_stencil : DepthStencilSCI::new(),
            color_blend   : ColorBlendSCI::new(),
            dynamics      : DynamicSCI::new(),
        }
    }

    #[inline]
    pub fn add_shader_stage(mut self, stage: ShaderStageCI) -> GraphicsPipelineCI {
        self.shader_stages.push(stage); self
    }

    #[inline(always)]
    pub fn set_vertex_input(mut self, sci: VertexInputSCI) -> GraphicsPipelineCI {
        self.vertex_input = sci; self
    }

    #[inline(always)]
    pub fn set_input_assembly(mut self, sci: InputAssemblySCI) -> GraphicsPipelineCI {
        self.input_assembly = sci; self
    }

    #[inline(always)]
    pub fn set_viewport(mut self, sci: ViewportSCI) -> GraphicsPipelineCI {
        self.viewport = sci; self
    }

    #[inline(always)]
    pub fn set_rasterization(mut self, sci: RasterizationSCI) -> GraphicsPipelineCI {
        self.rasterization = sci; self
    }

    #[inline(always)]
    pub fn set_multisample(mut self, sci: MultisampleSCI) -> GraphicsPipelineCI {
        self.multisample = sci; self
    }

    #[inline(always)]
    pub fn set_depth_stencil(mut self, sci: DepthStencilSCI) -> GraphicsPipelineCI {
        self.depth_stencil = sci; self
    }

    #[inline(always)]
    pub fn set_color_blend(mut self, sci: ColorBlendSCI) -> GraphicsPipelineCI {
        self.color_blend = sci; self
    }

    #[inline(always)]
    pub fn set_dynamic(mut self, sci: DynamicSCI) -> GraphicsPipelineCI {
        self.dynamics = sci; self
    }

    pub fn shader_stages(&self) -> &[ShaderStageCI] {
        &self.shader_stages
    }
}

impl VkObjectDiscardable for vk::Pipeline {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_pipeline(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layout_with_one_set() {
        let ci = PipelineLayoutCI::new().add_set_layout(vk::DescriptorSetLayout::null());
        let value = ci.value();

        assert_eq!(value.set_layout_count, 1);
        assert_eq!(value.p_set_layouts, ci.set_layouts.as_ptr());
        assert_eq!(value.push_constant_range_count, 0);
    }

    #[test]
    fn framebuffer_from_views() {
        let ci = FramebufferCI::new_2d(vk::RenderPass::null(), vk::Extent2D { width: 800, height: 600 })
            .add_attachment(vk::ImageView::null())
            .add_attachment(vk::ImageView::null());
        let value = ci.value();

        assert_eq!((value.width, value.height, value.layers), (800, 600, 1));
        assert_eq!(value.attachment_count, 2);
        assert_eq!(value.p_attachments, ci.attachments.as_ptr());
    }

    #[test]
    fn pipeline_keeps_stages_in_order() {
        let ci = GraphicsPipelineCI::new(vk::RenderPass::null(), vk::PipelineLayout::null())
            .add_shader_stage(ShaderStageCI::new(vk::ShaderStageFlags::VERTEX, vk::ShaderModule::null()))
            .add_shader_stage(ShaderStageCI::new(vk::ShaderStageFlags::FRAGMENT, vk::ShaderModule::null()));

        let stages: Vec<_> = ci.shader_stages().iter().map(ShaderStageCI::stage).collect();
        assert_eq!(stages, vec![vk::ShaderStageFlags::VERTEX, vk::ShaderStageFlags::FRAGMENT]);
        assert_eq!(ci.inner.subpass, 0);
        assert_eq!(ci.inner.base_pipeline_index, -1);
    }
}
