//! Wrappers of the fixed-function states of a graphics pipeline.

use ash::vk;

use crate::ci::VulkanCI;
use crate::vkfloat;

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineVertexInputStateCreateInfo.
#[derive(Debug, Clone)]
pub struct VertexInputSCI {

    inner: vk::PipelineVertexInputStateCreateInfo<'static>,
    bindings  : Vec<vk::VertexInputBindingDescription>,
    attributes: Vec<vk::VertexInputAttributeDescription>,
}

impl VulkanCI<vk::PipelineVertexInputStateCreateInfo<'static>> for VertexInputSCI {

    fn default_ci() -> vk::PipelineVertexInputStateCreateInfo<'static> {
        vk::PipelineVertexInputStateCreateInfo::default()
    }
}

impl VertexInputSCI {

    pub fn new() -> VertexInputSCI {

        VertexInputSCI {
            inner: VertexInputSCI::default_ci(),
            bindings  : Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::PipelineVertexInputStateCreateInfo<'_> {

        let ci: vk::PipelineVertexInputStateCreateInfo<'_> = self.inner;
        ci.vertex_binding_descriptions(&self.bindings)
            .vertex_attribute_descriptions(&self.attributes)
    }

    #[inline]
    pub fn add_binding(mut self, binding: vk::VertexInputBindingDescription) -> VertexInputSCI {
        self.bindings.push(binding); self
    }

    #[inline]
    pub fn add_attribute(mut self, attribute: vk::VertexInputAttributeDescription) -> VertexInputSCI {
        self.attributes.push(attribute); self
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineInputAssemblyStateCreateInfo.
///
/// Triangle list without primitive restart by default.
#[derive(Debug, Clone)]
pub struct InputAssemblySCI {
    inner: vk::PipelineInputAssemblyStateCreateInfo<'static>,
}

impl VulkanCI<vk::PipelineInputAssemblyStateCreateInfo<'static>> for InputAssemblySCI {

    fn default_ci() -> vk::PipelineInputAssemblyStateCreateInfo<'static> {

        vk::PipelineInputAssemblyStateCreateInfo::default()
            .topology(vk::PrimitiveTopology::TRIANGLE_LIST)
            .primitive_restart_enable(false)
    }
}

impl InputAssemblySCI {

    pub fn new() -> InputAssemblySCI {
        InputAssemblySCI { inner: InputAssemblySCI::default_ci() }
    }

    pub fn value(&self) -> vk::PipelineInputAssemblyStateCreateInfo<'_> {
        self.inner
    }

    #[inline(always)]
    pub fn topology(mut self, topology: vk::PrimitiveTopology) -> InputAssemblySCI {
        self.inner.topology = topology; self
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineRasterizationStateCreateInfo.
#[derive(Debug, Clone)]
pub struct RasterizationSCI {
    inner: vk::PipelineRasterizationStateCreateInfo<'static>,
}

impl VulkanCI<vk::PipelineRasterizationStateCreateInfo<'static>> for RasterizationSCI {

    fn default_ci() -> vk::PipelineRasterizationStateCreateInfo<'static> {

        vk::PipelineRasterizationStateCreateInfo::default()
            .depth_clamp_enable(false)
            .rasterizer_discard_enable(false)
            .polygon_mode(vk::PolygonMode::FILL)
            .cull_mode(vk::CullModeFlags::BACK)
            .front_face(vk::FrontFace::CLOCKWISE)
            .depth_bias_enable(false)
            .depth_bias_constant_factor(0.0)
            .depth_bias_clamp(0.0)
            .depth_bias_slope_factor(0.0)
            .line_width(1.0)
    }
}

impl RasterizationSCI {

    pub fn new() -> RasterizationSCI {
        RasterizationSCI { inner: RasterizationSCI::default_ci() }
    }

    pub fn value(&self) -> vk::PipelineRasterizationStateCreateInfo<'_> {
        self.inner
    }

    /// Enabling depth clamp requires the `depth_clamp` device feature.
    #[inline(always)]
    pub fn depth_clamp(mut self, is_enable: bool) -> RasterizationSCI {
        self.inner.depth_clamp_enable = if is_enable { vk::TRUE } else { vk::FALSE }; self
    }

    #[inline(always)]
    pub fn cull_face(mut self, mode: vk::CullModeFlags, front_face: vk::FrontFace) -> RasterizationSCI {
        self.inner.cull_mode = mode;
        self.inner.front_face = front_face; self
    }

    #[inline(always)]
    pub fn line_width(mut self, width: vkfloat) -> RasterizationSCI {
        self.inner.line_width = width; self
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineColorBlendStateCreateInfo.
#[derive(Debug, Clone)]
pub struct ColorBlendSCI {

    inner: vk::PipelineColorBlendStateCreateInfo<'static>,
    attachments: Vec<vk::PipelineColorBlendAttachmentState>,
}

impl VulkanCI<vk::PipelineColorBlendStateCreateInfo<'static>> for ColorBlendSCI {

    fn default_ci() -> vk::PipelineColorBlendStateCreateInfo<'static> {

        vk::PipelineColorBlendStateCreateInfo::default()
            .logic_op_enable(false)
            .logic_op(vk::LogicOp::NO_OP)
            .blend_constants([1.0; 4])
    }
}

impl ColorBlendSCI {

    pub fn new() -> ColorBlendSCI {

        ColorBlendSCI {
            inner: ColorBlendSCI::default_ci(),
            attachments: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::PipelineColorBlendStateCreateInfo<'_> {

        let ci: vk::PipelineColorBlendStateCreateInfo<'_> = self.inner;
        ci.attachments(&self.attachments)
    }

    #[inline]
    pub fn add_attachment(mut self, attachment: BlendAttachmentSCI) -> ColorBlendSCI {
        self.attachments.push(attachment.into()); self
    }

    #[inline(always)]
    pub fn logic_op(mut self, is_enable: bool, op: vk::LogicOp) -> ColorBlendSCI {
        self.inner.logic_op_enable = if is_enable { vk::TRUE } else { vk::FALSE };
        self.inner.logic_op = op; self
    }

    #[inline(always)]
    pub fn blend_constants(mut self, constants: [vkfloat; 4]) -> ColorBlendSCI {
        self.inner.blend_constants = constants; self
    }
}

/// Wrapper class for vk::PipelineColorBlendAttachmentState.
///
/// Blending is disabled, factors are ZERO and ops are ADD, and all the RGBA components are written.
#[derive(Debug, Clone)]
pub struct BlendAttachmentSCI {
    inner: vk::PipelineColorBlendAttachmentState,
}

impl VulkanCI<vk::PipelineColorBlendAttachmentState> for BlendAttachmentSCI {

    fn default_ci() -> vk::PipelineColorBlendAttachmentState {

        vk::PipelineColorBlendAttachmentState::default()
            .blend_enable(false)
            .src_color_blend_factor(vk::BlendFactor::ZERO)
            .dst_color_blend_factor(vk::BlendFactor::ZERO)
            .color_blend_op(vk::BlendOp::ADD)
            .src_alpha_blend_factor(vk::BlendFactor::ZERO)
            .dst_alpha_blend_factor(vk::BlendFactor::ZERO)
            .alpha_blend_op(vk::BlendOp::ADD)
            .color_write_mask(
                vk::ColorComponentFlags::R |
                vk::ColorComponentFlags::G |
                vk::ColorComponentFlags::B |
                vk::ColorComponentFlags::A)
    }
}

impl BlendAttachmentSCI {

    pub fn new() -> BlendAttachmentSCI {
        BlendAttachmentSCI { inner: BlendAttachmentSCI::default_ci() }
    }

    #[inline(always)]
    pub fn blend_enable(mut self, is_enable: bool) -> BlendAttachmentSCI {
        self.inner.blend_enable = if is_enable { vk::TRUE } else { vk::FALSE }; self
    }

    #[inline(always)]
    pub fn color(mut self, op: vk::BlendOp, src_factor: vk::BlendFactor, dst_factor: vk::BlendFactor) -> BlendAttachmentSCI {
        self.inner.color_blend_op = op;
        self.inner.src_color_blend_factor = src_factor;
        self.inner.dst_color_blend_factor = dst_factor; self
    }

    #[inline(always)]
    pub fn color_write_mask(mut self, mask: vk::ColorComponentFlags) -> BlendAttachmentSCI {
        self.inner.color_write_mask = mask; self
    }
}

impl From<BlendAttachmentSCI> for vk::PipelineColorBlendAttachmentState {

    fn from(value: BlendAttachmentSCI) -> vk::PipelineColorBlendAttachmentState {
        value.inner
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineViewportStateCreateInfo.
///
/// Scissors, and viewports that are not added, are counted only and must be set dynamically.
#[derive(Debug, Clone)]
pub struct ViewportSCI {

    inner: vk::PipelineViewportStateCreateInfo<'static>,
    viewports: Vec<vk::Viewport>,
}

impl VulkanCI<vk::PipelineViewportStateCreateInfo<'static>> for ViewportSCI {

    fn default_ci() -> vk::PipelineViewportStateCreateInfo<'static> {

        vk::PipelineViewportStateCreateInfo::default()
            .viewport_count(0)
            .scissor_count(0)
    }
}

impl ViewportSCI {

    pub fn new() -> ViewportSCI {

        ViewportSCI {
            inner: ViewportSCI::default_ci(),
            viewports: Vec::new(),
        }
    }

    /// Declare `viewport_count` viewports and `scissor_count` scissors, whose values are dynamic states.
    pub fn dynamic(viewport_count: u32, scissor_count: u32) -> ViewportSCI {

        ViewportSCI {
            inner: ViewportSCI::default_ci()
                .viewport_count(viewport_count)
                .scissor_count(scissor_count),
            viewports: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::PipelineViewportStateCreateInfo<'_> {

        let mut ci: vk::PipelineViewportStateCreateInfo<'_> = self.inner;
        if !self.viewports.is_empty() {
            ci = ci.viewports(&self.viewports);
        }
        ci
    }

    #[inline]
    pub fn add_viewport(mut self, viewport: vk::Viewport) -> ViewportSCI {
        self.viewports.push(viewport);
        self.inner.viewport_count = self.viewports.len() as _; self
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineDepthStencilStateCreateInfo.
///
/// Depth test and write are on with LESS_OR_EQUAL compare; bounds test and stencil test are off.
#[derive(Debug, Clone)]
pub struct DepthStencilSCI {
    inner: vk::PipelineDepthStencilStateCreateInfo<'static>,
}

impl VulkanCI<vk::PipelineDepthStencilStateCreateInfo<'static>> for DepthStencilSCI {

    fn default_ci() -> vk::PipelineDepthStencilStateCreateInfo<'static> {

        let stencil_op = vk::StencilOpState {
            fail_op       : vk::StencilOp::KEEP,
            pass_op       : vk::StencilOp::KEEP,
            depth_fail_op : vk::StencilOp::KEEP,
            compare_op    : vk::CompareOp::ALWAYS,
            compare_mask  : 0,
            write_mask    : 0,
            reference     : 0,
        };

        vk::PipelineDepthStencilStateCreateInfo::default()
            .depth_test_enable(true)
            .depth_write_enable(true)
            .depth_compare_op(vk::CompareOp::LESS_OR_EQUAL)
            .depth_bounds_test_enable(false)
            .min_depth_bounds(0.0)
            .max_depth_bounds(0.0)
            .stencil_test_enable(false)
            .front(stencil_op)
            .back(stencil_op)
    }
}

impl DepthStencilSCI {

    pub fn new() -> DepthStencilSCI {
        DepthStencilSCI { inner: DepthStencilSCI::default_ci() }
    }

    pub fn value(&self) -> vk::PipelineDepthStencilStateCreateInfo<'_> {
        self.inner
    }

    #[inline(always)]
    pub fn stencil(mut self, is_enable: bool, front: vk::StencilOpState, back: vk::StencilOpState) -> DepthStencilSCI {
        self.inner.stencil_test_enable = if is_enable { vk::TRUE } else { vk::FALSE };
        self.inner.front = front;
        self.inner.back = back; self
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineMultisampleStateCreateInfo.
#[derive(Debug, Clone)]
pub struct MultisampleSCI {
    inner: vk::PipelineMultisampleStateCreateInfo<'static>,
}

impl VulkanCI<vk::PipelineMultisampleStateCreateInfo<'static>> for MultisampleSCI {

    fn default_ci() -> vk::PipelineMultisampleStateCreateInfo<'static> {

        vk::PipelineMultisampleStateCreateInfo::default()
            .rasterization_samples(vk::SampleCountFlags::TYPE_1)
            .sample_shading_enable(false)
            .min_sample_shading(0.0)
            .alpha_to_coverage_enable(false)
            .alpha_to_one_enable(false)
    }
}

impl MultisampleSCI {

    pub fn new() -> MultisampleSCI {
        MultisampleSCI { inner: MultisampleSCI::default_ci() }
    }

    pub fn value(&self) -> vk::PipelineMultisampleStateCreateInfo<'_> {
        self.inner
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineDynamicStateCreateInfo.
#[derive(Debug, Clone)]
pub struct DynamicSCI {

    inner: vk::PipelineDynamicStateCreateInfo<'static>,
    dynamics: Vec<vk::DynamicState>,
}

impl VulkanCI<vk::PipelineDynamicStateCreateInfo<'static>> for DynamicSCI {

    fn default_ci() -> vk::PipelineDynamicStateCreateInfo<'static> {
        vk::PipelineDynamicStateCreateInfo::default()
    }
}

impl DynamicSCI {

    pub fn new() -> DynamicSCI {

        DynamicSCI {
            inner: DynamicSCI::default_ci(),
            dynamics: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::PipelineDynamicStateCreateInfo<'_> {

        let ci: vk::PipelineDynamicStateCreateInfo<'_> = self.inner;
        ci.dynamic_states(&self.dynamics)
    }

    #[inline]
    pub fn add_dynamic(mut self, state: vk::DynamicState) -> DynamicSCI {
        self.dynamics.push(state); self
    }

    pub fn is_empty(&self) -> bool {
        self.dynamics.is_empty()
    }
}
// ----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vertex_input_counts() {
        let sci = VertexInputSCI::new()
            .add_binding(vk::VertexInputBindingDescription {
                binding: 0,
                stride: 32,
                input_rate: vk::VertexInputRate::VERTEX,
            })
            .add_attribute(vk::VertexInputAttributeDescription { location: 0, binding: 0, format: vk::Format::R32G32B32A32_SFLOAT, offset: 0 })
            .add_attribute(vk::VertexInputAttributeDescription { location: 1, binding: 0, format: vk::Format::R32G32B32A32_SFLOAT, offset: 16 });
        let value = sci.value();

        assert_eq!(value.vertex_binding_description_count, 1);
        assert_eq!(value.vertex_attribute_description_count, 2);
        assert_eq!(value.p_vertex_attribute_descriptions, sci.attributes.as_ptr());
    }

    #[test]
    fn dynamic_viewport_has_no_pointers() {
        let sci = ViewportSCI::dynamic(1, 1);
        let value = sci.value();

        assert_eq!(value.viewport_count, 1);
        assert_eq!(value.scissor_count, 1);
        assert!(value.p_viewports.is_null());
        assert!(value.p_scissors.is_null());
    }

    #[test]
    fn static_viewport_is_attached() {
        let sci = ViewportSCI::new().add_viewport(vk::Viewport {
            x: 0.0, y: 0.0, width: 640.0, height: 480.0, min_depth: 0.0, max_depth: 1.0,
        });
        let value = sci.value();

        assert_eq!(value.viewport_count, 1);
        assert_eq!(value.p_viewports, sci.viewports.as_ptr());
        assert_eq!(value.scissor_count, 0);
    }

    #[test]
    fn default_fixed_function_state() {
        let raster_sci = RasterizationSCI::new().depth_clamp(true);
        let raster = raster_sci.value();
        assert_eq!(raster.depth_clamp_enable, vk::TRUE);
        assert_eq!(raster.cull_mode, vk::CullModeFlags::BACK);
        assert_eq!(raster.front_face, vk::FrontFace::CLOCKWISE);
        assert_eq!(raster.line_width, 1.0);

        let depth_sci = DepthStencilSCI::new();
        let depth = depth_sci.value();
        assert_eq!(depth.depth_compare_op, vk::CompareOp::LESS_OR_EQUAL);
        assert_eq!(depth.back.compare_op, vk::CompareOp::ALWAYS);
        assert_eq!(depth.stencil_test_enable, vk::FALSE);

        let blend = ColorBlendSCI::new().add_attachment(BlendAttachmentSCI::new());
        let value = blend.value();
        assert_eq!(value.attachment_count, 1);
        assert_eq!(value.blend_constants, [1.0; 4]);
        assert!(blend.attachments[0].color_write_mask.contains(vk::ColorComponentFlags::R | vk::ColorComponentFlags::A));
        assert_eq!(blend.attachments[0].blend_enable, vk::FALSE);
    }

    #[test]
    fn dynamic_states_are_counted() {
        let sci = DynamicSCI::new()
            .add_dynamic(vk::DynamicState::VIEWPORT)
            .add_dynamic(vk::DynamicState::SCISSOR);

        assert!(!sci.is_empty());
        assert_eq!(sci.value().dynamic_state_count, 2);
    }
}
