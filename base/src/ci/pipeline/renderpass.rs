
use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable};
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::error::{VkResult, VkError};
use crate::vkuint;

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::RenderPassCreateInfo.
#[derive(Debug, Clone)]
pub struct RenderPassCI {

    inner: vk::RenderPassCreateInfo<'static>,
    attachments: Vec<vk::AttachmentDescription>,
    subpasses  : Vec<SubpassDescCI>,
}

impl VulkanCI<vk::RenderPassCreateInfo<'static>> for RenderPassCI {

    fn default_ci() -> vk::RenderPassCreateInfo<'static> {

        vk::RenderPassCreateInfo::default()
            .flags(vk::RenderPassCreateFlags::empty())
    }
}

impl VkObjectBuildableCI for RenderPassCI {
    type ObjectType = vk::RenderPass;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        debug_assert!(!self.subpasses.is_empty(), "A render pass must have at least one subpass!");

        let subpasses: Vec<vk::SubpassDescription> = self.subpasses.iter()
            .map(SubpassDescCI::value)
            .collect();

        let ci: vk::RenderPassCreateInfo = self.inner;
        let render_pass_ci = ci
            .attachments(&self.attachments)
            .subpasses(&subpasses);

        let render_pass = unsafe {
            device.logic.handle.create_render_pass(&render_pass_ci, None)
                .map_err(|e| VkError::create("Render Pass").caused_by(e))?
        };
        Ok(render_pass)
    }
}

impl RenderPassCI {

    pub fn new() -> RenderPassCI {

        RenderPassCI {
            inner: RenderPassCI::default_ci(),
            attachments: Vec::new(),
            subpasses  : Vec::new(),
        }
    }

    /// Attachments are referenced by subpasses in the order they are added.
    #[inline]
    pub fn add_attachment(mut self, attachment: AttachmentDescCI) -> RenderPassCI {
        self.attachments.push(attachment.into()); self
    }

    #[inline]
    pub fn add_subpass(mut self, subpass: SubpassDescCI) -> RenderPassCI {
        self.subpasses.push(subpass); self
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::RenderPassCreateFlags) -> RenderPassCI {
        self.inner.flags = flags; self
    }

    pub fn attachments(&self) -> &[vk::AttachmentDescription] {
        &self.attachments
    }

    pub fn subpasses(&self) -> &[SubpassDescCI] {
        &self.subpasses
    }
}

impl VkObjectDiscardable for vk::RenderPass {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_render_pass(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::AttachmentDescription.
///
/// One sample, stencil is not loaded nor stored, and the initial layout is UNDEFINED.
#[derive(Debug, Clone)]
pub struct AttachmentDescCI {
    inner: vk::AttachmentDescription,
}

impl VulkanCI<vk::AttachmentDescription> for AttachmentDescCI {

    fn default_ci() -> vk::AttachmentDescription {

        vk::AttachmentDescription::default()
            .samples(vk::SampleCountFlags::TYPE_1)
            .load_op(vk::AttachmentLoadOp::DONT_CARE)
            .store_op(vk::AttachmentStoreOp::DONT_CARE)
            .stencil_load_op(vk::AttachmentLoadOp::DONT_CARE)
            .stencil_store_op(vk::AttachmentStoreOp::DONT_CARE)
            .initial_layout(vk::ImageLayout::UNDEFINED)
    }
}

impl AttachmentDescCI {

    pub fn new(format: vk::Format) -> AttachmentDescCI {

        AttachmentDescCI {
            inner: AttachmentDescCI::default_ci().format(format),
        }
    }

    #[inline(always)]
    pub fn op(mut self, load: vk::AttachmentLoadOp, store: vk::AttachmentStoreOp) -> AttachmentDescCI {
        self.inner.load_op = load;
        self.inner.store_op = store; self
    }

    #[inline(always)]
    pub fn stencil_op(mut self, load: vk::AttachmentLoadOp, store: vk::AttachmentStoreOp) -> AttachmentDescCI {
        self.inner.stencil_load_op = load;
        self.inner.stencil_store_op = store; self
    }

    #[inline(always)]
    pub fn layout(mut self, initial: vk::ImageLayout, r#final: vk::ImageLayout) -> AttachmentDescCI {
        self.inner.initial_layout = initial;
        self.inner.final_layout = r#final; self
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::AttachmentDescriptionFlags) -> AttachmentDescCI {
        self.inner.flags = flags; self
    }
}

impl From<AttachmentDescCI> for vk::AttachmentDescription {

    fn from(value: AttachmentDescCI) -> vk::AttachmentDescription {
        value.inner
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::SubpassDescription.
#[derive(Debug, Clone)]
pub struct SubpassDescCI {

    inner: vk::SubpassDescription<'static>,

    colors: Vec<vk::AttachmentReference>,
    depth_stencil: Option<vk::AttachmentReference>,
}

impl VulkanCI<vk::SubpassDescription<'static>> for SubpassDescCI {

    fn default_ci() -> vk::SubpassDescription<'static> {

        vk::SubpassDescription::default()
            .flags(vk::SubpassDescriptionFlags::empty())
            .pipeline_bind_point(vk::PipelineBindPoint::GRAPHICS)
    }
}

impl SubpassDescCI {

    pub fn new(bind_point: vk::PipelineBindPoint) -> SubpassDescCI {

        SubpassDescCI {
            inner: SubpassDescCI::default_ci().pipeline_bind_point(bind_point),
            colors: Vec::new(),
            depth_stencil: None,
        }
    }

    pub fn value(&self) -> vk::SubpassDescription<'_> {

        let desc: vk::SubpassDescription<'_> = self.inner;
        let desc = desc.color_attachments(&self.colors);

        match self.depth_stencil {
            | Some(ref depth_stencil) => desc.depth_stencil_attachment(depth_stencil),
            | None => desc,
        }
    }

    #[inline]
    pub fn add_color_attachment(mut self, attachment_index: vkuint, image_layout: vk::ImageLayout) -> SubpassDescCI {

        self.colors.push(vk::AttachmentReference {
            attachment: attachment_index,
            layout: image_layout,
        }); self
    }

    #[inline]
    pub fn set_depth_stencil_attachment(mut self, attachment_index: vkuint, image_layout: vk::ImageLayout) -> SubpassDescCI {

        self.depth_stencil = Some(vk::AttachmentReference {
            attachment: attachment_index,
            layout: image_layout,
        }); self
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::SubpassDescriptionFlags) -> SubpassDescCI {
        self.inner.flags = flags; self
    }
}
// ----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn color_and_depth_subpass() {
        let subpass = SubpassDescCI::new(vk::PipelineBindPoint::GRAPHICS)
            .add_color_attachment(0, vk::ImageLayout::COLOR_ATTACHMENT_OPTIMAL)
            .set_depth_stencil_attachment(1, vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL);
        let value = subpass.value();

        assert_eq!(value.pipeline_bind_point, vk::PipelineBindPoint::GRAPHICS);
        assert_eq!(value.color_attachment_count, 1);
        assert_eq!(value.p_color_attachments, subpass.colors.as_ptr());
        assert_eq!(value.input_attachment_count, 0);
        assert!(!value.p_depth_stencil_attachment.is_null());

        let depth = unsafe { *value.p_depth_stencil_attachment };
        assert_eq!(depth.attachment, 1);
        assert_eq!(depth.layout, vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL);
    }

    #[test]
    fn subpass_without_depth() {
        let subpass = SubpassDescCI::new(vk::PipelineBindPoint::GRAPHICS);
        assert!(subpass.value().p_depth_stencil_attachment.is_null());
    }

    #[test]
    fn attachments_keep_their_order() {
        let color = AttachmentDescCI::new(vk::Format::B8G8R8A8_UNORM)
            .op(vk::AttachmentLoadOp::CLEAR, vk::AttachmentStoreOp::STORE)
            .layout(vk::ImageLayout::UNDEFINED, vk::ImageLayout::PRESENT_SRC_KHR);
        let depth = AttachmentDescCI::new(vk::Format::D16_UNORM)
            .op(vk::AttachmentLoadOp::CLEAR, vk::AttachmentStoreOp::DONT_CARE)
            .layout(vk::ImageLayout::UNDEFINED, vk::ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL);

        let render_pass = RenderPassCI::new()
            .add_attachment(color)
            .add_attachment(depth)
            .add_subpass(SubpassDescCI::new(vk::PipelineBindPoint::GRAPHICS));

        let attachments = render_pass.attachments();
        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].final_layout, vk::ImageLayout::PRESENT_SRC_KHR);
        assert_eq!(attachments[0].store_op, vk::AttachmentStoreOp::STORE);
        assert_eq!(attachments[1].format, vk::Format::D16_UNORM);
        assert_eq!(attachments[1].stencil_load_op, vk::AttachmentLoadOp::DONT_CARE);
        assert_eq!(render_pass.subpasses().len(), 1);
    }
}
