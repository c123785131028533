
use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable, VkObjectBindable};
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::error::{VkResult, VkError};
use crate::{vkbytes, vkuint};

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::ImageCreateInfo.
#[derive(Debug, Clone)]
pub struct ImageCI {

    inner: vk::ImageCreateInfo<'static>,
    queue_families: Vec<vkuint>,
}

impl VulkanCI<vk::ImageCreateInfo<'static>> for ImageCI {

    fn default_ci() -> vk::ImageCreateInfo<'static> {

        vk::ImageCreateInfo::default()
            .image_type(vk::ImageType::TYPE_2D)
            .format(vk::Format::UNDEFINED)
            .mip_levels(1)
            .array_layers(1)
            .samples(vk::SampleCountFlags::TYPE_1)
            .tiling(vk::ImageTiling::OPTIMAL)
            .sharing_mode(vk::SharingMode::EXCLUSIVE)
            .initial_layout(vk::ImageLayout::UNDEFINED)
    }
}

impl VkObjectBuildableCI for ImageCI {
    type ObjectType = (vk::Image, vk::MemoryRequirements);

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let image = unsafe {
            device.logic.handle.create_image(&self.value(), None)
                .map_err(|e| VkError::create("Image").caused_by(e))?
        };

        let requirement = unsafe {
            device.logic.handle.get_image_memory_requirements(image)
        };

        Ok((image, requirement))
    }
}

impl ImageCI {

    pub fn new(r#type: vk::ImageType, format: vk::Format, dimension: vk::Extent3D) -> ImageCI {

        ImageCI {
            inner: ImageCI::default_ci()
                .image_type(r#type)
                .format(format)
                .extent(dimension),
            queue_families: Vec::new(),
        }
    }

    pub fn new_2d(format: vk::Format, dimension: vk::Extent2D) -> ImageCI {

        let extent = vk::Extent3D {
            width : dimension.width,
            height: dimension.height,
            depth : 1,
        };

        ImageCI::new(vk::ImageType::TYPE_2D, format, extent)
    }

    pub fn value(&self) -> vk::ImageCreateInfo<'_> {

        let ci: vk::ImageCreateInfo<'_> = self.inner;
        ci.queue_family_indices(&self.queue_families)
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::ImageCreateFlags) -> ImageCI {
        self.inner.flags = flags; self
    }

    #[inline(always)]
    pub fn usages(mut self, flags: vk::ImageUsageFlags) -> ImageCI {
        self.inner.usage = flags; self
    }

    #[inline(always)]
    pub fn tiling(mut self, tiling: vk::ImageTiling) -> ImageCI {
        self.inner.tiling = tiling; self
    }

    #[inline(always)]
    pub fn samples(mut self, count: vk::SampleCountFlags) -> ImageCI {
        self.inner.samples = count; self
    }

    #[inline(always)]
    pub fn initial_layout(mut self, layout: vk::ImageLayout) -> ImageCI {
        self.inner.initial_layout = layout; self
    }

    #[inline(always)]
    pub fn sharing_queues(mut self, mode: vk::SharingMode, families_indices: Vec<vkuint>) -> ImageCI {
        self.queue_families = families_indices;
        self.inner.sharing_mode = mode; self
    }
}

impl VkObjectDiscardable for vk::Image {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_image(self, None);
        }
    }
}

impl VkObjectBindable for vk::Image {

    fn bind(self, device: &VkDevice, memory: vk::DeviceMemory, offset: vkbytes) -> VkResult<()> {
        unsafe {
            device.logic.handle.bind_image_memory(self, memory, offset)
                .map_err(|e| VkError::device("Binding Image Memory").caused_by(e))
        }
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::ImageViewCreateInfo.
///
/// Components are mapped with identity swizzle, and the subresource range covers the first mip level and array layer.
#[derive(Debug, Clone)]
pub struct ImageViewCI {
    inner: vk::ImageViewCreateInfo<'static>,
}

impl VulkanCI<vk::ImageViewCreateInfo<'static>> for ImageViewCI {

    fn default_ci() -> vk::ImageViewCreateInfo<'static> {

        vk::ImageViewCreateInfo::default()
            .view_type(vk::ImageViewType::TYPE_2D)
            .components(vk::ComponentMapping {
                r: vk::ComponentSwizzle::R,
                g: vk::ComponentSwizzle::G,
                b: vk::ComponentSwizzle::B,
                a: vk::ComponentSwizzle::A,
            })
            .subresource_range(vk::ImageSubresourceRange {
                aspect_mask      : vk::ImageAspectFlags::COLOR,
                base_mip_level   : 0,
                level_count      : 1,
                base_array_layer : 0,
                layer_count      : 1,
            })
    }
}

impl VkObjectBuildableCI for ImageViewCI {
    type ObjectType = vk::ImageView;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let view = unsafe {
            device.logic.handle.create_image_view(&self.inner, None)
                .map_err(|e| VkError::create("Image View").caused_by(e))?
        };
        Ok(view)
    }
}

impl ImageViewCI {

    pub fn new(image: vk::Image, r#type: vk::ImageViewType, format: vk::Format) -> ImageViewCI {

        ImageViewCI {
            inner: ImageViewCI::default_ci()
                .image(image)
                .view_type(r#type)
                .format(format),
        }
    }

    pub fn value(&self) -> vk::ImageViewCreateInfo<'_> {
        self.inner
    }

    #[inline(always)]
    pub fn components(mut self, components: vk::ComponentMapping) -> ImageViewCI {
        self.inner.components = components; self
    }

    #[inline(always)]
    pub fn aspect_mask(mut self, aspect: vk::ImageAspectFlags) -> ImageViewCI {
        self.inner.subresource_range.aspect_mask = aspect; self
    }
}

impl VkObjectDiscardable for vk::ImageView {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_image_view(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn depth_image_ci() {
        let ci = ImageCI::new_2d(vk::Format::D16_UNORM, vk::Extent2D { width: 640, height: 480 })
            .usages(vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT)
            .tiling(vk::ImageTiling::LINEAR);
        let value = ci.value();

        assert_eq!(value.format, vk::Format::D16_UNORM);
        assert_eq!((value.extent.width, value.extent.height, value.extent.depth), (640, 480, 1));
        assert_eq!(value.tiling, vk::ImageTiling::LINEAR);
        assert_eq!(value.samples, vk::SampleCountFlags::TYPE_1);
        assert_eq!((value.mip_levels, value.array_layers), (1, 1));
        assert_eq!(value.initial_layout, vk::ImageLayout::UNDEFINED);
        assert_eq!(value.queue_family_index_count, 0);
    }

    #[test]
    fn image_sharing_queues() {
        let ci = ImageCI::new_2d(vk::Format::D16_UNORM, vk::Extent2D { width: 1, height: 1 })
            .sharing_queues(vk::SharingMode::CONCURRENT, vec![1, 3]);
        let value = ci.value();

        assert_eq!(value.queue_family_index_count, 2);
        assert_eq!(value.p_queue_family_indices, ci.queue_families.as_ptr());
    }

    #[test]
    fn view_uses_identity_swizzle() {
        let ci = ImageViewCI::new(vk::Image::null(), vk::ImageViewType::TYPE_2D, vk::Format::D16_UNORM)
            .aspect_mask(vk::ImageAspectFlags::DEPTH);
        let value = ci.value();

        assert_eq!(value.components.r, vk::ComponentSwizzle::R);
        assert_eq!(value.components.a, vk::ComponentSwizzle::A);
        assert_eq!(value.subresource_range.aspect_mask, vk::ImageAspectFlags::DEPTH);
        assert_eq!(value.subresource_range.level_count, 1);
        assert_eq!(value.subresource_range.layer_count, 1);
    }
}
