//! The depth image and host-visible buffers created by the later samples.
//!
//! Destroying a null handle is a no-op in Vulkan, so a half-built resource can be discarded as a whole.

use ash::vk;

use vkbase::context::{VkInstance, VkDevice, select_depth_tiling};
use vkbase::ci::image::{ImageCI, ImageViewCI};
use vkbase::ci::buffer::BufferCI;
use vkbase::ci::memory::MemoryAI;
use vkbase::utils::memory::copy_to_memory;
use vkbase::{VkResult, VkError};
use vkbase::vkbytes;

pub const DEPTH_FORMAT: vk::Format = vk::Format::D16_UNORM;

/// A device-local depth attachment and its view.
pub struct DepthImage {

    pub image : vk::Image,
    pub view  : vk::ImageView,
    pub memory: vk::DeviceMemory,
    pub format: vk::Format,
}

impl DepthImage {

    pub fn new(instance: &VkInstance, device: &VkDevice, dimension: vk::Extent2D) -> VkResult<DepthImage> {

        let mut depth = DepthImage {
            image : vk::Image::null(),
            view  : vk::ImageView::null(),
            memory: vk::DeviceMemory::null(),
            format: DEPTH_FORMAT,
        };

        match depth.setup(instance, device, dimension) {
            | Ok(_) => Ok(depth),
            | Err(e) => {
                depth.discard(device);
                Err(e)
            },
        }
    }

    fn setup(&mut self, instance: &VkInstance, device: &VkDevice, dimension: vk::Extent2D) -> VkResult<()> {

        let format_properties = device.phy.query_format_properties(instance, self.format);
        let tiling = select_depth_tiling(&format_properties)
            .ok_or_else(|| VkError::unsupported(format!("Depth attachment with {:?}", self.format)))?;

        let image_ci = ImageCI::new_2d(self.format, dimension)
            .usages(vk::ImageUsageFlags::DEPTH_STENCIL_ATTACHMENT)
            .tiling(tiling)
            .samples(vk::SampleCountFlags::TYPE_1)
            .initial_layout(vk::ImageLayout::UNDEFINED);

        let (image, requirement) = device.build(&image_ci)?;
        self.image = image;

        let memory_ai = MemoryAI::with_requirement(device, &requirement, vk::MemoryPropertyFlags::DEVICE_LOCAL)?;
        self.memory = device.build(&memory_ai)?;
        device.bind(self.image, self.memory, 0)?;

        let view_ci = ImageViewCI::new(self.image, vk::ImageViewType::TYPE_2D, self.format)
            .aspect_mask(vk::ImageAspectFlags::DEPTH);
        self.view = device.build(&view_ci)?;

        tracing::debug!(tiling = ?tiling, width = dimension.width, height = dimension.height, "created depth image");

        Ok(())
    }

    pub fn discard(&self, device: &VkDevice) {

        device.discard(self.view);
        device.discard(self.image);
        device.discard(self.memory);
    }
}

/// A buffer in HOST_VISIBLE | HOST_COHERENT memory, filled once at creation.
pub struct HostBuffer {

    pub buffer: vk::Buffer,
    pub memory: vk::DeviceMemory,
    /// the size of the data in bytes.
    pub size: vkbytes,
}

impl HostBuffer {

    pub fn new<T: Copy>(device: &VkDevice, usage: vk::BufferUsageFlags, data: &[T]) -> VkResult<HostBuffer> {

        let mut target = HostBuffer {
            buffer: vk::Buffer::null(),
            memory: vk::DeviceMemory::null(),
            size: std::mem::size_of_val(data) as vkbytes,
        };

        match target.setup(device, usage, data) {
            | Ok(_) => Ok(target),
            | Err(e) => {
                target.discard(device);
                Err(e)
            },
        }
    }

    fn setup<T: Copy>(&mut self, device: &VkDevice, usage: vk::BufferUsageFlags, data: &[T]) -> VkResult<()> {

        let (buffer, requirement) = device.build(&BufferCI::new(self.size).usage(usage))?;
        self.buffer = buffer;

        let properties = vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_COHERENT;
        let memory_ai = MemoryAI::with_requirement(device, &requirement, properties)?;
        self.memory = device.build(&memory_ai)?;

        copy_to_memory(device, self.memory, data)?;
        device.bind(self.buffer, self.memory, 0)?;

        tracing::debug!(usage = ?usage, size = self.size, "created host buffer");

        Ok(())
    }

    /// The whole buffer, for a descriptor write.
    pub fn descriptor(&self) -> vk::DescriptorBufferInfo {

        vk::DescriptorBufferInfo {
            buffer: self.buffer,
            offset: 0,
            range : self.size,
        }
    }

    pub fn discard(&self, device: &VkDevice) {

        device.discard(self.buffer);
        device.discard(self.memory);
    }
}
