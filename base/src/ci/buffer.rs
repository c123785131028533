
use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable, VkObjectBindable};
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::error::{VkResult, VkError};
use crate::{vkuint, vkbytes};

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::BufferCreateInfo.
#[derive(Debug, Clone)]
pub struct BufferCI {
    inner: vk::BufferCreateInfo<'static>,
    queue_families: Vec<vkuint>,
}

impl VulkanCI<vk::BufferCreateInfo<'static>> for BufferCI {

    fn default_ci() -> vk::BufferCreateInfo<'static> {

        vk::BufferCreateInfo::default()
            .flags(vk::BufferCreateFlags::empty())
            .usage(vk::BufferUsageFlags::empty())
            .sharing_mode(vk::SharingMode::EXCLUSIVE)
    }
}

impl VkObjectBuildableCI for BufferCI {
    type ObjectType = (vk::Buffer, vk::MemoryRequirements);

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let buffer = unsafe {
            device.logic.handle.create_buffer(&self.value(), None)
                .map_err(|e| VkError::create("Buffer").caused_by(e))?
        };

        let requirement = unsafe {
            device.logic.handle.get_buffer_memory_requirements(buffer)
        };

        Ok((buffer, requirement))
    }
}

impl BufferCI {

    pub fn new(size: vkbytes) -> BufferCI {

        BufferCI {
            inner: BufferCI::default_ci().size(size),
            queue_families: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::BufferCreateInfo<'_> {

        let ci: vk::BufferCreateInfo<'_> = self.inner;
        ci.queue_family_indices(&self.queue_families)
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::BufferCreateFlags) -> BufferCI {
        self.inner.flags = flags; self
    }

    #[inline(always)]
    pub fn usage(mut self, flags: vk::BufferUsageFlags) -> BufferCI {
        self.inner.usage = flags; self
    }

    #[inline(always)]
    pub fn sharing_queues(mut self, mode: vk::SharingMode, families_indices: Vec<vkuint>) -> BufferCI {
        self.queue_families = families_indices;
        self.inner.sharing_mode = mode; self
    }
}

impl VkObjectDiscardable for vk::Buffer {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_buffer(self, None)
        }
    }
}

impl VkObjectBindable for vk::Buffer {

    fn bind(self, device: &VkDevice, memory: vk::DeviceMemory, offset: vkbytes) -> VkResult<()> {
        unsafe {
            device.logic.handle.bind_buffer_memory(self, memory, offset)
                .map_err(|e| VkError::device("Binding Buffer Memory").caused_by(e))
        }
    }
}
// ----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uniform_buffer_ci() {
        let ci = BufferCI::new(64).usage(vk::BufferUsageFlags::UNIFORM_BUFFER);
        let value = ci.value();

        assert_eq!(value.size, 64);
        assert_eq!(value.usage, vk::BufferUsageFlags::UNIFORM_BUFFER);
        assert_eq!(value.sharing_mode, vk::SharingMode::EXCLUSIVE);
        assert_eq!(value.queue_family_index_count, 0);
    }

    #[test]
    fn shared_queues_are_attached() {
        let ci = BufferCI::new(32).sharing_queues(vk::SharingMode::CONCURRENT, vec![0, 2]);
        let value = ci.value();

        assert_eq!(value.sharing_mode, vk::SharingMode::CONCURRENT);
        assert_eq!(value.queue_family_index_count, 2);
        assert_eq!(value.p_queue_family_indices, ci.queue_families.as_ptr());
    }
}
