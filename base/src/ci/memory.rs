//! Types which simplify the allocation of Vulkan memory objects.

use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable};
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::utils::memory::find_memory_type_index;
use crate::error::{VkResult, VkError};
use crate::{vkuint, vkbytes};

// ----------------------------------------------------------------------------------------------
/// Wrapper class for `vk::MemoryAllocateInfo`.
///
/// See [VkMemoryAllocateInfo](https://www.khronos.org/registry/vulkan/specs/1.1-extensions/man/html/VkMemoryAllocateInfo.html) for more detail.
#[derive(Debug, Clone)]
pub struct MemoryAI {
    inner: vk::MemoryAllocateInfo<'static>,
}

impl VulkanCI<vk::MemoryAllocateInfo<'static>> for MemoryAI {

    fn default_ci() -> vk::MemoryAllocateInfo<'static> {

        vk::MemoryAllocateInfo::default()
            .allocation_size(0)
            .memory_type_index(0)
    }
}

impl VkObjectBuildableCI for MemoryAI {
    type ObjectType = vk::DeviceMemory;

    /// Allocate `vk::DeviceMemory` object, and return its handle.
    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let memory = unsafe {
            device.logic.handle.allocate_memory(&self.inner, None)
                .map_err(|e| VkError::create("Memory Allocate").caused_by(e))?
        };
        Ok(memory)
    }
}

impl MemoryAI {

    /// `allocation_size` is the size in bytes of the memory to be allocated.
    ///
    /// `memory_type_index` is the index identifying a memory type querying from Vulkan.
    pub fn new(allocation_size: vkbytes, memory_type_index: vkuint) -> MemoryAI {

        MemoryAI {
            inner: MemoryAI::default_ci()
                .allocation_size(allocation_size)
                .memory_type_index(memory_type_index),
        }
    }

    /// Allocation info that satisfies `requirement` with a memory type that has all the `properties`.
    pub fn with_requirement(device: &VkDevice, requirement: &vk::MemoryRequirements, properties: vk::MemoryPropertyFlags) -> VkResult<MemoryAI> {

        let memory_type = find_memory_type_index(&device.phy.memories, requirement.memory_type_bits, properties)
            .ok_or_else(|| VkError::unsupported(format!("Memory type with {:?}", properties)))?;

        Ok(MemoryAI::new(requirement.size, memory_type))
    }

    pub fn value(&self) -> vk::MemoryAllocateInfo<'_> {
        self.inner
    }
}

impl VkObjectDiscardable for vk::DeviceMemory {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.free_memory(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------
