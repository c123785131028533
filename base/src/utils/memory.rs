
use ash::vk;

use crate::context::VkDevice;
use crate::error::{VkResult, VkError};
use crate::{vkuint, vkbytes};

/// Find the first memory type that is allowed by `type_bits` and has all the `properties` requested.
///
/// `type_bits` is the `memory_type_bits` field of `vk::MemoryRequirements`, bit i set means memory type i is acceptable.
///
/// Return None if no memory type of this device meets the requirement.
pub fn find_memory_type_index(memories: &vk::PhysicalDeviceMemoryProperties, mut type_bits: vkuint, properties: vk::MemoryPropertyFlags) -> Option<vkuint> {

    // Iterate over all memory types available for the device.
    for i in 0..memories.memory_type_count {
        if (type_bits & 1) == 1 && memories.memory_types[i as usize].property_flags.contains(properties) {
            return Some(i)
        }

        type_bits >>= 1;
    }

    None
}

/// Copy `data` to the beginning of a host-visible `memory`.
///
/// The memory is mapped for the copy and unmapped afterwards. Without HOST_COHERENT, the caller must flush the range.
pub fn copy_to_memory<T: Copy>(device: &VkDevice, memory: vk::DeviceMemory, data: &[T]) -> VkResult<()> {

    let size = std::mem::size_of_val(data) as vkbytes;

    unsafe {
        let data_ptr = device.logic.handle.map_memory(memory, 0, size, vk::MemoryMapFlags::empty())
            .map_err(|e| VkError::device("Map Memory").caused_by(e))?;

        std::ptr::copy_nonoverlapping(data.as_ptr(), data_ptr as *mut T, data.len());

        device.logic.handle.unmap_memory(memory);
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn memories(flags: &[vk::MemoryPropertyFlags]) -> vk::PhysicalDeviceMemoryProperties {

        let mut memories = vk::PhysicalDeviceMemoryProperties::default();
        memories.memory_type_count = flags.len() as _;
        for (i, &property_flags) in flags.iter().enumerate() {
            memories.memory_types[i] = vk::MemoryType { property_flags, heap_index: 0 };
        }
        memories
    }

    #[test]
    fn picks_first_type_with_all_flags() {
        let memories = memories(&[
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
            vk::MemoryPropertyFlags::HOST_VISIBLE,
            vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_COHERENT,
        ]);

        let host = vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_COHERENT;
        assert_eq!(find_memory_type_index(&memories, 0b111, host), Some(2));
        assert_eq!(find_memory_type_index(&memories, 0b111, vk::MemoryPropertyFlags::DEVICE_LOCAL), Some(0));
    }

    #[test]
    fn respects_type_bits() {
        let memories = memories(&[
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
        ]);

        assert_eq!(find_memory_type_index(&memories, 0b10, vk::MemoryPropertyFlags::DEVICE_LOCAL), Some(1));
    }

    #[test]
    fn none_when_nothing_matches() {
        let memories = memories(&[vk::MemoryPropertyFlags::DEVICE_LOCAL]);

        assert_eq!(find_memory_type_index(&memories, 0b1, vk::MemoryPropertyFlags::HOST_VISIBLE), None);
        assert_eq!(find_memory_type_index(&memories, 0b0, vk::MemoryPropertyFlags::DEVICE_LOCAL), None);
    }
}
