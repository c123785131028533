
use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable, VkObjectAllocatable};
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::error::{VkResult, VkError};
use crate::vkuint;

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::CommandBufferAllocateInfo.
#[derive(Debug, Clone)]
pub struct CommandBufferAI {
    inner: vk::CommandBufferAllocateInfo<'static>,
}

impl VulkanCI<vk::CommandBufferAllocateInfo<'static>> for CommandBufferAI {

    fn default_ci() -> vk::CommandBufferAllocateInfo<'static> {

        vk::CommandBufferAllocateInfo::default()
            .level(vk::CommandBufferLevel::PRIMARY)
            .command_buffer_count(1)
    }
}

impl VkObjectBuildableCI for CommandBufferAI {
    type ObjectType = Vec<vk::CommandBuffer>;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let commands = unsafe {
            device.logic.handle.allocate_command_buffers(&self.inner)
                .map_err(|e| VkError::create("Command Buffers").caused_by(e))?
        };
        Ok(commands)
    }
}

impl CommandBufferAI {

    pub fn new(pool: vk::CommandPool, count: vkuint) -> CommandBufferAI {

        CommandBufferAI {
            inner: CommandBufferAI::default_ci()
                .command_pool(pool)
                .command_buffer_count(count),
        }
    }

    #[inline(always)]
    pub fn level(mut self, level: vk::CommandBufferLevel) -> CommandBufferAI {
        self.inner.level = level; self
    }

    pub fn value(&self) -> vk::CommandBufferAllocateInfo<'_> {
        self.inner
    }
}

impl VkObjectAllocatable for vk::CommandBuffer {
    type AllocatePool = vk::CommandPool;

    fn free_by(self, device: &VkDevice, pool: Self::AllocatePool) {
        unsafe {
            device.logic.handle.free_command_buffers(pool, &[self]);
        }
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for vk::CommandPoolCreateInfo.
#[derive(Debug, Clone)]
pub struct CommandPoolCI {
    inner: vk::CommandPoolCreateInfo<'static>,
}

impl VulkanCI<vk::CommandPoolCreateInfo<'static>> for CommandPoolCI {

    fn default_ci() -> vk::CommandPoolCreateInfo<'static> {

        vk::CommandPoolCreateInfo::default()
            .flags(vk::CommandPoolCreateFlags::empty())
    }
}

impl VkObjectBuildableCI for CommandPoolCI {
    type ObjectType = vk::CommandPool;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let pool = unsafe {
            device.logic.handle.create_command_pool(&self.inner, None)
                .map_err(|e| VkError::create("Command Pool").caused_by(e))?
        };
        Ok(pool)
    }
}

impl CommandPoolCI {

    pub fn new(queue_family: vkuint) -> CommandPoolCI {

        CommandPoolCI {
            inner: CommandPoolCI::default_ci()
                .queue_family_index(queue_family),
        }
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::CommandPoolCreateFlags) -> CommandPoolCI {
        self.inner.flags = flags; self
    }

    pub fn value(&self) -> vk::CommandPoolCreateInfo<'_> {
        self.inner
    }
}

impl VkObjectDiscardable for vk::CommandPool {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_command_pool(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn one_primary_buffer_by_default() {
        let ci = CommandBufferAI::new(vk::CommandPool::null(), 1);
        let value = ci.value();

        assert_eq!(value.level, vk::CommandBufferLevel::PRIMARY);
        assert_eq!(value.command_buffer_count, 1);
    }

    #[test]
    fn pool_uses_family() {
        let ci = CommandPoolCI::new(2);
        let value = ci.value();

        assert_eq!(value.queue_family_index, 2);
        assert!(value.flags.is_empty());
    }
}
