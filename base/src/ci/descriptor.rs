//! Types which simplify the creation of Vulkan descriptor objects.

use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable};
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::error::{VkResult, VkError};
use crate::vkuint;

// ----------------------------------------------------------------------------------------------
/// Wrapper class for `vk::DescriptorPoolCreateInfo`.
///
/// See [VkDescriptorPoolCreateInfo](https://www.khronos.org/registry/vulkan/specs/1.1-extensions/man/html/VkDescriptorPoolCreateInfo.html) for more detail.
#[derive(Debug, Clone)]
pub struct DescriptorPoolCI {

    inner: vk::DescriptorPoolCreateInfo<'static>,
    pool_sizes: Vec<vk::DescriptorPoolSize>,
}

impl VulkanCI<vk::DescriptorPoolCreateInfo<'static>> for DescriptorPoolCI {

    fn default_ci() -> vk::DescriptorPoolCreateInfo<'static> {

        vk::DescriptorPoolCreateInfo::default()
            .flags(vk::DescriptorPoolCreateFlags::empty())
            .max_sets(0)
    }
}

impl VkObjectBuildableCI for DescriptorPoolCI {
    type ObjectType = vk::DescriptorPool;

    /// Create `vk::DescriptorPool` object, and return its handle.
    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        debug_assert!(!self.pool_sizes.is_empty(), "The count of pool sizes must be greater than 0!");

        let descriptor_pool = unsafe {
            device.logic.handle.create_descriptor_pool(&self.value(), None)
                .map_err(|e| VkError::create("Descriptor Pool").caused_by(e))?
        };
        Ok(descriptor_pool)
    }
}

impl DescriptorPoolCI {

    /// `max_set_count` is the maximum number of descriptor sets that this descriptor pool may allocated.
    pub fn new(max_set_count: vkuint) -> DescriptorPoolCI {

        DescriptorPoolCI {
            inner: DescriptorPoolCI::default_ci().max_sets(max_set_count),
            pool_sizes: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::DescriptorPoolCreateInfo<'_> {

        let ci: vk::DescriptorPoolCreateInfo<'_> = self.inner;
        ci.pool_sizes(&self.pool_sizes)
    }

    /// Reserve `count` descriptors of type `r#type` in the pool.
    #[inline]
    pub fn add_descriptor(mut self, r#type: vk::DescriptorType, count: vkuint) -> DescriptorPoolCI {

        self.pool_sizes.push(vk::DescriptorPoolSize {
            ty: r#type,
            descriptor_count: count,
        }); self
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::DescriptorPoolCreateFlags) -> DescriptorPoolCI {
        self.inner.flags = flags; self
    }
}

impl VkObjectDiscardable for vk::DescriptorPool {

    /// Destroying the pool also frees every descriptor set allocated from it.
    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_descriptor_pool(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for `vk::DescriptorSetLayoutCreateInfo`.
#[derive(Debug, Clone)]
pub struct DescriptorSetLayoutCI {

    inner: vk::DescriptorSetLayoutCreateInfo<'static>,
    bindings: Vec<vk::DescriptorSetLayoutBinding<'static>>,
}

impl VulkanCI<vk::DescriptorSetLayoutCreateInfo<'static>> for DescriptorSetLayoutCI {

    fn default_ci() -> vk::DescriptorSetLayoutCreateInfo<'static> {

        vk::DescriptorSetLayoutCreateInfo::default()
            .flags(vk::DescriptorSetLayoutCreateFlags::empty())
    }
}

impl VkObjectBuildableCI for DescriptorSetLayoutCI {
    type ObjectType = vk::DescriptorSetLayout;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let set_layout = unsafe {
            device.logic.handle.create_descriptor_set_layout(&self.value(), None)
                .map_err(|e| VkError::create("Descriptor Set Layout").caused_by(e))?
        };
        Ok(set_layout)
    }
}

impl DescriptorSetLayoutCI {

    pub fn new() -> DescriptorSetLayoutCI {

        DescriptorSetLayoutCI {
            inner: DescriptorSetLayoutCI::default_ci(),
            bindings: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::DescriptorSetLayoutCreateInfo<'_> {

        let ci: vk::DescriptorSetLayoutCreateInfo<'_> = self.inner;
        ci.bindings(&self.bindings)
    }

    /// Describe the descriptors at `binding` that shaders of `stages` can access.
    #[inline]
    pub fn add_binding(mut self, binding: vkuint, r#type: vk::DescriptorType, count: vkuint, stages: vk::ShaderStageFlags) -> DescriptorSetLayoutCI {

        let binding = vk::DescriptorSetLayoutBinding::default()
            .binding(binding)
            .descriptor_type(r#type)
            .descriptor_count(count)
            .stage_flags(stages);
        self.bindings.push(binding); self
    }

    #[inline(always)]
    pub fn flags(mut self, flags: vk::DescriptorSetLayoutCreateFlags) -> DescriptorSetLayoutCI {
        self.inner.flags = flags; self
    }
}

impl VkObjectDiscardable for vk::DescriptorSetLayout {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_descriptor_set_layout(self, None);
        }
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for `vk::DescriptorSetAllocateInfo`.
#[derive(Debug, Clone)]
pub struct DescriptorSetAI {

    inner: vk::DescriptorSetAllocateInfo<'static>,
    set_layouts: Vec<vk::DescriptorSetLayout>,
}

impl VulkanCI<vk::DescriptorSetAllocateInfo<'static>> for DescriptorSetAI {

    fn default_ci() -> vk::DescriptorSetAllocateInfo<'static> {
        vk::DescriptorSetAllocateInfo::default()
    }
}

impl VkObjectBuildableCI for DescriptorSetAI {
    type ObjectType = Vec<vk::DescriptorSet>;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        let descriptor_sets = unsafe {
            device.logic.handle.allocate_descriptor_sets(&self.value())
                .map_err(|e| VkError::create("Descriptor Sets").caused_by(e))?
        };
        Ok(descriptor_sets)
    }
}

impl DescriptorSetAI {

    pub fn new(pool: vk::DescriptorPool) -> DescriptorSetAI {

        DescriptorSetAI {
            inner: DescriptorSetAI::default_ci().descriptor_pool(pool),
            set_layouts: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::DescriptorSetAllocateInfo<'_> {

        let ai: vk::DescriptorSetAllocateInfo<'_> = self.inner;
        ai.set_layouts(&self.set_layouts)
    }

    /// Allocate one more descriptor set of `set_layout`.
    #[inline]
    pub fn add_set_layout(mut self, set_layout: vk::DescriptorSetLayout) -> DescriptorSetAI {
        self.set_layouts.push(set_layout); self
    }
}
// ----------------------------------------------------------------------------------------------

// ----------------------------------------------------------------------------------------------
/// Wrapper class for a `vk::WriteDescriptorSet` that updates buffer descriptors.
#[derive(Debug, Clone)]
pub struct DescriptorBufferSetWI {

    inner: vk::WriteDescriptorSet<'static>,
    buffers: Vec<vk::DescriptorBufferInfo>,
}

impl VulkanCI<vk::WriteDescriptorSet<'static>> for DescriptorBufferSetWI {

    fn default_ci() -> vk::WriteDescriptorSet<'static> {

        vk::WriteDescriptorSet::default()
            .dst_array_element(0)
            .descriptor_type(vk::DescriptorType::UNIFORM_BUFFER)
    }
}

impl DescriptorBufferSetWI {

    pub fn new(set: vk::DescriptorSet, binding: vkuint, r#type: vk::DescriptorType) -> DescriptorBufferSetWI {

        DescriptorBufferSetWI {
            inner: DescriptorBufferSetWI::default_ci()
                .dst_set(set)
                .dst_binding(binding)
                .descriptor_type(r#type),
            buffers: Vec::new(),
        }
    }

    pub fn value(&self) -> vk::WriteDescriptorSet<'_> {

        let wi: vk::WriteDescriptorSet<'_> = self.inner;
        wi.buffer_info(&self.buffers)
    }

    #[inline]
    pub fn add_buffer(mut self, info: vk::DescriptorBufferInfo) -> DescriptorBufferSetWI {
        self.buffers.push(info); self
    }

    /// Write the buffer descriptors to the descriptor set.
    pub fn update(&self, device: &VkDevice) {
        unsafe {
            device.logic.handle.update_descriptor_sets(&[self.value()], &[]);
        }
    }
}
// ----------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uniform_binding_for_vertex_stage() {
        let ci = DescriptorSetLayoutCI::new()
            .add_binding(0, vk::DescriptorType::UNIFORM_BUFFER, 1, vk::ShaderStageFlags::VERTEX);
        let value = ci.value();

        assert_eq!(value.binding_count, 1);
        assert_eq!(value.p_bindings, ci.bindings.as_ptr());
        assert_eq!(ci.bindings[0].binding, 0);
        assert_eq!(ci.bindings[0].descriptor_type, vk::DescriptorType::UNIFORM_BUFFER);
        assert_eq!(ci.bindings[0].stage_flags, vk::ShaderStageFlags::VERTEX);
    }

    #[test]
    fn pool_sizes_are_counted() {
        let ci = DescriptorPoolCI::new(1)
            .add_descriptor(vk::DescriptorType::UNIFORM_BUFFER, 1);
        let value = ci.value();

        assert_eq!(value.max_sets, 1);
        assert_eq!(value.pool_size_count, 1);
        assert_eq!(value.p_pool_sizes, ci.pool_sizes.as_ptr());
    }

    #[test]
    fn set_layouts_are_counted() {
        let ai = DescriptorSetAI::new(vk::DescriptorPool::null())
            .add_set_layout(vk::DescriptorSetLayout::null());

        assert_eq!(ai.value().descriptor_set_count, 1);
    }

    #[test]
    fn buffer_write_counts_descriptors() {
        let buffer_info = vk::DescriptorBufferInfo {
            buffer: vk::Buffer::null(),
            offset: 0,
            range : 64,
        };
        let wi = DescriptorBufferSetWI::new(vk::DescriptorSet::null(), 0, vk::DescriptorType::UNIFORM_BUFFER)
            .add_buffer(buffer_info);
        let value = wi.value();

        assert_eq!(value.descriptor_count, 1);
        assert_eq!(value.dst_binding, 0);
        assert_eq!(value.p_buffer_info, wi.buffers.as_ptr());
    }
}
