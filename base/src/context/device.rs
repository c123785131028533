
mod physical;
mod logical;
mod queue;

pub use self::logical::{VkLogicalDevice, VkQueue, LogicDevConfig};
pub use self::physical::{VkPhysicalDevice, PhysicalDevConfig, DeviceSummary, DeviceCandidate};
pub use self::physical::{select_physical_device, select_depth_tiling, missing_features, missing_extensions};
pub use self::queue::{QueueFamilyIndices, select_queue_families, query_present_support};

use ash::vk;

use crate::ci::VkObjectBuildableCI;
use crate::error::{VkResult, VkError};
use crate::vkbytes;

/// The pair of physical device and logical device that every device-level object is created from.
pub struct VkDevice {

    pub logic : logical::VkLogicalDevice,
    pub phy   : physical::VkPhysicalDevice,
}

impl VkDevice {

    pub fn new(logic: VkLogicalDevice, phy: VkPhysicalDevice) -> VkDevice {
        VkDevice { logic, phy }
    }

    #[inline]
    pub fn build<T>(&self, ci: &T) -> VkResult<T::ObjectType>
        where
            T: VkObjectBuildableCI {
        ci.build(self)
    }

    #[inline]
    pub fn discard(&self, object: impl VkObjectDiscardable) {
        object.discard_by(self);
    }

    #[inline]
    pub fn free<T>(&self, object: T, pool: T::AllocatePool)
        where
            T: VkObjectAllocatable {
        object.free_by(self, pool);
    }

    #[inline]
    pub fn bind(&self, object: impl VkObjectBindable, memory: vk::DeviceMemory, offset: vkbytes) -> VkResult<()> {
        object.bind(self, memory, offset)
    }

    pub fn wait_idle(&self) -> VkResult<()> {
        unsafe {
            self.logic.handle.device_wait_idle()
                .map_err(|e| VkError::device("Device Waiting Idle").caused_by(e))
        }
    }

    /// Destroy the logical device. Every object built from it must be discarded before.
    pub fn discard_self(&self) {
        self.logic.discard();
    }
}

/// A Vulkan object that is created from a `vk::Device` and destroyed by it.
pub trait VkObjectDiscardable: Copy {

    fn discard_by(self, device: &VkDevice);
}

impl<T: VkObjectDiscardable> VkObjectDiscardable for &[T] {

    fn discard_by(self, device: &VkDevice) {
        for object in self.iter() {
            object.discard_by(device);
        }
    }
}

/// A Vulkan object that is allocated from a pool and returned to it.
pub trait VkObjectAllocatable: Copy {
    type AllocatePool: Copy;

    fn free_by(self, device: &VkDevice, pool: Self::AllocatePool);
}

/// A Vulkan object that must be bound to a `vk::DeviceMemory` before use.
pub trait VkObjectBindable: Copy {

    fn bind(self, device: &VkDevice, memory: vk::DeviceMemory, offset: vkbytes) -> VkResult<()>;
}
