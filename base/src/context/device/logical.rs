
use ash::vk;
use smallvec::SmallVec;

use crate::context::instance::VkInstance;
use crate::context::device::physical::VkPhysicalDevice;
use crate::context::device::queue::QueueFamilyIndices;
use crate::utils::cast::cstrings2ptrs;
use crate::error::{VkResult, VkError};
use crate::{vkuint, vkfloat};

#[derive(Debug, Clone)]
pub struct LogicDevConfig {

    /// the priority of the single queue requested from each family.
    pub queue_priority: vkfloat,
}

impl Default for LogicDevConfig {

    fn default() -> LogicDevConfig {
        LogicDevConfig {
            queue_priority: 1.0,
        }
    }
}

pub struct VkLogicalDevice {

    pub handle: ash::Device,
    pub graphics: VkQueue,
    pub present : VkQueue,
}

#[derive(Debug, Clone, Copy)]
pub struct VkQueue {
    pub handle: vk::Queue,
    pub family_index: vkuint,
}

impl VkLogicalDevice {

    /// Create the logical device with one queue from each family in `families`.
    pub fn new(instance: &VkInstance, phy: &VkPhysicalDevice, families: QueueFamilyIndices, config: LogicDevConfig) -> VkResult<VkLogicalDevice> {

        let priorities = [config.queue_priority];

        let queue_cis: SmallVec<[vk::DeviceQueueCreateInfo; 2]> = families.unique().into_iter().map(|family_index| {
            vk::DeviceQueueCreateInfo::default()
                .queue_family_index(family_index)
                .queue_priorities(&priorities)
        }).collect();

        let enable_extension_names = cstrings2ptrs(phy.enable_extensions());

        let device_ci = vk::DeviceCreateInfo::default()
            .queue_create_infos(&queue_cis)
            .enabled_extension_names(&enable_extension_names)
            .enabled_features(phy.enable_features());

        let handle = unsafe {
            instance.handle.create_device(phy.handle, &device_ci, None)
                .map_err(|e| VkError::create("Logical Device").caused_by(e))?
        };

        let graphics = VkQueue::obtain(&handle, families.graphics);
        let present  = VkQueue::obtain(&handle, families.present);

        tracing::info!(graphics = families.graphics, present = families.present, "created logical device");

        let device = VkLogicalDevice { handle, graphics, present };
        Ok(device)
    }

    pub fn discard(&self) {
        unsafe {
            self.handle.destroy_device(None);
        }
    }
}

impl VkQueue {

    fn obtain(device: &ash::Device, family_index: vkuint) -> VkQueue {

        let handle = unsafe {
            device.get_device_queue(family_index, 0)
        };

        VkQueue { handle, family_index }
    }
}
