
use ash::vk;
use smallvec::SmallVec;

use crate::context::surface::VkSurface;
use crate::error::{VkResult, VkError};
use crate::vkuint;

/// The queue families that the graphics and present queues are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFamilyIndices {
    pub graphics: vkuint,
    pub present : vkuint,
}

impl QueueFamilyIndices {

    /// true if graphics and presentation use the same queue family.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.graphics == self.present
    }

    /// The distinct family indices, graphics first.
    pub fn unique(&self) -> SmallVec<[vkuint; 2]> {

        let mut families = SmallVec::new();
        families.push(self.graphics);
        if !self.is_shared() {
            families.push(self.present);
        }
        families
    }
}

/// Pick the graphics and present queue families.
///
/// A family that supports both graphics and presentation is used for both.
/// Otherwise the first graphics family and the first presentable family are used.
///
/// `present_support[i]` tells if family `i` can present to the surface. Pass None when there is no surface; the present family is then the graphics family.
pub fn select_queue_families(families: &[vk::QueueFamilyProperties], present_support: Option<&[bool]>) -> VkResult<QueueFamilyIndices> {

    let is_presentable = |index: usize| -> bool {
        present_support.is_none_or(|support| support.get(index).copied().unwrap_or(false))
    };

    let mut graphics = None;
    let mut present = None;

    for (i, family) in families.iter().enumerate() {

        if family.queue_flags.contains(vk::QueueFlags::GRAPHICS) {

            if graphics.is_none() {
                graphics = Some(i);
            }

            if is_presentable(i) {
                graphics = Some(i);
                present = Some(i);
                break
            }
        }
    }

    if present.is_none() {
        // no family supports both, so take a separate family for presentation.
        present = (0..families.len()).find(|&i| is_presentable(i));
    }

    match (graphics, present) {
        | (Some(graphics), Some(present)) => Ok(QueueFamilyIndices {
            graphics: graphics as vkuint,
            present : present as vkuint,
        }),
        | (None, _) => Err(VkError::unsupported("Graphics queue family")),
        | (_, None) => Err(VkError::unsupported("Present queue family")),
    }
}

/// Query for each queue family of `physical_device` if it can present to `surface`.
pub fn query_present_support(surface: &VkSurface, physical_device: vk::PhysicalDevice, family_count: usize) -> VkResult<Vec<bool>> {

    (0..family_count).map(|i| {
        surface.query_is_family_presentable(physical_device, i as vkuint)
    }).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn family(queue_flags: vk::QueueFlags) -> vk::QueueFamilyProperties {
        vk::QueueFamilyProperties { queue_flags, queue_count: 1, ..Default::default() }
    }

    #[test]
    fn family_with_both_is_preferred() {
        let families = [
            family(vk::QueueFlags::GRAPHICS),
            family(vk::QueueFlags::COMPUTE),
            family(vk::QueueFlags::GRAPHICS | vk::QueueFlags::COMPUTE),
        ];
        let support = [false, true, true];

        let indices = select_queue_families(&families, Some(&support)).unwrap();
        assert_eq!(indices, QueueFamilyIndices { graphics: 2, present: 2 });
        assert!(indices.is_shared());
        assert_eq!(indices.unique().as_slice(), &[2]);
    }

    #[test]
    fn separate_families() {
        let families = [
            family(vk::QueueFlags::GRAPHICS),
            family(vk::QueueFlags::GRAPHICS),
            family(vk::QueueFlags::TRANSFER),
        ];
        let support = [false, false, true];

        let indices = select_queue_families(&families, Some(&support)).unwrap();
        assert_eq!(indices, QueueFamilyIndices { graphics: 0, present: 2 });
        assert!(!indices.is_shared());
        assert_eq!(indices.unique().as_slice(), &[0, 2]);
    }

    #[test]
    fn without_surface_only_graphics_is_needed() {
        let families = [family(vk::QueueFlags::TRANSFER), family(vk::QueueFlags::GRAPHICS)];

        let indices = select_queue_families(&families, None).unwrap();
        assert_eq!(indices, QueueFamilyIndices { graphics: 1, present: 1 });
    }

    #[test]
    fn missing_families_are_errors() {
        let families = [family(vk::QueueFlags::COMPUTE)];
        assert!(select_queue_families(&families, Some(&[true])).is_err());

        let families = [family(vk::QueueFlags::GRAPHICS)];
        assert!(select_queue_families(&families, Some(&[false])).is_err());
        assert!(select_queue_families(&[], None).is_err());
    }
}
