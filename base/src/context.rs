
pub use self::instance::{VkInstance, InstanceConfig, LayerSummary, VALIDATION_LAYER_NAME};
pub use self::debug::{VkDebugger, DebugType, DebugUtilsConfig};
pub use self::surface::VkSurface;
pub use self::swapchain::{VkSwapchain, SwapchainImage, SwapchainConfig};
pub use self::swapchain::{select_surface_format, select_present_mode, select_extent, sharing_mode};

pub use self::device::{VkDevice, VkLogicalDevice, VkPhysicalDevice, VkQueue};
pub use self::device::{VkObjectDiscardable, VkObjectAllocatable, VkObjectBindable};
pub use self::device::{LogicDevConfig, PhysicalDevConfig, DeviceSummary, DeviceCandidate, QueueFamilyIndices};
pub use self::device::{select_physical_device, select_depth_tiling, select_queue_families, query_present_support};
pub use self::device::{missing_features, missing_extensions};

mod instance;
mod debug;
mod surface;
mod device;
mod swapchain;
