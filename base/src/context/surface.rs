
use ash::vk;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

use crate::context::instance::VkInstance;
use crate::error::{VkResult, VkError};
use crate::vkuint;

/// Wrapper class for `vk::Surface`.
pub struct VkSurface {

    /// the handle of `vk::SurfaceKHR`.
    pub handle: vk::SurfaceKHR,
    /// the extension loader provides functions for creation and destruction of `vk::SurfaceKHR` object.
    loader: ash::khr::surface::Instance,
}

impl VkSurface {

    /// Initialize surface extension loader and `vk::Surface` object.
    pub fn new<W>(instance: &VkInstance, window: &W) -> VkResult<VkSurface>
        where
            W: HasDisplayHandle + HasWindowHandle {

        let display = window.display_handle()
            .map_err(|e| VkError::window(e.to_string()))?;
        let window = window.window_handle()
            .map_err(|e| VkError::window(e.to_string()))?;

        let handle = unsafe {
            ash_window::create_surface(&instance.entry, &instance.handle, display.as_raw(), window.as_raw(), None)
                .map_err(|e| VkError::unlink("Platform Surface").caused_by(e))?
        };

        let loader = ash::khr::surface::Instance::new(&instance.entry, &instance.handle);

        tracing::debug!("created vk::SurfaceKHR");

        let surface = VkSurface { handle, loader };
        Ok(surface)
    }

    /// Query whether a queue family of a physical device supports presentation to this surface.
    pub fn query_is_family_presentable(&self, physical_device: vk::PhysicalDevice, queue_family_index: vkuint) -> VkResult<bool> {

        unsafe {
            self.loader.get_physical_device_surface_support(physical_device, queue_family_index, self.handle)
                .map_err(|e| VkError::query("Surface Support").caused_by(e))
        }
    }

    /// Query the basic capabilities of a surface.
    ///
    /// capabilities usually needs in swapchain creation.
    pub fn query_capabilities(&self, physical_device: vk::PhysicalDevice) -> VkResult<vk::SurfaceCapabilitiesKHR> {

        unsafe {
            self.loader.get_physical_device_surface_capabilities(physical_device, self.handle)
                .map_err(|e| VkError::query("Surface Capabilities").caused_by(e))
        }
    }

    /// Query the supported swapchain format tuples for a surface.
    pub fn query_formats(&self, physical_device: vk::PhysicalDevice) -> VkResult<Vec<vk::SurfaceFormatKHR>> {

        unsafe {
            self.loader.get_physical_device_surface_formats(physical_device, self.handle)
                .map_err(|e| VkError::query("Surface Formats").caused_by(e))
        }
    }

    /// Query the supported presentation modes for a surface.
    pub fn query_present_modes(&self, physical_device: vk::PhysicalDevice) -> VkResult<Vec<vk::PresentModeKHR>> {

        unsafe {
            self.loader.get_physical_device_surface_present_modes(physical_device, self.handle)
                .map_err(|e| VkError::query("Surface Present Modes").caused_by(e))
        }
    }

    /// Destroy the `vk::SurfaceKHR` object.
    pub fn discard(&self) {
        unsafe {
            self.loader.destroy_surface(self.handle, None);
        }
    }
}
