
use ash::vk;

use crate::context::instance::VkInstance;
use crate::context::device::{VkDevice, QueueFamilyIndices};
use crate::context::surface::VkSurface;
use crate::ci::image::ImageViewCI;
use crate::ci::VkObjectBuildableCI;
use crate::error::{VkResult, VkError};
use crate::vkuint;

use smallvec::SmallVec;

#[derive(Debug, Clone)]
pub struct SwapchainConfig {

    /// force FIFO present mode.
    pub present_vsync: bool,
    /// the image size used when the surface lets the swapchain decide it.
    pub dimension_preference: vk::Extent2D,
}

impl Default for SwapchainConfig {

    fn default() -> SwapchainConfig {
        SwapchainConfig {
            present_vsync: false,
            dimension_preference: vk::Extent2D { width: 640, height: 480 },
        }
    }
}

pub struct VkSwapchain {

    /// handle of `vk::SwapchainKHR`.
    pub handle: vk::SwapchainKHR,
    /// the extension loader provides functions for creation and destruction of `vk::SwapchainKHR` object.
    loader: ash::khr::swapchain::Device,
    /// Image resources of current swapchain.
    pub images: Vec<SwapchainImage>,
    /// the format of presentable images.
    pub format: vk::Format,
    /// the dimension of presentable images.
    pub dimension: vk::Extent2D,
}

pub struct SwapchainImage {

    /// the presentable image objects associated with the swapchain.
    ///
    /// These images are destroyed automatically when `vk::SwapchainKHR` is destroyed.
    pub image: vk::Image,
    /// the corresponding image views associated with the presentable images created by swapchain.
    pub view : vk::ImageView,
}

impl VkSwapchain {

    pub fn new(instance: &VkInstance, device: &VkDevice, surface: &VkSurface, families: QueueFamilyIndices, config: &SwapchainConfig) -> VkResult<VkSwapchain> {

        let surface_formats = surface.query_formats(device.phy.handle)?;
        let surface_format = select_surface_format(&surface_formats)?;

        let surface_caps = surface.query_capabilities(device.phy.handle)?;
        let extent = select_extent(&surface_caps, config.dimension_preference);

        let present_modes = surface.query_present_modes(device.phy.handle)?;
        let present_mode = select_present_mode(&present_modes, config.present_vsync);

        let (sharing_mode, queue_families) = sharing_mode(families);

        let swapchain_ci = vk::SwapchainCreateInfoKHR::default()
            .surface(surface.handle)
            .min_image_count(surface_caps.min_image_count)
            .image_format(surface_format.format)
            .image_color_space(surface_format.color_space)
            .image_extent(extent)
            .image_array_layers(1)
            .image_usage(vk::ImageUsageFlags::COLOR_ATTACHMENT)
            .image_sharing_mode(sharing_mode)
            .queue_family_indices(&queue_families)
            .pre_transform(surface_caps.current_transform)
            .composite_alpha(vk::CompositeAlphaFlagsKHR::OPAQUE)
            .present_mode(present_mode)
            // allow the implementation to discard rendering outside of the surface area.
            .clipped(true);

        let loader = ash::khr::swapchain::Device::new(&instance.handle, &device.logic.handle);

        let handle = unsafe {
            loader.create_swapchain(&swapchain_ci, None)
                .map_err(|e| VkError::create("Swapchain").caused_by(e))?
        };

        let images = match obtain_swapchain_images(device, handle, &loader, surface_format.format) {
            | Ok(images) => images,
            | Err(e) => {
                unsafe { loader.destroy_swapchain(handle, None); }
                return Err(e)
            },
        };

        tracing::info!(
            format = ?surface_format.format, present_mode = ?present_mode,
            width = extent.width, height = extent.height, images = images.len(),
            "created swapchain");

        let result = VkSwapchain {
            handle, loader, images,
            format: surface_format.format,
            dimension: extent,
        };
        Ok(result)
    }

    pub fn image_views(&self) -> impl Iterator<Item = vk::ImageView> + '_ {
        self.images.iter().map(|image| image.view)
    }

    /// Destroy the image views and the `vk::SwapchainKHR` object.
    pub fn discard(&self, device: &VkDevice) {

        self.images.iter().for_each(|swapchain_image| {
            device.discard(swapchain_image.view);
        });

        unsafe {
            self.loader.destroy_swapchain(self.handle, None);
        }
    }
}

fn obtain_swapchain_images(device: &VkDevice, swapchain: vk::SwapchainKHR, loader: &ash::khr::swapchain::Device, format: vk::Format) -> VkResult<Vec<SwapchainImage>> {

    let image_handles = unsafe {
        loader.get_swapchain_images(swapchain)
            .map_err(|e| VkError::query("Swapchain Images").caused_by(e))?
    };

    let mut result: Vec<SwapchainImage> = Vec::with_capacity(image_handles.len());

    for image in image_handles.into_iter() {

        let view_ci = ImageViewCI::new(image, vk::ImageViewType::TYPE_2D, format)
            .aspect_mask(vk::ImageAspectFlags::COLOR);

        match view_ci.build(device) {
            | Ok(view) => result.push(SwapchainImage { image, view }),
            | Err(e) => {
                result.iter().for_each(|created| device.discard(created.view));
                return Err(e)
            },
        }
    }

    Ok(result)
}

// -----------------------------------------------------------------------------------
/// The format used when the surface has no preferred format.
const PREFERRED_SURFACE_FORMAT: vk::SurfaceFormatKHR = vk::SurfaceFormatKHR {
    format: vk::Format::B8G8R8A8_UNORM,
    color_space: vk::ColorSpaceKHR::SRGB_NONLINEAR,
};

/// Pick the color format and color space of the swapchain images.
pub fn select_surface_format(formats: &[vk::SurfaceFormatKHR]) -> VkResult<vk::SurfaceFormatKHR> {

    match formats {
        | [] => Err(VkError::query("Surface Formats")),
        // a single UNDEFINED entry means the surface has no preference.
        | [only] if only.format == vk::Format::UNDEFINED => Ok(PREFERRED_SURFACE_FORMAT),
        | [first, ..] => {
            let preferred = formats.iter().find(|candidate| {
                candidate.format == PREFERRED_SURFACE_FORMAT.format && candidate.color_space == PREFERRED_SURFACE_FORMAT.color_space
            });
            Ok(*preferred.unwrap_or(first))
        },
    }
}

/// Pick the present mode of the swapchain.
///
/// FIFO always exists and waits for the vertical blank, so it is used for v-sync and as the last resort.
pub fn select_present_mode(modes: &[vk::PresentModeKHR], vsync: bool) -> vk::PresentModeKHR {

    if vsync {
        return vk::PresentModeKHR::FIFO
    }

    let mut result = vk::PresentModeKHR::FIFO;

    for &mode in modes.iter() {
        if mode == vk::PresentModeKHR::MAILBOX {
            // the lowest latency non-tearing mode.
            return vk::PresentModeKHR::MAILBOX
        }

        if mode == vk::PresentModeKHR::IMMEDIATE {
            result = vk::PresentModeKHR::IMMEDIATE;
        }
    }

    result
}

/// Pick the dimension of the swapchain images.
///
/// If the current width equals the special value 0xFFFFFFFF, the size of the surface is set by the swapchain.
pub fn select_extent(capabilities: &vk::SurfaceCapabilitiesKHR, preferred: vk::Extent2D) -> vk::Extent2D {

    if capabilities.current_extent.width != vkuint::MAX {
        // if the surface size is defined, the swap chain size must match.
        capabilities.current_extent
    } else {
        vk::Extent2D {
            width : preferred.width.clamp(capabilities.min_image_extent.width, capabilities.max_image_extent.width.max(capabilities.min_image_extent.width)),
            height: preferred.height.clamp(capabilities.min_image_extent.height, capabilities.max_image_extent.height.max(capabilities.min_image_extent.height)),
        }
    }
}

/// The sharing mode of swapchain images, and the queue families that share them.
pub fn sharing_mode(families: QueueFamilyIndices) -> (vk::SharingMode, SmallVec<[vkuint; 2]>) {

    if families.is_shared() {
        (vk::SharingMode::EXCLUSIVE, SmallVec::new())
    } else {
        (vk::SharingMode::CONCURRENT, families.unique())
    }
}
// -----------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn format(format: vk::Format, color_space: vk::ColorSpaceKHR) -> vk::SurfaceFormatKHR {
        vk::SurfaceFormatKHR { format, color_space }
    }

    fn pair(format: vk::SurfaceFormatKHR) -> (vk::Format, vk::ColorSpaceKHR) {
        (format.format, format.color_space)
    }

    #[test]
    fn surface_format_rules() {
        assert!(select_surface_format(&[]).is_err());

        let undefined = [format(vk::Format::UNDEFINED, vk::ColorSpaceKHR::SRGB_NONLINEAR)];
        assert_eq!(pair(select_surface_format(&undefined).unwrap()), pair(PREFERRED_SURFACE_FORMAT));

        let with_preferred = [
            format(vk::Format::R8G8B8A8_SRGB, vk::ColorSpaceKHR::SRGB_NONLINEAR),
            format(vk::Format::B8G8R8A8_UNORM, vk::ColorSpaceKHR::SRGB_NONLINEAR),
        ];
        assert_eq!(pair(select_surface_format(&with_preferred).unwrap()), pair(with_preferred[1]));

        let without_preferred = [
            format(vk::Format::R8G8B8A8_SRGB, vk::ColorSpaceKHR::SRGB_NONLINEAR),
            format(vk::Format::B8G8R8A8_UNORM, vk::ColorSpaceKHR::DISPLAY_P3_NONLINEAR_EXT),
        ];
        assert_eq!(pair(select_surface_format(&without_preferred).unwrap()), pair(without_preferred[0]));
    }

    #[test]
    fn present_mode_priority() {
        use vk::PresentModeKHR as Mode;

        assert_eq!(select_present_mode(&[Mode::FIFO, Mode::IMMEDIATE, Mode::MAILBOX], false), Mode::MAILBOX);
        assert_eq!(select_present_mode(&[Mode::IMMEDIATE, Mode::FIFO], false), Mode::IMMEDIATE);
        assert_eq!(select_present_mode(&[Mode::FIFO_RELAXED, Mode::FIFO], false), Mode::FIFO);
        assert_eq!(select_present_mode(&[Mode::MAILBOX], true), Mode::FIFO);
        assert_eq!(select_present_mode(&[], false), Mode::FIFO);
    }

    #[test]
    fn extent_follows_current_extent() {
        let caps = vk::SurfaceCapabilitiesKHR {
            current_extent: vk::Extent2D { width: 800, height: 600 },
            ..Default::default()
        };
        let extent = select_extent(&caps, vk::Extent2D { width: 640, height: 480 });
        assert_eq!((extent.width, extent.height), (800, 600));
    }

    #[test]
    fn extent_is_clamped_when_undefined() {
        let caps = vk::SurfaceCapabilitiesKHR {
            current_extent  : vk::Extent2D { width: vkuint::MAX, height: vkuint::MAX },
            min_image_extent: vk::Extent2D { width: 100, height: 500 },
            max_image_extent: vk::Extent2D { width: 600, height: 1000 },
            ..Default::default()
        };
        let extent = select_extent(&caps, vk::Extent2D { width: 640, height: 480 });
        assert_eq!((extent.width, extent.height), (600, 500));
    }

    #[test]
    fn sharing_follows_families() {
        let (mode, families) = sharing_mode(QueueFamilyIndices { graphics: 0, present: 0 });
        assert_eq!(mode, vk::SharingMode::EXCLUSIVE);
        assert!(families.is_empty());

        let (mode, families) = sharing_mode(QueueFamilyIndices { graphics: 0, present: 1 });
        assert_eq!(mode, vk::SharingMode::CONCURRENT);
        assert_eq!(families.as_slice(), &[0, 1]);
    }
}
