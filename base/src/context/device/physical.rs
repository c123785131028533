
use ash::vk;

use crate::context::instance::VkInstance;
use crate::utils::cast::{chars2string, chars2cstring};
use crate::error::{VkResult, VkError};

use std::ffi::CString;
use std::fmt;

#[derive(Debug, Clone)]
pub struct PhysicalDevConfig {

    /// log the name, API version and type of the selected device.
    pub print_device_properties: bool,
    /// the device type tried first.
    pub device_type_preference: vk::PhysicalDeviceType,
    /// fail instead of falling back to the first suitable device when no device has the preferred type.
    pub strict_device_type: bool,

    pub print_available_extensions: bool,
    pub request_extensions: Vec<CString>,

    pub print_available_features: bool,
    pub request_features: vk::PhysicalDeviceFeatures,
}

impl Default for PhysicalDevConfig {

    fn default() -> PhysicalDevConfig {

        PhysicalDevConfig {
            print_device_properties: true,
            device_type_preference: vk::PhysicalDeviceType::DISCRETE_GPU,
            strict_device_type: false,

            print_available_extensions: false,
            request_extensions: Vec::new(),

            print_available_features: false,
            request_features: vk::PhysicalDeviceFeatures::default(),
        }
    }
}

impl PhysicalDevConfig {

    /// Request `VK_KHR_swapchain`.
    pub fn with_swapchain(mut self) -> PhysicalDevConfig {
        self.request_extensions.push(CString::from(vk::KHR_SWAPCHAIN_NAME)); self
    }
}

pub struct VkPhysicalDevice {

    pub handle: vk::PhysicalDevice,
    pub properties: vk::PhysicalDeviceProperties,
    pub memories: vk::PhysicalDeviceMemoryProperties,
    pub families: Vec<vk::QueueFamilyProperties>,

    config: PhysicalDevConfig,
}

impl VkPhysicalDevice {

    pub fn new(instance: &VkInstance, config: PhysicalDevConfig) -> VkResult<VkPhysicalDevice> {

        let handles = instance.enumerate_physical_devices()?;
        if handles.is_empty() {
            return Err(VkError::unsupported("Vulkan physical device"))
        }

        let mut candidates = Vec::with_capacity(handles.len());
        let mut properties = Vec::with_capacity(handles.len());

        for &handle in handles.iter() {

            let property = unsafe {
                instance.handle.get_physical_device_properties(handle)
            };
            let device_name = chars2string(&property.device_name);

            // make sure all requested extensions are support by device.
            let lack_extensions = query_missing_extensions(instance, handle, &device_name, &config)?;
            // make sure all requested features are support by device.
            let lack_features = query_missing_features(instance, handle, &config);

            if !lack_extensions.is_empty() || !lack_features.is_empty() {
                tracing::debug!(device = %device_name, extensions = ?lack_extensions, features = ?lack_features, "skip physical device");
            }

            candidates.push(DeviceCandidate {
                device_type: property.device_type,
                is_suitable: lack_extensions.is_empty() && lack_features.is_empty(),
            });
            properties.push(property);
        }

        let selected = select_physical_device(&candidates, config.device_type_preference, config.strict_device_type)
            .ok_or(VkError::other("Suitable device not found."))?;

        let handle = handles[selected];
        let property = properties[selected];

        if property.device_type != config.device_type_preference {
            tracing::warn!("no {:?} device is available, fall back to {:?}", config.device_type_preference, property.device_type);
        }

        if config.print_device_properties {
            tracing::info!("Using device: {}", DeviceSummary::from(&property));
        }

        // get memory properties.
        let memories = unsafe {
            instance.handle.get_physical_device_memory_properties(handle)
        };

        let families = unsafe {
            instance.handle.get_physical_device_queue_family_properties(handle)
        };

        let dst_device = VkPhysicalDevice {
            handle, memories, families, config,
            properties: property,
        };
        Ok(dst_device)
    }

    /// Describe every physical device visible to `instance`, in enumeration order.
    pub fn query_summaries(instance: &VkInstance) -> VkResult<Vec<DeviceSummary>> {

        let handles = instance.enumerate_physical_devices()?;

        let summaries = handles.into_iter().map(|handle| {
            let property = unsafe {
                instance.handle.get_physical_device_properties(handle)
            };
            DeviceSummary::from(&property)
        }).collect();

        Ok(summaries)
    }

    pub fn query_format_properties(&self, instance: &VkInstance, format: vk::Format) -> vk::FormatProperties {
        unsafe {
            instance.handle.get_physical_device_format_properties(self.handle, format)
        }
    }

    pub fn enable_features(&self) -> &vk::PhysicalDeviceFeatures {
        &self.config.request_features
    }

    pub fn enable_extensions(&self) -> &[CString] {
        &self.config.request_extensions
    }
}

// Selection -------------------------------------------------------------------------
/// The part of a physical device that takes part in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceCandidate {
    pub device_type: vk::PhysicalDeviceType,
    /// true if the device supports every requested extension and feature.
    pub is_suitable: bool,
}

/// Return the index of the first suitable candidate of `preference` type.
///
/// If there is none and `strict` is false, return the first suitable candidate.
pub fn select_physical_device(candidates: &[DeviceCandidate], preference: vk::PhysicalDeviceType, strict: bool) -> Option<usize> {

    let preferred = candidates.iter().position(|candidate| {
        candidate.is_suitable && candidate.device_type == preference
    });

    if preferred.is_some() || strict {
        preferred
    } else {
        candidates.iter().position(|candidate| candidate.is_suitable)
    }
}

/// Choose the tiling for a depth image, from the features its format supports.
///
/// Linear tiling is tried first, then optimal tiling. None means the format can not be used as depth attachment.
pub fn select_depth_tiling(format_properties: &vk::FormatProperties) -> Option<vk::ImageTiling> {

    let attachment = vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT;

    if format_properties.linear_tiling_features.contains(attachment) {
        Some(vk::ImageTiling::LINEAR)
    } else if format_properties.optimal_tiling_features.contains(attachment) {
        Some(vk::ImageTiling::OPTIMAL)
    } else {
        None
    }
}
// -----------------------------------------------------------------------------------

// Physical Property -----------------------------------------------------------------
/// The name, API version and type of a physical device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSummary {
    pub name: String,
    pub api_version: (u32, u32, u32),
    pub device_type: vk::PhysicalDeviceType,
}

impl From<&vk::PhysicalDeviceProperties> for DeviceSummary {

    fn from(property: &vk::PhysicalDeviceProperties) -> DeviceSummary {

        DeviceSummary {
            name: chars2string(&property.device_name),
            api_version: (
                vk::api_version_major(property.api_version),
                vk::api_version_minor(property.api_version),
                vk::api_version_patch(property.api_version),
            ),
            device_type: property.device_type,
        }
    }
}

impl fmt::Display for DeviceSummary {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        let device_type = match self.device_type {
            | vk::PhysicalDeviceType::CPU            => "CPU",
            | vk::PhysicalDeviceType::INTEGRATED_GPU => "Integrated GPU",
            | vk::PhysicalDeviceType::DISCRETE_GPU   => "Discrete GPU",
            | vk::PhysicalDeviceType::VIRTUAL_GPU    => "Virtual GPU",
            | _ => "Other",
        };

        let (major, minor, patch) = self.api_version;
        write!(f, "{} (API {}.{}.{}, {})", self.name, major, minor, patch, device_type)
    }
}
// -----------------------------------------------------------------------------------

// Physical Extension ----------------------------------------------------------------
/// Return the requested extensions that are not in `available`.
pub fn missing_extensions(available: &[CString], requested: &[CString]) -> Vec<CString> {

    requested.iter()
        .filter(|request| !available.contains(request))
        .cloned()
        .collect()
}

fn query_missing_extensions(instance: &VkInstance, handle: vk::PhysicalDevice, device_name: &str, config: &PhysicalDevConfig) -> VkResult<Vec<CString>> {

    let query_extensions = unsafe {
        instance.handle.enumerate_device_extension_properties(handle)
            .map_err(|e| VkError::query("Device Extensions").caused_by(e))?
    };

    let available_extensions: Vec<CString> = query_extensions.iter().map(|extension| {
        chars2cstring(&extension.extension_name)
    }).collect();

    if config.print_available_extensions {
        tracing::info!("available extensions for {}:", device_name);
        available_extensions.iter().for_each(|extension| {
            tracing::info!("\t{}", extension.to_string_lossy())
        });
    }

    Ok(missing_extensions(&available_extensions, &config.request_extensions))
}
// -----------------------------------------------------------------------------------

// Physical Feature ------------------------------------------------------------------
macro_rules! missing_feature_names {
    ($available:ident, $requested:ident, {
        $(
           $feature:ident,
        )*
    }) => {{
        let mut missing = Vec::new();
        $(
            if $requested.$feature == vk::TRUE && $available.$feature == vk::FALSE {
                missing.push(stringify!($feature));
            }
        )*
        missing
    }};
}

/// Return the names of the features that are requested but not available.
pub fn missing_features(available: &vk::PhysicalDeviceFeatures, requested: &vk::PhysicalDeviceFeatures) -> Vec<&'static str> {

    missing_feature_names!(available, requested, {
        robust_buffer_access,
        full_draw_index_uint32,
        image_cube_array,
        independent_blend,
        geometry_shader,
        tessellation_shader,
        sample_rate_shading,
        dual_src_blend,
        logic_op,
        multi_draw_indirect,
        draw_indirect_first_instance,
        depth_clamp,
        depth_bias_clamp,
        fill_mode_non_solid,
        depth_bounds,
        wide_lines,
        large_points,
        alpha_to_one,
        multi_viewport,
        sampler_anisotropy,
        texture_compression_etc2,
        texture_compression_astc_ldr,
        texture_compression_bc,
        occlusion_query_precise,
        pipeline_statistics_query,
        vertex_pipeline_stores_and_atomics,
        fragment_stores_and_atomics,
        shader_tessellation_and_geometry_point_size,
        shader_image_gather_extended,
        shader_storage_image_extended_formats,
        shader_storage_image_multisample,
        shader_storage_image_read_without_format,
        shader_storage_image_write_without_format,
        shader_uniform_buffer_array_dynamic_indexing,
        shader_sampled_image_array_dynamic_indexing,
        shader_storage_buffer_array_dynamic_indexing,
        shader_storage_image_array_dynamic_indexing,
        shader_clip_distance,
        shader_cull_distance,
        shader_float64,
        shader_int64,
        shader_int16,
        shader_resource_residency,
        shader_resource_min_lod,
        sparse_binding,
        sparse_residency_buffer,
        sparse_residency_image2_d,
        sparse_residency_image3_d,
        sparse_residency2_samples,
        sparse_residency4_samples,
        sparse_residency8_samples,
        sparse_residency16_samples,
        sparse_residency_aliased,
        variable_multisample_rate,
        inherited_queries,
    })
}

fn query_missing_features(instance: &VkInstance, handle: vk::PhysicalDevice, config: &PhysicalDevConfig) -> Vec<&'static str> {

    let available_features = unsafe {
        instance.handle.get_physical_device_features(handle)
    };

    if config.print_available_features {
        tracing::info!("available features: {:?}", available_features);
    }

    missing_features(&available_features, &config.request_features)
}
// -----------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn candidate(device_type: vk::PhysicalDeviceType, is_suitable: bool) -> DeviceCandidate {
        DeviceCandidate { device_type, is_suitable }
    }

    #[test]
    fn preferred_type_wins() {
        let candidates = [
            candidate(vk::PhysicalDeviceType::INTEGRATED_GPU, true),
            candidate(vk::PhysicalDeviceType::DISCRETE_GPU, true),
            candidate(vk::PhysicalDeviceType::DISCRETE_GPU, true),
        ];

        assert_eq!(select_physical_device(&candidates, vk::PhysicalDeviceType::DISCRETE_GPU, false), Some(1));
        assert_eq!(select_physical_device(&candidates, vk::PhysicalDeviceType::INTEGRATED_GPU, true), Some(0));
    }

    #[test]
    fn fallback_only_when_not_strict() {
        let candidates = [
            candidate(vk::PhysicalDeviceType::CPU, false),
            candidate(vk::PhysicalDeviceType::INTEGRATED_GPU, true),
        ];

        assert_eq!(select_physical_device(&candidates, vk::PhysicalDeviceType::DISCRETE_GPU, false), Some(1));
        assert_eq!(select_physical_device(&candidates, vk::PhysicalDeviceType::DISCRETE_GPU, true), None);
    }

    #[test]
    fn unsuitable_devices_are_skipped() {
        let candidates = [
            candidate(vk::PhysicalDeviceType::DISCRETE_GPU, false),
            candidate(vk::PhysicalDeviceType::VIRTUAL_GPU, false),
        ];

        assert_eq!(select_physical_device(&candidates, vk::PhysicalDeviceType::DISCRETE_GPU, false), None);
        assert_eq!(select_physical_device(&[], vk::PhysicalDeviceType::DISCRETE_GPU, false), None);
    }

    #[test]
    fn depth_tiling_prefers_linear() {
        let both = vk::FormatProperties {
            linear_tiling_features: vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT,
            optimal_tiling_features: vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT,
            ..Default::default()
        };
        assert_eq!(select_depth_tiling(&both), Some(vk::ImageTiling::LINEAR));

        let optimal = vk::FormatProperties {
            optimal_tiling_features: vk::FormatFeatureFlags::DEPTH_STENCIL_ATTACHMENT | vk::FormatFeatureFlags::SAMPLED_IMAGE,
            linear_tiling_features: vk::FormatFeatureFlags::SAMPLED_IMAGE,
            ..Default::default()
        };
        assert_eq!(select_depth_tiling(&optimal), Some(vk::ImageTiling::OPTIMAL));

        assert_eq!(select_depth_tiling(&vk::FormatProperties::default()), None);
    }

    #[test]
    fn missing_features_are_named() {
        let requested = vk::PhysicalDeviceFeatures { depth_clamp: vk::TRUE, ..Default::default() };

        let none = vk::PhysicalDeviceFeatures::default();
        assert_eq!(missing_features(&none, &requested), vec!["depth_clamp"]);

        let all = vk::PhysicalDeviceFeatures { depth_clamp: vk::TRUE, geometry_shader: vk::TRUE, ..Default::default() };
        assert!(missing_features(&all, &requested).is_empty());
    }

    #[test]
    fn missing_extensions_are_listed() {
        let swapchain = CString::from(vk::KHR_SWAPCHAIN_NAME);
        let available = vec![CString::new("VK_KHR_maintenance1").unwrap()];

        assert_eq!(missing_extensions(&available, &[swapchain.clone()]), vec![swapchain.clone()]);
        assert!(missing_extensions(&[swapchain.clone()], &[swapchain]).is_empty());
    }

    #[test]
    fn summary_display() {
        let summary = DeviceSummary {
            name: String::from("llvmpipe"),
            api_version: (1, 3, 255),
            device_type: vk::PhysicalDeviceType::CPU,
        };
        assert_eq!(summary.to_string(), "llvmpipe (API 1.3.255, CPU)");
    }
}
