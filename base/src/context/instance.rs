
use ash::vk;
use raw_window_handle::HasDisplayHandle;

use crate::context::debug::DebugType;
use crate::utils::cast::{chars2string, cstrings2ptrs};
use crate::error::{VkResult, VkError};
use crate::{vkuint, vkchar};

use std::ffi::CString;
use std::fmt;

/// The name of the Khronos validation layer.
pub const VALIDATION_LAYER_NAME: &str = "VK_LAYER_KHRONOS_validation";

/// The configuration parameters used in the initialization of `vk::Instance`.
#[derive(Debug, Clone)]
pub struct InstanceConfig {

    /// `api_version` must be the highest version of Vulkan that the application is designed to use.
    ///
    /// The patch version number is ignored and only the major and minor versions must match those requested in `api_version`.
    pub api_version: vkuint,
    /// `application_version` is an unsigned integer variable containing the developer-supplied version number of the application.
    pub application_version: vkuint,
    /// `engine_version`is an unsigned integer variable containing the developer-supplied version number of the engine used to create the application.
    pub engine_version: vkuint,
    /// `application_name` is a string containing the name of the application.
    pub application_name: String,
    /// `engine_name` is the name of the engine used to create the application.
    pub engine_name: String,
    /// `print_available_layers` logs the name and description of every available instance layer.
    pub print_available_layers: bool,
    /// `require_layer_names` specific which layers to load by vulkan.
    pub require_layer_names: Vec<String>,
    /// `debug` specifies the debug tools used in vulkan backend.
    pub debug: DebugType,
}

impl Default for InstanceConfig {

    fn default() -> InstanceConfig {
       InstanceConfig {
           api_version         : vk::API_VERSION_1_0,
           application_version : vk::make_api_version(0, 1, 0, 0),
           engine_version      : vk::make_api_version(0, 1, 0, 0),
           application_name    : String::from("Vulkan learning"),
           engine_name         : String::from("no engine"),
           print_available_layers: false,
           require_layer_names : Vec::new(),
           debug: DebugType::None,
       }
    }
}

impl InstanceConfig {

    /// Request the Khronos validation layer together with the Debug Utils messenger.
    pub fn enable_validation(&mut self) {

        if !self.require_layer_names.iter().any(|layer| layer == VALIDATION_LAYER_NAME) {
            self.require_layer_names.push(String::from(VALIDATION_LAYER_NAME));
        }
        self.debug = DebugType::DebugUtils;
    }
}

/// Wrapper class for `vk::Instance` object.
pub struct VkInstance {

    /// handle of `vk::Instance`.
    pub handle: ash::Instance,
    /// the object used in instance creation define in ash crate.
    pub entry: ash::Entry,
    /// an array to store the names of vulkan layers enabled in instance creation.
    pub enable_layer_names: Vec<CString>,
}

impl VkInstance {

    /// Initialize `vk::Instance` object with the extensions the window system of `window` requires.
    pub fn new(config: &InstanceConfig, window: &impl HasDisplayHandle) -> VkResult<VkInstance> {

        let entry = unsafe {
            ash::Entry::load()
                .map_err(|_| VkError::unlink("Entry"))?
        };

        let app_name = CString::new(config.application_name.as_bytes())
            .map_err(|_| VkError::other("Failed to cast application name to CString."))?;
        let engine_name = CString::new(config.engine_name.as_bytes())
            .map_err(|_| VkError::other("Failed to cast engine name to CString."))?;

        let application_info = vk::ApplicationInfo::default()
            .application_name(&app_name)
            .application_version(config.application_version)
            .engine_name(&engine_name)
            .engine_version(config.engine_version)
            .api_version(config.api_version);

        let available_layers = query_available_layers(&entry)?;
        if config.print_available_layers {
            print_available_layers(&available_layers);
        }

        // check if all instance layer is support.
        if let Some(missing) = find_missing_layer(&available_layers, &config.require_layer_names) {
            return Err(VkError::unsupported(format!("Instance layer {}", missing)))
        }

        // get the names of required vulkan layers.
        let enable_layer_names = layer_names_to_cstring(&config.require_layer_names)?;
        let enable_layer_names_ptr = cstrings2ptrs(&enable_layer_names);
        // get the names of required vulkan extensions.
        let enable_extension_names = VkInstance::require_extensions(window, config.debug)?;

        let instance_ci = vk::InstanceCreateInfo::default()
            .application_info(&application_info)
            .enabled_layer_names(&enable_layer_names_ptr)
            .enabled_extension_names(&enable_extension_names);

        // create vk::Instance object.
        let handle = unsafe {
            entry.create_instance(&instance_ci, None)
                .map_err(|e| VkError::create("Instance").caused_by(e))?
        };

        tracing::debug!(layers = ?config.require_layer_names, extensions = enable_extension_names.len(), "created vk::Instance");

        let instance = VkInstance { entry, handle, enable_layer_names };
        Ok(instance)
    }

    /// Specify the necessary extensions.
    fn require_extensions(window: &impl HasDisplayHandle, debug: DebugType) -> VkResult<Vec<*const vkchar>> {

        let display = window.display_handle()
            .map_err(|e| VkError::window(e.to_string()))?;

        // the surface extension and the platform specific surface extension.
        let surface_extensions = ash_window::enumerate_required_extensions(display.as_raw())
            .map_err(|e| VkError::query("Surface Extensions").caused_by(e))?;

        let mut instance_extensions = surface_extensions.to_vec();

        match debug {
            | DebugType::DebugUtils => instance_extensions.push(vk::EXT_DEBUG_UTILS_NAME.as_ptr()),
            | DebugType::None => {},
        }

        Ok(instance_extensions)
    }

    /// Enumerate every physical device visible to this instance.
    pub fn enumerate_physical_devices(&self) -> VkResult<Vec<vk::PhysicalDevice>> {

        unsafe {
            self.handle.enumerate_physical_devices()
                .map_err(|e| VkError::query("Physical Device").caused_by(e))
        }
    }

    /// Destroy the `vk::Instance` object.
    ///
    /// In Vulkan, all child objects created using instance must have been destroyed prior to destroying instance.
    pub fn discard(&self) {

        unsafe {
            self.handle.destroy_instance(None);
        }
    }
}

/// The name and description of an instance layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSummary {
    pub name: String,
    pub description: String,
}

impl fmt::Display for LayerSummary {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.name, self.description)
    }
}

fn query_available_layers(entry: &ash::Entry) -> VkResult<Vec<LayerSummary>> {

    let layer_properties = unsafe {
        entry.enumerate_instance_layer_properties()
            .map_err(|e| VkError::query("Layer Properties").caused_by(e))?
    };

    let layers = layer_properties.iter().map(|layer| {
        LayerSummary {
            name: chars2string(&layer.layer_name),
            description: chars2string(&layer.description),
        }
    }).collect();

    Ok(layers)
}

fn print_available_layers(layers: &[LayerSummary]) {

    tracing::info!("{} instance layers available", layers.len());
    for layer in layers.iter() {
        tracing::info!("{}", layer);
    }
}

/// Return the first required layer that is not in `available`.
fn find_missing_layer<'a>(available: &[LayerSummary], required: &'a [String]) -> Option<&'a str> {

    required.iter().find(|required_layer| {
        !available.iter().any(|available_layer| available_layer.name == **required_layer)
    }).map(String::as_str)
}

fn layer_names_to_cstring(layers: &[String]) -> VkResult<Vec<CString>> {

    let mut layer_names = Vec::with_capacity(layers.len());

    for layer in layers.iter() {
        let name_converted = CString::new(layer.as_bytes())
            .map_err(|_| VkError::other("Failed to cast instance layer name to CString."))?;
        layer_names.push(name_converted);
    }

    Ok(layer_names)
}

#[cfg(test)]
mod test {
    use super::*;

    fn layer(name: &str) -> LayerSummary {
        LayerSummary { name: name.to_string(), description: String::new() }
    }

    #[test]
    fn missing_layer_is_reported() {
        let available = [layer("VK_LAYER_KHRONOS_validation")];

        let required = vec![String::from("VK_LAYER_KHRONOS_validation")];
        assert_eq!(find_missing_layer(&available, &required), None);

        let required = vec![String::from("VK_LAYER_KHRONOS_validation"), String::from("VK_LAYER_MESA_overlay")];
        assert_eq!(find_missing_layer(&available, &required), Some("VK_LAYER_MESA_overlay"));
    }

    #[test]
    fn layer_is_printed_with_bracketed_name() {
        let summary = LayerSummary {
            name: String::from("VK_LAYER_KHRONOS_validation"),
            description: String::from("Khronos Validation Layer"),
        };
        assert_eq!(summary.to_string(), "[VK_LAYER_KHRONOS_validation] Khronos Validation Layer");
    }

    #[test]
    fn validation_is_requested_once() {
        let mut config = InstanceConfig::default();
        assert!(config.require_layer_names.is_empty());

        config.enable_validation();
        config.enable_validation();

        assert_eq!(config.require_layer_names, vec![String::from(VALIDATION_LAYER_NAME)]);
        assert_eq!(config.debug, DebugType::DebugUtils);
    }

    #[test]
    fn layer_names_reject_interior_null() {
        assert!(layer_names_to_cstring(&[String::from("bad\0name")]).is_err());
        assert_eq!(layer_names_to_cstring(&[String::from("ok")]).map(|v| v.len()).ok(), Some(1));
    }
}
