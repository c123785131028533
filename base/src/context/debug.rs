
use ash::vk;

use crate::context::instance::VkInstance;
use crate::error::{VkResult, VkError};
use crate::vkptr;

use std::ffi::CStr;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DebugType {
    DebugUtils,
    /// set None to disable Debug tools.
    #[default]
    None,
}

/// The configuration parameters used in the initialization of `vk::DebugUtilsMessengerEXT`.
#[derive(Debug, Clone)]
pub struct DebugUtilsConfig {

    pub flags    : vk::DebugUtilsMessengerCreateFlagsEXT,
    pub severity : vk::DebugUtilsMessageSeverityFlagsEXT,
    pub types    : vk::DebugUtilsMessageTypeFlagsEXT,
}

impl Default for DebugUtilsConfig {

    fn default() -> DebugUtilsConfig {
        DebugUtilsConfig {
            flags: vk::DebugUtilsMessengerCreateFlagsEXT::empty(),
            severity:
                vk::DebugUtilsMessageSeverityFlagsEXT::WARNING |
                vk::DebugUtilsMessageSeverityFlagsEXT::INFO |
                vk::DebugUtilsMessageSeverityFlagsEXT::ERROR,
            types:
                vk::DebugUtilsMessageTypeFlagsEXT::GENERAL |
                vk::DebugUtilsMessageTypeFlagsEXT::PERFORMANCE |
                vk::DebugUtilsMessageTypeFlagsEXT::VALIDATION,
        }
    }
}

/// Wrapper class for the validation messenger.
///
/// When the debug type is `DebugType::None` this wrapper holds nothing and `discard` does nothing.
pub struct VkDebugger {

    target: Option<VkDebugUtils>,
}

impl VkDebugger {

    pub fn new(instance: &VkInstance, debug: DebugType, config: &DebugUtilsConfig) -> VkResult<VkDebugger> {

        let target = match debug {
            | DebugType::DebugUtils => Some(VkDebugUtils::new(instance, config)?),
            | DebugType::None => None,
        };

        Ok(VkDebugger { target })
    }

    pub fn discard(&self) {

        if let Some(ref utils) = self.target {
            utils.discard();
        }
    }
}

// Debug Utils ------------------------------------------------------------------------------------

/// Map the severity reported by the validation layer to a `tracing` level.
fn severity_level(severity: vk::DebugUtilsMessageSeverityFlagsEXT) -> tracing::Level {

    if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::ERROR) {
        tracing::Level::ERROR
    } else if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::WARNING) {
        tracing::Level::WARN
    } else if severity.contains(vk::DebugUtilsMessageSeverityFlagsEXT::INFO) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::TRACE
    }
}

/// the callback function used in Debug Utils.
unsafe extern "system" fn vulkan_debug_utils_callback(
    message_severity : vk::DebugUtilsMessageSeverityFlagsEXT,
    message_type     : vk::DebugUtilsMessageTypeFlagsEXT,
    p_callback_data  : *const vk::DebugUtilsMessengerCallbackDataEXT<'_>,
    _p_user_data     : vkptr,
) -> vk::Bool32 {

    if p_callback_data.is_null() || (*p_callback_data).p_message.is_null() {
        return vk::FALSE
    }

    let message = CStr::from_ptr((*p_callback_data).p_message).to_string_lossy();

    let level = severity_level(message_severity);
    if level == tracing::Level::ERROR {
        tracing::error!(target: "vulkan", "{:?} {}", message_type, message);
    } else if level == tracing::Level::WARN {
        tracing::warn!(target: "vulkan", "{:?} {}", message_type, message);
    } else if level == tracing::Level::DEBUG {
        tracing::debug!(target: "vulkan", "{:?} {}", message_type, message);
    } else {
        tracing::trace!(target: "vulkan", "{:?} {}", message_type, message);
    }

    vk::FALSE
}

/// Wrapper class for `vk::DebugUtilsMessengerEXT` object.
struct VkDebugUtils {
    /// the extension loader of `VK_EXT_debug_utils`.
    loader: ash::ext::debug_utils::Instance,
    /// the handle of callback function used in Validation Layer.
    utils_messenger: vk::DebugUtilsMessengerEXT,
}

impl VkDebugUtils {

    fn new(instance: &VkInstance, config: &DebugUtilsConfig) -> VkResult<VkDebugUtils> {

        let loader = ash::ext::debug_utils::Instance::new(&instance.entry, &instance.handle);

        let messenger_ci = vk::DebugUtilsMessengerCreateInfoEXT::default()
            .flags(config.flags)
            .message_severity(config.severity)
            .message_type(config.types)
            .pfn_user_callback(Some(vulkan_debug_utils_callback));

        let utils_messenger = unsafe {
            loader.create_debug_utils_messenger(&messenger_ci, None)
                .map_err(|e| VkError::create("Debug Utils Messenger").caused_by(e))?
        };

        tracing::debug!("validation messages are forwarded to the log");

        let utils = VkDebugUtils { loader, utils_messenger };
        Ok(utils)
    }

    fn discard(&self) {
        unsafe {
            self.loader.destroy_debug_utils_messenger(self.utils_messenger, None);
        }
    }
}
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn severity_maps_to_level() {
        use vk::DebugUtilsMessageSeverityFlagsEXT as Severity;

        assert_eq!(severity_level(Severity::ERROR), tracing::Level::ERROR);
        assert_eq!(severity_level(Severity::WARNING), tracing::Level::WARN);
        assert_eq!(severity_level(Severity::INFO), tracing::Level::DEBUG);
        assert_eq!(severity_level(Severity::VERBOSE), tracing::Level::TRACE);
    }

    #[test]
    fn debug_tools_are_off_by_default() {
        assert_eq!(DebugType::default(), DebugType::None);
    }
}
