
use ash::vk;
use thiserror::Error;

use std::error::Error as StdError;
use std::fmt;
use std::result;

pub type VkResult<T> = result::Result<T, VkError>;

// -------------------------------------------------------------------------------------------
/// The error type of every fallible call in this crate.
///
/// It records what kind of step failed, and the `vk::Result` returned by the driver if there was one.
#[derive(Debug)]
pub struct VkError {

    kind: VkErrorKind,
    result: Option<vk::Result>,
}

impl VkError {

    pub fn kind(&self) -> &VkErrorKind {
        &self.kind
    }

    /// The `vk::Result` that caused this error, if the error came from a Vulkan call.
    pub fn vk_result(&self) -> Option<vk::Result> {
        self.result
    }

    /// Attach the `vk::Result` returned by the failed Vulkan call.
    pub fn caused_by(mut self, result: vk::Result) -> VkError {
        self.result = Some(result); self
    }

    pub fn unlink(target_name: &'static str) -> VkError {
        VkError::from(VkErrorKind::Unlink { target_name })
    }

    pub fn query(query_target: &'static str) -> VkError {
        VkError::from(VkErrorKind::Query { query_target })
    }

    pub fn create(create_target: &'static str) -> VkError {
        VkError::from(VkErrorKind::Create { create_target })
    }

    pub fn unsupported(feature: impl AsRef<str>) -> VkError {
        VkError::from(VkErrorKind::UnSupport { feature: feature.as_ref().to_string() })
    }

    pub fn device(ops_description: &'static str) -> VkError {
        VkError::from(VkErrorKind::Device { ops_description })
    }

    pub fn window(description: impl AsRef<str>) -> VkError {
        VkError::from(VkErrorKind::Window { description: description.as_ref().to_string() })
    }

    pub fn other(description: impl AsRef<str>) -> VkError {
        VkError::from(VkErrorKind::Other {
            description: description.as_ref().to_string()
        })
    }
}

impl StdError for VkError {

    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.result.as_ref().map(|result| result as &(dyn StdError + 'static))
    }
}

impl fmt::Display for VkError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        match self.result {
            | Some(result) => write!(f, "{} (result = {:?})", self.kind, result),
            | None => write!(f, "{}", self.kind),
        }
    }
}
// -------------------------------------------------------------------------------------------

// -------------------------------------------------------------------------------------------
/// The specific kind of error that can occur.
#[derive(Debug, Error)]
pub enum VkErrorKind {

    /// An error occurred while building connection between application and Vulkan.
    #[error("Failed to bridge connection between {target_name} and Vulkan.")]
    Unlink { target_name: &'static str },
    /// An error occurred while querying some properties from Vulkan.
    #[error("Failed to query {query_target} property from Vulkan or Device.")]
    Query { query_target: &'static str },
    /// An error occurred while creating Vulkan Object.
    #[error("Failed to create {create_target}.")]
    Create { create_target: &'static str },
    /// An error indicated requiring some unsupported feature.
    #[error("{feature} is not supported in current Vulkan Device.")]
    UnSupport { feature: String },
    /// An error triggered by Invalid Device operations.
    #[error("Invalid Operation: {ops_description}")]
    Device { ops_description: &'static str },
    /// An error occurred while communicate with Window.
    #[error("Failed to interact with Window: {description}.")]
    Window { description: String },
    /// Other errors.
    #[error("{description}")]
    Other { description: String },
}

impl From<VkErrorKind> for VkError {

    fn from(kind: VkErrorKind) -> VkError {
        VkError { kind, result: None }
    }
}
// -------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_without_result() {
        let error = VkError::create("Swapchain");
        assert_eq!(error.to_string(), "Failed to create Swapchain.");
        assert!(error.source().is_none());
    }

    #[test]
    fn display_and_source_with_result() {
        let error = VkError::create("Instance").caused_by(vk::Result::ERROR_INCOMPATIBLE_DRIVER);

        assert_eq!(error.vk_result(), Some(vk::Result::ERROR_INCOMPATIBLE_DRIVER));
        assert!(error.to_string().starts_with("Failed to create Instance. (result = "));
        assert!(error.source().is_some());
    }

    #[test]
    fn kind_is_preserved() {
        let error = VkError::unsupported("Depth image format D16_UNORM");
        match error.kind() {
            | VkErrorKind::UnSupport { feature } => assert_eq!(feature, "Depth image format D16_UNORM"),
            | other => panic!("unexpected kind: {:?}", other),
        }
    }
}
