//! Create-info wrappers.
//!
//! Each wrapper keeps the arrays its create info points to, and attaches the pointers in `value()`,
//! so the returned create info borrows the wrapper and can not outlive it.

pub mod shader;
pub mod pipeline;
pub mod image;
pub mod buffer;
pub mod descriptor;
pub mod memory;
pub mod command;

use crate::context::VkDevice;
use crate::VkResult;

pub(crate) trait VulkanCI<CI>: Sized {

    fn default_ci() -> CI;
}

pub trait VkObjectBuildableCI {
    type ObjectType;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType>;
}
