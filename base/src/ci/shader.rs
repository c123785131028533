
use ash::vk;

use crate::context::{VkDevice, VkObjectDiscardable};
use crate::ci::{VulkanCI, VkObjectBuildableCI};
use crate::error::{VkResult, VkError};

use std::ffi::{CStr, CString};

/// The first word of every SPIR-V module.
pub const SPIRV_MAGIC_NUMBER: u32 = 0x0723_0203;

// ---------------------------------------------------------------------------------------------------
/// Wrapper class for vk::ShaderModuleCreateInfo, built from SPIR-V words.
#[derive(Debug, Clone)]
pub struct ShaderModuleCI {

    inner: vk::ShaderModuleCreateInfo<'static>,
    code: Vec<u32>,
}

impl VulkanCI<vk::ShaderModuleCreateInfo<'static>> for ShaderModuleCI {

    fn default_ci() -> vk::ShaderModuleCreateInfo<'static> {

        vk::ShaderModuleCreateInfo::default()
            .flags(vk::ShaderModuleCreateFlags::empty())
    }
}

impl VkObjectBuildableCI for ShaderModuleCI {
    type ObjectType = vk::ShaderModule;

    fn build(&self, device: &VkDevice) -> VkResult<Self::ObjectType> {

        if self.code.first() != Some(&SPIRV_MAGIC_NUMBER) {
            return Err(VkError::other("Shader code is not a SPIR-V module."))
        }

        let module = unsafe {
            device.logic.handle.create_shader_module(&self.value(), None)
                .map_err(|e| VkError::create("Shader Module").caused_by(e))?
        };
        Ok(module)
    }
}

impl ShaderModuleCI {

    pub fn from_spirv(code: &[u32]) -> ShaderModuleCI {

        ShaderModuleCI {
            inner: ShaderModuleCI::default_ci(),
            code: code.to_vec(),
        }
    }

    /// `code_size` is counted in bytes.
    pub fn value(&self) -> vk::ShaderModuleCreateInfo<'_> {

        let ci: vk::ShaderModuleCreateInfo<'_> = self.inner;
        ci.code(&self.code)
    }
}

impl VkObjectDiscardable for vk::ShaderModule {

    fn discard_by(self, device: &VkDevice) {
        unsafe {
            device.logic.handle.destroy_shader_module(self, None);
        }
    }
}
// ---------------------------------------------------------------------------------------------------

// ---------------------------------------------------------------------------------------------------
/// Wrapper class for vk::PipelineShaderStageCreateInfo.
#[derive(Debug, Clone)]
pub struct ShaderStageCI {

    inner: vk::PipelineShaderStageCreateInfo<'static>,
    main: CString,
}

impl VulkanCI<vk::PipelineShaderStageCreateInfo<'static>> for ShaderStageCI {

    fn default_ci() -> vk::PipelineShaderStageCreateInfo<'static> {

        vk::PipelineShaderStageCreateInfo::default()
            .flags(vk::PipelineShaderStageCreateFlags::empty())
    }
}

impl ShaderStageCI {

    /// The entry point defaults to `main`.
    pub fn new(stage: vk::ShaderStageFlags, module: vk::ShaderModule) -> ShaderStageCI {

        ShaderStageCI {
            inner: ShaderStageCI::default_ci()
                .stage(stage)
                .module(module),
            main: CString::from(c"main"),
        }
    }

    pub fn value(&self) -> vk::PipelineShaderStageCreateInfo<'_> {

        let ci: vk::PipelineShaderStageCreateInfo<'_> = self.inner;
        ci.name(&self.main)
    }

    #[inline(always)]
    pub fn main(mut self, name: &CStr) -> ShaderStageCI {
        self.main = CString::from(name); self
    }

    #[inline(always)]
    pub fn stage(&self) -> vk::ShaderStageFlags {
        self.inner.stage
    }
}
// ---------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn code_size_is_in_bytes() {
        let code = [SPIRV_MAGIC_NUMBER, 0x0001_0000, 0, 1, 0];
        let ci = ShaderModuleCI::from_spirv(&code);
        let value = ci.value();

        assert_eq!(value.code_size, code.len() * 4);
        assert_eq!(value.p_code, ci.code.as_ptr());
    }

    #[test]
    fn stage_entry_point() {
        let ci = ShaderStageCI::new(vk::ShaderStageFlags::VERTEX, vk::ShaderModule::null());
        let value = ci.value();

        assert_eq!(ci.stage(), vk::ShaderStageFlags::VERTEX);
        assert_eq!(unsafe { CStr::from_ptr(value.p_name) }, c"main");

        let ci = ci.main(c"vs_main");
        assert_eq!(unsafe { CStr::from_ptr(ci.value().p_name) }, c"vs_main");
    }
}
