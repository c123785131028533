//! Pieces shared by the numbered samples: the command line, the logging setup, the cube data
//! and the resources of the render pass samples.

pub mod cube;
pub mod resource;

use ash::vk;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use vkbase::context::{InstanceConfig, PhysicalDevConfig, SwapchainConfig};
use vkbase::{Workflow, WindowConfig, ProcPipeline};

/// The inner size of every sample window.
pub const WINDOW_WIDTH : u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;

/// Command line options accepted by every sample.
#[derive(Parser, Debug, Clone)]
#[command(about = "Run one step of the Vulkan setup sequence and wait until the window is closed.")]
pub struct SampleArgs {

    /// Enable VK_LAYER_KHRONOS_validation and forward its messages to the log.
    #[arg(long)]
    pub validation: bool,

    /// The physical device type tried first.
    #[arg(long, value_enum)]
    pub device_type: Option<DeviceTypeArg>,

    /// Fail instead of falling back when no device has the preferred type.
    #[arg(long)]
    pub strict_device: bool,

    /// Force the FIFO present mode.
    #[arg(long)]
    pub vsync: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTypeArg {
    Discrete,
    Integrated,
    Virtual,
    Cpu,
    Other,
}

impl From<DeviceTypeArg> for vk::PhysicalDeviceType {

    fn from(arg: DeviceTypeArg) -> vk::PhysicalDeviceType {
        match arg {
            | DeviceTypeArg::Discrete   => vk::PhysicalDeviceType::DISCRETE_GPU,
            | DeviceTypeArg::Integrated => vk::PhysicalDeviceType::INTEGRATED_GPU,
            | DeviceTypeArg::Virtual    => vk::PhysicalDeviceType::VIRTUAL_GPU,
            | DeviceTypeArg::Cpu        => vk::PhysicalDeviceType::CPU,
            | DeviceTypeArg::Other      => vk::PhysicalDeviceType::OTHER,
        }
    }
}

impl SampleArgs {

    pub fn instance_config(&self) -> InstanceConfig {

        let mut config = InstanceConfig::default();
        if self.validation {
            config.enable_validation();
        }
        config
    }

    /// `preference` is the device type of the sample, used unless `--device-type` is given.
    pub fn physical_config(&self, preference: vk::PhysicalDeviceType) -> PhysicalDevConfig {

        let mut config = PhysicalDevConfig::default();
        config.device_type_preference = self.device_type
            .map(vk::PhysicalDeviceType::from)
            .unwrap_or(preference);
        config.strict_device_type = self.strict_device;
        config
    }

    pub fn swapchain_config(&self) -> SwapchainConfig {

        SwapchainConfig {
            present_vsync: self.vsync,
            dimension_preference: vk::Extent2D { width: WINDOW_WIDTH, height: WINDOW_HEIGHT },
        }
    }
}

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}

/// Open the sample window and run `app` inside it, then exit with a failure status if anything went wrong.
pub fn launch(app: impl Workflow) {

    let mut window_config = WindowConfig::default();
    window_config.dimension = vk::Extent2D { width: WINDOW_WIDTH, height: WINDOW_HEIGHT };

    match ProcPipeline::new(window_config).launch(app) {
        | Ok(_) => {},
        | Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use vkbase::context::{DebugType, VALIDATION_LAYER_NAME};

    #[test]
    fn parse_defaults() {

        let args = SampleArgs::try_parse_from(["sample"]).unwrap();
        assert!(!args.validation);
        assert!(!args.strict_device);
        assert!(!args.vsync);
        assert_eq!(args.device_type, None);

        let config = args.physical_config(vk::PhysicalDeviceType::INTEGRATED_GPU);
        assert_eq!(config.device_type_preference, vk::PhysicalDeviceType::INTEGRATED_GPU);
        assert!(!config.strict_device_type);

        let instance = args.instance_config();
        assert!(instance.require_layer_names.is_empty());
        assert_eq!(instance.debug, DebugType::None);
    }

    #[test]
    fn parse_overrides() {

        let args = SampleArgs::try_parse_from([
            "sample", "--validation", "--device-type", "cpu", "--strict-device", "--vsync",
        ]).unwrap();

        assert_eq!(args.device_type, Some(DeviceTypeArg::Cpu));

        let config = args.physical_config(vk::PhysicalDeviceType::DISCRETE_GPU);
        assert_eq!(config.device_type_preference, vk::PhysicalDeviceType::CPU);
        assert!(config.strict_device_type);

        let instance = args.instance_config();
        assert_eq!(instance.require_layer_names, vec![String::from(VALIDATION_LAYER_NAME)]);
        assert_eq!(instance.debug, DebugType::DebugUtils);

        let swapchain = args.swapchain_config();
        assert!(swapchain.present_vsync);
        assert_eq!(swapchain.dimension_preference.width, WINDOW_WIDTH);
        assert_eq!(swapchain.dimension_preference.height, WINDOW_HEIGHT);
    }

    #[test]
    fn reject_unknown_device_type() {
        assert!(SampleArgs::try_parse_from(["sample", "--device-type", "quantum"]).is_err());
    }
}
