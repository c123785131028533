
pub use self::window::WindowConfig;
pub use self::loops::ProcPipeline;

mod window;
mod loops;

use winit::window::Window;

use crate::error::VkResult;

/// The setup and teardown of a program that runs inside `ProcPipeline`.
pub trait Workflow {

    /// Called once, after the window is created.
    fn init(&mut self, window: &Window) -> VkResult<()>;

    /// Called once when the loop stops, also after a failed `init`, so it must only discard the objects that exist.
    fn deinit(&mut self) -> VkResult<()>;
}

/// Run `discard` whatever the result of the idle wait was, then return that result.
///
/// A lost device still owns its objects, so a failed wait must not skip the teardown.
pub fn discard_after_wait(idle: VkResult<()>, discard: impl FnOnce()) -> VkResult<()> {

    if let Err(ref e) = idle {
        tracing::warn!("{}, discarding the remaining objects anyway", e);
    }

    discard();
    idle
}

#[cfg(test)]
mod test {
    use super::*;

    use ash::vk;
    use crate::error::VkError;

    #[test]
    fn discard_runs_after_failed_wait() {

        let mut discarded = Vec::new();
        let idle = Err(VkError::device("Device Waiting Idle").caused_by(vk::Result::ERROR_DEVICE_LOST));

        let result = discard_after_wait(idle, || {
            discarded.push("swapchain");
            discarded.push("device");
        });

        assert_eq!(discarded, ["swapchain", "device"]);
        assert_eq!(result.unwrap_err().vk_result(), Some(vk::Result::ERROR_DEVICE_LOST));
    }

    #[test]
    fn discard_runs_after_idle() {

        let mut discarded = false;
        let result = discard_after_wait(Ok(()), || discarded = true);

        assert!(discarded);
        assert!(result.is_ok());
    }
}
