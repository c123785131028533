
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::workflow::{Workflow, WindowConfig};
use crate::error::{VkResult, VkError};

/// Open a window, run `Workflow::init` against it, and poll window events until the window is closed.
pub struct ProcPipeline {

    config: WindowConfig,
}

impl ProcPipeline {

    pub fn new(config: WindowConfig) -> ProcPipeline {
        ProcPipeline { config }
    }

    /// Run the event loop until the window is closed or `init` fails.
    ///
    /// Return the first error of `init` or `deinit`.
    pub fn launch(self, app: impl Workflow) -> VkResult<()> {

        let event_loop = EventLoop::new()
            .map_err(|e| VkError::window(e.to_string()))?;
        // there is no frame to wait for, so keep polling.
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut handler = WorkflowHandler {
            config: self.config,
            window: None,
            is_initialized: false,
            error: None,
            app,
        };

        event_loop.run_app(&mut handler)
            .map_err(|e| VkError::window(e.to_string()))?;

        match handler.error {
            | Some(error) => Err(error),
            | None => Ok(()),
        }
    }
}

struct WorkflowHandler<A> {

    config: WindowConfig,
    window: Option<Window>,
    is_initialized: bool,
    error: Option<VkError>,

    app: A,
}

impl<A: Workflow> WorkflowHandler<A> {

    fn record_error(&mut self, error: VkError) {

        tracing::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

impl<A: Workflow> ApplicationHandler for WorkflowHandler<A> {

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {

        // only the first resume creates the window.
        if self.window.is_some() {
            return
        }

        let window = match event_loop.create_window(self.config.attributes()) {
            | Ok(window) => window,
            | Err(e) => {
                self.record_error(VkError::window(e.to_string()));
                event_loop.exit();
                return
            },
        };

        self.is_initialized = true;
        if let Err(e) = self.app.init(&window) {
            self.record_error(e);
            event_loop.exit();
        } else {
            tracing::info!("initialization finished, close the window to exit");
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {

        match event {
            | WindowEvent::CloseRequested => {
                tracing::debug!("close requested");
                event_loop.exit();
            },
            | _ => {},
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {

        if self.is_initialized {
            self.is_initialized = false;

            if let Err(e) = self.app.deinit() {
                self.record_error(e);
            }
        }

        // the window outlives every object created for it.
        self.window.take();
    }
}
