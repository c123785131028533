
use ash::vk;
use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowAttributes};

#[derive(Debug, Clone)]
pub struct WindowConfig {

    pub title: String,
    /// the inner size of the window, in physical pixels.
    pub dimension: vk::Extent2D,
    pub is_resizable: bool,
}

impl Default for WindowConfig {

    fn default() -> WindowConfig {

        WindowConfig {
            title: String::from("Vulkan"),
            dimension: vk::Extent2D {
                width : 640,
                height: 480,
            },
            is_resizable: false,
        }
    }
}

impl WindowConfig {

    pub(crate) fn attributes(&self) -> WindowAttributes {

        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(self.dimension.width, self.dimension.height))
            .with_resizable(self.is_resizable)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use winit::dpi::Size;

    #[test]
    fn fixed_size_window() {
        let attributes = WindowConfig::default().attributes();

        assert_eq!(attributes.title, "Vulkan");
        assert!(!attributes.resizable);
        assert_eq!(attributes.inner_size, Some(Size::Physical(PhysicalSize::new(640, 480))));
    }
}
