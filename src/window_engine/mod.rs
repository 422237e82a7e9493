pub mod r#trait;
pub use r#trait::{WindowEngine, WindowEvents};

pub mod glfw_window_engine;
pub use glfw_window_engine::GlfwWindowEngine;
