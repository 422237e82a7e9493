use anyhow::Result;

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

pub trait WindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self>
    where
        Self: Sized;

    fn poll_events(&mut self);
    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn get_size(&self) -> (i32, i32);
    fn set_title(&mut self, title: &str);
    fn get_events(&self) -> &WindowEvents;
}
