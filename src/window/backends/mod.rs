pub mod headless;

use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::events::Event;
use super::WindowParams;

pub trait Visitor {
    fn dimensions(&self) -> Vector2<u32>;
    fn device_pixel_ratio(&self) -> f32;
    fn resize(&self, dimensions: Vector2<u32>);
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn is_current(&self) -> bool;
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
    fn get_proc_address(&self, symbol: &str) -> *const c_void;

    fn framebuffer_dimensions(&self) -> Vector2<u32> {
        let size = self.dimensions();
        let dpr = self.device_pixel_ratio();
        Vector2::new(
            (size.x as f32 * dpr).round() as u32,
            (size.y as f32 * dpr).round() as u32,
        )
    }
}

mod glutin;

pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    self::glutin::new(params)
}

pub fn new_headless(dimensions: Vector2<u32>) -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new(dimensions))
}
