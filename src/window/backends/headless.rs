use std::cell::Cell;
use std::collections::VecDeque;
use std::os::raw::c_void;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

/// A window without any OS surface behind it. Events are scripted up-front with
/// `schedule`, one batch per `poll_events`.
pub struct HeadlessVisitor {
    dimensions: Cell<Vector2<u32>>,
    batches: VecDeque<Vec<Event>>,
}

impl HeadlessVisitor {
    pub fn new(dimensions: Vector2<u32>) -> Self {
        HeadlessVisitor {
            dimensions: Cell::new(dimensions),
            batches: VecDeque::new(),
        }
    }

    /// Queues a batch of events that will be delivered by one future poll.
    pub fn schedule(&mut self, events: Vec<Event>) {
        self.batches.push_back(events);
    }
}

impl Visitor for HeadlessVisitor {
    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        self.dimensions.get()
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    #[inline]
    fn resize(&self, dimensions: Vector2<u32>) {
        self.dimensions.set(dimensions);
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        if let Some(batch) = self.batches.pop_front() {
            for v in batch {
                if let Event::Window(WindowEvent::Resized(width, height)) = v {
                    self.resize(Vector2::new(width, height));
                }

                events.push(v);
            }
        }
    }

    #[inline]
    fn is_current(&self) -> bool {
        true
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn get_proc_address(&self, _: &str) -> *const c_void {
        ::std::ptr::null()
    }
}
