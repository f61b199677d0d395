use crate::application::Application;

/// Opens a window and clears it every frame, which the engine already does on its own.
#[derive(Debug, Default)]
pub struct HelloWindow;

impl Application for HelloWindow {}
