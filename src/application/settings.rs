//! Functions for loading settings.

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::math::prelude::Color;
use crate::window::WindowParams;

/// A structure containing configuration data for the engine, which are used to
/// specify hardware setup stuff to create the window and other context information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowParams,
    /// The color every frame is cleared to.
    pub clear_color: Color<f32>,
    /// Runs without any window or GPU.
    pub headless: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowParams::default(),
            clear_color: Color::teal(),
            headless: false,
        }
    }
}

impl Settings {
    /// Parses settings from JSON. Missing fields keep their default values.
    pub fn from_json(json: &str) -> Result<Settings> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::prelude::Vector2;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window.title, "Solar");
        assert_eq!(settings.window.size, Vector2::new(800, 600));
        assert_eq!(settings.window.gl_version, (3, 3));
        assert_eq!(settings.clear_color, Color::from([0.2, 0.3, 0.3, 1.0]));
        assert!(!settings.headless);
    }

    #[test]
    fn json() {
        let settings =
            Settings::from_json(r#"{ "headless": true, "window": { "title": "Triangle" } }"#)
                .unwrap();

        assert!(settings.headless);
        assert_eq!(settings.window.title, "Triangle");
        assert_eq!(settings.window.size, Vector2::new(800, 600));

        assert!(Settings::from_json(r#"{ "headless": "yes" }"#).is_err());
    }
}
