use cgmath::BaseFloat;
use serde::{Deserialize, Serialize};

/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color<S> {
    pub r: S,
    pub g: S,
    pub b: S,
    pub a: S,
}

impl<S: BaseFloat> Color<S> {
    pub fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }

    /// The dark teal every tutorial frame starts from.
    pub fn teal() -> Self {
        let r = S::from(0.2).unwrap_or_else(S::zero);
        let gb = S::from(0.3).unwrap_or_else(S::zero);
        Color::new(r, gb, gb, S::one())
    }
}

impl<S: Copy> From<[S; 4]> for Color<S> {
    fn from(v: [S; 4]) -> Self {
        Color {
            r: v[0],
            g: v[1],
            b: v[2],
            a: v[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teal() {
        let color: Color<f32> = Color::teal();
        assert_eq!(color, Color::from([0.2, 0.3, 0.3, 1.0]));
    }
}
