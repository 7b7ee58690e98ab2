//! sRGB colors as written into DrawingML.

use serde::{Deserialize, Serialize};

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Uppercase `RRGGBB`, the form `a:srgbClr/@val` expects.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb(15, 15, 35).to_hex(), "0F0F23");
        assert_eq!(Rgb(168, 85, 247).to_hex(), "A855F7");
        assert_eq!(Rgb::WHITE.to_hex(), "FFFFFF");
    }
}
