//! English Metric Units, the coordinate system of OOXML drawings.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Emu(pub i64);

impl Emu {
    /// Raw EMU value.
    pub fn get(self) -> i64 {
        self.0
    }
}

/// Length in inches, truncated to whole EMUs.
pub fn inches(value: f64) -> Emu {
    Emu((value * EMU_PER_INCH as f64) as i64)
}

/// Length in points, truncated to whole EMUs.
pub fn points(value: f64) -> Emu {
    Emu((value * EMU_PER_POINT as f64) as i64)
}

impl Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl Sub for Emu {
    type Output = Emu;

    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

impl Mul<i64> for Emu {
    type Output = Emu;

    fn mul(self, rhs: i64) -> Emu {
        Emu(self.0 * rhs)
    }
}

impl std::fmt::Display for Emu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position and size of a shape on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: Emu,
    pub y: Emu,
    pub cx: Emu,
    pub cy: Emu,
}

impl Frame {
    pub fn new(x: Emu, y: Emu, cx: Emu, cy: Emu) -> Self {
        Self { x, y, cx, cy }
    }

    /// Frame given entirely in inches.
    pub fn inches(x: f64, y: f64, cx: f64, cy: f64) -> Self {
        Self::new(inches(x), inches(y), inches(cx), inches(cy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_truncate() {
        assert_eq!(inches(1.0), Emu(914_400));
        assert_eq!(inches(7.5), Emu(6_858_000));
        // 13.333 * 914400 = 12191695.2
        assert_eq!(inches(13.333), Emu(12_191_695));
    }

    #[test]
    fn test_points() {
        assert_eq!(points(1.0), Emu(12_700));
        assert_eq!(points(6.0), Emu(76_200));
    }

    #[test]
    fn test_arithmetic() {
        let x = inches(0.8) + inches(4.0) * 2;
        assert_eq!(x, Emu(731_520 + 7_315_200));
        assert_eq!(inches(3.6) - inches(0.4), Emu(3_291_840 - 365_760));
    }

    #[test]
    fn test_frame_inches() {
        let frame = Frame::inches(1.0, 2.0, 3.0, 0.5);
        assert_eq!(frame.y, Emu(1_828_800));
        assert_eq!(frame.cy, Emu(457_200));
    }
}
