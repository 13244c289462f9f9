//! Liskov substitution.
//!
//! Anything behind `dyn RectangleLike` must let width and height change
//! independently. `CoupledSquare` cannot honour that, so code written
//! against the trait breaks when handed a square. The fix is a smaller,
//! honest interface (`Shape`) with capabilities kept on the concrete types.

use std::fmt;

pub trait RectangleLike: fmt::Debug {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_width(&mut self, width: u32);
    fn set_height(&mut self, height: u32);

    /// Computed in `u64`, which holds the product of any two `u32` sides.
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Rectangle { width, height }
    }
}

impl RectangleLike for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

/// Keeps its sides equal by changing both on every set. Violates the
/// `RectangleLike` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoupledSquare {
    side: u32,
}

impl CoupledSquare {
    pub fn new(side: u32) -> Self {
        CoupledSquare { side }
    }
}

impl RectangleLike for CoupledSquare {
    fn width(&self) -> u32 {
        self.side
    }

    fn height(&self) -> u32 {
        self.side
    }

    fn set_width(&mut self, width: u32) {
        self.side = width;
    }

    fn set_height(&mut self, height: u32) {
        self.side = height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionCheck {
    pub expected_area: u64,
    pub actual_area: u64,
}

impl SubstitutionCheck {
    pub fn passed(&self) -> bool {
        self.expected_area == self.actual_area
    }
}

impl fmt::Display for SubstitutionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed() {
            "PASS"
        } else {
            "FAIL (LSP violated)"
        };
        write!(
            f,
            "expected_area={} | actual_area={} -> {}",
            self.expected_area, self.actual_area, status
        )
    }
}

/// Sets the height to 10 and expects the width to stay put.
pub fn use_rectangle(rc: &mut dyn RectangleLike) -> SubstitutionCheck {
    let original_width = rc.width();
    rc.set_height(10);
    SubstitutionCheck {
        expected_area: u64::from(original_width) * 10,
        actual_area: rc.area(),
    }
}

pub trait Shape: fmt::Debug {
    fn area(&self) -> u64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectangleShape {
    width: u32,
    height: u32,
}

impl RectangleShape {
    pub fn new(width: u32, height: u32) -> Self {
        RectangleShape { width, height }
    }

    /// Not part of `Shape`: only rectangles resize sides independently.
    pub fn resize(&mut self, width: Option<u32>, height: Option<u32>) {
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
    }
}

impl Shape for RectangleShape {
    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareShape {
    side: u32,
}

impl SquareShape {
    pub fn new(side: u32) -> Self {
        SquareShape { side }
    }

    pub fn set_side(&mut self, side: u32) {
        self.side = side;
    }
}

impl Shape for SquareShape {
    fn area(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }
}

/// Relies only on what every `Shape` guarantees.
pub fn use_shape(shape: &dyn Shape) -> String {
    format!("shape={:?} | area={} -> PASS", shape, shape.area())
}
