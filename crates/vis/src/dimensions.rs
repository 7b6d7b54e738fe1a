//! Chart layout dimensions.
//!
//! The dimensions are computed once from a fixed base size and stay
//! immutable for the lifetime of the chart.

/// The whitespace around the bounded chart area, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Margin {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// A uniform margin on all four sides.
    pub fn uniform(size: f64) -> Margin {
        Self::new(size, size, size, size)
    }

    fn max(&self) -> f64 {
        self.top.max(self.right).max(self.bottom).max(self.left)
    }
}

/// The layout of a rectangular chart: the outer size and the bounded
/// drawing area left after subtracting the margins.
#[derive(Debug, Clone, Copy)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub bounded_width: f64,
    pub bounded_height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, margin: Margin) -> Dimensions {
        Self {
            width,
            height,
            margin,
            bounded_width: width - margin.left - margin.right,
            bounded_height: height - margin.top - margin.bottom,
        }
    }
}

/// The layout of a radial chart: a square drawing area with a base radius
/// and a bounded radius that leaves room for the outer marker rings.
#[derive(Debug, Clone, Copy)]
pub struct RadialDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub radius: f64,
    pub bounded_radius: f64,
}

impl RadialDimensions {
    pub fn new(width: f64, margin: Margin) -> RadialDimensions {
        let radius = width / 2.0;

        Self {
            width,
            height: width,
            margin,
            radius,
            bounded_radius: radius - margin.max(),
        }
    }

    /// The chart center in outer coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.radius, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_area_subtracts_the_margins() {
        let dimensions = Dimensions::new(600.0, 300.0, Margin::new(30.0, 10.0, 50.0, 50.0));

        assert_eq!(dimensions.bounded_width, 540.0);
        assert_eq!(dimensions.bounded_height, 220.0);
    }

    #[test]
    fn radial_dimensions_derive_the_bounded_radius() {
        let dimensions = RadialDimensions::new(600.0, Margin::uniform(120.0));

        assert_eq!(dimensions.height, 600.0);
        assert_eq!(dimensions.radius, 300.0);
        assert_eq!(dimensions.bounded_radius, 180.0);
        assert_eq!(dimensions.center(), (300.0, 300.0));
    }
}
