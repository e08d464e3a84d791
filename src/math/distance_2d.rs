use super::Point2;

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the point halfway between `a` and `b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn distance_pythagorean() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn midpoint_of_diagonal() {
        let m = midpoint(&Point2::new(0.0, 0.0), &Point2::new(2.0, -4.0));
        assert!((m.x - 1.0).abs() < TOL);
        assert!((m.y + 2.0).abs() < TOL);
    }
}
