use super::Point2;

/// Point-in-polygon test using the winding number algorithm.
///
/// The polygon is implicitly closed. Returns `true` if the winding number of
/// `point` is non-zero, so the orientation of the polygon does not matter.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    winding_number(point, polygon) != 0
}

/// Winding number of `point` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
#[must_use]
pub fn winding_number(point: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];

        if a.y <= point.y {
            if b.y > point.y && cross_2d(b.x - a.x, b.y - a.y, point.x - a.x, point.y - a.y) > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y
            && cross_2d(b.x - a.x, b.y - a.y, point.x - a.x, point.y - a.y) < 0.0
        {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn inside_either_orientation() {
        let p = Point2::new(0.5, 0.5);
        let mut square = unit_square();
        assert!(point_in_polygon(&p, &square));
        square.reverse();
        assert!(point_in_polygon(&p, &square));
        assert_eq!(winding_number(&p, &square), -1);
    }

    #[test]
    fn outside_square() {
        assert!(!point_in_polygon(&Point2::new(1.5, 0.5), &unit_square()));
        assert!(!point_in_polygon(&Point2::new(-0.1, -0.1), &unit_square()));
    }

    #[test]
    fn inside_concave_notch() {
        // U shape open at the top between x=1 and x=2.
        let u = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ];
        assert!(point_in_polygon(&Point2::new(0.5, 2.0), &u));
        assert!(!point_in_polygon(&Point2::new(1.5, 2.0), &u));
    }

    #[test]
    fn too_few_vertices() {
        let line = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(!point_in_polygon(&Point2::new(0.5, 0.5), &line));
    }
}
