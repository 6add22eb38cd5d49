//! Point and ray queries against triangles.

use nalgebra::{Point3, Vector3};

/// Closest point on a triangle to a query point.
///
/// Voronoi-region walk after Ericson, "Real-Time Collision Detection".
#[must_use]
pub fn closest_point_on_triangle(point: Point3<f64>, tri: &[Point3<f64>; 3]) -> Point3<f64> {
    let [a, b, c] = *tri;
    let ab = b - a;
    let ac = c - a;

    let ap = point - a;
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a; // vertex region A
    }

    let bp = point - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b; // vertex region B
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        // edge region AB
        let v = d1 / (d1 - d3);
        return a + ab * v;
    }

    let cp = point - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c; // vertex region C
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        // edge region AC
        let w = d2 / (d2 - d6);
        return a + ac * w;
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        // edge region BC
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    // face region
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// Ray-triangle intersection (Möller–Trumbore).
///
/// Returns the ray parameter `t` at the hit, or `None` for a miss or a
/// ray parallel to the triangle plane.
#[must_use]
pub fn ray_triangle_intersect(
    origin: Point3<f64>,
    dir: Vector3<f64>,
    tri: &[Point3<f64>; 3],
) -> Option<f64> {
    const EPSILON: f64 = 1e-10;

    let [a, b, c] = *tri;
    let edge1 = b - a;
    let edge2 = c - a;

    let h = dir.cross(&edge2);
    let det = edge1.dot(&h);
    if det.abs() < EPSILON {
        return None; // parallel (also rejects degenerate triangles)
    }

    let inv_det = 1.0 / det;
    let s = origin - a;
    let u = inv_det * s.dot(&h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(&edge1);
    let v = inv_det * dir.dot(&q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = inv_det * edge2.dot(&q);
    (t > EPSILON).then_some(t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_triangle() -> [Point3<f64>; 3] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(2.0, 4.0, 0.0),
        ]
    }

    #[test]
    fn closest_point_face_region() {
        let tri = flat_triangle();
        let closest = closest_point_on_triangle(Point3::new(2.0, 1.0, 3.0), &tri);
        assert_relative_eq!(closest.x, 2.0);
        assert_relative_eq!(closest.y, 1.0);
        assert_relative_eq!(closest.z, 0.0);
    }

    #[test]
    fn closest_point_vertex_region() {
        let tri = flat_triangle();
        let closest = closest_point_on_triangle(Point3::new(-2.0, -2.0, 0.0), &tri);
        assert_relative_eq!(closest.x, 0.0);
        assert_relative_eq!(closest.y, 0.0);
    }

    #[test]
    fn closest_point_edge_region() {
        let tri = flat_triangle();
        let closest = closest_point_on_triangle(Point3::new(2.0, -3.0, 0.0), &tri);
        assert_relative_eq!(closest.y, 0.0);
        assert!(closest.x >= 0.0 && closest.x <= 4.0);
    }

    #[test]
    fn ray_hit_returns_parameter() {
        let tri = flat_triangle();
        let t = ray_triangle_intersect(
            Point3::new(2.0, 1.0, 5.0),
            Vector3::new(0.0, 0.0, -1.0),
            &tri,
        );
        assert_relative_eq!(t.unwrap(), 5.0);
    }

    #[test]
    fn ray_miss_and_parallel() {
        let tri = flat_triangle();
        assert!(ray_triangle_intersect(
            Point3::new(50.0, 50.0, 5.0),
            Vector3::new(0.0, 0.0, -1.0),
            &tri,
        )
        .is_none());
        assert!(ray_triangle_intersect(
            Point3::new(2.0, 1.0, 5.0),
            Vector3::new(1.0, 0.0, 0.0),
            &tri,
        )
        .is_none());
    }

    #[test]
    fn ray_behind_origin_is_no_hit() {
        let tri = flat_triangle();
        let t = ray_triangle_intersect(
            Point3::new(2.0, 1.0, -5.0),
            Vector3::new(0.0, 0.0, -1.0),
            &tri,
        );
        assert!(t.is_none());
    }

    #[test]
    fn degenerate_triangle_never_hits() {
        let tri = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0), // collinear
        ];
        let t = ray_triangle_intersect(
            Point3::new(1.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, -1.0),
            &tri,
        );
        assert!(t.is_none());
    }
}
