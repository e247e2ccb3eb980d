//! Zustandslose Geometrie-Primitive: Bézier-Auswertung, Geradenschnitt, Kollinearität, Rotation.

use glam::Vec2;

/// Wertet eine kubische Bézier-Kurve (Bernstein-Basis) bei `t` ∈ [0, 1] aus.
///
/// `p0`/`p1` sind die Ankerpunkte, `h0`/`h1` die zugehörigen Handles.
pub fn evaluate_cubic_bezier(t: f32, p0: Vec2, h0: Vec2, h1: Vec2, p1: Vec2) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + h0 * (3.0 * u * u * t) + h1 * (3.0 * u * t * t) + p1 * (t * t * t)
}

/// Punkt auf der Strecke `a → b` beim Anteil `quotient`.
pub fn point_on_line(a: Vec2, b: Vec2, quotient: f32) -> Vec2 {
    a + (b - a) * quotient
}

/// Schnittpunkt der Geraden durch `a1`/`a2` und `b1`/`b2`.
///
/// Gibt `None` zurück, wenn die Geraden parallel sind (Nenner exakt 0).
pub fn line_intersection(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let denominator = (b2.x - b1.x) * (a2.y - a1.y) - (b2.y - b1.y) * (a2.x - a1.x);
    if denominator == 0.0 {
        return None;
    }

    let mu = ((a1.x - b1.x) * (a2.y - a1.y) - (a1.y - b1.y) * (a2.x - a1.x)) / denominator;
    Some(b1 + (b2 - b1) * mu)
}

/// Schnittpunkt zweier Geraden in Punkt-Richtungs-Form.
pub fn ray_intersection(a: Vec2, a_dir: Vec2, b: Vec2, b_dir: Vec2) -> Option<Vec2> {
    line_intersection(a, a + a_dir, b, b + b_dir)
}

/// `true` genau dann, wenn das Kreuzprodukt von (p − a) und (b − a) exakt 0 ist.
///
/// Kein Toleranz-Test: nur exakt kollineare Punkte liegen "auf" der Geraden.
pub fn is_point_on_line(a: Vec2, b: Vec2, p: Vec2) -> bool {
    (p - a).perp_dot(b - a) == 0.0
}

/// Dreht `v` um `degrees` Grad gegen den Uhrzeigersinn.
pub fn rotate_vector(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// x-Koordinate der Strecke `from → to` auf Höhe `y`.
///
/// Löst die Geradengleichung in Parameterform; der Parameter wird auf die
/// Strecke begrenzt. Bei waagerechter Strecke gilt `to.x`.
pub fn line_x_at_y(from: Vec2, to: Vec2, y: f32) -> f32 {
    let dy = to.y - from.y;
    if dy == 0.0 {
        return to.x;
    }
    let t = ((y - from.y) / dy).clamp(0.0, 1.0);
    from.x + (to.x - from.x) * t
}

/// Vorzeichenbehaftete Fläche eines Polygons (Gaußsche Trapezformel).
pub fn signed_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        sum += p.perp_dot(q);
    }
    sum * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bezier_endpoints_and_midpoint() {
        let p0 = Vec2::new(0.0, 0.0);
        let h0 = Vec2::new(0.0, 10.0);
        let h1 = Vec2::new(10.0, 10.0);
        let p1 = Vec2::new(10.0, 0.0);

        assert_eq!(evaluate_cubic_bezier(0.0, p0, h0, h1, p1), p0);
        assert_eq!(evaluate_cubic_bezier(1.0, p0, h0, h1, p1), p1);

        let mid = evaluate_cubic_bezier(0.5, p0, h0, h1, p1);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 7.5);
    }

    #[test]
    fn test_line_intersection_crossing() {
        let hit = line_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("Diagonalen müssen sich schneiden");
        assert_relative_eq!(hit.x, 5.0);
        assert_relative_eq!(hit.y, 5.0);
    }

    #[test]
    fn test_line_intersection_parallel_returns_none() {
        let hit = line_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
        );
        assert!(hit.is_none(), "Parallele Geraden haben keinen Schnittpunkt");
    }

    #[test]
    fn test_point_on_line_is_exact() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(is_point_on_line(a, b, Vec2::new(4.0, 0.0)));
        assert!(!is_point_on_line(a, b, Vec2::new(4.0, 0.001)));
    }

    #[test]
    fn test_rotate_vector_quarter_turn() {
        let v = rotate_vector(Vec2::X, 90.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_line_x_at_y_vertical_and_horizontal() {
        assert_relative_eq!(
            line_x_at_y(Vec2::new(3.0, 0.0), Vec2::new(3.0, 10.0), 4.0),
            3.0
        );
        assert_relative_eq!(
            line_x_at_y(Vec2::new(0.0, 2.0), Vec2::new(8.0, 2.0), 2.0),
            8.0
        );
        assert_relative_eq!(
            line_x_at_y(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), 2.5),
            2.5
        );
    }

    #[test]
    fn test_signed_area_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_relative_eq!(signed_area(&square), 100.0);
    }
}
