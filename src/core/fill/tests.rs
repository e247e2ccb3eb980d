use super::*;
use crate::core::curve_math::signed_area;
use approx::assert_relative_eq;
use glam::Vec2;

fn total_area(quads: &[Quad]) -> f32 {
    quads.iter().map(quad_area).sum()
}

fn polygon(coords: &[(f32, f32)]) -> Vec<Vec2> {
    coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

#[test]
fn test_convex_quadrilateral_area_matches() {
    let points = polygon(&[(0.0, 0.0), (10.0, 2.0), (8.0, 10.0), (-2.0, 7.0)]);
    let quads = decompose(&points);

    assert!(!quads.is_empty());
    assert_relative_eq!(total_area(&quads), signed_area(&points).abs(), epsilon = 1e-3);
    assert_relative_eq!(total_area(&quads), 80.0, epsilon = 1e-3);
}

#[test]
fn test_concave_w_hexagon_area_matches() {
    // Spitzer Boden, V-förmige Einbuchtung von oben
    let points = polygon(&[
        (5.0, 0.0),
        (10.0, 3.0),
        (10.0, 10.0),
        (5.0, 5.0),
        (0.0, 10.0),
        (0.0, 3.0),
    ]);
    let quads = decompose(&points);

    assert_relative_eq!(signed_area(&points).abs(), 60.0, epsilon = 1e-4);
    assert_relative_eq!(total_area(&quads), 60.0, epsilon = 1e-3);
}

#[test]
fn test_l_shape_area_matches() {
    let points = polygon(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 4.0),
        (4.0, 4.0),
        (4.0, 10.0),
        (0.0, 10.0),
    ]);
    let quads = decompose(&points);

    assert_relative_eq!(total_area(&quads), 64.0, epsilon = 1e-3);
}

#[test]
fn test_u_shape_splits_at_inner_floor() {
    let points = polygon(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (10.0, 10.0),
        (7.0, 10.0),
        (7.0, 3.0),
        (3.0, 3.0),
        (3.0, 10.0),
        (0.0, 10.0),
    ]);
    let quads = decompose(&points);

    // 100 minus Öffnung 4 × 7
    assert_relative_eq!(total_area(&quads), 72.0, epsilon = 1e-3);
}

#[test]
fn test_quads_stay_inside_source_bounds() {
    let points = polygon(&[
        (5.0, 0.0),
        (10.0, 3.0),
        (10.0, 10.0),
        (5.0, 5.0),
        (0.0, 10.0),
        (0.0, 3.0),
    ]);
    for quad in decompose(&points) {
        for p in quad {
            assert!(
                (0.0..=10.0).contains(&p.x) && (0.0..=10.0).contains(&p.y),
                "Quad-Punkt {p:?} liegt außerhalb des Umrisses"
            );
        }
    }
}

#[test]
fn test_triangle_becomes_degenerate_quad() {
    let points = polygon(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
    let quads = decompose(&points);

    assert_eq!(quads.len(), 1);
    assert_eq!(quads[0][2], quads[0][3]);
    assert_relative_eq!(total_area(&quads), 6.0);
}

#[test]
fn test_too_few_points_yield_nothing() {
    assert!(decompose(&[]).is_empty());
    assert!(decompose(&polygon(&[(0.0, 0.0), (1.0, 1.0)])).is_empty());
}

#[test]
fn test_degenerate_input_does_not_panic() {
    let collinear = polygon(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
    assert_relative_eq!(total_area(&decompose(&collinear)), 0.0);

    let same = vec![Vec2::new(2.0, 2.0); 7];
    assert_relative_eq!(total_area(&decompose(&same)), 0.0);

    let with_nan = polygon(&[(0.0, 0.0), (f32::NAN, 1.0), (3.0, f32::NAN), (1.0, 4.0)]);
    let _ = decompose(&with_nan);
}

/// Deterministischer Zufallsstrom (LCG) für Polygon-Generatoren.
struct Lcg(u64);

impl Lcg {
    fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Konvexes Vieleck auf einem Kreis, ein Punkt zur Mitte gezogen (genau eine Einbuchtung).
fn single_notch_polygon(rng: &mut Lcg) -> Vec<Vec2> {
    let count = 4 + (rng.next_f32() * 9.0) as usize;
    let center = Vec2::new(rng.next_f32() * 40.0 - 20.0, rng.next_f32() * 40.0 - 20.0);
    let radius = 5.0 + rng.next_f32() * 30.0;

    let mut angles: Vec<f32> = (0..count)
        .map(|i| (i as f32 + 0.15 + rng.next_f32() * 0.7) * std::f32::consts::TAU / count as f32)
        .collect();
    angles.sort_by(f32::total_cmp);

    let notch = (rng.next_f32() * count as f32) as usize % count;
    let depth = 0.15 + rng.next_f32() * 0.7;
    let mut points: Vec<Vec2> = angles
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            let r = if i == notch { radius * depth } else { radius };
            center + Vec2::new(a.cos(), a.sin()) * r
        })
        .collect();
    if rng.next_f32() < 0.5 {
        points.reverse();
    }
    points
}

fn star(spikes: usize, outer: f32, inner: f32) -> Vec<Vec2> {
    (0..spikes * 2)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::PI / spikes as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let t = if ab.length_squared() > 0.0 {
        ((p - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0)
    } else {
        0.0
    };
    p.distance(a + ab * t)
}

fn inside_or_on(polygon: &[Vec2], p: Vec2, tolerance: f32) -> bool {
    let n = polygon.len();
    let mut inside = false;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[(i + 1) % n]);
        if distance_to_segment(p, a, b) <= tolerance {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) && p.x < a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x) {
            inside = !inside;
        }
    }
    inside
}

fn assert_covers_exactly(points: &[Vec2]) {
    let quads = decompose(points);
    let expected = signed_area(points).abs();
    let tolerance = 1e-3 * expected.max(1.0);
    assert!(
        (total_area(&quads) - expected).abs() <= tolerance,
        "Fläche {} statt {} für {points:?}",
        total_area(&quads),
        expected
    );
    for quad in &quads {
        let center = quad.iter().copied().sum::<Vec2>() / 4.0;
        assert!(
            inside_or_on(points, center, 1e-3),
            "Quad-Mitte {center:?} liegt außerhalb von {points:?}"
        );
    }
}

#[test]
fn test_single_notch_from_bottom_right_area_matches() {
    let points = polygon(&[(11.0, 11.0), (8.0, 3.0), (7.0, 19.0), (14.0, 6.0), (14.0, 3.0)]);

    assert_relative_eq!(signed_area(&points).abs(), 34.5, epsilon = 1e-4);
    assert_covers_exactly(&points);
}

#[test]
fn test_generated_single_notch_polygons_area_matches() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..500 {
        let points = single_notch_polygon(&mut rng);
        assert_covers_exactly(&points);
    }
}

#[test]
fn test_generated_quads_stay_inside_polygon() {
    let mut rng = Lcg(0xf111);
    for _ in 0..200 {
        let points = single_notch_polygon(&mut rng);
        for quad in decompose(&points) {
            for p in quad {
                assert!(
                    inside_or_on(&points, p, 1e-3),
                    "Quad-Punkt {p:?} liegt außerhalb von {points:?}"
                );
            }
        }
    }
}

#[test]
fn test_star_with_many_notches_area_matches() {
    for spikes in [5, 16, 64] {
        assert_covers_exactly(&star(spikes, 500.0, 200.0));
    }
}

#[test]
fn test_quads_are_convex() {
    let points = star(16, 500.0, 200.0);
    for quad in decompose(&points) {
        let mut sign = 0.0f32;
        for i in 0..4 {
            let (a, b, c) = (quad[i], quad[(i + 1) % 4], quad[(i + 2) % 4]);
            let cross = (b - a).perp_dot(c - b);
            if cross.abs() > 1e-3 {
                assert!(sign == 0.0 || sign == cross.signum(), "Quad {quad:?} ist nicht konvex");
                sign = cross.signum();
            }
        }
    }
}
