//! Zerlegung eines abgeflachten Umrisses in konvexe Vierecke für die Flächenfüllung.
//!
//! Sweep von unten nach oben über waagerechte Streifen zwischen aufeinander
//! folgenden Punkthöhen. Innerhalb eines Streifens liegt kein Polygonpunkt,
//! die kreuzenden Kanten sind also nach x geordnet und bilden paarweise
//! (gerade/ungerade) Trapeze. Bleibt ein Kantenpaar über mehrere Streifen
//! gleich, wächst das Trapez nach oben weiter. Eine Einbuchtung beginnt oder
//! beendet eine Kante und teilt damit den laufenden Streifen an ihrer Höhe.
//!
//! Reine Funktion: Die Eingabe wird nicht verändert.

use super::curve_math::{line_x_at_y, signed_area};
use glam::Vec2;

/// Viereck in Umlaufreihenfolge; Dreiecke wiederholen den letzten Punkt.
pub type Quad = [Vec2; 4];

/// Fläche eines Vierecks (Betrag).
pub fn quad_area(quad: &Quad) -> f32 {
    signed_area(quad).abs()
}

/// Nicht waagerechte Polygonkante, unten nach oben orientiert.
#[derive(Debug, Clone, Copy)]
struct Edge {
    low: Vec2,
    high: Vec2,
}

impl Edge {
    fn new(a: Vec2, b: Vec2) -> Option<Self> {
        if a.y < b.y {
            Some(Self { low: a, high: b })
        } else if b.y < a.y {
            Some(Self { low: b, high: a })
        } else {
            None
        }
    }

    /// x auf Höhe `y`; an den Endpunkten exakt.
    fn x_at(&self, y: f32) -> f32 {
        if y >= self.high.y {
            self.high.x
        } else {
            line_x_at_y(self.low, self.high, y)
        }
    }
}

/// Laufendes Trapez zwischen zwei Kanten, offen nach oben.
#[derive(Debug, Clone, Copy)]
struct Strip {
    left: usize,
    right: usize,
    bottom_y: f32,
}

impl Strip {
    fn close(&self, edges: &[Edge], top_y: f32) -> Option<Quad> {
        let (left, right) = (&edges[self.left], &edges[self.right]);
        let quad = [
            Vec2::new(left.x_at(self.bottom_y), self.bottom_y),
            Vec2::new(right.x_at(self.bottom_y), self.bottom_y),
            Vec2::new(right.x_at(top_y), top_y),
            Vec2::new(left.x_at(top_y), top_y),
        ];
        (quad_area(&quad) > f32::EPSILON).then_some(quad)
    }
}

/// Zerlegt ein zyklisches Polygon in konvexe Vierecke.
///
/// Weniger als drei Punkte ergeben keine Ausgabe. Für einfache Polygone
/// deckt die Ausgabe genau die Innenfläche ab; bei Selbstüberschneidungen
/// gilt die Gerade-Ungerade-Regel je Streifen.
pub fn decompose(points: &[Vec2]) -> Vec<Quad> {
    if points.len() < 3 {
        return Vec::new();
    }
    if points.iter().any(|p| !p.is_finite()) {
        log::warn!("Flächenzerlegung übersprungen: Umriss enthält ungültige Koordinaten");
        return Vec::new();
    }

    let n = points.len();
    let mut edges: Vec<Edge> = (0..n)
        .filter_map(|i| Edge::new(points[i], points[(i + 1) % n]))
        .collect();
    edges.sort_by(|a, b| a.low.y.total_cmp(&b.low.y));

    let mut heights: Vec<f32> = points.iter().map(|p| p.y).collect();
    heights.sort_by(f32::total_cmp);
    heights.dedup();

    let mut quads = Vec::new();
    let mut open: Vec<Strip> = Vec::new();
    let mut active: Vec<usize> = Vec::new();
    let mut next_edge = 0;

    for pair in heights.windows(2) {
        let (y0, y1) = (pair[0], pair[1]);

        active.retain(|&e| edges[e].high.y > y0);
        while next_edge < edges.len() && edges[next_edge].low.y <= y0 {
            if edges[next_edge].high.y > y0 {
                active.push(next_edge);
            }
            next_edge += 1;
        }

        let mid = 0.5 * (y0 + y1);
        active.sort_by(|&a, &b| edges[a].x_at(mid).total_cmp(&edges[b].x_at(mid)));

        let mut continued = Vec::with_capacity(active.len() / 2);
        for bounds in active.chunks_exact(2) {
            let (left, right) = (bounds[0], bounds[1]);
            let strip = match open.iter().position(|s| s.left == left && s.right == right) {
                Some(index) => open.swap_remove(index),
                None => Strip {
                    left,
                    right,
                    bottom_y: y0,
                },
            };
            continued.push(strip);
        }

        // Nicht fortgesetzte Trapeze enden auf der Sweep-Linie
        quads.extend(open.iter().filter_map(|s| s.close(&edges, y0)));
        open = continued;
    }

    if let Some(&top) = heights.last() {
        quads.extend(open.iter().filter_map(|s| s.close(&edges, top)));
    }
    quads
}

#[cfg(test)]
mod tests;
