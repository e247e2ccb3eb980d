//! Ein einzelnes kubisches Bézier-Segment: Anker, zwei Handles und Sample-Cache.
//!
//! Ein Segment beschreibt den Kurvenbogen, der in seinen eigenen Anker
//! *hineinläuft*: vom Anker/zweiten Handle des Vorgängers über den eigenen
//! ersten Handle bis zum eigenen Anker. Die Verkettung (Vorgänger/Nachfolger)
//! besitzt die [`PathCurve`](super::PathCurve); das Segment kennt seine
//! Nachbarn nicht.

use super::curve_math::evaluate_cubic_bezier;
use glam::Vec2;

/// Welcher der beiden Handles eines Segments gemeint ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Eingehender Handle (formt den Bogen vom Vorgänger)
    First,
    /// Ausgehender Handle (formt den Bogen zum Nachfolger)
    Second,
}

impl HandleSide {
    /// Gibt die jeweils andere Seite zurück.
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::First => HandleSide::Second,
            HandleSide::Second => HandleSide::First,
        }
    }
}

/// Normierte Lage von Anker und Handles relativ zu einer Bounding-Box (Skalier-Start).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ScaleQuotients {
    point: Vec2,
    first_handle: Vec2,
    second_handle: Vec2,
}

/// Kubisches Bézier-Segment mit Handle-Constraints und Hover-/Selektions-Flags.
#[derive(Debug, Clone)]
pub struct BezierSegment {
    point: Vec2,
    first_handle: Vec2,
    second_handle: Vec2,
    segment_count: usize,
    segment_points: Vec<Vec2>,
    /// Gegenüberliegender Handle wird gespiegelt nachgeführt
    pub conjunct: bool,
    is_first: bool,
    /// Anker ist selektiert (Punkt-Editierung, Endpunkt beim Zeichnen)
    pub point_selected: bool,
    point_hovered: bool,
    first_handle_hovered: bool,
    second_handle_hovered: bool,
    last_moved: HandleSide,
    scale: ScaleQuotients,
}

impl BezierSegment {
    /// Erstellt ein Segment am Anker `point`, beide Handles liegen auf dem Anker.
    pub fn new(point: Vec2, segment_count: usize) -> Self {
        Self::with_handles(point, point, point, segment_count)
    }

    /// Erstellt ein Segment mit expliziten Handles.
    pub fn with_handles(
        point: Vec2,
        first_handle: Vec2,
        second_handle: Vec2,
        segment_count: usize,
    ) -> Self {
        let segment_count = segment_count.max(1);
        Self {
            point,
            first_handle,
            second_handle,
            segment_count,
            segment_points: vec![point; segment_count],
            conjunct: true,
            is_first: false,
            point_selected: false,
            point_hovered: false,
            first_handle_hovered: false,
            second_handle_hovered: false,
            last_moved: HandleSide::Second,
            scale: ScaleQuotients::default(),
        }
    }

    /// Ankerpunkt.
    pub fn point(&self) -> Vec2 {
        self.point
    }

    /// Eingehender Handle.
    pub fn first_handle(&self) -> Vec2 {
        self.first_handle
    }

    /// Ausgehender Handle.
    pub fn second_handle(&self) -> Vec2 {
        self.second_handle
    }

    /// Handle der angegebenen Seite.
    pub fn handle(&self, side: HandleSide) -> Vec2 {
        match side {
            HandleSide::First => self.first_handle,
            HandleSide::Second => self.second_handle,
        }
    }

    /// Tessellierungs-Auflösung dieses Segments.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Gecachte Samples des eingehenden Bogens (letztes Sample = Anker).
    pub fn segment_points(&self) -> &[Vec2] {
        &self.segment_points
    }

    /// `true` für den Kopf einer offenen Kette.
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// Seite des zuletzt bewegten Handles.
    pub fn last_moved(&self) -> HandleSide {
        self.last_moved
    }

    pub fn point_hovered(&self) -> bool {
        self.point_hovered
    }

    pub fn first_handle_hovered(&self) -> bool {
        self.first_handle_hovered
    }

    pub fn second_handle_hovered(&self) -> bool {
        self.second_handle_hovered
    }

    // ── Hit-Tests ───────────────────────────────────────────────────

    /// Liegt `pos` innerhalb von `radius` um den Anker?
    pub fn hits_point(&self, pos: Vec2, radius: f32) -> bool {
        self.point.distance(pos) <= radius
    }

    /// Trifft `pos` einen der Handles? Der erste Handle hat Vorrang.
    pub fn hit_handle(&self, pos: Vec2, radius: f32) -> Option<HandleSide> {
        if self.first_handle.distance(pos) <= radius {
            Some(HandleSide::First)
        } else if self.second_handle.distance(pos) <= radius {
            Some(HandleSide::Second)
        } else {
            None
        }
    }

    /// Index des ersten Samples innerhalb von `radius` um `pos`.
    pub fn hit_sample(&self, pos: Vec2, radius: f32) -> Option<usize> {
        self.segment_points
            .iter()
            .position(|sample| sample.distance(pos) <= radius)
    }

    // ── Hover-Flags (nur über den HoverToken) ───────────────────────

    pub(crate) fn set_point_hovered(&mut self, hovered: bool) {
        self.point_hovered = hovered;
    }

    pub(crate) fn set_handle_hovered(&mut self, side: HandleSide, hovered: bool) {
        match side {
            HandleSide::First => self.first_handle_hovered = hovered,
            HandleSide::Second => self.second_handle_hovered = hovered,
        }
    }

    pub(crate) fn clear_hover(&mut self) {
        self.point_hovered = false;
        self.first_handle_hovered = false;
        self.second_handle_hovered = false;
    }

    // ── Sample-Cache ────────────────────────────────────────────────

    /// Macht das Segment zum Kopf einer offenen Kette: genau ein Sample (der Anker).
    pub(crate) fn make_head(&mut self) {
        self.is_first = true;
        self.segment_count = 1;
        self.segment_points.clear();
        self.segment_points.push(self.point);
    }

    /// Setzt den Sample-Cache auf `segment_count` Platzhalter zurück (Segment hat jetzt einen Vorgänger).
    pub(crate) fn reset_samples(&mut self, segment_count: usize) {
        self.is_first = false;
        self.segment_count = segment_count.max(1);
        self.segment_points.clear();
        self.segment_points.resize(self.segment_count, self.point);
    }

    /// Berechnet den eingehenden Bogen vom Vorgänger (`prev_point`, `prev_handle`) neu.
    ///
    /// Samples liegen bei `t = i / segment_count` für `i = 1..=segment_count`.
    pub(crate) fn compute_arc_from(&mut self, prev_point: Vec2, prev_handle: Vec2) {
        let count = self.segment_count;
        self.segment_points.clear();
        self.segment_points.extend((1..=count).map(|i| {
            let t = i as f32 / count as f32;
            evaluate_cubic_bezier(t, prev_point, prev_handle, self.first_handle, self.point)
        }));
    }

    /// Übernimmt die ersten `count` Samples von `samples` (Einfügen an Split-Index).
    pub(crate) fn copy_segment_points(&mut self, samples: &[Vec2], count: usize) {
        let count = count.min(samples.len());
        self.segment_count = count.max(1);
        self.segment_points.clear();
        self.segment_points.extend_from_slice(&samples[..count]);
    }

    /// Entfernt die ersten `count` Samples.
    pub(crate) fn remove_segment_points(&mut self, count: usize) {
        let count = count.min(self.segment_points.len().saturating_sub(1));
        self.segment_points.drain(..count);
        self.segment_count = self.segment_count.saturating_sub(count).max(1);
    }

    // ── Handle-Editierung ───────────────────────────────────────────

    /// Setzt den Handle `side` auf `position` und führt den Gegenhandle nach.
    ///
    /// - `init`: Gegenhandle wird zum Spiegelbild am Anker.
    /// - sonst bei `conjunct`: Gegenhandle zeigt in die gespiegelte Richtung,
    ///   behält aber seine bisherige Länge.
    pub(crate) fn apply_move_handle(&mut self, position: Vec2, side: HandleSide, init: bool) {
        self.last_moved = side;
        let anchor = self.point;
        let opposite = self.handle(side.opposite());

        let new_opposite = if init {
            Some(anchor + (anchor - position))
        } else if self.conjunct {
            let length = (opposite - anchor).length();
            Some(anchor + (anchor - position).normalize_or_zero() * length)
        } else {
            None
        };

        self.set_handle(side, position);
        if let Some(new_opposite) = new_opposite {
            self.set_handle(side.opposite(), new_opposite);
        }
    }

    pub(crate) fn set_handle(&mut self, side: HandleSide, position: Vec2) {
        match side {
            HandleSide::First => self.first_handle = position,
            HandleSide::Second => self.second_handle = position,
        }
    }

    /// Zieht den Handle `side` um den Anteil `quotient` zum Anker und gibt die neue Lage zurück.
    pub(crate) fn move_handle_closer_to_point(&mut self, quotient: f32, side: HandleSide) -> Vec2 {
        let handle = self.handle(side);
        let moved = handle - (handle - self.point) * quotient;
        self.set_handle(side, moved);
        moved
    }

    /// Verschiebt Anker und beide Handles um `delta`.
    pub(crate) fn translate(&mut self, delta: Vec2) {
        self.point += delta;
        self.first_handle += delta;
        self.second_handle += delta;
        if self.is_first {
            for sample in &mut self.segment_points {
                *sample += delta;
            }
        }
    }

    // ── Skalierung ──────────────────────────────────────────────────

    /// Merkt sich die Lage von Anker und Handles relativ zur Box `origin` + `size`.
    pub(crate) fn start_scale(&mut self, origin: Vec2, size: Vec2) {
        let normalize = |p: Vec2| {
            Vec2::new(
                axis_quotient(p.x - origin.x, size.x),
                axis_quotient(p.y - origin.y, size.y),
            )
        };
        self.scale = ScaleQuotients {
            point: normalize(self.point),
            first_handle: normalize(self.first_handle),
            second_handle: normalize(self.second_handle),
        };
    }

    /// Rekonstruiert Anker und Handles aus den gemerkten Quotienten und der neuen Box.
    pub(crate) fn apply_scale(&mut self, origin: Vec2, size: Vec2) {
        let q = self.scale;
        self.point = origin + q.point * size;
        self.first_handle = origin + q.first_handle * size;
        self.second_handle = origin + q.second_handle * size;
    }
}

fn axis_quotient(offset: f32, extent: f32) -> f32 {
    if extent.abs() <= f32::EPSILON {
        0.0
    } else {
        offset / extent
    }
}
