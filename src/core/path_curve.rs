//! Geordnete (ggf. geschlossene) Kette von Bézier-Segmenten mit Topologie-Operationen.
//!
//! Die Segmente liegen in einer Arena mit stabilen [`SegmentId`]s. Vorgänger
//! (`neighbor`) und Nachfolger (`other_neighbor`) werden von der Kette als
//! Indizes verwaltet und sind immer symmetrisch:
//! `other_neighbor(a) == Some(b)` ⇔ `neighbor(b) == Some(a)`.

use super::bezier_segment::{BezierSegment, HandleSide};
use super::curve_math::{line_intersection, point_on_line, ray_intersection};
use super::fill::{decompose, Quad};
use glam::Vec2;

/// Stabile ID eines Segments innerhalb seiner Kette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

/// Aus der Topologie abgeleiteter Zeichen-Zustand einer Kette.
///
/// Die Reihenfolge der Varianten ist bedeutsam (Abonnement-Bereiche).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathState {
    Blank,
    OnePoint,
    TwoPoints,
    ThreePoints,
    FurtherPoints,
    Closed,
}

#[derive(Debug, Clone)]
struct ChainNode {
    segment: BezierSegment,
    neighbor: Option<SegmentId>,
    other_neighbor: Option<SegmentId>,
}

/// Umriss einer Form als Kette von Bézier-Segmenten.
#[derive(Debug)]
pub struct PathCurve {
    nodes: Vec<Option<ChainNode>>,
    order: Vec<SegmentId>,
    is_closed: bool,
    segments_per_curve: usize,
    down_left: Vec2,
    up_right: Vec2,
    sorted_points: Vec<Vec2>,
}

impl PathCurve {
    /// Erstellt eine leere, offene Kette.
    pub fn new(segments_per_curve: usize) -> Self {
        Self {
            nodes: Vec::new(),
            order: Vec::new(),
            is_closed: false,
            segments_per_curve: segments_per_curve.max(1),
            down_left: Vec2::ZERO,
            up_right: Vec2::ZERO,
            sorted_points: Vec::new(),
        }
    }

    /// Baut eine Kette aus Segmenten in Kettenreihenfolge und verlinkt sie vollständig.
    pub fn from_segments(
        segments: Vec<BezierSegment>,
        closed: bool,
        segments_per_curve: usize,
    ) -> Self {
        let mut curve = Self::new(segments_per_curve);
        for segment in segments {
            let id = curve.alloc(segment);
            curve.order.push(id);
        }
        curve.is_closed = closed && curve.order.len() >= 2;
        curve.organize_all_neighbors();
        curve
    }

    /// Tiefe Kopie mit frischer Arena (IDs beginnen wieder bei 0), ohne Hover-Flags.
    pub fn duplicate(&self) -> Self {
        let segments = self
            .segments()
            .map(|(_, seg)| {
                let mut copy = seg.clone();
                copy.clear_hover();
                copy
            })
            .collect();
        Self::from_segments(segments, self.is_closed, self.segments_per_curve)
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Anzahl der Segmente.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true`, wenn die Kette keine Segmente enthält.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Tessellierungs-Auflösung für neue Segmente.
    pub fn segments_per_curve(&self) -> usize {
        self.segments_per_curve
    }

    /// Segment-IDs in Kettenreihenfolge.
    pub fn ids(&self) -> &[SegmentId] {
        &self.order
    }

    /// Iteriert Segmente in Kettenreihenfolge.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, &BezierSegment)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.segment(id).map(|seg| (id, seg)))
    }

    /// Segment zur ID.
    pub fn segment(&self, id: SegmentId) -> Option<&BezierSegment> {
        self.node(id).map(|node| &node.segment)
    }

    pub(crate) fn segment_mut(&mut self, id: SegmentId) -> Option<&mut BezierSegment> {
        self.node_mut(id).map(|node| &mut node.segment)
    }

    /// Position des Segments in der Kettenreihenfolge.
    pub fn index_of(&self, id: SegmentId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    pub fn first_id(&self) -> Option<SegmentId> {
        self.order.first().copied()
    }

    pub fn last_id(&self) -> Option<SegmentId> {
        self.order.last().copied()
    }

    /// Vorgänger des Segments.
    pub fn neighbor(&self, id: SegmentId) -> Option<SegmentId> {
        self.node(id).and_then(|node| node.neighbor)
    }

    /// Nachfolger des Segments.
    pub fn other_neighbor(&self, id: SegmentId) -> Option<SegmentId> {
        self.node(id).and_then(|node| node.other_neighbor)
    }

    /// Aus Segmentanzahl und Geschlossenheit abgeleiteter Zustand.
    pub fn path_state(&self) -> PathState {
        if self.is_closed {
            return PathState::Closed;
        }
        match self.order.len() {
            0 => PathState::Blank,
            1 => PathState::OnePoint,
            2 => PathState::TwoPoints,
            3 => PathState::ThreePoints,
            _ => PathState::FurtherPoints,
        }
    }

    /// Untere linke Ecke der Bounding-Box.
    pub fn down_left(&self) -> Vec2 {
        self.down_left
    }

    /// Obere rechte Ecke der Bounding-Box.
    pub fn up_right(&self) -> Vec2 {
        self.up_right
    }

    /// Bounding-Box als (min, max), `None` für leere Ketten.
    pub fn bounding_box(&self) -> Option<(Vec2, Vec2)> {
        (!self.is_empty()).then_some((self.down_left, self.up_right))
    }

    /// Gecachte, abgeflachte Punktliste, rotiert sodass der tiefste Punkt vorne steht.
    pub fn sorted_points(&self) -> &[Vec2] {
        &self.sorted_points
    }

    // ── Topologie ───────────────────────────────────────────────────

    /// Hängt ein Segment ans Ende der Kette an.
    ///
    /// Auf einer geschlossenen Kette passiert nichts.
    pub fn append_tail(&mut self, point: Vec2) -> Option<SegmentId> {
        if self.is_closed {
            return None;
        }
        let Some(last) = self.last_id() else {
            return Some(self.push_first(point));
        };

        let id = self.alloc(BezierSegment::new(point, self.segments_per_curve));
        self.order.push(id);
        self.link(last, id);
        self.update(id);
        self.refresh_caches();
        Some(id)
    }

    /// Stellt ein Segment als neuen Kopf vor die Kette.
    ///
    /// Der bisherige Kopf bekommt einen Vorgänger und damit einen vollen Bogen.
    pub fn append_head(&mut self, point: Vec2) -> Option<SegmentId> {
        if self.is_closed {
            return None;
        }
        let Some(old_head) = self.first_id() else {
            return Some(self.push_first(point));
        };

        let spc = self.segments_per_curve;
        if let Some(seg) = self.segment_mut(old_head) {
            seg.reset_samples(spc);
        }
        let mut head = BezierSegment::new(point, spc);
        head.make_head();
        let id = self.alloc(head);
        self.order.insert(0, id);
        self.link(id, old_head);
        self.update(id);
        self.refresh_caches();
        Some(id)
    }

    /// Fügt vor `segment` ein neues Segment ein, das dessen erste `split` Samples übernimmt.
    ///
    /// Der neue Anker liegt auf dem Sample `split - 1`. Die Handles werden so
    /// gesetzt, dass beide Teilbögen dem ursprünglichen Bogen folgen: der
    /// eingehende Handle ist der Schnitt der Tangente am Split-Punkt mit der
    /// verkürzten Kontrolllinie. Erfordert einen Vorgänger und
    /// `1 <= split < segment_count`.
    pub fn insert_at(&mut self, segment: SegmentId, split: usize) -> Option<SegmentId> {
        let neighbor = self.neighbor(segment)?;
        let (count, split_point, control_target) = {
            let seg = self.segment(segment)?;
            if split == 0 || split >= seg.segment_count() {
                return None;
            }
            (
                seg.segment_count(),
                *seg.segment_points().get(split - 1)?,
                seg.first_handle(),
            )
        };

        let tangent = self.tangent(segment, split - 1);
        let quotient = split as f32 / count as f32;
        let neighbor_handle = self.segment(neighbor)?.second_handle();
        let control = point_on_line(neighbor_handle, control_target, quotient);

        let shortened = self
            .segment_mut(neighbor)?
            .move_handle_closer_to_point(1.0 - quotient, HandleSide::Second);
        let samples = {
            let seg = self.segment_mut(segment)?;
            seg.move_handle_closer_to_point(quotient, HandleSide::First);
            seg.segment_points().to_vec()
        };

        let incoming = ray_intersection(shortened, control - shortened, split_point, tangent)
            .unwrap_or_else(|| point_on_line(shortened, control, quotient));
        let outgoing =
            split_point + (split_point - incoming) / split as f32 * (count - split) as f32;

        let mut inserted =
            BezierSegment::with_handles(split_point, incoming, outgoing, self.segments_per_curve);
        inserted.copy_segment_points(&samples, split);
        if let Some(seg) = self.segment_mut(segment) {
            seg.remove_segment_points(split);
        }

        let index = self.index_of(segment)?;
        let id = self.alloc(inserted);
        if index == 0 {
            self.order.push(id);
        } else {
            self.order.insert(index, id);
        }
        self.link(neighbor, id);
        self.link(id, segment);
        self.update(id);
        self.refresh_caches();
        Some(id)
    }

    /// Entfernt das Segment an Position `index` und verbindet dessen Nachbarn.
    pub fn delete_at(&mut self, index: usize) -> Option<BezierSegment> {
        let id = *self.order.get(index)?;
        let node = self.nodes.get_mut(id.0)?.take()?;
        self.order.remove(index);

        match (node.neighbor, node.other_neighbor) {
            (Some(prev), Some(next)) => self.link(prev, next),
            (Some(prev), None) => {
                if let Some(prev_node) = self.node_mut(prev) {
                    prev_node.other_neighbor = None;
                }
            }
            (None, Some(next)) => {
                if let Some(next_node) = self.node_mut(next) {
                    next_node.neighbor = None;
                }
            }
            (None, None) => {}
        }

        if self.is_closed && self.order.len() < 2 {
            self.is_closed = false;
            for &remaining in &self.order {
                if let Some(node) = self.nodes.get_mut(remaining.0).and_then(Option::as_mut) {
                    node.neighbor = None;
                    node.other_neighbor = None;
                }
            }
        }

        if let Some(next) = node.other_neighbor.filter(|&next| self.node(next).is_some()) {
            self.update(next);
        } else if let Some(head) = self.first_id() {
            self.update(head);
        }
        self.refresh_caches();
        Some(node.segment)
    }

    /// Schließt die Kette: das letzte Segment wird Vorgänger des ersten.
    pub fn close(&mut self) {
        if self.is_closed || self.order.len() < 2 {
            return;
        }
        let (Some(first), Some(last)) = (self.first_id(), self.last_id()) else {
            return;
        };
        let spc = self.segments_per_curve;
        if let Some(seg) = self.segment_mut(first) {
            seg.reset_samples(spc);
        }
        self.link(last, first);
        self.is_closed = true;
        self.update(first);
        self.refresh_caches();
    }

    /// Verlinkt die gesamte Kette neu (Aufbau, Duplizieren) und berechnet alle Bögen.
    pub fn organize_all_neighbors(&mut self) {
        let order = self.order.clone();
        let spc = self.segments_per_curve;
        for &id in &order {
            if let Some(node) = self.node_mut(id) {
                node.neighbor = None;
                node.other_neighbor = None;
            }
        }
        for pair in order.windows(2) {
            self.link(pair[0], pair[1]);
        }
        if self.is_closed {
            if let (Some(&first), Some(&last)) = (order.first(), order.last()) {
                self.link(last, first);
            }
        }
        for &id in &order {
            let has_neighbor = self.neighbor(id).is_some();
            if let Some(seg) = self.segment_mut(id) {
                if has_neighbor && seg.is_first() {
                    seg.reset_samples(spc);
                }
            }
        }
        for &id in &order {
            self.recompute_own_arc(id);
        }
        self.refresh_caches();
    }

    // ── Segment-Editierung ──────────────────────────────────────────

    /// Berechnet den eingehenden Bogen von `id` und den des Nachfolgers neu.
    ///
    /// Ein Kopf ohne Vorgänger behält genau ein Sample (seinen Anker).
    pub fn update(&mut self, id: SegmentId) {
        if self.is_empty() {
            return;
        }
        self.recompute_own_arc(id);
        if let Some(next) = self.other_neighbor(id) {
            self.recompute_own_arc(next);
        }
    }

    /// Setzt einen Handle (siehe [`BezierSegment`]-Constraints) und aktualisiert die Bögen.
    pub fn move_handle(&mut self, id: SegmentId, position: Vec2, side: HandleSide, init: bool) {
        let Some(seg) = self.segment_mut(id) else {
            return;
        };
        seg.apply_move_handle(position, side, init);
        self.update(id);
        self.refresh_caches();
    }

    /// Schaltet die Handle-Spiegelung um.
    ///
    /// Beim Einschalten wird der Gegenhandle einmalig an der Richtung des
    /// zuletzt bewegten Handles ausgerichtet.
    pub fn set_conjunct(&mut self, id: SegmentId, conjunct: bool) {
        let Some(seg) = self.segment_mut(id) else {
            return;
        };
        seg.conjunct = conjunct;
        if conjunct {
            let side = seg.last_moved();
            let position = seg.handle(side);
            seg.apply_move_handle(position, side, false);
            self.update(id);
            self.refresh_caches();
        }
    }

    /// Legt einen Handle auf den Anker und zieht den anderen um `offset` entlang der Tangente heraus.
    pub fn one_handle(&mut self, id: SegmentId, side: HandleSide, offset: f32) {
        let Some(last_index) = self
            .segment(id)
            .map(|seg| seg.segment_points().len().saturating_sub(1))
        else {
            return;
        };
        let tangent = self.tangent(id, last_index).normalize_or_zero() * offset;
        let Some(seg) = self.segment_mut(id) else {
            return;
        };
        let anchor = seg.point();
        match side {
            HandleSide::Second => {
                seg.set_handle(HandleSide::First, anchor);
                seg.set_handle(HandleSide::Second, seg.second_handle() - tangent);
            }
            HandleSide::First => {
                seg.set_handle(HandleSide::Second, anchor);
                seg.set_handle(HandleSide::First, seg.first_handle() + tangent);
            }
        }
        self.update(id);
        self.refresh_caches();
    }

    /// Legt beide Handles auf den Anker (spitze Ecke).
    pub fn no_handles(&mut self, id: SegmentId) {
        let Some(seg) = self.segment_mut(id) else {
            return;
        };
        let anchor = seg.point();
        seg.set_handle(HandleSide::First, anchor);
        seg.set_handle(HandleSide::Second, anchor);
        self.update(id);
        self.refresh_caches();
    }

    /// Zieht beide Handles um `offset` entlang der lokalen Tangente nach außen.
    pub fn handles(&mut self, id: SegmentId, offset: f32) {
        let Some(last_index) = self
            .segment(id)
            .map(|seg| seg.segment_points().len().saturating_sub(1))
        else {
            return;
        };
        let tangent = self.tangent(id, last_index).normalize_or_zero() * offset;
        let Some(seg) = self.segment_mut(id) else {
            return;
        };
        seg.set_handle(HandleSide::First, seg.first_handle() + tangent);
        seg.set_handle(HandleSide::Second, seg.second_handle() - tangent);
        self.update(id);
        self.refresh_caches();
    }

    /// Lokale Richtung am Sample `at_index` als `links − rechts`.
    ///
    /// An Segmentgrenzen wird das Randsample des Nachbarn verwendet,
    /// ohne Nachbarn das Sample selbst.
    pub fn tangent(&self, id: SegmentId, at_index: usize) -> Vec2 {
        let Some(seg) = self.segment(id) else {
            return Vec2::ZERO;
        };
        let samples = seg.segment_points();
        if samples.is_empty() {
            return Vec2::ZERO;
        }
        let at = at_index.min(samples.len() - 1);
        let own = samples[at];

        let left = if at >= 1 {
            samples[at - 1]
        } else {
            self.neighbor(id)
                .and_then(|prev| self.segment(prev))
                .and_then(|prev| prev.segment_points().last().copied())
                .unwrap_or(own)
        };
        let right = samples.get(at + 1).copied().unwrap_or_else(|| {
            self.other_neighbor(id)
                .and_then(|next| self.segment(next))
                .and_then(|next| next.segment_points().first().copied())
                .unwrap_or(own)
        });
        left - right
    }

    /// Verschiebt Anker und Handles eines Segments um `delta`.
    pub fn move_points(&mut self, id: SegmentId, delta: Vec2) {
        let Some(seg) = self.segment_mut(id) else {
            return;
        };
        seg.translate(delta);
        self.update(id);
        self.refresh_caches();
    }

    /// Verschiebt die gesamte Kette um `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for id in self.order.clone() {
            if let Some(seg) = self.segment_mut(id) {
                seg.translate(delta);
            }
        }
        self.update_all();
    }

    /// Merkt sich die Lage aller Segmente relativ zur aktuellen Bounding-Box.
    pub fn start_scale(&mut self) {
        let origin = self.down_left;
        let size = self.up_right - self.down_left;
        for id in self.order.clone() {
            if let Some(seg) = self.segment_mut(id) {
                seg.start_scale(origin, size);
            }
        }
    }

    /// Skaliert die Kette in die Box `down_left`/`up_right` (nach [`Self::start_scale`]).
    pub fn scale_to(&mut self, down_left: Vec2, up_right: Vec2) {
        let size = up_right - down_left;
        for id in self.order.clone() {
            if let Some(seg) = self.segment_mut(id) {
                seg.apply_scale(down_left, size);
            }
        }
        self.update_all();
    }

    // ── Endpunkte ───────────────────────────────────────────────────

    /// Offener Endpunkt (Kopf oder Ende) innerhalb von `radius` um `pos`.
    pub fn close_to_end_points(&self, pos: Vec2, radius: f32) -> Option<SegmentId> {
        if self.is_closed {
            return None;
        }
        [self.first_id(), self.last_id()]
            .into_iter()
            .flatten()
            .find(|&id| {
                self.segment(id)
                    .is_some_and(|seg| seg.hits_point(pos, radius))
            })
    }

    /// Liegt `pos` am Endpunkt gegenüber dem gerade selektierten Endpunkt?
    pub fn close_to_other_end_point(&self, pos: Vec2, radius: f32) -> bool {
        if self.is_closed || self.order.len() < 2 {
            return false;
        }
        let Some(selected) = self.selected_end_point() else {
            return false;
        };
        let other = if Some(selected) == self.first_id() {
            self.last_id()
        } else {
            self.first_id()
        };
        other
            .and_then(|id| self.segment(id))
            .is_some_and(|seg| seg.hits_point(pos, radius))
    }

    /// Aktuell selektierter offener Endpunkt (das Ende hat Vorrang).
    pub fn selected_end_point(&self) -> Option<SegmentId> {
        [self.last_id(), self.first_id()]
            .into_iter()
            .flatten()
            .find(|&id| self.segment(id).is_some_and(|seg| seg.point_selected))
    }

    /// Selektiert genau einen Endpunkt, an dem weitergezeichnet wird.
    pub fn select_end_point(&mut self, id: SegmentId) {
        self.unselect_all_points();
        if let Some(seg) = self.segment_mut(id) {
            seg.point_selected = true;
        }
    }

    /// Hebt die Punkt-Selektion aller Segmente auf.
    pub fn unselect_all_points(&mut self) {
        for node in self.nodes.iter_mut().flatten() {
            node.segment.point_selected = false;
        }
    }

    // ── Abflachen, Orientierung, Enthaltensein, Füllung ─────────────

    /// Alle Samples in Kettenreihenfolge.
    pub fn all_points(&self) -> Vec<Vec2> {
        self.segments()
            .flat_map(|(_, seg)| seg.segment_points().iter().copied())
            .collect()
    }

    /// Punktliste mit normalisierter Orientierung (Kopf fest, Rest ggf. umgekehrt).
    pub fn normalized_points(&self) -> Vec<Vec2> {
        let mut points = self.all_points();
        if !is_right_handed(&points) && points.len() > 2 {
            points[1..].reverse();
        }
        points
    }

    /// Even-Odd-Test mit vorgeschaltetem Bounding-Box-Ausschluss.
    pub fn point_inside(&self, probe: Vec2) -> bool {
        if self.sorted_points.len() < 3 {
            return false;
        }
        if probe.cmplt(self.down_left).any() || probe.cmpgt(self.up_right).any() {
            return false;
        }
        point_in_polygon(&self.sorted_points, probe)
    }

    /// Konvexe Vierecke, die das Innere der Kette abdecken.
    pub fn fill_quads(&self) -> Vec<Quad> {
        if self.is_empty() {
            return Vec::new();
        }
        decompose(&self.normalized_points())
    }

    // ── Intern ──────────────────────────────────────────────────────

    fn node(&self, id: SegmentId) -> Option<&ChainNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: SegmentId) -> Option<&mut ChainNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn alloc(&mut self, segment: BezierSegment) -> SegmentId {
        let id = SegmentId(self.nodes.len());
        self.nodes.push(Some(ChainNode {
            segment,
            neighbor: None,
            other_neighbor: None,
        }));
        id
    }

    fn push_first(&mut self, point: Vec2) -> SegmentId {
        let mut segment = BezierSegment::new(point, self.segments_per_curve);
        segment.make_head();
        let id = self.alloc(segment);
        self.order.push(id);
        self.refresh_caches();
        id
    }

    /// `prev` wird Vorgänger von `next` (beide Richtungen).
    fn link(&mut self, prev: SegmentId, next: SegmentId) {
        if let Some(node) = self.node_mut(prev) {
            node.other_neighbor = Some(next);
        }
        if let Some(node) = self.node_mut(next) {
            node.neighbor = Some(prev);
        }
    }

    fn recompute_own_arc(&mut self, id: SegmentId) {
        let prev = self
            .neighbor(id)
            .and_then(|prev| self.segment(prev))
            .map(|prev| (prev.point(), prev.second_handle()));
        let Some(seg) = self.segment_mut(id) else {
            return;
        };
        match prev {
            Some((point, handle)) => seg.compute_arc_from(point, handle),
            None => seg.make_head(),
        }
    }

    fn update_all(&mut self) {
        for id in self.order.clone() {
            self.recompute_own_arc(id);
        }
        self.refresh_caches();
    }

    /// Aktualisiert Bounding-Box und sortierte Punktliste.
    fn refresh_caches(&mut self) {
        let points = self.all_points();
        let Some(lowest) = lowest_point_index(&points) else {
            self.down_left = Vec2::ZERO;
            self.up_right = Vec2::ZERO;
            self.sorted_points.clear();
            return;
        };

        let (min, max) = points
            .iter()
            .fold((Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)), |(min, max), p| {
                (min.min(*p), max.max(*p))
            });
        self.down_left = min;
        self.up_right = max;

        let mut sorted = points;
        sorted.rotate_left(lowest);
        self.sorted_points = sorted;
    }
}

/// Index des ersten Punkts mit minimalem y.
pub(crate) fn lowest_point_index(points: &[Vec2]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y))
        .map(|(index, _)| index)
}

/// Orientierungstest: vom tiefsten Punkt aus vorwärts laufen und die x-Werte vergleichen.
///
/// Liegt der erste abweichende Punkt links (kleineres x), ist die Kurve
/// nicht rechtshändig; sonst (rechts oder keine Abweichung) schon.
pub fn is_right_handed(points: &[Vec2]) -> bool {
    let Some(lowest) = lowest_point_index(points) else {
        return true;
    };
    let min_x = points[lowest].x;
    for step in 1..points.len() {
        let x = points[(lowest + step) % points.len()].x;
        if x < min_x {
            return false;
        }
        if x > min_x {
            return true;
        }
    }
    true
}

/// Even-Odd-Strahltest mit einem Strahl nach oben (+y) vom Prüfpunkt.
///
/// Jedes Punktpaar zählt über das halboffene x-Intervall `[min, max)`,
/// damit ein Strahl durch eine Ecke nur einmal schneidet.
pub fn point_in_polygon(points: &[Vec2], probe: Vec2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let ray_end = probe + Vec2::Y;
    let mut crossings = 0usize;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        if probe.y > a.y.max(b.y) {
            continue;
        }
        if !(a.x.min(b.x) <= probe.x && probe.x < a.x.max(b.x)) {
            continue;
        }
        if let Some(hit) = line_intersection(a, b, probe, ray_end) {
            if hit.y >= probe.y {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}
