//! Eine Form der Zeichnung: Pfad-Kette plus Selektion, Füllung und Skalier-Griffe.

use super::fill::Quad;
use super::path_curve::PathCurve;
use glam::Vec2;

/// Stabile ID einer Form innerhalb der Zeichnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// Einer der acht Griffe der Bounding-Box (Ecken und Kantenmitten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundingBoxHandle {
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
}

/// Welche Box-Koordinaten ein Griff beim Ziehen verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManipulateFlags {
    pub min_x: bool,
    pub min_y: bool,
    pub max_x: bool,
    pub max_y: bool,
}

impl BoundingBoxHandle {
    /// Alle Griffe gegen den Uhrzeigersinn ab unten links.
    pub const ALL: [BoundingBoxHandle; 8] = [
        Self::DownLeft,
        Self::Left,
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::DownRight,
        Self::Down,
    ];

    /// Box-Koordinaten, die dieser Griff bewegt.
    pub fn flags(self) -> ManipulateFlags {
        let (min_x, min_y, max_x, max_y) = match self {
            Self::DownLeft => (true, true, false, false),
            Self::Left => (true, false, false, false),
            Self::UpLeft => (true, false, false, true),
            Self::Up => (false, false, false, true),
            Self::UpRight => (false, false, true, true),
            Self::Right => (false, false, true, false),
            Self::DownRight => (false, true, true, false),
            Self::Down => (false, true, false, false),
        };
        ManipulateFlags {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Position des Griffs an der Box `min`/`max`.
    pub fn position(self, min: Vec2, max: Vec2) -> Vec2 {
        let mid = (min + max) * 0.5;
        match self {
            Self::DownLeft => min,
            Self::Left => Vec2::new(min.x, mid.y),
            Self::UpLeft => Vec2::new(min.x, max.y),
            Self::Up => Vec2::new(mid.x, max.y),
            Self::UpRight => max,
            Self::Right => Vec2::new(max.x, mid.y),
            Self::DownRight => Vec2::new(max.x, min.y),
            Self::Down => Vec2::new(mid.x, min.y),
        }
    }
}

/// Füllfarbe für neue Formen (RGBA).
pub const FILL_COLOR_DEFAULT: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
/// Konturfarbe für neue Formen (RGBA).
pub const STROKE_COLOR_DEFAULT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Konturbreite für neue Formen (Modell-Einheiten).
pub const STROKE_WIDTH_DEFAULT: f32 = 2.0;

/// Farben und Konturbreite einer Form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill_color: [f32; 4],
    pub stroke_color: [f32; 4],
    pub stroke_width: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: FILL_COLOR_DEFAULT,
            stroke_color: STROKE_COLOR_DEFAULT,
            stroke_width: STROKE_WIDTH_DEFAULT,
        }
    }
}

impl ShapeStyle {
    /// `true`, wenn alle Farbkanäle in `[0, 1]` liegen und die Breite endlich und nicht negativ ist.
    pub fn is_valid(&self) -> bool {
        let channels_ok = self
            .fill_color
            .iter()
            .chain(&self.stroke_color)
            .all(|c| (0.0..=1.0).contains(c));
        channels_ok && self.stroke_width.is_finite() && self.stroke_width >= 0.0
    }
}

/// Laufende Skalierung: gezogener Griff und aktuelle Ziel-Box.
#[derive(Debug, Clone, Copy)]
struct ScaleDrag {
    handle: BoundingBoxHandle,
    down_left: Vec2,
    up_right: Vec2,
}

/// Eine Form: Umriss, Selektion und abgeleitete Füllung.
#[derive(Debug)]
pub struct PathObject {
    id: ObjectId,
    curve: PathCurve,
    /// Form ist selektiert (Objekt-Modus)
    pub selected: bool,
    /// Füll-/Konturfarbe und Konturbreite
    pub style: ShapeStyle,
    hovered: bool,
    hovered_handle: Option<BoundingBoxHandle>,
    fill: Vec<Quad>,
    scale_drag: Option<ScaleDrag>,
}

impl PathObject {
    /// Erstellt eine leere Form.
    pub fn new(id: ObjectId, segments_per_curve: usize) -> Self {
        Self::from_curve(id, PathCurve::new(segments_per_curve))
    }

    /// Erstellt eine Form aus einer fertigen Kette.
    pub fn from_curve(id: ObjectId, curve: PathCurve) -> Self {
        let mut object = Self {
            id,
            curve,
            selected: false,
            style: ShapeStyle::default(),
            hovered: false,
            hovered_handle: None,
            fill: Vec::new(),
            scale_drag: None,
        };
        object.refresh_fill();
        object
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Umriss der Form (nur lesend).
    pub fn curve(&self) -> &PathCurve {
        &self.curve
    }

    /// Ändert den Umriss und berechnet danach die Füllung neu.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut PathCurve) -> R) -> R {
        let result = f(&mut self.curve);
        self.refresh_fill();
        result
    }

    /// Zugriff auf den Umriss für reine Flag-Änderungen (Hover, Punktselektion).
    ///
    /// Die Füllung wird dabei nicht neu berechnet.
    pub(crate) fn curve_flags_mut(&mut self) -> &mut PathCurve {
        &mut self.curve
    }

    /// Gecachte Füll-Vierecke.
    pub fn fill_quads(&self) -> &[Quad] {
        &self.fill
    }

    /// Füllung nur für geschlossene Umrisse.
    pub fn refresh_fill(&mut self) {
        self.fill = if self.curve.is_closed() {
            self.curve.fill_quads()
        } else {
            Vec::new()
        };
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn hovered_handle(&self) -> Option<BoundingBoxHandle> {
        self.hovered_handle
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn set_hovered_handle(&mut self, handle: Option<BoundingBoxHandle>) {
        self.hovered_handle = handle;
    }

    // ── Hit-Tests ───────────────────────────────────────────────────

    /// Bounding-Box des Umrisses.
    pub fn bounding_box(&self) -> Option<(Vec2, Vec2)> {
        self.curve.bounding_box()
    }

    /// Liegt `pos` in der um `buffer` erweiterten Bounding-Box?
    pub fn mouse_over_object(&self, pos: Vec2, buffer: f32) -> bool {
        self.bounding_box().is_some_and(|(min, max)| {
            let min = min - Vec2::splat(buffer);
            let max = max + Vec2::splat(buffer);
            pos.cmpge(min).all() && pos.cmple(max).all()
        })
    }

    /// Liegt `pos` auf dem Umriss (Samples) oder, bei geschlossenen Formen, in der Fläche?
    pub fn mouse_over_shape(&self, pos: Vec2, path_radius: f32) -> bool {
        if self.curve.is_closed() && self.curve.point_inside(pos) {
            return true;
        }
        self.curve
            .segments()
            .any(|(_, seg)| seg.hit_sample(pos, path_radius).is_some())
    }

    /// Positionen aller acht Box-Griffe.
    pub fn bounding_box_handles(&self) -> Vec<(BoundingBoxHandle, Vec2)> {
        let Some((min, max)) = self.bounding_box() else {
            return Vec::new();
        };
        BoundingBoxHandle::ALL
            .iter()
            .map(|&handle| (handle, handle.position(min, max)))
            .collect()
    }

    /// Erster Box-Griff innerhalb von `radius`.
    pub fn close_to_bounding_box_handle(
        &self,
        pos: Vec2,
        radius: f32,
    ) -> Option<BoundingBoxHandle> {
        self.bounding_box_handles()
            .into_iter()
            .find(|(_, at)| at.distance(pos) <= radius)
            .map(|(handle, _)| handle)
    }

    // ── Objekt-Operationen ──────────────────────────────────────────

    /// Verschiebt die ganze Form.
    pub fn translate(&mut self, delta: Vec2) {
        self.edit(|curve| curve.translate(delta));
    }

    /// Beginnt eine Skalierung über den Griff `handle`.
    pub fn start_scale(&mut self, handle: BoundingBoxHandle) {
        let Some((down_left, up_right)) = self.bounding_box() else {
            return;
        };
        self.curve.start_scale();
        self.scale_drag = Some(ScaleDrag {
            handle,
            down_left,
            up_right,
        });
    }

    /// Verschiebt die vom Griff benannten Box-Koordinaten um `delta` und skaliert den Umriss mit.
    pub fn scale(&mut self, delta: Vec2) {
        let Some(drag) = self.scale_drag.as_mut() else {
            return;
        };
        let flags = drag.handle.flags();
        if flags.min_x {
            drag.down_left.x += delta.x;
        }
        if flags.min_y {
            drag.down_left.y += delta.y;
        }
        if flags.max_x {
            drag.up_right.x += delta.x;
        }
        if flags.max_y {
            drag.up_right.y += delta.y;
        }
        let (down_left, up_right) = (drag.down_left, drag.up_right);
        self.edit(|curve| curve.scale_to(down_left, up_right));
    }

    /// Beendet eine laufende Skalierung.
    pub fn end_scale(&mut self) {
        self.scale_drag = None;
    }

    pub fn is_scaling(&self) -> bool {
        self.scale_drag.is_some()
    }

    /// Tiefe Kopie mit neuer ID, um `offset` verschoben.
    pub fn duplicate(&self, id: ObjectId, offset: Vec2) -> Self {
        let mut curve = self.curve.duplicate();
        curve.unselect_all_points();
        curve.translate(offset);
        let mut copy = Self::from_curve(id, curve);
        copy.style = self.style;
        copy
    }
}
