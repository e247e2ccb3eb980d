//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und externe Renderer sie konsumieren.

use super::options::EditorOptions;
use super::{HoverTarget, SelectionModes};
use crate::core::{BoundingBoxHandle, ObjectId, Quad, SegmentId, ShapeStyle};
use glam::Vec2;

/// Anker mit Handles und Hervorhebungs-Flags eines Segments.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorMarker {
    pub segment: SegmentId,
    pub point: Vec2,
    pub first_handle: Vec2,
    pub second_handle: Vec2,
    pub selected: bool,
    pub point_hovered: bool,
    pub first_handle_hovered: bool,
    pub second_handle_hovered: bool,
}

/// Read-only Sicht auf eine Form.
#[derive(Debug, Clone)]
pub struct ShapeView {
    pub id: ObjectId,
    pub closed: bool,
    pub selected: bool,
    pub hovered: bool,
    /// Füll-/Konturfarbe und Konturbreite
    pub style: ShapeStyle,
    /// Abgeflachte Samples pro Segment in Kettenreihenfolge (für die Kontur)
    pub stroke: Vec<Vec<Vec2>>,
    /// Füll-Vierecke (leer bei offenen Formen)
    pub fill: Vec<Quad>,
    pub anchors: Vec<AnchorMarker>,
    pub bounding_box: Option<(Vec2, Vec2)>,
    /// Skalier-Griffe, nur für selektierte Formen
    pub bounding_box_handles: Vec<(BoundingBoxHandle, Vec2)>,
    pub hovered_handle: Option<BoundingBoxHandle>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Formen in Z-Reihenfolge
    pub shapes: Vec<ShapeView>,
    /// Aufgezogenes Gummiband-Rechteck (Start, aktuelle Ecke)
    pub rubber_band: Option<(Vec2, Vec2)>,
    /// Aktuelle Selektions-Modi
    pub selection: SelectionModes,
    /// Aktueller Wert des Hover-Tokens
    pub hovered: Option<HoverTarget>,
    /// Laufzeit-Optionen (Radien für Marker-Größen)
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob etwas zu zeichnen ist.
    pub fn has_shapes(&self) -> bool {
        !self.shapes.is_empty()
    }

    /// Gesamtzahl der Füll-Vierecke aller Formen.
    pub fn fill_quad_count(&self) -> usize {
        self.shapes.iter().map(|s| s.fill.len()).sum()
    }
}
