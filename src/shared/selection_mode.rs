//! Selektions-Modi (shared zwischen App, Panel und Renderer).

/// Granularität der Objekt-Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectSelectionMode {
    /// Keine Form selektiert
    #[default]
    NoObject,
    /// Genau eine Form selektiert
    SingleObject,
    /// Mehrere Formen selektiert
    MultipleObject,
}

/// Granularität der Punkt-Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointSelectionMode {
    /// Kein Punkt selektiert
    #[default]
    NoSelection,
    /// Genau ein Ankerpunkt selektiert
    Point,
    /// Mehrere Ankerpunkte selektiert
    MultiplePoints,
    /// Ein Handle wird bearbeitet
    Handle,
}

/// Beide Modi zusammen, wie sie dem Panel gemeldet werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionModes {
    pub object: ObjectSelectionMode,
    pub point: PointSelectionMode,
}
