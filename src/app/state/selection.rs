use crate::core::{Drawing, ObjectId, SegmentId};
use crate::shared::SelectionModes;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    /// Aktuelle Objekt- und Punkt-Modi
    pub modes: SelectionModes,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Alle selektierten Ankerpunkte, gruppiert in Z-Reihenfolge der Formen.
pub fn selected_points(drawing: &Drawing) -> Vec<(ObjectId, SegmentId)> {
    drawing
        .iter()
        .flat_map(|object| {
            object
                .curve()
                .segments()
                .filter(|(_, seg)| seg.point_selected)
                .map(|(segment, _)| (object.id(), segment))
                .collect::<Vec<_>>()
        })
        .collect()
}
