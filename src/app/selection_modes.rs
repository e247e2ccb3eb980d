//! Übergänge der Selektions-Modi und daraus abgeleitete Panel-Freischaltung.

use crate::shared::{ObjectSelectionMode, PointSelectionMode, SelectionModes};

/// Objekt-Modus aus der Trefferzahl einer Gummiband-Selektion.
pub fn object_mode_for_count(count: usize) -> ObjectSelectionMode {
    match count {
        0 => ObjectSelectionMode::NoObject,
        1 => ObjectSelectionMode::SingleObject,
        _ => ObjectSelectionMode::MultipleObject,
    }
}

/// Punkt-Modus aus der Trefferzahl einer Gummiband-Selektion.
pub fn point_mode_for_count(count: usize) -> PointSelectionMode {
    match count {
        0 => PointSelectionMode::NoSelection,
        1 => PointSelectionMode::Point,
        _ => PointSelectionMode::MultiplePoints,
    }
}

/// Welche Panel-Bedienelemente aktiv sind; reine Funktion der Modi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelEnablement {
    /// OneHandle / NoHandles / Handles
    pub handle_styles: bool,
    pub conjunct: bool,
    pub delete: bool,
    pub duplicate: bool,
    pub colorable: bool,
}

impl PanelEnablement {
    /// Leitet die Freischaltung aus den aktuellen Modi ab.
    pub fn for_modes(modes: SelectionModes) -> Self {
        let points = matches!(
            modes.point,
            PointSelectionMode::Point | PointSelectionMode::MultiplePoints
        );
        let objects = modes.object != ObjectSelectionMode::NoObject;
        Self {
            handle_styles: points,
            conjunct: points || modes.point == PointSelectionMode::Handle,
            delete: points || objects,
            duplicate: objects,
            colorable: objects,
        }
    }
}

/// Optionaler Empfänger für Modus-Änderungen (Editor-Panel).
pub trait PanelObserver {
    /// Neue Selektions-Modi.
    fn notify_selection_mode(&mut self, modes: SelectionModes);
    /// Ob die Selektion eingefärbt werden kann.
    fn notify_colorable(&mut self, colorable: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_transitions() {
        assert_eq!(object_mode_for_count(0), ObjectSelectionMode::NoObject);
        assert_eq!(object_mode_for_count(1), ObjectSelectionMode::SingleObject);
        assert_eq!(object_mode_for_count(7), ObjectSelectionMode::MultipleObject);
        assert_eq!(point_mode_for_count(0), PointSelectionMode::NoSelection);
        assert_eq!(point_mode_for_count(1), PointSelectionMode::Point);
        assert_eq!(point_mode_for_count(2), PointSelectionMode::MultiplePoints);
    }

    #[test]
    fn test_enablement_follows_modes() {
        let nothing = PanelEnablement::for_modes(SelectionModes::default());
        assert_eq!(nothing, PanelEnablement::default());

        let handle = PanelEnablement::for_modes(SelectionModes {
            object: ObjectSelectionMode::NoObject,
            point: PointSelectionMode::Handle,
        });
        assert!(handle.conjunct);
        assert!(!handle.handle_styles);
        assert!(!handle.delete);

        let objects = PanelEnablement::for_modes(SelectionModes {
            object: ObjectSelectionMode::MultipleObject,
            point: PointSelectionMode::NoSelection,
        });
        assert!(objects.duplicate && objects.colorable && objects.delete);
        assert!(!objects.handle_styles);
    }
}
