//! Hover-Token: genau ein hervorgehobenes Element pro Dokument.
//!
//! Jeder Wechsel löscht zuerst das Flag des bisherigen Elements und setzt
//! dann das des neuen. Nur das Token schreibt Hover-Flags.

use crate::core::Drawing;
use crate::shared::HoverTarget;

/// Änderungs-Event eines Hover-Wechsels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChanged {
    pub previous: Option<HoverTarget>,
    pub current: Option<HoverTarget>,
}

/// Einziger Hover-Slot der Anwendung.
#[derive(Debug, Default)]
pub struct HoverToken {
    current: Option<HoverTarget>,
}

impl HoverToken {
    /// Erstellt ein leeres Token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell hervorgehobenes Element.
    pub fn current(&self) -> Option<HoverTarget> {
        self.current
    }

    /// Setzt das Token; gibt bei einem Wechsel das Änderungs-Event zurück.
    pub fn set(&mut self, drawing: &mut Drawing, target: Option<HoverTarget>) -> Option<HoverChanged> {
        if self.current == target {
            return None;
        }
        let previous = self.current.take();
        if let Some(old) = previous {
            apply_flag(drawing, old, false);
        }
        if let Some(new) = target {
            apply_flag(drawing, new, true);
        }
        self.current = target;
        Some(HoverChanged {
            previous,
            current: target,
        })
    }

    /// Gibt das Token frei.
    pub fn clear(&mut self, drawing: &mut Drawing) -> Option<HoverChanged> {
        self.set(drawing, None)
    }
}

/// Schreibt das Hover-Flag eines Elements; gelöschte Elemente werden ignoriert.
fn apply_flag(drawing: &mut Drawing, target: HoverTarget, hovered: bool) {
    let Some(object) = drawing.get_mut(target.object()) else {
        return;
    };
    match target {
        HoverTarget::Point { segment, .. } => {
            if let Some(seg) = object.curve_flags_mut().segment_mut(segment) {
                seg.set_point_hovered(hovered);
            }
        }
        HoverTarget::Handle { segment, side, .. } => {
            if let Some(seg) = object.curve_flags_mut().segment_mut(segment) {
                seg.set_handle_hovered(side, hovered);
            }
        }
        // Einfüge-Vorschau: kein Segment-Flag, Renderer liest das Token
        HoverTarget::PathSample { .. } => {}
        HoverTarget::Object { .. } => object.set_hovered(hovered),
        HoverTarget::BoundingBoxHandle { handle, .. } => {
            object.set_hovered_handle(hovered.then_some(handle));
        }
    }
}
