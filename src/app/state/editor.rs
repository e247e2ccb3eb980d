use crate::app::editmodes::{BindingMatch, EditAction, EditContext};
use crate::core::ObjectId;
use crate::shared::HoverTarget;
use glam::Vec2;

/// Zuletzt gewählte Bindung (aus dem letzten Polling).
pub type ActiveBinding = BindingMatch;

/// Laufende Press→Drag→Release-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    /// Beim Drücken aktive Aktion
    pub action: EditAction,
    /// Element, auf das die Aktion wirkt (Press-Handler dürfen es ersetzen)
    pub target: Option<HoverTarget>,
    /// Zeigerposition des letzten Events
    pub last_pos: Vec2,
}

/// Aufgezogenes Auswahl-Rechteck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    pub start: Vec2,
    pub end: Vec2,
}

/// Zustand des Editier-Kontexts und der laufenden Interaktion
#[derive(Debug, Default)]
pub struct EditorState {
    /// Aktiver Editier-Kontext
    pub context: EditContext,
    /// Bindung aus dem letzten Polling
    pub active: Option<ActiveBinding>,
    /// Laufende Interaktion (zwischen Press und Release)
    pub interaction: Option<Interaction>,
    /// Zeichensperre: Hover wird nur gegen diese Form geprüft
    pub drawing_lock: Option<ObjectId>,
    /// Zuletzt gezeichnete oder selektierte Form
    pub current_object: Option<ObjectId>,
    /// Gummiband während einer Rechteck-Selektion
    pub rubber_band: Option<RubberBand>,
}

impl EditorState {
    /// Erstellt den Standardzustand (Pfad-Kontext, keine Interaktion).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_some()
    }
}
