use crate::app::hover::HoverToken;
use crate::app::selection_modes::PanelObserver;
use crate::app::CommandLog;
use crate::core::Drawing;
use crate::shared::EditorOptions;

use super::{EditorState, SelectionState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Formen des Dokuments
    pub drawing: Drawing,
    /// Editier-Kontext, Zeichensperre, laufende Interaktion
    pub editor: EditorState,
    /// Selektions-Modi
    pub selection: SelectionState,
    /// Einziger Hover-Slot
    pub hover: HoverToken,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Radien, Auflösung, Abstände)
    pub options: EditorOptions,
    /// Optionaler Empfänger für Modus-Änderungen
    pub panel: Option<Box<dyn PanelObserver>>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            drawing: Drawing::new(),
            editor: EditorState::new(),
            selection: SelectionState::new(),
            hover: HoverToken::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            panel: None,
        }
    }

    /// Gibt die Anzahl der Formen zurück (für UI-Anzeige)
    pub fn object_count(&self) -> usize {
        self.drawing.len()
    }

    /// Gibt die Anzahl aller Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.drawing.iter().map(|o| o.curve().len()).sum()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
