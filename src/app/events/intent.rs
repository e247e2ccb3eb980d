use crate::app::editmodes::EditContext;
use crate::core::{HandleSide, ShapeStyle};
use crate::shared::EditorOptions;

/// Maustaste eines Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Zeigerpositionen kommen bereits in Modell-Koordinaten.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger bewegt (ohne gedrückte Taste)
    PointerMoved { pos: glam::Vec2 },
    /// Taste gedrückt
    PointerPressed {
        pos: glam::Vec2,
        button: PointerButton,
    },
    /// Zeiger mit gedrückter Taste bewegt
    PointerDragged {
        pos: glam::Vec2,
        button: PointerButton,
    },
    /// Taste losgelassen
    PointerReleased {
        pos: glam::Vec2,
        button: PointerButton,
    },
    /// Editier-Kontext im Panel gewählt
    EditContextSelected { context: EditContext },
    /// Handle-Spiegelung für selektierte Punkte umschalten
    ConjunctToggled { conjunct: bool },
    /// Nur einen Handle behalten
    OneHandleRequested { side: HandleSide },
    /// Beide Handles einklappen (Ecke)
    NoHandlesRequested,
    /// Beide Handles entlang der Tangente herausziehen
    HandlesRequested,
    /// Selektion löschen (Punkte oder Formen, je nach Kontext)
    DeleteSelectedRequested,
    /// Selektierte Formen duplizieren
    DuplicateSelectedRequested,
    /// Farbwähler: Farben/Konturbreite der selektierten Formen
    ColorsChanged { style: ShapeStyle },
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen neben der Binary speichern
    SaveOptionsRequested,
}
