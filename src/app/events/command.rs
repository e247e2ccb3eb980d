use crate::app::editmodes::EditContext;
use crate::core::{HandleSide, ShapeStyle};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Bindung für die Zeigerposition wählen und Hover-Token setzen
    UpdateHover { pos: glam::Vec2 },
    /// Press der aktiven Bindung ausführen
    BeginInteraction { pos: glam::Vec2 },
    /// Drag der laufenden Interaktion
    DragInteraction { pos: glam::Vec2 },
    /// Release der laufenden Interaktion
    EndInteraction { pos: glam::Vec2 },
    /// Alles abwählen, Zeichensperre aufheben (rechte Taste)
    DeselectAll,
    /// Editier-Kontext wechseln
    SetEditContext { context: EditContext },
    /// Handle-Spiegelung der selektierten Punkte setzen
    SetConjunct { conjunct: bool },
    /// Nur den Handle `side` behalten
    OneHandle { side: HandleSide },
    /// Beide Handles auf den Anker legen
    NoHandles,
    /// Beide Handles herausziehen
    Handles,
    /// Selektierte Ankerpunkte löschen
    DeleteSelectedPoints,
    /// Selektierte Formen löschen
    DeleteSelectedObjects,
    /// Selektierte Formen duplizieren
    DuplicateSelectedObjects,
    /// Farben/Konturbreite der selektierten Formen setzen
    SetColors { style: ShapeStyle },
    /// Optionen prüfen und übernehmen
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen als TOML speichern
    SaveOptions { path: PathBuf },
}
