//! Bedingungs-/Aktions-Bindungen der drei Editier-Kontexte.
//!
//! Jeder Kontext besitzt eine geordnete Liste von Bindungen. Beim Polling
//! werden die Bedingungen in Listenreihenfolge gegen die Kandidaten-Formen
//! geprüft; die erste zutreffende Bindung wird aktiv. Trifft keine zu, gilt
//! die Freiflächen-Aktion des Kontexts.

mod conditions;

pub use conditions::evaluate;

use crate::core::{Drawing, ObjectId, PathObject, PathState};
use crate::shared::{
    EditorOptions, HoverTarget, ObjectSelectionMode, PointSelectionMode, SelectionModes,
};
use glam::Vec2;

/// Editier-Kontext (vom Panel umgeschaltet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditContext {
    /// Zeichnen: Punkte setzen, einfügen, löschen, schließen
    #[default]
    Path,
    /// Handles und Ankerpunkte bearbeiten
    HandlesPoints,
    /// Ganze Formen selektieren, verschieben, skalieren
    Object,
}

/// Prüfbare Bedingung gegen die Zeigerposition und eine Kandidaten-Form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    CloseToPath,
    CloseToPathPoints,
    CloseToPathHandles,
    CloseToEndPoints,
    CloseToOtherEndPoint,
    OverPathObject,
    OverBoundingBox,
    CloseToBoundingBoxHandle,
}

/// Aktion einer Bindung; Press/Drag/Release werden per `match` verteilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Freifläche im Pfad-Kontext: neue Form oder Punkt am selektierten Ende
    DrawPoint,
    SelectEndPoint,
    ClosePath,
    InsertPoint,
    DeletePoint,
    MoveHandle,
    SelectMovePoints,
    /// Freifläche im Handle/Punkt-Kontext
    RubberBandPoints,
    ScaleObject,
    SelectMoveObject,
    MoveSelection,
    /// Freifläche im Objekt-Kontext
    RubberBandObjects,
}

/// Abgeleitete Freischaltung einer Bindung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    Always,
    /// Pfad-Zustand der Kandidaten-Form in `[from, until)`; `until: None` = nach oben offen
    PathStates {
        from: PathState,
        until: Option<PathState>,
    },
    /// Nur wenn im aktuellen Kontext etwas selektiert ist
    UnlessNothingSelected,
}

impl Subscription {
    /// Wertet die Freischaltung aus (nie gespeichert, immer neu berechnet).
    pub fn is_subscribed(
        self,
        context: EditContext,
        modes: SelectionModes,
        path_state: PathState,
    ) -> bool {
        match self {
            Self::Always => true,
            Self::PathStates { from, until } => {
                path_state >= from && until.is_none_or(|until| path_state < until)
            }
            Self::UnlessNothingSelected => match context {
                EditContext::Object => modes.object != ObjectSelectionMode::NoObject,
                EditContext::Path | EditContext::HandlesPoints => {
                    modes.point != PointSelectionMode::NoSelection
                }
            },
        }
    }
}

/// Eine Zeile der Bindungsliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub condition: Condition,
    pub action: EditAction,
    pub subscription: Subscription,
}

const fn bind(condition: Condition, action: EditAction, subscription: Subscription) -> Binding {
    Binding {
        condition,
        action,
        subscription,
    }
}

const PATH_BINDINGS: &[Binding] = &[
    bind(
        Condition::CloseToOtherEndPoint,
        EditAction::ClosePath,
        Subscription::PathStates {
            from: PathState::ThreePoints,
            until: Some(PathState::Closed),
        },
    ),
    bind(
        Condition::CloseToEndPoints,
        EditAction::SelectEndPoint,
        Subscription::PathStates {
            from: PathState::OnePoint,
            until: Some(PathState::Closed),
        },
    ),
    bind(
        Condition::CloseToPathHandles,
        EditAction::MoveHandle,
        Subscription::PathStates {
            from: PathState::TwoPoints,
            until: None,
        },
    ),
    bind(
        Condition::CloseToPathPoints,
        EditAction::DeletePoint,
        Subscription::PathStates {
            from: PathState::OnePoint,
            until: None,
        },
    ),
    bind(
        Condition::CloseToPath,
        EditAction::InsertPoint,
        Subscription::PathStates {
            from: PathState::TwoPoints,
            until: None,
        },
    ),
];

const HANDLES_POINTS_BINDINGS: &[Binding] = &[
    bind(
        Condition::CloseToPathHandles,
        EditAction::MoveHandle,
        Subscription::UnlessNothingSelected,
    ),
    bind(
        Condition::CloseToPathPoints,
        EditAction::SelectMovePoints,
        Subscription::Always,
    ),
];

const OBJECT_BINDINGS: &[Binding] = &[
    bind(
        Condition::CloseToBoundingBoxHandle,
        EditAction::ScaleObject,
        Subscription::UnlessNothingSelected,
    ),
    bind(
        Condition::OverPathObject,
        EditAction::SelectMoveObject,
        Subscription::Always,
    ),
    bind(
        Condition::OverBoundingBox,
        EditAction::MoveSelection,
        Subscription::UnlessNothingSelected,
    ),
];

impl EditContext {
    /// Geordnete Bindungen dieses Kontexts.
    pub fn bindings(self) -> &'static [Binding] {
        match self {
            Self::Path => PATH_BINDINGS,
            Self::HandlesPoints => HANDLES_POINTS_BINDINGS,
            Self::Object => OBJECT_BINDINGS,
        }
    }

    /// Aktion, wenn keine Bedingung zutrifft.
    pub fn free_space_action(self) -> EditAction {
        match self {
            Self::Path => EditAction::DrawPoint,
            Self::HandlesPoints => EditAction::RubberBandPoints,
            Self::Object => EditAction::RubberBandObjects,
        }
    }
}

/// Ergebnis der Bindungsauswahl für eine Zeigerposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingMatch {
    pub action: EditAction,
    /// `None` = Freifläche
    pub target: Option<HoverTarget>,
}

/// Eingaben der Bindungsauswahl.
pub struct Poll<'a> {
    pub drawing: &'a Drawing,
    pub options: &'a EditorOptions,
    pub context: EditContext,
    pub modes: SelectionModes,
    /// Zeichensperre: nur diese Form wird geprüft
    pub drawing_lock: Option<ObjectId>,
}

impl Poll<'_> {
    /// Kandidaten in Prüfreihenfolge (oberste Form zuerst).
    fn candidates(&self) -> Vec<&PathObject> {
        match self.drawing_lock {
            Some(id) => self.drawing.get(id).into_iter().collect(),
            None => self.drawing.iter().rev().collect(),
        }
    }

    /// Wählt die erste zutreffende, freigeschaltete Bindung; sonst die Freifläche.
    pub fn select_binding(&self, pos: Vec2) -> BindingMatch {
        let candidates = self.candidates();
        for binding in self.context.bindings() {
            for object in &candidates {
                let path_state = object.curve().path_state();
                if !binding
                    .subscription
                    .is_subscribed(self.context, self.modes, path_state)
                {
                    continue;
                }
                if let Some(target) = evaluate(binding.condition, object, pos, self.options) {
                    return BindingMatch {
                        action: binding.action,
                        target: Some(target),
                    };
                }
            }
        }
        BindingMatch {
            action: self.context.free_space_action(),
            target: None,
        }
    }
}
