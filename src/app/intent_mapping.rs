//! Mapping von UI-Intents auf mutierende App-Commands.

use super::editmodes::EditContext;
use super::events::PointerButton;
use super::selection_modes::PanelEnablement;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::EditorOptions;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let enablement = PanelEnablement::for_modes(state.selection.modes);

    match intent {
        AppIntent::PointerMoved { pos } => {
            if state.options.in_editor_area(pos) {
                vec![AppCommand::UpdateHover { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerPressed { pos, button } => {
            // Nur die Primärtaste editiert; ausserhalb des Editierbereichs passiert nichts
            if button != PointerButton::Primary || !state.options.in_editor_area(pos) {
                return vec![];
            }
            vec![
                AppCommand::UpdateHover { pos },
                AppCommand::BeginInteraction { pos },
            ]
        }
        AppIntent::PointerDragged { pos, button } => {
            if button == PointerButton::Primary && state.editor.is_dragging() {
                vec![AppCommand::DragInteraction { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { pos, button } => match button {
            PointerButton::Primary => {
                let mut commands = Vec::with_capacity(2);
                if state.editor.is_dragging() {
                    commands.push(AppCommand::EndInteraction { pos });
                }
                if state.options.in_editor_area(pos) {
                    commands.push(AppCommand::UpdateHover { pos });
                }
                commands
            }
            PointerButton::Secondary => vec![AppCommand::DeselectAll],
            PointerButton::Middle => vec![],
        },
        AppIntent::EditContextSelected { context } => {
            if context == state.editor.context {
                vec![]
            } else {
                vec![AppCommand::SetEditContext { context }]
            }
        }
        AppIntent::ConjunctToggled { conjunct } if enablement.conjunct => {
            vec![AppCommand::SetConjunct { conjunct }]
        }
        AppIntent::OneHandleRequested { side } if enablement.handle_styles => {
            vec![AppCommand::OneHandle { side }]
        }
        AppIntent::NoHandlesRequested if enablement.handle_styles => {
            vec![AppCommand::NoHandles]
        }
        AppIntent::HandlesRequested if enablement.handle_styles => vec![AppCommand::Handles],
        AppIntent::ConjunctToggled { .. }
        | AppIntent::OneHandleRequested { .. }
        | AppIntent::NoHandlesRequested
        | AppIntent::HandlesRequested => vec![],
        AppIntent::DeleteSelectedRequested => match state.editor.context {
            EditContext::Object => vec![AppCommand::DeleteSelectedObjects],
            EditContext::Path | EditContext::HandlesPoints => {
                vec![AppCommand::DeleteSelectedPoints]
            }
        },
        AppIntent::DuplicateSelectedRequested if enablement.duplicate => {
            vec![AppCommand::DuplicateSelectedObjects]
        }
        AppIntent::DuplicateSelectedRequested => vec![],
        AppIntent::ColorsChanged { style } if enablement.colorable => {
            vec![AppCommand::SetColors { style }]
        }
        AppIntent::ColorsChanged { .. } => vec![],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions {
            path: EditorOptions::config_path(),
        }],
    }
}
