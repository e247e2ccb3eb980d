//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger ===
            AppCommand::UpdateHover { pos } => handlers::pointer::update_hover(state, pos),
            AppCommand::BeginInteraction { pos } => {
                handlers::pointer::begin_interaction(state, pos)
            }
            AppCommand::DragInteraction { pos } => handlers::pointer::drag_interaction(state, pos),
            AppCommand::EndInteraction { pos } => handlers::pointer::end_interaction(state, pos),

            // === Selektion & Kontext ===
            AppCommand::DeselectAll => handlers::editing::deselect_all(state),
            AppCommand::SetEditContext { context } => {
                handlers::editing::set_edit_context(state, context)
            }

            // === Handle-Stile ===
            AppCommand::SetConjunct { conjunct } => handlers::editing::set_conjunct(state, conjunct),
            AppCommand::OneHandle { side } => handlers::editing::one_handle(state, side),
            AppCommand::NoHandles => handlers::editing::no_handles(state),
            AppCommand::Handles => handlers::editing::handles(state),

            // === Löschen & Duplizieren ===
            AppCommand::DeleteSelectedPoints => handlers::editing::delete_selected_points(state),
            AppCommand::DeleteSelectedObjects => handlers::editing::delete_selected_objects(state),
            AppCommand::DuplicateSelectedObjects => handlers::editing::duplicate_selected(state),

            // === Farben ===
            AppCommand::SetColors { style } => handlers::editing::set_colors(state, style)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
            AppCommand::ResetOptions => handlers::options::reset(state),
            AppCommand::SaveOptions { path } => handlers::options::save(state, &path)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
