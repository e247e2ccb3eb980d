//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
/// Bedingungs-/Aktions-Bindungen der Editier-Kontexte
pub mod editmodes;
pub mod events;
pub mod handlers;
pub mod hover;
mod intent_mapping;
pub mod render_scene;
pub mod selection_modes;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Zeichnung, Editor, Selektion).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use editmodes::{EditAction, EditContext};
pub use events::{AppCommand, AppIntent, PointerButton};
pub use hover::{HoverChanged, HoverToken};
pub use render_scene::build as build_render_scene;
pub use selection_modes::{PanelEnablement, PanelObserver};
pub use state::{AppState, EditorState, SelectionState};
