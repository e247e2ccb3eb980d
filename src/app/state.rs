//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;

pub use app_state::AppState;
pub use editor::{ActiveBinding, EditorState, Interaction, RubberBand};
pub use selection::{selected_points, SelectionState};
