//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und externen Renderern/Panels geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

mod hover_target;
pub mod options;
mod render_scene;
mod selection_mode;

pub use hover_target::HoverTarget;
pub use options::EditorOptions;
pub use render_scene::{AnchorMarker, RenderScene, ShapeView};
pub use selection_mode::{ObjectSelectionMode, PointSelectionMode, SelectionModes};
