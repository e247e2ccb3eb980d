//! PathShape Editor Library.
//! Editor-Kern für Bézier-Formen als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditAction, EditContext, PointerButton,
};
pub use core::{
    decompose, BezierSegment, BoundingBoxHandle, Drawing, HandleSide, ObjectId, PathCurve,
    PathObject, PathState, Quad, SegmentId, ShapeStyle,
};
pub use shared::{EditorOptions, HoverTarget, RenderScene};
