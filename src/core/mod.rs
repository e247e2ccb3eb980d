//! Core-Domänentypen: Bézier-Segmente, Pfad-Ketten, Flächenzerlegung, Formen.

pub mod bezier_segment;
pub mod curve_math;
pub mod drawing;
pub mod fill;
/// Kette von Bézier-Segmenten
///
/// Topologie (Anhängen, Einfügen, Löschen, Schließen), Abflachen,
/// Orientierung und Punkt-in-Polygon-Test.
pub mod path_curve;
pub mod path_object;

pub use bezier_segment::{BezierSegment, HandleSide};
pub use drawing::Drawing;
pub use fill::{decompose, quad_area, Quad};
pub use path_curve::{is_right_handed, point_in_polygon, PathCurve, PathState, SegmentId};
pub use path_object::{BoundingBoxHandle, ObjectId, PathObject, ShapeStyle};
