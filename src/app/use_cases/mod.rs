//! Use-Cases der Application-Layer-Orchestrierung.

pub mod object_editing;
pub mod path_drawing;
pub mod point_editing;
pub mod selection;
