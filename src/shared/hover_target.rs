//! Wert des Hover-Tokens: welches Element gerade unter dem Zeiger hervorgehoben ist.

use crate::core::{BoundingBoxHandle, HandleSide, ObjectId, SegmentId};

/// Genau ein hervorgehobenes Element der Zeichnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// Ankerpunkt eines Segments
    Point { object: ObjectId, segment: SegmentId },
    /// Handle eines Segments
    Handle {
        object: ObjectId,
        segment: SegmentId,
        side: HandleSide,
    },
    /// Sample auf dem abgeflachten Bogen eines Segments (1-basiert, Einfüge-Split)
    PathSample {
        object: ObjectId,
        segment: SegmentId,
        split: usize,
    },
    /// Ganze Form
    Object { object: ObjectId },
    /// Skalier-Griff der Bounding-Box
    BoundingBoxHandle {
        object: ObjectId,
        handle: BoundingBoxHandle,
    },
}

impl HoverTarget {
    /// Form, zu der das Element gehört.
    pub fn object(&self) -> ObjectId {
        match *self {
            Self::Point { object, .. }
            | Self::Handle { object, .. }
            | Self::PathSample { object, .. }
            | Self::Object { object }
            | Self::BoundingBoxHandle { object, .. } => object,
        }
    }

    /// Segment, falls das Element zu einem Segment gehört.
    pub fn segment(&self) -> Option<SegmentId> {
        match *self {
            Self::Point { segment, .. }
            | Self::Handle { segment, .. }
            | Self::PathSample { segment, .. } => Some(segment),
            Self::Object { .. } | Self::BoundingBoxHandle { .. } => None,
        }
    }
}
