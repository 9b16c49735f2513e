//! Core-Domänentypen: Kreis-Geometrie, Marker-Szene, Hervorhebung, Zeichenfläche.

pub mod geometry;
pub mod highlight;
pub mod scene;
pub mod surface;

pub use geometry::{
    loop_coordinate, midpoint, project_to_circle, segment_intersection, within_proximity, Circle,
};
pub use highlight::{Highlight, HighlightStrategy, QUADRILATERAL_VISIT_ORDER};
pub use scene::{
    CoordinateLabel, DerivedScene, Scene, Segment, CONNECTION_PAIRS, MARKER_COUNT,
};
pub use surface::Surface;
