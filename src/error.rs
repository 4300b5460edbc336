//! Error types for plotting operations.
//!
//! Missing segment variables are not errors anywhere in this crate:
//! [`SegmentState::lookup`](crate::morphology::SegmentState::lookup) returns
//! `Option` and absent values leave the default line style in place.

use thiserror::Error;

use crate::morphology::SectionId;
use crate::surface::LineId;

/// Errors surfaced by shape-plot and marker operations.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The morphology model rejected a query, e.g. an unknown section id.
    #[error("morphology model error: {0}")]
    Model(String),

    /// The plotting surface rejected a draw or restyle call.
    #[error("surface error: {0}")]
    Surface(String),

    /// A line handle did not resolve to a live line on the surface.
    #[error("unknown line handle {0:?}")]
    UnknownLine(LineId),

    /// A section exposed fewer than two 3D points, so arc-length
    /// interpolation along it is undefined. Run the model's shape-define
    /// step before marking.
    #[error("section {0:?} has no usable 3D geometry")]
    DegenerateSection(SectionId),
}
