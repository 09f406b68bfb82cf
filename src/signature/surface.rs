use crate::foundation::core::{Point, Resolution};
use crate::foundation::error::ClaimResult;
use crate::signature::encode::SignatureImage;

/// A drawable raster that a [`crate::SignaturePad`] writes strokes into.
///
/// Implementations own the drawing context and never expose it. Gating (ignoring moves while no
/// stroke is active) is the caller's job; a surface draws whatever it is told to.
pub trait SignatureSurface {
    /// Current internal resolution in drawing units.
    fn resolution(&self) -> Resolution;

    /// Start a new path at `at`.
    fn begin_stroke(&mut self, at: Point);

    /// Draw a segment from the last recorded point to `to`, then record `to`.
    ///
    /// Does nothing if no stroke was begun since the last [`SignatureSurface::clear`].
    fn extend_stroke(&mut self, to: Point);

    /// Make every pixel transparent and forget the last point.
    fn clear(&mut self);

    /// Encode the current raster.
    fn export_image(&self) -> ClaimResult<SignatureImage>;

    /// Reallocate at a new resolution and reapply the pen.
    ///
    /// Pixels that fit in the new raster are kept, anchored top-left.
    fn resize(&mut self, res: Resolution);

    /// `true` if no pixel has non-zero alpha.
    fn is_blank(&self) -> bool;
}
