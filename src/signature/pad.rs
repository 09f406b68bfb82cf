use crate::foundation::core::DisplayRect;
use crate::foundation::error::ClaimResult;
use crate::signature::config::{PadConfig, SurfaceLayout};
use crate::signature::cpu::CpuSurface;
use crate::signature::encode::SignatureImage;
use crate::signature::input::{InputEvent, RawInput};
use crate::signature::mapper::map_to_surface;
use crate::signature::session::{CaptureSession, CaptureState, Transition};
use crate::signature::surface::SignatureSurface;

/// Result of feeding one event to a [`SignaturePad`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadOutcome {
    /// The event did not change anything.
    Ignored,
    /// A stroke was started or extended.
    Drawing,
    /// A stroke ended and the raster was committed as the signature value.
    Committed,
}

/// Signature field: a drawing surface, its capture session and the committed value.
///
/// The committed value is written only when a stroke ends and is cleared only by
/// [`SignaturePad::reset`], which also wipes the raster in the same call. A resize keeps the value
/// and the overlapping pixels, so the surface never goes blank under a committed signature.
#[derive(Debug)]
pub struct SignaturePad<S: SignatureSurface = CpuSurface> {
    surface: S,
    layout: SurfaceLayout,
    rect: Option<DisplayRect>,
    session: CaptureSession,
    value: Option<SignatureImage>,
}

impl SignaturePad<CpuSurface> {
    /// Create an unmounted pad on a CPU surface at the layout's initial resolution.
    pub fn new(config: PadConfig) -> ClaimResult<Self> {
        config.validate()?;
        let res = config.layout.initial_resolution()?;
        Ok(Self::with_surface(
            CpuSurface::new(res, config.pen),
            config.layout,
        ))
    }
}

impl<S: SignatureSurface> SignaturePad<S> {
    pub fn with_surface(surface: S, layout: SurfaceLayout) -> Self {
        Self {
            surface,
            layout,
            rect: None,
            session: CaptureSession::default(),
            value: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> CaptureState {
        self.session.state()
    }

    pub fn display_rect(&self) -> Option<DisplayRect> {
        self.rect
    }

    /// Committed signature, or `None` if nothing was drawn since the last reset.
    pub fn value(&self) -> Option<&SignatureImage> {
        self.value.as_ref()
    }

    pub fn is_signed(&self) -> bool {
        self.value.is_some()
    }

    /// Update where the surface sits on screen. `None` means unmounted.
    pub fn set_display_rect(&mut self, rect: Option<DisplayRect>) {
        self.rect = rect;
    }

    pub fn handle_raw(&mut self, raw: &RawInput) -> ClaimResult<PadOutcome> {
        self.handle(raw.normalize())
    }

    pub fn handle(&mut self, ev: InputEvent) -> ClaimResult<PadOutcome> {
        let res = self.surface.resolution();
        let mapped = ev.position.map(|p| map_to_surface(p, self.rect, res));
        match self.session.advance(ev.phase, mapped) {
            Transition::Begin(p) => {
                self.surface.begin_stroke(p);
                Ok(PadOutcome::Drawing)
            }
            Transition::Extend(p) => {
                self.surface.extend_stroke(p);
                Ok(PadOutcome::Drawing)
            }
            Transition::Commit => self.commit(),
            Transition::Ignored => Ok(PadOutcome::Ignored),
        }
    }

    fn commit(&mut self) -> ClaimResult<PadOutcome> {
        match self.surface.export_image() {
            Ok(img) => {
                tracing::debug!(width = img.width, height = img.height, "signature committed");
                self.value = Some(img);
                Ok(PadOutcome::Committed)
            }
            Err(e) => {
                // Keep raster and value in sync: an unexportable drawing counts as unsigned.
                tracing::warn!(error = %e, "signature export failed; clearing pad");
                self.surface.clear();
                self.value = None;
                Err(e)
            }
        }
    }

    /// Wipe the raster and drop the committed value. Idempotent.
    pub fn reset(&mut self) {
        self.surface.clear();
        self.session.reset();
        if self.value.take().is_some() {
            tracing::debug!("signature reset");
        }
    }

    /// Follow a container width change: recompute the internal resolution and reapply the pen.
    ///
    /// The committed value is left untouched. A `None` rect keeps the current one; only
    /// [`SignaturePad::set_display_rect`] unmounts the pad.
    pub fn resize(&mut self, container_width: f64, rect: Option<DisplayRect>) -> ClaimResult<()> {
        let res = self.layout.resolution_for(container_width)?;
        if let Some(rect) = rect {
            self.rect = Some(rect);
        }
        if res != self.surface.resolution() {
            tracing::debug!(
                width = res.width,
                height = res.height,
                signed = self.value.is_some(),
                "signature surface resized"
            );
            self.surface.resize(res);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signature/pad.rs"]
mod tests;
