//! claimsign is the headless core of an insurance claim form with freehand signature capture.
//!
//! A [`ClaimForm`] owns typed claim values, a per-field error map, an optional PDF attachment,
//! and one [`SignaturePad`]. The pad turns pointer and touch input into strokes on a CPU raster
//! and commits the drawing as a PNG data URI whenever a stroke ends.
//!
//! # Signature pipeline
//!
//! 1. **Normalize**: `RawInput -> InputEvent` (pointer and touch share one event type)
//! 2. **Map**: viewport position -> surface drawing units ([`map_to_surface`])
//! 3. **Gate**: [`CaptureSession`] decides begin / extend / commit / ignore
//! 4. **Draw**: a [`SignatureSurface`] renders the stamp or segment ([`CpuSurface`] via `vello_cpu`)
//! 5. **Commit**: the raster is exported as `data:image/png;base64,...`
//!
//! Key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single owner**: every pad and form is plain owned state driven through `&mut self`.
//! - **No network IO**: submissions are described ([`ClaimSubmission`]); delivery is the host's job.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]

mod form;
mod foundation;
mod signature;

/// Standalone walkthrough of the signature pad and claim form.
pub mod guide;

pub use form::claim::ClaimForm;
pub use form::fields::{ClaimField, ClaimType, FormMode};
pub use form::payload::{
    CLAIMS_ENDPOINT, ClaimPayload, ClaimSubmission, ClaimValues, EXTRACT_CLAIM_ENDPOINT,
};
pub use form::upload::{PDF_CONTENT_TYPE, PdfAttachment};
pub use form::validate::{
    FieldError, FieldErrors, parse_amount, validate_claim_type, validate_date, validate_signature,
    validate_text,
};
pub use foundation::core::{DisplayRect, Point, Resolution, Rgba8};
pub use foundation::error::{ClaimError, ClaimResult};
pub use signature::config::{LineCap, LineJoin, PadConfig, PenStyle, SurfaceLayout};
pub use signature::cpu::CpuSurface;
pub use signature::encode::{
    PNG_DATA_URI_PREFIX, SignatureImage, decode_data_uri, encode_png_data_uri,
};
pub use signature::input::{
    InputEvent, InputPhase, PointerKind, RawInput, TouchKind, TouchPoint,
};
pub use signature::mapper::map_to_surface;
pub use signature::pad::{PadOutcome, SignaturePad};
pub use signature::script::{EventScript, ReplaySummary, ScriptStep, StepAction, replay};
pub use signature::session::{CaptureSession, CaptureState, Transition};
pub use signature::surface::SignatureSurface;
