//! # claimsign guide
//!
//! A walkthrough of the signature pad and the claim form that hosts it.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`SignaturePad`](crate::SignaturePad): one drawable signature field. It owns the surface,
//!   the capture session and the committed value.
//! - [`SignatureSurface`](crate::SignatureSurface): the raster behind a pad, with four drawing
//!   operations (`begin_stroke`, `extend_stroke`, `clear`, `export_image`) plus `resize`.
//! - [`CpuSurface`](crate::CpuSurface): the default surface, rasterized with `vello_cpu`.
//! - [`SignatureImage`](crate::SignatureImage): a committed drawing as a PNG data URI.
//! - [`ClaimForm`](crate::ClaimForm): typed values, the error map, the pad and the PDF slot.
//!
//! ---
//!
//! ## Events
//!
//! Hosts deliver either [`RawInput`](crate::RawInput) (mouse or touch, as the toolkit reports
//! them) or an already-normalized [`InputEvent`](crate::InputEvent). Touch events use only their
//! first touch point. Positions are in viewport units; the pad maps them through its
//! [`DisplayRect`](crate::DisplayRect) into drawing units:
//!
//! ```text
//! x = (event_x - rect.left) * (resolution.width / rect.width)
//! y = (event_y - rect.top)  * (resolution.height / rect.height)
//! ```
//!
//! Until a rect is set the pad is "unmounted" and every position maps to the origin.
//!
//! ---
//!
//! ## The committed value
//!
//! The value is written once per stroke, when the stroke ends (release, touch end, or the pointer
//! leaving the surface mid-stroke). It is cleared only by `reset` (or `ClaimForm::clear_signature`),
//! which wipes the raster in the same call.
//!
//! Resizing keeps the value. The raster is reallocated at the new resolution and the pixels that
//! still fit are copied over, anchored top-left, so a committed signature is never shown over a
//! blank surface.
//!
//! ---
//!
//! ## Example
//!
//! ```
//! use claimsign::{ClaimField, ClaimForm, DisplayRect, FieldError, InputEvent, PadConfig};
//!
//! let mut form = ClaimForm::new(PadConfig::default())?;
//! // Container is 616 wide: the surface becomes 600x150, shown at half size.
//! form.signature_resize(616.0, Some(DisplayRect::new(0.0, 0.0, 300.0, 75.0)))?;
//!
//! form.signature_input(InputEvent::press(5.0, 5.0))?;
//! form.signature_input(InputEvent::moved(25.0, 25.0))?;
//! form.signature_input(InputEvent::release())?;
//! assert!(form.signature().is_some());
//!
//! form.clear_signature();
//! assert_eq!(form.error(ClaimField::Signature), Some(&FieldError::MissingSignature));
//! # Ok::<(), claimsign::ClaimError>(())
//! ```
//!
//! ---
//!
//! ## Validation
//!
//! Each field has a validator that returns a [`FieldError`](crate::FieldError) or nothing. The form
//! re-runs a field's validator on change only once the field already shows an error; submit runs
//! them all. The signature validator is just "is a value committed".
//!
//! ---
//!
//! ## Submitting
//!
//! [`ClaimForm::prepare_submission`](crate::ClaimForm::prepare_submission) returns a
//! [`ClaimSubmission`](crate::ClaimSubmission):
//!
//! - `Manual(payload)` for `POST /api/claims` (camelCase JSON, signature as data URI)
//! - `Pdf(attachment)` for `POST /extract-claim` in upload mode
//!
//! The crate never opens a socket. After the host delivers the request it calls
//! [`ClaimForm::complete_submission`](crate::ClaimForm::complete_submission). After an upload
//! that only drops the PDF; after a manual submission the form goes blank and the signature is
//! flagged as required again.
