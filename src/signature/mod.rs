//! Freehand signature capture.
//!
//! Raw pointer/touch events are normalized ([`input`]), mapped into surface space ([`mapper`]),
//! gated by the capture session ([`session`]) and drawn onto a [`surface::SignatureSurface`].
//! [`pad::SignaturePad`] ties these together and owns the committed value.

pub(crate) mod config;
pub(crate) mod cpu;
pub(crate) mod encode;
pub(crate) mod input;
pub(crate) mod mapper;
pub(crate) mod pad;
pub(crate) mod script;
pub(crate) mod session;
pub(crate) mod surface;
