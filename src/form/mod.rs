//! The claim form that hosts the signature pad.

pub(crate) mod claim;
pub(crate) mod fields;
pub(crate) mod payload;
pub(crate) mod upload;
pub(crate) mod validate;
