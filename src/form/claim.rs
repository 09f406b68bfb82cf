use chrono::{NaiveDate, Utc};

use crate::foundation::core::DisplayRect;
use crate::foundation::error::{ClaimError, ClaimResult};
use crate::form::fields::{ClaimField, ClaimType, FormMode};
use crate::form::payload::{ClaimPayload, ClaimSubmission, ClaimValues};
use crate::form::upload::PdfAttachment;
use crate::form::validate::{
    FieldError, FieldErrors, validate_claim_type, validate_date, validate_signature, validate_text,
};
use crate::signature::config::PadConfig;
use crate::signature::cpu::CpuSurface;
use crate::signature::encode::SignatureImage;
use crate::signature::input::{InputEvent, RawInput};
use crate::signature::pad::{PadOutcome, SignaturePad};
use crate::signature::script::{EventScript, ReplaySummary, StepAction};
use crate::signature::surface::SignatureSurface;

/// The claim form: typed values, the signature pad, the error map and the upload slot.
///
/// A form owns exactly one [`SignaturePad`]. Field errors follow the usual rules: a field is
/// re-checked on change only once it already shows an error, and everything is checked on submit.
#[derive(Debug)]
pub struct ClaimForm<S: SignatureSurface = CpuSurface> {
    values: ClaimValues,
    errors: FieldErrors,
    mode: FormMode,
    pdf: Option<PdfAttachment>,
    pad: SignaturePad<S>,
    today: Option<NaiveDate>,
}

impl ClaimForm<CpuSurface> {
    pub fn new(config: PadConfig) -> ClaimResult<Self> {
        Ok(Self::with_pad(SignaturePad::new(config)?))
    }
}

impl<S: SignatureSurface> ClaimForm<S> {
    pub fn with_pad(pad: SignaturePad<S>) -> Self {
        Self {
            values: ClaimValues::default(),
            errors: FieldErrors::default(),
            mode: FormMode::default(),
            pdf: None,
            pad,
            today: None,
        }
    }

    pub fn values(&self) -> &ClaimValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ClaimField) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Switch between manual entry and PDF upload. The pad and its value are kept either way.
    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
    }

    pub fn pad(&self) -> &SignaturePad<S> {
        &self.pad
    }

    pub fn signature(&self) -> Option<&SignatureImage> {
        self.pad.value()
    }

    pub fn pdf(&self) -> Option<&PdfAttachment> {
        self.pdf.as_ref()
    }

    /// Pin "today" for date validation. `None` uses the local clock.
    pub fn set_today(&mut self, today: Option<NaiveDate>) {
        self.today = today;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn set_text(&mut self, field: ClaimField, value: impl Into<String>) -> ClaimResult<()> {
        let slot = self
            .values
            .text_mut(field)
            .ok_or_else(|| ClaimError::validation(format!("'{field}' is not a text field")))?;
        *slot = value.into();
        self.revalidate_if_flagged(field);
        Ok(())
    }

    pub fn set_claim_type(&mut self, claim_type: Option<ClaimType>) {
        self.values.claim_type = claim_type;
        self.revalidate_if_flagged(ClaimField::ClaimType);
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.values.date = date;
        self.revalidate_if_flagged(ClaimField::Date);
    }

    /// Replace every typed value at once, e.g. from a saved draft.
    pub fn set_values(&mut self, values: ClaimValues) {
        self.values = values;
        for field in ClaimField::ALL {
            if field != ClaimField::Signature {
                self.revalidate_if_flagged(field);
            }
        }
    }

    fn revalidate_if_flagged(&mut self, field: ClaimField) {
        if self.errors.contains(field) {
            let outcome = self.validate_field(field);
            self.errors.set(field, outcome);
        }
    }

    /// Run one field's validator against the current value without touching the error map.
    pub fn validate_field(&self, field: ClaimField) -> Option<FieldError> {
        match field {
            ClaimField::ClaimType => validate_claim_type(self.values.claim_type),
            ClaimField::Date => validate_date(self.values.date, self.today()),
            ClaimField::Signature => validate_signature(self.pad.value()),
            text => validate_text(text, self.values.text(text).unwrap_or_default()),
        }
    }

    /// Validate every field and replace the error map. Returns `true` if the form is clean.
    pub fn validate_all(&mut self) -> bool {
        let mut errors = FieldErrors::default();
        for field in ClaimField::ALL {
            errors.set(field, self.validate_field(field));
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn signature_input(&mut self, ev: InputEvent) -> ClaimResult<PadOutcome> {
        let outcome = self.pad.handle(ev)?;
        if outcome == PadOutcome::Committed {
            self.errors.remove(ClaimField::Signature);
        }
        Ok(outcome)
    }

    pub fn signature_raw(&mut self, raw: &RawInput) -> ClaimResult<PadOutcome> {
        self.signature_input(raw.normalize())
    }

    pub fn signature_resize(
        &mut self,
        container_width: f64,
        rect: Option<DisplayRect>,
    ) -> ClaimResult<()> {
        self.pad.resize(container_width, rect)
    }

    /// "Clear Signature": wipe the pad and flag the field as required straight away.
    pub fn clear_signature(&mut self) {
        self.pad.reset();
        self.errors
            .insert(ClaimField::Signature, FieldError::MissingSignature);
    }

    /// Replay a recorded script through the form so the error map follows along.
    pub fn replay_signature(&mut self, script: &EventScript) -> ClaimResult<ReplaySummary> {
        let mut summary = ReplaySummary::default();
        for step in &script.steps {
            summary.steps += 1;
            match step.action() {
                StepAction::Input(raw) => summary.record(self.signature_raw(&raw)?),
                StepAction::Resize {
                    container_width,
                    rect,
                } => {
                    self.signature_resize(container_width, rect)?;
                    summary.resizes += 1;
                }
                StepAction::Clear => {
                    self.clear_signature();
                    summary.clears += 1;
                }
            }
        }
        Ok(summary)
    }

    /// Attach a PDF for upload mode. A rejected file also drops any previous attachment.
    pub fn attach_pdf(
        &mut self,
        file_name: impl Into<String>,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ClaimResult<()> {
        match PdfAttachment::new(file_name, content_type, bytes) {
            Ok(pdf) => {
                self.pdf = Some(pdf);
                Ok(())
            }
            Err(e) => {
                self.pdf = None;
                Err(e)
            }
        }
    }

    /// Validate and build the request for the current mode.
    ///
    /// The form is left as-is; call [`ClaimForm::complete_submission`] once the request was
    /// delivered.
    pub fn prepare_submission(&mut self) -> ClaimResult<ClaimSubmission> {
        match self.mode {
            FormMode::Upload => {
                let pdf = self
                    .pdf
                    .clone()
                    .ok_or_else(|| ClaimError::upload("Please upload a PDF file."))?;
                tracing::debug!(file = %pdf.file_name, bytes = pdf.len(), "pdf claim ready");
                Ok(ClaimSubmission::Pdf(pdf))
            }
            FormMode::Manual => {
                if !self.validate_all() {
                    tracing::debug!(errors = self.errors.len(), "claim form has errors");
                    return Err(ClaimError::InvalidFields(self.errors.clone()));
                }
                let signature = self
                    .pad
                    .value()
                    .ok_or_else(|| ClaimError::InvalidFields(self.errors.clone()))?;
                let payload = ClaimPayload::build(&self.values, signature, Utc::now())?;
                tracing::debug!(claim_no = %payload.claim_no, "manual claim ready");
                Ok(ClaimSubmission::Manual(payload))
            }
        }
    }

    /// Follow up a successful delivery.
    ///
    /// After an upload only the attachment is dropped; typed values and the signature stay. After
    /// a manual submission the form goes blank and the signature is flagged as required again.
    pub fn complete_submission(&mut self) {
        match self.mode {
            FormMode::Upload => {
                self.pdf = None;
            }
            FormMode::Manual => {
                self.values = ClaimValues::default();
                self.errors.clear();
                self.pdf = None;
                self.clear_signature();
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/claim.rs"]
mod tests;
