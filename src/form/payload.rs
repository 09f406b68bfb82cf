use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::form::fields::{ClaimField, ClaimType};
use crate::form::upload::PdfAttachment;
use crate::form::validate::parse_amount;
use crate::foundation::error::{ClaimError, ClaimResult};
use crate::signature::encode::SignatureImage;

pub const CLAIMS_ENDPOINT: &str = "/api/claims";
pub const EXTRACT_CLAIM_ENDPOINT: &str = "/extract-claim";

/// Raw values of the manual form, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimValues {
    pub claim_no: String,
    pub customer_id: String,
    pub claim_type: Option<ClaimType>,
    pub amount: String,
    pub nominee: String,
    pub date: Option<NaiveDate>,
    pub bank_account_no: String,
    pub name_of_claimant: String,
}

impl ClaimValues {
    pub fn from_json_str(s: &str) -> ClaimResult<Self> {
        serde_json::from_str(s).map_err(|e| ClaimError::serde(format!("parse claim JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ClaimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ClaimError::validation(format!("open claim JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ClaimError::serde(format!("parse claim JSON: {e}")))
    }

    pub fn text(&self, field: ClaimField) -> Option<&str> {
        match field {
            ClaimField::ClaimNo => Some(&self.claim_no),
            ClaimField::CustomerId => Some(&self.customer_id),
            ClaimField::Amount => Some(&self.amount),
            ClaimField::Nominee => Some(&self.nominee),
            ClaimField::BankAccountNo => Some(&self.bank_account_no),
            ClaimField::NameOfClaimant => Some(&self.name_of_claimant),
            ClaimField::ClaimType | ClaimField::Date | ClaimField::Signature => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: ClaimField) -> Option<&mut String> {
        match field {
            ClaimField::ClaimNo => Some(&mut self.claim_no),
            ClaimField::CustomerId => Some(&mut self.customer_id),
            ClaimField::Amount => Some(&mut self.amount),
            ClaimField::Nominee => Some(&mut self.nominee),
            ClaimField::BankAccountNo => Some(&mut self.bank_account_no),
            ClaimField::NameOfClaimant => Some(&mut self.name_of_claimant),
            ClaimField::ClaimType | ClaimField::Date | ClaimField::Signature => None,
        }
    }
}

/// JSON body of `POST /api/claims`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPayload {
    pub claim_no: String,
    pub customer_id: String,
    pub claim_type: ClaimType,
    pub amount: f64,
    pub nominee: String,
    /// `yyyy-MM-dd`
    pub date: String,
    pub bank_account_no: String,
    pub name_of_claimant: String,
    /// PNG data URI of the drawn signature.
    pub signature: String,
    /// RFC 3339 UTC with milliseconds.
    pub submitted_at: String,
}

impl ClaimPayload {
    /// Assemble a payload from already-validated values.
    pub fn build(
        values: &ClaimValues,
        signature: &SignatureImage,
        submitted_at: DateTime<Utc>,
    ) -> ClaimResult<Self> {
        let claim_type = values
            .claim_type
            .ok_or_else(|| ClaimError::validation("payload requires a claim type"))?;
        let date = values
            .date
            .ok_or_else(|| ClaimError::validation("payload requires a date"))?;
        let amount = parse_amount(&values.amount)
            .ok_or_else(|| ClaimError::validation("payload requires a numeric amount"))?;

        Ok(Self {
            claim_no: values.claim_no.clone(),
            customer_id: values.customer_id.clone(),
            claim_type,
            amount,
            nominee: values.nominee.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            bank_account_no: values.bank_account_no.clone(),
            name_of_claimant: values.name_of_claimant.clone(),
            signature: signature.data_uri.clone(),
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

/// A ready-to-send claim. Delivery over HTTP is the host's job.
#[derive(Clone, Debug, PartialEq)]
pub enum ClaimSubmission {
    /// Manually entered claim, posted as JSON.
    Manual(ClaimPayload),
    /// Uploaded PDF, posted as multipart form data under the `file` key.
    Pdf(PdfAttachment),
}

impl ClaimSubmission {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Manual(_) => CLAIMS_ENDPOINT,
            Self::Pdf(_) => EXTRACT_CLAIM_ENDPOINT,
        }
    }

    /// Summary suitable for logging or printing: endpoint plus body (or file metadata).
    pub fn describe(&self) -> ClaimResult<serde_json::Value> {
        let v = match self {
            Self::Manual(payload) => serde_json::json!({
                "method": "POST",
                "endpoint": self.endpoint(),
                "body": serde_json::to_value(payload)
                    .map_err(|e| ClaimError::serde(format!("serialize claim payload: {e}")))?,
            }),
            Self::Pdf(pdf) => serde_json::json!({
                "method": "POST",
                "endpoint": self.endpoint(),
                "file": { "name": pdf.file_name, "bytes": pdf.len() },
            }),
        };
        Ok(v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/payload.rs"]
mod tests;
