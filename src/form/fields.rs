use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ClaimError;

/// Every field of the manual claim form, in display and validation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ClaimField {
    ClaimNo,
    CustomerId,
    ClaimType,
    Amount,
    Nominee,
    Date,
    BankAccountNo,
    NameOfClaimant,
    Signature,
}

impl ClaimField {
    pub const ALL: [ClaimField; 9] = [
        Self::ClaimNo,
        Self::CustomerId,
        Self::ClaimType,
        Self::Amount,
        Self::Nominee,
        Self::Date,
        Self::BankAccountNo,
        Self::NameOfClaimant,
        Self::Signature,
    ];

    /// Fields edited as free text.
    pub const TEXT: [ClaimField; 6] = [
        Self::ClaimNo,
        Self::CustomerId,
        Self::Amount,
        Self::Nominee,
        Self::BankAccountNo,
        Self::NameOfClaimant,
    ];

    /// Wire name, as used in the claim payload and the error map.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClaimNo => "claimNo",
            Self::CustomerId => "customerId",
            Self::ClaimType => "claimType",
            Self::Amount => "amount",
            Self::Nominee => "nominee",
            Self::Date => "date",
            Self::BankAccountNo => "bankAccountNo",
            Self::NameOfClaimant => "nameOfClaimant",
            Self::Signature => "signature",
        }
    }

    /// Name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::ClaimNo => "Claim No",
            Self::CustomerId => "Customer ID",
            Self::ClaimType => "Claim Type",
            Self::Amount => "Amount",
            Self::Nominee => "Nominee",
            Self::Date => "Date",
            Self::BankAccountNo => "Bank Account Number",
            Self::NameOfClaimant => "Name of Claimant",
            Self::Signature => "Signature",
        }
    }

    pub fn is_text(self) -> bool {
        Self::TEXT.contains(&self)
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimField {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ClaimError::validation(format!("unknown claim field '{s}'")))
    }
}

/// Kind of claim being filed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Health,
    Life,
    Vehicle,
    Travel,
    Property,
    Other,
}

impl ClaimType {
    pub const ALL: [ClaimType; 6] = [
        Self::Health,
        Self::Life,
        Self::Vehicle,
        Self::Travel,
        Self::Property,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Life => "life",
            Self::Vehicle => "vehicle",
            Self::Travel => "travel",
            Self::Property => "property",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown in the claim type picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Life => "Life",
            Self::Vehicle => "Vehicle",
            Self::Travel => "Travel",
            Self::Property => "Property",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ClaimError::validation(format!("unknown claim type '{s}'")))
    }
}

/// How the claim is being filed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    /// Fields typed in by hand, plus a drawn signature.
    #[default]
    Manual,
    /// A filled-in PDF claim form.
    Upload,
}

#[cfg(test)]
#[path = "../../tests/unit/form/fields.rs"]
mod tests;
