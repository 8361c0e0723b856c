use serde::{Deserialize, Serialize};

use crm_core::{DomainError, DomainResult, ValueObject};

/// A single email address as stored on a contact.
///
/// The `invalid` and `opted_out` flags are opaque to this crate: they are
/// carried along unchanged and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EmailAddressRecord")]
pub struct EmailAddress {
    address: String,
    invalid: bool,
    opted_out: bool,
}

impl EmailAddress {
    /// Create an email address with both flags cleared.
    ///
    /// The address is stored exactly as given (no trimming or case folding).
    /// Fails with `DomainError::Validation` if it is empty or whitespace-only.
    pub fn from_address(address: impl Into<String>) -> DomainResult<Self> {
        let address = address.into();

        if address.trim().is_empty() {
            tracing::debug!("rejected empty email address");
            return Err(DomainError::validation("email address cannot be empty"));
        }

        Ok(Self {
            address,
            invalid: false,
            opted_out: false,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_opted_out(&self) -> bool {
        self.opted_out
    }

    /// Copy flagged as invalid.
    pub fn invalid(self) -> Self {
        Self {
            invalid: true,
            ..self
        }
    }

    /// Copy flagged as opted out.
    pub fn opted_out(self) -> Self {
        Self {
            opted_out: true,
            ..self
        }
    }
}

impl ValueObject for EmailAddress {}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.address)
    }
}

/// Wire shape of [`EmailAddress`]; validated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddressRecord {
    address: String,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    opted_out: bool,
}

impl TryFrom<EmailAddressRecord> for EmailAddress {
    type Error = DomainError;

    fn try_from(record: EmailAddressRecord) -> Result<Self, Self::Error> {
        let email_address = EmailAddress::from_address(record.address)?;
        Ok(EmailAddress {
            invalid: record.invalid,
            opted_out: record.opted_out,
            ..email_address
        })
    }
}
