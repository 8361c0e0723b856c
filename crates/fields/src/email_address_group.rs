//! Email address group: an ordered list of addresses with a primary one.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crm_core::{DomainError, DomainResult, ValueObject};

use crate::email_address::EmailAddress;

/// An immutable group of email addresses.
///
/// The first element is the primary address; a non-empty group always has
/// one. Addresses are unique by their address string (exact, case-sensitive).
/// Every `with_*` method returns a new group and leaves `self` as it was.
///
/// Elements are matched by address string everywhere, so a new value with the
/// same address replaces the stored one regardless of its flags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailAddressGroup {
    elements: Vec<EmailAddress>,
}

impl EmailAddressGroup {
    /// Create a group from a list. The first item becomes primary.
    ///
    /// Fails with `DomainError::Validation` if two items share an address.
    pub fn from_list(elements: Vec<EmailAddress>) -> DomainResult<Self> {
        if let Some(duplicate) = find_duplicate(&elements) {
            tracing::debug!(address = %duplicate, "rejected duplicate email address");
            return Err(DomainError::validation(format!(
                "duplicate address: {duplicate}"
            )));
        }

        Ok(Self { elements })
    }

    /// The empty group (no primary).
    pub fn from_nothing() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Build from a list that is already known to be duplicate-free.
    fn from_unique(elements: Vec<EmailAddress>) -> Self {
        debug_assert!(
            find_duplicate(&elements).is_none(),
            "email address group built with a duplicate address"
        );
        Self { elements }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// The primary address, or `None` for an empty group.
    pub fn primary(&self) -> Option<&EmailAddress> {
        self.elements.first()
    }

    /// All addresses, primary first.
    pub fn list(&self) -> &[EmailAddress] {
        &self.elements
    }

    /// All addresses except the primary, in order.
    pub fn secondary_list(&self) -> &[EmailAddress] {
        self.elements.get(1..).unwrap_or(&[])
    }

    /// Address strings, in the same order as [`Self::list`].
    pub fn address_list(&self) -> Vec<&str> {
        self.elements.iter().map(EmailAddress::address).collect()
    }

    /// Whether an address is in the group (exact match).
    pub fn has_address(&self, address: &str) -> bool {
        self.get_by_address(address).is_some()
    }

    pub fn get_by_address(&self, address: &str) -> Option<&EmailAddress> {
        self.elements.iter().find(|item| item.address() == address)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, EmailAddress> {
        self.elements.iter()
    }

    /// Copy with `email_address` as the primary.
    ///
    /// An element with the same address is removed from its old position;
    /// all other elements keep their relative order.
    pub fn with_primary(&self, email_address: EmailAddress) -> Self {
        let rest: Vec<EmailAddress> = self
            .elements
            .iter()
            .filter(|item| item.address() != email_address.address())
            .cloned()
            .collect();

        let mut elements = Vec::with_capacity(rest.len() + 1);
        elements.push(email_address);
        elements.extend(rest);

        Self::from_unique(elements)
    }

    /// Copy with `email_address` appended. The primary does not change
    /// unless the group was empty.
    ///
    /// Fails with `DomainError::Validation` if the address is already present.
    pub fn with_added(&self, email_address: EmailAddress) -> DomainResult<Self> {
        let mut elements = self.elements.clone();
        elements.push(email_address);

        Self::from_list(elements)
    }

    /// Copy without the element matching `address`.
    ///
    /// Removing the primary promotes the next element. Unknown addresses
    /// yield an equal copy.
    pub fn with_removed_by_address(&self, address: &str) -> Self {
        let elements = self
            .elements
            .iter()
            .filter(|item| item.address() != address)
            .cloned()
            .collect();

        Self::from_unique(elements)
    }
}

impl ValueObject for EmailAddressGroup {}

impl TryFrom<Vec<EmailAddress>> for EmailAddressGroup {
    type Error = DomainError;

    fn try_from(elements: Vec<EmailAddress>) -> Result<Self, Self::Error> {
        Self::from_list(elements)
    }
}

impl<'a> IntoIterator for &'a EmailAddressGroup {
    type Item = &'a EmailAddress;
    type IntoIter = core::slice::Iter<'a, EmailAddress>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// Serialized as a plain list, primary first.
impl Serialize for EmailAddressGroup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.elements.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddressGroup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let elements = Vec::<EmailAddress>::deserialize(deserializer)?;
        EmailAddressGroup::from_list(elements).map_err(serde::de::Error::custom)
    }
}

fn find_duplicate(elements: &[EmailAddress]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(elements.len());
    elements
        .iter()
        .map(EmailAddress::address)
        .find(|address| !seen.insert(*address))
}
