//! CRM contact field value objects.
//!
//! This crate contains the value types stored in contact-like records
//! (currently email addresses and email address groups), implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod email_address;
pub mod email_address_group;

pub use email_address::EmailAddress;
pub use email_address_group::EmailAddressGroup;
