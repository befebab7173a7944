//! Credential records and their parser
//!
//! A credential file is a JSON object whose `type` field says what it is:
//! `authorized_user` for the single user account written by the external
//! login flow, `service_account` for downloaded service-account keys.

mod kind;
mod parser;
mod record;

pub use kind::{CredentialKind, ServiceAccountKey, UserAccountKey};
pub use parser::CredentialParser;
pub use record::{CredentialRecord, SERVICE_ACCOUNT_NAME_LEN, USER_ACCOUNT_NAME};
