//! Account records and payloads
use serde::{Deserialize, Serialize};

use super::message::EmailMessage;

/// Row shape of `email_accounts`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EmailAccountRow {
    pub id: i64,
    pub address: String,
}

/// An account as returned by the API, together with the messages it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAccount {
    pub id: i64,
    pub address: String,
    #[serde(default)]
    pub sent_emails: Vec<EmailMessage>,
}

impl EmailAccount {
    pub fn from_row(row: EmailAccountRow, sent_emails: Vec<EmailMessage>) -> Self {
        Self {
            id: row.id,
            address: row.address,
            sent_emails,
        }
    }
}

/// Body of `POST /api/emailaccounts`. Any `id` or `sentEmails` sent by the
/// client is ignored; a missing address fails validation like a bad one.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEmailAccount {
    #[serde(default)]
    pub address: String,
}
