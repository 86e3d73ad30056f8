//! Outbound notification hook for sent messages.
//!
//! The send endpoint persists a message and then hands it to the configured
//! [`Notifier`]. The default does nothing; `MAIL_NOTIFIER=smtp` swaps in
//! [`crate::smtp::SmtpNotifier`], which relays the content to the account address.

use crate::config::{Config, NotifierKind};
use crate::models::{EmailAccountRow, EmailMessage};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn message_sent(&self, account: &EmailAccountRow, message: &EmailMessage) -> anyhow::Result<()>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn message_sent(&self, _account: &EmailAccountRow, _message: &EmailMessage) -> anyhow::Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

pub fn from_config(config: &Config) -> anyhow::Result<Arc<dyn Notifier>> {
    match (config.notifier, &config.smtp) {
        (NotifierKind::Smtp, Some(smtp)) => Ok(Arc::new(crate::smtp::SmtpNotifier::new(smtp.clone())?)),
        (NotifierKind::Smtp, None) => anyhow::bail!("smtp notifier selected without SMTP settings"),
        (NotifierKind::None, _) => Ok(Arc::new(NoopNotifier)),
    }
}
