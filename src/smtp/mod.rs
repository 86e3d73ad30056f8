use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::SmtpConfig;
use crate::models::{EmailAccountRow, EmailMessage};
use crate::notifier::Notifier;

const SUBJECT: &str = "New message";

/// Relays each stored message to its account address over SMTP.
pub struct SmtpNotifier {
    from: Mailbox,
    transport: SmtpTransport,
}

impl SmtpNotifier {
    pub fn new(config: SmtpConfig) -> Result<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .with_context(|| format!("invalid SMTP_FROM '{}'", config.from))?;

        // Trim whitespace that may sneak in from copied app passwords
        let clean_password: String = config.password.chars().filter(|c| !c.is_whitespace()).collect();

        let mut builder = SmtpTransport::relay(&config.host)
            .with_context(|| format!("cannot build SMTP relay for {}", config.host))?
            .port(config.port);
        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(config.username, clean_password));
        }

        Ok(Self {
            from,
            transport: builder.build(),
        })
    }
}

/// Build the outbound mail for a stored message
pub fn build_email(from: &Mailbox, to: &str, content: &str) -> Result<Message> {
    let to_mb: Mailbox = to.parse()?;
    let message = Message::builder()
        .from(from.clone())
        .to(to_mb)
        .subject(SUBJECT)
        .body(content.to_string())?;
    Ok(message)
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn message_sent(&self, account: &EmailAccountRow, message: &EmailMessage) -> Result<()> {
        let email = build_email(&self.from, &account.address, &message.content)?;
        let transport = self.transport.clone();
        // lettre's SmtpTransport blocks on network I/O
        tokio::task::spawn_blocking(move || transport.send(&email))
            .await
            .context("smtp send task failed")??;
        tracing::debug!(to = %account.address, message_id = message.id, "message relayed over smtp");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
