pub mod templates;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;
use crate::models::Contact;

/// Outbound mail seam. The SMTP transport sits behind this trait so the
/// submission handler can be exercised against an in-memory stand-in.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Acknowledgment to the submitter.
    async fn send_acknowledgment(&self, contact: &Contact) -> Result<(), String>;

    /// Notification to the operator mailbox.
    async fn send_operator_notice(&self, contact: &Contact) -> Result<(), String>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    operator_to: String,
    site_name: String,
    site_url: String,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Result<Self, String> {
        let smtp = &config.smtp;
        let creds = Credentials::new(smtp.user.clone(), smtp.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(smtp.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: smtp.from.clone(),
            operator_to: config.operator_email.clone(),
            site_name: config.site_name.clone(),
            site_url: config.site_url.clone(),
        })
    }

    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_acknowledgment(&self, contact: &Contact) -> Result<(), String> {
        let html = templates::render_acknowledgment(&contact.name, &self.site_name, &self.site_url);
        self.send(
            &contact.email,
            &format!("Thank You for Contacting {}!", self.site_name),
            &html,
        )
        .await
    }

    async fn send_operator_notice(&self, contact: &Contact) -> Result<(), String> {
        let submitted_at = contact
            .submission_date
            .format("%B %d, %Y at %H:%M UTC")
            .to_string();
        let html = templates::render_operator_notice(contact, &submitted_at);
        self.send(
            &self.operator_to,
            &format!("New Contact Form Submission from {}", contact.name),
            &html,
        )
        .await
    }
}
