mod send_email;
mod welcome;

pub use welcome::WELCOME_SUBJECT;

/// Transactional email sender backed by SES.
#[derive(Clone, Debug)]
pub struct SesMailer {
    inner: aws_sdk_sesv2::Client,
    sender: String,
}

impl SesMailer {
    pub fn new(inner: aws_sdk_sesv2::Client, sender: &str) -> Self {
        Self {
            inner,
            sender: sender.to_string(),
        }
    }

    /// Sends the fixed-template welcome email to a newly registered user.
    #[tracing::instrument(skip(self))]
    pub async fn send_welcome(&self, to_email: &str, name: &str) -> anyhow::Result<()> {
        let body = welcome::render_welcome(name);
        send_email::send_email(
            &self.inner,
            &self.sender,
            to_email,
            welcome::WELCOME_SUBJECT,
            &body,
        )
        .await
    }

    /// Sends an arbitrary HTML email.
    #[tracing::instrument(skip(self, subject, content))]
    pub async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        content: &str,
    ) -> anyhow::Result<()> {
        send_email::send_email(&self.inner, &self.sender, to_email, subject, content).await
    }
}
