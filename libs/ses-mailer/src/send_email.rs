use anyhow::Context;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client;

/// Sends a single HTML email.
pub async fn send_email(
    client: &Client,
    from_email: &str,
    to_email: &str,
    subject: &str,
    content: &str,
) -> anyhow::Result<()> {
    let destination = Destination::builder().to_addresses(to_email).build();

    let subject = Content::builder()
        .data(subject)
        .charset("UTF-8")
        .build()
        .context("could not build subject content")?;

    let body_html = Content::builder()
        .data(content)
        .charset("UTF-8")
        .build()
        .context("could not build body content")?;

    let message = Message::builder()
        .subject(subject)
        .body(Body::builder().html(body_html).build())
        .build();

    client
        .send_email()
        .from_email_address(from_email)
        .destination(destination)
        .content(EmailContent::builder().simple(message).build())
        .send()
        .await
        .context(format!("could not send email to {to_email}"))?;

    Ok(())
}
