pub const WELCOME_SUBJECT: &str = "Welcome to our service!";

/// Renders the welcome email body for a newly registered user.
pub fn render_welcome(name: &str) -> String {
    format!(
        "<h1>Welcome {name}!</h1><p>Thank you for registering with us.</p>",
        name = html_escape(name)
    )
}

/// Minimal escaping for the interpolated display name.
fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_into_template() {
        let body = render_welcome("Ada");
        assert!(body.contains("<h1>Welcome Ada!</h1>"));
        assert!(body.contains("Thank you for registering"));
    }

    #[test]
    fn escapes_markup_in_name() {
        let body = render_welcome("<script>");
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
