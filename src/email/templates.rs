use crate::models::Contact;

pub fn render_acknowledgment(name: &str, site_name: &str, site_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <p>Dear {name},</p>
    <p>Thank you for reaching out to {site_name}!</p>
    <p>I appreciate your interest and will get back to you shortly to discuss your needs.</p>
    <p>In the meantime, feel free to explore more of my projects and services on my website.</p>
    <p>Best regards,</p>
    <p>{site_name}</p>
    <p><a href="{site_url}" style="display: inline-block; padding: 10px 20px; background: #0070f3; color: white; text-decoration: none; border-radius: 4px;">My Portfolio</a></p>
</body>
</html>"#
    )
}

pub fn render_operator_notice(contact: &Contact, submitted_at: &str) -> String {
    // Company line only appears when the submitter filled it in
    let company_line = if contact.company.is_empty() {
        String::new()
    } else {
        format!(
            "<p><strong>Company:</strong> {}</p>\n    ",
            contact.company
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <p>You have a new contact form submission!</p>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    {company_line}<p><strong>Message:</strong></p>
    <p>{message}</p>
    <p>Submitted on: {submitted_at}</p>
    <p>Please contact them soon!</p>
</body>
</html>"#,
        name = contact.name,
        email = contact.email,
        message = contact.message,
    )
}
