//! Builders for the three transactional emails. Each takes the requester's
//! `Origin` header when one was sent; without it the mail falls back to a raw
//! token the user can submit against the API directly.

use crate::domain::types::EmailMessage;

pub fn verification_email(to: &str, token: &str, origin: Option<&str>) -> EmailMessage {
    let message = match origin {
        Some(origin) => {
            let verify_url = format!("{origin}/accounts/verify-email?token={token}");
            format!(
                "<p>Please click the below link to verify your email:</p>\
                 <p><a href=\"{verify_url}\">{verify_url}</a></p>"
            )
        }
        None => format!(
            "<p>Please use this token to verify your email via the API route:</p>\
             <p><code>{token}</code></p>"
        ),
    };

    EmailMessage {
        to: to.to_string(),
        subject: "Employee Verification".to_string(),
        html: format!("<h4>Verify Email</h4><p>Thanks for registering!</p>{message}"),
    }
}

pub fn already_registered_email(to: &str, origin: Option<&str>) -> EmailMessage {
    let message = match origin {
        Some(origin) => format!(
            "<p>If you forgot your password, visit the \
             <a href=\"{origin}/accounts/forgot-password\">Forgot Password</a> page.</p>"
        ),
        None => "<p>If you forgot your password, reset it via the \
                 <code>/accounts/forgot-password</code> API route.</p>"
            .to_string(),
    };

    EmailMessage {
        to: to.to_string(),
        subject: "Email Already Registered".to_string(),
        html: format!(
            "<h4>Email Already Registered</h4>\
             <p>Your email <strong>{to}</strong> is already registered.</p>{message}"
        ),
    }
}

pub fn password_reset_email(to: &str, token: &str, origin: Option<&str>) -> EmailMessage {
    let message = match origin {
        Some(origin) => {
            let reset_url = format!("{origin}/accounts/reset-password?token={token}");
            format!(
                "<p>Click the below link to reset your password (valid for 1 day):</p>\
                 <p><a href=\"{reset_url}\">{reset_url}</a></p>"
            )
        }
        None => format!(
            "<p>Use this token to reset your password via the API route:</p>\
             <p><code>{token}</code></p>"
        ),
    };

    EmailMessage {
        to: to.to_string(),
        subject: "Reset Password".to_string(),
        html: format!("<h4>Reset Password</h4>{message}"),
    }
}
