//! Admin identity validation.
//!
//! Authentication itself happens upstream (the deployment sits behind
//! an access proxy); this module only checks the shape of the email the
//! proxy forwards.

use crate::error::CoreError;

/// Validate the email forwarded by the access proxy.
///
/// Intentionally loose: one `@` with a dot somewhere in the domain
/// part. The proxy has already authenticated the user; this guards
/// against misconfigured or spoofed header values, not bad signups.
pub fn validate_admin_email(email: &str) -> Result<(), CoreError> {
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => {
            return Err(CoreError::Unauthorized(
                "Invalid email format in authentication header".into(),
            ))
        }
    };

    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.chars().any(char::is_whitespace);
    if local.is_empty() || local.chars().any(char::is_whitespace) || !domain_ok {
        return Err(CoreError::Unauthorized(
            "Invalid email format in authentication header".into(),
        ));
    }
    Ok(())
}
