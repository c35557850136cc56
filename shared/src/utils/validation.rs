//! Common validation and log-redaction helpers

/// Returns the trimmed value when it is present and not blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Mask an email address for logs: `jane.doe@corp.com` -> `j***@corp.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  Sales ")), Some("Sales"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane.doe@corp.com"), "j***@corp.com");
        assert_eq!(mask_email("@corp.com"), "***@corp.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
