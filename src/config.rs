use crate::lead::service::AccessKey;

/// Placeholder compiled in when no access key was supplied at build time.
/// Web3Forms rejects it, so every submission lands in the rejection branch.
pub const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_WEB3FORMS_ACCESS_KEY";

const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    // Local builds may point at a mock service
    option_env!("WEB3FORMS_ENDPOINT").unwrap_or(WEB3FORMS_ENDPOINT)
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    WEB3FORMS_ENDPOINT
}

pub fn get_access_key() -> AccessKey {
    AccessKey::new(resolve_access_key(option_env!("WEB3FORMS_ACCESS_KEY")))
}

pub fn access_key_configured() -> bool {
    resolve_access_key(option_env!("WEB3FORMS_ACCESS_KEY")) != PLACEHOLDER_ACCESS_KEY
}

fn resolve_access_key(from_build: Option<&'static str>) -> &'static str {
    match from_build.map(str::trim) {
        Some(key) if !key.is_empty() => key,
        _ => PLACEHOLDER_ACCESS_KEY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_placeholder() {
        assert_eq!(resolve_access_key(None), PLACEHOLDER_ACCESS_KEY);
        assert_eq!(resolve_access_key(Some("   ")), PLACEHOLDER_ACCESS_KEY);
    }

    #[test]
    fn supplied_key_is_trimmed() {
        assert_eq!(resolve_access_key(Some(" abc-123 \n")), "abc-123");
    }
}
