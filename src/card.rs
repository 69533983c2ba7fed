//! Public business card links, the string a QR renderer encodes.

/// URL of a card's public profile page.
#[must_use]
pub fn profile_url(base_url: &str, slug: &str) -> String {
    format!("{}/card/{}", base_url.trim_end_matches('/'), slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_url() {
        assert_eq!(
            profile_url("http://localhost:4000", "budi-santoso"),
            "http://localhost:4000/card/budi-santoso"
        );
    }

    #[test]
    fn test_profile_url_trailing_slash() {
        assert_eq!(
            profile_url("https://example.id/", "rina"),
            "https://example.id/card/rina"
        );
    }
}
