use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Languages the visitor accepts, highest quality first, parsed from the
/// Accept-Language header.
pub struct UserLanguage {
    languages: Vec<String>,
}

impl UserLanguage {
    pub fn preferred_languages(&self) -> &[String] {
        &self.languages
    }
}

fn parse_accept_language(header: &str) -> Vec<String> {
    let mut languages: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q=").map(str::trim))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);

            Some((tag.to_owned(), quality))
        })
        .collect();

    languages.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    languages.into_iter().map(|(tag, _)| tag).collect()
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let languages = parts
            .headers
            .get("Accept-Language")
            .and_then(|v| v.to_str().ok())
            .map(parse_accept_language)
            .unwrap_or_default();

        Ok(UserLanguage { languages })
    }
}
