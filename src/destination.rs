use crate::error::ContentError;
use url::{ParseError, Url};

/// Where a link points, classified once when the content is loaded.
///
/// The text as written in the content is kept for `href`; `url` only
/// normalizes it for classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// `mailto:` link; holds the address.
    Mailto(String),
    /// Same-site path, query or fragment.
    Relative(String),
    /// Off-site `http`/`https` URL, including protocol-relative `//host/..`.
    External { url: Url, raw: String },
    /// `#` on its own. Content still to be filled in, not real navigation.
    Placeholder,
}

impl Destination {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ContentError::EmptyDestination);
        }
        if raw == "#" {
            return Ok(Destination::Placeholder);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(ContentError::UnsupportedDestination(raw.to_string()));
        }
        if let Some(address) = raw.strip_prefix("mailto:") {
            if address.is_empty() || !address.contains('@') {
                return Err(ContentError::UnsupportedDestination(raw.to_string()));
            }
            return Ok(Destination::Mailto(address.to_string()));
        }
        // protocol-relative: same scheme as the page, different host
        if raw.starts_with("//") {
            return match Url::parse(&format!("https:{}", raw)) {
                Ok(url) => Ok(Destination::External {
                    url,
                    raw: raw.to_string(),
                }),
                Err(_) => Err(ContentError::UnsupportedDestination(raw.to_string())),
            };
        }

        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Destination::External {
                url,
                raw: raw.to_string(),
            }),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(Destination::Relative(raw.to_string())),
            _ => Err(ContentError::UnsupportedDestination(raw.to_string())),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Destination::Placeholder)
    }

    /// External links open in a new tab.
    pub fn opens_externally(&self) -> bool {
        matches!(self, Destination::External { .. })
    }

    /// Value for the `href` attribute, exactly as written in the content.
    pub fn href(&self) -> String {
        match self {
            Destination::Mailto(address) => format!("mailto:{}", address),
            Destination::Relative(path) => path.clone(),
            Destination::External { raw, .. } => raw.clone(),
            Destination::Placeholder => "#".to_string(),
        }
    }
}
