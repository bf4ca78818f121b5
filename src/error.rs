use thiserror::Error;

/// Problems found while loading or validating the page content.
///
/// These are content bugs caught when the page boots; the root view renders
/// them through an `ErrorBoundary` instead of a half-built page.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("link destination is empty")]
    EmptyDestination,

    #[error("unsupported link destination: {0}")]
    UnsupportedDestination(String),

    #[error("a link has an empty label")]
    EmptyLabel,

    #[error("page heading is empty")]
    EmptyHeading,

    #[error("biography has no paragraphs")]
    EmptyBiography,

    #[error("biography paragraph {0} is empty")]
    EmptyParagraph(usize),

    #[error("portrait {src} must have a source and non-zero dimensions")]
    InvalidPortrait { src: String },

    #[error("failed to parse profile content: {0}")]
    Parse(#[from] serde_json::Error),
}
