mod container;
mod portrait;
mod social_icon;
mod social_link;

pub use container::Container;
pub use portrait::Portrait;
pub use social_icon::SocialIconGlyph;
pub use social_link::{SocialLink, SocialLinks};
