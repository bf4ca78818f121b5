use crate::classes::merge_classes;
use crate::destination::Destination;
use crate::error::ContentError;
use crate::icons::SocialIcon;
use serde::{Deserialize, Deserializer};

const EMBEDDED_PROFILE: &str = include_str!("../content/profile.json");

/// Spacing applied to every social entry.
pub const SOCIAL_ITEM_CLASS: &str = "mt-4";

/// Separator applied to contact entries so they read as their own group.
pub const CONTACT_ITEM_CLASS: &str = "mt-8 border-t border-zinc-100 pt-8 dark:border-zinc-700/40";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Static portrait image. Intrinsic dimensions are emitted on the `<img>`
/// so the browser can reserve space before the file arrives.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortraitAsset {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    #[default]
    Social,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkDescriptor {
    pub label: String,
    #[serde(deserialize_with = "deserialize_destination")]
    pub destination: Destination,
    pub icon: SocialIcon,
    #[serde(default)]
    pub kind: LinkKind,
    /// Extra classes appended after the kind's own classes.
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

fn deserialize_destination<'de, D>(deserializer: D) -> Result<Destination, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Destination::parse(&raw).map_err(serde::de::Error::custom)
}

impl LinkDescriptor {
    /// Classes for the list entry: the kind's spacing/separator first,
    /// then any descriptor-specific classes.
    pub fn item_class(&self) -> String {
        let base = match self.kind {
            LinkKind::Social => SOCIAL_ITEM_CLASS,
            LinkKind::Contact => CONTACT_ITEM_CLASS,
        };
        merge_classes(base, self.class.as_deref())
    }

    pub fn is_contact(&self) -> bool {
        self.kind == LinkKind::Contact
    }
}

/// Everything the About page shows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub meta: PageMeta,
    pub heading: String,
    pub biography: Vec<String>,
    pub portrait: PortraitAsset,
    pub links: Vec<LinkDescriptor>,
}

impl Profile {
    /// Parse and validate profile content from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// The profile compiled into the binary from `content/profile.json`.
    pub fn embedded() -> Result<Self, ContentError> {
        let profile = Self::from_json(EMBEDDED_PROFILE)?;
        for link in profile.links.iter().filter(|l| l.visible && l.destination.is_placeholder()) {
            log::warn!("link \"{}\" has no destination yet (placeholder `#`)", link.label);
        }
        log::debug!(
            "loaded profile with {} links ({} visible)",
            profile.links.len(),
            profile.visible_links().len()
        );
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.heading.trim().is_empty() {
            return Err(ContentError::EmptyHeading);
        }
        if self.biography.is_empty() {
            return Err(ContentError::EmptyBiography);
        }
        if let Some(index) = self.biography.iter().position(|p| p.trim().is_empty()) {
            return Err(ContentError::EmptyParagraph(index));
        }
        if self.portrait.src.trim().is_empty() || self.portrait.width == 0 || self.portrait.height == 0 {
            return Err(ContentError::InvalidPortrait {
                src: self.portrait.src.clone(),
            });
        }
        if self.links.iter().any(|l| l.label.trim().is_empty()) {
            return Err(ContentError::EmptyLabel);
        }
        Ok(())
    }

    /// Links to render: visible social entries in declared order, then
    /// visible contact entries in declared order.
    pub fn visible_links(&self) -> Vec<LinkDescriptor> {
        let visible = self.links.iter().filter(|l| l.visible);
        let (contacts, socials): (Vec<_>, Vec<_>) = visible.partition(|l| l.is_contact());
        socials.into_iter().chain(contacts).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> Profile {
        Profile::from_json(EMBEDDED_PROFILE).unwrap()
    }

    fn labels(links: &[LinkDescriptor]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_default_links() {
        let profile = embedded();
        let links = profile.visible_links();
        assert_eq!(
            labels(&links),
            vec![
                "Follow on GitHub",
                "Follow on LinkedIn",
                "Follow on Instagram",
                "aschulte1919@gmail.com",
            ]
        );
        assert_eq!(
            links.iter().map(|l| l.icon).collect::<Vec<_>>(),
            vec![SocialIcon::GitHub, SocialIcon::LinkedIn, SocialIcon::Instagram, SocialIcon::Mail]
        );
    }

    #[test]
    fn test_twitter_is_defined_but_hidden() {
        let profile = embedded();
        let twitter = profile.links.iter().find(|l| l.icon == SocialIcon::Twitter).unwrap();
        assert!(!twitter.visible);
        assert!(profile.visible_links().iter().all(|l| l.icon != SocialIcon::Twitter));
    }

    #[test]
    fn test_contact_is_last_and_separated() {
        let links = embedded().visible_links();
        let last = links.last().unwrap();
        assert!(last.is_contact());
        assert_eq!(last.destination, Destination::Mailto("aschulte1919@gmail.com".to_string()));
        assert!(last.item_class().contains("border-t"));
        for social in &links[..links.len() - 1] {
            assert!(!social.is_contact());
            assert!(!social.item_class().contains("border-t"));
            assert_eq!(social.item_class(), SOCIAL_ITEM_CLASS);
        }
    }

    #[test]
    fn test_contact_declared_first_still_renders_last() {
        let mut profile = embedded();
        let contact = profile.links.pop().unwrap();
        profile.links.insert(0, contact);
        let links = profile.visible_links();
        assert!(links.last().unwrap().is_contact());
        assert_eq!(links.iter().filter(|l| l.is_contact()).count(), 1);
    }

    #[test]
    fn test_toggling_visibility_keeps_other_entries_in_order() {
        let mut profile = embedded();
        for link in profile.links.iter_mut() {
            if link.icon == SocialIcon::Twitter {
                link.visible = true;
            }
            if link.icon == SocialIcon::LinkedIn {
                link.visible = false;
            }
        }
        assert_eq!(
            labels(&profile.visible_links()),
            vec![
                "Follow on Twitter",
                "Follow on GitHub",
                "Follow on Instagram",
                "aschulte1919@gmail.com",
            ]
        );
    }

    #[test]
    fn test_biography_has_four_paragraphs_in_order() {
        let profile = embedded();
        assert_eq!(profile.biography.len(), 4);
        assert!(profile.biography[0].starts_with("I’ve loved making things"));
        assert!(profile.biography[0].contains("'84 mercedes benz"));
        assert!(profile.biography[1].starts_with("Today, I’m a software developer"));
        assert!(profile.biography[2].starts_with("Outside of work"));
        assert!(profile.biography[3].ends_with("over and over and over."));
    }

    #[test]
    fn test_meta() {
        let profile = embedded();
        assert_eq!(profile.meta.title, "About - Ann Schulte");
        assert_eq!(profile.meta.description, "Hi 👋 I’m Ann Schulte.");
        assert_eq!(profile.portrait.alt, "");
    }

    #[test]
    fn test_descriptor_class_is_appended() {
        let link = LinkDescriptor {
            label: "Résumé".to_string(),
            destination: Destination::Relative("/resume.pdf".to_string()),
            icon: SocialIcon::Mail,
            kind: LinkKind::Social,
            class: Some("font-bold mt-4".to_string()),
            visible: true,
        };
        assert_eq!(link.item_class(), "mt-4 font-bold");
    }

    /// Reads `width="…"` from the root element of an SVG document.
    fn svg_dimension(svg: &str, attr: &str) -> Option<u32> {
        let root = &svg[svg.find("<svg")?..];
        let root = &root[..root.find('>')?];
        let needle = format!(" {}=\"", attr);
        let start = root.find(&needle)? + needle.len();
        let len = root[start..].find('"')?;
        root[start..start + len].parse().ok()
    }

    #[test]
    fn test_portrait_file_exists_with_configured_size() {
        let profile = embedded();
        let relative = profile.portrait.src.trim_start_matches('/');
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(relative);
        let svg = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("portrait {} is missing: {}", path.display(), e));

        assert_eq!(svg_dimension(&svg, "width"), Some(profile.portrait.width));
        assert_eq!(svg_dimension(&svg, "height"), Some(profile.portrait.height));
    }

    #[test]
    fn test_bad_destination_fails_to_load() {
        let json = EMBEDDED_PROFILE.replace("mailto:aschulte1919@gmail.com", "javascript:void(0)");
        assert!(matches!(Profile::from_json(&json), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_validation_errors() {
        let mut profile = embedded();
        profile.heading = "  ".to_string();
        assert!(matches!(profile.validate(), Err(ContentError::EmptyHeading)));

        let mut profile = embedded();
        profile.biography.clear();
        assert!(matches!(profile.validate(), Err(ContentError::EmptyBiography)));

        let mut profile = embedded();
        profile.biography[2] = String::new();
        assert!(matches!(profile.validate(), Err(ContentError::EmptyParagraph(2))));

        let mut profile = embedded();
        profile.portrait.width = 0;
        assert!(matches!(profile.validate(), Err(ContentError::InvalidPortrait { .. })));

        let mut profile = embedded();
        profile.links[1].label = String::new();
        assert!(matches!(profile.validate(), Err(ContentError::EmptyLabel)));
    }
}
