use crate::classes::merge_classes;
use crate::components::SocialIconGlyph;
use crate::icons::SocialIcon;
use crate::profile::LinkDescriptor;
use leptos::*;

/// Hover and keyboard focus recolor the row identically.
const LINK_CLASS: &str = "group flex text-sm font-medium text-zinc-800 transition \
    hover:text-violet-500 focus-visible:text-violet-500 \
    dark:text-zinc-200 dark:hover:text-violet-500 dark:focus-visible:text-violet-500";

const ICON_CLASS: &str = "h-6 w-6 flex-none fill-zinc-500 transition \
    group-hover:fill-violet-500 group-focus-visible:fill-violet-500";

/// One list entry: icon plus label, the whole row a single link.
///
/// `class` is appended to the entry's base `flex` class; it can add to the
/// base styling but never remove it.
#[component]
pub fn SocialLink(
    #[prop(into)] href: String,
    icon: SocialIcon,
    #[prop(optional, into)] class: Option<String>,
    /// Open in a new tab (off-site destinations).
    #[prop(optional)]
    external: bool,
    children: Children,
) -> impl IntoView {
    let item_class = merge_classes("flex", class.as_deref());
    let content = view! {
        <SocialIconGlyph icon=icon class=ICON_CLASS/>
        <span class="ml-4">{children()}</span>
    };

    let link = if external {
        view! {
            <a href=href class=LINK_CLASS target="_blank" rel="noopener noreferrer">{content}</a>
        }
    } else {
        view! { <a href=href class=LINK_CLASS>{content}</a> }
    };

    view! { <li class=item_class>{link}</li> }
}

/// Vertical list of links, rendered in the order given.
#[component]
pub fn SocialLinks(links: Vec<LinkDescriptor>) -> impl IntoView {
    view! {
        <ul role="list">
            {links
                .into_iter()
                .map(|link| {
                    let class = link.item_class();
                    let LinkDescriptor { label, destination, icon, .. } = link;
                    view! {
                        <SocialLink
                            href=destination.href()
                            icon=icon
                            class=class
                            external=destination.opens_externally()
                        >
                            {label}
                        </SocialLink>
                    }
                })
                .collect_view()}
        </ul>
    }
}
