use crate::icons::SocialIcon;
use leptos::*;

#[component]
pub fn SocialIconGlyph(
    icon: SocialIcon,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let fill_rule = icon.fill_rule();
    view! {
        <svg viewBox="0 0 24 24" aria-hidden="true" class=class.unwrap_or_default()>
            {icon
                .paths()
                .iter()
                .map(|d| view! { <path fill-rule=fill_rule clip-rule=fill_rule d=*d/> })
                .collect_view()}
        </svg>
    }
}
