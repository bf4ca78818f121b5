use crate::profile::PortraitAsset;
use leptos::*;

#[component]
pub fn Portrait(
    asset: PortraitAsset,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    // width/height reserve the layout box before the image loads
    view! {
        <img
            src=asset.src
            alt=asset.alt
            width=asset.width.to_string()
            height=asset.height.to_string()
            decoding="async"
            class=class.unwrap_or_default()
        />
    }
}
