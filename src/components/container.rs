use crate::classes::merge_classes;
use leptos::*;

/// Centered page column with consistent max-width and horizontal padding.
#[component]
pub fn Container(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=merge_classes("sm:px-8", class.as_deref())>
            <div class="mx-auto w-full max-w-7xl lg:px-8">
                <div class="relative px-4 sm:px-8 lg:px-12">
                    <div class="mx-auto max-w-2xl lg:max-w-5xl">
                        {children()}
                    </div>
                </div>
            </div>
        </div>
    }
}
