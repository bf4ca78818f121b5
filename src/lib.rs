pub mod classes;
pub mod components;
pub mod destination;
pub mod error;
pub mod icons;
pub mod pages;
pub mod profile;

use leptos::*;
use leptos_meta::provide_meta_context;
use pages::AboutPage;
use profile::Profile;
use wasm_bindgen::prelude::*;

/// Root component. Invalid embedded content renders an error panel
/// instead of a partial page.
#[component]
fn Root() -> impl IntoView {
    provide_meta_context();

    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="mx-auto max-w-2xl px-4 py-16">
                <h2 class="text-2xl font-bold text-zinc-800">"Something went wrong"</h2>
                <p class="mt-4 text-zinc-600">"The page content could not be loaded."</p>
                <ul class="mt-4 list-disc pl-6 text-sm text-zinc-600">
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
            </main>
        }>
            <main class="w-full">
                {Profile::embedded().map(|profile| view! { <AboutPage profile=profile/> })}
            </main>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // a logger can only be set once; a second init is harmless
    let _ = console_log::init_with_level(level);
    mount_to_body(Root);
}
