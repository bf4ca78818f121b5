use crate::components::{Container, Portrait, SocialLinks};
use crate::profile::Profile;
use leptos::*;
use leptos_meta::{Meta, Title};

/// The About page.
///
/// Narrow screens stack portrait, biography, then links. From `lg` up the
/// biography moves to the first column and spans both rows, with portrait
/// and links stacked in the second column.
#[component]
pub fn AboutPage(profile: Profile) -> impl IntoView {
    let links = profile.visible_links();
    let Profile {
        meta,
        heading,
        biography,
        portrait,
        ..
    } = profile;

    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        <Container class="mt-16 sm:mt-32">
            <div class="grid grid-cols-1 gap-y-16 lg:grid-cols-2 lg:grid-rows-[auto_1fr] lg:gap-y-12">
                <div class="lg:pl-20">
                    <div class="max-w-xs px-2.5 lg:max-w-none">
                        <Portrait
                            asset=portrait
                            class="aspect-square rotate-3 rounded-2xl bg-zinc-100 object-cover dark:bg-zinc-800"
                        />
                    </div>
                </div>
                <div class="lg:order-first lg:row-span-2">
                    <h1 class="text-4xl font-bold tracking-tight text-zinc-800 dark:text-zinc-100 sm:text-5xl">
                        {heading}
                    </h1>
                    <div class="biography mt-6 space-y-7 text-base text-zinc-600 dark:text-zinc-400">
                        {biography
                            .into_iter()
                            .map(|paragraph| view! { <p>{paragraph}</p> })
                            .collect_view()}
                    </div>
                </div>
                <div class="lg:pl-20">
                    <SocialLinks links=links/>
                </div>
            </div>
        </Container>
    }
}
