use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::{catalog::catalog, motion::Target};

use super::about::{AboutSection, Hero};
use super::contact::ContactSection;
use super::footer::Footer;
use super::header::Navbar;
use super::motion::Reveal;
use super::portfolio::PortfolioSection;
use super::scroll::{use_active_nav, use_anchor_scroll, use_keyboard_nav};
use super::skills::SkillsSection;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = use_active_nav();
    let (menu_open, set_menu_open) = signal(false);
    use_anchor_scroll(nav, move || set_menu_open.set(false));
    use_keyboard_nav(set_menu_open);

    match catalog() {
        Ok(catalog) => Either::Left(view! {
            <Title text=catalog.profile.name.clone() />
            <Navbar brand=catalog.profile.name.clone() nav menu_open set_menu_open />
            <main class="flex flex-col w-full">
                <Hero profile=&catalog.profile />
                <AboutSection profile=&catalog.profile timeline=&catalog.timeline />
                <SkillsSection catalog />
                <PortfolioSection projects=&catalog.projects />
                <ContactSection />
            </main>
            <Footer name=catalog.profile.name.clone() />
        }),
        Err(e) => {
            log::error!("catalog unavailable: {e}");
            Either::Right(view! {
                <Title text="Portfolio" />
                <main class="max-w-2xl mx-auto p-8 text-center">
                    <p class="text-red">"This page's content couldn't be loaded."</p>
                    <pre class="mt-4 text-sm text-muted whitespace-pre-wrap">{e.to_string()}</pre>
                </main>
            })
        }
    }
}

#[component]
pub fn SectionTitle(
    #[prop(into)] title: String,
    #[prop(into, optional)] subtitle: String,
) -> impl IntoView {
    view! {
        <Reveal target=Target::SectionTitle class="text-center mb-12">
            <h2 class="section-title text-3xl lg:text-4xl font-bold">{title}</h2>
            {(!subtitle.is_empty()).then(|| view! { <p class="mt-3 text-muted">{subtitle}</p> })}
        </Reveal>
    }
}
