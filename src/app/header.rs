use leptos::prelude::*;

use crate::nav::SECTIONS;

use super::scroll::{ActiveNav, NAVBAR_ID};

#[component]
pub fn Navbar(
    brand: String,
    nav: ActiveNav,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    let links = SECTIONS
        .iter()
        .map(|section| {
            let id = section.id;
            view! {
                <li>
                    <a
                        href=format!("#{id}")
                        class=move || if nav.is_active(id) { "nav-link active" } else { "nav-link" }
                        aria-current=move || nav.is_active(id).then_some("true")
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            id=NAVBAR_ID
            class="fixed top-0 inset-x-0 z-50 bg-background/90 backdrop-blur shadow-lg"
        >
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex flex-wrap items-center justify-between">
                <a href="#home" class="text-xl font-bold text-cyan">
                    {brand}
                </a>
                <button
                    class="navbar-toggler md:hidden text-2xl"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <i class="fas fa-bars"></i>
                </button>
                <ul class=move || {
                    if menu_open.get() {
                        "navbar-collapse show w-full md:w-auto flex flex-col md:flex-row gap-4 mt-4 md:mt-0"
                    } else {
                        "navbar-collapse hidden md:flex md:flex-row gap-6"
                    }
                }>{links}</ul>
            </div>
        </nav>
    }
}
