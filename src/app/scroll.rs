use leptos::{ev, prelude::*};
use leptos_use::{signal_throttled, use_document, use_event_listener, use_window_scroll};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::nav::{
    anchor_target, scroll_target, section_ids, ActiveSection, SectionBounds,
    FALLBACK_NAVBAR_HEIGHT, HEADER_OFFSET, SCROLL_THROTTLE_MS,
};

pub const NAVBAR_ID: &str = "mainNav";
const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

/// The navigation highlight, kept in sync with the window scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct ActiveNav(RwSignal<ActiveSection>);

impl ActiveNav {
    pub fn is_active(&self, id: &str) -> bool {
        self.0.with(|a| a.is_active(id))
    }

    /// Recomputes from the current scroll offset, outside the throttle.
    pub fn refresh(&self) {
        let scroll_y = window().scroll_y().unwrap_or_default();
        self.recompute(scroll_y);
    }

    fn recompute(&self, scroll_y: f64) {
        let bounds = measure_sections();
        self.0.maybe_update(|active| {
            let changed = active.update(&bounds, scroll_y, HEADER_OFFSET);
            if changed {
                log::debug!("active section: {:?}", active.get());
            }
            changed
        });
    }
}

pub fn use_active_nav() -> ActiveNav {
    let nav = ActiveNav(RwSignal::new(ActiveSection::default()));
    let (_, scroll_y) = use_window_scroll();
    let scroll_y = signal_throttled(scroll_y, SCROLL_THROTTLE_MS);

    Effect::new(move |_| nav.recompute(scroll_y.get()));

    nav
}

fn html_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn measure_sections() -> Vec<SectionBounds> {
    section_ids()
        .filter_map(|id| {
            let Some(el) = html_element(id) else {
                log::debug!("section #{id} not in document");
                return None;
            };
            Some(SectionBounds {
                id,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

fn navbar_height() -> f64 {
    html_element(NAVBAR_ID)
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(FALLBACK_NAVBAR_HEIGHT)
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Smoothly scrolls so the section starts below the navbar. Returns `false`
/// when no element has that id.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = html_element(id) else {
        return false;
    };
    smooth_scroll_to(scroll_target(f64::from(el.offset_top()), navbar_height()));
    true
}

/// Intercepts clicks on every `href="#..."` link whose target exists and
/// replaces the jump with a smooth scroll.
pub fn use_anchor_scroll(nav: ActiveNav, on_navigate: impl Fn() + 'static) {
    let _ = use_event_listener(use_document(), ev::click, move |ev| {
        let anchor = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten());
        let Some(href) = anchor.and_then(|a| a.get_attribute("href")) else {
            return;
        };
        let Some(id) = anchor_target(&href) else {
            return;
        };
        if scroll_to_section(id) {
            ev.prevent_default();
            nav.refresh();
            on_navigate();
        }
    });
}

/// `Escape` closes the mobile menu; `Tab` turns on focus outlines until the
/// next mouse press.
pub fn use_keyboard_nav(set_menu_open: WriteSignal<bool>) {
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        match ev.key().as_str() {
            "Escape" => set_menu_open.set(false),
            "Tab" => set_body_class(KEYBOARD_NAV_CLASS, true),
            _ => {}
        }
    });
    let _ = use_event_listener(use_document(), ev::mousedown, move |_| {
        set_body_class(KEYBOARD_NAV_CLASS, false)
    });
}

fn set_body_class(class: &str, on: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let res = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = res {
        log::debug!("couldn't toggle body class {class}: {e:?}");
    }
}
