use std::sync::Arc;
use std::time::Duration;

use leptos::{
    html::{self, ElementType},
    prelude::*,
};
use leptos_use::{use_raf_fn_with_options, utils::Pausable, UseRafFnCallbackArgs, UseRafFnOptions};
use wasm_bindgen::{prelude::*, JsCast};

use crate::motion::{
    AnimateOnEnter, EnterAnimation, NoopEngine, SkillBarTween, Target, Trigger, HIGHLIGHT_MS,
};

/// Engine shared through context by every animated element.
#[derive(Clone)]
pub struct AnimationEngine(pub Arc<dyn AnimateOnEnter>);

impl AnimationEngine {
    pub fn browser() -> Self {
        Self(Arc::new(ObserverEngine))
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self(Arc::new(NoopEngine))
    }
}

/// Reports enter/exit through the browser's `IntersectionObserver`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObserverEngine;

impl AnimateOnEnter for ObserverEngine {
    fn observe(
        &self,
        element: web_sys::Element,
        trigger: &Trigger,
        on_change: Box<dyn Fn(bool) + 'static>,
    ) {
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    on_change(entry.is_intersecting());
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&trigger.root_margin());
        init.set_threshold(&JsValue::from_f64(trigger.threshold()));

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => {
                observer.observe(&element);
                // observers live as long as the page
                callback.forget();
            }
            Err(e) => log::warn!("couldn't create IntersectionObserver: {e:?}"),
        }
    }
}

/// Registers `node_ref` with the context engine and returns whether the
/// element is currently past its trigger.
pub fn use_enter_animation<E>(
    node_ref: NodeRef<E>,
    trigger: Trigger,
    reverse_on_exit: bool,
) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (visible, set_visible) = signal(false);
    let engine = use_context::<AnimationEngine>().unwrap_or_default();

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            let el: web_sys::Element = el.unchecked_into();
            engine.0.observe(
                el,
                &trigger,
                Box::new(move |entered| {
                    if entered || reverse_on_exit {
                        set_visible.set(entered);
                    }
                }),
            );
        }
    });

    visible
}

#[component]
pub fn Reveal(
    target: Target,
    #[prop(optional)] index: usize,
    #[prop(optional)] mirrored: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let anim = EnterAnimation::for_target(target);
    let anim = if mirrored { anim.mirrored() } else { anim };
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_enter_animation(node_ref, anim.trigger.clone(), anim.reverse_on_exit);

    view! {
        <div node_ref=node_ref class=class style=move || anim.style(visible.get(), index)>
            {children()}
        </div>
    }
}

#[component]
pub fn SkillBar(proficiency: u8) -> impl IntoView {
    let anim = EnterAnimation::for_target(Target::SkillBar);
    let tween = SkillBarTween::new(proficiency);
    let start = -f64::from(anim.delay_ms);
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_enter_animation(node_ref, anim.trigger.clone(), anim.reverse_on_exit);

    let (frame, set_frame) = signal(tween.sample(0.0));
    let (settled, set_settled) = signal(true);
    let (highlight, set_highlight) = signal(false);
    // negative while waiting out the start delay
    let elapsed = StoredValue::new(start);

    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args: UseRafFnCallbackArgs| {
            let forward = visible.get_untracked();
            let step = if forward { args.delta } else { -args.delta };
            let now = (elapsed.get_value() + step).clamp(start, tween.duration_ms);
            elapsed.set_value(now);

            let prev = frame.get_untracked();
            let next = tween.sample(now);
            if next != prev {
                set_frame.set(next);
            }
            if forward && next.done && !prev.done {
                set_highlight.set(true);
                set_timeout(
                    move || set_highlight.set(false),
                    Duration::from_millis(HIGHLIGHT_MS),
                );
            }
            let at_rest = if forward {
                now >= tween.duration_ms
            } else {
                now <= start
            };
            set_settled.set(at_rest);
        },
        UseRafFnOptions::default().immediate(false),
    );

    Effect::watch(move || visible.get(), move |_, _, _| resume(), false);
    Effect::watch(
        move || settled.get(),
        move |at_rest, _, _| {
            if *at_rest {
                pause();
            }
        },
        false,
    );

    view! {
        <div node_ref=node_ref class="skill-progress">
            <div class="flex justify-between text-sm mb-1">
                <span class="text-muted">"Proficiency"</span>
                <span class="skill-percent font-semibold">{move || frame.get().counter} "%"</span>
            </div>
            <div class="h-2 rounded-full bg-surface overflow-hidden">
                <div
                    class=move || {
                        if highlight.get() { "skill-bar-fill highlight" } else { "skill-bar-fill" }
                    }
                    style:width=move || format!("{:.2}%", frame.get().width_pct)
                ></div>
            </div>
        </div>
    }
}
