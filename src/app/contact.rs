use std::time::Duration;

use leptos::{
    either::{Either, EitherOf3},
    ev::SubmitEvent,
    prelude::*,
};

use crate::contact::{
    ContactFormState, FormSubmission, Notice, SubmitOutcome, NOTICE_HIDE_MS, SEND_DELAY_MS,
};
use crate::motion::Target;

use super::homepage::SectionTitle;
use super::motion::Reveal;

const INPUT_CLASS: &str = "w-full px-4 py-2 rounded-md border border-muted bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-cyan";

#[component]
pub fn ContactSection() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let state = RwSignal::new(ContactFormState::default());

    let clear = move || {
        for field in [name, email, subject, message] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = FormSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        match state.try_update(|s| s.submit(&form)) {
            Some(SubmitOutcome::Accepted) => {
                log::info!("sending contact message");
                set_timeout(
                    move || {
                        let Some(generation) = state.try_update(|s| s.complete_send()) else {
                            return;
                        };
                        clear();
                        set_timeout(
                            move || {
                                state.update(|s| {
                                    s.dismiss_success(generation);
                                });
                            },
                            Duration::from_millis(NOTICE_HIDE_MS),
                        );
                    },
                    Duration::from_millis(SEND_DELAY_MS),
                );
            }
            Some(SubmitOutcome::Rejected(validation)) => {
                log::debug!("contact form rejected: {:?}", validation.errors);
            }
            Some(SubmitOutcome::Ignored) | None => {}
        }
    };

    let sending = move || state.with(|s| s.is_sending());
    let notice = move || state.with(|s| s.notice().clone());

    view! {
        <section id="contact" class="py-24 px-4 bg-surface/40">
            <div class="max-w-2xl mx-auto">
                <SectionTitle title="Get In Touch" subtitle="Have a project in mind? Let's talk." />
                <Reveal target=Target::ContactForm class="contact-form">
                    <form id="contactForm" novalidate=true on:submit=on_submit class="space-y-4">
                        <Reveal target=Target::ContactInput index=0>
                            <label for="name" class="block mb-1 font-medium">
                                "Name"
                            </label>
                            <input id="name" type="text" class=INPUT_CLASS bind:value=name />
                        </Reveal>
                        <Reveal target=Target::ContactInput index=1>
                            <label for="email" class="block mb-1 font-medium">
                                "Email"
                            </label>
                            <input id="email" type="email" class=INPUT_CLASS bind:value=email />
                        </Reveal>
                        <Reveal target=Target::ContactInput index=2>
                            <label for="subject" class="block mb-1 font-medium">
                                "Subject"
                            </label>
                            <input id="subject" type="text" class=INPUT_CLASS bind:value=subject />
                        </Reveal>
                        <Reveal target=Target::ContactInput index=3>
                            <label for="message" class="block mb-1 font-medium">
                                "Message"
                            </label>
                            <textarea id="message" rows="5" class=INPUT_CLASS bind:value=message></textarea>
                        </Reveal>
                        <button type="submit" class="btn-primary w-full" disabled=sending>
                            {move || {
                                if sending() {
                                    Either::Left(
                                        view! {
                                            <i class="fas fa-spinner fa-spin me-2"></i>
                                            "Sending..."
                                        },
                                    )
                                } else {
                                    Either::Right(
                                        view! {
                                            <i class="fas fa-paper-plane me-2"></i>
                                            "Send Message"
                                        },
                                    )
                                }
                            }}
                        </button>
                    </form>
                    <div
                        id="formMessage"
                        role="alert"
                        class=move || match notice() {
                            Notice::Success => "alert alert-success mt-4",
                            Notice::Errors(_) => "alert alert-danger mt-4",
                            Notice::Hidden => "alert mt-4",
                        }
                        style:display=move || {
                            if notice() == Notice::Hidden { "none" } else { "block" }
                        }
                    >
                        {move || match notice() {
                            Notice::Hidden => EitherOf3::A(()),
                            Notice::Success => {
                                EitherOf3::B(
                                    view! {
                                        <i class="fas fa-check-circle me-2"></i>
                                        "Thank you! Your message has been sent successfully."
                                    },
                                )
                            }
                            Notice::Errors(messages) => {
                                EitherOf3::C(
                                    view! {
                                        <i class="fas fa-exclamation-circle me-2"></i>
                                        {messages
                                            .into_iter()
                                            .map(|m| view! { <span class="block">{m}</span> })
                                            .collect_view()}
                                    },
                                )
                            }
                        }}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
