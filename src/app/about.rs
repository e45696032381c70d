use leptos::prelude::*;

use crate::cards::{timeline_items, Side};
use crate::catalog::{Profile, TimelineEntry};
use crate::motion::Target;

use super::homepage::SectionTitle;
use super::motion::Reveal;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4 pt-24">
            <div class="hero text-center max-w-3xl">
                <Reveal target=Target::Hero index=0>
                    <p class="text-cyan font-medium mb-4">"Hi, my name is"</p>
                </Reveal>
                <Reveal target=Target::Hero index=1>
                    <h1 class="text-5xl lg:text-6xl font-bold mb-4">{profile.name.as_str()}</h1>
                </Reveal>
                <Reveal target=Target::Hero index=2>
                    <h2 class="text-2xl lg:text-3xl text-muted mb-6">{profile.role.as_str()}</h2>
                    <p class="text-lg leading-relaxed mb-10">{profile.tagline.as_str()}</p>
                </Reveal>
                <Reveal target=Target::Hero index=3 class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a href="#portfolio" class="btn-primary">
                        "View My Work"
                    </a>
                    <a href="#contact" class="btn-secondary">
                        "Get In Touch"
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(
    profile: &'static Profile,
    timeline: &'static [TimelineEntry],
) -> impl IntoView {
    view! {
        <section id="about" class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionTitle title="About Me" subtitle="A little background" />
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <Timeline timeline />
                    <Reveal target=Target::AboutCard class="about-card">
                        {profile
                            .about
                            .iter()
                            .map(|p| view! { <p class="mb-4 leading-relaxed">{p.as_str()}</p> })
                            .collect_view()}
                        <ul class="mt-6 space-y-2 text-sm">
                            <li>
                                <i class="fas fa-location-dot me-2 text-cyan"></i>
                                {profile.location.as_str()}
                            </li>
                            <li>
                                <i class="fas fa-envelope me-2 text-cyan"></i>
                                <a href=format!("mailto:{}", profile.email)>{profile.email.as_str()}</a>
                            </li>
                        </ul>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Timeline(timeline: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <ol class="timeline relative border-l border-muted/40 pl-6 space-y-8">
            {timeline_items(timeline)
                .into_iter()
                .map(|item| {
                    let entry = item.entry;
                    view! {
                        <li>
                            <Reveal
                                target=Target::TimelineItem
                                index=item.index
                                mirrored=item.side == Side::Right
                                class="timeline-item"
                            >
                                <span class="text-sm text-cyan">{entry.period.as_str()}</span>
                                <h3 class="text-lg font-semibold">{entry.title.as_str()}</h3>
                                <p class="text-muted text-sm mb-2">{entry.organization.as_str()}</p>
                                <p class="leading-relaxed">{entry.description.as_str()}</p>
                            </Reveal>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
