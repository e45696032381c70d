use leptos::prelude::*;

use crate::cards::skill_cards;
use crate::catalog::{Catalog, SkillCategory};
use crate::motion::Target;

use super::homepage::SectionTitle;
use super::motion::{Reveal, SkillBar};

#[component]
pub fn SkillsSection(catalog: &'static Catalog) -> impl IntoView {
    view! {
        <section id="skills" class="py-24 px-4 bg-surface/40">
            <div class="max-w-6xl mx-auto">
                <SectionTitle title="Skills" subtitle="Tools I reach for" />
                {SkillCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! { <SkillGroup category catalog /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillGroup(category: SkillCategory, catalog: &'static Catalog) -> impl IntoView {
    let cards = skill_cards(category, catalog.skills_in(category));
    view! {
        <div class="mb-12">
            <h3 class="text-xl font-semibold mb-6">{category.label()}</h3>
            <div id=category.container_id() class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <Reveal target=Target::SkillCard index=card.index class="skill-card">
                                <div class="flex items-center gap-3 mb-4">
                                    <i class=format!("{} text-3xl", card.icon)></i>
                                    <span class="font-medium">{card.name}</span>
                                </div>
                                <SkillBar proficiency=card.proficiency />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
