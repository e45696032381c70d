use leptos::prelude::*;

use crate::cards::project_cards;
use crate::catalog::ProjectEntry;
use crate::motion::Target;

use super::homepage::SectionTitle;
use super::motion::Reveal;

#[component]
pub fn PortfolioSection(projects: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <section id="portfolio" class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionTitle title="Portfolio" subtitle="Selected projects" />
                <div id="portfolioContainer" class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {project_cards(projects)
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div style:animation=card.entrance()>
                                    <Reveal
                                        target=Target::PortfolioCard
                                        index=card.index
                                        class="portfolio-card h-full"
                                    >
                                        <div class="portfolio-image">{card.icon}</div>
                                        <div class="portfolio-content">
                                            <h5 class="portfolio-title">{card.title}</h5>
                                            <p class="portfolio-description">{card.description}</p>
                                            <div class="portfolio-tags">
                                                {card
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! { <span class="portfolio-tag">{tag.as_str()}</span> }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </Reveal>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
