use crate::catalog::{ProjectEntry, SkillCategory, SkillEntry, TimelineEntry};

/// Seconds added to each successive card's entrance.
pub const CARD_STAGGER_SECS: f64 = 0.1;
pub const CARD_ENTRANCE_SECS: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard<'a> {
    pub index: usize,
    pub title: &'a str,
    pub description: &'a str,
    pub icon: &'a str,
    pub tags: &'a [String],
}

impl ProjectCard<'_> {
    pub fn delay_secs(&self) -> f64 {
        stagger_secs(self.index)
    }

    /// CSS `animation` shorthand for the card's staggered entrance.
    pub fn entrance(&self) -> String {
        format!(
            "slideInUp {CARD_ENTRANCE_SECS}s ease-out {}s both",
            round_secs(self.delay_secs())
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCard<'a> {
    pub index: usize,
    pub category: SkillCategory,
    pub name: &'a str,
    pub icon: &'a str,
    pub proficiency: u8,
}

impl SkillCard<'_> {
    pub fn label(&self) -> String {
        format!("{}%", self.proficiency)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem<'a> {
    pub index: usize,
    pub side: Side,
    pub entry: &'a TimelineEntry,
}

pub fn stagger_secs(index: usize) -> f64 {
    index as f64 * CARD_STAGGER_SECS
}

fn round_secs(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}

pub fn project_cards(entries: &[ProjectEntry]) -> Vec<ProjectCard<'_>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, p)| ProjectCard {
            index,
            title: &p.title,
            description: &p.description,
            icon: &p.icon,
            tags: &p.tags,
        })
        .collect()
}

pub fn skill_cards(category: SkillCategory, entries: &[SkillEntry]) -> Vec<SkillCard<'_>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, s)| SkillCard {
            index,
            category,
            name: &s.name,
            icon: &s.icon,
            proficiency: s.proficiency,
        })
        .collect()
}

pub fn timeline_items(entries: &[TimelineEntry]) -> Vec<TimelineItem<'_>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| TimelineItem {
            index,
            side: if index % 2 == 0 { Side::Left } else { Side::Right },
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn project(title: &str, tags: &[&str]) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            description: format!("{title} description"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: "*".to_string(),
        }
    }

    #[test]
    fn test_one_card_per_project_in_order() {
        let projects = catalog().unwrap().projects.as_slice();
        let cards = project_cards(projects);

        assert_eq!(cards.len(), projects.len());
        for (card, entry) in cards.iter().zip(projects) {
            assert_eq!(card.title, entry.title);
            assert_eq!(card.description, entry.description);
            assert_eq!(card.tags, entry.tags.as_slice());
        }
    }

    #[test]
    fn test_tags_kept_separate() {
        let projects = vec![project("A", &["Rust", "WASM", "Leptos"])];
        let cards = project_cards(&projects);
        assert_eq!(cards[0].tags.len(), 3);
        assert_eq!(cards[0].tags[1], "WASM");
    }

    #[test]
    fn test_stagger_is_proportional_to_index() {
        let projects = vec![project("A", &[]), project("B", &[]), project("C", &[])];
        let cards = project_cards(&projects);

        assert_eq!(cards[0].entrance(), "slideInUp 0.6s ease-out 0s both");
        assert_eq!(cards[1].entrance(), "slideInUp 0.6s ease-out 0.1s both");
        assert_eq!(cards[2].entrance(), "slideInUp 0.6s ease-out 0.2s both");
    }

    #[test]
    fn test_mapping_is_repeatable() {
        let projects = vec![project("A", &["x"]), project("B", &["y"])];
        assert_eq!(project_cards(&projects), project_cards(&projects));
    }

    #[test]
    fn test_skill_cards() {
        let skills = vec![
            SkillEntry {
                name: "Git".to_string(),
                icon: "devicon-git-plain".to_string(),
                proficiency: 90,
            },
            SkillEntry {
                name: "Docker".to_string(),
                icon: String::new(),
                proficiency: 0,
            },
        ];
        let cards = skill_cards(SkillCategory::Tools, &skills);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].label(), "90%");
        assert_eq!(cards[1].label(), "0%");
        assert_eq!(cards[1].index, 1);
        assert!(cards.iter().all(|c| c.category == SkillCategory::Tools));
    }

    #[test]
    fn test_timeline_alternates_sides() {
        let timeline = &catalog().unwrap().timeline;
        let items = timeline_items(timeline);
        assert_eq!(items.len(), timeline.len());
        assert_eq!(items[0].side, Side::Left);
        assert_eq!(items[1].side, Side::Right);
    }
}
