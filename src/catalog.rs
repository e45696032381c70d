use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

const CATALOG_FILE: &str = "catalog.json";

pub static GLOBAL_CATALOG: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::load(CATALOG_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

/// Missing fields in an entry render empty instead of rejecting the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
    pub icon: String,
    pub proficiency: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Mobile,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Mobile,
        SkillCategory::Tools,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Tools => "tools",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Tools => "Tools",
        }
    }

    /// Id of the container the category's cards render into, e.g. `frontendSkills`.
    pub fn container_id(self) -> String {
        format!("{}Skills", self.key())
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub organization: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: BTreeMap<SkillCategory, Vec<SkillEntry>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse catalog: {0}")]
    Parse(String),
    #[error("Proficiency for {skill} is {value}%, expected 0-100")]
    Proficiency { skill: String, value: u8 },
}

impl Catalog {
    /// Loads and checks an embedded catalog document.
    pub fn load(name: &str) -> Result<Self, CatalogError> {
        let file = Content::get(name).ok_or_else(|| CatalogError::Missing(name.to_string()))?;
        let catalog = Self::from_slice(&file.data)?;
        log::debug!(
            "loaded catalog {name}: {} projects, {} skill categories",
            catalog.projects.len(),
            catalog.skills.len()
        );
        Ok(catalog)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog =
            serde_json::from_slice(data).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if let Some(bad) = self
            .skills
            .values()
            .flatten()
            .find(|s| s.proficiency > 100)
        {
            return Err(CatalogError::Proficiency {
                skill: bad.name.clone(),
                value: bad.proficiency,
            });
        }
        Ok(())
    }

    /// Skills of one category; categories absent from the document are empty.
    pub fn skills_in(&self, category: SkillCategory) -> &[SkillEntry] {
        self.skills
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

pub fn catalog() -> Result<&'static Catalog, CatalogError> {
    GLOBAL_CATALOG.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = catalog().expect("embedded catalog should parse");

        assert_eq!(catalog.projects.len(), 6);
        assert_eq!(catalog.projects[0].title, "E-Commerce Platform");
        assert_eq!(
            catalog.projects[0].tags,
            vec!["React", "Flask", "PostgreSQL", "Stripe"]
        );
        for category in SkillCategory::ALL {
            assert!(
                !catalog.skills_in(category).is_empty(),
                "{category} should have skills"
            );
        }
        assert!(!catalog.timeline.is_empty());
        assert!(!catalog.profile.email.is_empty());
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            Catalog::load("nope.json"),
            Err(CatalogError::Missing("nope.json".to_string()))
        );
    }

    #[test]
    fn test_proficiency_over_100_rejected() {
        let doc = br#"{
            "profile": {"name": "A", "role": "B", "email": "a@b.com"},
            "projects": [],
            "skills": {"tools": [{"name": "Git", "proficiency": 101}]}
        }"#;
        assert_eq!(
            Catalog::from_slice(doc),
            Err(CatalogError::Proficiency {
                skill: "Git".to_string(),
                value: 101
            })
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let doc = br#"{
            "profile": {"name": "A", "role": "B", "email": "a@b.com"},
            "projects": [{"title": "Bare"}, {"description": "no title here"}],
            "skills": {"tools": [{"name": "Git"}, {"proficiency": 40}]},
            "timeline": [{"period": "2020"}]
        }"#;
        let catalog = Catalog::from_slice(doc).unwrap();

        let bare = &catalog.projects[0];
        assert_eq!(bare.title, "Bare");
        assert!(bare.description.is_empty());
        assert!(bare.tags.is_empty());

        let untitled = &catalog.projects[1];
        assert!(untitled.title.is_empty());
        assert_eq!(untitled.description, "no title here");

        let tools = catalog.skills_in(SkillCategory::Tools);
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "Git");
        assert_eq!(tools[0].proficiency, 0);
        assert!(tools[1].name.is_empty());
        assert_eq!(tools[1].proficiency, 40);

        assert_eq!(catalog.timeline[0].period, "2020");
        assert!(catalog.timeline[0].organization.is_empty());
        assert!(catalog.skills_in(SkillCategory::Mobile).is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let err = Catalog::from_slice(b"{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_category_container_ids() {
        let ids: Vec<String> = SkillCategory::ALL
            .iter()
            .map(|c| c.container_id())
            .collect();
        assert_eq!(
            ids,
            vec!["frontendSkills", "backendSkills", "mobileSkills", "toolsSkills"]
        );
    }
}
