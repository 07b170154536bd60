mod data;
#[cfg(not(target_arch = "wasm32"))]
pub mod export;
pub mod stats;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

pub use stats::{derived_stats, portfolio_stats, stats_drift, PortfolioStats, StatsDrift};

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::load);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Github,
    Demo,
    Docs,
    Npm,
}

impl LinkType {
    pub fn label(self) -> &'static str {
        match self {
            LinkType::Github => "GitHub",
            LinkType::Demo => "Demo",
            LinkType::Docs => "Docs",
            LinkType::Npm => "npm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Developer Tools")]
    DeveloperTools,
    #[serde(rename = "TUI Application")]
    TuiApplication,
    #[serde(rename = "Web Application")]
    WebApplication,
    #[serde(rename = "Browser Extension")]
    BrowserExtension,
    #[serde(rename = "Template")]
    Template,
    #[serde(rename = "Game")]
    Game,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::DeveloperTools,
        Category::TuiApplication,
        Category::WebApplication,
        Category::BrowserExtension,
        Category::Template,
        Category::Game,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::DeveloperTools => "Developer Tools",
            Category::TuiApplication => "TUI Application",
            Category::WebApplication => "Web Application",
            Category::BrowserExtension => "Browser Extension",
            Category::Template => "Template",
            Category::Game => "Game",
        }
    }

    /// URL-safe form used in `?category=` query strings.
    pub fn slug(self) -> &'static str {
        match self {
            Category::DeveloperTools => "developer-tools",
            Category::TuiApplication => "tui-application",
            Category::WebApplication => "web-application",
            Category::BrowserExtension => "browser-extension",
            Category::Template => "template",
            Category::Game => "game",
        }
    }
}

impl Category {
    /// Parse a `?category=` value. A blank value means no filter.
    pub fn parse_filter(value: &str) -> Option<Result<Category, CatalogError>> {
        let value = value.trim();
        (!value.is_empty()).then(|| value.parse())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(s) || c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub tagline: String,
    pub tech_stack: Vec<String>,
    pub key_features: Vec<String>,
    pub links: Vec<ProjectLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ProjectStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    // no assets are wired up yet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl ProjectLink {
    /// Display text, falling back to the link type.
    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or(self.link_type.label())
    }
}

impl Project {
    /// First link of the given type, if any.
    pub fn link(&self, link_type: LinkType) -> Option<&ProjectLink> {
        self.links.iter().find(|l| l.link_type == link_type)
    }

    pub fn stars(&self) -> u32 {
        self.stats.as_ref().and_then(|s| s.stars).unwrap_or(0)
    }

    pub fn forks(&self) -> u32 {
        self.stats.as_ref().and_then(|s| s.forks).unwrap_or(0)
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Project with an empty id")]
    EmptyId,
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
    #[error("Project {project} has a link with an empty url")]
    EmptyLinkUrl { project: String },
    #[error("Project {project} has a non-absolute link url: {url}")]
    RelativeLinkUrl { project: String, url: String },
    #[error("Unknown project category: {0}")]
    UnknownCategory(String),
}

/// The static project catalog, split the same way the records are authored.
#[derive(Debug, Clone)]
pub struct Catalog {
    featured: Vec<Project>,
    tui: Vec<Project>,
    web: Vec<Project>,
    browser_extensions: Vec<Project>,
    templates: Vec<Project>,
    all: Vec<Project>,
}

impl Catalog {
    fn load() -> Self {
        Self::from_parts(
            data::featured(),
            data::tui(),
            data::web(),
            data::browser_extensions(),
            data::templates(),
        )
    }

    fn from_parts(
        featured: Vec<Project>,
        tui: Vec<Project>,
        web: Vec<Project>,
        browser_extensions: Vec<Project>,
        templates: Vec<Project>,
    ) -> Self {
        let all = featured
            .iter()
            .chain(&tui)
            .chain(&web)
            .chain(&browser_extensions)
            .chain(&templates)
            .cloned()
            .collect();
        Self {
            featured,
            tui,
            web,
            browser_extensions,
            templates,
            all,
        }
    }

    pub fn featured(&self) -> &[Project] {
        &self.featured
    }

    pub fn tui(&self) -> &[Project] {
        &self.tui
    }

    pub fn web(&self) -> &[Project] {
        &self.web
    }

    pub fn browser_extensions(&self) -> &[Project] {
        &self.browser_extensions
    }

    pub fn templates(&self) -> &[Project] {
        &self.templates
    }

    /// Featured, TUI, web, browser extensions, then templates.
    pub fn all(&self) -> &[Project] {
        &self.all
    }

    pub fn by_id(&self, id: &str) -> Option<&Project> {
        let found = self.all.iter().find(|p| p.id == id);
        if found.is_none() {
            log::debug!("no project with id {id:?}");
        }
        found
    }

    pub fn by_category(&self, category: Category) -> Vec<&Project> {
        self.all.iter().filter(|p| p.category == category).collect()
    }

    /// An explicit sub-collection followed by the featured records of the same
    /// category. Featured records are stored once but belong to both views.
    fn with_featured<'a>(&'a self, group: &'a [Project], category: Category) -> Vec<&'a Project> {
        group
            .iter()
            .chain(self.featured.iter().filter(|p| p.category == category))
            .collect()
    }

    pub fn tui_view(&self) -> Vec<&Project> {
        self.with_featured(&self.tui, Category::TuiApplication)
    }

    pub fn web_view(&self) -> Vec<&Project> {
        self.with_featured(&self.web, Category::WebApplication)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for project in &self.all {
            if project.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
            for link in &project.links {
                if link.url.is_empty() {
                    return Err(CatalogError::EmptyLinkUrl {
                        project: project.id.clone(),
                    });
                }
                if !(link.url.starts_with("https://") || link.url.starts_with("http://")) {
                    return Err(CatalogError::RelativeLinkUrl {
                        project: project.id.clone(),
                        url: link.url.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

pub fn featured_projects() -> &'static [Project] {
    catalog().featured()
}

pub fn tui_projects() -> &'static [Project] {
    catalog().tui()
}

pub fn web_projects() -> &'static [Project] {
    catalog().web()
}

pub fn browser_extensions() -> &'static [Project] {
    catalog().browser_extensions()
}

pub fn templates() -> &'static [Project] {
    catalog().templates()
}

pub fn all_projects() -> &'static [Project] {
    catalog().all()
}

pub fn get_project_by_id(id: &str) -> Option<&'static Project> {
    catalog().by_id(id)
}

pub fn get_projects_by_category(category: Category) -> Vec<&'static Project> {
    catalog().by_category(category)
}

pub fn get_featured_projects() -> &'static [Project] {
    featured_projects()
}

pub fn get_tui_projects() -> Vec<&'static Project> {
    catalog().tui_view()
}

pub fn get_web_projects() -> Vec<&'static Project> {
    catalog().web_view()
}

#[cfg(test)]
pub(crate) fn test_project(id: &str, category: Category) -> Project {
    Project {
        id: id.to_string(),
        name: id.to_string(),
        category,
        description: String::new(),
        tagline: String::new(),
        tech_stack: vec![],
        key_features: vec![],
        links: vec![],
        stats: None,
        highlights: None,
        screenshots: vec![],
        demo_video: None,
        featured: None,
        year: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_and_non_empty() {
        let mut seen = HashSet::new();
        for p in all_projects() {
            assert!(!p.id.is_empty());
            assert!(seen.insert(p.id.as_str()), "duplicate id {}", p.id);
        }
        assert!(catalog().validate().is_ok());
    }

    #[test]
    fn test_all_is_concatenation_in_order() {
        let expected: Vec<&str> = featured_projects()
            .iter()
            .chain(tui_projects())
            .chain(web_projects())
            .chain(browser_extensions())
            .chain(templates())
            .map(|p| p.id.as_str())
            .collect();
        let all: Vec<&str> = all_projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(all, expected);
        assert_eq!(
            all_projects().len(),
            featured_projects().len()
                + tui_projects().len()
                + web_projects().len()
                + browser_extensions().len()
                + templates().len()
        );
    }

    #[test]
    fn test_lookup_by_id() {
        for p in all_projects() {
            let found = get_project_by_id(&p.id).expect("every id should resolve");
            assert_eq!(found.id, p.id);
        }
        assert!(get_project_by_id("does-not-exist").is_none());
        assert!(get_project_by_id("").is_none());

        let tabz = get_project_by_id("tabz").unwrap();
        assert_eq!(tabz.category, Category::WebApplication);
        assert_eq!(tabz.stats.as_ref().and_then(|s| s.stars), Some(1));
    }

    #[test]
    fn test_by_category_is_ordered_subsequence() {
        for category in Category::ALL {
            let expected: Vec<&str> = all_projects()
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id.as_str())
                .collect();
            let got: Vec<&str> = get_projects_by_category(category)
                .iter()
                .map(|p| p.id.as_str())
                .collect();
            assert_eq!(got, expected);
        }

        let games = get_projects_by_category(Category::Game);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, "tui-classics");
        assert_eq!(games[0].name, "TUIClassics");
    }

    #[test]
    fn test_by_category_empty_is_not_an_error() {
        let catalog = Catalog::from_parts(
            vec![test_project("a", Category::TuiApplication)],
            vec![],
            vec![],
            vec![],
            vec![],
        );
        assert!(catalog.by_category(Category::Game).is_empty());
    }

    #[test]
    fn test_featured() {
        assert_eq!(get_featured_projects().len(), 6);
        assert!(get_featured_projects().iter().all(|p| p.is_featured()));
    }

    #[test]
    fn test_tui_and_web_views_include_featured() {
        let tui: Vec<&str> = get_tui_projects().iter().map(|p| p.id.as_str()).collect();
        assert!(tui.contains(&"tfe"));
        assert!(tui.contains(&"tui-launcher"));
        for p in tui_projects() {
            assert!(tui.contains(&p.id.as_str()));
        }
        // explicit list first
        assert_eq!(tui[0], tui_projects()[0].id);
        assert_eq!(
            tui.len(),
            tui_projects().len()
                + featured_projects()
                    .iter()
                    .filter(|p| p.category == Category::TuiApplication)
                    .count()
        );

        let web: Vec<&str> = get_web_projects().iter().map(|p| p.id.as_str()).collect();
        assert!(web.contains(&"tabz"));
        for p in web_projects() {
            assert!(web.contains(&p.id.as_str()));
        }
        for p in featured_projects()
            .iter()
            .filter(|p| p.category == Category::WebApplication)
        {
            assert!(web.contains(&p.id.as_str()));
        }
    }

    #[test]
    fn test_views_do_not_dedupe() {
        let mut featured = test_project("dup", Category::TuiApplication);
        featured.featured = Some(true);
        let catalog = Catalog::from_parts(
            vec![featured],
            vec![test_project("dup", Category::TuiApplication)],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(catalog.tui_view().len(), 2);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId("dup".to_string()))
        );
    }

    #[test]
    fn test_validate_links() {
        let mut p = test_project("linked", Category::Template);
        p.links.push(ProjectLink {
            link_type: LinkType::Github,
            url: String::new(),
            label: None,
        });
        let catalog = Catalog::from_parts(vec![], vec![], vec![], vec![], vec![p.clone()]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyLinkUrl { .. })
        ));

        p.links[0].url = "/relative/path".to_string();
        let catalog = Catalog::from_parts(vec![], vec![], vec![], vec![], vec![p]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::RelativeLinkUrl { .. })
        ));

        let catalog = Catalog::from_parts(
            vec![test_project("", Category::Game)],
            vec![],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(catalog.validate(), Err(CatalogError::EmptyId));
    }

    #[test]
    fn test_category_parsing() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "tui application".parse::<Category>(),
            Ok(Category::TuiApplication)
        );
        assert_eq!(
            "spreadsheet".parse::<Category>(),
            Err(CatalogError::UnknownCategory("spreadsheet".to_string()))
        );
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(Category::parse_filter(""), None);
        assert_eq!(Category::parse_filter("  "), None);
        assert_eq!(Category::parse_filter("game"), Some(Ok(Category::Game)));
        assert_eq!(
            Category::parse_filter("nope"),
            Some(Err(CatalogError::UnknownCategory("nope".to_string())))
        );
    }

    #[test]
    fn test_links_are_absolute() {
        for p in all_projects() {
            for link in &p.links {
                assert!(link.url.starts_with("https://"), "{}: {}", p.id, link.url);
            }
        }
        let tfe = get_project_by_id("tfe").unwrap();
        assert!(tfe.link(LinkType::Github).is_some());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let tabz = get_project_by_id("tabz").unwrap();
        let json = serde_json::to_value(tabz).unwrap();
        assert_eq!(json["category"], "Web Application");
        assert_eq!(json["links"][0]["type"], "github");
        assert!(json.get("techStack").is_some());
        assert!(json.get("screenshots").is_none());
    }
}
