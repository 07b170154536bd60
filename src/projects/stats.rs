//! Portfolio-wide summary numbers.
//!
//! Star/fork totals and the technology lists shown on the site are curated by hand and can
//! drift from the per-project data. [`portfolio_stats`] is the curated summary the pages
//! display, [`derived_stats`] recomputes everything from the catalog, and [`stats_drift`]
//! reports where the two disagree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::{catalog, Catalog, Category};

const CURATED_TOTAL_STARS: u32 = 40;
const CURATED_TOTAL_FORKS: u32 = 6;

const CURATED_LANGUAGES: &[&str] = &["Go", "Rust", "TypeScript", "JavaScript", "Python"];
const CURATED_TUI_FRAMEWORKS: &[&str] = &["Bubble Tea", "Lip Gloss", "Ratatui"];
const CURATED_WEB_FRAMEWORKS: &[&str] = &["React", "Next.js", "Leptos", "Axum", "Tailwind CSS"];
const CURATED_TERMINAL_TOOLS: &[&str] = &["tmux", "xterm.js", "Chroma"];

static PORTFOLIO_STATS: LazyLock<PortfolioStats> =
    LazyLock::new(|| PortfolioStats::curated(catalog()));
static DERIVED_STATS: LazyLock<PortfolioStats> =
    LazyLock::new(|| PortfolioStats::derived(catalog()));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technologies {
    pub languages: Vec<String>,
    pub tui_frameworks: Vec<String>,
    pub web_frameworks: Vec<String>,
    pub terminal_tools: Vec<String>,
}

impl Technologies {
    fn curated() -> Self {
        let to_vec =
            |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Self {
            languages: to_vec(CURATED_LANGUAGES),
            tui_frameworks: to_vec(CURATED_TUI_FRAMEWORKS),
            web_frameworks: to_vec(CURATED_WEB_FRAMEWORKS),
            terminal_tools: to_vec(CURATED_TERMINAL_TOOLS),
        }
    }

    fn bucket_mut(&mut self, bucket: TechBucket) -> &mut Vec<String> {
        match bucket {
            TechBucket::Language => &mut self.languages,
            TechBucket::TuiFramework => &mut self.tui_frameworks,
            TechBucket::WebFramework => &mut self.web_frameworks,
            TechBucket::TerminalTool => &mut self.terminal_tools,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &String> {
        self.languages
            .iter()
            .chain(&self.tui_frameworks)
            .chain(&self.web_frameworks)
            .chain(&self.terminal_tools)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechBucket {
    Language,
    TuiFramework,
    WebFramework,
    TerminalTool,
}

impl TechBucket {
    /// Bucket for a `tech_stack` entry, `None` for infrastructure and APIs that
    /// don't belong in any list.
    pub fn classify(tech: &str) -> Option<TechBucket> {
        match tech {
            "Go" | "Rust" | "TypeScript" | "JavaScript" | "Python" => Some(TechBucket::Language),
            "Bubble Tea" | "Lip Gloss" | "Ratatui" => Some(TechBucket::TuiFramework),
            "React" | "Next.js" | "Leptos" | "Axum" | "Vite" | "Tailwind CSS" => {
                Some(TechBucket::WebFramework)
            }
            "tmux" | "xterm.js" | "Chroma" => Some(TechBucket::TerminalTool),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_projects: usize,
    pub total_stars: u32,
    pub total_forks: u32,
    pub categories: BTreeMap<Category, usize>,
    pub technologies: Technologies,
}

impl PortfolioStats {
    fn category_counts(catalog: &Catalog) -> BTreeMap<Category, usize> {
        Category::ALL
            .into_iter()
            .map(|c| (c, catalog.by_category(c).len()))
            .collect()
    }

    /// Counts from the catalog, totals and technologies from the curated constants.
    pub fn curated(catalog: &Catalog) -> Self {
        Self {
            total_projects: catalog.all().len(),
            total_stars: CURATED_TOTAL_STARS,
            total_forks: CURATED_TOTAL_FORKS,
            categories: Self::category_counts(catalog),
            technologies: Technologies::curated(),
        }
    }

    pub fn derived(catalog: &Catalog) -> Self {
        let mut technologies = Technologies::default();
        for tech in catalog.all().iter().flat_map(|p| &p.tech_stack) {
            if let Some(bucket) = TechBucket::classify(tech) {
                let list = technologies.bucket_mut(bucket);
                if !list.contains(tech) {
                    list.push(tech.clone());
                }
            }
        }
        Self {
            total_projects: catalog.all().len(),
            total_stars: catalog.all().iter().map(|p| p.stars()).sum(),
            total_forks: catalog.all().iter().map(|p| p.forks()).sum(),
            categories: Self::category_counts(catalog),
            technologies,
        }
    }
}

/// Differences between the curated and derived summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsDrift {
    pub stars: Option<(u32, u32)>,
    pub forks: Option<(u32, u32)>,
    /// Technologies used by some project but missing from the curated lists.
    pub uncurated_technologies: Vec<String>,
    /// Curated technologies no project lists.
    pub unused_technologies: Vec<String>,
}

impl StatsDrift {
    pub fn between(curated: &PortfolioStats, derived: &PortfolioStats) -> Self {
        let pair = |c: u32, d: u32| (c != d).then_some((c, d));
        let missing = |from: &Technologies, of: &Technologies| -> Vec<String> {
            of.iter()
                .filter(|t| !from.iter().any(|f| f == *t))
                .cloned()
                .collect()
        };
        Self {
            stars: pair(curated.total_stars, derived.total_stars),
            forks: pair(curated.total_forks, derived.total_forks),
            uncurated_technologies: missing(&curated.technologies, &derived.technologies),
            unused_technologies: missing(&derived.technologies, &curated.technologies),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_none()
            && self.forks.is_none()
            && self.uncurated_technologies.is_empty()
            && self.unused_technologies.is_empty()
    }
}

pub fn portfolio_stats() -> &'static PortfolioStats {
    &PORTFOLIO_STATS
}

pub fn derived_stats() -> &'static PortfolioStats {
    &DERIVED_STATS
}

pub fn stats_drift() -> StatsDrift {
    StatsDrift::between(portfolio_stats(), derived_stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::{all_projects, get_projects_by_category, test_project};

    #[test]
    fn test_totals_match_catalog() {
        let stats = portfolio_stats();
        assert_eq!(stats.total_projects, all_projects().len());
        assert_eq!(stats.categories.len(), Category::ALL.len());
        for category in Category::ALL {
            assert_eq!(
                stats.categories[&category],
                get_projects_by_category(category).len(),
                "{category}"
            );
        }
        assert_eq!(
            stats.categories.values().sum::<usize>(),
            stats.total_projects
        );
    }

    #[test]
    fn test_derived_sums_project_stats() {
        let derived = derived_stats();
        let stars: u32 = all_projects()
            .iter()
            .filter_map(|p| p.stats.as_ref()?.stars)
            .sum();
        let forks: u32 = all_projects()
            .iter()
            .filter_map(|p| p.stats.as_ref()?.forks)
            .sum();
        assert_eq!(derived.total_stars, stars);
        assert_eq!(derived.total_forks, forks);
        assert_eq!(derived.categories, portfolio_stats().categories);
    }

    #[test]
    fn test_derived_technologies_dedupe_in_first_seen_order() {
        let mut a = test_project("a", Category::TuiApplication);
        a.tech_stack = vec!["Rust".into(), "Ratatui".into(), "Docker".into()];
        let mut b = test_project("b", Category::WebApplication);
        b.tech_stack = vec!["Go".into(), "Rust".into(), "tmux".into()];
        let catalog = Catalog::from_parts(vec![a], vec![b], vec![], vec![], vec![]);

        let derived = PortfolioStats::derived(&catalog);
        assert_eq!(derived.technologies.languages, vec!["Rust", "Go"]);
        assert_eq!(derived.technologies.tui_frameworks, vec!["Ratatui"]);
        assert!(derived.technologies.web_frameworks.is_empty());
        assert_eq!(derived.technologies.terminal_tools, vec!["tmux"]);
        assert_eq!(derived.total_stars, 0);
        assert_eq!(derived.categories[&Category::Game], 0);
    }

    #[test]
    fn test_drift() {
        let curated = portfolio_stats();
        assert!(StatsDrift::between(curated, curated).is_empty());

        let drift = stats_drift();
        // Python is curated but no listed project uses it
        assert!(drift.unused_technologies.contains(&"Python".to_string()));
        // Vite shows up in projects but not in the curated web list
        assert!(drift.uncurated_technologies.contains(&"Vite".to_string()));
        let stars: u32 = all_projects().iter().map(|p| p.stars()).sum();
        assert_eq!(stars, 38);
        assert_eq!(drift.stars, Some((CURATED_TOTAL_STARS, 38)));
        assert_eq!(drift.forks, None);
        assert!(!drift.is_empty());
    }

    #[test]
    fn test_classify() {
        assert_eq!(TechBucket::classify("Go"), Some(TechBucket::Language));
        assert_eq!(TechBucket::classify("Leptos"), Some(TechBucket::WebFramework));
        assert_eq!(TechBucket::classify("Docker"), None);
    }
}
