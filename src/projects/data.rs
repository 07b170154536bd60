use super::{Category, LinkType, Project, ProjectLink, ProjectStats};

const GITHUB: &str = "https://github.com/GGPrompts";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn github(repo: &str) -> ProjectLink {
    ProjectLink {
        link_type: LinkType::Github,
        url: format!("{GITHUB}/{repo}"),
        label: None,
    }
}

fn link(link_type: LinkType, url: &str, label: &str) -> ProjectLink {
    ProjectLink {
        link_type,
        url: url.to_string(),
        label: Some(label.to_string()),
    }
}

fn stats(stars: u32, forks: u32, contributors: Option<u32>) -> Option<ProjectStats> {
    Some(ProjectStats {
        stars: Some(stars),
        forks: Some(forks),
        contributors,
    })
}

/// Bare record with required fields; callers fill in the rest.
fn project(id: &str, name: &str, category: Category, tagline: &str, description: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        tagline: tagline.to_string(),
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

pub(super) fn featured() -> Vec<Project> {
    vec![
        Project {
            tech_stack: strings(&["Go", "Bubble Tea", "Lip Gloss", "Chroma"]),
            key_features: strings(&[
                "Dual-pane and tree views with keyboard and mouse navigation",
                "Syntax highlighted previews with fuzzy search",
                "Context menus, favorites and trash",
            ]),
            links: vec![github("TFE")],
            stats: stats(12, 2, Some(1)),
            highlights: Some(strings(&[
                "Single static binary",
                "Works over SSH and in Termux",
            ])),
            featured: Some(true),
            year: Some(2025),
            ..project(
                "tfe",
                "TFE",
                Category::TuiApplication,
                "Terminal File Explorer",
                "A fast, keyboard-first file manager for the terminal with previews, fuzzy finding and an optional mouse-driven mode.",
            )
        },
        Project {
            tech_stack: strings(&["TypeScript", "React", "Vite", "Tailwind CSS", "xterm.js"]),
            key_features: strings(&[
                "Browser tabs backed by persistent tmux sessions",
                "Drag and drop tab reordering",
                "Per-tab themes and fonts",
            ]),
            links: vec![
                github("Tabz"),
                link(LinkType::Demo, "https://tabz.ggprompts.dev", "Live demo"),
            ],
            stats: stats(1, 0, Some(1)),
            featured: Some(true),
            year: Some(2025),
            ..project(
                "tabz",
                "Tabz",
                Category::WebApplication,
                "Tabbed terminals in the browser",
                "A web terminal manager that keeps every tab attached to a tmux session so work survives reloads and disconnects.",
            )
        },
        Project {
            tech_stack: strings(&["Go", "Bubble Tea", "Lip Gloss"]),
            key_features: strings(&[
                "Snake, Tetris, Minesweeper and 2048",
                "High score table stored locally",
                "Adaptive layout for small terminals",
            ]),
            links: vec![github("TUIClassics")],
            stats: stats(4, 1, None),
            featured: Some(true),
            year: Some(2025),
            ..project(
                "tui-classics",
                "TUIClassics",
                Category::Game,
                "Arcade classics in your terminal",
                "A collection of classic arcade and puzzle games rebuilt as terminal applications.",
            )
        },
        Project {
            tech_stack: strings(&["Go", "Bubble Tea", "tmux"]),
            key_features: strings(&[
                "Workspace templates with pane layouts",
                "Live session and pane previews",
                "One-key attach, rename and kill",
            ]),
            links: vec![github("tmuxplexer")],
            stats: stats(6, 1, None),
            featured: Some(true),
            year: Some(2025),
            ..project(
                "tmuxplexer",
                "Tmuxplexer",
                Category::TuiApplication,
                "A dashboard for tmux sessions",
                "Manage tmux sessions, windows and layouts from a single TUI dashboard.",
            )
        },
        Project {
            tech_stack: strings(&["TypeScript", "Node.js", "Docker"]),
            key_features: strings(&[
                "Scaffolds devcontainer configs per language",
                "Shared dotfile injection",
                "Works with VS Code and the devcontainer CLI",
            ]),
            links: vec![
                github("devcontainer-kit"),
                link(
                    LinkType::Npm,
                    "https://www.npmjs.com/package/devcontainer-kit",
                    "npm",
                ),
            ],
            stats: stats(3, 0, None),
            featured: Some(true),
            year: Some(2024),
            ..project(
                "devcontainer-kit",
                "Devcontainer Kit",
                Category::DeveloperTools,
                "Reproducible dev environments in one command",
                "A CLI that generates and maintains devcontainer setups for polyglot repositories.",
            )
        },
        Project {
            tech_stack: strings(&["TypeScript", "Chrome Extensions API", "React"]),
            key_features: strings(&[
                "Save and tag prompts from any page",
                "Template variables filled at paste time",
                "Sync through browser storage",
            ]),
            links: vec![github("prompt-stash")],
            stats: stats(2, 0, None),
            featured: Some(true),
            year: Some(2025),
            ..project(
                "prompt-stash",
                "Prompt Stash",
                Category::BrowserExtension,
                "Your prompt library, one click away",
                "A browser extension for collecting, organizing and reusing text prompts and snippets.",
            )
        },
    ]
}

pub(super) fn tui() -> Vec<Project> {
    vec![
        Project {
            tech_stack: strings(&["Go", "Bubble Tea", "Lip Gloss"]),
            key_features: strings(&[
                "Categorized launcher for CLI tools",
                "Spawns tools in new tmux panes",
                "YAML configuration",
            ]),
            links: vec![github("tui-launcher")],
            stats: stats(2, 0, None),
            year: Some(2025),
            ..project(
                "tui-launcher",
                "TUI Launcher",
                Category::TuiApplication,
                "Start any terminal tool from one menu",
                "A menu-driven launcher that organizes terminal tools into categories and opens them in tmux panes.",
            )
        },
        Project {
            tech_stack: strings(&["Rust", "Ratatui", "git2"]),
            key_features: strings(&[
                "Status of many repositories at a glance",
                "Ahead and behind counts per branch",
                "Bulk fetch",
            ]),
            links: vec![github("git-glance")],
            stats: stats(1, 0, None),
            year: Some(2024),
            ..project(
                "git-glance",
                "Git Glance",
                Category::TuiApplication,
                "Every repo, one screen",
                "A terminal dashboard that scans a directory tree for git repositories and summarizes their state.",
            )
        },
        Project {
            tech_stack: strings(&["Go", "Bubble Tea"]),
            key_features: strings(&[
                "Pomodoro cycles with long breaks",
                "Desktop notifications",
                "Daily focus log",
            ]),
            links: vec![github("pomo-tui")],
            year: Some(2024),
            ..project(
                "pomo-tui",
                "Pomo TUI",
                Category::TuiApplication,
                "A focus timer that stays out of the way",
                "A minimal Pomodoro timer for the terminal.",
            )
        },
        Project {
            tech_stack: strings(&["Rust", "Ratatui", "Tokio"]),
            key_features: strings(&[
                "Follow many log files at once",
                "Regex highlighting rules",
                "Pause and scroll back",
            ]),
            links: vec![github("logtail-tui")],
            stats: stats(0, 0, None),
            year: Some(2024),
            ..project(
                "logtail-tui",
                "Logtail TUI",
                Category::TuiApplication,
                "Multiplexed log tailing",
                "Tail several log files side by side with highlighting and filtering.",
            )
        },
    ]
}

pub(super) fn web() -> Vec<Project> {
    vec![
        Project {
            tech_stack: strings(&["Rust", "Leptos", "Axum", "Tailwind CSS"]),
            key_features: strings(&[
                "Server rendered with client hydration",
                "Project catalog with category filters",
                "Static JSON export",
            ]),
            links: vec![
                github("portfolio-site"),
                link(LinkType::Demo, "https://ggprompts.dev", "Website"),
            ],
            stats: stats(0, 0, None),
            year: Some(2025),
            ..project(
                "portfolio-site",
                "Portfolio Site",
                Category::WebApplication,
                "This website",
                "The portfolio you are looking at: a server-rendered Rust web app.",
            )
        },
        Project {
            tech_stack: strings(&["TypeScript", "Next.js", "Tailwind CSS", "SQLite"]),
            key_features: strings(&[
                "Markdown notes with backlinks",
                "Full text search",
                "Offline first",
            ]),
            links: vec![github("markdown-vault")],
            stats: stats(1, 0, None),
            year: Some(2024),
            ..project(
                "markdown-vault",
                "Markdown Vault",
                Category::WebApplication,
                "Linked notes in plain markdown",
                "A personal knowledge base that stores notes as markdown files and links them together.",
            )
        },
        Project {
            tech_stack: strings(&["TypeScript", "React", "Vite"]),
            key_features: strings(&[
                "Syntax highlighted snippets",
                "Tags and collections",
                "Share links",
            ]),
            links: vec![github("snippet-hub")],
            year: Some(2023),
            ..project(
                "snippet-hub",
                "Snippet Hub",
                Category::WebApplication,
                "Code snippets worth keeping",
                "A small web app for storing and sharing code snippets.",
            )
        },
    ]
}

pub(super) fn browser_extensions() -> Vec<Project> {
    vec![
        Project {
            tech_stack: strings(&["TypeScript", "Chrome Extensions API"]),
            key_features: strings(&[
                "Group tabs by domain",
                "Suspend idle tabs",
                "Session snapshots",
            ]),
            links: vec![github("tab-harbor")],
            stats: stats(1, 0, None),
            year: Some(2024),
            ..project(
                "tab-harbor",
                "Tab Harbor",
                Category::BrowserExtension,
                "Calm for tab hoarders",
                "A browser extension that groups, suspends and snapshots tabs.",
            )
        },
        Project {
            tech_stack: strings(&["JavaScript", "Chrome Extensions API"]),
            key_features: strings(&[
                "Distraction free reading view",
                "Adjustable typography",
            ]),
            links: vec![github("readable-mode")],
            year: Some(2023),
            ..project(
                "readable-mode",
                "Readable Mode",
                Category::BrowserExtension,
                "Any page, easier to read",
                "Strips clutter from articles and applies comfortable typography.",
            )
        },
    ]
}

pub(super) fn templates() -> Vec<Project> {
    vec![
        Project {
            tech_stack: strings(&["Go", "Bubble Tea", "Lip Gloss"]),
            key_features: strings(&[
                "Model, update and view split into packages",
                "Keymap and theme configuration",
                "Release workflow included",
            ]),
            links: vec![
                github("tui-starter"),
                link(
                    LinkType::Docs,
                    "https://github.com/GGPrompts/tui-starter#readme",
                    "Docs",
                ),
            ],
            stats: stats(5, 2, None),
            year: Some(2025),
            ..project(
                "tui-starter",
                "TUI Starter",
                Category::Template,
                "Start a Bubble Tea app in minutes",
                "An opinionated starter template for Go terminal applications.",
            )
        },
        Project {
            tech_stack: strings(&["Rust", "Leptos", "Axum", "Tailwind CSS"]),
            key_features: strings(&[
                "SSR with hydration wired up",
                "Tailwind build integration",
                "Dockerfile for deployment",
            ]),
            links: vec![github("leptos-axum-starter")],
            stats: stats(0, 0, None),
            year: Some(2025),
            ..project(
                "leptos-axum-starter",
                "Leptos Axum Starter",
                Category::Template,
                "Full-stack Rust, ready to go",
                "A starter template for server-rendered Leptos apps on Axum.",
            )
        },
        Project {
            tech_stack: strings(&["TypeScript", "Next.js", "Tailwind CSS"]),
            key_features: strings(&[
                "Blog, case study and pricing page layouts",
                "Dark mode",
            ]),
            links: vec![github("nextjs-portfolio-template")],
            year: Some(2024),
            ..project(
                "nextjs-portfolio-template",
                "Next.js Portfolio Template",
                Category::Template,
                "A portfolio starter with every page you need",
                "A set of page templates for personal portfolio websites.",
            )
        },
    ]
}
