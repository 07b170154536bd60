use leptos::prelude::*;
use leptos_meta::Title;

use super::projects::ProjectCard;
use crate::projects::{get_featured_projects, portfolio_stats};

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = portfolio_stats();
    let tech = &stats.technologies;

    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto page-content">
            <h1 class="text-2xl my-8 text-center font-bold section-content">
                "Hi, I build tools for the terminal and the web"
            </h1>
            <section class="max-w-2xl mx-auto section-content">
                <p class="text-base mb-4 leading-relaxed">
                    "Most of what I make starts as a fix for my own workflow: file managers, tmux dashboards, launchers, and the occasional game for when the build is slow. "
                    "Everything here is open source."
                </p>
                <p class="text-base mb-2">
                    "Browse everything: " <code>"cd /projects"</code>
                </p>
            </section>
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4 my-8 section-content">
                <StatBlock label="Projects" value=stats.total_projects />
                <StatBlock label="GitHub stars" value={stats.total_stars as usize} />
                <StatBlock label="Forks" value={stats.total_forks as usize} />
                <StatBlock label="Languages" value=tech.languages.len() />
            </section>
            <section class="section-content">
                <h2 class="text-xl font-bold my-8">"Featured Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {get_featured_projects()
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </section>
            <section class="flex flex-col lg:flex-row gap-8 lg:gap-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"By Category"</h2>
                    <ul class="space-y-1">
                        {stats
                            .categories
                            .iter()
                            .filter(|(_, count)| **count > 0)
                            .map(|(category, count)| {
                                let href = format!("/projects?category={}", category.slug());
                                view! {
                                    <li>
                                        <a href=href class="text-cyan hover:text-brightCyan">
                                            {category.label()}
                                        </a>
                                        <span class="text-muted">" (" {*count} ")"</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"Toolbox"</h2>
                    <TechRow label="Languages" items=tech.languages.join(", ") />
                    <TechRow label="TUI" items=tech.tui_frameworks.join(", ") />
                    <TechRow label="Web" items=tech.web_frameworks.join(", ") />
                    <TechRow label="Terminal" items=tech.terminal_tools.join(", ") />
                </div>
            </section>
        </div>
    }
}

#[component]
fn StatBlock(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 p-4 rounded-md border border-muted/30 text-center">
            <div class="text-3xl font-bold text-cyan">{value}</div>
            <div class="text-sm text-muted">{label}</div>
        </div>
    }
}

#[component]
fn TechRow(label: &'static str, items: String) -> impl IntoView {
    view! {
        <p class="text-base mb-2">
            <span class="font-medium text-green">{label} ": "</span>
            {items}
        </p>
    }
}
