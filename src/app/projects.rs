use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_params_map, use_query_map};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::not_found::NotFound;
use crate::projects::{all_projects, get_project_by_id, get_projects_by_category, Category, Project};

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const RECENT_KEY: &str = "recent_projects";
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const RECENT_LIMIT: usize = 5;

/// Move `id` to the front of the recently viewed list, keeping at most `RECENT_LIMIT`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn remember_recent(recent: &mut Vec<String>, id: &str) {
    recent.retain(|r| r != id);
    recent.insert(0, id.to_string());
    recent.truncate(RECENT_LIMIT);
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1 rounded-md border border-cyan bg-cyan/20 text-cyan"
    } else {
        "px-3 py-1 rounded-md border border-muted/30 hover:border-cyan transition-colors duration-200"
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let stars = project.stars();

    view! {
        <a
            href=href
            class="block bg-brightBlack/30 p-4 rounded-md border border-muted/30 hover:border-cyan transition-colors duration-200"
        >
            <div class="flex items-start justify-between gap-2">
                <h3 class="font-bold text-lg">{project.name.as_str()}</h3>
                <span class="shrink-0 text-xs text-muted">{project.category.label()}</span>
            </div>
            <p class="text-sm text-cyan mb-2">{project.tagline.as_str()}</p>
            <p class="text-sm mb-2">{project.description.as_str()}</p>
            <p class="text-xs text-muted">{project.tech_stack.join(" · ")}</p>
            {(stars > 0).then(|| view! { <p class="text-xs text-yellow mt-2">"★ " {stars}</p> })}
        </a>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let query = use_query_map();
    // None: no or blank filter, Some(Err): filter we don't understand
    let selected = Memo::new(move |_| {
        query.with(|q| q.get("category").and_then(|c| Category::parse_filter(&c)))
    });

    let projects = move || match selected.get() {
        Some(Ok(category)) => get_projects_by_category(category),
        _ => all_projects().iter().collect::<Vec<_>>(),
    };

    view! {
        <Title text="Projects" />
        <div class="w-full max-w-6xl mx-auto page-content">
            <h1 class="font-bold text-3xl lg:text-4xl mb-8 text-center section-content">
                "Projects"
            </h1>
            <nav class="flex flex-wrap gap-2 mb-6 section-content">
                <a href="/projects" class=move || tab_class(selected.with(Option::is_none))>
                    "All"
                </a>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let href = format!("/projects?category={}", category.slug());
                        view! {
                            <a
                                href=href
                                class=move || tab_class(selected.get() == Some(Ok(category)))
                            >
                                {category.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || {
                selected
                    .get()
                    .and_then(Result::err)
                    .map(|e| {
                        view! {
                            <div class="mb-6 p-3 rounded-md border border-red/50 text-red">
                                {e.to_string()} ". Showing every project."
                            </div>
                        }
                    })
            }}
            <RecentlyViewed />
            <div class="bg-black/40 border border-muted/30 p-3 mb-6 rounded-md font-mono text-sm">
                <span class="text-green">$</span>
                <span class="text-foreground ml-2">
                    {move || match selected.get() {
                        Some(Ok(category)) => format!("ls /projects | grep '{}'", category.label()),
                        _ => "ls /projects".to_string(),
                    }}
                </span>
                <span class="text-muted ml-2">
                    {move || format!("# {} result(s)", projects().len())}
                </span>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {move || {
                    projects()
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn RecentlyViewed() -> impl IntoView {
    // filled in after hydration so the server render matches the first client render
    let (recent, set_recent) = signal(Vec::<String>::new());

    #[cfg(feature = "hydrate")]
    {
        let (stored, _, _) = use_local_storage::<Vec<String>, JsonSerdeWasmCodec>(RECENT_KEY);
        Effect::new(move |_| set_recent(stored.get()));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_recent;

    view! {
        <Show when=move || recent.with(|r| !r.is_empty())>
            <div class="mb-6 text-sm">
                <span class="text-muted">"Recently viewed: "</span>
                {move || {
                    recent
                        .get()
                        .iter()
                        .filter_map(|id| get_project_by_id(id))
                        .map(|project| {
                            let href = format!("/projects/{}", project.id);
                            view! {
                                <a href=href class="mr-3 text-cyan hover:text-brightCyan">
                                    {project.name.as_str()}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let project = Memo::new(move |_| {
        params
            .with(|p| p.get("id"))
            .and_then(|id| get_project_by_id(&id))
    });

    #[cfg(feature = "hydrate")]
    {
        let (_, set_stored, _) = use_local_storage::<Vec<String>, JsonSerdeWasmCodec>(RECENT_KEY);
        Effect::new(move |_| {
            if let Some(project) = project.get() {
                set_stored.update(|recent| remember_recent(recent, &project.id));
            }
        });
    }

    move || match project.get() {
        Some(project) => view! { <ProjectView project /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn ProjectView(project: &'static Project) -> impl IntoView {
    let meta = [
        Some(project.category.label().to_string()),
        project.year.map(|y| y.to_string()),
        project.is_featured().then(|| "Featured".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    let stats = project.stats.as_ref().map(|s| {
        let parts = [
            s.stars.map(|n| format!("★ {n} stars")),
            s.forks.map(|n| format!("{n} forks")),
            s.contributors.map(|n| format!("{n} contributors")),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
        view! { <p class="text-sm text-yellow mb-4">{parts}</p> }
    });

    view! {
        <Title text=project.name.clone() />
        <article class="w-full max-w-4xl mx-auto page-content">
            <a href="/projects" class="text-sm text-muted hover:text-cyan">"← cd .."</a>
            <h1 class="font-bold text-3xl lg:text-4xl mt-4 mb-2">{project.name.as_str()}</h1>
            <p class="text-sm text-muted mb-2">{meta}</p>
            <p class="text-lg text-cyan mb-4">{project.tagline.as_str()}</p>
            {stats}
            <p class="text-base mb-6 leading-relaxed">{project.description.as_str()}</p>

            <h2 class="text-xl font-bold mb-2">"Key Features"</h2>
            <ul class="list-disc list-inside mb-6 space-y-1">
                {project
                    .key_features
                    .iter()
                    .map(|f| view! { <li>{f.as_str()}</li> })
                    .collect_view()}
            </ul>

            {project
                .highlights
                .as_ref()
                .map(|highlights| {
                    view! {
                        <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple mb-6">
                            <p class="text-sm text-purple mb-2 font-medium">"Highlights"</p>
                            <ul class="text-sm space-y-1">
                                {highlights
                                    .iter()
                                    .map(|h| view! { <li>{h.as_str()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })}

            <h2 class="text-xl font-bold mb-2">"Tech Stack"</h2>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .tech_stack
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-2 py-1 text-sm rounded-md bg-cyan/20 text-cyan">
                                {t.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || !project.links.is_empty()>
                <h2 class="text-xl font-bold mb-2">"Links"</h2>
                <ul class="space-y-1 mb-6">
                    {project
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <span class="text-muted">{link.link_type.label()} ": "</span>
                                    <a
                                        href=link.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-cyan hover:text-brightCyan"
                                    >
                                        {link.text()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remember_recent() {
        let mut recent = vec![];
        remember_recent(&mut recent, "tfe");
        remember_recent(&mut recent, "tabz");
        assert_eq!(recent, vec!["tabz", "tfe"]);

        // revisiting moves to the front without duplicating
        remember_recent(&mut recent, "tfe");
        assert_eq!(recent, vec!["tfe", "tabz"]);

        for id in ["a", "b", "c", "d", "e"] {
            remember_recent(&mut recent, id);
        }
        assert_eq!(recent.len(), RECENT_LIMIT);
        assert_eq!(recent[0], "e");
        assert!(!recent.contains(&"tabz".to_string()));
    }

    #[test]
    fn test_tab_class() {
        assert!(tab_class(true).contains("text-cyan"));
        assert_ne!(tab_class(true), tab_class(false));
    }
}
