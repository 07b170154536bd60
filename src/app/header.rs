use chrono::DateTime;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let dir = move || {
        let path = pathname.get();
        match path.trim_end_matches('/').rsplit('/').next() {
            Some(dir) if !dir.is_empty() => dir.to_string(),
            _ => "~".to_string(),
        }
    };

    view! {
        <header class="bg-gray-800 shadow mb-8">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">
                        <span class="text-green-500">"➜"</span>
                        " "
                        <A href="/">
                            <span class="text-teal-400">"ggprompts.dev"</span>
                        </A>
                        " "
                        <span class="text-blue-400">{dir}</span>
                    </h1>
                    <nav class="flex gap-6 text-lg">
                        <A href="/">
                            <span class="hover:text-cyan">"~/home"</span>
                        </A>
                        <A href="/projects">
                            <span class="hover:text-cyan">"~/projects"</span>
                        </A>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-12 py-6 text-center text-sm text-muted">
            "Built with Rust, Leptos and Axum · last build " {built_at()}
        </footer>
    }
}

fn built_at() -> String {
    let build_time = env!("BUILD_TIME");
    DateTime::parse_from_rfc3339(build_time)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| build_time.to_string())
}
