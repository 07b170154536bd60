use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <div class="text-center my-16">
            <h1 class="font-bold text-3xl mb-4">
                <span class="text-red-500">"404"</span>
                " - no such file or directory"
            </h1>
            <p class="mb-6 text-muted">"There's nothing here. Maybe it was never built."</p>
            <a href="/projects" class="text-cyan hover:text-brightCyan">
                "cd /projects"
            </a>
        </div>
    }
}
