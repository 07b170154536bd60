use portfolio_site::projects::{export::write_catalog_json, stats_drift};

const EXPORT_PATH: &str = "public/projects.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let drift = stats_drift();
    if !drift.is_empty() {
        tracing::warn!(?drift, "curated portfolio stats differ from project data");
    }

    match write_catalog_json(EXPORT_PATH) {
        Ok(count) => tracing::info!(count, path = EXPORT_PATH, "catalog exported"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
