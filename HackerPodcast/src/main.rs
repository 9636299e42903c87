use hpodconfig::get_config;
use hpodserver::{ServerBuilder, logs::LoggingOptions};
use hpodsite::SiteExt;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ========== PHASE 1 : Infrastructure ==========
    let config = get_config();
    let mut server = ServerBuilder::new_configured().build();

    server
        .init_logging(LoggingOptions::from_config(&config))
        .await;
    info!("📁 Configuration loaded from {}", config.directory());

    server
        .add_route("/info", || async {
            serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
            })
        })
        .await;

    // ========== PHASE 2 : Site ==========
    info!("📻 Registering site routes...");
    let site = server.add_site_configured().await?;
    if site.settings.total_episodes == 0 {
        tracing::warn!("⚠️ site.episodes.total is 0, pagination is hidden");
    }

    // ========== PHASE 3 : Démarrage du serveur ==========
    info!("🌐 Starting HTTP server...");
    server.start().await?;

    info!("✅ HackerPodcast is ready!");
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
