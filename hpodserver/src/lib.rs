//! # hpodserver - Serveur web haut niveau basé sur Axum
//!
//! Cette crate fournit le socle HTTP de Hacker Podcast : un [`Server`] auquel
//! les autres crates ajoutent leurs routes via des traits d'extension.
//!
//! ## Fonctionnalités
//!
//! - 🚀 **API de haut niveau** : routes JSON, handlers avec état, sous-routeurs
//! - 📡 **Server-Sent Events (SSE)** : logs en temps réel sur `/log-sse`
//! - 📚 **Documentation OpenAPI** : Swagger UI pour le réglage du niveau de log
//! - ⚡ **Arrêt gracieux** : Ctrl+C
//!
//! ## Architecture
//!
//! - [`server`] : serveur principal et builder
//! - [`logs`] : buffer de logs, layer tracing et routes associées
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use hpodserver::{ServerBuilder, logs::LoggingOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut server = ServerBuilder::new("MyServer", "localhost", 8080).build();
//!     server.init_logging(LoggingOptions::default()).await;
//!
//!     server.add_route("/api/status", || async {
//!         serde_json::json!({"status": "ok"})
//!     }).await;
//!
//!     server.start().await?;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

pub mod logs;
pub mod server;

pub use logs::{BufferLayer, LogState, LoggingOptions, log_dump, log_sse};
pub use server::{Server, ServerBuilder, ServerInfo};
