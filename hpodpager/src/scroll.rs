//! Remise à zéro différée du défilement
//!
//! Après une navigation, on laisse le rendu se stabiliser puis on remonte en
//! haut du conteneur principal et de la fenêtre. C'est un confort visuel :
//! la tâche n'est jamais attendue ni annulée, et ses échecs sont ignorés.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::trace;

/// Délai par défaut avant de remonter en haut de page
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Surface de défilement adressable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Conteneur principal, retrouvé par son identifiant
    MainContainer(String),
    /// La fenêtre elle-même
    Window,
}

#[derive(Error, Debug)]
pub enum ScrollError {
    #[error("Scroll container '{0}' not found")]
    ContainerNotFound(String),
    #[error("Scroll failed: {0}")]
    Failed(String),
}

/// Capacité de défilement fournie par l'hôte (navigateur, test, ...)
pub trait ScrollSurface: Send + Sync + 'static {
    /// Remonte immédiatement (sans animation) en haut de `target`
    fn scroll_to_top(&self, target: &ScrollTarget) -> Result<(), ScrollError>;
}

/// Planifie le défilement vers le haut après un délai fixe
pub struct ScrollScheduler<S> {
    surface: Arc<S>,
    container_id: String,
    delay: Duration,
}

impl<S> Clone for ScrollScheduler<S> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface.clone(),
            container_id: self.container_id.clone(),
            delay: self.delay,
        }
    }
}

impl<S: ScrollSurface> ScrollScheduler<S> {
    pub fn new(surface: Arc<S>, container_id: impl Into<String>, delay: Duration) -> Self {
        Self {
            surface,
            container_id: container_id.into(),
            delay,
        }
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    /// Cibles dans l'ordre où elles sont remontées
    pub fn targets(&self) -> [ScrollTarget; 2] {
        [
            ScrollTarget::MainContainer(self.container_id.clone()),
            ScrollTarget::Window,
        ]
    }

    /// Lance la remise à zéro en tâche de fond (fire-and-forget)
    ///
    /// Sans runtime tokio disponible, rien n'est fait.
    pub fn schedule(&self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            trace!("No async runtime, skipping deferred scroll");
            return;
        };

        let surface = self.surface.clone();
        let targets = self.targets();
        let delay = self.delay;
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            for target in &targets {
                if let Err(e) = surface.scroll_to_top(target) {
                    trace!("Ignoring scroll failure: {}", e);
                }
            }
        });
    }
}
