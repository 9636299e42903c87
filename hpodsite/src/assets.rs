//! Stockage objet et routes de fichiers bruts
//!
//! - `GET /static/{*path}` renvoie l'objet tel quel, sans type de contenu ni
//!   en-tête de cache ; un objet absent donne un corps vide (statut 200).
//! - `GET /rss.xml` et son alias `GET /blog.xml` renvoient le flux RSS stocké.

use crate::error::ObjectStoreError;
use crate::state::SiteState;
use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::path::{Component, PathBuf};
use tracing::{debug, warn};

pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";

/// Lecture d'objets par clé (`dir/file.ext`)
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// `Ok(None)` si l'objet n'existe pas
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ObjectStoreError>;
}

/// Stockage objet adossé à un répertoire local
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Chemin de l'objet, `None` si la clé sort de la racine
    fn object_path(&self, key: &str) -> Option<PathBuf> {
        if key.is_empty() || key.contains('\\') {
            return None;
        }
        let relative = std::path::Path::new(key);
        let mut segments = 0;
        for component in relative.components() {
            match component {
                Component::Normal(_) => segments += 1,
                _ => return None,
            }
        }
        // `a//b` ou `a/` : segments vides
        if segments != key.split('/').count() {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait]
impl ObjectStore for FsObjectStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ObjectStoreError> {
        let Some(path) = self.object_path(key) else {
            debug!(key, "Rejected object key");
            return Ok(None);
        };

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            // Répertoire à la place d'un fichier
            Err(e) if path.is_dir() => {
                debug!(key, "Object key is a directory: {}", e);
                Ok(None)
            }
            Err(source) => Err(ObjectStoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// Handler pour GET /static/{*path}
pub async fn static_object(State(state): State<SiteState>, Path(path): Path<String>) -> Response {
    let bytes = match state.objects.get(&path).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(key = %path, "Static object not found");
            Vec::new()
        }
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    };

    Response::new(Body::from(bytes))
}

/// Handler pour GET /rss.xml et GET /blog.xml
pub async fn rss_feed(State(state): State<SiteState>) -> Response {
    let key = &state.settings.feed_object_key;
    match state.objects.get(key).await {
        Ok(Some(bytes)) => ([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], bytes).into_response(),
        Ok(None) => {
            warn!(key = %key, "RSS feed object not found");
            (StatusCode::NOT_FOUND, "Feed not found").into_response()
        }
        Err(e) => {
            warn!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Cannot read feed").into_response()
        }
    }
}
