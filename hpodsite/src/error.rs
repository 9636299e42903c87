use thiserror::Error;

/// Erreur du stockage clé/valeur du navigateur (localStorage)
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage is not available: {0}")]
    Unavailable(String),
    #[error("Storage access denied for key '{0}'")]
    AccessDenied(String),
}

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Cannot read theme preference: {0}")]
    Storage(#[from] StorageError),
    #[error("Color scheme query failed: {0}")]
    ColorScheme(String),
}

#[derive(Error, Debug)]
pub enum ObjectStoreError {
    #[error("Cannot read object '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}
