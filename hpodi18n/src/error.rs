use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("No supported locale configured")]
    EmptyLocaleSet,
    #[error("Invalid language tag '{0}'")]
    InvalidTag(String),
    #[error("Default locale '{0}' is not in the supported set")]
    DefaultNotSupported(String),
    #[error("Invalid message catalogue: {0}")]
    Catalogue(#[from] serde_yaml::Error),
    #[error("Message catalogue has no entry for its default locale '{0}'")]
    MissingDefaultMessages(String),
}
