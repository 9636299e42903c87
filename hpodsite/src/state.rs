use crate::assets::ObjectStore;
use crate::settings::SiteSettings;
use hpodi18n::{LocaleSet, Messages};
use std::sync::Arc;

/// État partagé par les handlers du site (lecture seule)
#[derive(Clone)]
pub struct SiteState {
    pub settings: Arc<SiteSettings>,
    pub locales: Arc<LocaleSet>,
    pub messages: Arc<Messages>,
    pub objects: Arc<dyn ObjectStore>,
}

impl SiteState {
    pub fn new(
        settings: SiteSettings,
        locales: LocaleSet,
        messages: Messages,
        objects: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            locales: Arc::new(locales),
            messages: Arc::new(messages),
            objects,
        }
    }
}
