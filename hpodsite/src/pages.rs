//! Rendu HTML de la page liste des épisodes
//!
//! La locale vient de l'en-tête `Accept-Language`, la page courante du
//! paramètre `page` de l'URL (ramenée dans `[1, total]`). Le contrôle de
//! pagination n'est rendu qu'à partir de deux pages.

use crate::settings::SiteSettings;
use crate::state::SiteState;
use crate::theme::initializer_script;
use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, header},
    response::Html,
};
use hpodi18n::{Locale, Messages};
use hpodpager::{Location, PaginationView, StepControl, ViewItem, build_view, page_from_query};
use std::fmt::Write;
use tracing::debug;

const ELLIPSIS: &str = "…";

/// Échappe le texte pour un contenu ou un attribut HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Données d'une page liste, prêtes à rendre
pub struct EpisodeListPage<'a> {
    pub settings: &'a SiteSettings,
    pub messages: &'a Messages,
    pub locale: &'a Locale,
    pub current_page: u32,
    pub total_pages: u32,
    pub pagination: Option<PaginationView>,
}

impl EpisodeListPage<'_> {
    pub fn render(&self) -> String {
        let settings = self.settings;
        let mut html = String::new();

        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"{}\" class=\"theme-{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n",
            escape_html(self.locale.as_str()),
            escape_html(&settings.theme_color),
            escape_html(&settings.name),
        );
        if !settings.description.is_empty() {
            let _ = writeln!(
                html,
                "<meta name=\"description\" content=\"{}\">",
                escape_html(&settings.description)
            );
        }
        let _ = write!(
            html,
            "<link rel=\"alternate\" type=\"application/rss+xml\" title=\"{}\" href=\"/rss.xml\">\n<script id=\"theme-initializer\">{}</script>\n</head>\n<body>\n",
            escape_html(&settings.name),
            initializer_script(&settings.theme_storage_key),
        );

        let _ = writeln!(
            html,
            "<main id=\"{}\">",
            escape_html(&settings.main_container_id)
        );
        let _ = writeln!(
            html,
            "<h1>{}</h1>",
            escape_html(self.messages.t(self.locale, "episodes.title"))
        );
        if self.total_pages >= 1 {
            let current = self.current_page.to_string();
            let total = self.total_pages.to_string();
            let _ = writeln!(
                html,
                "<p class=\"page-indicator\">{}</p>",
                escape_html(&self.messages.t_args(
                    self.locale,
                    "episodes.page_of",
                    &[("current", current.as_str()), ("total", total.as_str())],
                ))
            );
        }
        if let Some(view) = &self.pagination {
            self.render_pagination(&mut html, view);
        }
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }

    fn render_pagination(&self, html: &mut String, view: &PaginationView) {
        let settings = self.settings;
        let _ = writeln!(
            html,
            "<nav aria-label=\"{}\" data-scroll-target=\"{}\" data-scroll-delay-ms=\"{}\">\n<ul class=\"pagination\">",
            escape_html(self.messages.t(self.locale, "pagination.label")),
            escape_html(&settings.main_container_id),
            settings.scroll_delay.as_millis(),
        );

        self.render_step(
            html,
            &view.previous,
            "prev",
            self.messages.t(self.locale, "pagination.previous"),
            "‹",
        );

        for item in &view.items {
            match item {
                ViewItem::Page { page, href, active } => {
                    if *active {
                        let _ = writeln!(
                            html,
                            "<li><a href=\"{}\" class=\"active\" aria-current=\"page\">{}</a></li>",
                            escape_html(href),
                            page
                        );
                    } else {
                        let _ = writeln!(
                            html,
                            "<li><a href=\"{}\">{}</a></li>",
                            escape_html(href),
                            page
                        );
                    }
                }
                ViewItem::Ellipsis { key } => {
                    let _ = writeln!(
                        html,
                        "<li data-key=\"{}\"><span class=\"ellipsis\" aria-hidden=\"true\">{}</span></li>",
                        escape_html(key),
                        ELLIPSIS
                    );
                }
            }
        }

        self.render_step(
            html,
            &view.next,
            "next",
            self.messages.t(self.locale, "pagination.next"),
            "›",
        );

        html.push_str("</ul>\n</nav>\n");
    }

    fn render_step(&self, html: &mut String, step: &StepControl, rel: &str, label: &str, glyph: &str) {
        if step.disabled {
            let _ = writeln!(
                html,
                "<li><span class=\"disabled\" aria-disabled=\"true\" aria-label=\"{}\">{}</span></li>",
                escape_html(label),
                glyph
            );
        } else {
            let _ = writeln!(
                html,
                "<li><a href=\"{}\" rel=\"{}\" aria-label=\"{}\">{}</a></li>",
                escape_html(&step.href),
                rel,
                escape_html(label),
                glyph
            );
        }
    }
}

/// Handler pour GET /
pub async fn episode_list(
    State(state): State<SiteState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Html<String> {
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    let locale = state.locales.resolve(accept_language);

    let location = Location {
        path: "/".to_string(),
        query: query.unwrap_or_default(),
    };
    let total_pages = state.settings.total_pages();
    let requested = page_from_query(&location.query);
    let current_page = state.settings.clamp_page(requested);
    if current_page != requested {
        debug!(requested, current_page, total_pages, "Requested page clamped");
    }

    let page = EpisodeListPage {
        settings: &state.settings,
        messages: &state.messages,
        locale: &locale,
        current_page,
        total_pages,
        pagination: build_view(&location, current_page, total_pages),
    };

    Html(page.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpodi18n::LocaleSet;

    fn render(total_episodes: u64, query: &str) -> String {
        let settings = SiteSettings {
            total_episodes,
            ..Default::default()
        };
        let messages = Messages::embedded().unwrap();
        let locale = LocaleSet::new(["en"], "en").unwrap().resolve(None);
        let location = Location {
            path: "/".to_string(),
            query: query.to_string(),
        };
        let current = settings.clamp_page(page_from_query(query));
        EpisodeListPage {
            settings: &settings,
            messages: &messages,
            locale: &locale,
            current_page: current,
            total_pages: settings.total_pages(),
            pagination: build_view(&location, current, settings.total_pages()),
        }
        .render()
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_single_page_has_no_pagination() {
        let html = render(7, "");
        assert!(html.contains("<p class=\"page-indicator\">Page 1 of 1</p>"));
        assert!(!html.contains("<nav"));
    }

    #[test]
    fn test_first_page_controls() {
        let html = render(100, "sort=new");
        assert!(html.contains(
            "<li><span class=\"disabled\" aria-disabled=\"true\" aria-label=\"Previous page\">‹</span></li>"
        ));
        assert!(html.contains(
            "<li><a href=\"/?sort=new\" class=\"active\" aria-current=\"page\">1</a></li>"
        ));
        assert!(html.contains("<li><a href=\"/?sort=new&amp;page=2\">2</a></li>"));
        assert!(html.contains("<li data-key=\"ellipsis-9\">"));
        assert!(html.contains(
            "<li><a href=\"/?sort=new&amp;page=2\" rel=\"next\" aria-label=\"Next page\">›</a></li>"
        ));
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let html = render(100, "page=42");
        assert!(html.contains("Page 10 of 10"));
        assert!(html.contains("<li><a href=\"/?page=10\" class=\"active\" aria-current=\"page\">10</a></li>"));
        assert!(html.contains("aria-disabled=\"true\" aria-label=\"Next page\""));
    }
}
