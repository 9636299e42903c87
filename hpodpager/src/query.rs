//! Paramètre `page` de l'URL
//!
//! L'absence du paramètre signifie la page 1 ; les URLs canoniques de la
//! première page n'ont donc jamais `page=1`. Les autres paramètres de la
//! requête sont conservés tels quels, dans leur ordre.

use url::form_urlencoded;

/// Nom du paramètre de requête portant la page courante
pub const PAGE_PARAM: &str = "page";

/// Lit la page demandée dans une chaîne de requête (avec ou sans `?`)
///
/// Absent, vide, non numérique ou nul : page 1.
pub fn page_from_query(query: &str) -> u32 {
    form_urlencoded::parse(strip_question_mark(query).as_bytes())
        .find(|(name, _)| name == PAGE_PARAM)
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Réécrit la chaîne de requête pour cibler `page`
///
/// Page 1 : le paramètre est supprimé. Sinon sa première occurrence est
/// remplacée sur place (les suivantes sont supprimées), ou il est ajouté en fin.
/// Le résultat n'a pas de `?` initial et peut être vide.
pub fn query_with_page(query: &str, page: u32) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut written = false;

    for (name, value) in form_urlencoded::parse(strip_question_mark(query).as_bytes()) {
        if name == PAGE_PARAM {
            if page > 1 && !written {
                serializer.append_pair(PAGE_PARAM, &page.to_string());
                written = true;
            }
            continue;
        }
        serializer.append_pair(&name, &value);
    }

    if page > 1 && !written {
        serializer.append_pair(PAGE_PARAM, &page.to_string());
    }

    serializer.finish()
}

/// Assemble un chemin et une chaîne de requête : `path` seul si la requête est vide
pub fn href(path: &str, query: &str) -> String {
    let query = strip_question_mark(query);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// URL cible pour aller à `page` depuis `path?query`
pub fn href_for_page(path: &str, query: &str, page: u32) -> String {
    href(path, &query_with_page(query, page))
}

fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query(""), 1);
        assert_eq!(page_from_query("?page=5&sort=new"), 5);
        assert_eq!(page_from_query("sort=new&page=12"), 12);
        assert_eq!(page_from_query("page="), 1);
        assert_eq!(page_from_query("page=0"), 1);
        assert_eq!(page_from_query("page=-3"), 1);
        assert_eq!(page_from_query("page=abc"), 1);
        assert_eq!(page_from_query("pages=4"), 1);
    }

    #[test]
    fn test_first_page_removes_parameter() {
        assert_eq!(query_with_page("?page=5&sort=new", 1), "sort=new");
        assert_eq!(query_with_page("page=5", 1), "");
        assert_eq!(query_with_page("page=5&page=6", 1), "");
    }

    #[test]
    fn test_other_pages_set_parameter_in_place() {
        assert_eq!(query_with_page("?page=5&sort=new", 6), "page=6&sort=new");
        assert_eq!(query_with_page("sort=new&page=5&tag=rust", 2), "sort=new&page=2&tag=rust");
        assert_eq!(query_with_page("page=5&sort=new&page=9", 3), "page=3&sort=new");
    }

    #[test]
    fn test_missing_parameter_is_appended() {
        assert_eq!(query_with_page("", 4), "page=4");
        assert_eq!(query_with_page("sort=new", 4), "sort=new&page=4");
    }

    #[test]
    fn test_other_parameters_survive_encoding() {
        assert_eq!(
            query_with_page("q=hello+world&tag=a%26b", 2),
            "q=hello+world&tag=a%26b&page=2"
        );
    }

    #[test]
    fn test_href() {
        assert_eq!(href("/", ""), "/");
        assert_eq!(href("/episodes", "?"), "/episodes");
        assert_eq!(href_for_page("/", "page=5&sort=new", 1), "/?sort=new");
        assert_eq!(href_for_page("/", "", 3), "/?page=3");
    }
}
