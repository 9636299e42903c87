//! Détection de la locale à partir de l'en-tête `Accept-Language`
//!
//! La résolution est une fonction pure : elle ne lève jamais d'erreur et retombe
//! sur la locale par défaut dès que l'en-tête est absent, vide ou illisible.

use crate::I18nError;
use serde::Serialize;
use std::fmt;

/// Poids maximal d'une plage de langue (q=1), en millièmes
pub const MAX_QUALITY: u16 = 1000;

/// Une locale supportée par le site (ex: `en`, `zh-CN`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Première sous-étiquette (`zh` pour `zh-CN`)
    pub fn primary_subtag(&self) -> &str {
        primary_subtag(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Une entrée de l'en-tête `Accept-Language`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRange {
    /// Étiquette normalisée (`_` remplacé par `-`), casse d'origine
    pub tag: String,
    /// Poids en millièmes (0..=1000)
    pub quality: u16,
}

/// Analyse un en-tête `Accept-Language`
///
/// Les entrées mal formées, le joker `*` et les entrées de poids nul sont
/// ignorés. Le résultat est trié par poids décroissant ; le tri est stable,
/// donc l'ordre d'apparition départage les poids égaux.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    let mut ranges: Vec<LanguageRange> = header
        .split(',')
        .filter_map(parse_range)
        .filter(|range| range.quality > 0)
        .collect();

    ranges.sort_by(|a, b| b.quality.cmp(&a.quality));
    ranges
}

fn parse_range(entry: &str) -> Option<LanguageRange> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim().replace('_', "-");
    if tag.is_empty() || tag == "*" || !is_valid_tag(&tag) {
        return None;
    }

    let mut quality = MAX_QUALITY;
    for param in parts {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("q") {
            quality = parse_qvalue(value.trim())?;
        }
    }

    Some(LanguageRange { tag, quality })
}

/// Qvalue au sens RFC 7231 : `0`, `0.xyz`, `1` ou `1.000`
fn parse_qvalue(raw: &str) -> Option<u16> {
    let (int, frac) = raw.split_once('.').unwrap_or((raw, ""));
    if frac.len() > 3 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match int {
        "0" => {
            let mut value = 0u16;
            for (digit, scale) in frac.bytes().zip([100u16, 10, 1]) {
                value += u16::from(digit - b'0') * scale;
            }
            Some(value)
        }
        "1" if frac.bytes().all(|b| b == b'0') => Some(MAX_QUALITY),
        _ => None,
    }
}

/// Vérifie la syntaxe d'une étiquette BCP 47 simplifiée : sous-étiquettes
/// alphanumériques de 1 à 8 caractères, la première alphabétique.
pub fn is_valid_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(primary) = subtags.next() else {
        return false;
    };
    if primary.is_empty() || primary.len() > 8 || !primary.bytes().all(|b| b.is_ascii_alphabetic())
    {
        return false;
    }
    subtags.all(|s| !s.is_empty() && s.len() <= 8 && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Ensemble fermé des locales supportées, avec sa locale par défaut
#[derive(Debug, Clone)]
pub struct LocaleSet {
    supported: Vec<Locale>,
    default_index: usize,
}

impl LocaleSet {
    /// Construit l'ensemble à partir de la configuration
    ///
    /// Les doublons (insensibles à la casse) sont ignorés ; la locale par
    /// défaut doit appartenir à l'ensemble.
    pub fn new<I, S>(supported: I, default: &str) -> Result<Self, I18nError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut locales: Vec<Locale> = Vec::new();
        for tag in supported {
            let tag = tag.into().trim().replace('_', "-");
            if !is_valid_tag(&tag) {
                return Err(I18nError::InvalidTag(tag));
            }
            if !locales.iter().any(|l| l.0.eq_ignore_ascii_case(&tag)) {
                locales.push(Locale(tag));
            }
        }

        if locales.is_empty() {
            return Err(I18nError::EmptyLocaleSet);
        }

        let default = default.trim().replace('_', "-");
        let default_index = locales
            .iter()
            .position(|l| l.0.eq_ignore_ascii_case(&default))
            .ok_or(I18nError::DefaultNotSupported(default))?;

        Ok(Self {
            supported: locales,
            default_index,
        })
    }

    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    pub fn default_locale(&self) -> &Locale {
        &self.supported[self.default_index]
    }

    /// Cherche la locale supportée correspondant à une étiquette : étiquette
    /// exacte, sinon sous-étiquette primaire égale à une locale supportée
    /// (`en-GB` → `en`). Une région voisine (`zh-TW` pour `zh-CN`) ne
    /// correspond pas.
    pub fn match_tag(&self, tag: &str) -> Option<&Locale> {
        let primary = primary_subtag(tag);

        self.supported
            .iter()
            .find(|l| l.0.eq_ignore_ascii_case(tag))
            .or_else(|| self.supported.iter().find(|l| l.0.eq_ignore_ascii_case(primary)))
    }

    /// Résout la locale d'affichage à partir de l'en-tête `Accept-Language`
    ///
    /// Ne renvoie jamais d'erreur : un en-tête absent, vide ou sans
    /// correspondance donne la locale par défaut.
    pub fn resolve(&self, header: Option<&str>) -> Locale {
        let Some(header) = header.filter(|h| !h.trim().is_empty()) else {
            return self.default_locale().clone();
        };

        parse_accept_language(header)
            .iter()
            .find_map(|range| self.match_tag(&range.tag))
            .unwrap_or_else(|| self.default_locale())
            .clone()
    }
}
