//! Subject slug to marketing "learn page" mapping.
//!
//! Marketing pages live at `learn/<topic>` (English) and a Spanish
//! equivalent. Several subjects share a page (e.g. `philanthropy` and
//! `humanities`).

/// Marketing site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
}

impl Language {
    /// Resolve a language code such as `en`, `en-us` or `es-419`.
    ///
    /// Returns `None` for languages without a learn page.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

/// Localised learn page paths for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnPage {
    pub en: &'static str,
    pub es: &'static str,
}

impl LearnPage {
    pub fn slug_for(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Es => self.es,
        }
    }
}

const fn page(en: &'static str, es: &'static str) -> LearnPage {
    LearnPage { en, es }
}

/// Subject slug to learn page, sorted by subject slug.
pub const SUBJECT_SLUG_TO_LEARN_PAGE: &[(&str, LearnPage)] = &[
    ("architecture", page("architecture", "arquitectura")),
    ("art-culture", page("art", "arte")),
    ("biology-life-sciences", page("biology", "biologia")),
    (
        "business-management",
        page("business-administration", "administracion-de-empresas"),
    ),
    ("chemistry", page("chemistry", "quimica")),
    ("communication", page("business-communications", "comunicacion")),
    (
        "computer-science",
        page("computer-programming", "programacion-informatica"),
    ),
    ("data-science", page("data-analysis", "analisis-de-datos")),
    ("design", page("design", "diseno")),
    ("economics-finance", page("economics", "economia")),
    ("education-teacher-training", page("education", "educacion")),
    ("electronics", page("electronics", "ingenieria-electrica")),
    ("energy-earth-sciences", page("energy", "energia")),
    ("engineering", page("engineering", "ingenieria")),
    ("environmental-studies", page("environmental-science", "medio-ambiente")),
    ("ethics", page("ethics", "desafios-eticos")),
    ("food-nutrition", page("nutrition", "nutricion")),
    ("health-safety", page("healthcare", "cuidado-de-la-salud")),
    ("history", page("history", "historia")),
    ("humanities", page("humanities", "humanidades")),
    ("language", page("language", "idiomas")),
    ("law", page("law", "leyes")),
    ("literature", page("literature", "literatura")),
    ("math", page("math", "matematicas")),
    ("medicine", page("medicine", "medicina")),
    ("music", page("music-arts", "musica")),
    ("philanthropy", page("humanities", "humanidades")),
    ("philosophy-ethics", page("ethics", "filosofia")),
    ("physics", page("physics", "fisica")),
    ("science", page("science", "ciencias-naturales")),
    ("social-sciences", page("social-science", "ciencias-sociales")),
];

/// Look up the learn page for a subject slug.
pub fn learn_page_for_subject(subject_slug: &str) -> Option<&'static LearnPage> {
    SUBJECT_SLUG_TO_LEARN_PAGE
        .binary_search_by(|(slug, _)| (*slug).cmp(subject_slug))
        .ok()
        .map(|idx| &SUBJECT_SLUG_TO_LEARN_PAGE[idx].1)
}
