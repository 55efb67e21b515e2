//! Page metadata for search engines and link previews.

use serde::Serialize;
use toraja_model::{ContentDocument, ContentKind, Locale, LocalizedString};
use url::Url;

pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// Localized site name appended to every page title.
pub fn site_name(locale: Locale) -> &'static str {
    match locale {
        Locale::Id => "Pariwisata Tana Toraja",
        Locale::En => "Tana Toraja Tourism",
    }
}

/// Public path of a document page: `/{locale}/{collection}/{slug}`.
pub fn document_path(kind: ContentKind, slug: &str, locale: Locale) -> String {
    format!("/{}/{}/{}", locale, kind.collection(), slug)
}

/// Join a site-relative path onto the public base URL.
pub fn absolute_url(base_url: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternate {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub locale: Locale,
    pub canonical_url: String,
    /// One entry per site language plus `x-default`.
    pub alternates: Vec<Alternate>,
    pub image: Option<String>,
}

impl PageMeta {
    pub fn for_document(
        document: &ContentDocument,
        locale: Locale,
        base_url: &Url,
    ) -> Self {
        let title = document.title().get(locale);
        let summary = document.summary().get(locale);
        let description = if summary.trim().is_empty() {
            title
        } else {
            summary
        };
        let paths =
            |l: Locale| document_path(document.kind(), document.slug(), l);

        Self {
            title: page_title(document.title(), locale),
            description: truncate_description(
                description,
                DESCRIPTION_MAX_CHARS,
            ),
            locale,
            canonical_url: absolute_url(base_url, &paths(locale)),
            alternates: alternates(base_url, paths),
            image: document.images().first().map(|image| {
                if image.starts_with('/') {
                    absolute_url(base_url, image)
                } else {
                    image.clone()
                }
            }),
        }
    }
}

fn page_title(title: &LocalizedString, locale: Locale) -> String {
    format!("{} | {}", title.get(locale), site_name(locale))
}

fn alternates(
    base_url: &Url,
    path_for: impl Fn(Locale) -> String,
) -> Vec<Alternate> {
    let mut links: Vec<Alternate> = Locale::ALL
        .iter()
        .map(|locale| Alternate {
            hreflang: locale.as_str().to_string(),
            href: absolute_url(base_url, &path_for(*locale)),
        })
        .collect();
    links.push(Alternate {
        hreflang: "x-default".to_string(),
        href: absolute_url(base_url, &path_for(Locale::default())),
    });
    links
}

/// Collapse whitespace and cut at a word boundary so the result, ellipsis
/// included, is at most `max_chars` characters.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    if max_chars == 0 {
        return String::new();
    }

    let budget = max_chars - 1;
    let cut = collapsed
        .char_indices()
        .nth(budget)
        .map(|(at, _)| at)
        .unwrap_or(collapsed.len());
    let head = &collapsed[..cut];
    // Keep whole words unless the first word alone overflows.
    let head = if collapsed[cut..].starts_with(' ') {
        head
    } else {
        head.rfind(' ').map(|at| &head[..at]).unwrap_or(head)
    };
    format!("{}\u{2026}", head.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use toraja_model::{Destination, DestinationCategory, DestinationId};

    fn base() -> Url {
        Url::parse("https://tanatorajakab.go.id/").unwrap()
    }

    fn kete_kesu() -> ContentDocument {
        Destination {
            id: DestinationId::new(),
            slug: "kete-kesu".into(),
            name: LocalizedString::new("Kete Kesu", "Kete Kesu Village"),
            summary: LocalizedString::new(
                "Desa adat dengan tongkonan berusia ratusan tahun.",
                "",
            ),
            description: LocalizedString::default(),
            category: DestinationCategory::Heritage,
            location: "Kesu".into(),
            coordinates: None,
            images: vec!["/images/kete-kesu.jpg".into()],
            ticket_price: Some(15_000),
            opening_hours: None,
            featured: true,
            updated_at: Utc::now(),
        }
        .into()
    }

    #[test]
    fn document_meta_in_english() {
        let meta = PageMeta::for_document(&kete_kesu(), Locale::En, &base());

        assert_eq!(meta.title, "Kete Kesu Village | Tana Toraja Tourism");
        // English summary is blank, so the Indonesian one is used.
        assert_eq!(
            meta.description,
            "Desa adat dengan tongkonan berusia ratusan tahun."
        );
        assert_eq!(
            meta.canonical_url,
            "https://tanatorajakab.go.id/en/destinations/kete-kesu"
        );
        assert_eq!(
            meta.image.as_deref(),
            Some("https://tanatorajakab.go.id/images/kete-kesu.jpg")
        );
    }

    #[test]
    fn alternates_cover_every_locale() {
        let meta = PageMeta::for_document(&kete_kesu(), Locale::Id, &base());
        let langs: Vec<_> =
            meta.alternates.iter().map(|a| a.hreflang.as_str()).collect();
        assert_eq!(langs, ["id", "en", "x-default"]);
        assert_eq!(
            meta.alternates[2].href,
            "https://tanatorajakab.go.id/id/destinations/kete-kesu"
        );
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(
            truncate_description("  Lemo   cliff graves ", 160),
            "Lemo cliff graves"
        );
    }

    #[test]
    fn long_text_cuts_at_word_boundary() {
        let text = "Rambu Solo adalah upacara pemakaman adat";
        let cut = truncate_description(text, 20);
        assert_eq!(cut, "Rambu Solo adalah\u{2026}");
        assert!(cut.chars().count() <= 20);
    }

    #[test]
    fn single_long_word_is_hard_cut() {
        let cut = truncate_description("abcdefghij", 5);
        assert_eq!(cut, "abcd\u{2026}");
    }
}
