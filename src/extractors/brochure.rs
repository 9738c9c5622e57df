// src/extractors/brochure.rs

// --- Imports ---
use crate::extractors::validity::{self, Validity};
use crate::prospekt::Brochure;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

// --- CSS Selectors (Lazy Static) ---
// One card per brochure on the listing page
static CONTAINER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.brochure-thumb").expect("Failed to compile CONTAINER_SELECTOR")
});

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("p.grid-item-content").expect("Failed to compile TITLE_SELECTOR")
});

static IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("Failed to compile IMAGE_SELECTOR"));

static LOGO_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.grid-logo").expect("Failed to compile LOGO_SELECTOR"));

// Validity text is only rendered for wider viewports
static VALIDITY_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("small.hidden-sm").expect("Failed to compile VALIDITY_SELECTOR")
});

/// Alt text of shop logos is rendered as "Logo <shop>".
const LOGO_ALT_PREFIX: &str = "Logo ";

// --- Main Extractor Structure ---
#[derive(Debug, Default)]
pub struct BrochureExtractor;

impl BrochureExtractor {
    pub fn new() -> Self { Self {} }

    /// Extracts all complete brochure cards from a listing page, in page order.
    /// Validity is judged against today's local date.
    pub fn parse_brochures(&self, html_content: &str) -> Vec<Brochure> {
        self.parse_brochures_on(html_content, Local::now().date_naive())
    }

    /// Same as [`parse_brochures`](Self::parse_brochures) with an explicit reference date.
    pub fn parse_brochures_on(&self, html_content: &str, today: NaiveDate) -> Vec<Brochure> {
        let document = Html::parse_document(html_content);
        let mut brochures = Vec::new();

        for (index, container) in document.select(&CONTAINER_SELECTOR).enumerate() {
            let title = extract_title(container);
            let thumbnail = extract_thumbnail(container);
            let shop_name = extract_shop_name(container);
            let validity = extract_validity(container, today);

            match validity.valid_from {
                Some(valid_from)
                    if !title.is_empty() && !thumbnail.is_empty() && !shop_name.is_empty() =>
                {
                    brochures.push(Brochure::new(
                        title,
                        thumbnail,
                        shop_name,
                        valid_from,
                        validity.valid_to,
                    ));
                }
                _ => {
                    tracing::trace!("Skipping incomplete brochure card #{} (title: '{}')", index, title);
                }
            }
        }

        tracing::debug!("Extracted {} brochures", brochures.len());
        brochures
    }
}

fn first_text(container: ElementRef, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Trimmed text of the card's title paragraph.
pub fn extract_title(container: ElementRef) -> String {
    first_text(container, &TITLE_SELECTOR).unwrap_or_default()
}

/// Source of the first image, falling back to the lazy-load source.
pub fn extract_thumbnail(container: ElementRef) -> String {
    let Some(image) = container.select(&IMAGE_SELECTOR).next() else {
        return String::new();
    };

    let element = image.value();
    element
        .attr("src")
        .filter(|src| !src.is_empty())
        .or_else(|| element.attr("data-src"))
        .unwrap_or_default()
        .to_string()
}

/// Shop name from the logo's alt text, without the "Logo " prefix.
pub fn extract_shop_name(container: ElementRef) -> String {
    container
        .select(&LOGO_SELECTOR)
        .next()
        .and_then(|logo| logo.select(&IMAGE_SELECTOR).next())
        .map(|image| {
            image
                .value()
                .attr("alt")
                .unwrap_or_default()
                .replacen(LOGO_ALT_PREFIX, "", 1)
        })
        .unwrap_or_default()
}

pub fn extract_validity(container: ElementRef, today: NaiveDate) -> Validity {
    match first_text(container, &VALIDITY_SELECTOR) {
        Some(text) => validity::interpret(&text, today),
        None => Validity::UNDETERMINED,
    }
}
