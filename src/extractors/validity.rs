// src/extractors/validity.rs

use crate::prospekt::models::ValidTo;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// DD.MM.YYYY anywhere in the text, e.g. "gültig ab 01.03.2024"
static DAY_MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}\.\d{2}\.\d{4})").expect("Failed to compile DAY_MONTH_YEAR_RE")
});

/// Validity range as read from a brochure card.
///
/// `valid_from` is `None` when no start could be determined; such cards are
/// not turned into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub valid_from: Option<NaiveDate>,
    pub valid_to: ValidTo,
}

impl Validity {
    pub const UNDETERMINED: Validity = Validity {
        valid_from: None,
        valid_to: ValidTo::Undetermined,
    };
}

/// Finds the first `DD.MM.YYYY` date in `text`.
///
/// Only the first match is considered. If it is not a real calendar date
/// (e.g. `31.02.2024`) the result is `None`; later matches are not tried.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    let found = DAY_MONTH_YEAR_RE.find(text)?;
    NaiveDate::parse_from_str(found.as_str(), "%d.%m.%Y").ok()
}

/// Interprets the validity text of a card relative to `today`.
///
/// `"A - B"` is a closed range. A lone date is a start date if it has already
/// begun (open-ended), otherwise an end date with unknown start.
pub fn interpret(text: &str, today: NaiveDate) -> Validity {
    let (left, right) = text.split_once('-').unwrap_or((text, ""));

    let Some(first) = find_date(left) else {
        return Validity::UNDETERMINED;
    };

    if let Some(second) = find_date(right) {
        return Validity {
            valid_from: Some(first),
            valid_to: ValidTo::Until(second),
        };
    }

    if first <= today {
        Validity {
            valid_from: Some(first),
            valid_to: ValidTo::OpenEnded,
        }
    } else {
        // Future lone date: read as an end date, which leaves the start unknown.
        Validity {
            valid_from: None,
            valid_to: ValidTo::Until(first),
        }
    }
}
