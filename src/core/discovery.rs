//! Figures out which horoscope types and periods exist for a sign by reading
//! the navigation links embedded in a "today" listing page.

use crate::domain::category::{Category, HoroscopePeriod, HoroscopeType};
use crate::domain::document::PageDocument;

/// 舊版路徑別名
const EROTIC_ALIAS: &str = "erotic";
const SEX_ALIAS: &str = "sex-horoscope";

fn path_segment(link: &str, index: usize) -> Option<&str> {
    link.split('/').nth(index)
}

fn sort_by_declaration<C: Category>(values: &mut [C]) {
    values.sort_by_key(|value| value.position());
}

/// Always starts with [`HoroscopeType::General`]. Duplicates are kept.
pub fn discover_types(doc: &PageDocument) -> Vec<HoroscopeType> {
    let mut types = vec![HoroscopeType::General];

    for link in doc.story_links() {
        let Some(segment) = path_segment(link, 2) else {
            continue;
        };

        if let Ok(horoscope_type) = HoroscopeType::from_slug(segment) {
            types.push(horoscope_type);
        }
        if segment == EROTIC_ALIAS {
            types.push(HoroscopeType::Love);
        }
        if segment == SEX_ALIAS {
            types.push(HoroscopeType::Sex);
        }
    }

    sort_by_declaration(&mut types);
    tracing::debug!("Discovered horoscope types: {:?}", types);
    types
}

/// Always starts with [`HoroscopePeriod::Today`]. The general listing has one
/// path component less than the typed ones, so the period sits one segment
/// earlier in its links.
pub fn discover_periods(doc: &PageDocument, horoscope_type: HoroscopeType) -> Vec<HoroscopePeriod> {
    let index = match horoscope_type {
        HoroscopeType::General => 2,
        _ => 3,
    };
    let mut periods = vec![HoroscopePeriod::Today];

    periods.extend(
        doc.bubble_links()
            .filter_map(|link| path_segment(link, index))
            .filter_map(|segment| HoroscopePeriod::from_slug(segment).ok()),
    );

    sort_by_declaration(&mut periods);
    tracing::debug!(
        "Discovered periods for {} horoscope: {:?}",
        horoscope_type,
        periods
    );
    periods
}
