use crate::domain::category::{Category, HoroscopePeriod, HoroscopeType, ZodiacSign};
use crate::domain::document::{HighlightedItem, PageDocument, Summary, TextBlock};
use crate::domain::model::{HoroscopeReading, ZodiacProfile, ZodiacProfileBuilder};
use crate::utils::error::{HoroscopeError, Result};
use crate::utils::html::strip_to_plain_text;

const BORN_LABEL: &str = "Родились";
const ELEMENT_LABEL: &str = "Стихия";

/// 依序累積開頭連續的 paragraph 區塊，每段後面接一個換行。
/// 遇到第一個非 paragraph 區塊即停止；完全沒有 paragraph 時回傳 `None`。
pub fn accumulate_paragraphs(blocks: &[TextBlock]) -> Option<String> {
    let mut accumulated: Option<String> = None;

    for block in blocks {
        if !block.is_paragraph() {
            break;
        }
        let text = accumulated.get_or_insert_with(String::new);
        text.push_str(block.content.as_deref().unwrap_or_default());
        text.push('\n');
    }

    accumulated
}

fn extract_text(doc: &PageDocument) -> Option<String> {
    accumulate_paragraphs(doc.text_blocks()).map(|raw| strip_to_plain_text(&raw))
}

fn join_values(values: &[String]) -> String {
    values.join(", ")
}

fn join_lowercase(values: Option<&[String]>) -> Option<String> {
    values.map(|values| join_values(values).to_lowercase())
}

fn apply_highlighted(builder: &mut ZodiacProfileBuilder, items: &[HighlightedItem]) {
    for item in items {
        let text = || item.text.as_deref().map(str::to_lowercase);
        match item.name.as_deref() {
            Some(BORN_LABEL) => builder.born = text(),
            Some(ELEMENT_LABEL) => builder.element = text(),
            _ => {}
        }
    }
}

/// 相容星座清單：任何一個名稱無法辨識就整份捨棄
fn parse_compatibility(names: &[String]) -> Result<Vec<ZodiacSign>> {
    names
        .iter()
        .map(|name| ZodiacSign::from_display_name(name))
        .collect()
}

fn apply_summary(builder: &mut ZodiacProfileBuilder, summary: &Summary) -> Result<()> {
    builder.trait_ = join_lowercase(summary.trait_.as_deref());
    builder.planet = join_lowercase(summary.planet.as_deref());
    builder.house = join_lowercase(summary.house.as_deref());
    builder.tarot = join_lowercase(summary.tarot.as_deref());
    builder.color = join_lowercase(summary.color.as_deref());
    builder.stone = join_lowercase(summary.stone.as_deref());
    // flower 保留原始大小寫
    builder.flower = summary.flower.as_deref().map(join_values);

    if let Some(names) = summary.compatibility.as_deref() {
        builder.compatibility = match parse_compatibility(names) {
            Ok(signs) => signs,
            Err(HoroscopeError::UnrecognizedEnumValue { value, .. }) => {
                tracing::debug!(
                    "Dropping compatibility list {:?}: unrecognized sign '{}'",
                    names,
                    value
                );
                Vec::new()
            }
            Err(other) => return Err(other),
        };
    }

    Ok(())
}

pub fn normalize_profile(doc: &PageDocument, sign: ZodiacSign) -> Result<ZodiacProfile> {
    let mut builder = ZodiacProfile::builder(sign);
    builder.description = extract_text(doc);

    let items = doc.highlighted_items();
    if !items.is_empty() {
        apply_highlighted(&mut builder, items);

        if let Some(summary) = doc.summary() {
            apply_summary(&mut builder, summary)?;
        }
    }

    builder.build()
}

pub fn normalize_reading(
    doc: &PageDocument,
    sign: ZodiacSign,
    horoscope_type: HoroscopeType,
    period: HoroscopePeriod,
) -> HoroscopeReading {
    HoroscopeReading {
        sign,
        horoscope_type,
        period,
        text: extract_text(doc).unwrap_or_default(),
    }
}
