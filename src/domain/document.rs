//! Typed view of the JSON pages served by the horoscope API.
//!
//! The upstream shape is undocumented, so every field is optional: a missing
//! key and an explicit `null` both become `None`. A value of the wrong type
//! (for example `content.text` being a string) is a decoding failure.

use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub content: Option<PageContent>,
    #[serde(default)]
    pub cards: Option<Vec<Card>>,
}

impl PageDocument {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn text_blocks(&self) -> &[TextBlock] {
        self.content
            .as_ref()
            .and_then(|content| content.text.as_deref())
            .unwrap_or_default()
    }

    /// `content.highlighted.list[0].items`
    pub fn highlighted_items(&self) -> &[HighlightedItem] {
        self.content
            .as_ref()
            .and_then(|content| content.highlighted.as_ref())
            .and_then(|highlighted| highlighted.list.as_deref())
            .and_then(|groups| groups.first())
            .and_then(|group| group.items.as_deref())
            .unwrap_or_default()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.content
            .as_ref()
            .and_then(|content| content.summary.as_ref())
    }

    /// `cards[].stories[].link`
    pub fn story_links(&self) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .flatten()
            .filter_map(|card| card.stories.as_ref())
            .flatten()
            .filter_map(|story| story.link.as_deref())
    }

    /// `content.bubbles.list[].link`
    pub fn bubble_links(&self) -> impl Iterator<Item = &str> {
        self.content
            .as_ref()
            .and_then(|content| content.bubbles.as_ref())
            .and_then(|bubbles| bubbles.list.as_ref())
            .into_iter()
            .flatten()
            .filter_map(|bubble| bubble.link.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageContent {
    #[serde(default)]
    pub text: Option<Vec<TextBlock>>,
    #[serde(default)]
    pub highlighted: Option<Highlighted>,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub bubbles: Option<Bubbles>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextBlock {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl TextBlock {
    pub fn is_paragraph(&self) -> bool {
        self.kind.as_deref() == Some("paragraph")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Highlighted {
    #[serde(default)]
    pub list: Option<Vec<HighlightedGroup>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighlightedGroup {
    #[serde(default)]
    pub items: Option<Vec<HighlightedItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighlightedItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// 星座摘要屬性，每個屬性都是字串陣列
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Summary {
    #[serde(rename = "trait", default)]
    pub trait_: Option<Vec<String>>,
    #[serde(default)]
    pub planet: Option<Vec<String>>,
    #[serde(default)]
    pub house: Option<Vec<String>>,
    #[serde(default)]
    pub tarot: Option<Vec<String>>,
    #[serde(default)]
    pub color: Option<Vec<String>>,
    #[serde(default)]
    pub stone: Option<Vec<String>>,
    #[serde(default)]
    pub flower: Option<Vec<String>>,
    #[serde(default)]
    pub compatibility: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bubbles {
    #[serde(default)]
    pub list: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub stories: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub link: Option<String>,
}
