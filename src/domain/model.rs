use crate::domain::category::{HoroscopePeriod, HoroscopeType, ZodiacSign};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_text;
use serde::Serialize;

/// Static astrological attributes of a zodiac sign.
///
/// Only obtainable through [`ZodiacProfileBuilder::build`], which guarantees
/// that `description`, `born` and `element` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZodiacProfile {
    sign: ZodiacSign,
    description: String,
    born: String,
    element: String,
    #[serde(rename = "trait", skip_serializing_if = "Option::is_none")]
    trait_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    planet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    house: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tarot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flower: Option<String>,
    compatibility: Vec<ZodiacSign>,
}

impl ZodiacProfile {
    pub fn builder(sign: ZodiacSign) -> ZodiacProfileBuilder {
        ZodiacProfileBuilder::new(sign)
    }

    pub fn sign(&self) -> ZodiacSign {
        self.sign
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn born(&self) -> &str {
        &self.born
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn trait_(&self) -> Option<&str> {
        self.trait_.as_deref()
    }

    pub fn planet(&self) -> Option<&str> {
        self.planet.as_deref()
    }

    pub fn house(&self) -> Option<&str> {
        self.house.as_deref()
    }

    pub fn tarot(&self) -> Option<&str> {
        self.tarot.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn stone(&self) -> Option<&str> {
        self.stone.as_deref()
    }

    pub fn flower(&self) -> Option<&str> {
        self.flower.as_deref()
    }

    pub fn compatibility(&self) -> &[ZodiacSign] {
        &self.compatibility
    }
}

/// 累積正規化過程中抽出的欄位，最後一次驗證
#[derive(Debug, Clone)]
pub struct ZodiacProfileBuilder {
    sign: ZodiacSign,
    pub description: Option<String>,
    pub born: Option<String>,
    pub element: Option<String>,
    pub trait_: Option<String>,
    pub planet: Option<String>,
    pub house: Option<String>,
    pub tarot: Option<String>,
    pub color: Option<String>,
    pub stone: Option<String>,
    pub flower: Option<String>,
    pub compatibility: Vec<ZodiacSign>,
}

impl ZodiacProfileBuilder {
    pub fn new(sign: ZodiacSign) -> Self {
        Self {
            sign,
            description: None,
            born: None,
            element: None,
            trait_: None,
            planet: None,
            house: None,
            tarot: None,
            color: None,
            stone: None,
            flower: None,
            compatibility: Vec::new(),
        }
    }

    pub fn build(self) -> Result<ZodiacProfile> {
        Ok(ZodiacProfile {
            sign: self.sign,
            description: validate_required_text("description", self.description)?,
            born: validate_required_text("born", self.born)?,
            element: validate_required_text("element", self.element)?,
            trait_: self.trait_,
            planet: self.planet,
            house: self.house,
            tarot: self.tarot,
            color: self.color,
            stone: self.stone,
            flower: self.flower,
            compatibility: self.compatibility,
        })
    }
}

/// Horoscope text for a (sign, type, period) triple. `text` may be empty
/// when the API has no content for the combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoroscopeReading {
    pub sign: ZodiacSign,
    #[serde(rename = "type")]
    pub horoscope_type: HoroscopeType,
    pub period: HoroscopePeriod,
    pub text: String,
}
