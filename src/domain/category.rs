//! Closed sets of request categories understood by the Rambler API.
//!
//! Every category has a machine-readable slug (used in URL paths and link
//! segments) and a Russian display name (used in upstream text fields such as
//! the compatibility list). Declaration order in [`Category::ALL`] is the
//! canonical order for sorting discovered values.

use crate::utils::error::{HoroscopeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub trait Category: Copy + Eq + 'static {
    /// 用於錯誤訊息的類別名稱
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn slug(self) -> &'static str;

    fn display_name(self) -> &'static str;

    fn from_slug(slug: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.slug() == slug)
            .ok_or_else(|| HoroscopeError::UnrecognizedEnumValue {
                kind: Self::KIND,
                value: slug.to_string(),
            })
    }

    /// 不分大小寫比對俄文名稱
    fn from_display_name(name: &str) -> Result<Self> {
        let wanted = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.display_name().to_lowercase() == wanted)
            .ok_or_else(|| HoroscopeError::UnrecognizedEnumValue {
                kind: Self::KIND,
                value: name.to_string(),
            })
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|value| *value == self)
            .unwrap_or(usize::MAX)
    }
}

macro_rules! slug_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.slug())
            }
        }

        impl FromStr for $ty {
            type Err = HoroscopeError;

            fn from_str(s: &str) -> Result<Self> {
                <$ty>::from_slug(s)
            }
        }
    };
}

/// HTTP 請求方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl RequestMethod {
    pub const ALL: [RequestMethod; 7] = [
        RequestMethod::Get,
        RequestMethod::Post,
        RequestMethod::Put,
        RequestMethod::Delete,
        RequestMethod::Head,
        RequestMethod::Options,
        RequestMethod::Patch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
            RequestMethod::Head => "HEAD",
            RequestMethod::Options => "OPTIONS",
            RequestMethod::Patch => "PATCH",
        }
    }

    /// 只有安全的讀取方法會進入回應快取
    pub fn is_cacheable(self) -> bool {
        matches!(self, RequestMethod::Get | RequestMethod::Head)
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = HoroscopeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == wanted)
            .ok_or_else(|| HoroscopeError::UnrecognizedEnumValue {
                kind: "request method",
                value: s.to_string(),
            })
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
            RequestMethod::Head => reqwest::Method::HEAD,
            RequestMethod::Options => reqwest::Method::OPTIONS,
            RequestMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Category for ZodiacSign {
    const KIND: &'static str = "zodiac sign";
    const ALL: &'static [Self] = &[
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    fn slug(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "aries",
            ZodiacSign::Taurus => "taurus",
            ZodiacSign::Gemini => "gemini",
            ZodiacSign::Cancer => "cancer",
            ZodiacSign::Leo => "leo",
            ZodiacSign::Virgo => "virgo",
            ZodiacSign::Libra => "libra",
            ZodiacSign::Scorpio => "scorpio",
            ZodiacSign::Sagittarius => "sagittarius",
            ZodiacSign::Capricorn => "capricorn",
            ZodiacSign::Aquarius => "aquarius",
            ZodiacSign::Pisces => "pisces",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Овен",
            ZodiacSign::Taurus => "Телец",
            ZodiacSign::Gemini => "Близнецы",
            ZodiacSign::Cancer => "Рак",
            ZodiacSign::Leo => "Лев",
            ZodiacSign::Virgo => "Дева",
            ZodiacSign::Libra => "Весы",
            ZodiacSign::Scorpio => "Скорпион",
            ZodiacSign::Sagittarius => "Стрелец",
            ZodiacSign::Capricorn => "Козерог",
            ZodiacSign::Aquarius => "Водолей",
            ZodiacSign::Pisces => "Рыбы",
        }
    }
}

slug_conversions!(ZodiacSign);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum HoroscopeType {
    #[default]
    General,
    Love,
    Sex,
    Career,
    Woman,
    Man,
}

impl Category for HoroscopeType {
    const KIND: &'static str = "horoscope type";
    const ALL: &'static [Self] = &[
        HoroscopeType::General,
        HoroscopeType::Love,
        HoroscopeType::Sex,
        HoroscopeType::Career,
        HoroscopeType::Woman,
        HoroscopeType::Man,
    ];

    fn slug(self) -> &'static str {
        match self {
            HoroscopeType::General => "general",
            HoroscopeType::Love => "love",
            HoroscopeType::Sex => "sex",
            HoroscopeType::Career => "career",
            HoroscopeType::Woman => "woman",
            HoroscopeType::Man => "man",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            HoroscopeType::General => "Общий",
            HoroscopeType::Love => "Любовный",
            HoroscopeType::Sex => "Сексуальный",
            HoroscopeType::Career => "Финансовый",
            HoroscopeType::Woman => "Женский",
            HoroscopeType::Man => "Мужской",
        }
    }
}

slug_conversions!(HoroscopeType);

/// `Today` 排在第一位，讓探索結果以預設期間開頭
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum HoroscopePeriod {
    #[default]
    Today,
    Yesterday,
    Tomorrow,
    Weekly,
    Monthly,
}

impl Category for HoroscopePeriod {
    const KIND: &'static str = "horoscope period";
    const ALL: &'static [Self] = &[
        HoroscopePeriod::Today,
        HoroscopePeriod::Yesterday,
        HoroscopePeriod::Tomorrow,
        HoroscopePeriod::Weekly,
        HoroscopePeriod::Monthly,
    ];

    fn slug(self) -> &'static str {
        match self {
            HoroscopePeriod::Today => "today",
            HoroscopePeriod::Yesterday => "yesterday",
            HoroscopePeriod::Tomorrow => "tomorrow",
            HoroscopePeriod::Weekly => "weekly",
            HoroscopePeriod::Monthly => "monthly",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            HoroscopePeriod::Today => "Сегодня",
            HoroscopePeriod::Yesterday => "Вчера",
            HoroscopePeriod::Tomorrow => "Завтра",
            HoroscopePeriod::Weekly => "Недельный",
            HoroscopePeriod::Monthly => "Месячный",
        }
    }
}

slug_conversions!(HoroscopePeriod);
