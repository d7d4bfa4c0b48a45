use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Where the substitution marker goes when text overflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncationMode {
    #[default]
    None,
    Start,
    Middle,
    End,
}

impl TruncationMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "start" => Some(Self::Start),
            "middle" => Some(Self::Middle),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    /// Integer form used by styling attributes.
    pub fn from_attribute(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Start),
            2 => Some(Self::Middle),
            3 => Some(Self::End),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

impl<'de> Deserialize<'de> for TruncationMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Attribute(i64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Name(name) => Self::parse(&name)
                .ok_or_else(|| de::Error::custom(format!("unknown ellipsize mode \"{name}\""))),
            Raw::Attribute(value) => i32::try_from(value)
                .ok()
                .and_then(Self::from_attribute)
                .ok_or_else(|| de::Error::custom(format!("unknown ellipsize attribute {value}"))),
        }
    }
}

/// Upper bound on visible lines. Any negative raw value (canonically -1)
/// means no truncation is ever applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum MaxLines {
    #[default]
    Unbounded,
    Lines(usize),
}

impl MaxLines {
    pub const UNBOUNDED_RAW: i32 = -1;

    pub fn from_raw(raw: i32) -> Self {
        match usize::try_from(raw) {
            Ok(lines) => Self::Lines(lines),
            Err(_) => Self::Unbounded,
        }
    }

    pub fn as_raw(&self) -> i32 {
        match self {
            Self::Unbounded => Self::UNBOUNDED_RAW,
            Self::Lines(lines) => i32::try_from(*lines).unwrap_or(i32::MAX),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Lines(lines) => Some(*lines),
        }
    }
}

impl From<i32> for MaxLines {
    fn from(raw: i32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<MaxLines> for i32 {
    fn from(max_lines: MaxLines) -> Self {
        max_lines.as_raw()
    }
}

/// How `TruncationMode::Start` picks the text kept after the marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartStrategy {
    /// Keep `full[len - cut .. cut]`, where `cut` ends the last allowed line.
    /// Only meaningful while `cut` lies past the middle of the text; other
    /// inputs fall back to the full text.
    #[default]
    Mirror,
    /// Drop leading words until the marker and the remaining tail fit.
    Trailing,
}

impl StartStrategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mirror" => Some(Self::Mirror),
            "trailing" => Some(Self::Trailing),
            _ => None,
        }
    }
}
