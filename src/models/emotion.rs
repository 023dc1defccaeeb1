use ansi_term::Colour;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotion attached to a feedback record.
///
/// The set is open: any string is accepted. Values listed in [`Emotion::known`]
/// get a display label, an icon and a color; anything else is shown with its
/// raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Emotion(String);

/// Display data for a known emotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionInfo {
    pub raw: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub colour: Colour,
}

static KNOWN: [EmotionInfo; 4] = [
    EmotionInfo {
        raw: "joie",
        label: "Joie",
        icon: "😊",
        colour: Colour::Green,
    },
    EmotionInfo {
        raw: "calme",
        label: "Calme",
        icon: "😌",
        colour: Colour::Cyan,
    },
    EmotionInfo {
        raw: "stress",
        label: "Stress",
        icon: "😰",
        colour: Colour::Red,
    },
    EmotionInfo {
        raw: "ennui",
        label: "Ennui",
        icon: "😐",
        colour: Colour::Fixed(244),
    },
];

const FALLBACK_ICON: &str = "💬";

impl Emotion {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lookup table of emotions with a dedicated rendering.
    pub fn known() -> &'static [EmotionInfo] {
        &KNOWN
    }

    /// Exact (case-sensitive) lookup in the known table.
    pub fn info(&self) -> Option<&'static EmotionInfo> {
        KNOWN.iter().find(|e| e.raw == self.0)
    }

    /// Human label; unknown emotions fall back to the raw value.
    pub fn label(&self) -> &str {
        self.info().map(|e| e.label).unwrap_or(self.0.as_str())
    }

    pub fn icon(&self) -> &'static str {
        self.info().map(|e| e.icon).unwrap_or(FALLBACK_ICON)
    }

    /// `icon label`, colored when the emotion is known.
    pub fn painted(&self) -> String {
        let text = format!("{} {}", self.icon(), self.label());
        match self.info() {
            Some(e) => e.colour.paint(text).to_string(),
            None => text,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Emotion {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Emotion {
    fn from(s: String) -> Self {
        Self(s)
    }
}
