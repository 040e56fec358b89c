//! Pad-type classification from attack/decay shape

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strike_analysis::AnalysisResult;

/// Kind of drum pad the strike most likely came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadType {
    Cymbal,
    Snare,
    Kick,
    Tom,
    #[serde(rename = "Generic Pad")]
    GenericPad,
}

impl PadType {
    /// Every pad type, in selector order
    pub const ALL: [PadType; 5] = [
        PadType::Cymbal,
        PadType::Snare,
        PadType::Kick,
        PadType::Tom,
        PadType::GenericPad,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PadType::Cymbal => "Cymbal",
            PadType::Snare => "Snare",
            PadType::Kick => "Kick",
            PadType::Tom => "Tom",
            PadType::GenericPad => "Generic Pad",
        }
    }

    /// Parse an optional override; blank text means "use the detected type"
    pub fn parse_override(text: Option<&str>) -> Result<Option<PadType>, Error> {
        match text.map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }
}

impl fmt::Display for PadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PadType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "cymbal" => Ok(PadType::Cymbal),
            "snare" => Ok(PadType::Snare),
            "kick" => Ok(PadType::Kick),
            "tom" => Ok(PadType::Tom),
            "generic" | "genericpad" => Ok(PadType::GenericPad),
            _ => Err(Error::UnknownPadType(s.to_string())),
        }
    }
}

/// Classify the strike from its attack/decay shape.
///
/// `ratio = decay / (attack + 1)`. Rules are checked in order and the first
/// match wins, so a strike that fits several shapes resolves to the earliest.
pub fn detect_pad_type(analysis: &AnalysisResult) -> PadType {
    let attack = analysis.attack_time;
    let decay = analysis.decay_time;
    let ratio = decay as f32 / (attack as f32 + 1.0);

    if attack < 3 && ratio > 8.0 {
        PadType::Cymbal
    } else if attack < 5 && analysis.amplitude.max > 0.6 {
        PadType::Snare
    } else if attack > 10 && decay > 20 {
        PadType::Kick
    } else if attack < 8 && ratio < 4.0 {
        PadType::Tom
    } else {
        PadType::GenericPad
    }
}
