use serde::{Deserialize, Serialize};

use crate::scores::WhzOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WhzClass {
    SevereAcuteMalnutrition,
    ModerateAcuteMalnutrition,
    Normal,
    RiskOfOverweight,
    Overweight,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Es,
    En,
}

impl WhzClass {
    /// Chart order, most severe first. `Unknown` is not charted.
    pub const CHARTED: [WhzClass; 5] = [
        WhzClass::SevereAcuteMalnutrition,
        WhzClass::ModerateAcuteMalnutrition,
        WhzClass::Normal,
        WhzClass::RiskOfOverweight,
        WhzClass::Overweight,
    ];

    pub const ALL: [WhzClass; 6] = [
        WhzClass::SevereAcuteMalnutrition,
        WhzClass::ModerateAcuteMalnutrition,
        WhzClass::Normal,
        WhzClass::RiskOfOverweight,
        WhzClass::Overweight,
        WhzClass::Unknown,
    ];

    pub fn key(self) -> &'static str {
        match self {
            WhzClass::SevereAcuteMalnutrition => "severe_acute_malnutrition",
            WhzClass::ModerateAcuteMalnutrition => "moderate_acute_malnutrition",
            WhzClass::Normal => "normal",
            WhzClass::RiskOfOverweight => "risk_of_overweight",
            WhzClass::Overweight => "overweight",
            WhzClass::Unknown => "unknown",
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Es => match self {
                WhzClass::SevereAcuteMalnutrition => "Desnutrición aguda severa",
                WhzClass::ModerateAcuteMalnutrition => "Desnutrición aguda moderada",
                WhzClass::Normal => "Normal",
                WhzClass::RiskOfOverweight => "Riesgo de sobrepeso",
                WhzClass::Overweight => "Sobrepeso",
                WhzClass::Unknown => "Desconocido",
            },
            Language::En => match self {
                WhzClass::SevereAcuteMalnutrition => "Severe acute malnutrition",
                WhzClass::ModerateAcuteMalnutrition => "Moderate acute malnutrition",
                WhzClass::Normal => "Normal",
                WhzClass::RiskOfOverweight => "Risk of overweight",
                WhzClass::Overweight => "Overweight",
                WhzClass::Unknown => "Unknown",
            },
        }
    }
}

/// Thresholds are evaluated top-down; values exactly on 1 or 2 belong to
/// the band above, -2 and -3 to the band above as well. NaN falls through
/// every comparison to `Unknown`.
pub fn classify(z: f64) -> WhzClass {
    if z >= 2.0 {
        WhzClass::Overweight
    } else if (1.0..2.0).contains(&z) {
        WhzClass::RiskOfOverweight
    } else if (-2.0..1.0).contains(&z) {
        WhzClass::Normal
    } else if (-3.0..-2.0).contains(&z) {
        WhzClass::ModerateAcuteMalnutrition
    } else if z < -3.0 {
        WhzClass::SevereAcuteMalnutrition
    } else {
        WhzClass::Unknown
    }
}

pub fn classify_outcome(outcome: &WhzOutcome) -> WhzClass {
    match outcome {
        Ok(Some(z)) => classify(*z),
        Ok(None) | Err(_) => WhzClass::Unknown,
    }
}
