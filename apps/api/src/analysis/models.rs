//! Typed analysis results and the lenient deserializers that build them from model output.
//!
//! Model output is untrusted. Each field is validated on its own: a missing or
//! mistyped field falls back to its default instead of failing the whole document.

use serde::{Deserialize, Serialize};

use crate::extraction::contact::ContactInfo;
use crate::extraction::sections::ResumeSections;

// ────────────────────────────────────────────────────────────────────────────
// Comparative mode (resume vs job description)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyStrengths {
    #[serde(deserialize_with = "lenient::strings")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub experience: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MissingPoints {
    #[serde(deserialize_with = "lenient::strings")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub experience: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillsToAdd {
    #[serde(deserialize_with = "lenient::strings")]
    pub priority: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub recommended: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recommendations {
    #[serde(deserialize_with = "lenient::strings")]
    pub short_term: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub long_term: Vec<String>,
}

/// Full nested match analysis of a resume against a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchAnalysis {
    #[serde(deserialize_with = "lenient::score")]
    pub overall_score: u8,
    #[serde(deserialize_with = "lenient::object_or_default")]
    pub key_strengths: KeyStrengths,
    #[serde(deserialize_with = "lenient::object_or_default")]
    pub missing_points: MissingPoints,
    #[serde(deserialize_with = "lenient::object_or_default")]
    pub skills_to_add: SkillsToAdd,
    #[serde(deserialize_with = "lenient::object_or_default")]
    pub recommendations: Recommendations,
}

// ────────────────────────────────────────────────────────────────────────────
// Resume-only mode (generic software engineering review)
// ────────────────────────────────────────────────────────────────────────────

/// Flat review of a resume on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeReview {
    #[serde(deserialize_with = "lenient::score")]
    pub overall_score: u8,
    #[serde(deserialize_with = "lenient::strings")]
    pub key_strengths: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub missing_points: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub skills_to_add: Vec<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Response envelope
// ────────────────────────────────────────────────────────────────────────────

/// The two result shapes. Serialized without a tag: callers know which endpoint they hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Match(MatchAnalysis),
    Review(ResumeReview),
}

/// What the analyze endpoints return: model judgment plus locally scraped resume data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResponse {
    pub analysis: Analysis,
    pub contact: ContactInfo,
    #[serde(flatten)]
    pub sections: ResumeSections,
    /// Rule-based hints from the score and the scraped sections, never from the model.
    pub suggestions: Vec<String>,
}

pub(crate) mod lenient {
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    /// String elements of an array; anything that is not an array yields `[]`.
    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// A 0–100 score from a number or numeric string, rounded and clamped. Otherwise 0.
    pub fn score<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let raw = match &value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(raw
            .filter(|v| v.is_finite())
            .map(|v| v.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(0))
    }

    /// `T` read from a JSON object; `T::default()` for anything else.
    pub fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(T::default());
        }
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}
