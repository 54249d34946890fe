//! Result Normalizer: turns parsed model output into the typed response envelope.
//!
//! Never fails. Every leaf is validated independently (see `models::lenient`), so a
//! partially usable reply still produces a complete response.

use serde_json::{Map, Value};

use crate::analysis::hints::section_recommendations;
use crate::analysis::models::{Analysis, AnalysisResponse, MatchAnalysis, ResumeReview};
use crate::analysis::requester::RawAnalysis;
use crate::extraction::contact::extract_contact;
use crate::extraction::sections::ResumeSections;

pub fn normalize(raw: RawAnalysis, resume_text: &str) -> AnalysisResponse {
    let sections = ResumeSections::extract(resume_text);
    let contact = extract_contact(resume_text);

    let analysis = match raw {
        RawAnalysis::Match(body) => Analysis::Match(from_object::<MatchAnalysis>(body)),
        RawAnalysis::Review(body) => Analysis::Review(from_object::<ResumeReview>(body)),
    };
    let score = match &analysis {
        Analysis::Match(a) => a.overall_score,
        Analysis::Review(r) => r.overall_score,
    };
    let suggestions = section_recommendations(score, &sections);

    AnalysisResponse {
        analysis,
        contact,
        sections,
        suggestions,
    }
}

fn from_object<T>(body: Map<String, Value>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_value(Value::Object(body)).unwrap_or_default()
}
