//! Rule-based suggestions derived from the score and the scraped sections alone.

use crate::extraction::sections::{ResumeSections, SectionKind};

/// Scores below this get a generic "add more detail" nudge.
const DETAIL_THRESHOLD: u8 = 75;

/// One suggestion for a low score, plus one per empty section.
pub fn section_recommendations(score: u8, sections: &ResumeSections) -> Vec<String> {
    let mut recommendations = Vec::new();

    if score < DETAIL_THRESHOLD {
        recommendations.push("Consider adding more details to your resume sections".to_string());
    }

    for kind in SectionKind::ALL {
        if sections.get(kind).is_empty() {
            recommendations.push(missing_section_hint(kind).to_string());
        }
    }

    recommendations
}

fn missing_section_hint(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Education => "Add your educational background",
        SectionKind::Experience => "Include your work experience",
        SectionKind::Skills => "List your technical and soft skills",
        SectionKind::Projects => "Add some of your notable projects",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_sections() -> ResumeSections {
        ResumeSections {
            education: vec!["B.Sc.".into()],
            experience: vec!["Acme".into()],
            skills: vec!["Rust".into()],
            projects: vec!["resume-match".into()],
        }
    }

    #[test]
    fn test_strong_complete_resume_gets_no_hints() {
        assert!(section_recommendations(90, &full_sections()).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(section_recommendations(75, &full_sections()).is_empty());
        assert_eq!(section_recommendations(74, &full_sections()).len(), 1);
    }

    #[test]
    fn test_empty_sections_each_get_a_hint_in_order() {
        let hints = section_recommendations(0, &ResumeSections::default());
        assert_eq!(
            hints,
            vec![
                "Consider adding more details to your resume sections",
                "Add your educational background",
                "Include your work experience",
                "List your technical and soft skills",
                "Add some of your notable projects",
            ]
        );
    }
}
