//! Heuristic resume section scraping.
//!
//! A line matching a section's header pattern opens the section; following lines are
//! collected (trimmed) until the first blank line. Only the first section found is
//! read. No header means an empty bucket, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EDUCATION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)education|academic|qualification").unwrap());
static EXPERIENCE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)experience|work history|employment").unwrap());
static SKILLS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)skills|technical skills|competencies").unwrap());
static PROJECTS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)projects|portfolio|work samples").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Education,
    Experience,
    Skills,
    Projects,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Skills,
        SectionKind::Projects,
    ];

    fn header(self) -> &'static Regex {
        match self {
            SectionKind::Education => &*EDUCATION_HEADER,
            SectionKind::Experience => &*EXPERIENCE_HEADER,
            SectionKind::Skills => &*SKILLS_HEADER,
            SectionKind::Projects => &*PROJECTS_HEADER,
        }
    }
}

/// Returns the trimmed, non-empty lines of the first `kind` section in `text`.
pub fn extract_section(text: &str, kind: SectionKind) -> Vec<String> {
    let header = kind.header();
    let mut lines = Vec::new();
    let mut in_section = false;

    for line in text.split('\n') {
        // A header-looking line is skipped even once inside the section.
        if header.is_match(line) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    lines
}

/// All four section buckets of one resume. Serialized flat into the analysis envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeSections {
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

impl ResumeSections {
    pub fn extract(text: &str) -> Self {
        Self {
            education: extract_section(text, SectionKind::Education),
            experience: extract_section(text, SectionKind::Experience),
            skills: extract_section(text, SectionKind::Skills),
            projects: extract_section(text, SectionKind::Projects),
        }
    }

    pub fn get(&self, kind: SectionKind) -> &[String] {
        match kind {
            SectionKind::Education => &self.education,
            SectionKind::Experience => &self.experience,
            SectionKind::Skills => &self.skills,
            SectionKind::Projects => &self.projects,
        }
    }
}
