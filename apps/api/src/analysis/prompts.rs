// All LLM prompt constants for the analysis module.
// Templates carry `{resume_text}` / `{job_description}` placeholders, replaced before sending.

/// System prompt for a resume reviewed on its own.
pub const REVIEW_SYSTEM: &str = "You are a professional resume analyst. \
    Review resumes and give specific, constructive feedback.";

/// Resume-only review prompt. Replace `{resume_text}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Review the resume below for a software engineering position. Cover:
1. An overall score from 0 to 100
2. Key strengths
3. Gaps or weak points
4. Skills worth adding or strengthening
5. Concrete recommendations for improvement

RESUME:
{resume_text}

Respond with a JSON object of exactly this shape:
{
  "overallScore": number,
  "keyStrengths": string[],
  "missingPoints": string[],
  "skillsToAdd": string[],
  "recommendations": string[]
}"#;

/// System prompt for comparing a resume against a job description.
pub const MATCH_SYSTEM: &str = "You are an expert resume analyst and career advisor. \
    Compare a resume against a job description and give a detailed match analysis \
    with actionable recommendations. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object.";

/// Comparative prompt. Replace `{resume_text}` and `{job_description}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Compare the resume with the job description below. Weigh both technical skills and experience requirements.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Return a JSON object with this EXACT schema:
{
  "overallScore": number,           // 0-100, how well the resume fits the job
  "keyStrengths": {
    "technical": string[],          // technical skills that match the role
    "experience": string[],         // experience aligned with the requirements
    "achievements": string[]        // achievements that show capability
  },
  "missingPoints": {
    "technical": string[],          // technical gaps, each with a short explanation
    "experience": string[],         // experience gaps to address
    "softSkills": string[]          // soft skills or other areas to develop
  },
  "skillsToAdd": {
    "priority": string[],           // high-priority skills, each with a reason
    "recommended": string[]         // other skills that would help
  },
  "recommendations": {
    "shortTerm": string[],          // immediate actions to improve the match
    "longTerm": string[]            // longer-term development
  }
}

IMPORTANT: Return ONLY the JSON object, with no additional text or explanation."#;

pub fn review_prompt(resume_text: &str) -> String {
    REVIEW_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn match_prompt(resume_text: &str, job_description: &str) -> String {
    // Placeholders inside user text must stay literal: the template's own
    // `{resume_text}` slot precedes the job description.
    MATCH_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replacen("{resume_text}", resume_text, 1)
}
