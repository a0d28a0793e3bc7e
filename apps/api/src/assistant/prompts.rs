// Prompt templates for the application assistant.
// Placeholders are `{resume_text}` and `{job_text}`; fill them with `render`.

/// Résumé optimizer prompt. Replace `{resume_text}` and `{job_text}` before sending.
pub const OPTIMIZE_RESUME_TEMPLATE: &str = "Optimize this resume for the following job description.
Focus on:
- Matching keywords from the job description
- Highlighting relevant experience
- Maintaining original structure
- Keeping it concise

Resume:
{resume_text}

Job Description:
{job_text}

Return only the optimized resume text.";

/// Cover letter prompt. Replace `{resume_text}` and `{job_text}` before sending.
pub const COVER_LETTER_TEMPLATE: &str = "Write a professional, concise cover letter (3-4 paragraphs) that:
1. Matches the candidate's skills from the resume with the job requirements
2. Highlights 2-3 most relevant experiences
3. Shows enthusiasm for the specific role
4. Uses formal but modern business language

Resume:
{resume_text}

Job Description:
{job_text}

Return only the cover letter text.";

/// Interview question prompt. Replace `{job_text}` before sending.
pub const INTERVIEW_QUESTIONS_TEMPLATE: &str = "Generate interview questions based on this job description.
Format:
1. 5 technical questions specific to the role's requirements
2. 5 behavioral questions assessing soft skills
3. 2 situational questions about work scenarios

Job Description:
{job_text}

Return as a numbered list with clear separation between categories.";

/// Substitutes the job text last so braces inside the résumé are never
/// mistaken for a placeholder.
pub fn render(template: &str, resume_text: &str, job_text: &str) -> String {
    template
        .replacen("{job_text}", "\u{0}JOB\u{0}", 1)
        .replacen("{resume_text}", resume_text, 1)
        .replacen("\u{0}JOB\u{0}", job_text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(OPTIMIZE_RESUME_TEMPLATE.contains("{resume_text}"));
        assert!(OPTIMIZE_RESUME_TEMPLATE.contains("{job_text}"));
        assert!(COVER_LETTER_TEMPLATE.contains("{resume_text}"));
        assert!(COVER_LETTER_TEMPLATE.contains("{job_text}"));
        assert!(!INTERVIEW_QUESTIONS_TEMPLATE.contains("{resume_text}"));
        assert!(INTERVIEW_QUESTIONS_TEMPLATE.contains("{job_text}"));
    }

    #[test]
    fn test_render_fills_both_placeholders() {
        let prompt = render(OPTIMIZE_RESUME_TEMPLATE, "10 years of Rust", "Staff Engineer");
        assert!(prompt.contains("Resume:\n10 years of Rust"));
        assert!(prompt.contains("Job Description:\nStaff Engineer"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_render_does_not_expand_placeholders_inside_user_text() {
        let prompt = render(COVER_LETTER_TEMPLATE, "I wrote {job_text} parsers", "Parser Engineer");
        assert!(prompt.contains("I wrote {job_text} parsers"));
        assert!(prompt.contains("Job Description:\nParser Engineer"));
    }
}
