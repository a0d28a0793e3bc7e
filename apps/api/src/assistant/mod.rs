// Application assistant: résumé optimization, cover letters, interview prep.
// Each operation is one prompt and one completion call; all calls go through
// llm_client::CompletionService.

pub mod handlers;
pub mod prompts;
pub mod resume;

use serde::Serialize;
use tracing::info;

use crate::assistant::prompts::{
    render, COVER_LETTER_TEMPLATE, INTERVIEW_QUESTIONS_TEMPLATE, OPTIMIZE_RESUME_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, CompletionService};

#[derive(Debug, Serialize)]
pub struct OptimizedResume {
    pub optimized_resume: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetter {
    pub cover_letter: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewQuestions {
    pub questions: Vec<String>,
}

pub async fn optimize_resume(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_text: &str,
) -> Result<OptimizedResume, AppError> {
    let request = CompletionRequest {
        prompt: render(OPTIMIZE_RESUME_TEMPLATE, resume_text, job_text),
        temperature: 0.7,
        max_tokens: 2000,
    };
    let optimized_resume = llm.complete(&request).await?;
    info!("Optimized resume ({} chars)", optimized_resume.len());
    Ok(OptimizedResume { optimized_resume })
}

pub async fn generate_cover_letter(
    llm: &dyn CompletionService,
    resume_text: &str,
    job_text: &str,
) -> Result<CoverLetter, AppError> {
    let request = CompletionRequest {
        prompt: render(COVER_LETTER_TEMPLATE, resume_text, job_text),
        temperature: 0.7,
        max_tokens: 1000,
    };
    let cover_letter = llm.complete(&request).await?;
    info!("Generated cover letter ({} chars)", cover_letter.len());
    Ok(CoverLetter { cover_letter })
}

pub async fn generate_interview_questions(
    llm: &dyn CompletionService,
    job_text: &str,
) -> Result<InterviewQuestions, AppError> {
    let request = CompletionRequest {
        prompt: render(INTERVIEW_QUESTIONS_TEMPLATE, "", job_text),
        temperature: 0.5,
        max_tokens: 1000,
    };
    let completion = llm.complete(&request).await?;
    let questions = split_lines(&completion);
    info!("Generated {} interview prep lines", questions.len());
    Ok(InterviewQuestions { questions })
}

/// One entry per non-blank line, trimmed, in order.
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{CompletionRequest, CompletionService, LlmError};

    /// Completion service that records requests and replies from a script.
    pub struct ScriptedCompletion {
        reply: Result<String, (u16, String)>,
        pub seen: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedCompletion {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16, message: &str) -> Self {
            Self {
                reply: Err((status, message.to_string())),
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.seen.lock().unwrap().last().map(|r| r.prompt.clone())
        }
    }

    #[async_trait]
    impl CompletionService for ScriptedCompletion {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err((status, message)) => Err(LlmError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedCompletion;
    use super::*;

    #[tokio::test]
    async fn test_optimize_resume_embeds_both_texts() {
        let llm = ScriptedCompletion::replying("Optimized: Jane Doe");
        let result = optimize_resume(&llm, "Jane Doe, Rust", "Senior Rust Engineer")
            .await
            .unwrap();

        assert_eq!(result.optimized_resume, "Optimized: Jane Doe");
        let prompt = llm.last_prompt().unwrap();
        assert!(prompt.contains("Jane Doe, Rust"));
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(prompt.starts_with("Optimize this resume"));

        let sent = llm.seen.lock().unwrap()[0].clone();
        assert_eq!(sent.max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_cover_letter_uses_cover_letter_template() {
        let llm = ScriptedCompletion::replying("Dear Hiring Manager,");
        let result = generate_cover_letter(&llm, "resume", "job").await.unwrap();

        assert_eq!(result.cover_letter, "Dear Hiring Manager,");
        assert!(llm
            .last_prompt()
            .unwrap()
            .contains("Return only the cover letter text."));
    }

    #[tokio::test]
    async fn test_interview_questions_drop_blank_lines() {
        let llm = ScriptedCompletion::replying(
            "Technical:\n\n1. Explain ownership.\n   \n2. What is Send?\n\nBehavioral:\n1. Tell me about a conflict.\n",
        );
        let result = generate_interview_questions(&llm, "Rust developer").await.unwrap();

        assert_eq!(
            result.questions,
            vec![
                "Technical:",
                "1. Explain ownership.",
                "2. What is Send?",
                "Behavioral:",
                "1. Tell me about a conflict.",
            ]
        );
        let sent = llm.seen.lock().unwrap()[0].clone();
        assert!((sent.temperature - 0.5).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_provider_error_becomes_service_unavailable() {
        let llm = ScriptedCompletion::failing(500, "internal provider failure");
        let err = optimize_resume(&llm, "r", "j").await.unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
    }

    #[test]
    fn test_split_lines_handles_crlf() {
        assert_eq!(split_lines("a\r\n\r\nb\r\n"), vec!["a", "b"]);
    }
}
