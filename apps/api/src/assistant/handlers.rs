//! Axum route handlers for the assistant endpoints.

use axum::{extract::State, Json};

use crate::assistant::resume::decode_resume;
use crate::assistant::{
    generate_cover_letter, generate_interview_questions, optimize_resume, CoverLetter,
    InterviewQuestions, OptimizedResume,
};
use crate::errors::AppError;
use crate::routes::form::FormFields;
use crate::state::AppState;

/// Fields of the `user_resume` + `job_text` form, already validated.
struct ResumeAndJob {
    resume_text: String,
    job_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /optimize-resume
///
/// Multipart: `user_resume` (file), `job_text` (string).
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<OptimizedResume>, AppError> {
    let form = read_resume_and_job(form).await?;
    let result = optimize_resume(state.llm.as_ref(), &form.resume_text, &form.job_text).await?;
    Ok(Json(result))
}

/// POST /generate-cover-letter
///
/// Multipart: `user_resume` (file), `job_text` (string).
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<CoverLetter>, AppError> {
    let form = read_resume_and_job(form).await?;
    let result =
        generate_cover_letter(state.llm.as_ref(), &form.resume_text, &form.job_text).await?;
    Ok(Json(result))
}

/// POST /interview-prep
///
/// Form (url-encoded or multipart): `job_text`.
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<InterviewQuestions>, AppError> {
    let job_text = form.text("job_text")?;
    let result = generate_interview_questions(state.llm.as_ref(), &job_text).await?;
    Ok(Json(result))
}

async fn read_resume_and_job(mut form: FormFields) -> Result<ResumeAndJob, AppError> {
    let resume = form
        .take("user_resume")
        .ok_or_else(|| AppError::Validation("user_resume file is required".to_string()))?;
    let job_text = form.text("job_text")?;

    let resume_text = decode_resume(resume.content_type.as_deref(), resume.data)
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(ResumeAndJob {
        resume_text,
        job_text,
    })
}
