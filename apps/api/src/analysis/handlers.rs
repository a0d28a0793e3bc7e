//! Axum route handler for job analysis.

use axum::{extract::State, Json};

use crate::analysis::analyze_job;
use crate::analysis::shaper::AnalysisResult;
use crate::errors::AppError;
use crate::routes::form::FormFields;
use crate::state::AppState;

/// POST /analyze-job
///
/// Form (url-encoded or multipart): `job_url`. Fetches the posting and returns
/// a preview, naive skill candidates and a word count.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<AnalysisResult>, AppError> {
    let job_url = form.text("job_url")?;
    let result = analyze_job(&job_url, &state.fetcher, state.tagger.as_ref()).await?;
    Ok(Json(result))
}
