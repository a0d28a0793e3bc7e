// Job analysis: fetch → extract → tag → shape.
// The only endpoint that does its own text processing; no LLM call here.

#[cfg(feature = "bert")]
pub mod bert;
pub mod extractor;
pub mod fetcher;
pub mod handlers;
#[cfg(any(feature = "bert", test))]
pub mod pool;
pub mod shaper;
pub mod tagger;

use tracing::{debug, info};

use crate::analysis::extractor::extract_text;
use crate::analysis::fetcher::PageFetcher;
use crate::analysis::shaper::{shape_result, AnalysisResult};
use crate::analysis::tagger::{select_skill_candidates, PosTagger};
use crate::errors::AppError;

/// Runs the full pipeline for one job posting URL.
pub async fn analyze_job(
    url: &str,
    fetcher: &PageFetcher,
    tagger: &dyn PosTagger,
) -> Result<AnalysisResult, AppError> {
    let page = fetcher.fetch(url).await?;
    debug!("Extracting text from {} ({} bytes)", page.url, page.body.len());
    let text = extract_text(&page.body, page.charset.as_deref())?;
    drop(page);

    let tokens = tagger.tag(&text).await?;
    let candidates = select_skill_candidates(&tokens);
    let result = shape_result(&text, candidates);

    info!(
        "Analyzed job posting: {} words, {} skill candidates",
        result.word_count,
        result.skills.len()
    );
    Ok(result)
}
