//! Submission pipeline.
//!
//! Flow: collected request → generator call → normalize → validate →
//!       render, or present the failure.
//!
//! Every outcome, success or failure, is a complete replacement for the
//! output region. Nothing is retried and nothing escapes as an error.

use serde_json::Value;
use tracing::info;

use crate::curriculum::models::{Curriculum, GenerationRequest};
use crate::curriculum::normalizer::normalize;
use crate::curriculum::presenter::{present, PipelineError};
use crate::curriculum::renderer::render_html;
use crate::curriculum::validator::validate;
use crate::generator_client::CurriculumGenerator;

/// Runs one submission end to end and returns the output-region markup.
pub async fn run_submission(
    generator: &dyn CurriculumGenerator,
    request: &GenerationRequest,
) -> String {
    info!(
        "Generating curriculum: skill={:?} level={:?} semesters={:?}",
        request.skill, request.level, request.semesters
    );

    match generate_curriculum(generator, request).await {
        Ok(curriculum) => {
            info!(
                "Rendering curriculum with {} semester entries",
                curriculum.semester_groups.len()
            );
            render_html(&curriculum)
        }
        Err(e) => present(&e),
    }
}

/// Output-region markup for a body that has already been fetched.
pub fn render_response(body: Value) -> String {
    match reconcile(body) {
        Ok(curriculum) => render_html(&curriculum),
        Err(e) => present(&e),
    }
}

/// Normalizes and validates a decoded generator body.
pub fn reconcile(body: Value) -> Result<Curriculum, PipelineError> {
    let candidate = normalize(body)?;
    validate(candidate)
}

async fn generate_curriculum(
    generator: &dyn CurriculumGenerator,
    request: &GenerationRequest,
) -> Result<Curriculum, PipelineError> {
    let body = generator.generate(request).await?;
    reconcile(body)
}
