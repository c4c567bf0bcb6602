//! Curriculum Validator: the single structural gate before rendering.
//!
//! Only the top-level `courses` array is required. Everything below it is
//! tolerated and handled by display fallbacks.

use serde_json::Value;
use tracing::error;

use crate::curriculum::models::Curriculum;
use crate::curriculum::presenter::PipelineError;

pub fn validate(candidate: Value) -> Result<Curriculum, PipelineError> {
    if !candidate.get("courses").is_some_and(Value::is_array) {
        error!("Invalid structure: {candidate}");
        return Err(PipelineError::MalformedCurriculum(candidate));
    }

    // Entries are decoded leniently, so this only fails on a value that is
    // not an object, which the check above already excludes.
    serde_json::from_value::<Curriculum>(candidate.clone()).map_err(|e| {
        error!("Invalid structure ({e}): {candidate}");
        PipelineError::MalformedCurriculum(candidate)
    })
}
