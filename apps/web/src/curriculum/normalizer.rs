//! Response Normalizer: reduces any generator body to one candidate value.
//!
//! Shape detection is structural. Precedence: a truthy `error` key wins over
//! everything, then a truthy `curriculum` key, then the body itself.

use serde_json::Value;

use crate::curriculum::models::CurriculumEnvelope;
use crate::curriculum::presenter::PipelineError;
use crate::curriculum::scalar::is_truthy;

/// Classifies a decoded body. Never fails; non-object bodies are `Unwrapped`
/// and left for the validator to reject.
pub fn classify(body: Value) -> CurriculumEnvelope {
    let Value::Object(mut fields) = body else {
        return CurriculumEnvelope::Unwrapped(body);
    };

    if let Some(error) = fields.get("error").filter(|v| is_truthy(v)) {
        return CurriculumEnvelope::Failed {
            error: error.clone(),
        };
    }

    if fields.get("curriculum").is_some_and(is_truthy) {
        if let Some(curriculum) = fields.remove("curriculum") {
            return CurriculumEnvelope::Wrapped { curriculum };
        }
    }

    CurriculumEnvelope::Unwrapped(Value::Object(fields))
}

/// Returns the canonical curriculum candidate, or `GenerationFailed`.
pub fn normalize(body: Value) -> Result<Value, PipelineError> {
    match classify(body) {
        CurriculumEnvelope::Failed { error } => Err(PipelineError::GenerationFailed(error)),
        CurriculumEnvelope::Wrapped { curriculum } => Ok(curriculum),
        CurriculumEnvelope::Unwrapped(candidate) => Ok(candidate),
    }
}
