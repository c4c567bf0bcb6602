//! Error Presenter: one fixed user-facing message per failure class.
//!
//! Diagnostic detail goes to the log only; the page never shows it.

use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::curriculum::renderer::escape_html;
use crate::generator_client::GeneratorError;

pub const GENERATION_FAILED_MESSAGE: &str = "Generation failed. Try again.";
pub const MALFORMED_CURRICULUM_MESSAGE: &str = "No courses found in response.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong. Check console.";

/// Every way a submission can fail. Each one is terminal for its submission.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The generator answered with a truthy `error` field.
    #[error("Generator reported an error: {0}")]
    GenerationFailed(Value),

    /// The normalized body has no `courses` array.
    #[error("Curriculum has no courses sequence: {0}")]
    MalformedCurriculum(Value),

    /// The call failed or the body was not JSON.
    #[error("Transport or parse failure: {0}")]
    Transport(#[from] GeneratorError),
}

impl PipelineError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineError::GenerationFailed(_) => GENERATION_FAILED_MESSAGE,
            PipelineError::MalformedCurriculum(_) => MALFORMED_CURRICULUM_MESSAGE,
            PipelineError::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
        }
    }
}

/// Output region for a submission whose form body could not be decoded.
/// Reported to the user like a transport failure.
pub fn present_unreadable_form(detail: &str) -> String {
    error!("Error: unreadable form submission: {detail}");
    format!("<p>{}</p>", escape_html(TRANSPORT_FAILURE_MESSAGE))
}

/// Renders the replacement content of the output region for a failure.
///
/// Transport failures are recorded here; malformed curricula were already
/// recorded by the validator, which holds the offending value.
pub fn present(err: &PipelineError) -> String {
    match err {
        PipelineError::Transport(e) => error!("Error: {e}"),
        PipelineError::GenerationFailed(detail) => {
            error!("Generator reported failure: {detail}")
        }
        PipelineError::MalformedCurriculum(_) => {}
    }

    format!("<p>{}</p>", escape_html(err.user_message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::curriculum::log_capture::CapturedLogs;

    fn parse_failure() -> PipelineError {
        let err = serde_json::from_str::<Value>("not json").unwrap_err();
        PipelineError::Transport(GeneratorError::Parse(err))
    }

    #[test]
    fn test_each_failure_class_has_its_own_message() {
        assert_eq!(
            PipelineError::GenerationFailed(json!("boom")).user_message(),
            "Generation failed. Try again."
        );
        assert_eq!(
            PipelineError::MalformedCurriculum(json!({})).user_message(),
            "No courses found in response."
        );
        assert_eq!(
            parse_failure().user_message(),
            "Something went wrong. Check console."
        );
    }

    #[test]
    fn test_present_wraps_message_in_single_paragraph() {
        assert_eq!(
            present(&PipelineError::GenerationFailed(json!(true))),
            "<p>Generation failed. Try again.</p>"
        );
        assert_eq!(
            present(&parse_failure()),
            "<p>Something went wrong. Check console.</p>"
        );
    }

    #[test]
    fn test_present_never_leaks_diagnostic_detail() {
        let html = present(&PipelineError::MalformedCurriculum(
            json!({"courses": "secret-detail"}),
        ));
        assert_eq!(html, "<p>No courses found in response.</p>");
        assert!(!html.contains("secret-detail"));
    }

    #[test]
    fn test_transport_failure_logs_error_text() {
        let err = parse_failure();
        let detail = err.to_string();
        let logs = CapturedLogs::default();

        let html = logs.record(|| present(&err));

        assert_eq!(html, "<p>Something went wrong. Check console.</p>");
        let output = logs.contents();
        assert!(output.contains("ERROR"), "missing error record: {output}");
        assert!(
            output.contains("JSON parse error"),
            "error text not logged: {output}"
        );
        assert!(!html.contains(&detail));
    }

    #[test]
    fn test_unreadable_form_logs_detail_and_shows_transport_message() {
        let logs = CapturedLogs::default();

        let html = logs.record(|| present_unreadable_form("duplicate field `skill`"));

        assert_eq!(html, "<p>Something went wrong. Check console.</p>");
        assert!(logs.contents().contains("duplicate field `skill`"));
    }
}
