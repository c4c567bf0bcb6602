//! Axum route handlers for the curriculum pages.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use serde_json::Value;

use crate::curriculum::models::GenerationRequest;
use crate::curriculum::page::index_page;
use crate::curriculum::pipeline::{render_response, run_submission};
use crate::curriculum::presenter::present_unreadable_form;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /
///
/// The form with an empty output region.
pub async fn handle_index() -> Html<String> {
    Html(index_page(&GenerationRequest::default(), ""))
}

/// POST /
///
/// Collects the five form fields, runs the generation pipeline and returns
/// the page with its output region replaced. Pipeline failures, and form
/// bodies that cannot be decoded, are part of the page, never an HTTP error.
pub async fn handle_submit(
    State(state): State<AppState>,
    form: Result<Form<GenerationRequest>, FormRejection>,
) -> Html<String> {
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            let output = present_unreadable_form(&rejection.body_text());
            return Html(index_page(&GenerationRequest::default(), &output));
        }
    };

    let output = run_submission(state.generator.as_ref(), &request).await;
    Html(index_page(&request, &output))
}

/// POST /api/v1/render
///
/// Runs normalize → validate → render on a raw generator body and returns
/// only the output-region fragment. Useful for checking a stored response
/// without calling the generator.
pub async fn handle_render(body: String) -> Result<Html<String>, AppError> {
    let body: Value = serde_json::from_str(&body)
        .map_err(|e| AppError::Validation(format!("Body is not valid JSON: {e}")))?;
    Ok(Html(render_response(body)))
}
