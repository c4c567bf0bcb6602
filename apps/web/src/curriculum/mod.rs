// Curriculum request/response reconciliation and rendering.
// All generator calls go through generator_client; nothing here speaks HTTP
// to the generator directly.

pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod page;
pub mod pipeline;
pub mod presenter;
pub mod renderer;
pub mod scalar;
pub mod validator;

#[cfg(test)]
mod log_capture;
