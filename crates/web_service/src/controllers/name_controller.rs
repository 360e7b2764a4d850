use actix_web::{post, web, HttpResponse};

use crate::dto::{GenerateNameRequest, GenerateNameResponse};
use crate::error::{AppError, Result};
use crate::prompt;
use crate::server::AppState;

/// Configure name-generation routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_name);
}

/// Generate a Wu-Tang name for the submitted real name.
///
/// The provider call is the only suspend point; everything before it is
/// validation and template composition, everything after is trimming and
/// status mapping. Each request is independent and holds no state.
#[post("/generate-name")]
pub async fn generate_name(
    request: web::Json<GenerateNameRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(AppError::NameRequired)?;

    if !state.config.has_api_key() {
        log::error!("Gemini API key is missing");
        return Err(AppError::MissingApiKey);
    }

    // Read fresh each request; template edits take effect immediately.
    let template = prompt::read_template(&state.config.prompt_path)?;
    let composed = prompt::compose(&template, name);

    log::info!("generate-name: input_len={}", name.len());

    let generated = state
        .client
        .generate(&composed)
        .await
        .map_err(|e| {
            log::error!("provider call failed: {e}");
            AppError::from_provider(e)
        })?
        .trim()
        .to_string();

    if generated.is_empty() {
        log::error!("provider returned empty text");
        return Err(AppError::EmptyResponse);
    }

    log::info!("generate-name: ok, output_len={}", generated.len());

    Ok(HttpResponse::Ok().json(GenerateNameResponse {
        generated_name: generated,
    }))
}
