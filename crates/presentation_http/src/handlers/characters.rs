//! Character endpoint handlers

use axum::{Json, extract::State};
use domain::Character;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Response body of `POST /create_character/`
#[derive(Debug, Serialize)]
pub struct CharacterCreated {
    /// Deterministic portrait URL (the image may not exist yet)
    pub image_url: String,
    /// Echo of the character's profile
    pub profile: String,
    /// Echo of the character's item
    pub item: String,
    /// Echo of the character's tone
    pub tone: String,
    /// Echo of the character's question
    pub question: String,
}

/// Response body of `POST /create_character_image/`
#[derive(Debug, Serialize)]
pub struct PortraitCreated {
    /// Public URL of the generated portrait
    pub image_url: String,
}

/// Handle `POST /create_character/`
///
/// Validates and echoes the record with the portrait URL derived from the
/// character name. Calls no external API; the URL is deterministic whether
/// or not the image has been generated.
#[instrument(skip(state, character), fields(name = %character.name))]
pub async fn create_character(
    State(state): State<AppState>,
    Json(character): Json<Character>,
) -> Result<Json<CharacterCreated>, ApiError> {
    character
        .ensure_valid()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let image_url = state
        .config
        .server
        .static_url(&character.portrait_relative_path());

    debug!(image_url = %image_url, "Character defined");

    Ok(Json(CharacterCreated {
        image_url,
        profile: character.profile,
        item: character.item,
        tone: character.tone,
        question: character.question,
    }))
}

/// Handle `POST /create_character_image/`
///
/// Generates the character's portrait and persists it under the static
/// tree. Generation and download failures surface as explicit errors.
#[instrument(skip(state, character), fields(name = %character.name))]
pub async fn create_character_image(
    State(state): State<AppState>,
    Json(character): Json<Character>,
) -> Result<Json<PortraitCreated>, ApiError> {
    character
        .ensure_valid()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let image_url = state.portraits.generate(character).await?;

    Ok(Json(PortraitCreated { image_url }))
}
