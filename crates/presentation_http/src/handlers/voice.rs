//! Voice endpoint handlers
//!
//! Both endpoints keep the legacy degrade contract: once a well-formed
//! multipart body arrives, the response is always HTTP 200 and carries
//! whatever partial values the pipeline produced — empty strings when
//! nothing succeeded. Failures are visible in the logs, not in the status
//! code.

use axum::{
    Json,
    extract::{Multipart, State},
};
use domain::AffinityContext;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::state::AppState;
use application::ApplicationError;

/// Response body of `POST /introduce/`
#[derive(Debug, Serialize)]
pub struct IntroduceResponse {
    /// Personality analysis, empty if the pipeline degraded
    pub gpt_answer: String,
}

/// Response body of `POST /answer/`
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    /// Transcript of the user's answer, empty if unavailable
    pub your_answer: String,
    /// In-character reply, empty if the pipeline degraded
    pub gpt_answer: String,
}

/// Handle `POST /introduce/`: spoken self-introduction → personality analysis
#[instrument(skip(state, multipart))]
pub async fn introduce(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Json<IntroduceResponse> {
    let gpt_answer = match run_introduce(&state, multipart).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!(error = %e, "Introduction pipeline degraded to empty answer");
            String::new()
        },
    };

    Json(IntroduceResponse { gpt_answer })
}

async fn run_introduce(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<String, ApplicationError> {
    let audio = read_field(&mut multipart, "file")
        .await?
        .ok_or_else(|| ApplicationError::InvalidOperation("Missing field: file".to_string()))?;

    let report = state.voice_chat.analyze_introduction(audio).await?;
    Ok(report.analysis)
}

/// Handle `POST /answer/`: spoken answer + character context → judged reply
#[instrument(skip(state, multipart))]
pub async fn answer(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Json<AnswerResponse> {
    let (your_answer, gpt_answer) = run_answer(&state, multipart).await;

    Json(AnswerResponse {
        your_answer,
        gpt_answer,
    })
}

async fn run_answer(state: &AppState, mut multipart: Multipart) -> (String, String) {
    let (audio, context_json) = match read_answer_fields(&mut multipart).await {
        Ok(fields) => fields,
        Err(e) => {
            warn!(error = %e, "Answer upload unreadable, degrading to empty response");
            return (String::new(), String::new());
        },
    };

    // Parse the context before any audio work: a malformed document fails
    // fast with no external call.
    let ctx = match AffinityContext::from_json(&context_json) {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(error = %e, "Character context rejected, degrading to empty response");
            return (String::new(), String::new());
        },
    };

    let your_answer = match state.voice_chat.transcribe_spoken(audio).await {
        Ok(transcript) => transcript,
        Err(e) => {
            warn!(error = %e, "Answer audio rejected, degrading to empty response");
            return (String::new(), String::new());
        },
    };

    let gpt_answer = match state.voice_chat.judge_answer(&your_answer, &ctx).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!(error = %e, "Answer judging degraded to empty reply");
            String::new()
        },
    };

    (your_answer, gpt_answer)
}

/// Read the `audio_file` and `json_info_file` parts of an answer upload
async fn read_answer_fields(
    multipart: &mut Multipart,
) -> Result<(Vec<u8>, Vec<u8>), ApplicationError> {
    let mut audio = None;
    let mut context_json = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApplicationError::InvalidOperation(format!("Unreadable multipart body: {e}"))
    })? {
        match field.name() {
            Some("audio_file") => {
                audio = Some(field_bytes(field).await?);
            },
            Some("json_info_file") => {
                context_json = Some(field_bytes(field).await?);
            },
            _ => {},
        }
    }

    match (audio, context_json) {
        (Some(audio), Some(context_json)) => Ok((audio, context_json)),
        (None, _) => Err(ApplicationError::InvalidOperation(
            "Missing field: audio_file".to_string(),
        )),
        (_, None) => Err(ApplicationError::InvalidOperation(
            "Missing field: json_info_file".to_string(),
        )),
    }
}

/// Read a single named multipart field, if present
async fn read_field(
    multipart: &mut Multipart,
    wanted: &str,
) -> Result<Option<Vec<u8>>, ApplicationError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApplicationError::InvalidOperation(format!("Unreadable multipart body: {e}"))
    })? {
        if field.name() == Some(wanted) {
            return Ok(Some(field_bytes(field).await?));
        }
    }
    Ok(None)
}

async fn field_bytes(field: axum::extract::multipart::Field<'_>) -> Result<Vec<u8>, ApplicationError> {
    let name = field.name().unwrap_or("unnamed").to_string();
    field
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| ApplicationError::InvalidOperation(format!("Unreadable field {name}: {e}")))
}
