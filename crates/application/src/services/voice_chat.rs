//! Voice chat service - Orchestrates the voice → transcript → reply pipeline
//!
//! Composes the speech and chat ports for the two conversation modes:
//! personality analysis of a self-introduction and in-character judging of
//! an answer.
//!
//! Failure policy matches the service's external contract:
//! - an upload that cannot be decoded aborts the pipeline before any
//!   external API call;
//! - a transcription-service failure is absorbed here and yields an empty
//!   transcript (empty means "transcription unavailable"), the pipeline
//!   continues;
//! - chat-completion failures propagate so the HTTP boundary decides how
//!   to degrade.

use std::{fmt, sync::Arc};

use domain::AffinityContext;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{ChatPort, SpeechPort},
    prompts,
};

/// Result of analyzing a spoken self-introduction
#[derive(Debug, Clone)]
pub struct IntroductionReport {
    /// What the user said (empty if transcription was unavailable)
    pub transcript: String,
    /// The model's personality analysis
    pub analysis: String,
}

/// Service for the voice-driven conversation modes
pub struct VoiceChatService {
    speech: Arc<dyn SpeechPort>,
    chat: Arc<dyn ChatPort>,
}

impl fmt::Debug for VoiceChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceChatService").finish_non_exhaustive()
    }
}

impl VoiceChatService {
    /// Create a new voice chat service
    pub fn new(speech: Arc<dyn SpeechPort>, chat: Arc<dyn ChatPort>) -> Self {
        Self { speech, chat }
    }

    /// Transcribe an uploaded audio blob
    ///
    /// A failing transcription service is absorbed: the call logs a warning
    /// and yields an empty string, which callers must read as
    /// "transcription unavailable", not as a valid empty utterance.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` only for failures that precede the
    /// transcription call itself (an undecodable upload, a scratch-file
    /// problem) — those abort the pipeline before any external API is
    /// reached.
    #[instrument(skip(self, audio), fields(audio_size = audio.len()))]
    pub async fn transcribe_spoken(&self, audio: Vec<u8>) -> Result<String, ApplicationError> {
        match self.speech.transcribe_voice(audio).await {
            Ok(result) => {
                debug!(
                    text_len = result.text.len(),
                    language = ?result.language,
                    "Transcription complete"
                );
                Ok(result.text)
            },
            Err(ApplicationError::Transcription(e)) => {
                warn!(error = %e, "Transcription unavailable, continuing with empty transcript");
                Ok(String::new())
            },
            Err(ApplicationError::RateLimited) => {
                warn!("Transcription rate limited, continuing with empty transcript");
                Ok(String::new())
            },
            Err(e) => Err(e),
        }
    }

    /// Analyze a spoken self-introduction
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` if the upload cannot be decoded or the
    /// chat completion fails after its retry policy is exhausted. A failing
    /// transcription service does not fail the call; it yields an empty
    /// transcript.
    #[instrument(skip(self, audio), fields(audio_size = audio.len()))]
    pub async fn analyze_introduction(
        &self,
        audio: Vec<u8>,
    ) -> Result<IntroductionReport, ApplicationError> {
        let transcript = self.transcribe_spoken(audio).await?;

        let messages = prompts::introduction_messages(&transcript);
        let analysis = self.chat.complete(messages).await?;

        debug!(analysis_len = analysis.len(), "Introduction analyzed");

        Ok(IntroductionReport {
            transcript,
            analysis,
        })
    }

    /// Judge a transcribed answer in character
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError` if the chat completion fails after its
    /// retry policy is exhausted.
    #[instrument(skip(self, transcript, ctx), fields(character = %ctx.character_name))]
    pub async fn judge_answer(
        &self,
        transcript: &str,
        ctx: &AffinityContext,
    ) -> Result<String, ApplicationError> {
        let messages = prompts::answer_messages(transcript, ctx);
        let reply = self.chat.complete(messages).await?;

        debug!(reply_len = reply.len(), "Answer judged");

        Ok(reply)
    }
}
