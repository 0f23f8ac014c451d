//! Types for speech processing

use serde::{Deserialize, Serialize};

/// Result of a speech-to-text transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Detected language (ISO 639-1 code)
    pub language: Option<String>,
    /// Duration of the audio in milliseconds
    pub duration_ms: Option<u64>,
}

impl Transcription {
    /// Create a simple transcription with just text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }

    /// Set the detected language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the duration
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Check if the transcription is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Rewrite every Japanese full stop to "full stop + line break"
///
/// Readability normalization for transcripts: sentences end on their own
/// line. No full stop is lost or duplicated.
#[must_use]
pub fn break_sentences(text: &str) -> String {
    text.replace('。', "。\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_simple_transcription() {
        let transcription = Transcription::new("こんにちは");
        assert_eq!(transcription.text, "こんにちは");
        assert!(transcription.language.is_none());
        assert!(transcription.duration_ms.is_none());
    }

    #[test]
    fn with_language_sets_language() {
        let transcription = Transcription::new("こんにちは").with_language("ja");
        assert_eq!(transcription.language, Some("ja".to_string()));
    }

    #[test]
    fn with_duration_sets_duration() {
        let transcription = Transcription::new("test").with_duration(3500);
        assert_eq!(transcription.duration_ms, Some(3500));
    }

    #[test]
    fn is_empty_for_blank_text() {
        assert!(Transcription::new("").is_empty());
        assert!(Transcription::new("  \n\t ").is_empty());
        assert!(!Transcription::new("声").is_empty());
    }

    #[test]
    fn break_sentences_inserts_newline_after_full_stop() {
        let text = "おはよう。今日は晴れです。";
        assert_eq!(break_sentences(text), "おはよう。\n今日は晴れです。\n");
    }

    #[test]
    fn break_sentences_keeps_full_stop_count() {
        let text = "一。二。三。";
        let broken = break_sentences(text);
        assert_eq!(text.matches('。').count(), broken.matches('。').count());
        // Every full stop is immediately followed by a newline
        assert_eq!(
            broken.matches('。').count(),
            broken.matches("。\n").count()
        );
    }

    #[test]
    fn break_sentences_without_full_stops_is_identity() {
        let text = "句点なしのテキスト";
        assert_eq!(break_sentences(text), text);
    }

    #[test]
    fn break_sentences_on_empty_string() {
        assert_eq!(break_sentences(""), "");
    }
}
