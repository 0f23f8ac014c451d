//! Role-play context for answer judging
//!
//! The context arrives as a JSON document uploaded next to the audio file.
//! Field names follow the historical wire format, including the lower-case
//! `characteritem` key. All fields are required: a document missing any key
//! is rejected at parse time, before any audio processing or network call.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Everything needed to build the in-character judging prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityContext {
    /// Question the character asked the user
    #[serde(rename = "characterQuestion")]
    pub character_question: String,
    /// Character's display name
    #[serde(rename = "characterName")]
    pub character_name: String,
    /// Character's age
    #[serde(rename = "characterAge")]
    pub character_age: u32,
    /// Character's persona description
    #[serde(rename = "characterProfile")]
    pub character_profile: String,
    /// Item granted when the affinity score is high enough
    #[serde(rename = "characteritem")]
    pub character_item: String,
    /// Description of the user, as the character knows them
    #[serde(rename = "yourProfile")]
    pub your_profile: String,
    /// Sample of the character's speaking tone
    #[serde(rename = "characterTone")]
    pub character_tone: String,
}

impl AffinityContext {
    /// Parse a context document from raw JSON bytes
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDocument` if the bytes are not valid
    /// JSON or any required key is missing.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::InvalidDocument(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_json() -> String {
        serde_json::json!({
            "characterQuestion": "好きな季節は？",
            "characterName": "Aiko",
            "characterAge": 20,
            "characterProfile": "明るい剣士",
            "characteritem": "銀の指輪",
            "yourProfile": "旅人",
            "characterTone": "です・ます調",
        })
        .to_string()
    }

    #[test]
    fn parses_complete_document() {
        let ctx = AffinityContext::from_json(full_json().as_bytes()).unwrap();
        assert_eq!(ctx.character_name, "Aiko");
        assert_eq!(ctx.character_age, 20);
        assert_eq!(ctx.character_item, "銀の指輪");
    }

    #[test]
    fn each_missing_key_is_rejected() {
        let keys = [
            "characterQuestion",
            "characterName",
            "characterAge",
            "characterProfile",
            "characteritem",
            "yourProfile",
            "characterTone",
        ];
        for key in keys {
            let mut doc: serde_json::Value = serde_json::from_str(&full_json()).unwrap();
            doc.as_object_mut().unwrap().remove(key);
            let result = AffinityContext::from_json(doc.to_string().as_bytes());
            assert!(result.is_err(), "expected rejection when {key} is missing");
        }
    }

    #[test]
    fn non_json_bytes_are_rejected() {
        let result = AffinityContext::from_json(b"not json at all");
        assert!(matches!(result, Err(DomainError::InvalidDocument(_))));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let ctx = AffinityContext::from_json(full_json().as_bytes()).unwrap();
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("characterQuestion"));
        assert!(json.contains("characteritem"));
        assert!(json.contains("yourProfile"));
    }
}
