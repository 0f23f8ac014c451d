//! Character entity
//!
//! A character record describes a virtual persona: who it is, how it talks,
//! which item it can grant, and the question it asks the user. The record is
//! created by the client, validated once, and never mutated afterwards. The
//! `name` field doubles as a directory component under the static portrait
//! tree, so it must be safe as a path segment.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A virtual character definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Character {
    /// Display name; also the portrait directory name
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    /// Age in years
    #[validate(range(max = 999))]
    pub age: u32,
    /// Free-form persona description
    #[validate(length(min = 1))]
    pub profile: String,
    /// Item the character grants when sufficiently impressed
    pub item: String,
    /// Sample of the character's speaking tone
    pub tone: String,
    /// Question the character asks the user
    #[validate(length(min = 1))]
    pub question: String,
}

impl Character {
    /// Validate the record, mapping validator output to a domain error
    ///
    /// Beyond the field constraints, the name must be usable as a single
    /// directory component under the portrait tree.
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        self.validate().map_err(DomainError::validation)?;

        if self.name.contains('/') || self.name.contains('\\') || self.name.contains("..") {
            return Err(DomainError::ValidationError(
                "name must not contain path separators".to_string(),
            ));
        }

        Ok(())
    }

    /// Portrait location relative to the static root
    #[must_use]
    pub fn portrait_relative_path(&self) -> String {
        format!("characters/{}/image.png", self.name)
    }
}
