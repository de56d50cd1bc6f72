//! Errors surfaced by the string facade.

/// Error type for text operations backed by the internationalization stack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// No transliterator is registered under this id.
    #[error("failed to create transliterator: unknown id {0:?}")]
    UnknownTransliterator(String),

    /// The charset label does not name a known encoding.
    #[error("failed to create converter: unknown encoding {0:?}")]
    UnknownEncoding(String),

    /// The input bytes are not valid in the source encoding.
    #[error("failed to convert to Unicode: input is not valid {encoding}")]
    Malformed { encoding: String },

    /// A character has no representation in the target encoding.
    #[error("failed to convert from Unicode: {character:?} is not representable in {encoding}")]
    Unmappable { encoding: String, character: char },

    /// The active backend lacks the capability.
    #[error("{0} is not available with the degraded text backend")]
    Unavailable(&'static str),

    /// The backend name is not recognized or not compiled in.
    #[error("unknown or unsupported text backend: {0}")]
    UnknownBackend(String),
}

impl TextError {
    /// True when the caller asked for something the library does not know.
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::UnknownTransliterator(_)
                | Self::UnknownEncoding(_)
                | Self::Malformed { .. }
                | Self::Unmappable { .. }
        )
    }
}
