use crate::foundation::core::TrackId;

/// Convenience result type used across movtrack.
pub type MovtrackResult<T> = Result<T, MovtrackError>;

/// Top-level error taxonomy used by track and container APIs.
#[derive(thiserror::Error, Debug)]
pub enum MovtrackError {
    /// A time scale of zero (or below) made a tick-to-seconds conversion impossible.
    #[error("division guard: time scale must be > 0, got {time_scale}")]
    DivisionGuard {
        /// Offending time scale as reported by the container.
        time_scale: i64,
    },

    /// Frame rate was requested for a zero-length track.
    #[error("undefined frame rate: track duration is zero")]
    UndefinedFrameRate,

    /// The channel layout tag, label or bitmap is not one movtrack understands.
    #[error("unknown channel layout: {0}")]
    UnknownChannelLayout(String),

    /// The track was deleted, or its container was closed.
    #[error("stale track reference: {0}")]
    StaleTrackReference(TrackId),

    /// Invalid user-provided or container data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing container descriptions.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MovtrackError {
    /// Build a [`MovtrackError::UnknownChannelLayout`] value.
    pub fn unknown_layout(msg: impl Into<String>) -> Self {
        Self::UnknownChannelLayout(msg.into())
    }

    /// Build a [`MovtrackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MovtrackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
