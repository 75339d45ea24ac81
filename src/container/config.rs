use crate::foundation::core::MediaType;
use crate::foundation::error::{MovtrackError, MovtrackResult};

/// Defaults applied to tracks created through [`crate::Container::add_track`], and to
/// time scales missing from a JSON container description.
///
/// Deserializable from JSON; missing fields fall back to [`MediaDefaults::default`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MediaDefaults {
    /// Movie-level time scale.
    pub movie_time_scale: i64,
    /// Time scale of new video media.
    pub video_time_scale: i64,
    /// Time scale of new audio media (the sample rate).
    pub audio_time_scale: i64,
    /// Time scale of new text media.
    pub text_time_scale: i64,
    /// Volume of new audio tracks.
    pub audio_volume: f64,
    /// Channel count of new audio tracks.
    pub audio_channels: u32,
}

impl Default for MediaDefaults {
    fn default() -> Self {
        Self {
            movie_time_scale: 600,
            video_time_scale: 600,
            audio_time_scale: 44_100,
            text_time_scale: 600,
            audio_volume: 1.0,
            audio_channels: 2,
        }
    }
}

impl MediaDefaults {
    /// Check that every time scale is positive and the channel count is mono or stereo.
    pub fn validate(&self) -> MovtrackResult<()> {
        for (name, scale) in [
            ("movie_time_scale", self.movie_time_scale),
            ("video_time_scale", self.video_time_scale),
            ("audio_time_scale", self.audio_time_scale),
            ("text_time_scale", self.text_time_scale),
        ] {
            if scale <= 0 {
                return Err(MovtrackError::validation(format!(
                    "{name} must be > 0, got {scale}"
                )));
            }
        }
        if !(1..=2).contains(&self.audio_channels) {
            return Err(MovtrackError::validation(
                "audio_channels must be 1 (mono) or 2 (stereo)",
            ));
        }
        Ok(())
    }

    /// Media time scale for new tracks of `kind`. Other media uses the movie time scale.
    pub fn time_scale_for(&self, kind: MediaType) -> i64 {
        match kind {
            MediaType::Audio => self.audio_time_scale,
            MediaType::Video => self.video_time_scale,
            MediaType::Text => self.text_time_scale,
            MediaType::Other => self.movie_time_scale,
        }
    }

    /// Parse and validate defaults from JSON.
    pub fn from_json_str(s: &str) -> MovtrackResult<Self> {
        let defaults: Self =
            serde_json::from_str(s).map_err(|e| MovtrackError::serde(e.to_string()))?;
        defaults.validate()?;
        Ok(defaults)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/container/config.rs"]
mod tests;
