//! The request record every input surface produces and the formatter
//! consumes.

use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;

/// Thumbnail applied when a request carries none.
pub const DEFAULT_THUMBNAIL_URL: &str = "https://png.pngtree.com/png-clipart/20210129/ourmid/pngtree-default-male-avatar-png-image_2811083.jpg";

/// Placeholder shown as the ensemble lead when none was supplied.
pub const DEFAULT_USER_ID: &str = "userID";

/// One filled seat: an instrument or part plus the performer covering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Musician {
    pub role: String,
    pub name: String,
}

impl Musician {
    pub fn new<R: Into<String>, N: Into<String>>(role: R, name: N) -> Self {
        Self { role: role.into(), name: name.into() }
    }
}

/// A single recruitment request, assembled field by field from a CSV row,
/// config file, piped document, or interview, and handed whole to the
/// formatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsembleRequest {
    #[serde(default)]
    pub song_title: String,
    #[serde(default)]
    pub game: String,
    /// Roles still waiting for a performer, in announcement order.
    #[serde(default)]
    pub musicians_needed: Vec<String>,
    /// Seats already filled, in announcement order.
    #[serde(default)]
    pub current_musicians: Vec<Musician>,
    /// Link (or links, as one string) for the track being covered.
    #[serde(default)]
    pub original_track: String,
    /// Supplementary reference links, one entry per line in the output.
    #[serde(default)]
    pub other_tracks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Ensemble lead credited in the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl EnsembleRequest {
    /// Check the required fields, reporting the first one missing.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.song_title.trim().is_empty() {
            return Err(AppError::MissingField("song_title"));
        }
        if self.game.trim().is_empty() {
            return Err(AppError::MissingField("game"));
        }
        if self.original_track.trim().is_empty() {
            return Err(AppError::MissingField("original_track"));
        }
        Ok(())
    }

    /// Thumbnail with the fallback applied; a blank URL counts as absent.
    pub fn resolved_thumbnail(&self) -> &str {
        match self.thumbnail_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_THUMBNAIL_URL,
        }
    }

    /// Ensemble lead with the placeholder fallback applied.
    pub fn resolved_user(&self) -> &str {
        match self.user_id.as_deref() {
            Some(user) if !user.trim().is_empty() => user,
            _ => DEFAULT_USER_ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> EnsembleRequest {
        EnsembleRequest {
            song_title: "Lost in Thoughts All Alone".to_string(),
            game: "Fire Emblem Fates".to_string(),
            original_track: "https://youtu.be/abc123".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_accepts_complete_request() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let request = EnsembleRequest::default();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("song_title")));
    }

    #[test]
    fn validate_treats_whitespace_as_missing() {
        let mut request = complete_request();
        request.game = "   ".to_string();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("game")));
    }

    #[test]
    fn validate_requires_original_track() {
        let mut request = complete_request();
        request.original_track = String::new();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("original_track")));
    }

    #[test]
    fn resolved_thumbnail_falls_back_when_absent_or_blank() {
        let mut request = complete_request();
        assert_eq!(request.resolved_thumbnail(), DEFAULT_THUMBNAIL_URL);

        request.thumbnail_url = Some("  ".to_string());
        assert_eq!(request.resolved_thumbnail(), DEFAULT_THUMBNAIL_URL);

        request.thumbnail_url = Some("https://example.com/cover.png".to_string());
        assert_eq!(request.resolved_thumbnail(), "https://example.com/cover.png");
    }

    #[test]
    fn resolved_user_falls_back_to_placeholder() {
        let mut request = complete_request();
        assert_eq!(request.resolved_user(), DEFAULT_USER_ID);

        request.user_id = Some("conductor_kat".to_string());
        assert_eq!(request.resolved_user(), "conductor_kat");
    }

    #[test]
    fn deserializes_with_all_optional_fields_defaulted() {
        let request: EnsembleRequest =
            serde_json::from_str(r#"{"song_title": "Aria", "game": "Persona 5", "original_track": "url"}"#)
                .unwrap();
        assert!(request.musicians_needed.is_empty());
        assert!(request.current_musicians.is_empty());
        assert!(request.thumbnail_url.is_none());
    }
}
