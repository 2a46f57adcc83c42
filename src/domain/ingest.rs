//! Mapping from external records (CSV rows, config documents) onto
//! [`EnsembleRequest`] values.

use log::debug;
use serde::Deserialize;

use crate::domain::error::AppError;
use crate::domain::parse::{
    parse_comma_list, parse_musician_pairs, parse_musician_pairs_comma, parse_role_list,
};
use crate::domain::request::{EnsembleRequest, Musician};

const COL_SONG: &str = "Song name";
const COL_GAME: &str = "Game";
const COL_TRACKS: &str = "OST links";
const COL_LEAD: &str = "Ensemble Lead";
const COL_CURRENT: &str = "Current instruments + members";
const COL_NEEDED: &str = "Needed Instruments";

/// Column headers a batch CSV must carry, in no particular order.
pub const CSV_COLUMNS: [&str; 6] =
    [COL_SONG, COL_GAME, COL_TRACKS, COL_LEAD, COL_CURRENT, COL_NEEDED];

/// Resolved positions of the required CSV columns.
///
/// Columns are located by trimmed header name, so extra columns and
/// reordered sheets both work.
#[derive(Debug, Clone, Copy)]
pub struct CsvColumns {
    song: usize,
    game: usize,
    tracks: usize,
    lead: usize,
    current: usize,
    needed: usize,
}

impl CsvColumns {
    /// Locate every required column in the header row.
    pub fn locate(headers: &csv::StringRecord) -> Result<Self, AppError> {
        Ok(Self {
            song: column_index(headers, COL_SONG)?,
            game: column_index(headers, COL_GAME)?,
            tracks: column_index(headers, COL_TRACKS)?,
            lead: column_index(headers, COL_LEAD)?,
            current: column_index(headers, COL_CURRENT)?,
            needed: column_index(headers, COL_NEEDED)?,
        })
    }

    /// Map one data row onto a request.
    pub fn request_from_row(&self, row: &csv::StringRecord) -> Result<EnsembleRequest, AppError> {
        let lead = cell(row, self.lead, COL_LEAD)?.trim();
        Ok(EnsembleRequest {
            song_title: cell(row, self.song, COL_SONG)?.trim().to_owned(),
            game: cell(row, self.game, COL_GAME)?.trim().to_owned(),
            musicians_needed: parse_role_list(cell(row, self.needed, COL_NEEDED)?),
            current_musicians: parse_musician_pairs(cell(row, self.current, COL_CURRENT)?),
            original_track: cell(row, self.tracks, COL_TRACKS)?.trim().to_owned(),
            other_tracks: Vec::new(),
            thumbnail_url: None,
            user_id: if lead.is_empty() { None } else { Some(lead.to_owned()) },
        })
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, AppError> {
    headers.iter().position(|header| header.trim() == name).ok_or_else(|| {
        AppError::ParseError {
            what: "CSV header".to_string(),
            details: format!("missing column '{name}'"),
        }
    })
}

fn cell<'r>(row: &'r csv::StringRecord, index: usize, name: &str) -> Result<&'r str, AppError> {
    row.get(index).ok_or_else(|| AppError::ParseError {
        what: "CSV row".to_string(),
        details: format!("missing cell for column '{name}'"),
    })
}

/// Config-document form of a request.
///
/// List-valued entries accept either a real sequence (YAML) or a single
/// comma-joined string (`key=value` files and terse YAML).
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigRecord {
    #[serde(default)]
    pub song_title: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub musicians_needed: Option<ListValue>,
    #[serde(default)]
    pub current_musicians: Option<PairsValue>,
    #[serde(default)]
    pub original_track: Option<String>,
    #[serde(default)]
    pub other_tracks: Option<ListValue>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// A sequence of entries, or one comma-joined string of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListValue {
    Items(Vec<String>),
    Joined(String),
}

impl ListValue {
    fn into_items(self) -> Vec<String> {
        match self {
            ListValue::Items(items) => items,
            ListValue::Joined(raw) => parse_comma_list(&raw),
        }
    }
}

/// A sequence of `[role, name]` pairs, or one comma-joined `role: name`
/// string of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PairsValue {
    Pairs(Vec<(String, String)>),
    Joined(String),
}

impl PairsValue {
    fn into_musicians(self) -> Vec<Musician> {
        match self {
            PairsValue::Pairs(pairs) => pairs
                .into_iter()
                .map(|(role, name)| Musician::new(role.trim(), name.trim()))
                .collect(),
            PairsValue::Joined(raw) => parse_musician_pairs_comma(&raw),
        }
    }
}

impl ConfigRecord {
    /// Parse a YAML config document.
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse `key=value` lines. `#` comments and blank lines are skipped;
    /// unknown keys are ignored with a debug log.
    pub fn from_key_values(content: &str) -> Result<Self, AppError> {
        let mut record = ConfigRecord::default();
        for (number, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(AppError::ParseError {
                    what: format!("config line {}", number + 1),
                    details: format!("expected key=value, got '{line}'"),
                });
            };
            let value = value.trim().to_owned();
            match key.trim() {
                "song_title" => record.song_title = Some(value),
                "game" => record.game = Some(value),
                "musicians_needed" => record.musicians_needed = Some(ListValue::Joined(value)),
                "current_musicians" => record.current_musicians = Some(PairsValue::Joined(value)),
                "original_track" => record.original_track = Some(value),
                "other_tracks" => record.other_tracks = Some(ListValue::Joined(value)),
                "thumbnail_url" => record.thumbnail_url = Some(value),
                "user_id" => record.user_id = Some(value),
                unknown => debug!("ignoring unknown config key '{unknown}'"),
            }
        }
        Ok(record)
    }

    /// Convert into a request, splitting any comma-joined list values.
    pub fn into_request(self) -> EnsembleRequest {
        EnsembleRequest {
            song_title: self.song_title.unwrap_or_default(),
            game: self.game.unwrap_or_default(),
            musicians_needed: self.musicians_needed.map(ListValue::into_items).unwrap_or_default(),
            current_musicians: self
                .current_musicians
                .map(PairsValue::into_musicians)
                .unwrap_or_default(),
            original_track: self.original_track.unwrap_or_default(),
            other_tracks: self.other_tracks.map(ListValue::into_items).unwrap_or_default(),
            thumbnail_url: self.thumbnail_url.filter(|url| !url.trim().is_empty()),
            user_id: self.user_id.filter(|user| !user.trim().is_empty()),
        }
    }
}
