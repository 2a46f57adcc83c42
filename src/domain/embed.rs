//! Advertisement formatter and its rich-embed document form.
//!
//! [`format_with`] turns a validated [`EnsembleRequest`] into the display
//! strings of a recruitment post; [`FormattedPost::document`] arranges those
//! strings into the embed layout a chat platform renders.

use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;
use crate::domain::request::EnsembleRequest;

/// Author line shown above every advertisement.
pub const AUTHOR_LABEL: &str = "Small Ensemble";

/// Accent color applied to every advertisement.
pub const ACCENT_COLOR: u32 = 16733952;

/// Marker rendered after roles still waiting for a performer.
const NEEDED_MARKER: &str = "**_NEEDED_**";

/// How musician seats are grouped into embed fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MusicianLayout {
    /// One `Musicians` field holding filled and open seats together.
    #[default]
    Merged,
    /// Separate `Current Musicians` and `Musicians Needed` fields; a field
    /// whose group is empty is omitted.
    Split,
}

/// How the ensemble lead is referenced in the description line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MentionStyle {
    /// Plain text: `Run by @lead`.
    #[default]
    PlainAt,
    /// Platform mention token: `Run by <@!lead>`.
    Token,
}

/// Formatting knobs covering the historical formatter variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub musician_layout: MusicianLayout,
    pub mention_style: MentionStyle,
}

/// Formatted advertisement, ready for display or document serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedPost {
    pub title: String,
    /// Filled and open seats, one `- role: name` line each.
    pub musicians_section: String,
    /// Original track line plus one line per extra track.
    pub tracks_section: String,
    pub thumbnail_url: String,
    pub author_label: &'static str,
    pub description: String,
    pub accent_color: u32,
    current_text: String,
    needed_text: String,
    layout: MusicianLayout,
}

/// Format a request with the canonical options.
pub fn format(request: &EnsembleRequest) -> Result<FormattedPost, AppError> {
    format_with(request, FormatOptions::default())
}

/// Format a request with explicit layout and mention choices.
///
/// Fails only when [`EnsembleRequest::validate`] does; formatting itself
/// cannot fail, and identical input always yields an identical post.
pub fn format_with(
    request: &EnsembleRequest,
    options: FormatOptions,
) -> Result<FormattedPost, AppError> {
    request.validate()?;

    let current_text = request
        .current_musicians
        .iter()
        .map(|musician| format!("- {}: {}", musician.role, musician.name))
        .collect::<Vec<_>>()
        .join("\n");
    let needed_text = request
        .musicians_needed
        .iter()
        .map(|role| format!("- {role}: {NEEDED_MARKER}"))
        .collect::<Vec<_>>()
        .join("\n");

    // Separator line only when both groups are present.
    let musicians_section = if !current_text.is_empty() && !needed_text.is_empty() {
        format!("{current_text}\n{needed_text}")
    } else {
        format!("{current_text}{needed_text}")
    };

    let mut tracks_section = format!("- Original(s): {}", request.original_track);
    for track in &request.other_tracks {
        tracks_section.push_str("\n- ");
        tracks_section.push_str(track);
    }

    let lead = request.resolved_user();
    let description = match options.mention_style {
        MentionStyle::PlainAt => format!("Run by @{lead}"),
        MentionStyle::Token => format!("Run by <@!{lead}>"),
    };

    Ok(FormattedPost {
        title: format!("{} ~ {}", request.song_title, request.game),
        musicians_section,
        tracks_section,
        thumbnail_url: request.resolved_thumbnail().to_owned(),
        author_label: AUTHOR_LABEL,
        description,
        accent_color: ACCENT_COLOR,
        current_text,
        needed_text,
        layout: options.musician_layout,
    })
}

impl FormattedPost {
    /// Arrange the post into its embed document.
    pub fn document(&self) -> EmbedDocument {
        let mut fields = Vec::new();
        match self.layout {
            MusicianLayout::Merged => {
                fields.push(EmbedField::block("Musicians", &self.musicians_section));
            }
            MusicianLayout::Split => {
                if !self.current_text.is_empty() {
                    fields.push(EmbedField::block("Current Musicians", &self.current_text));
                }
                if !self.needed_text.is_empty() {
                    fields.push(EmbedField::block("Musicians Needed", &self.needed_text));
                }
            }
        }
        fields.push(EmbedField::block("Tracks", &self.tracks_section));

        EmbedDocument {
            fields,
            title: self.title.clone(),
            thumbnail: Thumbnail { url: self.thumbnail_url.clone() },
            author: Author { name: self.author_label.to_owned() },
            description: self.description.clone(),
            color: self.accent_color,
        }
    }

    /// Serialize the embed document; pretty-printed unless `compact`.
    pub fn to_json(&self, compact: bool) -> Result<String, AppError> {
        let document = self.document();
        let json = if compact {
            serde_json::to_string(&document)?
        } else {
            serde_json::to_string_pretty(&document)?
        };
        Ok(json)
    }
}

/// Rich-embed document form of a formatted post. Key order follows
/// declaration order and is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedDocument {
    pub fields: Vec<EmbedField>,
    pub title: String,
    pub thumbnail: Thumbnail,
    pub author: Author,
    pub description: String,
    pub color: u32,
}

/// One named block within an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn block(name: &str, value: &str) -> Self {
        Self { name: name.to_owned(), value: value.to_owned(), inline: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}
