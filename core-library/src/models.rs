//! Domain models for the music store
//!
//! Row types mirror the Chinook tables column for column. Both the SQL
//! column names and the JSON field names are PascalCase (`ArtistId`,
//! `UnitPrice`, ...), so a row serializes exactly as the table stores it.
//!
//! Request payloads are deserialized into the `*Input` types, where every
//! field is optional. Presence checks happen in `into_new`, which reports
//! every missing field at once.

use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// =============================================================================
// Rows
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Artist {
    pub artist_id: i64,
    pub name: String,
}

/// Album with its owning artist reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Album {
    pub album_id: i64,
    pub title: String,
    pub artist_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Genre {
    pub genre_id: i64,
    pub name: String,
}

/// Encoding of a track file (e.g. "MPEG audio file")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct MediaType {
    pub media_type_id: i64,
    pub name: String,
}

/// Music track with pricing and audio properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Track {
    pub track_id: i64,
    pub name: String,
    pub album_id: i64,
    pub media_type_id: i64,
    pub genre_id: i64,
    pub composer: Option<String>,
    /// Duration in milliseconds
    pub milliseconds: i64,
    /// File size in bytes
    pub bytes: Option<i64>,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Playlist {
    pub playlist_id: i64,
    pub name: String,
}

/// Playlist together with the ids of its associated tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaylistWithTracks {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub track_ids: Vec<i64>,
}

// =============================================================================
// Validated write models
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlbum {
    pub title: String,
    pub artist_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGenre {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTrack {
    pub name: String,
    pub album_id: i64,
    pub media_type_id: i64,
    pub genre_id: i64,
    pub composer: Option<String>,
    pub milliseconds: i64,
    pub bytes: Option<i64>,
    pub unit_price: f64,
}

impl NewTrack {
    /// Validate the numeric invariants of a track
    pub fn validate(&self) -> Result<()> {
        validate_milliseconds(self.milliseconds)?;
        validate_unit_price(self.unit_price)?;
        if let Some(bytes) = self.bytes {
            validate_bytes(bytes)?;
        }
        Ok(())
    }
}

/// Field-by-field track update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackPatch {
    pub name: Option<String>,
    pub album_id: Option<i64>,
    pub media_type_id: Option<i64>,
    pub genre_id: Option<i64>,
    pub composer: Option<String>,
    pub milliseconds: Option<i64>,
    pub bytes: Option<i64>,
    pub unit_price: Option<f64>,
}

impl TrackPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.album_id.is_none()
            && self.media_type_id.is_none()
            && self.genre_id.is_none()
            && self.composer.is_none()
            && self.milliseconds.is_none()
            && self.bytes.is_none()
            && self.unit_price.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(LibraryError::MissingFields {
                fields: TRACK_FIELDS.iter().map(|f| f.to_string()).collect(),
            });
        }
        if let Some(ms) = self.milliseconds {
            validate_milliseconds(ms)?;
        }
        if let Some(price) = self.unit_price {
            validate_unit_price(price)?;
        }
        if let Some(bytes) = self.bytes {
            validate_bytes(bytes)?;
        }
        Ok(())
    }
}

const TRACK_FIELDS: &[&str] = &[
    "Name",
    "AlbumId",
    "MediaTypeId",
    "GenreId",
    "Composer",
    "Milliseconds",
    "Bytes",
    "UnitPrice",
];

fn validate_milliseconds(ms: i64) -> Result<()> {
    if ms <= 0 {
        return Err(LibraryError::invalid(
            "Milliseconds",
            format!("must be greater than 0, got {}", ms),
        ));
    }
    Ok(())
}

fn validate_unit_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(LibraryError::invalid(
            "UnitPrice",
            format!("must be a non-negative number, got {}", price),
        ));
    }
    Ok(())
}

fn validate_bytes(bytes: i64) -> Result<()> {
    if bytes < 0 {
        return Err(LibraryError::invalid("Bytes", "cannot be negative"));
    }
    Ok(())
}

// =============================================================================
// Request payloads
// =============================================================================

/// Collects missing field names while unpacking a payload.
#[derive(Default)]
struct Presence {
    missing: Vec<String>,
}

impl Presence {
    fn text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v),
            _ => {
                self.missing.push(field.to_string());
                None
            }
        }
    }

    fn value<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field.to_string());
        }
        value
    }

    fn finish(self) -> Result<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(LibraryError::MissingFields {
                fields: self.missing,
            })
        }
    }
}

/// Blank strings count as absent in optional fields too.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArtistInput {
    pub name: Option<String>,
}

impl ArtistInput {
    pub fn into_new(self) -> Result<NewArtist> {
        let mut presence = Presence::default();
        let name = presence.text("Name", self.name);
        presence.finish()?;

        Ok(NewArtist {
            name: name.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlbumInput {
    pub title: Option<String>,
    pub artist_id: Option<i64>,
}

impl AlbumInput {
    pub fn into_new(self) -> Result<NewAlbum> {
        let mut presence = Presence::default();
        let title = presence.text("Title", self.title);
        let artist_id = presence.value("ArtistId", self.artist_id);
        presence.finish()?;

        Ok(NewAlbum {
            title: title.unwrap_or_default(),
            artist_id: artist_id.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenreInput {
    pub name: Option<String>,
}

impl GenreInput {
    pub fn into_new(self) -> Result<NewGenre> {
        let mut presence = Presence::default();
        let name = presence.text("Name", self.name);
        presence.finish()?;

        Ok(NewGenre {
            name: name.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackInput {
    pub name: Option<String>,
    pub album_id: Option<i64>,
    pub media_type_id: Option<i64>,
    pub genre_id: Option<i64>,
    pub composer: Option<String>,
    pub milliseconds: Option<i64>,
    pub bytes: Option<i64>,
    pub unit_price: Option<f64>,
}

impl TrackInput {
    /// Unpack a create payload. Composer and Bytes are optional.
    pub fn into_new(self) -> Result<NewTrack> {
        let mut presence = Presence::default();
        let name = presence.text("Name", self.name);
        let album_id = presence.value("AlbumId", self.album_id);
        let media_type_id = presence.value("MediaTypeId", self.media_type_id);
        let genre_id = presence.value("GenreId", self.genre_id);
        let milliseconds = presence.value("Milliseconds", self.milliseconds);
        let unit_price = presence.value("UnitPrice", self.unit_price);
        presence.finish()?;

        let track = NewTrack {
            name: name.unwrap_or_default(),
            album_id: album_id.unwrap_or_default(),
            media_type_id: media_type_id.unwrap_or_default(),
            genre_id: genre_id.unwrap_or_default(),
            composer: non_blank(self.composer),
            milliseconds: milliseconds.unwrap_or_default(),
            bytes: self.bytes,
            unit_price: unit_price.unwrap_or_default(),
        };
        track.validate()?;
        Ok(track)
    }

    /// Unpack an update payload. Only supplied fields end up in the patch.
    pub fn into_patch(self) -> Result<TrackPatch> {
        let patch = TrackPatch {
            name: non_blank(self.name),
            album_id: self.album_id,
            media_type_id: self.media_type_id,
            genre_id: self.genre_id,
            composer: non_blank(self.composer),
            milliseconds: self.milliseconds,
            bytes: self.bytes,
            unit_price: self.unit_price,
        };
        patch.validate()?;
        Ok(patch)
    }
}
