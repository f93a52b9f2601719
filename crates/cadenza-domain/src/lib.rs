// SPDX-License-Identifier: GPL-3.0-or-later
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Natural Keys
// ============================================================================
//
// Every entity is identified by a natural key (mobile number, name, title),
// never by allocation order. The catalog's duplicate detection and its
// association tables all rely on value equality of these keys.

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mobile(pub String);

impl Mobile {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Mobile {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Mobile {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Mobile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistName(pub String);

impl ArtistName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtistName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ArtistName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ArtistName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumTitle(pub String);

impl AlbumTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlbumTitle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AlbumTitle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AlbumTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongTitle(pub String);

impl SongTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SongTitle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SongTitle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for SongTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistTitle(pub String);

impl PlaylistTitle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlaylistTitle {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlaylistTitle {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PlaylistTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Entities
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub mobile: Mobile,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, mobile: impl Into<Mobile>) -> Self {
        Self {
            mobile: mobile.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub name: ArtistName,
    /// Total likes accrued indirectly through likes on this artist's songs.
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

impl Artist {
    pub fn new(name: impl Into<ArtistName>) -> Self {
        Self {
            name: name.into(),
            likes: 0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub title: AlbumTitle,
    /// Owning artist, populated at creation time.
    pub artist: ArtistName,
    pub release_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Album {
    pub fn new(title: impl Into<AlbumTitle>, artist: impl Into<ArtistName>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            artist: artist.into(),
            release_date: now,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub title: SongTitle,
    /// Owning album, populated at creation time.
    pub album: AlbumTitle,
    pub length_secs: u32,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

impl Song {
    pub fn new(
        title: impl Into<SongTitle>,
        album: impl Into<AlbumTitle>,
        length_secs: u32,
    ) -> Self {
        Self {
            title: title.into(),
            album: album.into(),
            length_secs,
            likes: 0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub title: PlaylistTitle,
    /// The user who created the playlist. Exactly one owner per playlist.
    pub creator: Mobile,
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    pub fn new(title: impl Into<PlaylistTitle>, creator: impl Into<Mobile>) -> Self {
        Self {
            title: title.into(),
            creator: creator.into(),
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// Domain Events (lightweight scaffolding)
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DomainEvent<TPayload> {
    pub name: &'static str,
    pub occurred_at: DateTime<Utc>,
    pub payload: TPayload,
}

impl<TPayload> DomainEvent<TPayload> {
    pub fn new(name: &'static str, payload: TPayload) -> Self {
        Self {
            name,
            occurred_at: Utc::now(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegisteredPayload {
    pub mobile: Mobile,
    pub name: String,
}

pub type UserRegistered = DomainEvent<UserRegisteredPayload>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistCreatedPayload {
    pub name: ArtistName,
}

pub type ArtistCreated = DomainEvent<ArtistCreatedPayload>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumCreatedPayload {
    pub title: AlbumTitle,
    pub artist: ArtistName,
}

pub type AlbumCreated = DomainEvent<AlbumCreatedPayload>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongCreatedPayload {
    pub title: SongTitle,
    pub album: AlbumTitle,
    pub length_secs: u32,
}

pub type SongCreated = DomainEvent<SongCreatedPayload>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistCreatedPayload {
    pub title: PlaylistTitle,
    pub creator: Mobile,
    pub song_count: usize,
}

pub type PlaylistCreated = DomainEvent<PlaylistCreatedPayload>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongLikedPayload {
    pub song: SongTitle,
    pub liked_by: Mobile,
    pub song_likes: u64,
    pub credited_artist: ArtistName,
}

pub type SongLiked = DomainEvent<SongLikedPayload>;
