// SPDX-License-Identifier: GPL-3.0-or-later

//! The in-memory catalog: single source of truth for users, artists,
//! albums, songs, playlists and the associations between them.
//!
//! Entities live in insertion-ordered collections with a key-to-position
//! index per collection; association tables map natural keys to ordered
//! key lists. Ownership back-references (song -> album, album -> artist)
//! are carried on the entities themselves and populated at creation time,
//! so crediting an artist for a song like is two direct lookups instead of
//! a reverse scan over the forward tables.

use std::collections::HashMap;

use cadenza_domain::{
    Album, AlbumTitle, Artist, ArtistName, Mobile, Playlist, PlaylistTitle, Song, SongTitle, User,
};
use tracing::debug;

use crate::error::{CatalogError, EntityKind, Result};

#[derive(Debug, Default)]
pub struct Catalog {
    users: Vec<User>,
    artists: Vec<Artist>,
    albums: Vec<Album>,
    songs: Vec<Song>,
    playlists: Vec<Playlist>,

    user_index: HashMap<Mobile, usize>,
    artist_index: HashMap<ArtistName, usize>,
    album_index: HashMap<AlbumTitle, usize>,
    song_index: HashMap<SongTitle, usize>,
    playlist_index: HashMap<PlaylistTitle, usize>,

    artist_albums: HashMap<ArtistName, Vec<AlbumTitle>>,
    album_songs: HashMap<AlbumTitle, Vec<SongTitle>>,
    playlist_songs: HashMap<PlaylistTitle, Vec<SongTitle>>,
    playlist_listeners: HashMap<PlaylistTitle, Vec<Mobile>>,
    user_playlists: HashMap<Mobile, Vec<PlaylistTitle>>,
    song_likers: HashMap<SongTitle, Vec<Mobile>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Register a user. Idempotent on mobile number: a second registration
    /// with the same mobile returns the existing user unchanged.
    pub fn create_user(&mut self, name: impl Into<String>, mobile: impl Into<Mobile>) -> &User {
        let mobile = mobile.into();
        if let Some(&idx) = self.user_index.get(&mobile) {
            return &self.users[idx];
        }
        debug!(target: "catalog", user = %mobile, "registering user");
        let idx = self.users.len();
        self.users.push(User::new(name, mobile.clone()));
        self.user_index.insert(mobile, idx);
        &self.users[idx]
    }

    /// Register an artist. Idempotent on name.
    pub fn create_artist(&mut self, name: impl Into<ArtistName>) -> &Artist {
        let idx = self.ensure_artist(name.into());
        &self.artists[idx]
    }

    /// Register an album under the named artist, creating the artist first
    /// if it is not yet known. Idempotent on title.
    pub fn create_album(
        &mut self,
        title: impl Into<AlbumTitle>,
        artist: impl Into<ArtistName>,
    ) -> &Album {
        let title = title.into();
        let artist = artist.into();
        self.ensure_artist(artist.clone());
        if let Some(&idx) = self.album_index.get(&title) {
            return &self.albums[idx];
        }
        debug!(target: "catalog", album = %title, artist = %artist, "creating album");
        let idx = self.albums.len();
        self.albums.push(Album::new(title.clone(), artist.clone()));
        self.album_index.insert(title.clone(), idx);
        self.artist_albums.entry(artist).or_default().push(title);
        &self.albums[idx]
    }

    /// Register a song under an existing album. Fails with
    /// `NotFound(Album)` when no album with that title exists; idempotent
    /// on song title.
    pub fn create_song(
        &mut self,
        title: impl Into<SongTitle>,
        album: impl Into<AlbumTitle>,
        length_secs: u32,
    ) -> Result<&Song> {
        let title = title.into();
        let album = album.into();
        if !self.album_index.contains_key(&album) {
            return Err(CatalogError::not_found(EntityKind::Album, album.0));
        }
        if let Some(&idx) = self.song_index.get(&title) {
            return Ok(&self.songs[idx]);
        }
        debug!(target: "catalog", song = %title, album = %album, "creating song");
        let idx = self.songs.len();
        self.songs.push(Song::new(title.clone(), album.clone(), length_secs));
        self.song_index.insert(title.clone(), idx);
        self.album_songs.entry(album).or_default().push(title);
        Ok(&self.songs[idx])
    }

    /// Create a playlist whose song snapshot is every catalog song with
    /// exactly the given length, in catalog insertion order. The user
    /// becomes creator and sole initial listener. Fails with
    /// `NotFound(User)`; idempotent on title.
    pub fn create_playlist_by_length(
        &mut self,
        mobile: impl Into<Mobile>,
        title: impl Into<PlaylistTitle>,
        length_secs: u32,
    ) -> Result<&Playlist> {
        let mobile = mobile.into();
        let title = title.into();
        if !self.user_index.contains_key(&mobile) {
            return Err(CatalogError::not_found(EntityKind::User, mobile.0));
        }
        if let Some(&idx) = self.playlist_index.get(&title) {
            return Ok(&self.playlists[idx]);
        }
        let snapshot: Vec<SongTitle> = self
            .songs
            .iter()
            .filter(|song| song.length_secs == length_secs)
            .map(|song| song.title.clone())
            .collect();
        let idx = self.register_playlist(title, mobile, snapshot);
        Ok(&self.playlists[idx])
    }

    /// Create a playlist whose song snapshot is every catalog song whose
    /// title appears in `song_titles`, in catalog insertion order. Fails
    /// with `NotFound(User)`; idempotent on title.
    pub fn create_playlist_by_names(
        &mut self,
        mobile: impl Into<Mobile>,
        title: impl Into<PlaylistTitle>,
        song_titles: &[SongTitle],
    ) -> Result<&Playlist> {
        let mobile = mobile.into();
        let title = title.into();
        if !self.user_index.contains_key(&mobile) {
            return Err(CatalogError::not_found(EntityKind::User, mobile.0));
        }
        if let Some(&idx) = self.playlist_index.get(&title) {
            return Ok(&self.playlists[idx]);
        }
        let snapshot: Vec<SongTitle> = self
            .songs
            .iter()
            .filter(|song| song_titles.contains(&song.title))
            .map(|song| song.title.clone())
            .collect();
        let idx = self.register_playlist(title, mobile, snapshot);
        Ok(&self.playlists[idx])
    }

    // ------------------------------------------------------------------
    // Association mutation
    // ------------------------------------------------------------------

    /// Add the user as a listener of the playlist. A no-op when the user
    /// is the playlist's creator or already listens; fails with
    /// `NotFound(User)` or `NotFound(Playlist)`.
    pub fn join_playlist(
        &mut self,
        mobile: impl Into<Mobile>,
        title: impl Into<PlaylistTitle>,
    ) -> Result<&Playlist> {
        let mobile = mobile.into();
        let title = title.into();
        if !self.user_index.contains_key(&mobile) {
            return Err(CatalogError::not_found(EntityKind::User, mobile.0));
        }
        let Some(&idx) = self.playlist_index.get(&title) else {
            return Err(CatalogError::not_found(EntityKind::Playlist, title.0));
        };
        if self.playlists[idx].creator == mobile {
            return Ok(&self.playlists[idx]);
        }
        let listeners = self.playlist_listeners.entry(title.clone()).or_default();
        if !listeners.contains(&mobile) {
            debug!(target: "catalog", playlist = %title, user = %mobile, "listener joined");
            listeners.push(mobile.clone());
            let joined = self.user_playlists.entry(mobile).or_default();
            if !joined.contains(&title) {
                joined.push(title);
            }
        }
        Ok(&self.playlists[idx])
    }

    /// Record a like by the user on the song. The first like per
    /// (user, song) pair increments the song's counter and credits the
    /// song's owning artist with one like; repeated likes change nothing.
    /// Fails with `NotFound(User)` or `NotFound(Song)`.
    pub fn like_song(
        &mut self,
        mobile: impl Into<Mobile>,
        title: impl Into<SongTitle>,
    ) -> Result<&Song> {
        let mobile = mobile.into();
        let title = title.into();
        if !self.user_index.contains_key(&mobile) {
            return Err(CatalogError::not_found(EntityKind::User, mobile.0));
        }
        let Some(&song_idx) = self.song_index.get(&title) else {
            return Err(CatalogError::not_found(EntityKind::Song, title.0));
        };
        let likers = self.song_likers.entry(title.clone()).or_default();
        if likers.contains(&mobile) {
            return Ok(&self.songs[song_idx]);
        }
        likers.push(mobile.clone());
        self.songs[song_idx].likes += 1;
        // Two-hop ownership walk: song -> album -> artist. Both hops were
        // populated at creation, so a missing owner means the tables were
        // tampered with; skip the credit rather than panic.
        let album = self.songs[song_idx].album.clone();
        let owner = self
            .album_index
            .get(&album)
            .map(|&album_idx| self.albums[album_idx].artist.clone());
        if let Some(artist) = owner {
            if let Some(&artist_idx) = self.artist_index.get(&artist) {
                self.artists[artist_idx].likes += 1;
                debug!(
                    target: "catalog",
                    song = %title, user = %mobile, artist = %artist,
                    "song liked, artist credited"
                );
            }
        }
        Ok(&self.songs[song_idx])
    }

    // ------------------------------------------------------------------
    // Aggregate queries
    // ------------------------------------------------------------------

    /// Name of the artist with the strictly highest like count. Ties go to
    /// the artist created earliest; an empty string is returned when no
    /// artist has a positive count.
    pub fn most_popular_artist(&self) -> String {
        let mut best: Option<&Artist> = None;
        for artist in &self.artists {
            if artist.likes > 0 && best.map_or(true, |b| artist.likes > b.likes) {
                best = Some(artist);
            }
        }
        best.map(|artist| artist.name.to_string()).unwrap_or_default()
    }

    /// Title of the song with the strictly highest like count, same tie
    /// and empty-catalog rules as [`Catalog::most_popular_artist`].
    pub fn most_popular_song(&self) -> String {
        let mut best: Option<&Song> = None;
        for song in &self.songs {
            if song.likes > 0 && best.map_or(true, |b| song.likes > b.likes) {
                best = Some(song);
            }
        }
        best.map(|song| song.title.to_string()).unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn user(&self, mobile: &Mobile) -> Option<&User> {
        self.user_index.get(mobile).map(|&idx| &self.users[idx])
    }

    pub fn artist(&self, name: &ArtistName) -> Option<&Artist> {
        self.artist_index.get(name).map(|&idx| &self.artists[idx])
    }

    pub fn album(&self, title: &AlbumTitle) -> Option<&Album> {
        self.album_index.get(title).map(|&idx| &self.albums[idx])
    }

    pub fn song(&self, title: &SongTitle) -> Option<&Song> {
        self.song_index.get(title).map(|&idx| &self.songs[idx])
    }

    pub fn playlist(&self, title: &PlaylistTitle) -> Option<&Playlist> {
        self.playlist_index.get(title).map(|&idx| &self.playlists[idx])
    }

    /// All users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All artists in creation order.
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// All albums in creation order.
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// All songs in catalog insertion order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// All playlists in creation order.
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Album titles under an artist, oldest first.
    pub fn albums_of(&self, artist: &ArtistName) -> &[AlbumTitle] {
        self.artist_albums
            .get(artist)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Song titles under an album, oldest first.
    pub fn songs_of(&self, album: &AlbumTitle) -> &[SongTitle] {
        self.album_songs
            .get(album)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The playlist's song snapshot, fixed at creation.
    pub fn playlist_song_titles(&self, playlist: &PlaylistTitle) -> &[SongTitle] {
        self.playlist_songs
            .get(playlist)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Listeners of the playlist in join order; the creator is first.
    pub fn playlist_listener_mobiles(&self, playlist: &PlaylistTitle) -> &[Mobile] {
        self.playlist_listeners
            .get(playlist)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Playlists the user created or joined, in that order.
    pub fn playlists_of(&self, mobile: &Mobile) -> &[PlaylistTitle] {
        self.user_playlists
            .get(mobile)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Users who have liked the song, in like order.
    pub fn song_liker_mobiles(&self, song: &SongTitle) -> &[Mobile] {
        self.song_likers
            .get(song)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Internal
    // ------------------------------------------------------------------

    fn ensure_artist(&mut self, name: ArtistName) -> usize {
        if let Some(&idx) = self.artist_index.get(&name) {
            return idx;
        }
        debug!(target: "catalog", artist = %name, "creating artist");
        let idx = self.artists.len();
        self.artists.push(Artist::new(name.clone()));
        self.artist_index.insert(name, idx);
        idx
    }

    fn register_playlist(
        &mut self,
        title: PlaylistTitle,
        creator: Mobile,
        snapshot: Vec<SongTitle>,
    ) -> usize {
        debug!(
            target: "catalog",
            playlist = %title, creator = %creator, songs = snapshot.len(),
            "creating playlist"
        );
        let idx = self.playlists.len();
        self.playlists
            .push(Playlist::new(title.clone(), creator.clone()));
        self.playlist_index.insert(title.clone(), idx);
        self.playlist_songs.insert(title.clone(), snapshot);
        self.playlist_listeners
            .insert(title.clone(), vec![creator.clone()]);
        self.user_playlists.entry(creator).or_default().push(title);
        idx
    }
}
