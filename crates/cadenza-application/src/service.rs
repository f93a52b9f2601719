// SPDX-License-Identifier: GPL-3.0-or-later

//! Application-level facade over the shared catalog.
//!
//! Each method takes the catalog lock once, performs the whole operation
//! under it, and publishes a domain event when (and only when) the catalog
//! actually changed. Returned entities are clones; the lock never escapes.

use cadenza_catalog::{Result, SharedCatalog};
use cadenza_domain::{
    Album, AlbumCreatedPayload, Artist, ArtistCreatedPayload, DomainEvent, Mobile, Playlist,
    PlaylistCreatedPayload, PlaylistTitle, Song, SongCreatedPayload, SongLikedPayload, SongTitle,
    User, UserRegisteredPayload,
};
use serde::Serialize;

use crate::events::{EventPublisher, InMemoryEventBus};

/// A playlist together with its song snapshot and current listeners.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistSummary {
    pub playlist: Playlist,
    pub songs: Vec<SongTitle>,
    pub listeners: Vec<Mobile>,
}

#[derive(Clone)]
pub struct CatalogService {
    catalog: SharedCatalog,
    events: InMemoryEventBus,
}

impl CatalogService {
    pub fn new(catalog: SharedCatalog, events: InMemoryEventBus) -> Self {
        Self { catalog, events }
    }

    pub fn events(&self) -> &InMemoryEventBus {
        &self.events
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    pub fn create_user(&self, name: &str, mobile: &str) -> User {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let before = catalog.users().len();
        let user = catalog.create_user(name, mobile).clone();
        let created = catalog.users().len() > before;
        drop(catalog);
        if created {
            self.events.publish(&DomainEvent::new(
                "user.registered",
                UserRegisteredPayload {
                    mobile: user.mobile.clone(),
                    name: user.name.clone(),
                },
            ));
        }
        user
    }

    pub fn create_artist(&self, name: &str) -> Artist {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let before = catalog.artists().len();
        let artist = catalog.create_artist(name).clone();
        let created = catalog.artists().len() > before;
        drop(catalog);
        if created {
            self.events.publish(&DomainEvent::new(
                "artist.created",
                ArtistCreatedPayload {
                    name: artist.name.clone(),
                },
            ));
        }
        artist
    }

    pub fn create_album(&self, title: &str, artist: &str) -> Album {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let before = catalog.albums().len();
        let album = catalog.create_album(title, artist).clone();
        let created = catalog.albums().len() > before;
        drop(catalog);
        if created {
            self.events.publish(&DomainEvent::new(
                "album.created",
                AlbumCreatedPayload {
                    title: album.title.clone(),
                    artist: album.artist.clone(),
                },
            ));
        }
        album
    }

    pub fn create_song(&self, title: &str, album: &str, length_secs: u32) -> Result<Song> {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let before = catalog.songs().len();
        let song = catalog.create_song(title, album, length_secs)?.clone();
        let created = catalog.songs().len() > before;
        drop(catalog);
        if created {
            self.events.publish(&DomainEvent::new(
                "song.created",
                SongCreatedPayload {
                    title: song.title.clone(),
                    album: song.album.clone(),
                    length_secs: song.length_secs,
                },
            ));
        }
        Ok(song)
    }

    pub fn create_playlist_by_length(
        &self,
        mobile: &str,
        title: &str,
        length_secs: u32,
    ) -> Result<PlaylistSummary> {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let before = catalog.playlists().len();
        let playlist = catalog
            .create_playlist_by_length(mobile, title, length_secs)?
            .clone();
        let created = catalog.playlists().len() > before;
        let summary = summarize(&catalog, playlist);
        drop(catalog);
        if created {
            self.publish_playlist_created(&summary);
        }
        Ok(summary)
    }

    pub fn create_playlist_by_names(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[SongTitle],
    ) -> Result<PlaylistSummary> {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let before = catalog.playlists().len();
        let playlist = catalog
            .create_playlist_by_names(mobile, title, song_titles)?
            .clone();
        let created = catalog.playlists().len() > before;
        let summary = summarize(&catalog, playlist);
        drop(catalog);
        if created {
            self.publish_playlist_created(&summary);
        }
        Ok(summary)
    }

    // ------------------------------------------------------------------
    // Association mutation
    // ------------------------------------------------------------------

    pub fn join_playlist(&self, mobile: &str, title: &str) -> Result<PlaylistSummary> {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let playlist = catalog.join_playlist(mobile, title)?.clone();
        Ok(summarize(&catalog, playlist))
    }

    pub fn like_song(&self, mobile: &str, title: &str) -> Result<Song> {
        let mut catalog = self.catalog.lock().expect("Failed to acquire lock");
        let key = SongTitle::from(title);
        let before = catalog.song(&key).map(|song| song.likes).unwrap_or(0);
        let song = catalog.like_song(mobile, title)?.clone();
        let credited = catalog
            .album(&song.album)
            .map(|album| album.artist.clone())
            .unwrap_or_else(|| "".into());
        drop(catalog);
        if song.likes > before {
            self.events.publish(&DomainEvent::new(
                "song.liked",
                SongLikedPayload {
                    song: song.title.clone(),
                    liked_by: Mobile::from(mobile),
                    song_likes: song.likes,
                    credited_artist: credited,
                },
            ));
        }
        Ok(song)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn most_popular_artist(&self) -> String {
        self.catalog
            .lock()
            .expect("Failed to acquire lock")
            .most_popular_artist()
    }

    pub fn most_popular_song(&self) -> String {
        self.catalog
            .lock()
            .expect("Failed to acquire lock")
            .most_popular_song()
    }

    pub fn users(&self) -> Vec<User> {
        self.catalog
            .lock()
            .expect("Failed to acquire lock")
            .users()
            .to_vec()
    }

    pub fn artists(&self) -> Vec<Artist> {
        self.catalog
            .lock()
            .expect("Failed to acquire lock")
            .artists()
            .to_vec()
    }

    pub fn albums(&self) -> Vec<Album> {
        self.catalog
            .lock()
            .expect("Failed to acquire lock")
            .albums()
            .to_vec()
    }

    pub fn songs(&self) -> Vec<Song> {
        self.catalog
            .lock()
            .expect("Failed to acquire lock")
            .songs()
            .to_vec()
    }

    pub fn playlists(&self) -> Vec<PlaylistSummary> {
        let catalog = self.catalog.lock().expect("Failed to acquire lock");
        catalog
            .playlists()
            .iter()
            .cloned()
            .map(|playlist| summarize(&catalog, playlist))
            .collect()
    }

    fn publish_playlist_created(&self, summary: &PlaylistSummary) {
        self.events.publish(&DomainEvent::new(
            "playlist.created",
            PlaylistCreatedPayload {
                title: summary.playlist.title.clone(),
                creator: summary.playlist.creator.clone(),
                song_count: summary.songs.len(),
            },
        ));
    }
}

fn summarize(catalog: &cadenza_catalog::Catalog, playlist: Playlist) -> PlaylistSummary {
    let title = PlaylistTitle::from(playlist.title.as_str());
    PlaylistSummary {
        songs: catalog.playlist_song_titles(&title).to_vec(),
        listeners: catalog.playlist_listener_mobiles(&title).to_vec(),
        playlist,
    }
}
