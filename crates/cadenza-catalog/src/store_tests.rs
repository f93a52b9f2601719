// SPDX-License-Identifier: GPL-3.0-or-later

//! Scenario tests for the catalog store: creation idempotence, playlist
//! snapshots, like propagation, and popularity queries.

use cadenza_domain::{AlbumTitle, ArtistName, Mobile, PlaylistTitle, SongTitle};

use crate::error::{CatalogError, EntityKind};
use crate::store::Catalog;

/// One artist, one album, three songs (two of them 180s), two users.
fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.create_artist("Nocturne");
    catalog.create_album("Blue Hour", "Nocturne");
    catalog.create_song("Aurora", "Blue Hour", 180).unwrap();
    catalog.create_song("Umbra", "Blue Hour", 240).unwrap();
    catalog.create_song("Zenith", "Blue Hour", 180).unwrap();
    catalog.create_user("Asha", "111");
    catalog.create_user("Binh", "222");
    catalog
}

// ----------------------------------------------------------------------
// Creation idempotence
// ----------------------------------------------------------------------

#[test]
fn create_user_twice_keeps_one_registration() {
    let mut catalog = Catalog::new();
    catalog.create_user("Asha", "111");
    let again = catalog.create_user("Asha again", "111");
    assert_eq!(again.name, "Asha");
    assert_eq!(catalog.users().len(), 1);
    assert!(catalog.user(&Mobile::from("111")).is_some());
}

#[test]
fn create_artist_twice_keeps_one_entry() {
    let mut catalog = Catalog::new();
    catalog.create_artist("Nocturne");
    catalog.create_artist("Nocturne");
    assert_eq!(catalog.artists().len(), 1);
}

#[test]
fn create_album_twice_keeps_one_entry_and_one_link() {
    let mut catalog = Catalog::new();
    catalog.create_album("Blue Hour", "Nocturne");
    catalog.create_album("Blue Hour", "Nocturne");
    assert_eq!(catalog.albums().len(), 1);
    assert_eq!(catalog.albums_of(&ArtistName::from("Nocturne")).len(), 1);
}

#[test]
fn create_song_twice_keeps_one_entry_and_one_link() {
    let mut catalog = Catalog::new();
    catalog.create_album("Blue Hour", "Nocturne");
    catalog.create_song("Aurora", "Blue Hour", 180).unwrap();
    let again = catalog.create_song("Aurora", "Blue Hour", 180).unwrap();
    assert_eq!(again.length_secs, 180);
    assert_eq!(catalog.songs().len(), 1);
    assert_eq!(catalog.songs_of(&AlbumTitle::from("Blue Hour")).len(), 1);
}

#[test]
fn duplicate_playlist_title_returns_existing() {
    let mut catalog = seeded_catalog();
    catalog.create_playlist_by_length("111", "Mix", 180).unwrap();
    let again = catalog.create_playlist_by_length("222", "Mix", 240).unwrap();
    // the original playlist survives untouched, creator included
    assert_eq!(again.creator, Mobile::from("111"));
    assert_eq!(catalog.playlists().len(), 1);
    assert_eq!(
        catalog.playlist_song_titles(&PlaylistTitle::from("Mix")),
        &[SongTitle::from("Aurora"), SongTitle::from("Zenith")]
    );
}

// ----------------------------------------------------------------------
// Playlist snapshots
// ----------------------------------------------------------------------

#[test]
fn playlist_by_length_selects_exact_matches_in_catalog_order() {
    let mut catalog = seeded_catalog();
    let playlist = catalog.create_playlist_by_length("111", "Mix", 180).unwrap();
    assert_eq!(playlist.creator, Mobile::from("111"));
    let title = PlaylistTitle::from("Mix");
    assert_eq!(
        catalog.playlist_song_titles(&title),
        &[SongTitle::from("Aurora"), SongTitle::from("Zenith")]
    );
    assert_eq!(
        catalog.playlist_listener_mobiles(&title),
        &[Mobile::from("111")]
    );
}

#[test]
fn playlist_by_names_selects_listed_songs_in_catalog_order() {
    let mut catalog = seeded_catalog();
    let wanted = [SongTitle::from("Zenith"), SongTitle::from("Aurora")];
    catalog
        .create_playlist_by_names("111", "Picks", &wanted)
        .unwrap();
    // snapshot follows catalog insertion order, not request order
    assert_eq!(
        catalog.playlist_song_titles(&PlaylistTitle::from("Picks")),
        &[SongTitle::from("Aurora"), SongTitle::from("Zenith")]
    );
}

#[test]
fn playlist_by_names_skips_unknown_titles() {
    let mut catalog = seeded_catalog();
    let wanted = [SongTitle::from("Aurora"), SongTitle::from("NoSuchSong")];
    catalog
        .create_playlist_by_names("111", "Picks", &wanted)
        .unwrap();
    assert_eq!(
        catalog.playlist_song_titles(&PlaylistTitle::from("Picks")),
        &[SongTitle::from("Aurora")]
    );
}

#[test]
fn snapshot_is_fixed_at_creation() {
    let mut catalog = seeded_catalog();
    catalog.create_playlist_by_length("111", "Mix", 180).unwrap();
    catalog.create_song("Later", "Blue Hour", 180).unwrap();
    // a 180s song created afterwards must not appear in the snapshot
    assert_eq!(
        catalog.playlist_song_titles(&PlaylistTitle::from("Mix")),
        &[SongTitle::from("Aurora"), SongTitle::from("Zenith")]
    );
}

#[test]
fn one_user_can_create_many_playlists() {
    let mut catalog = seeded_catalog();
    catalog.create_playlist_by_length("111", "Mix A", 180).unwrap();
    catalog.create_playlist_by_length("111", "Mix B", 240).unwrap();
    let owned = catalog.playlists_of(&Mobile::from("111"));
    assert_eq!(
        owned,
        &[PlaylistTitle::from("Mix A"), PlaylistTitle::from("Mix B")]
    );
    assert_eq!(
        catalog.playlist(&PlaylistTitle::from("Mix A")).unwrap().creator,
        Mobile::from("111")
    );
    assert_eq!(
        catalog.playlist(&PlaylistTitle::from("Mix B")).unwrap().creator,
        Mobile::from("111")
    );
}

// ----------------------------------------------------------------------
// Joining playlists
// ----------------------------------------------------------------------

#[test]
fn join_adds_listener_once() {
    let mut catalog = seeded_catalog();
    catalog.create_playlist_by_length("111", "Mix", 180).unwrap();
    catalog.join_playlist("222", "Mix").unwrap();
    catalog.join_playlist("222", "Mix").unwrap();
    let title = PlaylistTitle::from("Mix");
    assert_eq!(
        catalog.playlist_listener_mobiles(&title),
        &[Mobile::from("111"), Mobile::from("222")]
    );
    assert_eq!(
        catalog.playlists_of(&Mobile::from("222")),
        &[title.clone()]
    );
}

#[test]
fn join_is_noop_for_creator() {
    let mut catalog = seeded_catalog();
    catalog.create_playlist_by_length("111", "Mix", 180).unwrap();
    catalog.join_playlist("111", "Mix").unwrap();
    assert_eq!(
        catalog.playlist_listener_mobiles(&PlaylistTitle::from("Mix")),
        &[Mobile::from("111")]
    );
    assert_eq!(catalog.playlists_of(&Mobile::from("111")).len(), 1);
}

#[test]
fn creator_of_one_playlist_can_join_another() {
    let mut catalog = seeded_catalog();
    catalog.create_playlist_by_length("111", "Mix A", 180).unwrap();
    catalog.create_playlist_by_length("222", "Mix B", 240).unwrap();
    catalog.join_playlist("111", "Mix B").unwrap();
    assert_eq!(
        catalog.playlist_listener_mobiles(&PlaylistTitle::from("Mix B")),
        &[Mobile::from("222"), Mobile::from("111")]
    );
}

#[test]
fn join_fails_for_unknown_user_or_playlist() {
    let mut catalog = seeded_catalog();
    catalog.create_playlist_by_length("111", "Mix", 180).unwrap();
    assert_eq!(
        catalog.join_playlist("999", "Mix").unwrap_err(),
        CatalogError::not_found(EntityKind::User, "999")
    );
    assert_eq!(
        catalog.join_playlist("111", "NoSuchMix").unwrap_err(),
        CatalogError::not_found(EntityKind::Playlist, "NoSuchMix")
    );
}

// ----------------------------------------------------------------------
// Likes
// ----------------------------------------------------------------------

#[test]
fn first_like_credits_song_and_owning_artist() {
    let mut catalog = Catalog::new();
    catalog.create_artist("A");
    catalog.create_album("Al", "A");
    catalog.create_song("S", "Al", 200).unwrap();
    catalog.create_user("U", "111");

    let song = catalog.like_song("111", "S").unwrap();
    assert_eq!(song.likes, 1);
    assert_eq!(catalog.artist(&ArtistName::from("A")).unwrap().likes, 1);
}

#[test]
fn repeated_like_changes_nothing() {
    let mut catalog = seeded_catalog();
    catalog.like_song("111", "Aurora").unwrap();
    let song = catalog.like_song("111", "Aurora").unwrap();
    assert_eq!(song.likes, 1);
    assert_eq!(
        catalog.artist(&ArtistName::from("Nocturne")).unwrap().likes,
        1
    );
    assert_eq!(
        catalog.song_liker_mobiles(&SongTitle::from("Aurora")),
        &[Mobile::from("111")]
    );
}

#[test]
fn artist_accrues_one_like_per_song_per_user() {
    let mut catalog = seeded_catalog();
    catalog.like_song("111", "Aurora").unwrap();
    catalog.like_song("111", "Umbra").unwrap();
    catalog.like_song("222", "Aurora").unwrap();
    assert_eq!(
        catalog.artist(&ArtistName::from("Nocturne")).unwrap().likes,
        3
    );
    assert_eq!(catalog.song(&SongTitle::from("Aurora")).unwrap().likes, 2);
}

#[test]
fn like_fails_for_unknown_user_or_song() {
    let mut catalog = seeded_catalog();
    assert_eq!(
        catalog.like_song("999", "Aurora").unwrap_err(),
        CatalogError::not_found(EntityKind::User, "999")
    );
    assert_eq!(
        catalog.like_song("111", "NoSuchSong").unwrap_err(),
        CatalogError::not_found(EntityKind::Song, "NoSuchSong")
    );
    // failed lookups must leave the counters untouched
    assert_eq!(catalog.song(&SongTitle::from("Aurora")).unwrap().likes, 0);
}

// ----------------------------------------------------------------------
// Popularity
// ----------------------------------------------------------------------

#[test]
fn most_popular_artist_takes_strict_maximum() {
    let mut catalog = Catalog::new();
    catalog.create_album("First", "Alpha");
    catalog.create_album("Second", "Beta");
    catalog.create_song("One", "First", 100).unwrap();
    catalog.create_song("Two", "Second", 100).unwrap();
    catalog.create_song("Three", "Second", 100).unwrap();
    catalog.create_user("U1", "111");
    catalog.create_user("U2", "222");

    catalog.like_song("111", "One").unwrap();
    catalog.like_song("111", "Two").unwrap();
    catalog.like_song("222", "Two").unwrap();

    assert_eq!(catalog.most_popular_artist(), "Beta");
    assert_eq!(catalog.most_popular_song(), "Two");
}

#[test]
fn popularity_tie_goes_to_earliest_created() {
    let mut catalog = Catalog::new();
    catalog.create_album("First", "Alpha");
    catalog.create_album("Second", "Beta");
    catalog.create_song("One", "First", 100).unwrap();
    catalog.create_song("Two", "Second", 100).unwrap();
    catalog.create_user("U1", "111");

    catalog.like_song("111", "Two").unwrap();
    catalog.like_song("111", "One").unwrap();

    // Alpha and Beta both sit at one like; Alpha was created first
    assert_eq!(catalog.most_popular_artist(), "Alpha");
    assert_eq!(catalog.most_popular_song(), "One");
}

#[test]
fn popularity_is_empty_when_no_likes_exist() {
    let mut catalog = seeded_catalog();
    assert_eq!(catalog.most_popular_artist(), "");
    assert_eq!(catalog.most_popular_song(), "");
}

// ----------------------------------------------------------------------
// Failure scenarios from the playlist surface
// ----------------------------------------------------------------------

#[test]
fn playlist_creation_fails_for_unknown_user() {
    let mut catalog = seeded_catalog();
    let wanted = [SongTitle::from("Aurora")];
    assert_eq!(
        catalog
            .create_playlist_by_names("999", "P", &wanted)
            .unwrap_err(),
        CatalogError::not_found(EntityKind::User, "999")
    );
    assert_eq!(
        catalog
            .create_playlist_by_length("999", "P", 180)
            .unwrap_err(),
        CatalogError::not_found(EntityKind::User, "999")
    );
    assert!(catalog.playlists().is_empty());
}
