//! # Sample Data Seeding
//!
//! Populates every table with synthetic rows in foreign-key order:
//!
//! 1. artists
//! 2. genres and media types
//! 3. albums (each pointing at an artist from step 1)
//! 4. tracks (each pointing at an album, a genre and a media type)
//! 5. playlists
//! 6. playlist/track associations, 5 to 10 distinct tracks per playlist
//!
//! Every step runs in its own transaction. A failing step is rolled back and
//! the remaining steps are skipped; steps already committed stay committed.
//! Nothing is deduplicated, so seeding twice doubles every table.
//!
//! ## Modes
//!
//! - [`SeedMode::Catalog`]: fixed name lists, foreign keys assigned
//!   round-robin
//! - [`SeedMode::Random`]: generated names, foreign keys picked at random

use crate::error::{LibraryError, Result};
use crate::models::{NewAlbum, NewArtist, NewGenre, NewTrack};
use crate::repositories::album::insert_album;
use crate::repositories::artist::insert_artist;
use crate::repositories::genre::insert_genre;
use crate::repositories::media_type::insert_media_type;
use crate::repositories::playlist::{insert_playlist, insert_playlist_track};
use crate::repositories::track::insert_track;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sqlx::{Any, AnyPool, Transaction};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::{error, info, warn};

const CATALOG_ARTISTS: &[&str] = &[
    "The Beatles", "Led Zeppelin", "Pink Floyd", "Queen", "The Rolling Stones",
    "AC/DC", "Metallica", "Nirvana", "Radiohead", "Coldplay",
    "U2", "The Doors", "Jimi Hendrix", "Bob Dylan", "David Bowie",
    "Elton John", "Michael Jackson", "Prince", "Madonna", "Whitney Houston",
];

const CATALOG_ALBUMS: &[&str] = &[
    "Abbey Road", "Let It Be", "Led Zeppelin IV", "Physical Graffiti",
    "The Dark Side of the Moon", "Wish You Were Here", "A Night at the Opera",
    "News of the World", "Sticky Fingers", "Exile on Main St.",
    "Back in Black", "Highway to Hell", "Master of Puppets", "Ride the Lightning",
    "Nevermind", "In Utero", "OK Computer", "Kid A", "Parachutes",
    "A Rush of Blood to the Head",
];

const CATALOG_TRACKS: &[&str] = &[
    "Come Together", "Something", "Dear Prudence", "Norwegian Wood",
    "Blackbird", "While My Guitar Gently Weeps", "Strawberry Fields Forever",
    "Penny Lane", "Revolution", "Lady Madonna",
    "Back in Black", "Highway to Hell", "Shot Down in Flames",
    "What Do You Do for Money Honey", "Whole Lotta Rosie",
    "You Shook Me All Night Long", "Let Me Put My Love Into You",
    "Problem Child", "Rocker", "Hell Ain't a Bad Place to Be",
];

const CATALOG_PLAYLISTS: &[&str] = &[
    "Rock Classics", "80s Metal", "British Invasion", "Grunge Essentials",
    "Pink Floyd Journey", "Queen Anthology", "Beatles Best", "Zeppelin Classics",
    "Nirvana Collection", "Modern Classics", "Progressive Rock", "Hard Rock",
    "Rock Legends", "Greatest Hits", "My Favorites", "Workout Mix",
    "Chill Vibes", "Party Playlist", "Road Trip", "Study Music",
];

const CATALOG_GENRES: &[&str] = &["Rock", "Metal", "Pop", "Blues", "Alternative"];

const CATALOG_MEDIA_TYPES: &[&str] = &["MPEG audio file", "AAC audio file", "WAV audio file"];

const RANDOM_MEDIA_TYPES: &[&str] = &["MP3", "AAC", "WAV"];

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph",
    "Jessica", "Thomas", "Sarah", "Charles", "Karen", "Nina", "Omar", "Yuki",
    "Lucas", "Amara",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris",
];

const WORDS: &[&str] = &[
    "midnight", "river", "electric", "shadow", "golden", "echo", "velvet", "storm",
    "neon", "silver", "wild", "horizon", "ember", "crystal", "thunder", "paper",
    "ocean", "desert", "city", "dream", "fire", "glass", "highway", "mirror",
    "winter", "summer", "ghost", "garden", "signal", "static",
];

const GENRE_COUNT: usize = 5;
const PRICE_CATALOG: RangeInclusive<f64> = 0.99..=1.99;
const PRICE_RANDOM: RangeInclusive<f64> = 0.99..=2.99;
const MILLISECONDS: RangeInclusive<i64> = 180_000..=420_000;
const BYTES: RangeInclusive<i64> = 1_000_000..=9_000_000;

/// Where seeded names and foreign keys come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Fixed name lists, round-robin foreign keys
    Catalog,
    /// Generated names, random foreign keys
    #[default]
    Random,
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedMode::Catalog => f.write_str("catalog"),
            SeedMode::Random => f.write_str("random"),
        }
    }
}

impl FromStr for SeedMode {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" => Ok(SeedMode::Catalog),
            "random" => Ok(SeedMode::Random),
            other => Err(LibraryError::invalid(
                "mode",
                format!("expected 'catalog' or 'random', got '{}'", other),
            )),
        }
    }
}

/// Row counts and behaviour of one seeding run
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub mode: SeedMode,
    pub artists: usize,
    pub albums: usize,
    pub tracks: usize,
    pub playlists: usize,
    /// How many distinct tracks each playlist receives
    pub tracks_per_playlist: RangeInclusive<usize>,
    /// Fixed RNG seed for reproducible runs
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            mode: SeedMode::default(),
            artists: 20,
            albums: 20,
            tracks: 20,
            playlists: 20,
            tracks_per_playlist: 5..=10,
            rng_seed: None,
        }
    }
}

impl SeedConfig {
    pub fn with_mode(mut self, mode: SeedMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.albums > 0 && self.artists == 0 {
            return Err(LibraryError::invalid("artists", "albums need at least one artist"));
        }
        if self.tracks > 0 && self.albums == 0 {
            return Err(LibraryError::invalid("albums", "tracks need at least one album"));
        }
        if self.tracks_per_playlist.is_empty() {
            return Err(LibraryError::invalid(
                "tracks_per_playlist",
                "range cannot be empty",
            ));
        }
        Ok(())
    }
}

/// Rows inserted per table by one seeding run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub artists: usize,
    pub genres: usize,
    pub media_types: usize,
    pub albums: usize,
    pub tracks: usize,
    pub playlists: usize,
    pub playlist_tracks: usize,
}

/// Run the whole seeding procedure against `pool`.
///
/// # Errors
///
/// Returns the first storage error. The failing step is rolled back; earlier
/// steps stay committed.
pub async fn seed(pool: &AnyPool, config: &SeedConfig) -> Result<SeedReport> {
    config.validate()?;

    let rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(mode = %config.mode, seeded = config.rng_seed.is_some(), "Seeding database");

    let mut seeder = Seeder { pool, config, rng };
    let report = seeder.run().await?;

    info!(?report, "Seeding complete");
    Ok(report)
}

struct Seeder<'a> {
    pool: &'a AnyPool,
    config: &'a SeedConfig,
    rng: StdRng,
}

impl Seeder<'_> {
    async fn run(&mut self) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        let artist_ids = self.insert_artists().await?;
        report.artists = artist_ids.len();

        let genre_ids = self.insert_genres().await?;
        report.genres = genre_ids.len();

        let media_type_ids = self.insert_media_types().await?;
        report.media_types = media_type_ids.len();

        let album_ids = self.insert_albums(&artist_ids).await?;
        report.albums = album_ids.len();

        let track_ids = self
            .insert_tracks(&album_ids, &genre_ids, &media_type_ids)
            .await?;
        report.tracks = track_ids.len();

        let playlist_ids = self.insert_playlists().await?;
        report.playlists = playlist_ids.len();

        report.playlist_tracks = self
            .insert_playlist_tracks(&playlist_ids, &track_ids)
            .await?;

        Ok(report)
    }

    async fn insert_artists(&mut self) -> Result<Vec<i64>> {
        let artists: Vec<NewArtist> = (0..self.config.artists)
            .map(|i| NewArtist {
                name: match self.config.mode {
                    SeedMode::Catalog => catalog_name(CATALOG_ARTISTS, i),
                    SeedMode::Random => person_name(&mut self.rng),
                },
            })
            .collect();

        let mut tx = self.pool.begin().await?;
        let result = async {
            let mut ids = Vec::with_capacity(artists.len());
            for artist in &artists {
                ids.push(insert_artist(&mut *tx, artist).await?);
            }
            Ok::<_, LibraryError>(ids)
        }
        .await;
        finish_step(tx, "artists", result).await
    }

    async fn insert_genres(&mut self) -> Result<Vec<i64>> {
        let genres: Vec<NewGenre> = (0..GENRE_COUNT)
            .map(|i| NewGenre {
                name: match self.config.mode {
                    SeedMode::Catalog => catalog_name(CATALOG_GENRES, i),
                    SeedMode::Random => capitalize(pick(&mut self.rng, WORDS)),
                },
            })
            .collect();

        let mut tx = self.pool.begin().await?;
        let result = async {
            let mut ids = Vec::with_capacity(genres.len());
            for genre in &genres {
                ids.push(insert_genre(&mut *tx, genre).await?);
            }
            Ok::<_, LibraryError>(ids)
        }
        .await;
        finish_step(tx, "genres", result).await
    }

    async fn insert_media_types(&mut self) -> Result<Vec<i64>> {
        let names = match self.config.mode {
            SeedMode::Catalog => CATALOG_MEDIA_TYPES,
            SeedMode::Random => RANDOM_MEDIA_TYPES,
        };

        let mut tx = self.pool.begin().await?;
        let result = async {
            let mut ids = Vec::with_capacity(names.len());
            for name in names {
                ids.push(insert_media_type(&mut *tx, name).await?);
            }
            Ok::<_, LibraryError>(ids)
        }
        .await;
        finish_step(tx, "media types", result).await
    }

    async fn insert_albums(&mut self, artist_ids: &[i64]) -> Result<Vec<i64>> {
        let albums: Vec<NewAlbum> = (0..self.config.albums)
            .map(|i| match self.config.mode {
                SeedMode::Catalog => NewAlbum {
                    title: catalog_name(CATALOG_ALBUMS, i),
                    artist_id: round_robin(artist_ids, i),
                },
                SeedMode::Random => NewAlbum {
                    title: title(&mut self.rng, 3),
                    artist_id: pick(&mut self.rng, artist_ids),
                },
            })
            .collect();

        let mut tx = self.pool.begin().await?;
        let result = async {
            let mut ids = Vec::with_capacity(albums.len());
            for album in &albums {
                ids.push(insert_album(&mut *tx, album).await?);
            }
            Ok::<_, LibraryError>(ids)
        }
        .await;
        finish_step(tx, "albums", result).await
    }

    async fn insert_tracks(
        &mut self,
        album_ids: &[i64],
        genre_ids: &[i64],
        media_type_ids: &[i64],
    ) -> Result<Vec<i64>> {
        let tracks: Vec<NewTrack> = (0..self.config.tracks)
            .map(|i| {
                let milliseconds = self.rng.gen_range(MILLISECONDS);
                match self.config.mode {
                    SeedMode::Catalog => NewTrack {
                        name: catalog_name(CATALOG_TRACKS, i),
                        album_id: round_robin(album_ids, i),
                        media_type_id: round_robin(media_type_ids, i),
                        genre_id: round_robin(genre_ids, i),
                        composer: None,
                        milliseconds,
                        bytes: None,
                        unit_price: price(&mut self.rng, PRICE_CATALOG),
                    },
                    SeedMode::Random => NewTrack {
                        name: title(&mut self.rng, 4),
                        album_id: pick(&mut self.rng, album_ids),
                        media_type_id: pick(&mut self.rng, media_type_ids),
                        genre_id: pick(&mut self.rng, genre_ids),
                        composer: Some(person_name(&mut self.rng)),
                        milliseconds,
                        bytes: Some(self.rng.gen_range(BYTES)),
                        unit_price: price(&mut self.rng, PRICE_RANDOM),
                    },
                }
            })
            .collect();

        let mut tx = self.pool.begin().await?;
        let result = async {
            let mut ids = Vec::with_capacity(tracks.len());
            for track in &tracks {
                ids.push(insert_track(&mut *tx, track).await?);
            }
            Ok::<_, LibraryError>(ids)
        }
        .await;
        finish_step(tx, "tracks", result).await
    }

    async fn insert_playlists(&mut self) -> Result<Vec<i64>> {
        let names: Vec<String> = (0..self.config.playlists)
            .map(|i| match self.config.mode {
                SeedMode::Catalog => catalog_name(CATALOG_PLAYLISTS, i),
                SeedMode::Random => format!("{} Playlist", capitalize(pick(&mut self.rng, WORDS))),
            })
            .collect();

        let mut tx = self.pool.begin().await?;
        let result = async {
            let mut ids = Vec::with_capacity(names.len());
            for name in &names {
                ids.push(insert_playlist(&mut *tx, name).await?);
            }
            Ok::<_, LibraryError>(ids)
        }
        .await;
        finish_step(tx, "playlists", result).await
    }

    async fn insert_playlist_tracks(
        &mut self,
        playlist_ids: &[i64],
        track_ids: &[i64],
    ) -> Result<usize> {
        let mut pairs = Vec::new();
        for &playlist_id in playlist_ids {
            let wanted = self
                .rng
                .gen_range(self.config.tracks_per_playlist.clone())
                .min(track_ids.len());
            pairs.extend(
                track_ids
                    .choose_multiple(&mut self.rng, wanted)
                    .map(|&track_id| (playlist_id, track_id)),
            );
        }

        let mut tx = self.pool.begin().await?;
        let result = async {
            for &(playlist_id, track_id) in &pairs {
                insert_playlist_track(&mut *tx, playlist_id, track_id).await?;
            }
            Ok::<_, LibraryError>(pairs.len())
        }
        .await;
        finish_step(tx, "playlist tracks", result).await
    }
}

/// Commit a step on success, roll it back on failure.
async fn finish_step<T>(
    tx: Transaction<'static, Any>,
    step: &str,
    result: Result<T>,
) -> Result<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            info!(step, "Seeding step committed");
            Ok(value)
        }
        Err(e) => {
            error!(step, error = %e, "Seeding step failed, rolling back");
            if let Err(rollback_error) = tx.rollback().await {
                warn!(step, error = %rollback_error, "Rollback failed");
            }
            Err(e)
        }
    }
}

/// Name `i` of a fixed list; names repeat with a numeric suffix past the end.
fn catalog_name(list: &[&str], i: usize) -> String {
    let base = list[i % list.len()];
    match i / list.len() {
        0 => base.to_string(),
        round => format!("{} {}", base, round + 1),
    }
}

fn round_robin(ids: &[i64], i: usize) -> i64 {
    ids[i % ids.len()]
}

/// `values` is never empty once [`SeedConfig::validate`] has passed.
fn pick<T: Copy>(rng: &mut StdRng, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

fn person_name(rng: &mut StdRng) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

fn title(rng: &mut StdRng, words: usize) -> String {
    (0..words)
        .map(|_| capitalize(pick(rng, WORDS)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uniform price in `range`, rounded to cents.
fn price(rng: &mut StdRng, range: RangeInclusive<f64>) -> f64 {
    (rng.gen_range(range) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::repositories::{
        AlbumRepository, ArtistRepository, GenreRepository, MediaTypeRepository,
        PlaylistRepository, SqlAlbumRepository, SqlArtistRepository, SqlGenreRepository,
        SqlMediaTypeRepository, SqlPlaylistRepository, SqlTrackRepository, TrackRepository,
    };
    use sqlx::Executor;

    #[derive(Debug, PartialEq, Eq)]
    struct Counts {
        artists: i64,
        genres: i64,
        media_types: i64,
        albums: i64,
        tracks: i64,
        playlists: i64,
        playlist_tracks: i64,
    }

    async fn counts(pool: &AnyPool) -> Counts {
        let playlists = SqlPlaylistRepository::new(pool.clone());
        Counts {
            artists: SqlArtistRepository::new(pool.clone()).count().await.unwrap(),
            genres: SqlGenreRepository::new(pool.clone()).count().await.unwrap(),
            media_types: SqlMediaTypeRepository::new(pool.clone())
                .count()
                .await
                .unwrap(),
            albums: SqlAlbumRepository::new(pool.clone()).count().await.unwrap(),
            tracks: SqlTrackRepository::new(pool.clone()).count().await.unwrap(),
            playlists: playlists.count().await.unwrap(),
            playlist_tracks: playlists.count_tracks().await.unwrap(),
        }
    }

    #[tokio::test]
    async fn test_seed_populates_expected_counts() {
        let pool = create_test_pool().await.unwrap();
        let report = seed(&pool, &SeedConfig::default().with_rng_seed(7))
            .await
            .unwrap();

        let counts = counts(&pool).await;
        assert_eq!(counts.artists, 20);
        assert_eq!(counts.genres, 5);
        assert_eq!(counts.media_types, 3);
        assert_eq!(counts.albums, 20);
        assert_eq!(counts.tracks, 20);
        assert_eq!(counts.playlists, 20);
        assert!((100..=200).contains(&counts.playlist_tracks));
        assert_eq!(report.playlist_tracks as i64, counts.playlist_tracks);
    }

    #[tokio::test]
    async fn test_catalog_mode_uses_fixed_names_and_round_robin() {
        let pool = create_test_pool().await.unwrap();
        let config = SeedConfig::default()
            .with_mode(SeedMode::Catalog)
            .with_rng_seed(1);
        seed(&pool, &config).await.unwrap();

        let artists = SqlArtistRepository::new(pool.clone()).list(100).await.unwrap();
        let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, CATALOG_ARTISTS);

        let genres = SqlGenreRepository::new(pool.clone()).list(100).await.unwrap();
        assert_eq!(genres[0].name, "Rock");

        let albums = SqlAlbumRepository::new(pool.clone()).list(100).await.unwrap();
        for (album, artist) in albums.iter().zip(&artists) {
            assert_eq!(album.artist_id, artist.artist_id);
        }

        let tracks = SqlTrackRepository::new(pool.clone()).list(100).await.unwrap();
        for track in &tracks {
            assert!(MILLISECONDS.contains(&track.milliseconds));
            assert!(PRICE_CATALOG.contains(&track.unit_price));
            assert!(track.composer.is_none());
        }
    }

    #[tokio::test]
    async fn test_playlists_get_distinct_tracks() {
        let pool = create_test_pool().await.unwrap();
        seed(&pool, &SeedConfig::default().with_rng_seed(42))
            .await
            .unwrap();

        let repo = SqlPlaylistRepository::new(pool.clone());
        for playlist in repo.list(100).await.unwrap() {
            let mut ids = repo.get_track_ids(playlist.playlist_id).await.unwrap();
            assert!((5..=10).contains(&ids.len()));
            let before = ids.len();
            ids.dedup();
            assert_eq!(ids.len(), before, "track ids repeat within a playlist");
        }
    }

    #[tokio::test]
    async fn test_seeding_twice_doubles_rows() {
        let pool = create_test_pool().await.unwrap();
        seed(&pool, &SeedConfig::default()).await.unwrap();
        let first = counts(&pool).await;

        seed(&pool, &SeedConfig::default()).await.unwrap();
        let second = counts(&pool).await;

        assert_eq!(second.artists, first.artists * 2);
        assert_eq!(second.genres, first.genres * 2);
        assert_eq!(second.media_types, first.media_types * 2);
        assert_eq!(second.albums, first.albums * 2);
        assert_eq!(second.tracks, first.tracks * 2);
        assert_eq!(second.playlists, first.playlists * 2);
        assert!((200..=400).contains(&second.playlist_tracks));
    }

    #[tokio::test]
    async fn test_same_rng_seed_is_reproducible() {
        let first = create_test_pool().await.unwrap();
        let second = create_test_pool().await.unwrap();
        let config = SeedConfig::default().with_rng_seed(2024);

        let first_report = seed(&first, &config).await.unwrap();
        let second_report = seed(&second, &config).await.unwrap();
        assert_eq!(first_report, second_report);

        let first_tracks = SqlTrackRepository::new(first).list(100).await.unwrap();
        let second_tracks = SqlTrackRepository::new(second).list(100).await.unwrap();
        assert_eq!(first_tracks, second_tracks);
    }

    #[tokio::test]
    async fn test_failed_step_keeps_earlier_steps_and_stops() {
        let pool = create_test_pool().await.unwrap();
        pool.execute("DROP TABLE PlaylistTrack").await.unwrap();
        pool.execute("DROP TABLE Playlist").await.unwrap();

        let result = seed(&pool, &SeedConfig::default()).await;
        assert!(matches!(result, Err(LibraryError::Database(_))));

        assert_eq!(SqlArtistRepository::new(pool.clone()).count().await.unwrap(), 20);
        assert_eq!(SqlTrackRepository::new(pool.clone()).count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_failed_step_is_rolled_back() {
        let pool = create_test_pool().await.unwrap();
        // Rebuild Track with a CHECK that most generated durations violate,
        // so the step fails after some rows were already written.
        pool.execute("DROP TABLE PlaylistTrack").await.unwrap();
        pool.execute("DROP TABLE Track").await.unwrap();
        pool.execute(
            "CREATE TABLE Track (TrackId INTEGER PRIMARY KEY AUTOINCREMENT, Name TEXT NOT NULL, \
             AlbumId INTEGER NOT NULL, MediaTypeId INTEGER NOT NULL, GenreId INTEGER NOT NULL, \
             Composer TEXT, Milliseconds INTEGER NOT NULL CHECK (Milliseconds < 300000), \
             Bytes INTEGER, UnitPrice NUMERIC(10,2) NOT NULL)",
        )
        .await
        .unwrap();

        let config = SeedConfig {
            tracks: 50,
            ..SeedConfig::default().with_rng_seed(3)
        };
        let result = seed(&pool, &config).await;
        assert!(result.is_err());

        assert_eq!(SqlAlbumRepository::new(pool.clone()).count().await.unwrap(), 20);
        assert_eq!(SqlTrackRepository::new(pool.clone()).count().await.unwrap(), 0);
        assert_eq!(SqlPlaylistRepository::new(pool).count().await.unwrap(), 0);
    }

    #[test]
    fn test_catalog_names_repeat_with_suffix() {
        assert_eq!(catalog_name(CATALOG_GENRES, 0), "Rock");
        assert_eq!(catalog_name(CATALOG_GENRES, 5), "Rock 2");
        assert_eq!(catalog_name(CATALOG_GENRES, 11), "Metal 3");
    }

    #[test]
    fn test_price_rounded_to_cents() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let p = price(&mut rng, PRICE_RANDOM);
            assert!(PRICE_RANDOM.contains(&p));
            assert!(((p * 100.0).round() - p * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_config_validation() {
        let config = SeedConfig {
            artists: 0,
            ..SeedConfig::default()
        };
        assert!(config.validate().is_err());
        assert!("catalog".parse::<SeedMode>().is_ok());
        assert!("faker".parse::<SeedMode>().is_err());
    }
}
