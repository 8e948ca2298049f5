//! Table definitions for the Chinook subset used by the API.
//!
//! Each dialect gets its own statement list; statements are executed one at
//! a time because not every driver accepts several statements per call.
//! `PlaylistTrack` has no uniqueness constraint on the pair.

/// SQL dialect of the connected backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Sqlite,
}

impl Dialect {
    /// Map an `AnyConnection::backend_name()` value to a dialect.
    pub fn from_backend_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mysql" => Some(Dialect::MySql),
            "sqlite" => Some(Dialect::Sqlite),
            _ => None,
        }
    }
}

pub const MYSQL_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS Artist (
        ArtistId INT NOT NULL AUTO_INCREMENT,
        Name NVARCHAR(120) NOT NULL,
        CONSTRAINT PK_Artist PRIMARY KEY (ArtistId)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Album (
        AlbumId INT NOT NULL AUTO_INCREMENT,
        Title NVARCHAR(160) NOT NULL,
        ArtistId INT NOT NULL,
        CONSTRAINT PK_Album PRIMARY KEY (AlbumId),
        CONSTRAINT FK_AlbumArtistId FOREIGN KEY (ArtistId) REFERENCES Artist (ArtistId)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Genre (
        GenreId INT NOT NULL AUTO_INCREMENT,
        Name NVARCHAR(120) NOT NULL,
        CONSTRAINT PK_Genre PRIMARY KEY (GenreId)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS MediaType (
        MediaTypeId INT NOT NULL AUTO_INCREMENT,
        Name NVARCHAR(120) NOT NULL,
        CONSTRAINT PK_MediaType PRIMARY KEY (MediaTypeId)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Track (
        TrackId INT NOT NULL AUTO_INCREMENT,
        Name NVARCHAR(200) NOT NULL,
        AlbumId INT NOT NULL,
        MediaTypeId INT NOT NULL,
        GenreId INT NOT NULL,
        Composer NVARCHAR(220),
        Milliseconds INT NOT NULL,
        Bytes INT,
        UnitPrice NUMERIC(10,2) NOT NULL,
        CONSTRAINT PK_Track PRIMARY KEY (TrackId),
        CONSTRAINT FK_TrackAlbumId FOREIGN KEY (AlbumId) REFERENCES Album (AlbumId),
        CONSTRAINT FK_TrackGenreId FOREIGN KEY (GenreId) REFERENCES Genre (GenreId),
        CONSTRAINT FK_TrackMediaTypeId FOREIGN KEY (MediaTypeId) REFERENCES MediaType (MediaTypeId)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Playlist (
        PlaylistId INT NOT NULL AUTO_INCREMENT,
        Name NVARCHAR(120) NOT NULL,
        CONSTRAINT PK_Playlist PRIMARY KEY (PlaylistId)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS PlaylistTrack (
        PlaylistId INT NOT NULL,
        TrackId INT NOT NULL,
        INDEX IFK_PlaylistTrackPlaylistId (PlaylistId),
        INDEX IFK_PlaylistTrackTrackId (TrackId),
        CONSTRAINT FK_PlaylistTrackPlaylistId FOREIGN KEY (PlaylistId) REFERENCES Playlist (PlaylistId),
        CONSTRAINT FK_PlaylistTrackTrackId FOREIGN KEY (TrackId) REFERENCES Track (TrackId)
    )
    "#,
];

pub const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS Artist (
        ArtistId INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Album (
        AlbumId INTEGER PRIMARY KEY AUTOINCREMENT,
        Title TEXT NOT NULL,
        ArtistId INTEGER NOT NULL REFERENCES Artist (ArtistId)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Genre (
        GenreId INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS MediaType (
        MediaTypeId INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Track (
        TrackId INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        AlbumId INTEGER NOT NULL REFERENCES Album (AlbumId),
        MediaTypeId INTEGER NOT NULL REFERENCES MediaType (MediaTypeId),
        GenreId INTEGER NOT NULL REFERENCES Genre (GenreId),
        Composer TEXT,
        Milliseconds INTEGER NOT NULL,
        Bytes INTEGER,
        UnitPrice NUMERIC(10,2) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Playlist (
        PlaylistId INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS PlaylistTrack (
        PlaylistId INTEGER NOT NULL REFERENCES Playlist (PlaylistId),
        TrackId INTEGER NOT NULL REFERENCES Track (TrackId)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS IFK_PlaylistTrackPlaylistId ON PlaylistTrack (PlaylistId)",
    "CREATE INDEX IF NOT EXISTS IFK_PlaylistTrackTrackId ON PlaylistTrack (TrackId)",
];
