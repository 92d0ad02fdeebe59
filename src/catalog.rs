//! Demo catalog shown on the browse page
//!
//! Every collection here is a fixed literal. Nothing is fetched, cached or
//! stored: the constructors build fresh values each time a view model asks.

use std::collections::HashSet;
use std::fmt;

/// Solid sRGB color used for card covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    /// Build a swatch from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Convert to an iced color
    pub fn to_color(self) -> iced::Color {
        iced::Color::from_rgb8(self.r, self.g, self.b)
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Neutral cover used for albums and the last playlist
const PAPER: Swatch = Swatch::from_hex(0xf5f5f5);

/// A curated playlist card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Unique within the playlist collection
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Swatch,
}

/// An album card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Unique within the album collection
    pub id: u32,
    pub artist: &'static str,
    pub genre: &'static str,
    pub accent: Swatch,
}

/// Entries that can be repeated in a keyed list
pub trait Keyed {
    /// Stable repetition key
    fn key(&self) -> u32;
}

impl Keyed for Playlist {
    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for Album {
    fn key(&self) -> u32 {
        self.id
    }
}

/// Featured playlists, in display order
pub fn playlists() -> Vec<Playlist> {
    let playlist = |id: u32, title: &'static str, accent: Swatch| Playlist {
        id,
        title,
        description: "Description of playlist",
        accent,
    };

    vec![
        playlist(1, "Playlist 1", Swatch::from_hex(0x93c5fd)),
        playlist(2, "Playlist 2", Swatch::from_hex(0xffee93)),
        playlist(3, "Playlist 3", Swatch::from_hex(0xffc1c1)),
        playlist(4, "Playlist 4", PAPER),
    ]
}

/// Albums, in display order
pub fn albums() -> Vec<Album> {
    let album = |id: u32, genre: &'static str| Album {
        id,
        artist: "Artist Name",
        genre,
        accent: PAPER,
    };

    vec![
        album(1, "R&B"),
        album(2, "Indie pop"),
        album(3, "Hip hop"),
        album(4, "Electronic"),
        album(5, "R&B"),
        album(6, "Rock"),
    ]
}

/// Check that no two entries of a collection share a repetition key
pub fn ensure_unique_keys<T: Keyed>(
    collection: &'static str,
    items: &[T],
) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.key()) {
            return Err(CatalogError::DuplicateKey {
                collection,
                key: item.key(),
            });
        }
    }
    Ok(())
}

/// Validate every literal collection
pub fn validate() -> Result<(), CatalogError> {
    ensure_unique_keys("playlists", &playlists())?;
    ensure_unique_keys("albums", &albums())?;
    Ok(())
}

/// Malformed literal data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateKey { collection: &'static str, key: u32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateKey { collection, key } => {
                write!(f, "duplicate key {} in {}", key, collection)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_collections_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn playlists_keep_literal_order() {
        let titles: Vec<_> = playlists().iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            ["Playlist 1", "Playlist 2", "Playlist 3", "Playlist 4"]
        );
    }

    #[test]
    fn albums_keep_literal_order() {
        let genres: Vec<_> = albums().iter().map(|a| a.genre).collect();
        assert_eq!(
            genres,
            ["R&B", "Indie pop", "Hip hop", "Electronic", "R&B", "Rock"]
        );
        assert!(albums().iter().all(|a| a.accent == PAPER));
    }

    #[test]
    fn duplicate_keys_are_reported() {
        let mut items = albums();
        items[3].id = 2;

        let err = ensure_unique_keys("albums", &items).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateKey {
                collection: "albums",
                key: 2
            }
        );
        assert_eq!(err.to_string(), "duplicate key 2 in albums");
    }

    #[test]
    fn swatch_formats_as_css_hex() {
        let swatch = Swatch::from_hex(0x93c5fd);
        assert_eq!((swatch.r, swatch.g, swatch.b), (0x93, 0xc5, 0xfd));
        assert_eq!(swatch.to_string(), "#93c5fd");
        assert_eq!(playlists()[1].accent.to_string(), "#ffee93");
    }
}
