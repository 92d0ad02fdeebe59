//! Inline SVG icons
//!
//! All glyphs share a 24x24 view box, stroke width 2 and round caps/joins.
//! Strokes use `currentColor` so the svg widget style can tint them.

/// House outline
pub const HOME: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M3 9L12 2L21 9V20C21 20.5304 20.7893 21.0391 20.4142 21.4142C20.0391 21.7893 19.5304 22 19 22H5C4.46957 22 3.96086 21.7893 3.58579 21.4142C3.21071 21.0391 3 20.5304 3 20V9Z"/><path d="M9 22V12H15V22"/></svg>"#;

/// Magnifying glass
pub const BROWSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="11" cy="11" r="8"/><path d="M21 21L16.65 16.65"/></svg>"#;

/// Broadcast waves
pub const RADIO: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="2"/><path d="M16.24 7.76A6 6 0 0 1 19.07 19.07A6 6 0 0 1 7.76 16.24M16.24 7.76A6 6 0 0 0 7.76 16.24M16.24 7.76L7.76 16.24"/></svg>"#;

/// Bulleted list
pub const PLAYLISTS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="8" y1="6" x2="21" y2="6"/><line x1="8" y1="12" x2="21" y2="12"/><line x1="8" y1="18" x2="21" y2="18"/><line x1="3" y1="6" x2="3.01" y2="6"/><line x1="3" y1="12" x2="3.01" y2="12"/><line x1="3" y1="18" x2="3.01" y2="18"/></svg>"#;

/// Beamed notes
pub const SONGS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M9 18V5L21 3V16"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/></svg>"#;

/// Smiling face
pub const PERSONALIZED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M8 14S9.5 16 12 16S16 14 16 14"/><line x1="9" y1="9" x2="9.01" y2="9"/><line x1="15" y1="9" x2="15.01" y2="9"/></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 6] = [HOME, BROWSE, RADIO, PLAYLISTS, SONGS, PERSONALIZED];

    #[test]
    fn icons_share_stroke_geometry() {
        for icon in ALL {
            assert!(icon.starts_with("<svg"));
            assert!(icon.ends_with("</svg>"));
            assert!(icon.contains(r#"viewBox="0 0 24 24""#));
            assert!(icon.contains(r#"stroke-width="2""#));
            assert!(icon.contains(r#"stroke-linecap="round""#));
            assert!(icon.contains(r#"stroke-linejoin="round""#));
        }
    }
}
