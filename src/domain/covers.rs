//! Cover image URLs.
//!
//! Imported works point at the Open Library covers service. Records created
//! locally draw from a fixed palette of placeholder images.

use rand::Rng;

/// Image used when a work has no cover
pub const NO_COVER_IMAGE: &str = "https://via.placeholder.com/100x150?text=No+Cover";

/// Default image for a freshly opened add form
pub const NEW_BOOK_IMAGE: &str = "https://via.placeholder.com/100x150/4ECDC4/FFFFFF?text=New+Book";

/// Default covers service
pub const DEFAULT_COVERS_BASE: &str = "https://covers.openlibrary.org";

/// Placeholder images cycled through by the list view
pub const IMAGE_PALETTE: [&str; 6] = [
    "https://via.placeholder.com/100x150/FF6B6B/FFFFFF?text=Book+1",
    "https://via.placeholder.com/100x150/4ECDC4/FFFFFF?text=Book+2",
    "https://via.placeholder.com/100x150/45B7D1/FFFFFF?text=Book+3",
    "https://via.placeholder.com/100x150/96CEB4/FFFFFF?text=Book+4",
    "https://via.placeholder.com/100x150/FFEAA7/000000?text=Book+5",
    "https://via.placeholder.com/100x150/DDA0DD/000000?text=Book+6",
];

/// Medium-size cover URL for a cover id, or the no-cover placeholder.
///
/// A cover id of zero counts as missing.
pub fn cover_url(covers_base: &str, cover_id: Option<i64>) -> String {
    match cover_id {
        Some(id) if id != 0 => format!("{}/b/id/{}-M.jpg", covers_base.trim_end_matches('/'), id),
        _ => NO_COVER_IMAGE.to_string(),
    }
}

/// Whether the image is one of the palette entries
pub fn in_palette(image: &str) -> bool {
    IMAGE_PALETTE.contains(&image)
}

/// The palette entry after `current`, wrapping around.
///
/// Anything outside the palette maps to the first entry.
pub fn next_image(current: &str) -> &'static str {
    match IMAGE_PALETTE.iter().position(|i| *i == current) {
        Some(pos) => IMAGE_PALETTE[(pos + 1) % IMAGE_PALETTE.len()],
        None => IMAGE_PALETTE[0],
    }
}

/// A uniformly chosen palette entry
pub fn random_image<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    IMAGE_PALETTE[rng.random_range(0..IMAGE_PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cover_url_with_id() {
        assert_eq!(
            cover_url(DEFAULT_COVERS_BASE, Some(240727)),
            "https://covers.openlibrary.org/b/id/240727-M.jpg"
        );
    }

    #[test]
    fn test_cover_url_missing_or_zero() {
        assert_eq!(cover_url(DEFAULT_COVERS_BASE, None), NO_COVER_IMAGE);
        assert_eq!(cover_url(DEFAULT_COVERS_BASE, Some(0)), NO_COVER_IMAGE);
    }

    #[test]
    fn test_cover_url_trailing_slash() {
        assert_eq!(
            cover_url("http://covers.local/", Some(5)),
            "http://covers.local/b/id/5-M.jpg"
        );
    }

    #[test]
    fn test_next_image_wraps() {
        assert_eq!(next_image(IMAGE_PALETTE[0]), IMAGE_PALETTE[1]);
        assert_eq!(next_image(IMAGE_PALETTE[5]), IMAGE_PALETTE[0]);
    }

    #[test]
    fn test_next_image_outside_palette() {
        assert_eq!(next_image(NO_COVER_IMAGE), IMAGE_PALETTE[0]);
        assert_eq!(next_image(""), IMAGE_PALETTE[0]);
    }

    #[test]
    fn test_random_image_is_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(in_palette(random_image(&mut rng)));
        }
    }
}
