//! Image URL helpers. TMDB returns image paths like `/kqjL17yufvn9OVLyXYpvtyrFfak.jpg`;
//! these turn them into full CDN URLs.

const ORIGINAL_QUALITY_URL: &str = "https://image.tmdb.org/t/p/original/";
const SIZED_QUALITY_URL: &str = "https://image.tmdb.org/t/p/w";

/// Full URL of the image at its original resolution.
pub fn original_url(path: &str) -> String {
    format!("{}{}", ORIGINAL_QUALITY_URL, path.trim_start_matches('/'))
}

/// Full URL of the image scaled to `width` pixels (e.g. 92, 185, 500, 780).
pub fn sized_url(width: u32, path: &str) -> String {
    format!("{}{}/{}", SIZED_QUALITY_URL, width, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::{original_url, sized_url};

    #[test]
    fn test_image_urls() {
        assert_eq!(
            original_url("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"),
            "https://image.tmdb.org/t/p/original/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
        );
        assert_eq!(
            sized_url(500, "pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"),
            "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
        );
        assert_eq!(
            sized_url(92, "/a.png"),
            "https://image.tmdb.org/t/p/w92/a.png"
        );
    }
}
