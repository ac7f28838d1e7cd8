//! Placeholder image URL construction.
//!
//! URLs have the shape `<origin>/<width>/<height><ext>` followed by an optional
//! query string. Query parameters always appear in the order `grayscale`,
//! `blur`, `random`.

use std::time::{SystemTime, UNIX_EPOCH};

/// Image service all URLs point at unless an explicit origin is given.
pub const DEFAULT_ORIGIN: &str = "https://picsum.photos";

/// Upper bound accepted by the service for `blur`.
pub const MAX_BLUR: u8 = 10;

/// Display parameters for one placeholder image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub width: u32,
    pub height: u32,
    /// Append a cache-busting `random` token.
    pub randomize: bool,
    pub grayscale: bool,
    /// Blur amount, 1..=10. `None` or `Some(0)` means no blur.
    pub blur: Option<u8>,
    /// File extension including the dot, e.g. `.jpg` or `.webp`.
    pub extension: Option<String>,
}

impl Default for ImageRequest {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            randomize: true,
            grayscale: false,
            blur: None,
            extension: None,
        }
    }
}

impl ImageRequest {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    pub fn grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    /// Sets blur, clamped to `MAX_BLUR`.
    pub fn blur(mut self, blur: u8) -> Self {
        self.blur = Some(blur.min(MAX_BLUR));
        self
    }

    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// URL for this request against [`DEFAULT_ORIGIN`].
    pub fn url(&self) -> String {
        self.url_with_origin(DEFAULT_ORIGIN)
    }

    pub fn url_with_origin(&self, origin: &str) -> String {
        build_image_url_with_origin(
            origin,
            self.width,
            self.height,
            self.randomize,
            self.grayscale,
            self.blur,
            self.extension.as_deref(),
        )
    }
}

/// Builds a placeholder image URL against [`DEFAULT_ORIGIN`].
///
/// ```
/// use imgfetch_core::build_image_url;
///
/// assert_eq!(
///     build_image_url(100, 100, false, true, Some(5), Some(".webp")),
///     "https://picsum.photos/100/100.webp?grayscale&blur=5"
/// );
/// ```
pub fn build_image_url(
    width: u32,
    height: u32,
    randomize: bool,
    grayscale: bool,
    blur: Option<u8>,
    ext: Option<&str>,
) -> String {
    build_image_url_with_origin(DEFAULT_ORIGIN, width, height, randomize, grayscale, blur, ext)
}

/// Same as [`build_image_url`] against an arbitrary origin. A trailing `/` on
/// `origin` is ignored.
///
/// No range checks: width/height of 0 and blur above [`MAX_BLUR`] are emitted
/// as given, and `Some(0)` blur is omitted. Callers enforce the accepted
/// ranges (see [`ImageRequest::blur`] and the CLI value parsers).
pub fn build_image_url_with_origin(
    origin: &str,
    width: u32,
    height: u32,
    randomize: bool,
    grayscale: bool,
    blur: Option<u8>,
    ext: Option<&str>,
) -> String {
    let mut url = format!(
        "{}/{}/{}{}",
        origin.trim_end_matches('/'),
        width,
        height,
        ext.unwrap_or("")
    );

    let mut has_query = false;
    let mut push_param = |url: &mut String, param: &str| {
        url.push(if has_query { '&' } else { '?' });
        url.push_str(param);
        has_query = true;
    };

    if grayscale {
        push_param(&mut url, "grayscale");
    }
    if let Some(blur) = blur.filter(|b| *b > 0) {
        push_param(&mut url, &format!("blur={}", blur));
    }
    if randomize {
        push_param(&mut url, &format!("random={}", cache_busting_token()));
    }

    url
}

/// `round((fraction + unix_seconds) * 1000)` with a pseudo-random fraction in [0, 1).
fn cache_busting_token() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    let fraction: f64 = rand::random();
    ((fraction + now) * 1000.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_token(url: &str) -> u64 {
        let (_, token) = url.split_once("random=").expect("random param");
        token.parse().expect("numeric token")
    }

    #[test]
    fn default_size_without_query() {
        assert_eq!(
            build_image_url(640, 480, false, false, None, None),
            "https://picsum.photos/640/480"
        );
    }

    #[test]
    fn grayscale_blur_and_extension() {
        assert_eq!(
            build_image_url(100, 100, false, true, Some(5), Some(".webp")),
            "https://picsum.photos/100/100.webp?grayscale&blur=5"
        );
    }

    #[test]
    fn plain_path_for_many_sizes() {
        for (w, h) in [(1, 1), (32, 64), (640, 480), (1920, 1080), (5000, 3)] {
            assert_eq!(
                build_image_url(w, h, false, false, None, None),
                format!("https://picsum.photos/{}/{}", w, h)
            );
        }
    }

    #[test]
    fn query_order_is_grayscale_blur_random() {
        let url = build_image_url(200, 300, true, true, Some(3), Some(".jpg"));
        assert!(url.starts_with("https://picsum.photos/200/300.jpg?grayscale&blur=3&random="));
        let g = url.find("grayscale").unwrap();
        let b = url.find("blur=").unwrap();
        let r = url.find("random=").unwrap();
        assert!(g < b && b < r);
    }

    #[test]
    fn blur_only_starts_query() {
        assert_eq!(
            build_image_url(10, 20, false, false, Some(10), None),
            "https://picsum.photos/10/20?blur=10"
        );
    }

    #[test]
    fn zero_blur_is_omitted() {
        assert_eq!(
            build_image_url(10, 20, false, false, Some(0), None),
            "https://picsum.photos/10/20"
        );
    }

    #[test]
    fn out_of_range_values_pass_through() {
        assert_eq!(
            build_image_url(0, 0, false, false, Some(25), None),
            "https://picsum.photos/0/0?blur=25"
        );
    }

    #[test]
    fn random_only_starts_query() {
        let url = build_image_url(640, 480, true, false, None, None);
        assert!(url.starts_with("https://picsum.photos/640/480?random="));
    }

    #[test]
    fn random_token_is_millisecond_timestamp() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let token = random_token(&build_image_url(1, 1, true, false, None, None));
        // fraction adds at most one second on top of the current time.
        assert!(token >= before);
        assert!(token <= before + 2_000);
    }

    #[test]
    fn origin_trailing_slash_is_ignored() {
        assert_eq!(
            build_image_url_with_origin("http://127.0.0.1:8080/", 5, 6, false, false, None, None),
            "http://127.0.0.1:8080/5/6"
        );
    }

    #[test]
    fn request_defaults() {
        let req = ImageRequest::default();
        assert_eq!(req.width, 640);
        assert_eq!(req.height, 480);
        assert!(req.randomize);
        assert!(!req.grayscale);
        assert!(req.blur.is_none());
        assert!(req.extension.is_none());
    }

    #[test]
    fn request_builder_clamps_blur() {
        let req = ImageRequest::new(300, 200)
            .randomize(false)
            .grayscale(true)
            .blur(42)
            .extension(".webp");
        assert_eq!(req.blur, Some(MAX_BLUR));
        assert_eq!(
            req.url(),
            "https://picsum.photos/300/200.webp?grayscale&blur=10"
        );
    }
}
