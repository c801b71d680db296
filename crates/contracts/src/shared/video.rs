//! Embeddable player URLs for ad videos.

const ID_LEN: usize = 11;

const MARKERS: &[&str] = &[
    "youtube.com/watch?v=",
    "youtube.com/embed/",
    "youtube.com/shorts/",
    "youtu.be/",
];

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Extracts the 11-character video id from the common YouTube URL forms.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let mut candidates: Vec<usize> = MARKERS
        .iter()
        .flat_map(|marker| url.match_indices(marker).map(|(pos, m)| pos + m.len()))
        .collect();
    candidates.sort_unstable();

    candidates.into_iter().find_map(|start| {
        let rest = &url[start..];
        let id_len: usize = rest
            .chars()
            .take(ID_LEN)
            .take_while(|c| is_id_char(*c))
            .count();
        (id_len == ID_LEN).then(|| &rest[..ID_LEN])
    })
}

/// Autoplaying, muted, looping embed URL for the ad, or `None` when the
/// link is not a recognisable YouTube video.
pub fn youtube_embed_url(url: &str) -> Option<String> {
    let id = youtube_video_id(url)?;
    Some(format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_forms() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ&t=10",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ?si=abc",
        ] {
            assert_eq!(youtube_video_id(url), Some("dQw4w9WgXcQ"), "{}", url);
        }
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            youtube_embed_url("https://youtu.be/dQw4w9WgXcQ").unwrap(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&mute=1&loop=1&playlist=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_unrecognised_links() {
        assert_eq!(youtube_embed_url(""), None);
        assert_eq!(youtube_embed_url("https://vimeo.com/123456"), None);
        assert_eq!(youtube_embed_url("https://youtu.be/short"), None);
        assert_eq!(youtube_embed_url("https://youtu.be/абвгдеёжзий"), None);
    }
}
