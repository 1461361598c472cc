//! Media reference resolution
//!
//! A book's stored cover reference is one of:
//! - an absolute URL (`http://`, `https://`, protocol-relative `//`)
//! - an absolute filesystem path under the static root
//! - a bare upload filename, served from `<static_url>/uploads/`
//!
//! Resolution is pure path arithmetic. A reference that cannot be mapped
//! resolves to `None` so the caller renders a placeholder.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

const REMOTE_PREFIXES: [&str; 3] = ["http://", "https://", "//"];

/// Turns stored media references into browser-usable URLs
#[derive(Debug, Clone)]
pub struct MediaResolver {
    static_root: PathBuf,
    static_url: String,
}

impl MediaResolver {
    /// `static_root` is the directory served at `static_url`.
    ///
    /// A relative root is anchored at the current working directory.
    pub fn new(static_root: impl AsRef<Path>, static_url: impl AsRef<str>) -> Self {
        let root = static_root.as_ref();
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

        Self {
            static_root: normalize(&root),
            static_url: static_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a stored reference to a URL, or `None` for a placeholder
    ///
    /// A whitespace-only reference counts as empty. Anything else is used
    /// exactly as stored.
    pub fn resolve(&self, reference: Option<&str>) -> Option<String> {
        let reference = reference.filter(|r| !r.trim().is_empty())?;

        if REMOTE_PREFIXES.iter().any(|p| reference.starts_with(p)) {
            return Some(reference.to_string());
        }

        let path = Path::new(reference);
        if path.is_absolute() {
            return self.resolve_absolute(path);
        }

        Some(format!("{}/uploads/{reference}", self.static_url))
    }

    fn resolve_absolute(&self, path: &Path) -> Option<String> {
        let normalized = normalize(path);
        let Ok(relative) = normalized.strip_prefix(&self.static_root) else {
            debug!(path = %path.display(), root = %self.static_root.display(), "media path outside static root");
            return None;
        };

        let segments: Option<Vec<&str>> = relative
            .components()
            .map(|c| match c {
                Component::Normal(s) => s.to_str(),
                _ => None,
            })
            .collect();

        match segments {
            Some(segments) if !segments.is_empty() => {
                Some(format!("{}/{}", self.static_url, segments.join("/")))
            }
            _ => {
                debug!(path = %path.display(), "media path does not name a file under static root");
                None
            }
        }
    }
}

impl Default for MediaResolver {
    fn default() -> Self {
        Self::new("./static", "/static")
    }
}

/// Lexically resolve `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> MediaResolver {
        MediaResolver::new("/srv/app/static", "/static")
    }

    #[test]
    fn test_missing_reference() {
        assert_eq!(resolver().resolve(None), None);
        assert_eq!(resolver().resolve(Some("")), None);
        assert_eq!(resolver().resolve(Some("   ")), None);
    }

    #[test]
    fn test_remote_urls_unchanged() {
        let r = resolver();
        for url in ["https://x.com/a.png", "http://x.com/a.png", "//cdn.x.com/a.png"] {
            assert_eq!(r.resolve(Some(url)).as_deref(), Some(url));
        }
    }

    #[test]
    fn test_remote_url_keeps_surrounding_whitespace() {
        assert_eq!(
            resolver().resolve(Some("https://x.com/a.png ")).as_deref(),
            Some("https://x.com/a.png ")
        );
    }

    #[test]
    fn test_absolute_path_and_filename_agree() {
        let r = resolver();
        let from_path = r.resolve(Some("/srv/app/static/uploads/a.png"));
        let from_name = r.resolve(Some("a.png"));

        assert_eq!(from_path.as_deref(), Some("/static/uploads/a.png"));
        assert_eq!(from_path, from_name);
    }

    #[test]
    fn test_absolute_path_outside_root() {
        let r = resolver();
        assert_eq!(r.resolve(Some("/etc/passwd")), None);
        assert_eq!(r.resolve(Some("/srv/app/static/../secrets/key.pem")), None);
        assert_eq!(r.resolve(Some("/srv/app/static")), None);
    }

    #[test]
    fn test_dot_segments_inside_root() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("/srv/app/static/./covers/../uploads/b.jpg")).as_deref(),
            Some("/static/uploads/b.jpg")
        );
    }

    #[test]
    fn test_filename_is_not_encoded() {
        assert_eq!(
            resolver().resolve(Some("my cover.png")).as_deref(),
            Some("/static/uploads/my cover.png")
        );
    }

    #[test]
    fn test_trailing_slash_on_static_url() {
        let r = MediaResolver::new("/srv/app/static", "https://cdn.example.com/media/");
        assert_eq!(
            r.resolve(Some("a.png")).as_deref(),
            Some("https://cdn.example.com/media/uploads/a.png")
        );
    }
}
