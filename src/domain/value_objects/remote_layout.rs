//! Remote Layout Value Object
//!
//! Where releases, the current pointer and uploaded archives live on a host.

use serde::{Deserialize, Serialize};

pub const DEFAULT_RELEASES_DIR: &str = "/data/web_static/releases";
pub const DEFAULT_CURRENT_LINK: &str = "/data/web_static/current";
pub const DEFAULT_UPLOAD_DIR: &str = "/tmp";

/// Filesystem layout on every remote host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteLayout {
    #[serde(default = "default_releases_dir")]
    pub releases_dir: String,
    #[serde(default = "default_current_link")]
    pub current_link: String,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self {
            releases_dir: default_releases_dir(),
            current_link: default_current_link(),
            upload_dir: default_upload_dir(),
        }
    }
}

fn default_releases_dir() -> String {
    DEFAULT_RELEASES_DIR.to_string()
}

fn default_current_link() -> String {
    DEFAULT_CURRENT_LINK.to_string()
}

fn default_upload_dir() -> String {
    DEFAULT_UPLOAD_DIR.to_string()
}

impl RemoteLayout {
    /// Release directory, always with a trailing slash
    pub fn release_dir(&self, release: &str) -> String {
        format!("{}/{}/", self.releases_dir.trim_end_matches('/'), release)
    }

    /// Directory the archive's top-level folder lands in after extraction
    pub fn nested_dir(&self, release: &str, archive_root: &str) -> String {
        format!("{}{}", self.release_dir(release), archive_root)
    }

    /// Temporary location of the uploaded archive
    pub fn upload_path(&self, file: &str) -> String {
        format!("{}/{}", self.upload_dir.trim_end_matches('/'), file)
    }

    pub fn current_link(&self) -> &str {
        self.current_link.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_web_static_tree() {
        let layout = RemoteLayout::default();
        assert_eq!(
            layout.release_dir("web_static_1"),
            "/data/web_static/releases/web_static_1/"
        );
        assert_eq!(
            layout.nested_dir("web_static_1", "web_static"),
            "/data/web_static/releases/web_static_1/web_static"
        );
        assert_eq!(
            layout.upload_path("web_static_1.tgz"),
            "/tmp/web_static_1.tgz"
        );
        assert_eq!(layout.current_link(), "/data/web_static/current");
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let layout = RemoteLayout {
            releases_dir: "/srv/releases/".to_string(),
            current_link: "/srv/current/".to_string(),
            upload_dir: "/var/tmp/".to_string(),
        };
        assert_eq!(layout.release_dir("r"), "/srv/releases/r/");
        assert_eq!(layout.upload_path("r.tgz"), "/var/tmp/r.tgz");
        assert_eq!(layout.current_link(), "/srv/current");
    }
}
