use std::path::{Component, Path, PathBuf};

use crate::WebServerError;
use crate::reply::Reply;

const INDEX_FILE: &str = "index.html";

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>404 - Not Found</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; margin-top: 100px; }
        h1 { color: #e74c3c; }
    </style>
</head>
<body>
    <h1>404 - Page Not Found</h1>
    <p>The requested file could not be found.</p>
    <a href="/">← Back to Tempora Clock System</a>
</body>
</html>
"#;

/// Where a request path leads.
#[derive(Debug, PartialEq, Eq)]
enum Resolved {
    File(PathBuf),

    /// The path tries to leave the public directory.
    Forbidden,
    NotFound,
}

/// The directory static files are served from.
pub(crate) struct PublicDir {
    root: PathBuf,
}

impl PublicDir {
    pub fn new(path: &Path) -> Result<Self, WebServerError> {
        let root = path
            .canonicalize()
            .map_err(|source| WebServerError::PublicDirMissing {
                path: path.to_owned(),
                source,
            })?;

        if !root.is_dir() {
            return Err(WebServerError::PublicDirNotADirectory(path.to_owned()));
        }

        Ok(Self { root })
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `url_path` is the request path without query string.
    pub fn serve(&self, url_path: &str) -> Reply {
        let path = match self.resolve(url_path) {
            Resolved::File(path) => path,
            Resolved::Forbidden => {
                tempora_log::warn!("403 path: {url_path}");
                return Reply::text(403, "Forbidden");
            }
            Resolved::NotFound => return not_found(url_path),
        };

        match std::fs::read(&path) {
            Ok(bytes) => Reply::new(200, mime_type(&path), bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => not_found(url_path),
            Err(err) => {
                tempora_log::error_once!("Failed to read {path:?}: {err}");
                Reply::text(500, "Server Error")
            }
        }
    }

    fn resolve(&self, url_path: &str) -> Resolved {
        let relative = url_path.trim_start_matches('/');
        let relative = Path::new(if relative.is_empty() {
            INDEX_FILE
        } else {
            relative
        });

        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
        {
            return Resolved::Forbidden;
        }

        let candidate = self.root.join(relative);
        match candidate.canonicalize() {
            // A symlink pointing out of the public directory.
            Ok(real) if !real.starts_with(&self.root) => Resolved::Forbidden,
            Ok(real) if real.is_file() => Resolved::File(real),

            // Unknown routes without a file extension belong to the single-page app.
            _ if relative.extension().is_none() => Resolved::File(self.root.join(INDEX_FILE)),

            Ok(_) => Resolved::NotFound,
            Err(_) => Resolved::File(candidate),
        }
    }
}

fn not_found(url_path: &str) -> Reply {
    tempora_log::warn!("404 path: {url_path}");
    Reply::html(404, NOT_FOUND_PAGE)
}

/// Falls back to `application/octet-stream` for unknown extensions.
fn mime_type(path: &Path) -> &'static str {
    mime_guess2::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public_dir() -> (tempfile::TempDir, PublicDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>Tempora</h1>").unwrap();
        std::fs::write(dir.path().join("style.css"), "body {}").unwrap();
        std::fs::create_dir(dir.path().join("img")).unwrap();
        std::fs::write(dir.path().join("img").join("tower.svg"), "<svg/>").unwrap();
        std::fs::write(dir.path().join("notes.xyzzy"), "?").unwrap();

        let public = PublicDir::new(dir.path()).unwrap();
        (dir, public)
    }

    #[test]
    fn test_resolve() {
        let (_dir, public) = public_dir();
        let root = public.root().to_owned();

        assert_eq!(public.resolve("/"), Resolved::File(root.join("index.html")));
        assert_eq!(public.resolve("/style.css"), Resolved::File(root.join("style.css")));
        assert_eq!(
            public.resolve("/img/tower.svg"),
            Resolved::File(root.join("img").join("tower.svg"))
        );

        // Single-page-app fallback.
        assert_eq!(public.resolve("/dashboard"), Resolved::File(root.join("index.html")));
        assert_eq!(public.resolve("/img"), Resolved::File(root.join("index.html")));

        assert_eq!(public.resolve("/missing.js"), Resolved::File(root.join("missing.js")));
    }

    #[test]
    fn test_traversal_is_forbidden() {
        let (_dir, public) = public_dir();
        for path in ["/../secret.txt", "/img/../../secret.txt", "/..", "/./../x"] {
            assert_eq!(public.resolve(path), Resolved::Forbidden, "{path}");
        }
    }

    #[test]
    fn test_serve() {
        let (_dir, public) = public_dir();

        let reply = public.serve("/");
        assert_eq!(reply.status(), 200);
        assert_eq!(reply.content_type(), "text/html");
        assert_eq!(reply.body(), b"<h1>Tempora</h1>");

        assert_eq!(public.serve("/style.css").content_type(), "text/css");
        assert_eq!(public.serve("/img/tower.svg").content_type(), "image/svg+xml");
        assert_eq!(
            public.serve("/notes.xyzzy").content_type(),
            "application/octet-stream"
        );

        let reply = public.serve("/missing.js");
        assert_eq!(reply.status(), 404);
        assert_eq!(reply.content_type(), "text/html");
        assert!(String::from_utf8_lossy(reply.body()).contains("404 - Page Not Found"));

        let reply = public.serve("/../Cargo.toml");
        assert_eq!(reply.status(), 403);
        assert_eq!(reply.body(), b"Forbidden");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_out_of_root_is_forbidden() {
        let (dir, public) = public_dir();
        let outside = tempfile::tempdir().unwrap();
        std::fs::write(outside.path().join("secret.txt"), "hunter2").unwrap();
        std::os::unix::fs::symlink(outside.path().join("secret.txt"), dir.path().join("leak.txt"))
            .unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("elsewhere")).unwrap();

        assert_eq!(public.resolve("/leak.txt"), Resolved::Forbidden);
        assert_eq!(public.resolve("/elsewhere/secret.txt"), Resolved::Forbidden);

        let reply = public.serve("/leak.txt");
        assert_eq!(reply.status(), 403);
        assert_eq!(reply.body(), b"Forbidden");

        // Links that stay inside the root are fine.
        std::os::unix::fs::symlink(dir.path().join("style.css"), dir.path().join("alias.css"))
            .unwrap();
        assert_eq!(public.serve("/alias.css").status(), 200);
    }

    #[test]
    fn test_read_error_is_server_error() {
        let (_dir, public) = public_dir();

        // `index.html` is a file, so `index.html/` fails with "not a directory".
        let reply = public.serve("/index.html/");
        assert_eq!(reply.status(), 500);
        assert_eq!(reply.content_type(), "text/plain");
        assert_eq!(reply.body(), b"Server Error");
    }

    #[test]
    fn test_missing_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            PublicDir::new(&dir.path().join("nope")),
            Err(WebServerError::PublicDirMissing { .. })
        ));

        let file = dir.path().join("index.html");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(
            PublicDir::new(&file),
            Err(WebServerError::PublicDirNotADirectory(path)) if path == file
        ));
    }
}
