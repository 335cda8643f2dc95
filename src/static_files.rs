// src/static_files.rs
use astra::{Body, Response, ResponseBuilder};
use base64::Engine;
use http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::errors::ServerError;
use crate::responses::ResultResp;

/// Hashed build output lives under this prefix.
pub const ASSETS_PREFIX: &str = "assets/";
pub const INDEX_DOCUMENT: &str = "index.html";

const IMMUTABLE: &str = "public, max-age=31536000, immutable";
const ONE_HOUR: &str = "public, max-age=3600";
const NO_STORE_AGE: &str = "public, max-age=0";
const NO_CACHE: &str = "no-cache";

/// Map a URL path onto a file below `root`.
///
/// Returns `None` for anything that could leave `root`: `..`, backslashes,
/// drive prefixes, NUL bytes, or undecodable percent escapes.
pub fn resolve(root: &Path, url_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(url_path).ok()?;

    let mut path = root.to_path_buf();
    let mut pushed = false;

    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains(|c: char| matches!(c, '\\' | ':' | '\0')) => return None,
            s => {
                path.push(s);
                pushed = true;
            }
        }
    }

    pushed.then_some(path)
}

/// Cache policy for a file, keyed on its path relative to the static root.
pub fn cache_control(relative: &str, production: bool) -> &'static str {
    if relative.starts_with(ASSETS_PREFIX) {
        IMMUTABLE
    } else if relative == INDEX_DOCUMENT {
        NO_CACHE
    } else if production {
        ONE_HOUR
    } else {
        NO_STORE_AGE
    }
}

/// Strong validator: base64url of the first 16 bytes of the SHA-256 digest.
pub fn etag_for(contents: &[u8]) -> String {
    let digest = Sha256::digest(contents);
    format!(
        "\"{}\"",
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..16])
    )
}

/// `If-None-Match` may list several tags, possibly weak, or `*`.
pub fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
    })
}

/// Serve `url_path` from the build directory.
///
/// `Ok(None)` means there is no such file and routing should carry on.
pub fn serve(
    config: &SiteConfig,
    url_path: &str,
    if_none_match: Option<&str>,
) -> Result<Option<Response>, ServerError> {
    let Some(path) = resolve(&config.static_dir, url_path) else {
        return Ok(None);
    };

    // Directories, missing files, paths below a file (ENOTDIR) and names the
    // OS rejects all fall through to the router.
    if !path.is_file() {
        return Ok(None);
    }

    let contents = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let relative = url_path.trim_start_matches('/');
    let cache = cache_control(relative, config.is_production());
    file_response(&path, contents, cache, if_none_match).map(Some)
}

/// The build's `index.html`, for client-side routing. `Ok(None)` when absent.
pub fn serve_index(config: &SiteConfig) -> Result<Option<Response>, ServerError> {
    let path = config.static_dir.join(INDEX_DOCUMENT);
    match fs::read(&path) {
        Ok(contents) => file_response(&path, contents, NO_CACHE, None).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn file_response(
    path: &Path,
    contents: Vec<u8>,
    cache: &'static str,
    if_none_match: Option<&str>,
) -> ResultResp {
    let etag = etag_for(&contents);

    if if_none_match.is_some_and(|inm| etag_matches(inm, &etag)) {
        return ResponseBuilder::new()
            .status(304)
            .header(ETAG, etag)
            .header(CACHE_CONTROL, cache)
            .body(Body::empty())
            .map_err(|_| ServerError::InternalError);
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();

    ResponseBuilder::new()
        .status(200)
        .header(CONTENT_TYPE, mime.as_ref())
        .header(CACHE_CONTROL, cache)
        .header(ETAG, etag)
        .body(Body::from(contents))
        .map_err(|_| ServerError::InternalError)
}
