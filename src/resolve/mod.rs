// mod.rs - File list resolver: comma-separated paths and wildcards to concrete files

pub mod wildcard;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::PackError;

pub use wildcard::WildcardMatcher;

/// Ordered list of file paths, exactly as they will be read and printed
pub type FileGroup = Vec<String>;

/// Resolve one raw `--intro/--pub/--priv/--outro` value into existing files.
///
/// Tokens are processed in the order given; only the files produced by a
/// single wildcard token are sorted among themselves.
pub fn resolve_file_list(arg: &str) -> Result<FileGroup, PackError> {
    let mut files = Vec::new();

    for token in arg.split(',') {
        if is_wildcard(token) {
            files.extend(expand_wildcard(token)?);
        } else {
            let path = Path::new(token);
            if !path.exists() {
                return Err(PackError::PathNotFound(token.to_string()));
            }
            if path.is_dir() {
                return Err(PackError::NotAFile(token.to_string()));
            }
            files.push(token.to_string());
        }
    }

    debug!("Resolved '{}' into {} file(s)", arg, files.len());
    Ok(files)
}

/// Only `*` turns a token into a wildcard; `?` and `[...]` alone are literal.
pub fn is_wildcard(token: &str) -> bool {
    token.contains('*')
}

/// Expand one wildcard token against its directory, sorted by name.
fn expand_wildcard(token: &str) -> Result<FileGroup, PackError> {
    let (dir, wildcard) = split_dir(token);
    let dir = if dir.is_empty() { "." } else { dir };

    // Nothing to search
    if dir == " " {
        debug!("Skipping '{}': blank directory", token);
        return Ok(Vec::new());
    }

    if !Path::new(dir).exists() {
        return Err(PackError::PathNotFound(dir.to_string()));
    }

    let matcher = WildcardMatcher::new(wildcard)?;
    let entries = fs::read_dir(dir).map_err(|source| PackError::ReadDir {
        dir: dir.to_string(),
        source,
    })?;

    let mut matched = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| PackError::ReadDir {
            dir: dir.to_string(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if matcher.matches(&name) {
            matched.push(join_path(dir, &name));
        }
    }
    matched.sort();

    debug!("Wildcard '{}' matched {} entries in '{}'", token, matched.len(), dir);
    Ok(matched)
}

/// Split a path into its POSIX `dirname` and `basename`.
///
/// Trailing slashes are dropped from the directory unless it consists of
/// slashes only, so `a//*.c` gives `a` and `/*.c` gives `/`.
pub fn split_dir(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => {
            let head = &path[..=idx];
            let base = &path[idx + 1..];
            let trimmed = head.trim_end_matches('/');
            if trimmed.is_empty() {
                (head, base)
            } else {
                (trimmed, base)
            }
        }
        None => ("", path),
    }
}

/// Final path component, `/`-separated.
pub fn basename(path: &str) -> &str {
    split_dir(path).1
}

/// Join a directory and an entry name with a single `/`.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}
