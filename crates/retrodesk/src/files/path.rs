//! Path utilities for the file tree.
//!
//! Provides path validation, normalization, and composition.

use super::FsError;

/// Validate that a path is well-formed.
fn validate_path(path: &str) -> Result<(), FsError> {
    if path.is_empty() {
        return Err(FsError::InvalidPath("empty path".to_string()));
    }

    if !path.starts_with('/') {
        return Err(FsError::InvalidPath(format!("{} is not absolute", path)));
    }

    if path.contains('\0') {
        return Err(FsError::InvalidPath("path contains null character".to_string()));
    }

    Ok(())
}

/// Normalize a path by resolving `.` and `..` components and removing redundant slashes.
pub fn normalize_path(path: &str) -> Result<String, FsError> {
    validate_path(path)?;

    let mut components: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                if components.pop().is_none() {
                    return Err(FsError::InvalidPath(format!("{} escapes root", path)));
                }
            }
            c => components.push(c),
        }
    }

    if components.is_empty() {
        return Ok("/".to_string());
    }

    let mut result = String::new();
    for component in components {
        result.push('/');
        result.push_str(component);
    }
    Ok(result)
}

/// Check that a single entry name is usable.
pub fn validate_name(name: &str) -> Result<(), FsError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(FsError::InvalidName(name.to_string()));
    }
    if name.contains('/') || name.contains('\0') {
        return Err(FsError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Get the parent path of a normalized path.
pub fn parent_path(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => path[..pos].to_string(),
    }
}

/// Get the filename (last component) of a normalized path.
pub fn filename(path: &str) -> &str {
    if path == "/" {
        return "";
    }

    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Join a directory path and an entry name.
pub fn join_path(base: &str, name: &str) -> String {
    if base == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Check if `path` is `base` or lives under it.
pub fn is_under(path: &str, base: &str) -> bool {
    if base == "/" {
        return true;
    }

    path.starts_with(base) && (path.len() == base.len() || path.as_bytes()[base.len()] == b'/')
}
