//! Slash-delimited dataset and group paths.

use crate::error::{H5EasyError, Result};

/// Split a path into its non-empty segments.
///
/// Leading, trailing and repeated slashes are ignored.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Normalize a path to its absolute form, e.g. `"a//b/"` becomes `"/a/b"`.
///
/// The root group alone is not a valid target and is rejected.
pub fn normalize(path: &str) -> Result<String> {
    let segments = split_segments(path);
    if segments.is_empty() {
        return Err(H5EasyError::invalid_path(path));
    }
    Ok(format!("/{}", segments.join("/")))
}

/// Every proper group prefix of `path`, outermost first.
///
/// `"/a/b/c"` yields `["/a", "/a/b"]`.
pub fn ancestors(path: &str) -> Vec<String> {
    let segments = split_segments(path);
    let mut prefix = String::new();
    let mut out = Vec::with_capacity(segments.len().saturating_sub(1));
    for segment in segments.iter().take(segments.len().saturating_sub(1)) {
        prefix.push('/');
        prefix.push_str(segment);
        out.push(prefix.clone());
    }
    out
}

/// Split a path into its parent group and final name.
pub fn parent_and_name(path: &str) -> Result<(String, String)> {
    let segments = split_segments(path);
    let (name, parents) = segments
        .split_last()
        .ok_or_else(|| H5EasyError::invalid_path(path))?;
    Ok((format!("/{}", parents.join("/")), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_slashes() {
        assert_eq!(normalize("a//b/").unwrap(), "/a/b");
        assert_eq!(normalize("/Function/f/0").unwrap(), "/Function/f/0");
    }

    #[test]
    fn normalize_rejects_root_and_empty() {
        assert!(matches!(normalize("/"), Err(H5EasyError::InvalidPath { .. })));
        assert!(matches!(normalize(""), Err(H5EasyError::InvalidPath { .. })));
    }

    #[test]
    fn ancestors_outermost_first() {
        assert_eq!(ancestors("/a/b/c"), vec!["/a".to_string(), "/a/b".to_string()]);
        assert!(ancestors("/top").is_empty());
        assert!(ancestors("").is_empty());
    }

    #[test]
    fn parent_and_name_splits_last_segment() {
        assert_eq!(
            parent_and_name("/grp/sub/data").unwrap(),
            ("/grp/sub".to_string(), "data".to_string())
        );
        assert_eq!(
            parent_and_name("data").unwrap(),
            ("/".to_string(), "data".to_string())
        );
        assert!(parent_and_name("//").is_err());
    }
}
