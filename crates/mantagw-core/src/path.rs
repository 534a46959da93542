//! Slash-separated remote path helpers.
//!
//! Remote paths are built purely lexically: elements are joined with `/`
//! and the result is cleaned. No escaping or validation is applied to
//! bucket or object names.

/// Fixed root under which every bucket directory lives.
pub const ROOT_STORE: &str = "/stor";

/// Join path elements with `/`, skipping empty elements, and clean the
/// result. Returns an empty string when every element is empty.
pub fn join(elems: &[&str]) -> String {
    let non_empty: Vec<&str> = elems.iter().copied().filter(|e| !e.is_empty()).collect();
    if non_empty.is_empty() {
        return String::new();
    }
    clean(&non_empty.join("/"))
}

/// Join path elements beneath [`ROOT_STORE`].
pub fn store_path(elems: &[&str]) -> String {
    let mut all = Vec::with_capacity(elems.len() + 1);
    all.push(ROOT_STORE);
    all.extend_from_slice(elems);
    join(&all)
}

/// Lexically clean a slash-separated path.
///
/// Repeated slashes collapse, `.` elements vanish, and `..` removes the
/// preceding element. A `..` at the start of a rooted path is dropped.
/// The empty path cleans to `"."`.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if rooted {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path_joins_under_root() {
        assert_eq!(store_path(&[]), "/stor");
        assert_eq!(store_path(&["photos"]), "/stor/photos");
        assert_eq!(store_path(&["photos", "2024/cat.jpg"]), "/stor/photos/2024/cat.jpg");
    }

    #[test]
    fn test_join_skips_empty_elements() {
        assert_eq!(store_path(&["photos", ""]), "/stor/photos");
        assert_eq!(join(&["", "a", "", "b"]), "a/b");
        assert_eq!(join(&["", ""]), "");
    }

    #[test]
    fn test_join_cleans_trailing_and_duplicate_slashes() {
        assert_eq!(store_path(&["photos", "2024/"]), "/stor/photos/2024");
        assert_eq!(store_path(&["photos//", "/a.txt"]), "/stor/photos/a.txt");
    }

    #[test]
    fn test_dot_dot_is_resolved_lexically() {
        assert_eq!(store_path(&["photos", "../secret"]), "/stor/secret");
        assert_eq!(store_path(&["..", "..", "etc"]), "/etc");
        assert_eq!(clean("a/../.."), "..");
        assert_eq!(clean("/.."), "/");
    }

    #[test]
    fn test_clean_edge_cases() {
        assert_eq!(clean(""), ".");
        assert_eq!(clean("./"), ".");
        assert_eq!(clean("a/./b"), "a/b");
    }
}
