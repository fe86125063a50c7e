//! Lexical operations on slash-separated paths. Nothing here touches the
//! filesystem, and the host's separator is never consulted.

/// Shortest equivalent path: collapses repeated slashes, `.` elements, and
/// `..` elements that follow a named element.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for element in path.split('/') {
        match element {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            name => parts.push(name),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Last element, ignoring trailing slashes.
pub fn base(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    match trimmed.rfind('/') {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Everything but the last element, cleaned.
pub fn dir(path: &str) -> String {
    let split = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    clean(&path[..split])
}

/// Extension of the last element including the dot, or `""`.
pub fn ext(path: &str) -> String {
    for (i, ch) in path.char_indices().rev() {
        match ch {
            '/' => break,
            '.' => return path[i..].to_string(),
            _ => {}
        }
    }
    String::new()
}

pub fn is_abs(path: &str) -> bool {
    path.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_normalizes_elements() {
        assert_eq!(clean(""), ".");
        assert_eq!(clean("a//b/./c/.."), "a/b");
        assert_eq!(clean("/../a"), "/a");
        assert_eq!(clean("../../a"), "../../a");
        assert_eq!(clean("a/../.."), "..");
        assert_eq!(clean("/"), "/");
    }

    #[test]
    fn base_and_dir() {
        assert_eq!(base("/a/b.txt"), "b.txt");
        assert_eq!(base("a/b/"), "b");
        assert_eq!(base("///"), "/");
        assert_eq!(dir("/a/b.txt"), "/a");
        assert_eq!(dir("file"), ".");
        assert_eq!(dir("/file"), "/");
    }

    #[test]
    fn ext_of_last_element() {
        assert_eq!(ext("archive.tar.gz"), ".gz");
        assert_eq!(ext("a.d/file"), "");
        assert!(is_abs("/etc"));
        assert!(!is_abs("etc"));
    }
}
