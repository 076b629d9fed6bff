//! Compact output rendering helpers for terminal surfaces.

/// First `max_chars` characters of a trimmed line, always followed by `...`
/// to mark it as an excerpt.
pub fn sample_line(input: &str, max_chars: usize) -> String {
    let preview: String = input.trim().chars().take(max_chars).collect();
    format!("{}...", preview)
}

/// Render a root-relative path the way `find .` prints it: `./a/b`.
pub fn dot_path(rel: &std::path::Path) -> String {
    let joined = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        ".".to_string()
    } else {
        format!("./{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_sample_line_truncates() {
        assert_eq!(sample_line("abc", 10), "abc...");
        assert_eq!(sample_line("  a  b  ", 10), "a  b...");
        assert_eq!(sample_line("abcdef", 3), "abc...");
        assert_eq!(sample_line("äöüß", 2), "äö...");
    }

    #[test]
    fn test_dot_path() {
        assert_eq!(dot_path(Path::new("vendor/node_modules")), "./vendor/node_modules");
        assert_eq!(dot_path(Path::new("")), ".");
    }
}
