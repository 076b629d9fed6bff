//! Read-only project tree scanning.
//!
//! Walks are sorted by file name at every level so two scans of an unchanged
//! tree yield the same order. Symbolic links are listed but never followed.
//! Unreadable directories and files are skipped.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

/// One tree entry, with its path relative to the walk root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub rel: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn name(&self) -> &str {
        self.rel.file_name().and_then(|s| s.to_str()).unwrap_or("")
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Collect every entry under `root`.
///
/// `prune` sees each root-relative path; returning true drops the entry and,
/// for directories, its whole subtree.
pub fn walk<F>(root: &Path, prune: F) -> Vec<Entry>
where
    F: Fn(&Path) -> bool,
{
    fn recurse<F>(root: &Path, dir: &Path, prune: &F, out: &mut Vec<Entry>)
    where
        F: Fn(&Path) -> bool,
    {
        let read = match fs::read_dir(dir) {
            Ok(read) => read,
            Err(_) => return,
        };
        let mut children: Vec<_> = read.filter_map(Result::ok).collect();
        children.sort_by_key(|e| e.file_name());

        for child in children {
            let path = child.path();
            let rel = match path.strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => continue,
            };
            if prune(&rel) {
                continue;
            }
            let kind = match child.file_type() {
                Ok(t) if t.is_dir() => EntryKind::Dir,
                Ok(t) if t.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };
            out.push(Entry {
                rel: rel.clone(),
                kind,
            });
            if kind == EntryKind::Dir {
                recurse(root, &path, prune, out);
            }
        }
    }

    let mut out = Vec::new();
    recurse(root, root, &prune, &mut out);
    out
}

/// True when `rel` is the root-level entry `zone` or lies beneath it.
pub fn in_root_zone(rel: &Path, zone: &str) -> bool {
    rel.components()
        .next()
        .is_some_and(|first| first.as_os_str() == zone)
}

/// A single matching line, grep style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Path relative to the project root.
    pub rel: PathBuf,
    pub line_no: usize,
    pub text: String,
}

impl LineMatch {
    /// `path:text`, the way `grep -r` prints it, with the ends trimmed.
    pub fn render(&self) -> String {
        format!("{}:{}", self.rel.to_string_lossy(), self.text).trim().to_string()
    }
}

/// Search files under `project_root/subdir` whose extension is in
/// `extensions`, returning one match per line `matches` accepts.
///
/// Files are matched byte-wise like grep: invalid UTF-8 is replaced, not
/// skipped. Only files that cannot be read at all are left out. A missing
/// `subdir` yields no matches.
pub fn grep_lines<F>(
    project_root: &Path,
    subdir: &str,
    extensions: &[&str],
    matches: F,
) -> Vec<LineMatch>
where
    F: Fn(&str) -> bool,
{
    let base = project_root.join(subdir);
    if !base.is_dir() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for entry in walk(&base, |_| false) {
        if !entry.is_file() {
            continue;
        }
        let ext = entry.rel.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !extensions.contains(&ext) {
            continue;
        }
        let bytes = match fs::read(base.join(&entry.rel)) {
            Ok(b) => b,
            Err(_) => continue,
        };
        let content = String::from_utf8_lossy(&bytes);
        let rel = Path::new(subdir).join(&entry.rel);
        for (idx, line) in content.lines().enumerate() {
            if matches(line) {
                hits.push(LineMatch {
                    rel: rel.clone(),
                    line_no: idx + 1,
                    text: line.to_string(),
                });
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_walk_is_sorted_and_prunes() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "b/two.txt", "");
        touch(tmp.path(), "a/one.txt", "");
        touch(tmp.path(), "skip/hidden.txt", "");

        let entries = walk(tmp.path(), |rel| in_root_zone(rel, "skip"));
        let rels: Vec<_> = entries
            .iter()
            .map(|e| e.rel.to_string_lossy().into_owned())
            .collect();
        assert_eq!(rels, vec!["a", "a/one.txt", "b", "b/two.txt"]);
        assert!(entries[0].is_dir());
        assert!(entries[1].is_file());
    }

    #[test]
    fn test_in_root_zone_only_matches_first_component() {
        assert!(in_root_zone(Path::new("node_modules"), "node_modules"));
        assert!(in_root_zone(Path::new("node_modules/x/y"), "node_modules"));
        assert!(!in_root_zone(Path::new("vendor/node_modules"), "node_modules"));
    }

    #[test]
    fn test_grep_lines_filters_extensions() {
        let tmp = tempdir().unwrap();
        touch(tmp.path(), "src/a.ts", "foo\nbar foo\n");
        touch(tmp.path(), "src/b.md", "foo\n");
        touch(tmp.path(), "src/nested/c.tsx", "nothing\nfoo\n");

        let hits = grep_lines(tmp.path(), "src", &["ts", "tsx"], |l| l.contains("foo"));
        let rendered: Vec<_> = hits.iter().map(|h| h.render()).collect();
        assert_eq!(
            rendered,
            vec!["src/a.ts:foo", "src/a.ts:bar foo", "src/nested/c.tsx:foo"]
        );
        let lines: Vec<_> = hits.iter().map(|h| h.line_no).collect();
        assert_eq!(lines, vec![1, 2, 2]);
    }

    #[test]
    fn test_grep_lines_matches_invalid_utf8() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("src/legacy.ts");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"// Gr\xf6\xdfe foo\nbar\n  foo  \n").unwrap();

        let hits = grep_lines(tmp.path(), "src", &["ts"], |l| l.contains("foo"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1].render(), "src/legacy.ts:  foo");
    }

    #[test]
    fn test_grep_lines_missing_dir_is_empty() {
        let tmp = tempdir().unwrap();
        assert!(grep_lines(tmp.path(), "src", &["ts"], |_| true).is_empty());
    }
}
