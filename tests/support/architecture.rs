use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One non-comment source line outside `#[cfg(test)]` modules.
#[derive(Debug)]
pub struct SourceLine {
    pub file: String,
    pub number: usize,
    pub text: String,
}

impl fmt::Display for SourceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.number, self.text.trim())
    }
}

fn crate_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Every `.rs` file under `dir` (relative to the crate root), sorted.
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let mut pending = vec![crate_root().join(dir)];
    let mut sources = Vec::new();

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", current.display()));
        for path in entries.filter_map(|entry| entry.ok().map(|e| e.path())) {
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                sources.push(path);
            }
        }
    }

    sources.sort();
    sources
}

/// Production code lines under `dir` mentioning any of `needles`.
///
/// Comment lines and everything after the first `#[cfg(test)]` are skipped.
pub fn code_lines_mentioning(dir: &str, needles: &[&str]) -> Vec<SourceLine> {
    rust_sources(dir)
        .into_iter()
        .flat_map(|path| {
            let source = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
            let file = path
                .strip_prefix(crate_root())
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");

            source
                .lines()
                .enumerate()
                .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
                .filter(|(_, line)| !line.trim_start().starts_with("//"))
                .filter(|(_, line)| needles.iter().any(|needle| line.contains(needle)))
                .map(|(idx, line)| SourceLine {
                    file: file.clone(),
                    number: idx + 1,
                    text: line.to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn exists(relative: &str) -> bool {
    crate_root().join(relative).exists()
}
