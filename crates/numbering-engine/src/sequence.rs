use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Suggest the next free number in a `{prefix}{NNN}` sequence.
///
/// Scans `dir` and all of its subdirectories for files with the given
/// extension (matched case-insensitively) whose name starts with `prefix`
/// followed by a digit run, takes the highest such run and returns `prefix`
/// plus that maximum + 1, zero-padded to at least three digits. A missing or
/// empty directory counts as "no matches" and yields `"{prefix}001"`.
///
/// Every call is a fresh scan. The result is a point-in-time suggestion:
/// nothing is reserved, and two concurrent callers can legitimately receive
/// the same number. Whichever save lands second collides under the file
/// system's own write semantics.
pub fn next_number(prefix: &str, suffix: &str, dir: &Path) -> String {
    let pattern = format!(r"^{}(\d+)", regex::escape(prefix));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped prefix forms a valid pattern");

    let mut max = 0u64;
    scan(dir, suffix, &re, &mut max);
    debug!(prefix, suffix, dir = %dir.display(), max, "sequence scan");

    format!("{}{:03}", prefix, max + 1)
}

fn scan(dir: &Path, suffix: &str, re: &Regex, max: &mut u64) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // missing or unreadable directory degrades to "no matches"
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan(&path, suffix, re, max);
            continue;
        }
        if !extension_matches(&path, suffix) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(caps) = re.captures(name) {
            if let Ok(n) = caps[1].parse::<u64>() {
                *max = (*max).max(n);
            }
        }
    }
}

fn extension_matches(path: &Path, suffix: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(suffix))
}
