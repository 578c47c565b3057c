// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Globbing expansion for unquoted words (§4.4).

/// Does this word contain any glob metacharacter?
fn looks_like_glob(word: &str) -> bool {
    word.contains(['*', '?', '[', ']'])
}

/// Expand a single word against the filesystem (relative to `cwd`).
///
/// Quoted words are never expanded. Unquoted words without metacharacters
/// pass through unchanged. If expansion yields zero matches, the original
/// literal is kept, shell-style.
pub fn expand_word(word: &str, was_quoted: bool, cwd: &std::path::Path) -> Vec<String> {
    if was_quoted || !looks_like_glob(word) {
        return vec![word.to_string()];
    }

    let pattern = if std::path::Path::new(word).is_absolute() {
        word.to_string()
    } else {
        cwd.join(word).to_string_lossy().into_owned()
    };

    let matches = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect::<Vec<_>>(),
        Err(_) => Vec::new(),
    };

    if matches.is_empty() {
        return vec![word.to_string()];
    }

    let mut rendered: Vec<String> = matches
        .into_iter()
        .map(|p| {
            if std::path::Path::new(word).is_absolute() {
                p.to_string_lossy().into_owned()
            } else {
                // Re-relativize against cwd so expansion of a relative
                // glob produces relative paths, matching shell behavior.
                p.strip_prefix(cwd)
                    .map(|rel| rel.to_string_lossy().into_owned())
                    .unwrap_or_else(|_| p.to_string_lossy().into_owned())
            }
        })
        .collect();
    rendered.sort();
    rendered
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;
