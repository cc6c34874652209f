// crates/extract_rst_block/src/lib.rs

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use rst_marker::{COMMENT_MARKER, RST_BLOCK_MARKER};

/// Strips the comment syntax from a trimmed comment line.
///
/// All leading `#` characters are removed. If nothing remains the line was a
/// pure marker line and `None` is returned. Otherwise exactly one more
/// character is dropped, normally the space separating `#` from the text.
///
/// Note: a line such as `#text` loses its first content character, so it
/// yields `Some("ext")`.
pub fn strip_comment_line(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(COMMENT_MARKER);
    let mut chars = rest.chars();
    chars.next()?;
    Some(chars.as_str())
}

/// Scans the lines of a macro file and returns the content of every rST block.
///
/// A block opens on a comment line ending in `.rst:` and stays open until the
/// first non-comment line. The marker line itself is never emitted. Blank
/// comment lines inside a block are kept as empty strings.
pub fn extract_rst_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut in_block = false;
    let mut extracted = Vec::new();

    for line in lines {
        let trimmed = line.as_ref().trim();
        if !trimmed.starts_with(COMMENT_MARKER) {
            in_block = false;
            continue;
        }
        if trimmed.ends_with(RST_BLOCK_MARKER) {
            in_block = true;
            continue;
        }
        if in_block {
            extracted.push(strip_comment_line(trimmed).unwrap_or("").to_string());
        }
    }

    extracted
}

/// Splits `content` into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// Line terminators are not part of the returned lines. A final line without
/// a terminator is kept; an empty remainder after the last terminator is not.
pub fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Reads the macro file at `file_path` and extracts its rST lines.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid UTF-8.
pub fn extract_rst_from_file<P: AsRef<Path>>(file_path: P) -> Result<Vec<String>> {
    let path = file_path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Error opening file {}", path.display()))?;
    let mut content = String::new();
    BufReader::new(file)
        .read_to_string(&mut content)
        .with_context(|| format!("Error reading file {}", path.display()))?;

    let lines = split_lines(&content);
    let extracted = extract_rst_lines(&lines);
    log::debug!(
        "Extracted {} rST line(s) out of {} from {}",
        extracted.len(),
        lines.len(),
        path.display()
    );
    Ok(extracted)
}

/// Same as [`extract_rst_from_file`], joined with newlines into the document text.
pub fn extract_rst_document<P: AsRef<Path>>(file_path: P) -> Result<String> {
    Ok(extract_rst_from_file(file_path)?.join("\n"))
}
