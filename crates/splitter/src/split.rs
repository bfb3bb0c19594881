//! Generated-Code File Splitter
//!
//! The frontend scaffold tool returns one text blob with HTML, CSS, and
//! JavaScript intermixed. For the plain-markup framework this module carves
//! the blob into up to three display files (`index.html`, `styles.css`,
//! `script.js`); single-file component frameworks pass through unchanged.
//!
//! Carving is a single left-to-right scan with three states (outside a
//! block, inside a `<style>` block, inside a `<script>` block), not pattern
//! matching. The scanner is lexical, so behavior on odd input is defined:
//!
//! - Tag matching is ASCII case-insensitive; `<style` / `<script` must be
//!   followed by `>` or whitespace to open a block (`<stylesheet>` is text).
//! - An open tag with no `>` or no matching close tag does not form a block
//!   and stays in the markup output verbatim.
//! - A close tag inside a string literal (e.g. `"</script>"` in JS) still
//!   terminates the block; no language-level quoting is understood.
//! - Blocks never nest: a `<style>` tag inside a script body is script text.
//!
//! The splitter never fails and always returns at least one file.

use std::ops::Range;

use crate::framework::{Framework, GeneratedFile};

const DOCTYPE_TAG: &str = "<!doctype html>";
const HTML_OPEN: &str = "<html";
const HTML_CLOSE: &str = "</html>";

/// Splits a generated blob into display files for the given framework.
///
/// Plain markup is decomposed (see module docs); `react`, `angular`, and
/// `vue` emit their single conventional file holding the whole blob; an
/// unrecognized framework falls back to a single `main.html`.
pub fn split_files(implementation: &str, framework: Framework) -> Vec<GeneratedFile> {
    match framework {
        Framework::HtmlCssJs => split_markup(implementation),
        Framework::React => vec![GeneratedFile::new(
            "App.jsx",
            implementation,
            framework.language(),
        )],
        Framework::Angular => vec![GeneratedFile::new(
            "app.component.ts",
            implementation,
            framework.language(),
        )],
        Framework::Vue => vec![GeneratedFile::new(
            "App.vue",
            implementation,
            framework.language(),
        )],
        Framework::Other => vec![GeneratedFile::new(
            format!("main.{}", framework.extension()),
            implementation,
            framework.language(),
        )],
    }
}

/// Decomposes a plain-markup blob.
///
/// Without a recognizable HTML document region the whole blob becomes
/// `index.html` unchanged. With one, the region minus its style/script
/// blocks becomes `index.html` (trimmed), while block bodies from the whole
/// input are concatenated in source order into `styles.css` / `script.js`
/// (omitted when empty).
fn split_markup(blob: &str) -> Vec<GeneratedFile> {
    let Some(region) = find_document_region(blob) else {
        return vec![GeneratedFile::new("index.html", blob, "html")];
    };

    let carved = carve(blob, &region);
    let mut files = vec![GeneratedFile::new("index.html", carved.markup.trim(), "html")];

    let styles = carved.styles.trim();
    if !styles.is_empty() {
        files.push(GeneratedFile::new("styles.css", styles, "css"));
    }
    let scripts = carved.scripts.trim();
    if !scripts.is_empty() {
        files.push(GeneratedFile::new("script.js", scripts, "javascript"));
    }

    files
}

/// Locates the first full HTML document region: from the earliest
/// `<!DOCTYPE html>` or `<html` to the first `</html>` after it, inclusive.
///
/// Detection is lexical and runs before block scanning, so a `</html>`
/// inside a script string still ends the region.
fn find_document_region(blob: &str) -> Option<Range<usize>> {
    let doctype = find_ci(blob, DOCTYPE_TAG, 0);
    let open = find_ci(blob, HTML_OPEN, 0);
    let start = match (doctype, open) {
        (Some(d), Some(o)) => d.min(o),
        (Some(d), None) => d,
        (None, Some(o)) => o,
        (None, None) => return None,
    };
    let close = find_ci(blob, HTML_CLOSE, start)?;
    Some(start..close + HTML_CLOSE.len())
}

/// Scanner state: outside any block, or inside a style/script block whose
/// bounds were already established on entry.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Outside,
    InStyle {
        body_start: usize,
        body_end: usize,
        resume: usize,
    },
    InScript {
        body_start: usize,
        body_end: usize,
        resume: usize,
    },
}

/// Accumulated scan output.
#[derive(Debug, Default)]
struct CarvedDocument {
    /// Non-block text inside the document region.
    markup: String,
    /// Style block bodies, each followed by a newline.
    styles: String,
    /// Script block bodies, each followed by a newline.
    scripts: String,
}

/// A well-formed block: `open_start` is the `<` of the open tag, `body` the
/// text between the open tag's `>` and the close tag, `end` the position
/// after the close tag.
#[derive(Debug, Clone, Copy)]
struct Block {
    open_start: usize,
    body_start: usize,
    body_end: usize,
    end: usize,
}

/// Single pass over the whole blob, collecting block bodies everywhere and
/// markup text only where it falls inside `region`.
fn carve(blob: &str, region: &Range<usize>) -> CarvedDocument {
    let mut out = CarvedDocument::default();
    let mut state = ScanState::Outside;
    let mut pos = 0usize;

    loop {
        match state {
            ScanState::Outside => {
                let style = next_block(blob, pos, "<style", "</style>");
                let script = next_block(blob, pos, "<script", "</script>");
                let next = match (style, script) {
                    (Some(s), Some(c)) => {
                        if s.open_start <= c.open_start {
                            Some((s, true))
                        } else {
                            Some((c, false))
                        }
                    }
                    (Some(s), None) => Some((s, true)),
                    (None, Some(c)) => Some((c, false)),
                    (None, None) => None,
                };
                match next {
                    Some((block, is_style)) => {
                        push_clipped(&mut out.markup, blob, pos..block.open_start, region);
                        state = if is_style {
                            ScanState::InStyle {
                                body_start: block.body_start,
                                body_end: block.body_end,
                                resume: block.end,
                            }
                        } else {
                            ScanState::InScript {
                                body_start: block.body_start,
                                body_end: block.body_end,
                                resume: block.end,
                            }
                        };
                    }
                    None => {
                        push_clipped(&mut out.markup, blob, pos..blob.len(), region);
                        break;
                    }
                }
            }
            ScanState::InStyle {
                body_start,
                body_end,
                resume,
            } => {
                out.styles.push_str(&blob[body_start..body_end]);
                out.styles.push('\n');
                pos = resume;
                state = ScanState::Outside;
            }
            ScanState::InScript {
                body_start,
                body_end,
                resume,
            } => {
                out.scripts.push_str(&blob[body_start..body_end]);
                out.scripts.push('\n');
                pos = resume;
                state = ScanState::Outside;
            }
        }
    }

    out
}

/// Finds the next well-formed block at or after `from`.
///
/// A candidate open prefix must be followed by `>` or ASCII whitespace,
/// have a `>` ending the open tag, and have a close tag after it; failed
/// candidates are skipped (they remain literal text).
fn next_block(blob: &str, from: usize, open_prefix: &str, close_tag: &str) -> Option<Block> {
    let bytes = blob.as_bytes();
    let mut search = from;
    while let Some(open_start) = find_ci(blob, open_prefix, search) {
        search = open_start + 1;

        let after = open_start + open_prefix.len();
        let boundary_ok = match bytes.get(after) {
            Some(b'>') => true,
            Some(b) => b.is_ascii_whitespace(),
            None => false,
        };
        if !boundary_ok {
            continue;
        }

        let Some(gt) = blob[after..].find('>').map(|p| p + after) else {
            continue;
        };
        let body_start = gt + 1;
        let Some(close_start) = find_ci(blob, close_tag, body_start) else {
            continue;
        };

        return Some(Block {
            open_start,
            body_start,
            body_end: close_start,
            end: close_start + close_tag.len(),
        });
    }
    None
}

/// Appends the part of `run` that overlaps `region` to `out`.
fn push_clipped(out: &mut String, blob: &str, run: Range<usize>, region: &Range<usize>) {
    let start = run.start.max(region.start);
    let end = run.end.min(region.end);
    if start < end {
        out.push_str(&blob[start..end]);
    }
}

/// ASCII case-insensitive substring search starting at `from`.
///
/// Patterns are pure ASCII, so every match position is a char boundary.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let ned = needle.as_bytes();
    if ned.is_empty() || from >= hay.len() || ned.len() > hay.len() - from {
        return None;
    }
    hay[from..]
        .windows(ned.len())
        .position(|window| window.eq_ignore_ascii_case(ned))
        .map(|p| p + from)
}
