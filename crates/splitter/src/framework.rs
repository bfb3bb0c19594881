//! Framework Registry
//!
//! Target-framework identifiers for the frontend scaffold tool, plus the
//! file-name and content-type conventions the splitter emits for each.

use serde::{Deserialize, Serialize};

/// Target framework declared by a frontend scaffold request.
///
/// Identifiers are matched exactly (the wire values are lowercase);
/// anything unrecognized maps to `Other` and falls back to a single plain
/// markup file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    /// Plain markup, decomposed into index.html / styles.css / script.js.
    HtmlCssJs,
    /// Single-file component, emitted as `App.jsx`.
    React,
    /// Single-file typed component, emitted as `app.component.ts`.
    Angular,
    /// Single-file template, emitted as `App.vue`.
    Vue,
    /// Unrecognized identifier; the whole blob becomes `main.html`.
    Other,
}

impl From<&str> for Framework {
    fn from(id: &str) -> Self {
        match id {
            "html-css-js" => Framework::HtmlCssJs,
            "react" => Framework::React,
            "angular" => Framework::Angular,
            "vue" => Framework::Vue,
            _ => Framework::Other,
        }
    }
}

impl Framework {
    /// File extension used for the single-file fallback name.
    pub fn extension(&self) -> &'static str {
        match self {
            Framework::React => "jsx",
            Framework::Angular => "ts",
            Framework::Vue => "vue",
            Framework::HtmlCssJs | Framework::Other => "html",
        }
    }

    /// Display content-type attached to emitted files.
    pub fn language(&self) -> &'static str {
        match self {
            Framework::React => "jsx",
            Framework::Angular => "typescript",
            Framework::Vue => "vue",
            Framework::HtmlCssJs | Framework::Other => "html",
        }
    }
}

/// One named pseudo-file carved out of a generated blob.
///
/// `language` is a display content-type hint (`html`, `css`, `javascript`,
/// `jsx`, `typescript`, `vue`), not a validated syntax claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name shown in the tab strip (e.g. `index.html`).
    pub name: String,
    /// File contents.
    pub content: String,
    /// Content-type hint for syntax highlighting.
    pub language: String,
}

impl GeneratedFile {
    /// Creates a file entry.
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            language: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_identifiers() {
        assert_eq!(Framework::from("html-css-js"), Framework::HtmlCssJs);
        assert_eq!(Framework::from("react"), Framework::React);
        assert_eq!(Framework::from("angular"), Framework::Angular);
        assert_eq!(Framework::from("vue"), Framework::Vue);
    }

    #[test]
    fn test_unknown_identifiers_map_to_other() {
        assert_eq!(Framework::from("svelte"), Framework::Other);
        assert_eq!(Framework::from(""), Framework::Other);
        // Matching is exact; identifiers are already lowercase on the wire.
        assert_eq!(Framework::from("React"), Framework::Other);
    }

    #[test]
    fn test_extensions_and_languages() {
        assert_eq!(Framework::React.extension(), "jsx");
        assert_eq!(Framework::Angular.extension(), "ts");
        assert_eq!(Framework::Vue.extension(), "vue");
        assert_eq!(Framework::Other.extension(), "html");

        assert_eq!(Framework::Angular.language(), "typescript");
        assert_eq!(Framework::HtmlCssJs.language(), "html");
    }

    #[test]
    fn test_generated_file_serialization() {
        let file = GeneratedFile::new("index.html", "<html></html>", "html");
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains(r#""name":"index.html""#));
        let back: GeneratedFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }
}
