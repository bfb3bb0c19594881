//! AI Tools Splitter
//!
//! Turns the single text blob returned by the frontend scaffold tool into
//! the per-file view the workspace renders. Plain-markup output is carved
//! into `index.html` / `styles.css` / `script.js` by a small state-machine
//! scanner; component frameworks (React, Angular, Vue) map to their one
//! conventional file.
//!
//! ## Module Organization
//!
//! - `framework`: recognized framework identifiers and the `GeneratedFile`
//!   display model
//! - `split`: document-region detection and the block scanner

pub mod framework;
pub mod split;

pub use framework::{Framework, GeneratedFile};
pub use split::split_files;
