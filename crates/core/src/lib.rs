//! AI Tools Core
//!
//! Foundational types for the AI Tools Studio workspace. This crate has zero
//! dependencies on application-level code (HTTP clients, the splitter, the
//! service layer).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `auth` - Injected identity capability (`TokenProvider`)
//! - `text` - String-or-structured response values (`StringOrStructured`)
//! - `validate` - Form validation primitives (`FieldErrors`)
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/async-trait/thiserror** - keeps build times minimal
//! 2. **Trait-based abstractions** - the auth capability is injected, never ambient
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod auth;
pub mod error;
pub mod text;
pub mod validate;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Auth Capability ────────────────────────────────────────────────────
pub use auth::{SignedOut, StaticToken, TokenProvider};

// ── Response Values ────────────────────────────────────────────────────
pub use text::StringOrStructured;

// ── Validation ─────────────────────────────────────────────────────────
pub use validate::{required_with_min, FieldErrors};
