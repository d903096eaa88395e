//! BBCode rendering module.
//!
//! Converts raw BBCode post content into display markup at read time.
//! Posts are stored raw, so rendering rule changes apply retroactively
//! to historical content.
//!
//! # Supported Tags
//!
//! | BBCode               | Markup                          |
//! |----------------------|---------------------------------|
//! | `[b]text[/b]`        | `<strong>text</strong>`         |
//! | `[i]text[/i]`        | `<em>text</em>`                 |
//! | `[quote]text[/quote]`| `<blockquote>text</blockquote>` |
//!
//! Literal newlines become `<br>`. Unmatched or unknown tags pass through
//! as literal text. All input is HTML-escaped before tag substitution, so
//! user content can never inject markup outside the fixed tag set.

/// The BBCode to markup transform.
pub mod bbcode;

/// Unit tests for BBCode rendering.
pub mod tests;
