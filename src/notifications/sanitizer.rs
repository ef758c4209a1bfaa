// SPDX-License-Identifier: MPL-2.0
//! Tag and category sanitization.
//!
//! Free-form classification labels arrive from callers and end up keyed into
//! the tag registry and mapped onto widget styling, so they are reduced to a
//! safe identifier alphabet first.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of separator characters that collapse to a single hyphen.
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ _-]+").expect("separator regex should compile"));

/// Everything outside the safe identifier alphabet.
static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9-]").expect("identifier regex should compile"));

/// Normalizes a free-form label into a safe identifier.
///
/// Runs of spaces, underscores, and hyphens collapse to a single hyphen;
/// every remaining character outside `[A-Za-z0-9-]` is stripped. Pure and
/// total — input that reduces to nothing yields an empty string, which
/// callers treat as "absent".
///
/// # Examples
///
/// ```
/// use iced_notify::notifications::sanitize;
///
/// assert_eq!(sanitize("foo bar!!"), "foo-bar");
/// assert_eq!(sanitize("save__status"), "save-status");
/// assert_eq!(sanitize("!!!"), "");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let collapsed = SEPARATOR_RUNS.replace_all(raw, "-");
    INVALID_CHARS.replace_all(&collapsed, "").into_owned()
}
