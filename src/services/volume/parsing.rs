//! Text scanning shared by both backends.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)]
static PERCENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)%").unwrap());

/// First `digits%` token on the line, as an integer
pub(super) fn first_percentage(line: &str) -> Option<u32> {
    PERCENT_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Mute state encoded on a status line
///
/// `[off]` (amixer switch) and `yes` (pactl) mean muted; `[on]` and `no`
/// mean unmuted. Only whole whitespace-separated words count, so `Mono:` is
/// not a `no`. Muted tokens are checked first. `None` when neither appears.
pub(super) fn mute_token(line: &str) -> Option<bool> {
    let has_word = |tokens: [&str; 2]| line.split_whitespace().any(|word| tokens.contains(&word));

    if has_word(["[off]", "yes"]) {
        Some(true)
    } else if has_word(["[on]", "no"]) {
        Some(false)
    } else {
        None
    }
}

/// Strip leading spaces and tabs, leaving newlines alone
pub(super) fn trim_indent(text: &str) -> &str {
    text.trim_start_matches([' ', '\t'])
}
