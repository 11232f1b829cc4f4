// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

const ELLIPSIS: &str = "...";

/// Formats a duration in seconds into a human-readable `MM:SS` string.
///
/// This is used for displaying playback positions and total durations in the
/// player bar.
///
/// # Arguments
///
/// * `total_seconds` - The duration to format.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Shortens `text` to at most `max_chars` characters followed by `...`.
/// Text that already fits is returned unchanged.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();

    if chars.next().is_some() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn truncates_long_text_only() {
        assert_eq!(truncate("short", 100), "short");
        assert_eq!(truncate(&"a".repeat(100), 100), "a".repeat(100));
        assert_eq!(truncate(&"é".repeat(101), 100), format!("{}...", "é".repeat(100)));
    }
}
