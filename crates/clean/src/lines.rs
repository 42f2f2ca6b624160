// ABOUTME: Line splitting shared by the boilerplate remover and the clean exporter.
// ABOUTME: Splits on LF, strips one trailing CR per segment, keeps empty segments.

/// Splits `text` into lines on either LF or CRLF endings.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty segment,
/// so blank-line structure survives a split-and-rejoin round trip.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
