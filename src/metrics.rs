//! Font-agnostic text height estimation.
//!
//! The estimator predicts how tall a word-wrapped block of text will be
//! before any real text shaping happens. It is a character-count
//! approximation, not a glyph-width table: every character is assumed to
//! occupy half the font size in width, and every line 1.25 times the font
//! size in height. Given the same (text, font size, width) inputs it
//! produces identical results on every platform, regardless of which fonts
//! are installed.
//!
//! Placement of every chained primitive hangs off these estimates, so any
//! error here compounds down the slide; keep the constants in sync with
//! whatever the downstream renderer actually uses.

use crate::units::{In, Pt, POINTS_PER_INCH};

/// Average glyph width as a fraction of the font size, approximating a
/// proportional body font
pub const AVG_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_RATIO: f32 = 1.25;

/// The estimated height of a single line of text at the given size
pub fn single_line_height(font_size: Pt) -> In {
    In(font_size.0 * LINE_HEIGHT_RATIO / POINTS_PER_INCH)
}

/// Estimate the rendered height of `text` under word wrap within
/// `max_width`.
///
/// Runs a greedy wrap simulation: words accumulate into a candidate line
/// until the candidate's character count times the average character width
/// exceeds the available width, at which point the line is closed and the
/// overflowing word starts the next one. A single word wider than
/// `max_width` is never split; it sits alone on its own line. The empty
/// string occupies zero lines and so has zero height.
pub fn estimate_text_height(text: &str, font_size: Pt, max_width: In) -> In {
    let avg_char_width = font_size.0 * AVG_CHAR_WIDTH_RATIO / POINTS_PER_INCH;

    let mut lines = 0usize;
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let candidate_len = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if candidate_len as f32 * avg_char_width > max_width.0 {
            if current_len > 0 {
                lines += 1;
            }
            current_len = word_len;
        } else {
            current_len = candidate_len;
        }
    }
    if current_len > 0 {
        lines += 1;
    }

    single_line_height(font_size) * lines as f32
}

/// Estimate the combined height of a list of bullet points.
///
/// Each point is estimated independently, as if it started a fresh
/// paragraph: points never share line-wrap state, so the result is exactly
/// the sum of [estimate_text_height] over the points.
pub fn estimate_bullet_height(points: &[String], font_size: Pt, max_width: In) -> In {
    points
        .iter()
        .map(|point| estimate_text_height(point, font_size, max_width))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_zero_height() {
        assert_eq!(estimate_text_height("", Pt(12.0), In(4.0)), In(0.0));
        assert_eq!(estimate_text_height("   ", Pt(7.0), In(1.0)), In(0.0));
    }

    #[test]
    fn short_text_occupies_exactly_one_line() {
        let h = estimate_text_height("hello world", Pt(12.0), In(8.0));
        assert_eq!(h, single_line_height(Pt(12.0)));
    }

    #[test]
    fn an_overlong_word_is_never_split() {
        // 40 chars at 12pt is ~3.3in wide, well past a 1in box
        let word = "a".repeat(40);
        let h = estimate_text_height(&word, Pt(12.0), In(1.0));
        assert_eq!(h, single_line_height(Pt(12.0)));
    }

    #[test]
    fn height_never_decreases_as_the_box_narrows() {
        let text = lipsum::lipsum(40);
        let mut previous = In(0.0);
        // sweep from wide to narrow
        for width in [8.0, 6.0, 4.0, 3.0, 2.0, 1.5, 1.0] {
            let h = estimate_text_height(&text, Pt(10.0), In(width));
            assert!(
                h >= previous,
                "height shrank from {previous} to {h} at width {width}in"
            );
            previous = h;
        }
    }

    #[test]
    fn bullet_estimates_are_additive() {
        let a = lipsum::lipsum_words(12);
        let b = lipsum::lipsum_words(25);
        let each = estimate_text_height(&a, Pt(8.0), In(4.78))
            + estimate_text_height(&b, Pt(8.0), In(4.78));
        let together = estimate_bullet_height(&[a, b], Pt(8.0), In(4.78));
        assert_eq!(together, each);
    }

    #[test]
    fn wrap_point_counts_the_joining_space() {
        // at 10pt the average char is 10/144 in; a 2in box fits 28 chars.
        // two 14-char words joined by a space overflow it, two 13-char
        // words do not.
        let wraps = estimate_text_height("aaaaaaaaaaaaaa bbbbbbbbbbbbbb", Pt(10.0), In(2.0));
        let fits = estimate_text_height("aaaaaaaaaaaaa bbbbbbbbbbbbb", Pt(10.0), In(2.0));
        assert_eq!(wraps, single_line_height(Pt(10.0)) * 2.0);
        assert_eq!(fits, single_line_height(Pt(10.0)));
    }
}
