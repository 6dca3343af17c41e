//! Fixed-width column formatting
//!
//! The heart of the listing output: every field is rendered into a cell of
//! exactly the configured width, counted in Unicode scalar values rather
//! than bytes, padded with spaces only.

/// Cell alignment policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    /// Two leading spaces then trailing pad; used when several symbols are
    /// listed side by side. Falls back to center when the cell is too tight.
    Left,
}

/// Renders `text` into a cell of exactly `width` characters.
///
/// Empty input is replaced by `placeholder` before any other processing.
/// Overlong input is truncated crudely: with `width > 4` the text is cut to
/// `width - 5` characters and a single `"."` appended, otherwise the whole
/// cell collapses to `"."`. This is the historical policy of the tool, not
/// a general ellipsis algorithm.
///
/// Centering tie-break: when the leftover space is odd, the extra space
/// trails the text, so the cell has `floor(diff/2)` leading and
/// `ceil(diff/2)` trailing spaces.
pub fn fit(text: &str, width: usize, align: Align, placeholder: &str) -> String {
    if width == 0 {
        return String::new();
    }

    let mut text: String = if text.is_empty() {
        placeholder.to_string()
    } else {
        text.to_string()
    };

    if text.chars().count() > width {
        if width > 4 {
            text = text.chars().take(width - 5).collect();
            text.push('.');
        } else {
            text = ".".to_string();
        }
    }

    let len = text.chars().count();
    let diff = width.saturating_sub(len);

    let mut cell = String::with_capacity(width);
    match align {
        Align::Left if diff > 2 => {
            cell.push_str("  ");
            cell.push_str(&text);
            for _ in 0..diff - 2 {
                cell.push(' ');
            }
        }
        _ => {
            let lead = diff / 2;
            for _ in 0..lead {
                cell.push(' ');
            }
            cell.push_str(&text);
            for _ in 0..diff - lead {
                cell.push(' ');
            }
        }
    }
    cell
}

/// Number formatting hint carried by numeric fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Bare value, full precision
    Plain,
    /// Trade volume, labeled with 4 decimal digits
    Volume,
    /// Block time in minutes, labeled with 1 decimal digit
    BlockTime,
}

impl NumberFormat {
    fn label(self) -> &'static str {
        match self {
            NumberFormat::Plain => "",
            NumberFormat::Volume => "VOL:",
            NumberFormat::BlockTime => "BT:",
        }
    }

    fn format(self, value: f64) -> String {
        match self {
            NumberFormat::Plain => format!("{}{:.6}", self.label(), value),
            NumberFormat::Volume => format!("{}{:.4}", self.label(), value),
            NumberFormat::BlockTime => format!("{}{:.1}", self.label(), value),
        }
    }
}

/// A single cell's content before width fitting
///
/// Explicit tagged dispatch between textual and numeric content; the format
/// hint travels with the value instead of being inferred at print time.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Number { value: f64, format: NumberFormat },
}

impl Field {
    pub fn text(s: impl Into<String>) -> Self {
        Field::Text(s.into())
    }

    pub fn number(value: f64, format: NumberFormat) -> Self {
        Field::Number { value, format }
    }

    /// Resolves the field into its display string
    pub fn into_text(self) -> String {
        match self {
            Field::Text(s) => s,
            Field::Number { value, format } => format.format(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PH: &str = "(unknown)";

    fn chars(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn centered_output_is_exactly_width_and_contains_text() {
        for s in ["a", "BTC", "Bitcoin", "¥éあ", ""] {
            for w in [9, 10, 25, 28] {
                let out = fit(s, w, Align::Center, PH);
                assert_eq!(chars(&out), w, "fit({:?}, {})", s, w);
                if !s.is_empty() {
                    assert!(out.contains(s), "fit({:?}, {}) = {:?}", s, w, out);
                }
            }
        }
    }

    #[test]
    fn example_btc_in_nine_columns() {
        assert_eq!(fit("BTC", 9, Align::Center, PH), "   BTC   ");
    }

    #[test]
    fn odd_leftover_space_trails_the_text() {
        // diff = 5: floor goes in front, ceil behind
        assert_eq!(fit("BTCX", 9, Align::Center, PH), "  BTCX   ");
        assert_eq!(fit("ab", 5, Align::Center, PH), " ab  ");
    }

    #[test]
    fn overlong_text_is_truncated_with_dot_terminator() {
        let out = fit("a-very-long-coin-name-indeed", 12, Align::Center, PH);
        assert_eq!(chars(&out), 12);
        assert_eq!(out.trim_end(), "  a-very-.");
        assert!(out.trim().ends_with('.'));
    }

    #[test]
    fn overlong_multibyte_text_truncates_on_char_boundaries() {
        let out = fit("ビットコインキャッシュ", 10, Align::Center, PH);
        assert_eq!(chars(&out), 10);
        assert!(out.trim().ends_with('.'));
    }

    #[test]
    fn tiny_width_collapses_to_single_dot() {
        for w in 1..=4 {
            let out = fit("overflowing", w, Align::Center, PH);
            assert_eq!(chars(&out), w);
            assert_eq!(out.trim(), ".");
        }
    }

    #[test]
    fn empty_text_becomes_padded_placeholder() {
        let out = fit("", 13, Align::Center, PH);
        assert_eq!(chars(&out), 13);
        assert_eq!(out.trim(), PH);
    }

    #[test]
    fn empty_text_placeholder_is_itself_subject_to_truncation() {
        let out = fit("", 7, Align::Center, PH);
        assert_eq!(chars(&out), 7);
        assert!(out.trim().ends_with('.'));
    }

    #[test]
    fn left_align_pads_after_two_leading_spaces() {
        let out = fit("eth", 9, Align::Left, PH);
        assert_eq!(out, "  eth    ");
    }

    #[test]
    fn left_align_degrades_to_center_when_cell_is_tight() {
        // diff = 2 and diff = 1: no leading double-space artifact
        assert_eq!(fit("BTCBTC", 8, Align::Left, PH), fit("BTCBTC", 8, Align::Center, PH));
        assert_eq!(fit("BTCBTCX", 8, Align::Left, PH), fit("BTCBTCX", 8, Align::Center, PH));
    }

    #[test]
    fn zero_width_yields_empty_cell() {
        assert_eq!(fit("anything", 0, Align::Center, PH), "");
    }

    #[test]
    fn numeric_fields_carry_their_format_hint() {
        assert_eq!(
            Field::number(12.34567, NumberFormat::Volume).into_text(),
            "VOL:12.3457"
        );
        assert_eq!(
            Field::number(10.0, NumberFormat::BlockTime).into_text(),
            "BT:10.0"
        );
        assert_eq!(Field::text("no price").into_text(), "no price");
    }
}
