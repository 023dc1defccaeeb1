//! Formatting utilities used by the pages and the tables.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` to `width` terminal columns (accents and emoji aware).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Right-align `s` to `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Cut `s` to at most `max` characters, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    let flat = s.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max {
        return flat;
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = flat.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Horizontal bar scaled so that `max` fills `width` cells.
/// Any non-zero value gets at least one cell.
pub fn bar(value: usize, max: usize, width: usize, glyph: &str) -> String {
    if value == 0 || max == 0 {
        return String::new();
    }
    let cells = (value * width).div_ceil(max).clamp(1, width.max(1));
    glyph.repeat(cells)
}

/// `1 lieu` / `3 lieux`
pub fn plural(n: usize, one: &str, many: &str) -> String {
    if n <= 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Amphithéâtre", 20), "Amphithéâtre");
        assert_eq!(truncate("Amphithéâtre", 6), "Amphi…");
        assert_eq!(truncate("ligne\nsuivante", 40), "ligne suivante");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("é", 3), "é  ");
        assert_eq!(pad_left("42", 4), "  42");
    }

    #[test]
    fn bar_scales_to_max() {
        assert_eq!(bar(2, 2, 10, "#"), "##########");
        assert_eq!(bar(1, 2, 10, "#"), "#####");
        assert_eq!(bar(1, 100, 10, "#"), "#");
        assert_eq!(bar(0, 2, 10, "#"), "");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "lieu", "lieux"), "1 lieu");
        assert_eq!(plural(0, "lieu", "lieux"), "0 lieu");
        assert_eq!(plural(4, "lieu", "lieux"), "4 lieux");
    }
}
