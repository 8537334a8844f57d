/// Terminates every row of a formatted label
pub const LINE_TERMINATOR: &str = "\r\n";

/// Join the rows of an address into one text block, one row per line.
///
/// Each row is cut after `max_characters_per_row` characters, counted in Unicode
/// scalar values, and then terminated with [`LINE_TERMINATOR`]. Rows that fit are
/// left untouched. There is no ellipsis and no attempt to break at word boundaries.
pub fn format_label_text<S: AsRef<str>>(address: &[S], max_characters_per_row: usize) -> String {
    let mut text = String::new();
    for row in address {
        let row = row.as_ref();
        match row.char_indices().nth(max_characters_per_row) {
            Some((cut, _)) => text.push_str(&row[..cut]),
            None => text.push_str(row),
        }
        text.push_str(LINE_TERMINATOR);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_formatted_correctly() {
        let address = [
            "Tolvan Tolvansson",
            "c/o Elvan Elvansson",
            "Tolvgatan 12",
            "12345 Tolvstad",
            "Sverige",
        ];
        assert_eq!(
            format_label_text(&address, 60),
            "Tolvan Tolvansson\r\nc/o Elvan Elvansson\r\nTolvgatan 12\r\n12345 Tolvstad\r\nSverige\r\n"
        );
    }

    #[test]
    fn short_rows_are_unmodified() {
        assert_eq!(format_label_text(&["A", "B"], 60), "A\r\nB\r\n");
        assert_eq!(format_label_text(&["exact"], 5), "exact\r\n");
    }

    #[test]
    fn long_label_text_is_truncated() {
        let long = format!("Tolvan {}", "Tolvansson".repeat(8));
        let text = format_label_text(&[long.as_str()], 40);
        assert_eq!(text.chars().count(), 40 + LINE_TERMINATOR.len());
        assert!(text.starts_with("Tolvan Tolvansson"));
        assert!(text.ends_with(LINE_TERMINATOR));
    }

    #[test]
    fn truncation_respects_character_boundaries() {
        let text = format_label_text(&["Tolvvägen åäö"], 8);
        assert_eq!(text, "Tolvväge\r\n");
    }

    #[test]
    fn empty_address_formats_to_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(format_label_text(&empty, 10), "");
        assert_eq!(format_label_text(&[""], 10), "\r\n");
    }
}
