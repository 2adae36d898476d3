use routelog::{Color, Style, TermCode, format_text};

#[test]
fn empty_style_list_is_identity() {
    assert_eq!(format_text("plain", &[]), "plain");
}

#[test]
fn single_style_wraps_with_reset() {
    assert_eq!(format_text("ERROR:", &[Style::ERROR]), "\x1b[31mERROR:\x1b[0m");
}

#[test]
fn styles_are_applied_in_order() {
    assert_eq!(
        format_text("x", &[Style::HEADER, Style::EMPHASIS]),
        "\x1b[33m\x1b[94mx\x1b[0m"
    );
}

#[test]
fn light_bit_selects_bright_colors() {
    assert_eq!(Color::BLUE.sgr(), 34);
    assert_eq!((Color::LIGHT | Color::BLUE).sgr(), 94);
    assert_eq!(Style::SUPPRESS, TermCode::make(Color::LIGHT | Color::BLACK));
    assert_eq!(Style::SUPPRESS.code(), 90);
}
