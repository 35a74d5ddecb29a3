#![cfg(test)]
//! Ensures the embedded desktop theme (`ui/assets/theme/main.css`) stays present
//! and carries the tokens the navbar and pages read.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = [
        ":root",
        "--color-bg",
        "--color-navbar-bg",
        "--color-navbar-fg",
        "--color-navbar-link",
        "body {",
        ".page {",
        ".page-home__sections",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
