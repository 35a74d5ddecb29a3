/*!
Navbar stylesheet lint.

The navbar markup relies on these selectors for its responsive split: the
entry list shows at 1024px and up, the menu toggle below. A rename in the
component without the matching css change would only show up at runtime.
*/

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__inner",
    ".navbar__brand",
    ".navbar__menu",
    ".navbar__links",
    ".navbar__item",
    ".navbar__link",
    ".navbar__toggle",
    ".navbar__toggle-icon",
    ".navbar__toggle-svg",
    "@media (min-width: 1024px)",
];

#[test]
fn navbar_css_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(*sel))
        .collect();
    assert!(
        missing.is_empty(),
        "Missing navbar selectors: {missing:?}"
    );
}

#[test]
fn breakpoint_swaps_menu_and_toggle() {
    let (narrow, wide) = NAVBAR_CSS
        .split_once("@media (min-width: 1024px)")
        .expect("breakpoint block");

    let rule = |css: &str, selector: &str| -> String {
        let start = css
            .find(&format!("{selector} {{"))
            .unwrap_or_else(|| panic!("no `{selector}` rule"));
        let body = &css[start..];
        body[..body.find('}').unwrap_or(body.len())].to_string()
    };

    assert!(rule(narrow, ".navbar__menu").contains("display: none"));
    assert!(!rule(narrow, ".navbar__toggle").contains("display: none"));
    assert!(rule(wide, ".navbar__menu").contains("display: block"));
    assert!(rule(wide, ".navbar__toggle").contains("display: none"));
}
