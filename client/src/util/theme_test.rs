#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_without_a_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}

#[test]
fn head_script_reads_theme_key_and_sets_dark_class() {
    let script = head_script();
    assert!(script.contains("localStorage.getItem('theme')"));
    assert!(script.contains("prefers-color-scheme: dark"));
    assert!(script.contains("classList.add('dark')"));
}
