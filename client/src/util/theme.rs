//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies it as a
//! `dark` class on the `<html>` element. The inline head script in
//! `app::shell` does the same before first paint; this module keeps the
//! reactive state in sync after hydration.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use api::theme::{THEME_KEY, Theme};

use super::storage;

/// Class toggled on `<html>` for the dark palette.
pub const DARK_CLASS: &str = "dark";

/// Script run in `<head>` before the body renders, so the first paint
/// already uses the right palette.
pub fn head_script() -> String {
    format!(
        "(function(){{try{{var t=localStorage.getItem('{THEME_KEY}');\
         if(t!=='light'&&t!=='dark'){{t=window.matchMedia('(prefers-color-scheme: dark)').matches?'dark':'light';}}\
         if(t==='dark'){{document.documentElement.classList.add('{DARK_CLASS}');}}}}catch(e){{}}}})();"
    )
}

/// Stored preference, else the system color-scheme preference.
pub fn read_preference() -> Theme {
    Theme::resolve(storage::read(THEME_KEY).as_deref(), system_prefers_dark())
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the dark class on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let classes = el.class_list();
            let _ = if theme.is_dark() { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggle();
    apply(next);
    if !storage::write(THEME_KEY, next.as_str()) {
        log::debug!("theme preference not persisted");
    }
    next
}
