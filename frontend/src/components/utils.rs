use gloo_storage::{LocalStorage, Storage};
use shared::theme::{THEME_STORAGE_KEY, Theme, ThemeStore};
use web_sys::{
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

/// Blocking notice through `window.alert`.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::error!("alert failed: {:?}", e);
            }
        }
        None => log::error!("No global `window`, dropping notice: {}", message),
    }
}

pub fn scroll_into_view(node: &NodeRef) {
    if let Some(element) = node.cast::<web_sys::Element>() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Current value of a mounted `<input>`, `<select>` or `<textarea>`.
pub fn control_value(node: &NodeRef) -> Option<String> {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = node.cast::<HtmlSelectElement>() {
        return Some(select.value());
    }
    node.cast::<HtmlTextAreaElement>().map(|area| area.value())
}

/// Sets `data-theme` on `<html>`, which the stylesheets key off.
pub fn apply_theme_attribute(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_ref()) {
                log::error!("Failed to apply theme {}: {:?}", theme, e);
            }
        }
        None => log::error!("Document element not found, theme {} not applied", theme),
    }
}

/// Keeps the theme name as a plain string under the `theme` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(THEME_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, theme: Theme) {
        if let Err(e) = LocalStorage::raw().set_item(THEME_STORAGE_KEY, theme.as_ref()) {
            log::error!("Failed to persist theme {}: {:?}", theme, e);
        }
    }
}
