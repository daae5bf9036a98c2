use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Local-storage key holding the active theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Black,
}

impl Theme {
    /// Anything that is not exactly a theme name becomes `Dark`.
    pub fn coerce(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
            Theme::Black => "🌑",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Black => "Black",
        }
    }
}

/// Durable storage for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub theme: Theme,
    pub active: bool,
}

/// Theme preference plus the open/closed state of its dropdown.
#[derive(Debug)]
pub struct ThemeSwitcher<S: ThemeStore> {
    store: S,
    theme: Theme,
    dropdown_open: bool,
}

impl<S: ThemeStore> ThemeSwitcher<S> {
    pub fn new(store: S) -> Self {
        let theme = store.load().map(|raw| Theme::coerce(&raw)).unwrap_or_default();
        Self { store, theme, dropdown_open: false }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn options(&self) -> impl Iterator<Item = ThemeOption> + '_ {
        Theme::iter().map(move |theme| ThemeOption { theme, active: theme == self.theme })
    }

    pub fn select(&mut self, raw: &str) -> Theme {
        self.select_theme(Theme::coerce(raw))
    }

    pub fn select_theme(&mut self, theme: Theme) -> Theme {
        self.store.save(theme);
        self.theme = theme;
        self.dropdown_open = false;
        theme
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Returns whether anything changed.
    pub fn close_dropdown(&mut self) -> bool {
        std::mem::replace(&mut self.dropdown_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl MemoryStore {
        fn with(raw: &str) -> Self {
            Self(Rc::new(RefCell::new(Some(raw.to_string()))))
        }

        fn stored(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, theme: Theme) {
            *self.0.borrow_mut() = Some(theme.to_string());
        }
    }

    #[test]
    fn starts_dark_without_a_preference() {
        let switcher = ThemeSwitcher::new(MemoryStore::default());
        assert_eq!(switcher.theme(), Theme::Dark);
        assert!(!switcher.is_open());
    }

    #[test]
    fn restores_a_saved_theme() {
        assert_eq!(ThemeSwitcher::new(MemoryStore::with("black")).theme(), Theme::Black);
        assert_eq!(ThemeSwitcher::new(MemoryStore::with("sepia")).theme(), Theme::Dark);
    }

    #[test]
    fn init_does_not_write_the_store() {
        let store = MemoryStore::with("sepia");
        let _switcher = ThemeSwitcher::new(store.clone());
        assert_eq!(store.stored().as_deref(), Some("sepia"));
    }

    #[test]
    fn invalid_selection_matches_dark() {
        for raw in ["", "Light", "purple", "dark "] {
            let store = MemoryStore::with("light");
            let mut switcher = ThemeSwitcher::new(store.clone());
            switcher.toggle_dropdown();
            assert_eq!(switcher.select(raw), Theme::Dark);

            let reference_store = MemoryStore::with("light");
            let mut reference = ThemeSwitcher::new(reference_store.clone());
            reference.toggle_dropdown();
            reference.select("dark");

            assert_eq!(switcher.theme(), reference.theme());
            assert_eq!(switcher.is_open(), reference.is_open());
            assert_eq!(store.stored(), reference_store.stored());
        }
    }

    #[test]
    fn selecting_persists_and_closes() {
        let store = MemoryStore::default();
        let mut switcher = ThemeSwitcher::new(store.clone());
        switcher.toggle_dropdown();
        assert!(switcher.is_open());

        switcher.select("light");
        assert_eq!(switcher.theme(), Theme::Light);
        assert!(!switcher.is_open());
        assert_eq!(store.stored().as_deref(), Some("light"));
    }

    #[test]
    fn toggle_and_close() {
        let mut switcher = ThemeSwitcher::new(MemoryStore::default());
        switcher.toggle_dropdown();
        switcher.toggle_dropdown();
        assert!(!switcher.is_open());

        switcher.toggle_dropdown();
        assert!(switcher.close_dropdown());
        assert!(!switcher.close_dropdown());
    }

    #[test]
    fn exactly_one_option_is_active() {
        let mut switcher = ThemeSwitcher::new(MemoryStore::default());
        switcher.select_theme(Theme::Black);
        let active: Vec<_> = switcher.options().filter(|o| o.active).map(|o| o.theme).collect();
        assert_eq!(active, [Theme::Black]);
        assert_eq!(switcher.options().count(), 3);
    }

    #[test]
    fn icons_and_labels() {
        assert_eq!(Theme::Light.icon(), "☀️");
        assert_eq!(Theme::Black.label(), "Black");
        assert_eq!(Theme::Dark.as_ref(), "dark");
    }
}
