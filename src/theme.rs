//! Light/dark theme flag, persisted in localStorage under `darkMode`.

const STORAGE_KEY: &str = "darkMode";
const BODY_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "false",
            Theme::Dark => "true",
        }
    }

    pub fn from_storage_value(value: Option<&str>) -> Theme {
        match value {
            Some("true") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Label of the toggle button: it names the mode the click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Modo Escuro",
            Theme::Dark => "Modo Claro",
        }
    }
}

/// Reads the persisted flag. Missing or unreadable storage means light mode.
pub fn load() -> Theme {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = storage.get_item(STORAGE_KEY) {
                return Theme::from_storage_value(raw.as_deref());
            }
        }
    }
    Theme::Light
}

/// Persists the flag, best-effort.
pub fn store(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.storage_value());
        }
    }
}

/// Applies the theme class to `<body>`.
pub fn apply(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(body) = document.body() {
                let class_list = body.class_list();
                let _ = match theme {
                    Theme::Dark => class_list.add_1(BODY_CLASS),
                    Theme::Light => class_list.remove_1(BODY_CLASS),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_twice_restores_the_flag() {
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
        assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
    }

    #[test]
    fn storage_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            let raw = theme.storage_value();
            assert_eq!(Theme::from_storage_value(Some(raw)), theme);
        }
    }

    #[test]
    fn missing_or_garbage_storage_means_light() {
        assert_eq!(Theme::from_storage_value(None), Theme::Light);
        assert_eq!(Theme::from_storage_value(Some("yes")), Theme::Light);
        assert_eq!(Theme::from_storage_value(Some("")), Theme::Light);
    }

    #[test]
    fn toggle_label_names_the_other_mode() {
        assert_eq!(Theme::Light.toggle_label(), "Modo Escuro");
        assert_eq!(Theme::Dark.toggle_label(), "Modo Claro");
    }
}
