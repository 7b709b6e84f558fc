//! Process-wide presentation state: the light/dark color mode toggle.
//!
//! Trivial lifecycle: initialized at startup, toggled by user action, never
//! persisted. The embedding application holds one [`ThemeContext`] at the top
//! level and passes it down; it is a plain value, not a singleton.

/// Color mode for the whole application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Top-level theme state passed down to the layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeContext {
    mode: ThemeMode,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle_color_mode(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_light_and_toggles() {
        let mut theme = ThemeContext::new();
        assert_eq!(theme.mode(), ThemeMode::Light);
        theme.toggle_color_mode();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        theme.toggle_color_mode();
        assert_eq!(theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
