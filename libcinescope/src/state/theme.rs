//! Theme state
//!
//! Light and dark palettes with a toggle, reduced the same way as the
//! movie state. The palette colors are plain RGB so any front end can map
//! them to its own color type.

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used across all screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub text_muted: Rgb,
    pub accent: Rgb,
    pub vip: Rgb,
    pub unavailable: Rgb,
}

pub const LIGHT: Palette = Palette {
    background: Rgb(255, 255, 255),
    surface: Rgb(240, 240, 244),
    text: Rgb(24, 24, 28),
    text_muted: Rgb(110, 110, 120),
    accent: Rgb(255, 132, 54),
    vip: Rgb(180, 140, 40),
    unavailable: Rgb(190, 190, 196),
};

pub const DARK: Palette = Palette {
    background: Rgb(18, 18, 24),
    surface: Rgb(32, 32, 42),
    text: Rgb(235, 235, 240),
    text_muted: Rgb(140, 140, 152),
    accent: Rgb(255, 132, 54),
    vip: Rgb(220, 180, 70),
    unavailable: Rgb(70, 70, 80),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl Default for ThemeState {
    /// Dark is the default, matching the app's styling baseline
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl ThemeState {
    pub fn palette(&self) -> Palette {
        if self.dark_mode {
            DARK
        } else {
            LIGHT
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Toggle,
    Set(bool),
}

pub fn reduce(state: ThemeState, action: ThemeAction) -> ThemeState {
    match action {
        ThemeAction::Toggle => ThemeState {
            dark_mode: !state.dark_mode,
        },
        ThemeAction::Set(dark_mode) => ThemeState { dark_mode },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let state = ThemeState::default();
        assert!(state.dark_mode);
        assert_eq!(state.palette(), DARK);
    }

    #[test]
    fn test_toggle_flips_twice() {
        let state = ThemeState::default();
        let state = reduce(state, ThemeAction::Toggle);
        assert!(!state.dark_mode);
        assert_eq!(state.palette(), LIGHT);

        let state = reduce(state, ThemeAction::Toggle);
        assert!(state.dark_mode);
    }

    #[test]
    fn test_set_is_idempotent() {
        let state = reduce(ThemeState::default(), ThemeAction::Set(false));
        assert!(!state.dark_mode);
        let state = reduce(state, ThemeAction::Set(false));
        assert!(!state.dark_mode);
    }
}
