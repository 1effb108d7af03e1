use crate::tui::{Theme, ThemeVariant};

/// Runtime configuration for TUI appearance
///
/// Built from the loaded [`crate::config::Config`] and CLI overrides before
/// the runtime starts.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Visual theme (colors, styles)
    pub theme: Theme,
}

impl RuntimeConfig {
    /// Create config with a theme variant
    pub fn with_theme(variant: ThemeVariant) -> Self {
        Self {
            theme: Theme::new(variant),
        }
    }
}
