use std::{sync::Arc, time::Duration};

use anyhow::Result;

use super::keymap::{self, KeymapStore};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    /// Ask for a second Ctrl+Q when the inputs hold unsubmitted text.
    pub confirm_exit: bool,
    pub show_help: bool,
    pub(crate) keymap_store: Arc<KeymapStore>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_exit: true,
            show_help: true,
            keymap_store: keymap::default_store(),
        }
    }
}

impl UiOptions {
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Replaces the built-in key bindings with a keymap in the same JSON
    /// layout as `keymap/default.keymap.json`.
    pub fn with_keymap_json(mut self, source: &str) -> Result<Self> {
        self.keymap_store = Arc::new(KeymapStore::from_json(source)?);
        Ok(self)
    }
}
