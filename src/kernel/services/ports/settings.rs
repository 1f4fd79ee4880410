use serde::{Deserialize, Serialize};

use super::config::EditorConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default)]
    pub editor: EditorSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_language_mode")]
    pub language_mode: String,
    #[serde(default = "default_loading_placeholder")]
    pub loading_placeholder: String,
    #[serde(default = "default_close_waits_for_save")]
    pub close_waits_for_save: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/ec".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_tab_size() -> u8 {
    2
}

fn default_language_mode() -> String {
    "easycrypt".to_string()
}

fn default_loading_placeholder() -> String {
    "<loading>".to_string()
}

fn default_close_waits_for_save() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            editor: EditorSettings::default(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            language_mode: default_language_mode(),
            loading_placeholder: default_loading_placeholder(),
            close_waits_for_save: default_close_waits_for_save(),
        }
    }
}

impl Settings {
    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            tab_size: self.editor.tab_size.max(1),
            language_mode: self.editor.language_mode.clone(),
            loading_placeholder: self.editor.loading_placeholder.clone(),
            close_waits_for_save: self.editor.close_waits_for_save,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
