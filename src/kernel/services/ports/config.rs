#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub language_mode: String,
    /// Text shown in a session whose file has not been fetched yet.
    pub loading_placeholder: String,
    /// Save-and-close keeps the tab until the write is acknowledged.
    pub close_waits_for_save: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 2,
            language_mode: "easycrypt".to_string(),
            loading_placeholder: "<loading>".to_string(),
            close_waits_for_save: true,
        }
    }
}
