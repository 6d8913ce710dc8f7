use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApplicationConfig {
    pub log_level: Option<String>, // optional so the --debug flag can take precedence
    pub output_directory: String,  // where export-yaml writes when no path is given
    pub items_per_page: u64,       // page size for the list-* commands
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            log_level: Some("info".to_string()),
            output_directory: "./output".to_string(),
            items_per_page: crate::api::types::DEFAULT_ITEMS_PER_PAGE,
        }
    }
}
