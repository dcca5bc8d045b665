use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationConfig {
    pub api_base_url: String,
    pub output_directory_base: String,
    pub filename_timestamp_format: String, // strftime format string
    pub log_level: Option<String>, // optional so the CLI flag or default can take over
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        ApplicationConfig {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            output_directory_base: "./output".to_string(),
            filename_timestamp_format: "%Yy%mm%dd%Hh%Mm%Ss".to_string(),
            log_level: Some("info".to_string()),
        }
    }
}
