use crate::errors::AppError;
use chrono::Local;
use log::debug;
use std::path::PathBuf;

/// Builds a filename like `config_2026y08m07d14h02m33s.json` for dumps and
/// backups of the remote configuration document.
pub fn generate_timestamped_filename(
    base_name: &str,
    timestamp_format: &str, // from config, e.g. "%Y%m%d_%H%M%S"
    extension: &str,
) -> String {
    let timestamp = Local::now().format(timestamp_format_or_default(timestamp_format)).to_string();
    format!("{}_{}.{}", base_name, timestamp, extension)
}

fn timestamp_format_or_default(format_str: &str) -> &str {
    if format_str.is_empty() {
        "%Y%m%d_%H%M%S"
    } else {
        format_str
    }
}

pub fn ensure_output_directory(dir_path_str: &str) -> Result<PathBuf, AppError> {
    let dir_path = PathBuf::from(dir_path_str);
    if !dir_path.exists() {
        debug!(
            "Output directory '{}' does not exist, attempting to create it.",
            dir_path.display()
        );
        std::fs::create_dir_all(&dir_path).map_err(|e| {
            AppError::Io(format!(
                "Failed to create output directory '{}': {}",
                dir_path.display(),
                e
            ))
        })?;
    } else if !dir_path.is_dir() {
        return Err(AppError::Io(format!(
            "Output path '{}' exists but is not a directory.",
            dir_path.display()
        )));
    }
    Ok(dir_path)
}
