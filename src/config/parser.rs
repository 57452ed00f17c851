use crate::config::types::FileConfig;
use crate::ConfigError;
use std::path::Path;

/// Loads the optional defaults file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML file
///
/// # Returns
///
/// * `Ok(FileConfig)` - Successfully parsed file
/// * `Err(ConfigError)` - Failed to read or parse the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitecopy::config::load_file_config;
///
/// let file = load_file_config(Path::new("sitecopy.toml")).unwrap();
/// println!("Max depth: {:?}", file.max_depth);
/// ```
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_file_config(&content)
}

/// Parses defaults from TOML text
pub fn parse_file_config(content: &str) -> Result<FileConfig, ConfigError> {
    let file: FileConfig = toml::from_str(content)?;
    Ok(file)
}
