//! Default configuration values

/// Default configuration file name
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".herald.toml";

/// Readme inspected by the diagnostic commands when no path is given
pub const DEFAULT_README: &str = "readme.txt";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![DEFAULT_CONFIG_TOML, ALT_CONFIG_FILE]
}

/// Configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Herald Configuration
# Environment variables and command-line flags override these values.

# endpoint = "https://example.com/wp-json/releases/v1/release"
# readme = "readme.txt"
# pre_release = "false"
"#;
