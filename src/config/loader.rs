//! Cap-table loading functionality.
//!
//! This module provides the [`CapTableLoader`] type for loading the
//! statutory cap table from a YAML file, so an updated table can be
//! deployed without rebuilding the engine.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CapEntry, CapTable, CapTableFile};

/// Loads the statutory cap table from YAML.
///
/// # File Structure
///
/// ```text
/// entries:
///   - year: 2025
///     monthly_cap: "9430"
///     exemption_percentage: "0.57"
/// ```
///
/// # Example
///
/// ```no_run
/// use exemption_engine::config::CapTableLoader;
///
/// let caps = CapTableLoader::load("./config/exemption_caps.yaml").unwrap();
/// println!("latest year: {}", caps.latest_year());
/// ```
#[derive(Debug, Clone)]
pub struct CapTableLoader;

impl CapTableLoader {
    /// Loads a cap table from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the cap-table file (e.g., "./config/exemption_caps.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed [`CapTable`] on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or no entries (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<CapTable> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a cap table from YAML text.
    ///
    /// `source` names the origin of the text for error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<CapTable> {
        let file: CapTableFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        if file.entries.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: source.to_string(),
                message: "cap table defines no entries".to_string(),
            });
        }

        let entries: BTreeMap<i32, CapEntry> = file
            .entries
            .into_iter()
            .map(|row| {
                (
                    row.year,
                    CapEntry {
                        monthly_cap: row.monthly_cap,
                        exemption_percentage: row.exemption_percentage,
                    },
                )
            })
            .collect();

        CapTable::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_cap_table_matches_builtin() {
        let loaded = CapTableLoader::load("./config/exemption_caps.yaml").unwrap();
        assert_eq!(loaded, CapTable::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = CapTableLoader::load("/nonexistent/caps.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("caps.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_minimal_table() {
        let yaml = r#"
entries:
  - year: 2025
    monthly_cap: "9430"
    exemption_percentage: "0.57"
"#;
        let caps = CapTableLoader::from_yaml_str(yaml, "inline").unwrap();
        assert_eq!(caps.monthly_cap(2025), dec("9430"));
        assert_eq!(caps.exempt_capital(1999), caps.exempt_capital(2025));
    }

    #[test]
    fn test_parse_invalid_yaml_returns_error() {
        let result = CapTableLoader::from_yaml_str("entries: [not a row", "inline");
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "inline");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_table_returns_error() {
        let result = CapTableLoader::from_yaml_str("entries: []", "inline");
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("no entries"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
