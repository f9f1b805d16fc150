//! Loading keyword dictionaries from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Keywords;

/// Serialization format of a dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension. Anything that is not YAML is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl Keywords {
    /// Parse a dictionary from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Parse a dictionary from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.global.props.len()
    }

    /// Check if the dictionary has no top-level entries.
    pub fn is_empty(&self) -> bool {
        self.global.props.is_empty()
    }
}

/// Read and parse a keyword dictionary file.
pub fn load_keywords(path: &Path) -> Result<Keywords, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let format = Format::from_path(path);
    let keywords = match format {
        Format::Json => Keywords::from_json_str(&source).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        Format::Yaml => Keywords::from_yaml_str(&source).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
    };

    tracing::debug!(
        "Loaded {} keyword entries from {} ({:?})",
        keywords.len(),
        path.display(),
        format
    );

    Ok(keywords)
}

/// Errors that can occur when loading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const JSON: &str = r#"{"global": {"props": {
        "print": {"def": "func", "signatures": [{"args": [], "result": [{"type": "nil"}]}]},
        "ll": {"def": "table", "props": {}}
    }}}"#;

    const YAML: &str = r#"
global:
  props:
    print:
      def: func
      signatures:
        - args: []
          result:
            - type: nil
    ll:
      def: table
      props: {}
"#;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("keywords.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("keywords.YAML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("keywords.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("keywords")), Format::Json);
    }

    #[test]
    fn loads_json_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("keywords.json");
        fs::write(&path, JSON).unwrap();

        let keywords = load_keywords(&path).unwrap();

        assert_eq!(keywords.len(), 2);
        assert!(keywords.global.props["print"].is_func());
    }

    #[test]
    fn json_and_yaml_agree() {
        let temp = tempdir().unwrap();
        let json_path = temp.path().join("keywords.json");
        let yaml_path = temp.path().join("keywords.yaml");
        fs::write(&json_path, JSON).unwrap();
        fs::write(&yaml_path, YAML).unwrap();

        let from_json = load_keywords(&json_path).unwrap();
        let from_yaml = load_keywords(&yaml_path).unwrap();

        assert_eq!(from_json, from_yaml);
    }

    #[test]
    fn errors_on_missing_file() {
        let temp = tempdir().unwrap();

        let result = load_keywords(&temp.path().join("missing.json"));

        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn errors_on_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("keywords.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_keywords(&path);

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }
}
