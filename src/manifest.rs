//! Loads a declaration manifest — the CLI's substitute for linking against
//! libclang — into a [`crate::model::Program`].
//!
//! Format is auto-detected from the file extension (`.json` or `.toml`),
//! following the tagged-enum, `#[serde(rename_all = "snake_case")]` shape
//! this family of tools uses for its FFI manifests.

use std::path::Path;

use crate::error::TranslateError;
use crate::model::Program;

/// Read and deserialize a manifest at `path`. The extension selects the
/// deserializer; anything else is a [`TranslateError::UnknownManifestFormat`].
pub fn load(path: &Path) -> Result<Program, TranslateError> {
    let text =
        std::fs::read_to_string(path).map_err(|source| TranslateError::Io { path: path.to_path_buf(), source })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&text)
            .map_err(|e| TranslateError::Deserialize { path: path.to_path_buf(), message: e.to_string() }),
        Some("toml") => toml::from_str(&text)
            .map_err(|e| TranslateError::Deserialize { path: path.to_path_buf(), message: e.to_string() }),
        _ => Err(TranslateError::UnknownManifestFormat { path: path.to_path_buf() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_a_json_manifest() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
                "declarations": [
                    {{
                        "name": "n",
                        "type": {{"kind": "scalar", "scalar": {{"int": "int"}}}},
                        "initializer": {{"form": "evaluatable", "value": {{"int": 42}}}}
                    }}
                ]
            }}"#
        )
        .unwrap();
        let program = load(file.path()).unwrap();
        assert_eq!(program.declarations.len(), 1);
        assert_eq!(program.declarations[0].name, "n");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
        write!(file, "irrelevant").unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownManifestFormat { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/path/manifest.json")).unwrap_err();
        assert!(matches!(err, TranslateError::Io { .. }));
    }
}
