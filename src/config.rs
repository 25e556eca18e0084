//! Translator configuration for extensibility
//!
//! Mirrors the options a real `h2m` invocation exposes on the command line.
//! The same fields can be loaded from a TOML config file and are overridden
//! by whatever flags the CLI passes, following the load-then-merge pattern
//! used for lint configuration elsewhere in this family of tools.

use serde::Deserialize;

/// Boolean options that steer the formatter's output.
///
/// # Example
///
/// ```rust,ignore
/// use h2m::config::TranslatorConfig;
///
/// let config = TranslatorConfig::from_toml(r#"
///     autobind = true
///     array_transpose = true
/// "#)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Suppress all diagnostics.
    pub silent: bool,
    /// Suppress informational warnings, keep errors.
    pub quiet: bool,
    /// When renaming a leading-underscore identifier, emit `BIND(C, name="<original>")`.
    pub autobind: bool,
    /// Reverse array dimension order (C row-major -> Fortran column-major).
    pub array_transpose: bool,
    /// Comment out declarations whose type formatter reports a problem.
    pub detect_invalid: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig {
            silent: false,
            quiet: false,
            autobind: false,
            array_transpose: true,
            detect_invalid: false,
        }
    }
}

impl TranslatorConfig {
    /// Parse configuration from a TOML string; unset fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("failed to parse translator config: {e}"))
    }

    /// Merge CLI-provided overrides on top of a file-loaded config. A `true`
    /// CLI flag always wins; CLI flags never turn an option back off, since
    /// `clap` booleans here are presence flags, not tri-state. `array_transpose`
    /// is the exception: its default is already `true`, so an OR-merge could
    /// never express "disable it" — `--no-array-transpose` carries `Some(false)`
    /// through explicitly instead.
    pub fn merge_cli_overrides(mut self, overrides: CliOverrides) -> Self {
        self.silent |= overrides.silent;
        self.quiet |= overrides.quiet;
        self.autobind |= overrides.autobind;
        if let Some(array_transpose) = overrides.array_transpose {
            self.array_transpose = array_transpose;
        }
        self.detect_invalid |= overrides.detect_invalid;
        self
    }
}

/// The subset of [`TranslatorConfig`] that can be set via CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub silent: bool,
    pub quiet: bool,
    pub autobind: bool,
    /// `Some(true)` for `--array-transpose`, `Some(false)` for
    /// `--no-array-transpose`, `None` when neither flag was passed (the
    /// file-loaded or default value is kept).
    pub array_transpose: Option<bool>,
    pub detect_invalid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let config = TranslatorConfig::default();
        assert!(!config.silent);
        assert!(!config.autobind);
        assert!(config.array_transpose);
    }

    #[test]
    fn toml_overrides_individual_fields() {
        let config = TranslatorConfig::from_toml("autobind = true\ndetect_invalid = true\n").unwrap();
        assert!(config.autobind);
        assert!(config.detect_invalid);
        assert!(config.array_transpose, "unset fields keep their default");
    }

    #[test]
    fn cli_overrides_only_set_flags() {
        let config = TranslatorConfig::default().merge_cli_overrides(CliOverrides {
            autobind: true,
            ..Default::default()
        });
        assert!(config.autobind);
        assert!(!config.silent);
        assert!(config.array_transpose, "no array-transpose override passed, default of true is kept");
    }

    #[test]
    fn no_array_transpose_override_disables_the_default() {
        let config = TranslatorConfig::default()
            .merge_cli_overrides(CliOverrides { array_transpose: Some(false), ..Default::default() });
        assert!(!config.array_transpose);
    }

    #[test]
    fn array_transpose_override_is_redundant_with_the_default_but_still_honored() {
        let config = TranslatorConfig::from_toml("array_transpose = false\n")
            .unwrap()
            .merge_cli_overrides(CliOverrides { array_transpose: Some(true), ..Default::default() });
        assert!(config.array_transpose);
    }
}
