//! Legalizes identifiers, computes the optional `BIND(C, name="…")` binding,
//! and enforces the length limits Fortran places on names and lines.

use crate::diagnostics::Diagnostics;
use crate::model::SourceLocation;

/// Fortran 2008 identifier length limit.
pub const NAME_MAX: usize = 63;
/// Conventional fixed-form/free-form line length limit; a trailing newline
/// does not count toward it.
pub const LINE_MAX: usize = 132;

pub struct LegalName {
    pub identifier: String,
    /// Set only when the identifier was renamed *and* `autobind` requested
    /// preserving the original C name via `BIND(C, name="…")`.
    pub bind_name: Option<String>,
}

impl LegalName {
    /// The `, name="..."` fragment to splice into a `BIND(C...)` clause, or
    /// the empty string when no binding is needed.
    pub fn bind_fragment(&self) -> String {
        match &self.bind_name {
            Some(orig) => format!(", name=\"{orig}\""),
            None => String::new(),
        }
    }
}

/// Rename a leading-underscore identifier to `h2m<name>` (illegal in
/// Fortran otherwise), warning about it. Does not touch length — see
/// [`check_length`].
pub fn legalize(name: &str, autobind: bool, diags: &mut Diagnostics, location: &SourceLocation) -> LegalName {
    if let Some(stripped) = name.strip_prefix('_') {
        let renamed = format!("h2m{name}");
        diags.warn(location, format!("{name} renamed {renamed}"));
        let _ = stripped; // the whole original name (including the underscore) is kept for BIND
        LegalName { identifier: renamed, bind_name: autobind.then(|| name.to_string()) }
    } else {
        LegalName { identifier: name.to_string(), bind_name: None }
    }
}

/// Warn (without altering anything) when the identifier or any produced
/// line exceeds Fortran's length limits.
pub fn check_length(identifier: &str, lines: &[String], diags: &mut Diagnostics, location: &SourceLocation) {
    if identifier.len() > NAME_MAX {
        diags.warn(
            location,
            format!("identifier '{identifier}' is {} characters, exceeding NAME_MAX={NAME_MAX}", identifier.len()),
        );
    }
    for line in lines {
        if line.len() > LINE_MAX {
            diags.warn(location, format!("emitted line exceeds LINE_MAX={LINE_MAX}: {line}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorConfig;

    fn loc() -> SourceLocation {
        SourceLocation::unknown()
    }

    #[test]
    fn leading_underscore_is_renamed() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let legal = legalize("_x", false, &mut diags, &loc());
        assert_eq!(legal.identifier, "h2m_x");
        assert!(legal.bind_name.is_none());
        assert_eq!(diags.collected().len(), 1);
    }

    #[test]
    fn autobind_preserves_original_name() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let legal = legalize("_x", true, &mut diags, &loc());
        assert_eq!(legal.identifier, "h2m_x");
        assert_eq!(legal.bind_fragment(), ", name=\"_x\"");
    }

    #[test]
    fn plain_identifier_is_untouched() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let legal = legalize("count", false, &mut diags, &loc());
        assert_eq!(legal.identifier, "count");
        assert!(diags.collected().is_empty());
    }

    #[test]
    fn overlong_identifier_warns_but_keeps_name() {
        let mut diags = Diagnostics::new(&TranslatorConfig::default());
        let long_name = "x".repeat(NAME_MAX + 1);
        check_length(&long_name, &[], &mut diags, &loc());
        assert_eq!(diags.collected().len(), 1);
    }
}
