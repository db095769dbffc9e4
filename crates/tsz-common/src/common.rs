//! Shared enums used by the scanner, the concrete tree and the converter.

use serde::{Deserialize, Serialize};

/// ECMAScript language version of a source file.
///
/// The converter only uses this to select scanner behaviour: ES3 restricts
/// identifier characters to ASCII.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ScriptTarget {
    ES3,
    ES5,
    ES2015,
    ES2016,
    ES2017,
    ES2018,
    ES2019,
    ES2020,
    ES2021,
    ES2022,
    #[default]
    ESNext,
}

impl ScriptTarget {
    /// Whether identifiers may contain non-ASCII letters.
    pub const fn supports_unicode_identifiers(self) -> bool {
        !matches!(self, ScriptTarget::ES3)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let target = match name.to_ascii_lowercase().as_str() {
            "es3" => ScriptTarget::ES3,
            "es5" => ScriptTarget::ES5,
            "es6" | "es2015" => ScriptTarget::ES2015,
            "es2016" => ScriptTarget::ES2016,
            "es2017" => ScriptTarget::ES2017,
            "es2018" => ScriptTarget::ES2018,
            "es2019" => ScriptTarget::ES2019,
            "es2020" => ScriptTarget::ES2020,
            "es2021" => ScriptTarget::ES2021,
            "es2022" => ScriptTarget::ES2022,
            "esnext" | "latest" => ScriptTarget::ESNext,
            _ => return None,
        };
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_names_are_case_insensitive() {
        assert_eq!(ScriptTarget::from_name("ES2015"), Some(ScriptTarget::ES2015));
        assert_eq!(ScriptTarget::from_name("es6"), Some(ScriptTarget::ES2015));
        assert_eq!(ScriptTarget::from_name("Latest"), Some(ScriptTarget::ESNext));
        assert_eq!(ScriptTarget::from_name("es4"), None);
    }

    #[test]
    fn only_es3_is_ascii_only() {
        assert!(!ScriptTarget::ES3.supports_unicode_identifiers());
        assert!(ScriptTarget::ES5.supports_unicode_identifiers());
        assert!(ScriptTarget::default().supports_unicode_identifiers());
    }
}
