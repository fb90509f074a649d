// validation.rs - Turn merged arguments into validated options

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::cli::args::{Args, Options};
use crate::error::PackError;

/// Check the merged arguments and build the final [`Options`].
///
/// The macro is mandatory. It is otherwise taken verbatim; a name that is not
/// a C identifier only produces a warning.
pub fn validate_options(args: Args) -> Result<Options, PackError> {
    let macro_name = match args.macro_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(PackError::MissingMacro),
    };

    if !is_c_identifier(&macro_name) {
        warn!(
            "Macro '{}' is not a valid C identifier; guards will contain it literally",
            macro_name
        );
    }

    let options = Options {
        macro_name,
        intro: args.intro.unwrap_or_default(),
        public: args.public.unwrap_or_default(),
        private: args.private.unwrap_or_default(),
        outro: args.outro.unwrap_or_default(),
    };

    if options.public.is_empty() && options.private.is_empty() {
        warn!("No --pub or --priv files given; output will only contain guards");
    }

    Ok(options)
}

static C_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

pub fn is_c_identifier(name: &str) -> bool {
    C_IDENTIFIER.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_macro() {
        assert!(matches!(
            validate_options(Args::default()),
            Err(PackError::MissingMacro)
        ));
        let empty = Args {
            macro_name: Some(String::new()),
            ..Args::default()
        };
        assert!(matches!(validate_options(empty), Err(PackError::MissingMacro)));
    }

    #[test]
    fn test_options_built() {
        let args = Args {
            macro_name: Some("NK".to_string()),
            private: Some(vec!["impl.c".to_string()]),
            ..Args::default()
        };
        let options = validate_options(args).unwrap();
        assert_eq!(options.macro_name, "NK");
        assert_eq!(options.private, vec!["impl.c".to_string()]);
        assert!(options.public.is_empty());
        assert!(options.intro.is_empty());
    }

    #[test]
    fn test_non_identifier_macro_passes_through() {
        let args = Args {
            macro_name: Some("my-lib 2".to_string()),
            ..Args::default()
        };
        assert_eq!(validate_options(args).unwrap().macro_name, "my-lib 2");
    }

    #[test]
    fn test_is_c_identifier() {
        assert!(is_c_identifier("NK"));
        assert!(is_c_identifier("_lib2"));
        assert!(!is_c_identifier("2lib"));
        assert!(!is_c_identifier("my-lib"));
        assert!(!is_c_identifier(""));
    }
}
