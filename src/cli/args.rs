// args.rs - Command line scanner
//
// Unknown tokens are reported and skipped, every value flag takes the next
// token verbatim (even one starting with `--`), and group values are resolved
// as soon as they are scanned.

use tracing::debug;

use crate::error::PackError;
use crate::resolve::{resolve_file_list, FileGroup};

const USAGE: &str = r#"usage: shpack --macro <macro> [--intro <files>] --pub <files> --priv <files> [--outro <files>]
              [--config <file>] [--generate-config] [--help]

       where <files> can be a comma-separated list of files. e.g. --priv *.c,inc/*.h

       The resulting code is packed as follows:

           /*
           [intro file contents]
           */

           #ifndef <macro>_SINGLE_HEADER
           #define <macro>_SINGLE_HEADER
           [public header file contents]
           #endif /* <macro>_SINGLE_HEADER */

           #ifdef <macro>_IMPLEMENTATION
           [private header and source file contents]
           #endif /* <macro>_IMPLEMENTATION */

           /*
           [outro file contents]
           */

       --config <file>      read defaults for any of the options above from a TOML file
       --generate-config    print a sample configuration file and exit"#;

/// Usage text followed by the version banner
pub fn usage() -> String {
    format!("{}\n\n       shpack v{}", USAGE, crate::VERSION)
}

/// Values collected from the command line.
///
/// `None` means the flag never appeared, which lets a config file fill the
/// slot later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub macro_name: Option<String>,
    pub intro: Option<FileGroup>,
    pub public: Option<FileGroup>,
    pub private: Option<FileGroup>,
    pub outro: Option<FileGroup>,
    pub config: Option<String>,
}

/// Fully merged and validated invocation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub macro_name: String,
    pub intro: FileGroup,
    pub public: FileGroup,
    pub private: FileGroup,
    pub outro: FileGroup,
}

/// What the command line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    GenerateConfig,
    Pack(Args),
}

/// Scan the tokens after the program name.
///
/// Tokens are handled strictly left to right, so a resolver failure on an
/// earlier flag wins over a later `--help`. Repeated flags are last-wins.
pub fn parse_args(tokens: &[String]) -> Result<Command, PackError> {
    if tokens.is_empty() {
        return Ok(Command::Help);
    }

    let mut args = Args::default();
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        match token.as_str() {
            "--help" => return Ok(Command::Help),
            "--generate-config" => return Ok(Command::GenerateConfig),
            "--macro" => args.macro_name = Some(take_value(token, &mut iter)?.clone()),
            "--config" => args.config = Some(take_value(token, &mut iter)?.clone()),
            "--intro" => args.intro = Some(resolve_file_list(take_value(token, &mut iter)?)?),
            "--pub" => args.public = Some(resolve_file_list(take_value(token, &mut iter)?)?),
            "--priv" => args.private = Some(resolve_file_list(take_value(token, &mut iter)?)?),
            "--outro" => args.outro = Some(resolve_file_list(take_value(token, &mut iter)?)?),
            other => eprintln!("Unknown argument {}", other),
        }
    }

    debug!("Parsed command line: {:?}", args);
    Ok(Command::Pack(args))
}

fn take_value<'a, I>(flag: &str, iter: &mut I) -> Result<&'a String, PackError>
where
    I: Iterator<Item = &'a String>,
{
    iter.next()
        .ok_or_else(|| PackError::MissingValue(flag.to_string()))
}
