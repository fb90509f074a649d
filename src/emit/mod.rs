// mod.rs - Emitter: loads every section and writes the single-header document

use std::fs;
use std::io::{self, Write};

use tracing::{debug, info};

use crate::cli::Options;
use crate::error::PackError;
use crate::strip::IncludeFilter;

/// Platform line separator, used where blank lines come from the host
#[cfg(windows)]
pub const LINE_SEP: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEP: &str = "\n";

/// Fixed public guard. Independent of the macro name.
pub const SINGLE_FILE_GUARD: &str = "NK_SINGLE_FILE";

/// Every section read into memory, private sources already stripped.
///
/// Loading happens before any byte is written so a failed read never leaves
/// a truncated document on stdout.
#[derive(Debug, Clone)]
pub struct Amalgamation {
    pub macro_name: String,
    pub intro: Vec<Vec<u8>>,
    pub public: Vec<Vec<u8>>,
    pub private: Vec<String>,
    pub outro: Vec<Vec<u8>>,
}

impl Amalgamation {
    /// Read all files named by `options`, each exactly once
    pub fn load(options: &Options) -> Result<Self, PackError> {
        let mut header_set = options.public.clone();
        header_set.extend(options.private.iter().cloned());
        let filter = IncludeFilter::new(&header_set);

        let private = options
            .private
            .iter()
            .map(|path| read_text(path).map(|text| filter.strip(&text)))
            .collect::<Result<Vec<_>, _>>()?;

        let amalgamation = Self {
            macro_name: options.macro_name.clone(),
            intro: read_all(&options.intro)?,
            public: read_all(&options.public)?,
            private,
            outro: read_all(&options.outro)?,
        };

        info!(
            "Loaded {} intro, {} public, {} private, {} outro file(s)",
            amalgamation.intro.len(),
            amalgamation.public.len(),
            amalgamation.private.len(),
            amalgamation.outro.len()
        );
        Ok(amalgamation)
    }

    /// Write the packed document.
    ///
    /// Intro, public and outro contents go out byte for byte. Each private
    /// source is followed by a newline whether or not it ended with one.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let m = &self.macro_name;

        writeln!(out, "/*")?;
        for content in &self.intro {
            out.write_all(content)?;
        }
        writeln!(out, "*/")?;

        writeln!(out, "#ifndef {}", SINGLE_FILE_GUARD)?;
        writeln!(out, "  #define {}", SINGLE_FILE_GUARD)?;
        writeln!(out, "#endif")?;
        writeln!(out)?;

        for content in &self.public {
            out.write_all(content)?;
        }

        writeln!(out, "{}#ifdef {}_IMPLEMENTATION", LINE_SEP, m)?;
        writeln!(out)?;
        for content in &self.private {
            writeln!(out, "{}", content)?;
        }
        writeln!(out, "#endif /* {}_IMPLEMENTATION */", m)?;

        writeln!(out, "{}/*", LINE_SEP)?;
        for content in &self.outro {
            out.write_all(content)?;
        }
        writeln!(out, "*/{}", LINE_SEP)?;

        Ok(())
    }

    /// Render into memory
    pub fn render(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Load and print the document for `options` to stdout
pub fn write_amalgamation(options: &Options) -> Result<(), PackError> {
    let document = Amalgamation::load(options)?.render()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&document)?;
    stdout.flush()?;

    debug!(
        "Wrote {} bytes for macro '{}'",
        document.len(),
        options.macro_name
    );
    Ok(())
}

fn read_all(paths: &[String]) -> Result<Vec<Vec<u8>>, PackError> {
    paths
        .iter()
        .map(|path| {
            fs::read(path).map_err(|source| PackError::ReadFile {
                path: path.clone(),
                source,
            })
        })
        .collect()
}

fn read_text(path: &str) -> Result<String, PackError> {
    fs::read_to_string(path).map_err(|source| PackError::ReadFile {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn options(macro_name: &str) -> Options {
        Options {
            macro_name: macro_name.to_string(),
            ..Options::default()
        }
    }

    #[test]
    fn test_empty_groups_layout() {
        let amalgamation = Amalgamation::load(&options("M")).unwrap();
        let out = String::from_utf8(amalgamation.render().unwrap()).unwrap();
        let expected = format!(
            "/*\n*/\n#ifndef NK_SINGLE_FILE\n  #define NK_SINGLE_FILE\n#endif\n\n\
             {ls}#ifdef M_IMPLEMENTATION\n\n#endif /* M_IMPLEMENTATION */\n\
             {ls}/*\n*/{ls}\n",
            ls = LINE_SEP
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_end_to_end_layout() {
        let dir = TempDir::new().unwrap();
        let intro = write_file(&dir, "intro.txt", "LICENSE\n");
        let public = write_file(&dir, "pub.h", "int f(void);");
        let private = write_file(&dir, "impl.c", "#include \"pub.h\"\nint f(void){return 1;}");
        let outro = write_file(&dir, "outro.txt", "END\n");

        let opts = Options {
            macro_name: "NK".to_string(),
            intro: vec![intro],
            public: vec![public],
            private: vec![private],
            outro: vec![outro],
        };
        let out = String::from_utf8(Amalgamation::load(&opts).unwrap().render().unwrap()).unwrap();
        let expected = format!(
            "/*\nLICENSE\n*/\n#ifndef NK_SINGLE_FILE\n  #define NK_SINGLE_FILE\n#endif\n\n\
             int f(void);{ls}#ifdef NK_IMPLEMENTATION\n\n\nint f(void){{return 1;}}\n\
             #endif /* NK_IMPLEMENTATION */\n{ls}/*\nEND\n*/{ls}\n",
            ls = LINE_SEP
        );
        assert_eq!(out, expected);
        assert!(!out.contains("#include \"pub.h\""));
    }

    #[test]
    fn test_render_matches_streamed_output() {
        let dir = TempDir::new().unwrap();
        let public = write_file(&dir, "pub.h", "int g(void);\n");
        let opts = Options {
            macro_name: "S".to_string(),
            public: vec![public],
            ..Options::default()
        };
        let amalgamation = Amalgamation::load(&opts).unwrap();

        let mut streamed = Vec::new();
        amalgamation.write_to(&mut streamed).unwrap();
        let rendered = amalgamation.render().unwrap();
        assert_eq!(rendered, streamed);
        assert!(rendered.len() > "int g(void);\n".len());
    }

    #[test]
    fn test_group_order_preserved() {
        let dir = TempDir::new().unwrap();
        let second = write_file(&dir, "b.h", "SECOND\n");
        let first = write_file(&dir, "a.h", "FIRST\n");
        let third = write_file(&dir, "c.c", "THIRD");
        let fourth = write_file(&dir, "d.c", "FOURTH\n");

        let opts = Options {
            macro_name: "X".to_string(),
            public: vec![second, first],
            private: vec![fourth, third],
            ..Options::default()
        };
        let out = String::from_utf8(Amalgamation::load(&opts).unwrap().render().unwrap()).unwrap();
        let pos = |needle: &str| out.find(needle).unwrap();
        assert!(pos("SECOND") < pos("FIRST"));
        assert!(pos("FIRST") < pos("#ifdef X_IMPLEMENTATION"));
        assert!(pos("FOURTH") < pos("THIRD"));
        // Trailing newline is appended even when the file already has one
        assert!(out.contains("FOURTH\n\nTHIRD\n#endif"));
    }

    #[test]
    fn test_raw_bytes_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pub.h");
        fs::write(&path, b"a\r\nb\xff").unwrap();

        let opts = Options {
            macro_name: "R".to_string(),
            public: vec![path.to_string_lossy().into_owned()],
            ..Options::default()
        };
        let bytes = Amalgamation::load(&opts).unwrap().render().unwrap();
        assert!(bytes.windows(5).any(|w| w == b"a\r\nb\xff"));
    }

    #[test]
    fn test_unreadable_private_file() {
        let dir = TempDir::new().unwrap();
        let opts = Options {
            macro_name: "R".to_string(),
            private: vec![dir.path().to_string_lossy().into_owned()],
            ..Options::default()
        };
        assert!(matches!(
            Amalgamation::load(&opts),
            Err(PackError::ReadFile { .. })
        ));
    }
}
