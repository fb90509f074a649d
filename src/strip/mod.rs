// mod.rs - Include stripper: drops local includes of headers that get packed

use tracing::debug;

use crate::resolve::basename;

/// The `#include` spellings to remove from private sources.
///
/// Built once from the combined public + private file set. Any path that
/// contains `.h` anywhere qualifies (so `foo.hpp` and `readme.html` do too),
/// and headers are identified by base name only.
#[derive(Debug, Clone, Default)]
pub struct IncludeFilter {
    directives: Vec<String>,
}

impl IncludeFilter {
    pub fn new<S: AsRef<str>>(files: &[S]) -> Self {
        let mut directives = Vec::new();
        for file in files {
            let file = file.as_ref();
            if !file.contains(".h") {
                continue;
            }
            let name = basename(file);
            directives.push(format!("#include \"{}\"", name));
            directives.push(format!("#include <{}>", name));
        }
        Self { directives }
    }

    /// Remove every exact occurrence of each directive, in order.
    ///
    /// Plain substring replacement: text around a match on the same line is
    /// kept, and spacing variants such as `#include  "x.h"` are not touched.
    pub fn strip(&self, source: &str) -> String {
        let mut text = source.to_string();
        let mut removed = 0;
        for directive in &self.directives {
            let hits = text.matches(directive.as_str()).count();
            if hits > 0 {
                removed += hits;
                text = text.replace(directive.as_str(), "");
            }
        }
        debug!("Removed {} include directive(s)", removed);
        text
    }
}

/// One-shot form of [`IncludeFilter::strip`].
pub fn omit_includes<S: AsRef<str>>(source: &str, files: &[S]) -> String {
    IncludeFilter::new(files).strip(source)
}
