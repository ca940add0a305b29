//! core::language
//!
//! Language classification by file extension.
//!
//! # Design
//!
//! Classification is a lookup in a static extension table. The lookup is
//! case-insensitive on the extension and total: anything not in the table,
//! including paths without an extension, classifies as [`Language::Text`].
//!
//! # Example
//!
//! ```
//! use codeassist::core::language::Language;
//! use std::path::Path;
//!
//! assert_eq!(Language::from_path(Path::new("src/main.RS")), Language::Rust);
//! assert_eq!(Language::from_path(Path::new("README")), Language::Text);
//! ```

use std::fmt;
use std::path::Path;

/// Language tag for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Cpp,
    Java,
    Kotlin,
    JavaScript,
    TypeScript,
    CSharp,
    Go,
    Rust,
    Php,
    Html,
    Css,
    Json,
    Yaml,
    Xml,
    /// Fallback for unrecognized or missing extensions.
    Text,
}

/// Extension table. Extensions are lower-case and without the leading dot.
const EXTENSIONS: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("pyw", Language::Python),
    ("c", Language::Cpp),
    ("cpp", Language::Cpp),
    ("cc", Language::Cpp),
    ("cxx", Language::Cpp),
    ("h", Language::Cpp),
    ("hpp", Language::Cpp),
    ("java", Language::Java),
    ("kt", Language::Kotlin),
    ("kts", Language::Kotlin),
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("tsx", Language::TypeScript),
    ("cs", Language::CSharp),
    ("go", Language::Go),
    ("rs", Language::Rust),
    ("php", Language::Php),
    ("html", Language::Html),
    ("htm", Language::Html),
    ("css", Language::Css),
    ("json", Language::Json),
    ("yaml", Language::Yaml),
    ("yml", Language::Yaml),
    ("xml", Language::Xml),
];

impl Language {
    /// Classify a path by its extension.
    pub fn from_path(path: &Path) -> Self {
        lookup(path).unwrap_or(Language::Text)
    }

    /// The lower-case tag used in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Xml => "xml",
            Language::Text => "text",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a path has one of the supported extensions.
///
/// Folder modes only process files for which this returns true.
pub fn is_supported(path: &Path) -> bool {
    lookup(path).is_some()
}

/// All supported extensions, lower-case, without the dot.
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    EXTENSIONS.iter().map(|(ext, _)| *ext)
}

fn lookup(path: &Path) -> Option<Language> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    EXTENSIONS
        .iter()
        .find(|(candidate, _)| *candidate == ext)
        .map(|(_, lang)| *lang)
}
