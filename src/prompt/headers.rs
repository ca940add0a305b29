//! prompt::headers
//!
//! Language-aware preambles for the file-editing modes.
//!
//! # Design
//!
//! Preambles live in one static table keyed by (mode, language family).
//! Families group tags that share wording; a `{lang}` placeholder in a
//! template is replaced by the tag (script family) or the upper-cased tag
//! (markup family). Every mode has a generic fallback row, so lookup never
//! fails.

use std::borrow::Cow;

use crate::core::language::Language;

/// The three modes that hand a whole file to the model for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// Fix bugs, keep behavior
    Fix,
    /// Improve structure, keep behavior
    Refactor,
    /// Re-architect, keep purpose
    Rewrite,
}

/// Language families that share preamble wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Python,
    Cpp,
    Java,
    Kotlin,
    /// javascript, typescript
    Script,
    /// html, css
    Markup,
    Generic,
}

impl Family {
    fn of(language: Language) -> Self {
        match language {
            Language::Python => Family::Python,
            Language::Cpp => Family::Cpp,
            Language::Java => Family::Java,
            Language::Kotlin => Family::Kotlin,
            Language::JavaScript | Language::TypeScript => Family::Script,
            Language::Html | Language::Css => Family::Markup,
            _ => Family::Generic,
        }
    }
}

/// Shared opening of every rewrite preamble.
const REWRITE_BASE: &str = "You are a principal-level software architect.\n\
Completely REWRITE this module with a modern, clean, modular architecture.\n\
You MAY:\n\
- change function and class names\n\
- split large functions into smaller ones\n\
- introduce classes or interfaces where appropriate\n\
- reorganize responsibilities (I/O vs core logic vs config)\n\
- move script-style code into a main() or classes\n\
- remove dead code and legacy hacks\n\
You MUST:\n\
- preserve the overall PURPOSE of the module\n\
- keep it usable in the same general context\n\
- write idiomatic, production-quality code for this language\n\
- add clear docstrings/comments where helpful\n\n";

/// Preamble templates. For rewrite, the template is the language line that
/// follows [`REWRITE_BASE`].
const PREAMBLES: &[(EditMode, Family, &str)] = &[
    // ---- fix ----
    (
        EditMode::Fix,
        Family::Python,
        "You are a senior Python engineer.\n\
         Fix all bugs, inefficiencies, missing checks, and anti-patterns.\n\
         Preserve EXACT external behavior and public API.\n\n",
    ),
    (
        EditMode::Fix,
        Family::Cpp,
        "You are a senior C++17 engineer.\n\
         Fix all bugs, undefined behavior, memory issues, and anti-patterns.\n\
         Prefer RAII, smart pointers, const-correctness, and modern STL.\n\
         Preserve observable behavior and public interface.\n\n",
    ),
    (
        EditMode::Fix,
        Family::Java,
        "You are a senior Java engineer.\n\
         Fix all bugs and anti-patterns using modern Java best practices.\n\
         Preserve behavior and public API.\n\n",
    ),
    (
        EditMode::Fix,
        Family::Kotlin,
        "You are a senior Kotlin/Android engineer.\n\
         Fix all bugs and improve safety using idiomatic Kotlin.\n\
         Preserve behavior and public API.\n\n",
    ),
    (
        EditMode::Fix,
        Family::Script,
        "You are a senior {lang} engineer.\n\
         Fix all bugs, race conditions, and performance issues.\n\
         Use modern language features and best practices.\n\
         Preserve the observable behavior.\n\n",
    ),
    (
        EditMode::Fix,
        Family::Markup,
        "You are a senior {lang} engineer.\n\
         Clean up structure, fix obvious issues, and keep the same visual behavior.\n\n",
    ),
    (
        EditMode::Fix,
        Family::Generic,
        "You are a senior software engineer.\n\
         Fix all obvious bugs, inefficiencies, missing checks, and anti-patterns.\n\
         Preserve the same external behavior and semantics.\n\n",
    ),
    // ---- refactor ----
    (
        EditMode::Refactor,
        Family::Python,
        "You are a senior Python engineer.\n\
         Refactor this file for readability, maintainability, structure, and comments.\n\
         Maintain EXACT external behavior.\n\n",
    ),
    (
        EditMode::Refactor,
        Family::Cpp,
        "You are a senior C++17 engineer.\n\
         Refactor for clarity, RAII, const-correctness, and better structure.\n\
         Keep the public API and semantics unchanged.\n\n",
    ),
    (
        EditMode::Refactor,
        Family::Java,
        "You are a senior Java engineer.\n\
         Refactor using clean OOP design, clear naming, and modern Java patterns.\n\
         Maintain existing behavior and public API.\n\n",
    ),
    (
        EditMode::Refactor,
        Family::Kotlin,
        "You are a senior Kotlin/Android engineer.\n\
         Refactor to idiomatic Kotlin, improving null-safety and readability.\n\
         Preserve behavior and signatures.\n\n",
    ),
    (
        EditMode::Refactor,
        Family::Script,
        "You are a senior {lang} engineer.\n\
         Refactor for readability, modularity, and maintainability.\n\
         Use modern language features. Preserve behavior.\n\n",
    ),
    (
        EditMode::Refactor,
        Family::Markup,
        "You are a senior {lang} engineer.\n\
         Refactor for cleaner structure, semantics, and maintainability.\n\
         Keep the same visual behavior.\n\n",
    ),
    (
        EditMode::Refactor,
        Family::Generic,
        "You are a senior software engineer.\n\
         Refactor this file for readability, maintainability, structure, and comments.\n\
         Maintain the same external behavior.\n\n",
    ),
    // ---- rewrite ----
    (
        EditMode::Rewrite,
        Family::Python,
        "Language: Python. Use modern Python best practices (type hints, clear modules).\n\n",
    ),
    (
        EditMode::Rewrite,
        Family::Cpp,
        "Language: C++17. Use RAII, smart pointers, STL, and avoid raw new/delete where possible.\n\n",
    ),
    (
        EditMode::Rewrite,
        Family::Java,
        "Language: Java. Use clear packages, interfaces, and patterns.\n\n",
    ),
    (
        EditMode::Rewrite,
        Family::Kotlin,
        "Language: Kotlin. Use idiomatic Kotlin with data classes, extension functions, and proper null-safety.\n\n",
    ),
    (
        EditMode::Rewrite,
        Family::Script,
        "Language: {lang}. Use modern modules, async/await, and clear separation of concerns.\n\n",
    ),
    (
        EditMode::Rewrite,
        Family::Markup,
        "Language: {lang}. Use semantic structure and maintain visual intent.\n\n",
    ),
    (
        EditMode::Rewrite,
        Family::Generic,
        "Language: generic code/text.\n\n",
    ),
];

/// Preamble for `mode` applied to a file of `language`.
pub fn preamble(mode: EditMode, language: Language) -> Cow<'static, str> {
    let family = Family::of(language);
    let template = lookup(mode, family).or_else(|| lookup(mode, Family::Generic));
    // Every mode has a Generic row; the empty fallback is unreachable.
    let template = template.unwrap_or("");

    let body: Cow<'static, str> = match family {
        Family::Script if template.contains("{lang}") => {
            Cow::Owned(template.replace("{lang}", language.as_str()))
        }
        Family::Markup if template.contains("{lang}") => {
            Cow::Owned(template.replace("{lang}", &language.as_str().to_uppercase()))
        }
        _ => Cow::Borrowed(template),
    };

    match mode {
        EditMode::Rewrite => Cow::Owned(format!("{}{}", REWRITE_BASE, body)),
        EditMode::Fix | EditMode::Refactor => body,
    }
}

fn lookup(mode: EditMode, family: Family) -> Option<&'static str> {
    PREAMBLES
        .iter()
        .find(|(m, f, _)| *m == mode && *f == family)
        .map(|(_, _, text)| *text)
}
