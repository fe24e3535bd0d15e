//! Import Alias Resolver
//!
//! Assigns every imported package of the output file a unique local name.
//! Local names are usually the last element of the import path, but
//! duplicates (`html/template` and `text/template`) and keywords
//! (`foo/case`) force a numeric suffix.

use crate::util::{is_decimal_digit, is_letter};
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};
use tracing::trace;

/// Oracle for identifiers that cannot be used as a package alias.
pub trait ReservedWords {
    fn is_reserved(&self, ident: &str) -> bool;
}

impl<F> ReservedWords for F
where
    F: Fn(&str) -> bool,
{
    fn is_reserved(&self, ident: &str) -> bool {
        self(ident)
    }
}

static GO_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ]
    .into_iter()
    .collect()
});

/// The keywords of the Go language.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoKeywords;

impl ReservedWords for GoKeywords {
    fn is_reserved(&self, ident: &str) -> bool {
        GO_KEYWORDS.contains(ident)
    }
}

/// Import path to local alias, ordered by import path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    aliases: IndexMap<String, String>,
    dot_imports: IndexSet<String>,
}

impl AliasMap {
    /// Resolves aliases for `paths`. Paths listed in `dot_imports` are
    /// imported into the file scope and get no alias.
    pub fn resolve<I, S>(paths: I, dot_imports: &[String], reserved: &dyn ReservedWords) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dot_imports: IndexSet<String> = dot_imports.iter().cloned().collect();

        // Sorted so alias tie-breaks do not depend on input order
        let sorted_paths: BTreeSet<String> = paths
            .into_iter()
            .map(Into::into)
            .filter(|path| !dot_imports.contains(path))
            .collect();

        let mut aliases = IndexMap::with_capacity(sorted_paths.len());
        let mut local_names = HashSet::with_capacity(sorted_paths.len());
        for path in sorted_paths {
            let base = sanitize(base_name(&path));

            let mut alias = base.clone();
            let mut i = 0;
            while local_names.contains(&alias) || reserved.is_reserved(&alias) {
                alias = format!("{}{}", base, i);
                i += 1;
            }

            trace!(path = %path, alias = %alias, "assigned import alias");
            local_names.insert(alias.clone());
            aliases.insert(path, alias);
        }

        AliasMap {
            aliases,
            dot_imports,
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    pub fn is_dot_import(&self, path: &str) -> bool {
        self.dot_imports.contains(path)
    }

    /// `(path, alias)` pairs in import path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_str()))
    }

    pub fn dot_imports(&self) -> impl Iterator<Item = &str> {
        self.dot_imports.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Cleans up a string to make a suitable package name.
pub fn sanitize(s: &str) -> String {
    let mut t = String::with_capacity(s.len());
    for c in s.chars() {
        let keep = if t.is_empty() {
            is_letter(c) || c == '_'
        } else {
            is_letter(c) || is_decimal_digit(c) || c == '_'
        };
        t.push(if keep { c } else { '_' });
    }
    if t == "_" {
        t = "x".to_string();
    }
    t
}

/// Last element of a slash-separated path, ignoring trailing slashes.
fn base_name(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
