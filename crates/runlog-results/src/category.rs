// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Keyword-based grouping of test names
//!
//! Each name is checked against [`CATEGORY_RULES`] in order and lands in the
//! first category whose keyword appears in it, or in [`Category::Other`].

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Report grouping for a test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Rust builds, including microcosm
    Rust,
    /// Go builds, including tangled
    Go,
    /// Node.js and npm
    NodeJs,
    /// Deno, including pds-dash
    Deno,
    /// Repository architecture and structure checks
    Architecture,
    /// Nix flake checks
    Flake,
    /// Critical fixes
    CriticalFixes,
    /// Validation and code quality checks
    CodeQuality,
    /// Anything no rule matched
    Other,
}

impl Category {
    /// Label shown in the report
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Rust => "Rust",
            Category::Go => "Go",
            Category::NodeJs => "Node.js",
            Category::Deno => "Deno",
            Category::Architecture => "Architecture",
            Category::Flake => "Flake",
            Category::CriticalFixes => "Critical Fixes",
            Category::CodeQuality => "Code Quality",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// Categories are listed alphabetically by label in the report.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered keyword rules; the first rule with a matching keyword wins
pub const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["Rust", "microcosm"], Category::Rust),
    (&["Go", "tangled"], Category::Go),
    (&["Node", "npm"], Category::NodeJs),
    (&["Deno", "pds-dash"], Category::Deno),
    (&["Architecture", "Structure"], Category::Architecture),
    (&["Flake"], Category::Flake),
    (&["Fix", "Critical"], Category::CriticalFixes),
    (&["Validation", "Quality"], Category::CodeQuality),
];

/// Category for a single test name
#[must_use]
pub fn categorize(name: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map_or(Category::Other, |(_, category)| *category)
}

/// Test names grouped by category
///
/// Both categories and the names within them iterate in sorted order.
/// Empty categories are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    groups: BTreeMap<Category, BTreeSet<String>>,
}

impl Categories {
    /// Group every name yielded by `names`
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut groups: BTreeMap<Category, BTreeSet<String>> = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            groups
                .entry(categorize(name))
                .or_default()
                .insert(name.to_string());
        }
        Self { groups }
    }

    /// Iterate over `(category, names)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Category, &BTreeSet<String>)> {
        self.groups.iter().map(|(c, names)| (*c, names))
    }

    /// Names in one category
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&BTreeSet<String>> {
        self.groups.get(&category)
    }

    /// Number of non-empty categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no name has been grouped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
