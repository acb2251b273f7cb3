//! Pattern-based element extraction.
//!
//! Used as the Python fallback when a full parse fails, and as the only path
//! for JavaScript/TypeScript.

use crate::elements::Extraction;
use crate::text::line_number_at;
use crate::types::CodeElement;
use once_cell::sync::Lazy;
use regex::Regex;

static PY_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^def\s+(\w+)\s*\(").expect("valid python function pattern"));

static PY_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^class\s+(\w+)\s*[:(]").expect("valid python class pattern"));

static PY_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:from\s+(\S+)\s+)?import\s+(\S+)").expect("valid python import pattern")
});

/// Applied in order, each over the whole content; one construct may match more than one.
static SCRIPT_FUNCTIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"function\s+(\w+)\s*\(",
        r"const\s+(\w+)\s*=\s*(?:async\s*)?\([^)]*\)\s*=>",
        r"const\s+(\w+)\s*=\s*function",
        r"(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s+(\w+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid script function pattern"))
    .collect()
});

static SCRIPT_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"class\s+(\w+)").expect("valid script class pattern"));

static SCRIPT_FROM_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+.*?from\s+['"]([^'"]+)['"]"#).expect("valid script import pattern")
});

static SCRIPT_REQUIRE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"require\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid script require pattern")
});

/// Line-anchored Python extraction for sources that do not parse.
///
/// Functions come first, then classes. Imports keep only the top-level
/// package (the segment before the first dot).
pub(crate) fn python_fallback(content: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for caps in PY_FUNCTION.captures_iter(content) {
        let start = caps.get(0).map_or(0, |m| m.start());
        extraction
            .elements
            .push(CodeElement::function(&caps[1], line_number_at(content, start)));
    }

    for caps in PY_CLASS.captures_iter(content) {
        let start = caps.get(0).map_or(0, |m| m.start());
        extraction
            .elements
            .push(CodeElement::class(&caps[1], line_number_at(content, start)));
    }

    for caps in PY_IMPORT.captures_iter(content) {
        let module = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
        let top_level = module
            .and_then(|m| m.split('.').next())
            .map(|m| m.trim_end_matches(','))
            .filter(|m| !m.is_empty());
        if let Some(top_level) = top_level {
            extraction.imports.push(top_level.to_string());
        }
    }

    extraction
}

/// JavaScript/TypeScript extraction; duplicates are preserved
pub(crate) fn script_elements(content: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for pattern in SCRIPT_FUNCTIONS.iter() {
        for caps in pattern.captures_iter(content) {
            let Some(name) = caps.get(1) else {
                continue;
            };
            let start = caps.get(0).map_or(0, |m| m.start());
            extraction
                .elements
                .push(CodeElement::function(name.as_str(), line_number_at(content, start)));
        }
    }

    for caps in SCRIPT_CLASS.captures_iter(content) {
        let start = caps.get(0).map_or(0, |m| m.start());
        extraction
            .elements
            .push(CodeElement::class(&caps[1], line_number_at(content, start)));
    }

    for pattern in [&*SCRIPT_FROM_IMPORT, &*SCRIPT_REQUIRE] {
        for caps in pattern.captures_iter(content) {
            extraction.imports.push(caps[1].to_string());
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementKind;
    use pretty_assertions::assert_eq;

    fn names(extraction: &Extraction) -> Vec<(&str, ElementKind, usize)> {
        extraction
            .elements
            .iter()
            .map(|e| (e.name.as_str(), e.kind, e.declaration_line))
            .collect()
    }

    #[test]
    fn python_fallback_is_line_anchored() {
        let code = "def top(a):\n    def nested():\n        pass\nclass Model(Base):\n    pass\nclass Bare:\n  x = (\n";
        let extraction = python_fallback(code);
        assert_eq!(
            names(&extraction),
            vec![
                ("top", ElementKind::Function, 1),
                ("Model", ElementKind::Class, 4),
                ("Bare", ElementKind::Class, 6),
            ]
        );
        assert!(extraction.elements.iter().all(|e| e.parameters.is_none()));
    }

    #[test]
    fn python_fallback_keeps_top_level_package() {
        let code = "import os.path\nfrom collections.abc import Mapping\nimport sys, json\nfrom . import local\n";
        let extraction = python_fallback(code);
        assert_eq!(extraction.imports, vec!["os", "collections", "sys"]);
    }

    #[test]
    fn script_patterns_overcount_plain_function_declarations() {
        let code = "function greet() {}\n";
        let extraction = script_elements(code);
        // Matched by the bare declaration pattern and by the export/async pattern.
        assert_eq!(
            names(&extraction),
            vec![
                ("greet", ElementKind::Function, 1),
                ("greet", ElementKind::Function, 1),
            ]
        );
    }

    #[test]
    fn script_patterns_find_arrow_and_expression_functions() {
        let code = r#"
const add = (a, b) => a + b;
const load = async () => fetch(url);
const handler = function () {};
export default async function main() {}

class Calculator {
  add(a, b) { return a + b; }
}
"#;
        let extraction = script_elements(code);
        assert_eq!(
            names(&extraction),
            vec![
                ("main", ElementKind::Function, 5),
                ("add", ElementKind::Function, 2),
                ("load", ElementKind::Function, 3),
                ("handler", ElementKind::Function, 4),
                ("main", ElementKind::Function, 5),
                ("Calculator", ElementKind::Class, 7),
            ]
        );
    }

    #[test]
    fn script_imports_keep_duplicates_in_pattern_order() {
        let code = r#"
const fs = require('fs');
import React from 'react';
import { useState } from "react";
const again = require("fs");
"#;
        let extraction = script_elements(code);
        assert_eq!(extraction.imports, vec!["react", "react", "fs", "fs"]);
    }
}
