use crate::ast_analyzer::PythonAstAnalyzer;
use crate::language::{ElementStrategy, Language};
use crate::patterns;
use crate::types::CodeElement;
use std::collections::HashSet;

/// Code elements and imported module names found in one source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub elements: Vec<CodeElement>,
    pub imports: Vec<String>,
}

/// Extract elements and imports with the strategy registered for `language`.
///
/// Python is parsed with tree-sitter and falls back to line patterns when the
/// source does not parse; either way imports are de-duplicated keeping first
/// occurrence. JavaScript/TypeScript use pattern matching only and keep
/// duplicates. Every other language yields an empty extraction.
pub fn extract(content: &str, language: Language) -> Extraction {
    match language.element_strategy() {
        ElementStrategy::PythonAst => extract_python(content),
        ElementStrategy::ScriptPatterns => patterns::script_elements(content),
        ElementStrategy::None => Extraction::default(),
    }
}

fn extract_python(content: &str) -> Extraction {
    let mut extraction = match PythonAstAnalyzer::new().and_then(|mut a| a.analyze(content)) {
        Ok(extraction) => extraction,
        Err(e) => {
            log::debug!("Python parse failed, falling back to patterns: {e}");
            patterns::python_fallback(content)
        }
    };

    extraction.imports = dedup_in_order(extraction.imports);
    extraction
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
