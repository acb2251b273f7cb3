use proptest::prelude::*;
use std::path::Path;
use synth_extractor::{
    extract, extract_dependencies, line_count, DetailLevel, FileAnalyzer, Language,
    EXTENSION_MAP, MAX_FILE_DEPENDENCIES,
};

proptest! {
    #[test]
    fn classification_is_total(stem in "[a-z]{1,8}", ext in "[a-zA-Z0-9]{0,5}") {
        let name = format!("{stem}.{ext}");
        let first = Language::from_path(&name);
        prop_assert_eq!(first, Language::from_path(&name));

        let expected = EXTENSION_MAP
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(&ext))
            .map(|(_, language)| *language)
            .unwrap_or(Language::Unknown);
        prop_assert_eq!(first, expected);
    }

    #[test]
    fn line_count_is_at_least_one(content in ".{0,200}") {
        prop_assert!(line_count(&content) >= 1);

        let summary = FileAnalyzer::new(DetailLevel::Standard)
            .analyze_content(Path::new("any.txt"), &content, content.len() as u64);
        prop_assert!(summary.line_count >= 1);
        prop_assert!(summary.todos.len() <= 10);
        prop_assert!(summary.blockers.len() <= 10);
    }

    #[test]
    fn extraction_never_panics(content in "(def|class|import|from|function|const| |\\(|\\)|:|\\n|[a-z]){0,80}") {
        for language in [Language::Python, Language::JavaScript, Language::TypeScript] {
            let extraction = extract(&content, language);
            for element in &extraction.elements {
                prop_assert!(element.declaration_line >= 1);
            }
        }
    }

    #[test]
    fn manifest_dependencies_are_capped(count in 0usize..60) {
        let entries: Vec<String> = (0..count).map(|i| format!("\"pkg{i}\":\"1\"")).collect();
        let content = format!("{{\"dependencies\":{{{}}}}}", entries.join(","));
        let found = extract_dependencies(&content, Language::Json);
        prop_assert_eq!(found.len(), count.min(MAX_FILE_DEPENDENCIES));
    }
}
