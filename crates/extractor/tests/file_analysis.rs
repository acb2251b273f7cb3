use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use synth_extractor::{analyze_file, summarize_folder, DetailLevel, ElementKind, Language};

fn write(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn empty_file_counts_one_line() {
    let temp = tempfile::tempdir().unwrap();
    let path = write(temp.path(), "empty.py", b"");

    let summary = analyze_file(&path, DetailLevel::Standard);
    assert_eq!(summary.line_count, 1);
    assert_eq!(summary.size_bytes, 0);
    assert_eq!(summary.language, Language::Python);
    assert!(summary.elements.is_empty());
    assert_eq!(summary.description, "empty.py - 1 lines");
}

#[test]
fn missing_file_degrades_to_empty_content() {
    let temp = tempfile::tempdir().unwrap();
    let summary = analyze_file(temp.path().join("ghost.ts"), DetailLevel::Detailed);

    assert_eq!(summary.line_count, 1);
    assert_eq!(summary.size_bytes, 0);
    assert_eq!(summary.language, Language::TypeScript);
    assert!(summary.todos.is_empty());
}

#[test]
fn unknown_extension_is_classified_unknown() {
    let temp = tempfile::tempdir().unwrap();
    let path = write(temp.path(), "blob.bin", &[0, 159, 146, 150, 10, 1]);

    let summary = analyze_file(&path, DetailLevel::Standard);
    assert_eq!(summary.language, Language::Unknown);
    assert_eq!(summary.size_bytes, 6);
    assert_eq!(summary.line_count, 2);
    assert!(summary.elements.is_empty());
    assert!(summary.imports.is_empty());
}

#[test]
fn malformed_python_still_summarizes() {
    let temp = tempfile::tempdir().unwrap();
    let code = "import json\n\ndef valid(a, b):\n    return a\n\ndef broken(:\n    pass\n\nclass Thing(\n";
    let path = write(temp.path(), "broken.py", code.as_bytes());

    let summary = analyze_file(&path, DetailLevel::Standard);
    let names: Vec<_> = summary.elements.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["valid", "broken", "Thing"]);
    assert_eq!(summary.imports, vec!["json"]);
    assert!(summary.elements.iter().all(|e| e.parameters.is_none()));
}

#[test]
fn todo_and_fixme_are_split() {
    let temp = tempfile::tempdir().unwrap();
    let code = "# TODO: fix X\nconst y = 1;\n// FIXME: broken Y\n";
    let path = write(temp.path(), "mixed.js", code.as_bytes());

    let summary = analyze_file(&path, DetailLevel::Standard);
    assert_eq!(summary.todos, vec!["fix X"]);
    assert_eq!(summary.blockers, vec!["broken Y"]);
}

#[test]
fn javascript_declarations_may_be_counted_twice() {
    let temp = tempfile::tempdir().unwrap();
    let code = "function render() {}\nconst view = () => render();\nclass App {}\n";
    let path = write(temp.path(), "app.js", code.as_bytes());

    let summary = analyze_file(&path, DetailLevel::Standard);
    let functions: Vec<_> = summary
        .elements
        .iter()
        .filter(|e| e.kind == ElementKind::Function)
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(functions, vec!["render", "view", "render"]);
    assert_eq!(
        summary.description,
        "app.js - 1 class(es) - 3 function(s) - 4 lines"
    );
}

#[test]
fn brief_suppresses_only_elements() {
    let temp = tempfile::tempdir().unwrap();
    let code = "import os\n\n# TODO: cache\ndef run():\n    \"\"\"Run it.\"\"\"\n";
    let path = write(temp.path(), "run.py", code.as_bytes());

    let brief = analyze_file(&path, DetailLevel::Brief);
    let standard = analyze_file(&path, DetailLevel::Standard);

    assert!(brief.elements.is_empty());
    assert_eq!(standard.elements.len(), 1);
    assert_eq!(standard.elements[0].summary_text.as_deref(), Some("Run it."));
    assert_eq!(brief.imports, standard.imports);
    assert_eq!(brief.todos, standard.todos);
    assert_eq!(brief.description, standard.description);
}

#[test]
fn manifest_file_lists_dependencies() {
    let temp = tempfile::tempdir().unwrap();
    let path = write(
        temp.path(),
        "package.json",
        br#"{"dependencies":{"express":"^4"},"devDependencies":{"jest":"^29"}}"#,
    );

    let summary = analyze_file(&path, DetailLevel::Standard);
    assert_eq!(summary.language, Language::Json);
    assert_eq!(summary.dependencies, vec!["express", "jest"]);
}

#[test]
fn invalid_utf8_is_dropped_not_fatal() {
    let temp = tempfile::tempdir().unwrap();
    let path = write(temp.path(), "latin.py", b"# TODO: caf\xe9 menu\ndef ok():\n    pass\n");

    let summary = analyze_file(&path, DetailLevel::Standard);
    assert_eq!(summary.todos, vec!["caf menu"]);
    assert_eq!(summary.elements[0].name, "ok");
}

#[test]
fn analysis_is_idempotent() {
    let temp = tempfile::tempdir().unwrap();
    let path = write(
        temp.path(),
        "svc.py",
        b"import sys\nclass Svc:\n    def up(self, port=80):\n        pass\n",
    );

    let first = analyze_file(&path, DetailLevel::Detailed);
    let second = analyze_file(&path, DetailLevel::Detailed);
    assert_eq!(first, second);
}

#[test]
fn folder_summary_is_shallow_and_sorted() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("web");
    fs::create_dir_all(root.join("nested")).unwrap();
    write(&root, "b.ts", b"export function b() {}\n");
    write(&root, "a.ts", b"const a = 1;\n");
    write(&root, "style.css", b"body {}\n");
    write(&root, "image.png", b"\x89PNG");
    write(&root.join("nested"), "deep.ts", b"const deep = 1;\n");

    let folder = summarize_folder(&root, DetailLevel::Standard);
    let names: Vec<_> = folder
        .files
        .iter()
        .map(|f| Path::new(&f.path).file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["a.ts", "b.ts", "style.css"]);
    assert_eq!(folder.file_count, 3);
    assert_eq!(folder.total_lines, 6);
    assert_eq!(folder.languages.get("typescript"), Some(&2));
    assert_eq!(folder.languages.get("css"), Some(&1));
    assert_eq!(folder.description, "3 files in web, primarily typescript");
}

#[test]
fn folder_ties_prefer_first_seen_tag() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("mix");
    fs::create_dir(&root).unwrap();
    write(&root, "a.rs", b"fn main() {}\n");
    write(&root, "b.go", b"package main\n");

    let folder = summarize_folder(&root, DetailLevel::Brief);
    assert_eq!(folder.description, "2 files in mix, primarily rust");
}

#[test]
fn empty_folder_has_no_primary_type() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().join("void");
    fs::create_dir(&root).unwrap();

    let folder = summarize_folder(&root, DetailLevel::Standard);
    assert_eq!(folder.file_count, 0);
    assert_eq!(folder.description, "0 files in void");
    assert!(folder.languages.is_empty());
}
