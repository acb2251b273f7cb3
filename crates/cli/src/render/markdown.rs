use super::{file_name, group_thousands};
use synth_extractor::{FileSummary, FolderSummary};
use synth_project::ProjectSummary;

const MAX_FILE_ELEMENTS: usize = 10;
const MAX_FILE_IMPORTS: usize = 10;
const MAX_FOLDER_FILES: usize = 10;
const MAX_PROJECT_DEPENDENCIES: usize = 15;
const MAX_PROJECT_KEY_FILES: usize = 5;
const MAX_PROJECT_ANNOTATIONS: usize = 5;

pub(crate) fn render_file_markdown(summary: &FileSummary) -> String {
    let mut md = String::new();
    md.push_str(&format!("# File Summary: {}\n\n", file_name(&summary.path)));
    md.push_str(&format!("**Path:** `{}`\n", summary.path));
    md.push_str(&format!("**Type:** {}\n", summary.language));
    md.push_str(&format!(
        "**Size:** {} bytes\n",
        group_thousands(summary.size_bytes)
    ));
    md.push_str(&format!("**Lines:** {}\n\n", summary.line_count));

    if !summary.elements.is_empty() {
        md.push_str("## Key Elements\n\n");
        for element in summary.elements.iter().take(MAX_FILE_ELEMENTS) {
            md.push_str(&format!(
                "- **{}** `{}` (line {})\n",
                element.kind.as_str(),
                element.name,
                element.declaration_line
            ));
            if let Some(doc) = element.summary_text.as_deref().filter(|d| !d.is_empty()) {
                md.push_str(&format!("  - {doc}\n"));
            }
        }
        md.push('\n');
    }

    if !summary.imports.is_empty() {
        md.push_str("## Imports\n\n");
        md.push_str(&backticked(summary.imports.iter().take(MAX_FILE_IMPORTS)));
        md.push_str("\n\n");
    }

    push_todos(&mut md, summary.todos.iter());
    push_blockers(&mut md, summary.blockers.iter());

    finish(md)
}

pub(crate) fn render_folder_markdown(summary: &FolderSummary) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Folder Summary: {}\n\n", file_name(&summary.path)));
    md.push_str(&format!("**Path:** `{}`\n", summary.path));
    md.push_str(&format!("**Files:** {}\n", summary.file_count));
    md.push_str(&format!(
        "**Total Lines:** {}\n\n",
        group_thousands(summary.total_lines as u64)
    ));

    if !summary.languages.is_empty() {
        let mut counts: Vec<_> = summary.languages.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1));

        md.push_str("## File Types\n\n");
        for (language, count) in counts {
            md.push_str(&format!("- {language}: {count}\n"));
        }
        md.push('\n');
    }

    if !summary.files.is_empty() {
        md.push_str("## Files\n\n");
        for file in summary.files.iter().take(MAX_FOLDER_FILES) {
            md.push_str(&format!(
                "- `{}` - {}\n",
                file_name(&file.path),
                file.description
            ));
        }
        md.push('\n');
    }

    finish(md)
}

pub(crate) fn render_project_markdown(summary: &ProjectSummary) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Project Summary: {}\n\n", summary.name));
    md.push_str(&format!("**Type:** {}\n", summary.project_type));
    if let Some(version) = summary.version.as_deref().filter(|v| !v.is_empty()) {
        md.push_str(&format!("**Version:** {version}\n"));
    }
    md.push_str(&format!("**Files:** {}\n", summary.file_count));
    md.push_str(&format!(
        "**Total Lines:** {}\n\n",
        group_thousands(summary.total_lines as u64)
    ));

    if !summary.description.is_empty() {
        md.push_str(&format!("> {}\n\n", summary.description));
    }

    if !summary.main_technologies.is_empty() {
        let technologies: Vec<String> = summary
            .main_technologies
            .iter()
            .map(|t| format!("**{t}**"))
            .collect();
        md.push_str("## Technologies\n\n");
        md.push_str(&technologies.join(", "));
        md.push_str("\n\n");
    }

    if !summary.entry_points.is_empty() {
        md.push_str("## Entry Points\n\n");
        for entry in &summary.entry_points {
            md.push_str(&format!("- `{entry}`\n"));
        }
        md.push('\n');
    }

    if !summary.dependencies.is_empty() {
        md.push_str("## Dependencies\n\n");
        md.push_str(&backticked(
            summary.dependencies.iter().take(MAX_PROJECT_DEPENDENCIES),
        ));
        md.push_str("\n\n");
    }

    if !summary.key_files.is_empty() {
        md.push_str("## Key Files\n\n");
        for file in summary.key_files.iter().take(MAX_PROJECT_KEY_FILES) {
            md.push_str(&format!("### {}\n", file_name(&file.path)));
            md.push_str(&format!("{}\n\n", file.description));
        }
    }

    push_todos(&mut md, summary.todos.iter().take(MAX_PROJECT_ANNOTATIONS));
    push_blockers(&mut md, summary.blockers.iter().take(MAX_PROJECT_ANNOTATIONS));

    if !summary.recent_changes.is_empty() {
        md.push_str("## Recent Changes\n\n");
        for change in &summary.recent_changes {
            md.push_str(&format!("- {change}\n"));
        }
        md.push('\n');
    }

    finish(md)
}

fn push_todos<'a>(md: &mut String, todos: impl ExactSizeIterator<Item = &'a String>) {
    push_checklist(md, "TODOs", "- [ ]", todos);
}

fn push_blockers<'a>(md: &mut String, blockers: impl ExactSizeIterator<Item = &'a String>) {
    push_checklist(md, "Blockers", "- [!]", blockers);
}

fn push_checklist<'a>(
    md: &mut String,
    heading: &str,
    marker: &str,
    items: impl ExactSizeIterator<Item = &'a String>,
) {
    if items.len() == 0 {
        return;
    }
    md.push_str(&format!("## {heading}\n\n"));
    for item in items {
        md.push_str(&format!("{marker} {item}\n"));
    }
    md.push('\n');
}

fn backticked<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items
        .map(|item| format!("`{item}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sections end with a blank line; the document ends with a single newline
fn finish(mut md: String) -> String {
    if md.ends_with("\n\n") {
        md.pop();
    }
    md
}
