use super::group_thousands;
use synth_extractor::{FileSummary, FolderSummary};
use synth_project::ProjectSummary;

pub(crate) fn render_file_text(summary: &FileSummary) -> String {
    [
        format!("File: {}", summary.path),
        format!("Type: {}", summary.language),
        format!("Size: {} bytes", group_thousands(summary.size_bytes)),
        format!("Lines: {}", summary.line_count),
        format!("Elements: {}", summary.elements.len()),
        format!("TODOs: {}", summary.todos.len()),
        format!("Blockers: {}", summary.blockers.len()),
    ]
    .join("\n")
}

pub(crate) fn render_folder_text(summary: &FolderSummary) -> String {
    let types: Vec<String> = summary
        .languages
        .iter()
        .map(|(language, count)| format!("{language}:{count}"))
        .collect();

    [
        format!("Folder: {}", summary.path),
        format!("Files: {}", summary.file_count),
        format!("Lines: {}", group_thousands(summary.total_lines as u64)),
        format!("Types: {}", types.join(", ")),
    ]
    .join("\n")
}

pub(crate) fn render_project_text(summary: &ProjectSummary) -> String {
    [
        format!("Project: {}", summary.name),
        format!("Type: {}", summary.project_type),
        format!(
            "Version: {}",
            summary
                .version
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or("unknown")
        ),
        format!("Files: {}", summary.file_count),
        format!("Lines: {}", group_thousands(summary.total_lines as u64)),
        format!("Technologies: {}", summary.main_technologies.join(", ")),
        format!("Dependencies: {}", summary.dependencies.len()),
        format!("TODOs: {}", summary.todos.len()),
    ]
    .join("\n")
}
