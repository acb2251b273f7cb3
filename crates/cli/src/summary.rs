use crate::render::{self, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use synth_extractor::{FileSummary, FolderSummary};
use synth_project::ProjectSummary;

/// Any summary the CLI can render
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Summary {
    File(FileSummary),
    Folder(FolderSummary),
    Project(ProjectSummary),
}

impl Summary {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let rendered = match (self, format) {
            (_, OutputFormat::Json) => render::render_json(self)?,
            (Summary::File(file), OutputFormat::Markdown) => render::render_file_markdown(file),
            (Summary::Folder(folder), OutputFormat::Markdown) => {
                render::render_folder_markdown(folder)
            }
            (Summary::Project(project), OutputFormat::Markdown) => {
                render::render_project_markdown(project)
            }
            (Summary::File(file), OutputFormat::Text) => render::render_file_text(file),
            (Summary::Folder(folder), OutputFormat::Text) => render::render_folder_text(folder),
            (Summary::Project(project), OutputFormat::Text) => render::render_project_text(project),
        };
        Ok(rendered)
    }
}

impl From<FileSummary> for Summary {
    fn from(summary: FileSummary) -> Self {
        Summary::File(summary)
    }
}

impl From<FolderSummary> for Summary {
    fn from(summary: FolderSummary) -> Self {
        Summary::Folder(summary)
    }
}

impl From<ProjectSummary> for Summary {
    fn from(summary: ProjectSummary) -> Self {
        Summary::Project(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_extractor::{CodeElement, Language};

    fn file() -> Summary {
        Summary::File(FileSummary {
            path: "lib/util.js".into(),
            language: Language::JavaScript,
            size_bytes: 10,
            line_count: 2,
            description: "util.js - 1 function(s) - 2 lines".into(),
            elements: vec![CodeElement::function("helper", 1)],
            imports: vec![],
            todos: vec![],
            blockers: vec![],
            dependencies: vec![],
        })
    }

    #[test]
    fn json_uses_summary_field_names() {
        let json = file().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file_type"], "javascript");
        assert_eq!(value["key_elements"][0]["name"], "helper");
        assert_eq!(value["key_elements"][0]["type"], "function");
        assert_eq!(value["key_elements"][0]["line"], 1);
        assert!(value["key_elements"][0]["docstring"].is_null());
        assert!(value.get("File").is_none());
    }

    #[test]
    fn each_format_dispatches_on_variant() {
        let summary = file();
        assert!(summary
            .render(OutputFormat::Markdown)
            .unwrap()
            .starts_with("# File Summary: util.js"));
        assert!(summary
            .render(OutputFormat::Text)
            .unwrap()
            .starts_with("File: lib/util.js\nType: javascript"));
    }
}
