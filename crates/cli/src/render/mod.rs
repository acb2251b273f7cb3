mod json;
mod markdown;
mod text;

pub(crate) use json::render_json;
pub(crate) use markdown::{render_file_markdown, render_folder_markdown, render_project_markdown};
pub(crate) use text::{render_file_text, render_folder_text, render_project_text};

use std::path::Path;

/// Output flavour of a rendered summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
    Text,
}

/// `1234567` → `1,234,567`
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Last component of a summary path
pub(crate) fn file_name(path: &str) -> String {
    synth_extractor::display_name(Path::new(path))
}
