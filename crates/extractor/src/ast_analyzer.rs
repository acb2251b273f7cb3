use crate::elements::Extraction;
use crate::error::{ExtractError, Result};
use crate::types::CodeElement;
use tree_sitter::{Node, Parser};

/// Tree-sitter based analyzer for Python sources
pub struct PythonAstAnalyzer {
    parser: Parser,
}

impl PythonAstAnalyzer {
    /// Create a parser bound to the Python grammar
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ExtractError::tree_sitter(format!("Failed to set language: {e}")))?;

        Ok(Self { parser })
    }

    /// Parse and collect every function, class and import in document order.
    ///
    /// A tree with any error or missing node is rejected so the caller can fall
    /// back to pattern extraction.
    pub fn analyze(&mut self, content: &str) -> Result<Extraction> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| ExtractError::parse("Failed to parse source code"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ExtractError::parse(format!(
                "syntax error at line {}",
                first_error_line(root)
            )));
        }
        if let Some(line) = python2_statement_line(root) {
            return Err(ExtractError::parse(format!(
                "Python 2 statement at line {line}"
            )));
        }

        let mut extraction = Extraction::default();
        walk_preorder(root, |node| match node.kind() {
            "function_definition" => {
                if let Some(element) = Self::function_element(content, node) {
                    extraction.elements.push(element);
                }
            }
            "class_definition" => {
                if let Some(element) = Self::class_element(content, node) {
                    extraction.elements.push(element);
                }
            }
            "import_statement" => Self::collect_plain_imports(content, node, &mut extraction.imports),
            "import_from_statement" => {
                if let Some(module) = Self::from_import_module(content, node) {
                    extraction.imports.push(module);
                }
            }
            "future_import_statement" => extraction.imports.push("__future__".to_string()),
            _ => {}
        });

        Ok(extraction)
    }

    fn function_element(content: &str, node: Node) -> Option<CodeElement> {
        let name = node.child_by_field_name("name")?;
        let parameters = node
            .child_by_field_name("parameters")
            .map(|params| Self::parameter_names(content, params))
            .unwrap_or_default();
        let docstring = Self::docstring(content, node);

        Some(
            CodeElement::function(node_text(content, name), node.start_position().row + 1)
                .with_summary(docstring.as_deref())
                .with_parameters(parameters),
        )
    }

    fn class_element(content: &str, node: Node) -> Option<CodeElement> {
        let name = node.child_by_field_name("name")?;
        let docstring = Self::docstring(content, node);

        Some(
            CodeElement::class(node_text(content, name), node.start_position().row + 1)
                .with_summary(docstring.as_deref()),
        )
    }

    /// Positional parameter names; stops at `*` or `*args`
    fn parameter_names(content: &str, params: Node) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = params.walk();

        for param in params.named_children(&mut cursor) {
            let name = match param.kind() {
                "identifier" => Some(param),
                "default_parameter" | "typed_default_parameter" => {
                    param.child_by_field_name("name")
                }
                "typed_parameter" => match param.named_child(0) {
                    Some(inner) if inner.kind() == "identifier" => Some(inner),
                    _ => break,
                },
                "keyword_separator" | "list_splat_pattern" => break,
                _ => None,
            };

            if let Some(name) = name.filter(|n| n.kind() == "identifier") {
                names.push(node_text(content, name).to_string());
            }
        }

        names
    }

    /// Leading string literal of a definition body, indentation-cleaned
    fn docstring(content: &str, definition: Node) -> Option<String> {
        let body = definition.child_by_field_name("body")?;
        let mut cursor = body.walk();
        let first = body
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment")?;
        if first.kind() != "expression_statement" || first.named_child_count() != 1 {
            return None;
        }

        let string = first.named_child(0)?;
        if string.kind() != "string" {
            return None;
        }

        let mut raw = String::new();
        let mut string_cursor = string.walk();
        for part in string.named_children(&mut string_cursor) {
            match part.kind() {
                "string_start" => {
                    // f-strings and bytes are not docstrings
                    let prefix = node_text(content, part);
                    if prefix.chars().any(|c| matches!(c, 'f' | 'F' | 'b' | 'B')) {
                        return None;
                    }
                }
                "string_content" => raw.push_str(node_text(content, part)),
                "interpolation" => return None,
                _ => {}
            }
        }

        let cleaned = clean_docstring(&raw);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }

    fn collect_plain_imports(content: &str, node: Node, imports: &mut Vec<String>) {
        let mut cursor = node.walk();
        for name in node.children_by_field_name("name", &mut cursor) {
            let module = match name.kind() {
                "aliased_import" => name.child_by_field_name("name"),
                _ => Some(name),
            };
            if let Some(module) = module {
                imports.push(node_text(content, module).to_string());
            }
        }
    }

    /// `from X import Y` yields `X`; a bare relative `from . import Y` yields nothing
    fn from_import_module(content: &str, node: Node) -> Option<String> {
        let module = node.child_by_field_name("module_name")?;
        match module.kind() {
            "dotted_name" => Some(node_text(content, module).to_string()),
            "relative_import" => {
                let mut cursor = module.walk();
                let dotted = module
                    .named_children(&mut cursor)
                    .find(|child| child.kind() == "dotted_name");
                dotted.map(|name| node_text(content, name).to_string())
            }
            _ => None,
        }
    }
}

/// Visit every node of the tree in document order
fn walk_preorder<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>)) {
    let mut cursor = root.walk();
    'walk: loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }
}

fn first_error_line(root: Node) -> usize {
    let mut line = root.start_position().row + 1;
    let mut found = false;
    walk_preorder(root, |node| {
        if !found && (node.is_error() || node.is_missing()) {
            line = node.start_position().row + 1;
            found = true;
        }
    });
    line
}

/// `print "x"` and `exec "x"` parse under this grammar but are not Python 3
fn python2_statement_line(root: Node) -> Option<usize> {
    let mut line = None;
    walk_preorder(root, |node| {
        if line.is_none() && matches!(node.kind(), "print_statement" | "exec_statement") {
            line = Some(node.start_position().row + 1);
        }
    });
    line
}

fn node_text<'a>(content: &'a str, node: Node) -> &'a str {
    &content[node.start_byte()..node.end_byte()]
}

/// Strip the first line's leading whitespace, dedent the rest by their common
/// margin and drop blank lines at both ends
fn clean_docstring(raw: &str) -> String {
    let mut lines = raw.lines();
    let first = lines.next().unwrap_or("").trim_start();
    let rest: Vec<&str> = lines.collect();

    let margin = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<&str> = Vec::with_capacity(rest.len() + 1);
    cleaned.push(first);
    cleaned.extend(rest.iter().map(|line| strip_margin(line, margin)));

    while cleaned.last().is_some_and(|line| line.trim().is_empty()) {
        cleaned.pop();
    }
    let leading_blank = cleaned
        .iter()
        .take_while(|line| line.trim().is_empty())
        .count();

    cleaned[leading_blank..].join("\n")
}

fn strip_margin(line: &str, margin: usize) -> &str {
    let skip: usize = line
        .chars()
        .take(margin)
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    &line[skip..]
}
