use std::path::Path;

/// Maximum entry points in a project summary
pub const MAX_ENTRY_POINTS: usize = 5;

/// Conventional entry file names, checked at the root and under `src/`
pub const ENTRY_POINT_NAMES: &[&str] = &[
    "main.py",
    "app.py",
    "__main__.py",
    "index.js",
    "index.ts",
    "main.js",
    "main.ts",
    "App.tsx",
    "App.jsx",
    "App.js",
    "main.rs",
    "lib.rs",
];

/// Present entry files in name-list order, root match before `src/` match
pub fn find_entry_points(root: &Path) -> Vec<String> {
    let src = root.join("src");
    ENTRY_POINT_NAMES
        .iter()
        .flat_map(|name| {
            let at_root = root.join(name).exists().then(|| name.to_string());
            let in_src = src.join(name).exists().then(|| format!("src/{name}"));
            at_root.into_iter().chain(in_src)
        })
        .take(MAX_ENTRY_POINTS)
        .collect()
}
