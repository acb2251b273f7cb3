use std::path::Path;
use synth_extractor::PackageManifest;

/// Maximum technologies in a project summary
pub const MAX_TECHNOLOGIES: usize = 10;

/// Indicator file (relative to the root) to the technologies it implies
pub const TECHNOLOGY_INDICATORS: &[(&str, &[&str])] = &[
    ("package.json", &["Node.js"]),
    ("requirements.txt", &["Python"]),
    ("Cargo.toml", &["Rust"]),
    ("tsconfig.json", &["TypeScript"]),
    ("tailwind.config.js", &["Tailwind CSS"]),
    ("next.config.js", &["Next.js"]),
    ("vite.config.js", &["Vite"]),
    ("webpack.config.js", &["Webpack"]),
    (".eslintrc", &["ESLint"]),
    ("jest.config.js", &["Jest"]),
    ("pytest.ini", &["pytest"]),
];

/// Manifest dependency name to technology name
pub const DEPENDENCY_TECHNOLOGIES: &[(&str, &str)] = &[
    ("react", "React"),
    ("react-native", "React Native"),
    ("vue", "Vue.js"),
    ("angular", "Angular"),
    ("express", "Express.js"),
    ("fastify", "Fastify"),
    ("socket.io", "Socket.IO"),
    ("tailwindcss", "Tailwind CSS"),
    ("prisma", "Prisma"),
    ("mongodb", "MongoDB"),
];

/// Technologies implied by indicator files, then by manifest dependencies.
///
/// Duplicates keep their first position; at most [`MAX_TECHNOLOGIES`].
pub fn detect_technologies(root: &Path, manifest: Option<&PackageManifest>) -> Vec<String> {
    let mut found: Vec<&str> = TECHNOLOGY_INDICATORS
        .iter()
        .filter(|(indicator, _)| root.join(indicator).exists())
        .flat_map(|(_, technologies)| technologies.iter().copied())
        .collect();

    if let Some(manifest) = manifest {
        for dependency in manifest.all_dependencies() {
            if let Some((_, technology)) = DEPENDENCY_TECHNOLOGIES
                .iter()
                .find(|(name, _)| *name == dependency)
            {
                found.push(*technology);
            }
        }
    }

    let mut technologies: Vec<String> = Vec::new();
    for technology in found {
        if !technologies.iter().any(|t| t == technology) {
            technologies.push(technology.to_string());
        }
    }
    technologies.truncate(MAX_TECHNOLOGIES);
    technologies
}
