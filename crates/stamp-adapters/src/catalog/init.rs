//! The `init` module: baseline project files.

use std::path::Path;

use tracing::info;

use stamp_core::application::ports::ProjectModule;
use stamp_core::domain::module::keys;
use stamp_core::domain::{ModuleParameters, ModuleSlug, ResolvedProperties};
use stamp_core::error::StampResult;

use super::write_project_file;

const GITIGNORE: &str = "\
# Build output
target/
node_modules/
dist/

# IDE
.idea/
*.iml
.vscode/
";

/// Writes `README.md`, `package.json`, `.editorconfig`, and `.gitignore`
/// into the project directory.
pub struct InitModule {
    parameters: ModuleParameters,
}

impl InitModule {
    pub fn new() -> Self {
        Self {
            parameters: ModuleParameters::new()
                .declare(keys::PACKAGE_NAME, "com.mycompany.myapp")
                .declare(keys::PROJECT_NAME, "JHipster Sample Application")
                .declare(keys::BASE_NAME, "jhipsterSampleApplication")
                .declare(keys::INDENT_SIZE, 2),
        }
    }
}

impl Default for InitModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectModule for InitModule {
    fn slug(&self) -> ModuleSlug {
        ModuleSlug::new("init")
    }

    fn description(&self) -> &str {
        "Init project"
    }

    fn parameters(&self) -> &ModuleParameters {
        &self.parameters
    }

    fn apply(&self, project_path: &Path, properties: &ResolvedProperties) -> StampResult<()> {
        let slug = self.slug();

        // Defaults guarantee every key resolves; unwrap_or keeps the module
        // total if a caller hands in a foreign property set.
        let project_name = properties
            .get(keys::PROJECT_NAME)
            .and_then(|v| v.as_text())
            .unwrap_or("Sample Application");
        let base_name = properties
            .get(keys::BASE_NAME)
            .and_then(|v| v.as_text())
            .unwrap_or("sampleApplication");
        let indent_size = properties
            .get(keys::INDENT_SIZE)
            .and_then(|v| v.as_integer())
            .unwrap_or(2);

        write_project_file(&slug, project_path, "README.md", &readme(project_name))?;
        write_project_file(
            &slug,
            project_path,
            "package.json",
            &package_json(base_name, project_name),
        )?;
        write_project_file(
            &slug,
            project_path,
            ".editorconfig",
            &editorconfig(indent_size),
        )?;
        write_project_file(&slug, project_path, ".gitignore", GITIGNORE)?;

        info!(project = %project_path.display(), "Project initialized");
        Ok(())
    }
}

fn readme(project_name: &str) -> String {
    format!("# {project_name}\n")
}

fn package_json(base_name: &str, project_name: &str) -> String {
    format!(
        r#"{{
  "name": "{base_name}",
  "version": "0.0.0",
  "description": "{project_name}",
  "private": true
}}
"#
    )
}

fn editorconfig(indent_size: i64) -> String {
    format!(
        "root = true\n\n[*]\ncharset = utf-8\nend_of_line = lf\ninsert_final_newline = true\nindent_style = space\nindent_size = {indent_size}\n"
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────
