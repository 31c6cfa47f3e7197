//! The `prettier` module: code-formatter configuration.

use std::path::Path;

use stamp_core::application::ports::ProjectModule;
use stamp_core::domain::module::keys;
use stamp_core::domain::{ModuleParameters, ModuleSlug, ResolvedProperties};
use stamp_core::error::StampResult;

use super::write_project_file;

const PRETTIER_IGNORE: &str = "\
target/
node_modules/
dist/
";

/// Writes `.prettierrc.json` and `.prettierignore` into the project
/// directory. Re-applying overwrites the previous configuration.
pub struct PrettierModule {
    parameters: ModuleParameters,
}

impl PrettierModule {
    pub fn new() -> Self {
        Self {
            parameters: ModuleParameters::new().declare(keys::INDENT_SIZE, 2),
        }
    }
}

impl Default for PrettierModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectModule for PrettierModule {
    fn slug(&self) -> ModuleSlug {
        ModuleSlug::new("prettier")
    }

    fn description(&self) -> &str {
        "Format your code with Prettier"
    }

    fn parameters(&self) -> &ModuleParameters {
        &self.parameters
    }

    fn apply(&self, project_path: &Path, properties: &ResolvedProperties) -> StampResult<()> {
        let slug = self.slug();
        let tab_width = properties
            .get(keys::INDENT_SIZE)
            .and_then(|v| v.as_integer())
            .unwrap_or(2);

        write_project_file(&slug, project_path, ".prettierrc.json", &prettierrc(tab_width))?;
        write_project_file(&slug, project_path, ".prettierignore", PRETTIER_IGNORE)?;
        Ok(())
    }
}

fn prettierrc(tab_width: i64) -> String {
    format!(
        r#"{{
  "tabWidth": {tab_width},
  "printWidth": 100,
  "singleQuote": true,
  "trailingComma": "es5"
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_prettier_configuration() {
        let dir = TempDir::new().unwrap();
        let module = PrettierModule::new();
        let properties =
            ResolvedProperties::resolve(&module.slug(), module.parameters(), &[]).unwrap();

        module.apply(dir.path(), &properties).unwrap();

        let rc = std::fs::read_to_string(dir.path().join(".prettierrc.json")).unwrap();
        assert!(rc.contains("\"tabWidth\": 2"));
        assert!(dir.path().join(".prettierignore").exists());
    }

    #[test]
    fn reapplying_overwrites_previous_output() {
        let dir = TempDir::new().unwrap();
        let module = PrettierModule::new();

        let two = ResolvedProperties::resolve(&module.slug(), module.parameters(), &[]).unwrap();
        module.apply(dir.path(), &two).unwrap();

        let four = ResolvedProperties::resolve(
            &module.slug(),
            module.parameters(),
            &[(keys::INDENT_SIZE.into(), "4".into())],
        )
        .unwrap();
        module.apply(dir.path(), &four).unwrap();

        let rc = std::fs::read_to_string(dir.path().join(".prettierrc.json")).unwrap();
        assert!(rc.contains("\"tabWidth\": 4"));
    }
}
