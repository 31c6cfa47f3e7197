//! Implementation of the `stamp apply` command.

use stamp_adapters::{BuiltinCatalog, GitVersionControl, JsonFileHistory};
use stamp_core::application::{ApplyRequest, ApplyService, CommitOutcome};
use stamp_core::domain::module::keys;
use stamp_core::domain::{CommitPolicy, ModuleSlug, ParameterKey, PropertyValue};

use crate::{
    cli::{ApplyArgs, GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ApplyArgs, _global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let service = ApplyService::new(
        Box::new(BuiltinCatalog::new()),
        Box::new(JsonFileHistory::new()),
        Box::new(GitVersionControl::new()),
    );

    let request = to_request(args);
    let slug = request.slug.clone();
    let project_path = request.project_path.clone();

    let report = service.apply(request)?;

    output.success(&format!(
        "Applied module '{slug}' to {}",
        project_path.display()
    ));
    for (key, value) in report.properties.iter() {
        output.print(&format!("  {key} = {value}"));
    }
    match report.commit {
        CommitOutcome::Committed => output.print("Changes committed"),
        CommitOutcome::Skipped => output.print("Changes left uncommitted"),
    }

    Ok(())
}

/// Translate parsed flags into a core request.
///
/// Only flags the user actually passed become overrides, so the resolver
/// sees "unset" as absence rather than a default-shaped value.
fn to_request(args: ApplyArgs) -> ApplyRequest {
    let mut overrides: Vec<(ParameterKey, PropertyValue)> = Vec::new();
    if let Some(package_name) = args.package_name {
        overrides.push((keys::PACKAGE_NAME.into(), PropertyValue::text(package_name)));
    }
    if let Some(project_name) = args.project_name {
        overrides.push((keys::PROJECT_NAME.into(), PropertyValue::text(project_name)));
    }
    if let Some(base_name) = args.base_name {
        overrides.push((keys::BASE_NAME.into(), PropertyValue::text(base_name)));
    }
    if let Some(indentation) = args.indentation {
        overrides.push((keys::INDENT_SIZE.into(), PropertyValue::Integer(indentation)));
    }

    ApplyRequest {
        project_path: args.project_path,
        slug: ModuleSlug::new(args.slug),
        overrides,
        commit: CommitPolicy::from_flags(args.commit, args.no_commit),
    }
}
