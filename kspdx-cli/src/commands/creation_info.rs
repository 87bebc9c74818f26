//! `kspdx creation-info` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use kspdx_core::config::DocumentConfig;
use kspdx_spdx::builder::{Clock, FixedClock, SystemClock, build_creation_info, kernel_package_name};
use kspdx_spdx::model::{CreationInfo, CreatorType};
use kspdx_spdx::tvsaver::render_creation_info;

use crate::cli::CreationInfoArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `creation-info` command.
pub async fn execute(
    args: CreationInfoArgs,
    config: &DocumentConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let clock: Box<dyn Clock> = match &args.created {
        Some(ts) => Box::new(
            FixedClock::parse(ts)
                .map_err(|e| CliError::Command(format!("invalid --created timestamp '{ts}': {e}")))?,
        ),
        None => Box::new(SystemClock),
    };

    let ci = build(&args, config, clock.as_ref())?;

    info!(
        document = %ci.document_name,
        namespace = %ci.document_namespace,
        creators = ci.creator_count(),
        "creation info built"
    );

    writer.render(&CreationInfoReport(ci))?;
    Ok(())
}

/// Resolve flags against config defaults and build the section.
///
/// `extra_creator_tools` are appended after the builder's own tool entries.
fn build(
    args: &CreationInfoArgs,
    config: &DocumentConfig,
    clock: &dyn Clock,
) -> Result<CreationInfo, CliError> {
    let package_name = match (&args.package_name, &args.kernel_version) {
        (Some(name), _) => name.clone(),
        (None, Some(version)) => kernel_package_name(version),
        (None, None) => {
            return Err(CliError::Command(
                "either --package-name or --kernel-version is required".to_owned(),
            ));
        }
    };

    let prefix = args
        .namespace_prefix
        .as_deref()
        .unwrap_or(&config.namespace_prefix);
    let creator_type =
        CreatorType::from_str_loose(args.creator_type.as_deref().unwrap_or(&config.creator_type));
    let creator = args.creator.as_deref().unwrap_or(&config.creator);

    let mut ci = build_creation_info(&package_name, &args.code, prefix, creator_type, creator, clock)?;

    ci.creator_tools
        .extend(config.extra_creator_tools.iter().cloned());
    if !config.license_list_version.is_empty() {
        ci.license_list_version = config.license_list_version.clone();
    }

    Ok(ci)
}

/// Creation info payload: tag-value section as text, model fields as JSON.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CreationInfoReport(pub CreationInfo);

impl Render for CreationInfoReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        render_creation_info(&self.0, w)
    }
}
