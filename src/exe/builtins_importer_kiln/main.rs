mod core;
mod importers;
mod helpers;

use crate::core::{AssetImporter, BuiltinsConfig, ImporterRegistry, ModificationCheck, Pipeline};
use clap::{Parser, Subcommand};
use nab_kiln::app::{set_panic_hook, AppRun, ExitReason};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum CliCommands
{
    #[clap(about = "Import every builtin asset that changed since the last import")]
    Import
    {
        // ignore timestamps and reimport everything
        #[arg(long)]
        force: bool,

        #[arg(long)]
        parallel: bool,
    },
    #[clap(about = "Show what the next import would do")]
    Status,
    #[clap(about = "Add entries for new source files without importing")]
    Discover,
}

#[derive(Debug, Parser)]
struct CliArgs
{
    #[arg(long, default_value = "builtins.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: CliCommands,
}

fn run(app_run: &AppRun<CliArgs>) -> ExitReason
{
    let config = match BuiltinsConfig::load_file(&app_run.args.config)
    {
        Ok(config) => config,
        Err(err) =>
        {
            log::error!("Failed to load config {:?}: {err}", app_run.args.config);
            return ExitReason::Failure;
        }
    };

    let mut importer = AssetImporter::new(ImporterRegistry::with_default_importers());
    if let CliCommands::Import { parallel: true, .. } = app_run.args.command
    {
        importer.set_parallel(true);
    }
    let pipeline = Pipeline::new(config, importer);

    match &app_run.args.command
    {
        CliCommands::Import { force, .. } =>
        {
            match pipeline.run_import(*force)
            {
                Ok(summary) if summary.is_success() => ExitReason::NormalExit,
                Ok(summary) =>
                {
                    for group in &summary.groups
                    {
                        for failure in &group.report.failures
                        {
                            log::error!("[{}] #{} {:?}: {}", group.name, failure.index, failure.path, failure.error);
                        }
                    }
                    ExitReason::Failure
                }
                Err(err) =>
                {
                    log::error!("Import failed: {err}");
                    ExitReason::Failure
                }
            }
        }
        CliCommands::Status =>
        {
            let (check, groups) = match pipeline.status()
            {
                Ok(status) => status,
                Err(err) =>
                {
                    log::error!("Failed to get import status: {err}");
                    return ExitReason::Failure;
                }
            };

            match check
            {
                ModificationCheck::Unchanged { last_update } => println!("Up to date (last import {last_update})"),
                ModificationCheck::Stale { last_update } => println!("Modified since last import ({last_update})"),
                ModificationCheck::Missing => println!("Never imported"),
            }
            for group in groups
            {
                println!("{} ({}): {} entries, {} new files, {} to import",
                    group.name,
                    group.asset_type,
                    group.entries,
                    group.undiscovered,
                    group.planned);
            }
            ExitReason::NormalExit
        }
        CliCommands::Discover =>
        {
            match pipeline.discover()
            {
                Ok(discovered) =>
                {
                    for (group, added) in discovered
                    {
                        println!("{group}: {added} new entries");
                    }
                    ExitReason::NormalExit
                }
                Err(err) =>
                {
                    log::error!("Discovery failed: {err}");
                    ExitReason::Failure
                }
            }
        }
    }
}

fn main() -> ExitReason
{
    let app_run = AppRun::<CliArgs>::startup("Builtins Importer", env!("CARGO_PKG_VERSION"));
    set_panic_hook();

    let exit_reason = run(&app_run);
    app_run.set_exit_reason(exit_reason);
    exit_reason
}
