use super::*;
use asset_kiln::{AssetType, DependencyMap, EntryList, ManifestError, ResourceManifest, ResourceManifestFile};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

pub const MANIFEST_NAME: &str = "builtins";

#[derive(Debug)]
pub enum PipelineError
{
    EntryStore(EntryStoreError),
    Manifest(ManifestError),
    Timestamp(TimestampError),
}
impl Display for PipelineError
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { Debug::fmt(self, f) }
}
impl Error for PipelineError { }
impl From<EntryStoreError> for PipelineError
{
    fn from(err: EntryStoreError) -> Self { Self::EntryStore(err) }
}
impl From<ManifestError> for PipelineError
{
    fn from(err: ManifestError) -> Self { Self::Manifest(err) }
}
impl From<TimestampError> for PipelineError
{
    fn from(err: TimestampError) -> Self { Self::Timestamp(err) }
}

#[derive(Debug)]
pub struct GroupReport
{
    pub name: String,
    pub discovered: usize,
    pub report: ImportReport,
}

#[derive(Debug, Default)]
pub struct RunSummary
{
    // nothing changed since the last import, so nothing was looked at
    pub up_to_date: bool,
    pub groups: Vec<GroupReport>,
    pub timestamp_written: bool,
}
impl RunSummary
{
    pub fn is_success(&self) -> bool { self.groups.iter().all(|g| g.report.is_success()) }
    pub fn imported(&self) -> usize { self.groups.iter().map(|g| g.report.imported).sum() }
    pub fn failed(&self) -> usize { self.groups.iter().map(|g| g.report.failures.len()).sum() }
}

#[derive(Debug)]
pub struct GroupStatus
{
    pub name: String,
    pub asset_type: AssetType,
    pub entries: usize,
    // files auto-discovery would add
    pub undiscovered: usize,
    // entries the next import would import
    pub planned: usize,
}

// The whole import: discovery, planning and importing every group, then the timestamp
pub struct Pipeline
{
    config: BuiltinsConfig,
    importer: AssetImporter,
}
impl Pipeline
{
    pub fn new(config: BuiltinsConfig, importer: AssetImporter) -> Self
    {
        Self { config, importer }
    }

    fn check_for_modifications(&self) -> ModificationCheck
    {
        check_for_modifications(
            &self.config.input_root,
            &self.config.timestamp_file,
            self.importer.importers().version_hash())
    }

    // Nothing to do if nothing changed, unless the manifest went missing
    fn is_up_to_date(&self, check: &ModificationCheck) -> bool
    {
        matches!(check, ModificationCheck::Unchanged { .. }) && self.config.manifest_file.is_file()
    }

    // Files the entry stores of a group live in, never discovered as entries
    fn group_files(group: &GroupConfig) -> Vec<&Path>
    {
        let mut files = vec![group.entries.as_path()];
        if let Some(dependencies) = &group.dependencies
        {
            files.push(dependencies.as_path());
        }
        files
    }

    fn load_group_dependencies(group: &GroupConfig) -> Result<Option<DependencyMap>, PipelineError>
    {
        match &group.dependencies
        {
            Some(file) => Ok(Some(load_dependencies(file)?)),
            None => Ok(None),
        }
    }

    // Planner flags, plus every entry with an output the manifest doesn't know about
    fn plan_group(
        group: &GroupConfig,
        entries: &EntryList,
        dependencies: Option<&DependencyMap>,
        last_update: Option<DateTime<Utc>>,
        force: bool,
        manifest: &dyn ResourceManifest) -> ImportFlags
    {
        let lookup = dependencies.map(|map| DependencyLookup::new(map, group.dependency_folder()));
        let mut flags = generate_import_flags(entries, &group.input_folder, last_update, force, lookup);
        for (index, entry) in entries.entries().iter().enumerate()
        {
            if entry.uuids().iter().any(|uuid| manifest.lookup(uuid).is_none())
            {
                flags.mark(index);
            }
        }
        flags
    }

    // Append new files to the group's entry store and save it. Returns how many were added
    fn discover_group(group: &GroupConfig, entries: &mut EntryList) -> Result<usize, PipelineError>
    {
        if !group.auto_discover { return Ok(0); }

        let before = entries.len();
        if update_json_excluding(&group.input_folder, entries, &Self::group_files(group))?
        {
            save_entries(&group.entries, entries)?;
        }
        Ok(entries.len() - before)
    }

    fn import_group(
        &self,
        group: &GroupConfig,
        last_update: Option<DateTime<Utc>>,
        force: bool,
        manifest: &mut ResourceManifestFile) -> Result<GroupReport, PipelineError>
    {
        let mut entries = load_entries(&group.entries, group.asset_type)?;
        let discovered = Self::discover_group(group, &mut entries)?;
        let mut dependencies = Self::load_group_dependencies(group)?;

        let flags = Self::plan_group(group, &entries, dependencies.as_ref(), last_update, force, manifest);
        log::debug!("Group {}: {} of {} entries need importing", group.name, flags.count_set(), entries.len());

        let sink = dependencies.as_mut().map(|map| DependencySink::new(map, group.dependency_folder()));
        let report = self.importer.import_assets(
            &entries,
            &flags,
            &group.input_folder,
            &group.output_folder,
            manifest,
            sink);

        if report.dependencies_changed
        {
            if let (Some(file), Some(map)) = (&group.dependencies, &dependencies)
            {
                save_dependencies(file, map)?;
            }
        }

        Ok(GroupReport
        {
            name: group.name.clone(),
            discovered,
            report,
        })
    }

    // Import everything that changed since the last successful import (or everything, if forced).
    // The timestamp only advances if every entry imported
    pub fn run_import(&self, force: bool) -> Result<RunSummary, PipelineError>
    {
        // sources edited while this runs are newer than this, and get picked up next time
        let run_start = Utc::now();
        let importers_version = self.importer.importers().version_hash();

        let check = self.check_for_modifications();
        if !force && self.is_up_to_date(&check)
        {
            log::info!("Builtin assets are up to date");
            return Ok(RunSummary { up_to_date: true, ..Default::default() });
        }
        let last_update = check.last_update_time();

        let mut manifest = ResourceManifestFile::load_or_new(&self.config.manifest_file, MANIFEST_NAME)?;
        let mut summary = RunSummary::default();
        for group in &self.config.groups
        {
            summary.groups.push(self.import_group(group, last_update, force, &mut manifest)?);
        }

        if manifest.is_dirty()
        {
            manifest.save_to(&self.config.manifest_file)?;
        }

        if summary.is_success()
        {
            write_timestamp_at(&self.config.timestamp_file, run_start, importers_version)?;
            summary.timestamp_written = true;
            log::info!("Imported {} builtin assets", summary.imported());
        }
        else
        {
            log::warn!("{} builtin assets failed to import, not updating the import timestamp", summary.failed());
        }
        Ok(summary)
    }

    // What the next import would do, without touching anything
    pub fn status(&self) -> Result<(ModificationCheck, Vec<GroupStatus>), PipelineError>
    {
        let check = self.check_for_modifications();
        let up_to_date = self.is_up_to_date(&check);
        let manifest = ResourceManifestFile::load_or_new(&self.config.manifest_file, MANIFEST_NAME)?;

        let mut groups = Vec::with_capacity(self.config.groups.len());
        for group in &self.config.groups
        {
            let mut entries = load_entries(&group.entries, group.asset_type)?;
            let known = entries.len();
            if group.auto_discover
            {
                update_json_excluding(&group.input_folder, &mut entries, &Self::group_files(group))?;
            }

            let dependencies = Self::load_group_dependencies(group)?;
            let planned = match up_to_date
            {
                true => 0,
                false => Self::plan_group(group, &entries, dependencies.as_ref(), check.last_update_time(), false, &manifest).count_set(),
            };

            groups.push(GroupStatus
            {
                name: group.name.clone(),
                asset_type: group.asset_type,
                entries: known,
                undiscovered: entries.len() - known,
                planned,
            });
        }
        Ok((check, groups))
    }

    // Run auto-discovery for every group, saving the entry stores that changed
    pub fn discover(&self) -> Result<Vec<(String, usize)>, PipelineError>
    {
        let mut discovered = Vec::with_capacity(self.config.groups.len());
        for group in &self.config.groups
        {
            let mut entries = load_entries(&group.entries, group.asset_type)?;
            let added = Self::discover_group(group, &mut entries)?;
            discovered.push((group.name.clone(), added));
        }
        Ok(discovered)
    }
}
