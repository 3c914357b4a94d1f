use asset_kiln::{ImporterHash, Resource};
use metrohash::MetroHash64;
use std::error::Error;
use std::hash::Hasher;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use unicase::UniCase;

pub type ImporterResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

pub trait ImporterMeta
{
    // A list of file extensions (omit . prefix) that this importer can read from
    fn supported_input_file_extensions() -> &'static [&'static str];

    // Push one binary string per version, used to generate a hash versioning the importer
    fn importer_version(vb: &mut VersionBuilder);
}

// Converts one source file into an engine-ready resource
pub trait ResourceImporter: Send + Sync
{
    fn import(&self, input: &mut SourceInput) -> ImporterResult<ImportedResource>;
}

pub struct ImportedResource
{
    pub resource: Resource,
    // Extra files read while importing (absolute). None if the importer does not track any
    pub dependencies: Option<Vec<PathBuf>>,
}
impl ImportedResource
{
    pub fn new(resource: Resource) -> Self
    {
        Self { resource, dependencies: None }
    }
    pub fn with_dependencies(resource: Resource, dependencies: Vec<PathBuf>) -> Self
    {
        Self { resource, dependencies: Some(dependencies) }
    }
}

pub trait SourceInputRead: Read + Seek + Send { }
impl<T: Read + Seek + Send> SourceInputRead for T { }

pub struct SourceInput<'i>
{
    source_path: &'i Path,
    rel_path: &'i str,
    file_extension: UniCase<String>, // does not include .
    input: Box<dyn SourceInputRead + 'i>,
}
impl<'i> SourceInput<'i>
{
    pub fn open(source_path: &'i Path, rel_path: &'i str) -> std::io::Result<Self>
    {
        let fin = File::open(source_path)?;
        let file_extension = source_path.extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self
        {
            source_path,
            rel_path,
            file_extension: UniCase::new(file_extension),
            input: Box::new(BufReader::new(fin)),
        })
    }

    pub fn source_path(&self) -> &Path { self.source_path }
    pub fn rel_path(&self) -> &str { self.rel_path }
    pub fn file_extension(&self) -> &UniCase<String> { &self.file_extension }

    // file name without the extension
    pub fn stem(&self) -> String
    {
        self.source_path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default()
    }

    pub fn read_all(&mut self) -> std::io::Result<Vec<u8>>
    {
        let mut bytes = Vec::new();
        self.input.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}
impl Read for SourceInput<'_>
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> { self.input.read(buf) }
}
impl Seek for SourceInput<'_>
{
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> { self.input.seek(pos) }
}

pub struct VersionBuilder(MetroHash64, usize);
impl VersionBuilder
{
    #[inline] #[must_use]
    pub(super) fn new(seed: u64) -> Self
    {
        Self(MetroHash64::with_seed(seed), 0)
    }
    #[inline] #[must_use]
    pub(super) fn build(self) -> ImporterHash
    {
        ImporterHash(self.build_raw())
    }
    #[inline] #[must_use]
    pub(super) fn build_raw(self) -> u64
    {
        assert_ne!(self.1, 0, "There must be at least one entry to build a version hash from");
        self.0.finish()
    }

    pub fn push(&mut self, bstr: &[u8])
    {
        self.1 += 1;
        self.0.write(bstr);
    }
    pub fn append(&mut self, bstrs: &[&[u8]])
    {
        self.1 += bstrs.len();
        bstrs.iter().for_each(|s| { self.0.write(s); });
    }
}
