use indexmap::IndexMap;
use nab_kiln::normalize_rel_path;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Extra files an entry depends on beyond its own source, keyed by entry path or UUID.
// Dependency paths are relative to a dependency folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyMap(IndexMap<String, Vec<String>>);
impl DependencyMap
{
    pub fn new() -> Self { Self::default() }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error>
    {
        serde_json::from_str(json)
    }
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    {
        serde_json::to_string_pretty(self)
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, key: &str) -> Option<&[String]>
    {
        self.0.get(key).map(|d| d.as_slice())
    }

    // Every dependency listed under any of the candidate keys, in key order without duplicates
    pub fn collect<'k>(&self, keys: impl IntoIterator<Item=&'k str>) -> Vec<&str>
    {
        let mut found: Vec<&str> = Vec::new();
        let mut seen_keys: Vec<&str> = Vec::new();
        for key in keys
        {
            if seen_keys.contains(&key)
            {
                continue;
            }
            seen_keys.push(key);

            for dependency in self.get(key).into_iter().flatten()
            {
                if !found.contains(&dependency.as_str())
                {
                    found.push(dependency);
                }
            }
        }
        found
    }

    // Add dependencies to an entry. Existing ones are kept, returns true if anything was added
    pub fn append(&mut self, key: impl Into<String>, dependencies: impl IntoIterator<Item=String>) -> bool
    {
        let new_dependencies: Vec<String> = dependencies.into_iter()
            .map(|d| if Path::new(&d).is_absolute() { d } else { normalize_rel_path(&d) })
            .collect();
        if new_dependencies.is_empty()
        {
            return false;
        }

        let existing = self.0.entry(key.into()).or_default();
        let mut added = false;
        for dependency in new_dependencies
        {
            if !existing.iter().any(|d| *d == dependency || normalize_rel_path(d) == dependency)
            {
                existing.push(dependency);
                added = true;
            }
        }
        added
    }
}
