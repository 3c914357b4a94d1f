use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

// Identifies one imported resource. Stored as text so hand-authored IDs survive untouched
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, bitcode::Encode, bitcode::Decode)]
#[serde(transparent)]
pub struct ResourceUuid(String);
impl ResourceUuid
{
    #[must_use]
    pub fn generate() -> Self
    {
        Self(uuid::Uuid::new_v4().hyphenated().to_string())
    }

    pub fn as_str(&self) -> &str { &self.0 }
    pub fn is_empty(&self) -> bool { self.0.trim().is_empty() }
}
impl From<&str> for ResourceUuid
{
    fn from(value: &str) -> Self { Self(value.to_string()) }
}
impl From<String> for ResourceUuid
{
    fn from(value: String) -> Self { Self(value) }
}
impl Debug for ResourceUuid
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}
impl Display for ResourceUuid
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}
