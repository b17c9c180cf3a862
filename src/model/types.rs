//! Document tree types
//!
//! An `Entry` is either a leaf `Document` or a `Folder` holding further
//! entries. Type-specific fields are only reachable through a match.

use serde::Deserialize;

/// Type tag carried by every folder
pub const FOLDER_TYPE: &str = "folder";

/// A leaf document record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Free-form type tag ("pdf", "doc", "csv", ...)
    pub kind: String,
    pub name: String,
    /// Human-readable size, e.g. "156 kb"
    pub size: String,
    /// Date added, e.g. "2017-01-06"
    pub added: String,
}

/// A folder and its ordered children
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub files: Vec<Entry>,
}

/// One node of the document tree
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEntry")]
pub enum Entry {
    File(Document),
    Folder(Folder),
}

impl Entry {
    pub fn file(kind: &str, name: &str, size: &str, added: &str) -> Self {
        Entry::File(Document {
            kind: kind.to_string(),
            name: name.to_string(),
            size: size.to_string(),
            added: added.to_string(),
        })
    }

    pub fn folder(name: &str, files: Vec<Entry>) -> Self {
        Entry::Folder(Folder {
            name: name.to_string(),
            files,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File(doc) => &doc.name,
            Entry::Folder(folder) => &folder.name,
        }
    }

    /// Type tag shown in the Type column
    pub fn type_tag(&self) -> &str {
        match self {
            Entry::File(doc) => &doc.kind,
            Entry::Folder(_) => FOLDER_TYPE,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }

    pub fn size(&self) -> Option<&str> {
        match self {
            Entry::File(doc) => Some(&doc.size),
            Entry::Folder(_) => None,
        }
    }

    pub fn added(&self) -> Option<&str> {
        match self {
            Entry::File(doc) => Some(&doc.added),
            Entry::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::File(_) => None,
        }
    }
}

/// Wire shape of an entry in a tree file, validated into `Entry`
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    size: Option<String>,
    added: Option<String>,
    files: Option<Vec<Entry>>,
}

impl TryFrom<RawEntry> for Entry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        if raw.kind == FOLDER_TYPE {
            let files = raw
                .files
                .ok_or_else(|| format!("folder '{}' has no files list", raw.name))?;
            return Ok(Entry::Folder(Folder {
                name: raw.name,
                files,
            }));
        }

        let size = raw
            .size
            .ok_or_else(|| format!("file '{}' is missing 'size'", raw.name))?;
        let added = raw
            .added
            .ok_or_else(|| format!("file '{}' is missing 'added'", raw.name))?;

        Ok(Entry::File(Document {
            kind: raw.kind,
            name: raw.name,
            size,
            added,
        }))
    }
}
