use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable catalog record identifier
pub type RecordId = String;

/// Publishing organization of a record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Group a record belongs to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Distribution attached to a record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub format: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Catalog record as stored in the snapshot.
///
/// Only the fields the engine reads are modelled; everything else is kept in
/// `extra` and written back unchanged in search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            extra: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Human label, falling back to the name
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            extra: Map::new(),
        }
    }
}

impl Resource {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            extra: Map::new(),
        }
    }
}

impl Record {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            notes: None,
            organization: None,
            groups: Vec::new(),
            resources: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organization = Some(organization);
        self
    }

    pub fn with_group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(Group::new(name));
        self
    }

    pub fn with_resource(mut self, format: impl Into<String>) -> Self {
        self.resources.push(Resource::new(format));
        self
    }

    /// Notes text, empty when absent
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().unwrap_or_default()
    }
}
