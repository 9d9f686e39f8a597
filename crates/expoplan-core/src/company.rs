//! Exhibiting companies and the weak references booths hold to them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Display name for a booth without a (resolvable) company.
pub const UNASSIGNED: &str = "Unassigned";

/// Unique identifier for a company.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CompanyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lookup-only reference from a booth to a company.
///
/// Holding a `CompanyRef` never keeps a company alive and deleting a
/// company never touches the booths pointing at it. Resolution goes
/// through [`CompanyRef::resolve`], which returns `None` for dangling
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyRef(CompanyId);

impl CompanyRef {
    /// Reference the company with the given id.
    pub fn to(id: &CompanyId) -> Self {
        Self(id.clone())
    }

    /// The referenced id, whether or not it still exists.
    pub fn id(&self) -> &CompanyId {
        &self.0
    }

    /// Look the company up. `None` if it was deleted or never existed.
    pub fn resolve<'a>(&self, companies: &'a CompanyStore) -> Option<&'a Company> {
        companies.get(&self.0)
    }
}

/// An exhibiting organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub(crate) id: CompanyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Company {
    /// Create a company with only a name.
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            website: None,
            email: None,
            phone: None,
        }
    }

    pub fn id(&self) -> &CompanyId {
        &self.id
    }
}

/// Company form contents, validated on submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyDraft {
    pub name: String,
    pub website: String,
    pub email: String,
    pub phone: String,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl CompanyDraft {
    /// Build a company from the form. Returns `None` if the name is blank.
    pub fn into_company(self, id: CompanyId) -> Option<Company> {
        let name = non_blank(&self.name)?;
        Some(Company {
            id,
            name,
            website: non_blank(&self.website),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
        })
    }
}

/// Sparse update for a company. Only present fields are applied;
/// `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub website: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
}

impl CompanyPatch {
    fn apply(&self, company: &mut Company) {
        if let Some(name) = &self.name {
            company.name.clone_from(name);
        }
        if let Some(website) = &self.website {
            company.website.clone_from(website);
        }
        if let Some(email) = &self.email {
            company.email.clone_from(email);
        }
        if let Some(phone) = &self.phone {
            company.phone.clone_from(phone);
        }
    }
}

/// Companies in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyStore {
    companies: Vec<Company>,
}

impl CompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a company. A company with the same id is replaced in place.
    pub fn add(&mut self, company: Company) {
        match self.companies.iter_mut().find(|c| c.id == company.id) {
            Some(existing) => {
                log::debug!("Replacing company {}", company.id);
                *existing = company;
            }
            None => self.companies.push(company),
        }
    }

    /// Merge fields into a company. Returns false (and does nothing) if absent.
    pub fn patch(&mut self, id: &CompanyId, patch: &CompanyPatch) -> bool {
        let Some(company) = self.companies.iter_mut().find(|c| &c.id == id) else {
            log::debug!("Ignoring patch for missing company {id}");
            return false;
        };
        patch.apply(company);
        true
    }

    /// Remove a company. Booths referencing it are left dangling.
    pub fn remove(&mut self, id: &CompanyId) -> Option<Company> {
        let index = self.companies.iter().position(|c| &c.id == id)?;
        Some(self.companies.remove(index))
    }

    pub fn get(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| &c.id == id)
    }

    /// All companies, in insertion order.
    pub fn list(&self) -> &[Company] {
        &self.companies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Name of the referenced company, or [`UNASSIGNED`] when the
    /// reference is absent, dangling or names a blank company.
    pub fn display_name(&self, reference: Option<&CompanyRef>) -> &str {
        reference
            .and_then(|r| r.resolve(self))
            .map(|c| c.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNASSIGNED)
    }
}
