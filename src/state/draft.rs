//! Campaign draft and validated campaign data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::field::FieldId;

/// In-progress form state for a campaign.
///
/// Every schema field is always present as an owned string; an untouched
/// field is the empty string, never a missing entry. The serde field names
/// match `FieldId::key()`, which is the shape persisted in the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub budget: String,
    pub start_date: String,
    pub end_date: String,
}

impl CampaignDraft {
    /// Read a field by id
    pub fn field(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Description => &self.description,
            FieldId::Budget => &self.budget,
            FieldId::StartDate => &self.start_date,
            FieldId::EndDate => &self.end_date,
        }
    }

    /// Mutable access to a field by id
    pub fn field_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Description => &mut self.description,
            FieldId::Budget => &mut self.budget,
            FieldId::StartDate => &mut self.start_date,
            FieldId::EndDate => &mut self.end_date,
        }
    }

    /// Replace a field's value wholesale
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        *self.field_mut(id) = value.into();
    }
}

/// A campaign whose fields passed validation.
///
/// Optional fields were genuinely left blank in the draft; present values
/// are already typed and range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub description: String,
    pub budget: Option<u64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
