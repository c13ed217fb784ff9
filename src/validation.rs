//! Campaign draft validation

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::state::{Campaign, CampaignDraft, FieldId};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field-level validation messages, ordered by field schema position.
///
/// Rendered inline next to the offending fields; an empty set means the
/// draft produced a valid `Campaign`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Record a message for a field; the first message per field wins
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Drop the message for a field, used when the user edits it
    pub fn clear_field(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    /// The offending field earliest in the form, for refocusing
    pub fn first_field(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }
}

/// Validate the whole draft in one pass.
///
/// Either every field checks out and a typed `Campaign` comes back, or the
/// complete set of failing fields is reported at once. Never panics on any
/// input.
pub fn validate(draft: &CampaignDraft) -> Result<Campaign, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(FieldId::Name, "Name is required");
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.insert(
            FieldId::Name,
            format!("Name must be at most {MAX_NAME_LEN} characters"),
        );
    }

    let description = draft.description.trim();
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.insert(
            FieldId::Description,
            format!("Description must be at most {MAX_DESCRIPTION_LEN} characters"),
        );
    }

    let budget = parse_budget(&draft.budget, &mut errors);
    let start_date = parse_date(FieldId::StartDate, &draft.start_date, &mut errors);
    let end_date = parse_date(FieldId::EndDate, &draft.end_date, &mut errors);

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            errors.insert(FieldId::EndDate, "End date must not be before the start date");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Campaign {
        name: name.to_string(),
        description: description.to_string(),
        budget,
        start_date,
        end_date,
    })
}

fn parse_budget(raw: &str, errors: &mut ValidationErrors) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u64>() {
        Ok(amount) => Some(amount),
        Err(_) => {
            errors.insert(FieldId::Budget, "Budget must be a whole non-negative number");
            None
        }
    }
}

fn parse_date(field: FieldId, raw: &str, errors: &mut ValidationErrors) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, "Enter the date as YYYY-MM-DD");
            None
        }
    }
}
