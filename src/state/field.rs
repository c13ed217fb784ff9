//! Campaign field schema

/// Identifies one field of the campaign form.
///
/// `key()` doubles as the persisted-snapshot key and the expected CSV
/// column header, so the schema stays consistent across storage, import,
/// and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Description,
    Budget,
    StartDate,
    EndDate,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Description,
        FieldId::Budget,
        FieldId::StartDate,
        FieldId::EndDate,
    ];

    /// Stable identifier used for snapshot keys and CSV headers
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Description => "description",
            FieldId::Budget => "budget",
            FieldId::StartDate => "start_date",
            FieldId::EndDate => "end_date",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Description => "Description",
            FieldId::Budget => "Budget (USD)",
            FieldId::StartDate => "Start date (YYYY-MM-DD)",
            FieldId::EndDate => "End date (YYYY-MM-DD)",
        }
    }

    /// Whether the field accepts newlines
    pub fn is_multiline(self) -> bool {
        matches!(self, FieldId::Description)
    }

    /// Position within `ALL`
    pub fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Description => 1,
            FieldId::Budget => 2,
            FieldId::StartDate => 3,
            FieldId::EndDate => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_field_in_order() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = FieldId::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), FieldId::ALL.len());
    }

    #[test]
    fn test_only_description_is_multiline() {
        for field in FieldId::ALL {
            assert_eq!(field.is_multiline(), field == FieldId::Description);
        }
    }
}
