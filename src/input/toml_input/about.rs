use serde::Deserialize;

/// Who is filling out the time sheet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct About {
    name: Option<String>,
    staff_id: Option<usize>,
    organisation: Option<String>,
}

impl About {
    /// The name as it appears on the form, usually "Lastname, Firstname".
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn staff_id(&self) -> Option<usize> {
        self.staff_id
    }

    /// The organisational unit the employee belongs to.
    #[must_use]
    pub fn organisation(&self) -> Option<&str> {
        self.organisation.as_deref()
    }
}
