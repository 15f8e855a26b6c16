use serde::Deserialize;

use crate::time::WorkingDuration;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contract {
    working_time: Option<WorkingDuration>,
    wage: Option<f64>,
    job: Option<String>,
}

impl Contract {
    /// How long the employee has to work each month.
    #[must_use]
    pub fn working_time(&self) -> Option<WorkingDuration> {
        self.working_time
    }

    /// How much the employee makes per hour (in euros).
    #[must_use]
    pub fn wage(&self) -> Option<f64> {
        self.wage
    }

    /// The description of the job, written into every row of the form.
    #[must_use]
    pub fn job(&self) -> Option<&str> {
        self.job.as_deref()
    }
}
