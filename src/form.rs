//! The fields of the MiLoG time sheet form.
//!
//! Filling the PDF is not done here, the fields are written as a JSON object
//! that maps the name of each form field to its value.

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::input::Config;
use crate::schedule::MonthSchedule;
use crate::time::Date;
use crate::utils;

/// The name and value of each field, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(config: &Config, schedule: &MonthSchedule) -> Self {
        let mut result = Self::default();

        let total = schedule.total().as_hours_f64().to_string();
        result.insert("Std", &total);
        result.insert("Summe", &total);
        result.insert("monatliche SollArbeitszeit", &total);
        result.insert("Urlaub anteilig", "0");
        result.insert("Übertrag vom Vormonat", "0");
        result.insert("Übertrag in den Folgemonat", "0");
        result.insert("Stundensatz", format!("{:.2} €", config.wage()));
        result.insert("Personalnummer", config.staff_id().to_string());
        result.insert("OE", config.organisation());
        result.insert("GF", config.name());
        result.insert("abc", schedule.month().as_usize().to_string());
        result.insert("abdd", schedule.year().as_usize().to_string());
        // signature of the supervisor
        result.insert("undefined", "");
        result.insert(
            "Ich bestätige die Richtigkeit der Angaben",
            Date::first_day(schedule.year(), schedule.month())
                .first_day_of_next_month()
                .to_string(),
        );

        for (row, entry) in (1..).zip(schedule.iter()) {
            result.insert(format!("Tätigkeit Stichwort ProjektRow{}", row), entry.job());
            result.insert(
                format!("ttmmjjRow{}", row),
                entry.date().formatted("{day}.{month}.{year:02}"),
            );
            result.insert(format!("hhmmRow{}", row), entry.start().to_string());
            result.insert(format!("hhmmRow{}_2", row), entry.end().to_string());
            result.insert(format!("hhmmRow{}_3", row), entry.pause().to_string());
            result.insert(format!("hhmmRow{}_4", row), entry.worked().to_string());
        }

        result
    }

    fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        utils::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Serialize for FormFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
