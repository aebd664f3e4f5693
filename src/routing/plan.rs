use std::collections::BTreeMap;

use crate::classify::AuthFailure;
use crate::dispatch::{Unhandled, handle};
use crate::password::PasswordFormatter;
use crate::routing::{FormField, RoutedError};
use crate::types::LocalizationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedField {
    pub id: String,
    pub error: Option<RoutedError>,
}

impl FormField for PlannedField {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_error(&mut self, error: Option<RoutedError>) {
        self.error = error;
    }
}

/// In-memory form state: records what a dispatch pass would show where.
///
/// Holding the plan across passes behaves like a live form: every pass
/// overwrites every slot it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct RoutingPlan {
    #[serde(serialize_with = "serialize_fields")]
    pub fields: Vec<PlannedField>,
    pub global: Option<RoutedError>,
}

fn serialize_fields<S: serde::Serializer>(
    fields: &[PlannedField],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let by_id: BTreeMap<&str, Option<&RoutedError>> = fields
        .iter()
        .map(|field| (field.id.as_str(), field.error.as_ref()))
        .collect();
    serde::Serialize::serialize(&by_id, serializer)
}

impl RoutingPlan {
    pub fn new<I, S>(field_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: field_ids
                .into_iter()
                .map(|id| PlannedField {
                    id: id.into(),
                    error: None,
                })
                .collect(),
            global: None,
        }
    }

    pub fn apply<E: AuthFailure>(
        &mut self,
        err: E,
        formatter: &PasswordFormatter<'_>,
        localization: Option<&LocalizationConfig>,
    ) -> Result<(), Unhandled<E>> {
        let mut sink = |error: Option<RoutedError>| self.global = error;
        handle(err, &mut self.fields, Some(&mut sink), formatter, localization)
    }

    pub fn error_for(&self, id: &str) -> Option<&RoutedError> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .and_then(|field| field.error.as_ref())
    }
}
