use serde::Serialize;
use vcasky_shared::CabinClass;

use crate::sort::SortKey;

/// `{value, label}` pair backing a select box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn class_options() -> Vec<SelectOption> {
    CabinClass::ALL
        .iter()
        .map(|class| SelectOption {
            value: class.key(),
            label: class.display_name(),
        })
        .collect()
}

pub fn sort_options() -> Vec<SelectOption> {
    SortKey::ALL
        .iter()
        .map(|key| SelectOption {
            value: key.key(),
            label: key.label(),
        })
        .collect()
}
