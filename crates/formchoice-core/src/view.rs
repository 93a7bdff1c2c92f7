//! Rendering-facing views: what a form layer consumes to draw a select.

use crate::value::{ChoiceIndex, ChoiceValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///
/// ChoiceView
///
/// One renderable choice: the list index, the submission value, and the
/// display label.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChoiceView {
    pub index: ChoiceIndex,
    pub value: ChoiceValue,
    pub label: String,
}

///
/// ViewPartition
///
/// Either half of a preferred/remaining split, flat or grouped under group
/// labels. Group and view order follows entity order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ViewPartition {
    Flat(Vec<ChoiceView>),
    Grouped(IndexMap<String, Vec<ChoiceView>>),
}

impl ViewPartition {
    #[must_use]
    pub const fn flat() -> Self {
        Self::Flat(Vec::new())
    }

    #[must_use]
    pub fn grouped() -> Self {
        Self::Grouped(IndexMap::new())
    }

    /// Total view count across groups.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(views) => views.len(),
            Self::Grouped(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Views in render order, group structure discarded.
    #[must_use]
    pub fn flattened(&self) -> Vec<&ChoiceView> {
        match self {
            Self::Flat(views) => views.iter().collect(),
            Self::Grouped(groups) => groups.values().flatten().collect(),
        }
    }

    pub(crate) fn push(&mut self, group: Option<String>, view: ChoiceView) {
        match (self, group) {
            (Self::Flat(views), _) => views.push(view),
            (Self::Grouped(groups), Some(group)) => groups.entry(group).or_default().push(view),
            // Ungrouped views in a grouped partition render under an empty
            // group heading rather than being dropped.
            (Self::Grouped(groups), None) => groups.entry(String::new()).or_default().push(view),
        }
    }
}

impl Default for ViewPartition {
    fn default() -> Self {
        Self::flat()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn view(index: &str, label: &str) -> ChoiceView {
        ChoiceView {
            index: ChoiceIndex::new(index),
            value: ChoiceValue::new(index),
            label: label.to_owned(),
        }
    }

    #[test]
    fn grouped_partition_preserves_group_order() {
        let mut partition = ViewPartition::grouped();
        partition.push(Some("b".into()), view("1", "one"));
        partition.push(Some("a".into()), view("2", "two"));
        partition.push(Some("b".into()), view("3", "three"));

        let ViewPartition::Grouped(groups) = &partition else {
            panic!("expected grouped partition");
        };
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();

        assert_eq!(keys, ["b", "a"]);
        assert_eq!(partition.len(), 3);
        assert_eq!(partition.flattened()[1].label, "three");
    }

    #[test]
    fn view_serializes_for_the_rendering_layer() {
        let json = serde_json::to_value(view("7", "seven")).unwrap();

        assert_eq!(json["index"], "7");
        assert_eq!(json["value"], "7");
        assert_eq!(json["label"], "seven");
    }
}
