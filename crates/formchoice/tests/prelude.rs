//! End-to-end exercise of the public surface through the prelude.

use formchoice::prelude::*;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
struct Country {
    code: &'static str,
    name: &'static str,
    continent: &'static str,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl EntityIdentity for Country {
    const ENTITY_NAME: &'static str = "Country";
    const ID_FIELDS: &'static [&'static str] = &["code"];

    fn identifier_values(&self) -> Vec<Value> {
        vec![Value::from(self.code)]
    }
}

const COUNTRIES: [Country; 3] = [
    Country {
        code: "fr",
        name: "France",
        continent: "Europe",
    },
    Country {
        code: "jp",
        name: "Japan",
        continent: "Asia",
    },
    Country {
        code: "de",
        name: "Germany",
        continent: "Europe",
    },
];

#[test]
fn select_field_round_trip() {
    let manager = MemoryManager::new(COUNTRIES);
    let list = EntityChoiceList::builder(manager, Labeler::from_fn("name", |c: &Country| Some(c.name.to_owned())))
        .preferred(|c: &Country| c.code == "jp")
        .group_by(|c: &Country| Some(c.continent.to_owned()))
        .build()
        .unwrap();

    // Submission values resolve without loading the full set.
    let indices = list
        .indices_for_values(&[ChoiceValue::new("de")])
        .unwrap();
    assert_eq!(indices, [ChoiceIndex::new("de")]);
    assert!(!list.is_loaded());

    // Rendering pulls the views and triggers the one load.
    let preferred = list.preferred_views().unwrap();
    let remaining = list.remaining_views().unwrap();
    assert!(list.is_loaded());

    assert_eq!(preferred.len(), 1);
    assert_eq!(preferred.flattened()[0].label, "Japan");

    let ViewPartition::Grouped(groups) = remaining else {
        panic!("expected grouped views");
    };
    assert_eq!(groups["Europe"].len(), 2);

    // Submitted values bind back to entities.
    let chosen = list.choices_for_values(&[ChoiceValue::new("fr")]).unwrap();
    assert_eq!(chosen, [COUNTRIES[0].clone()]);
}

#[test]
fn version_is_exposed() {
    assert!(!formchoice::VERSION.is_empty());
}
