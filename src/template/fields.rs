use indexmap::IndexMap;
use serde_json::Value;

use crate::entry::Entry;
use crate::error::Result;

/// Uppercase field name to its display value.
pub type FieldMap = IndexMap<String, String>;

/// Flattens the present attributes of `entry` into a [`FieldMap`].
///
/// Keys are the attribute names in uppercase (`start_date` becomes
/// `START_DATE`), absent attributes are left out and custom attributes are
/// included alongside the built-in ones. Text entries yield an empty map.
pub fn extract_fields(entry: &Entry) -> Result<FieldMap> {
    let Value::Object(attributes) = serde_json::to_value(entry)? else {
        return Ok(FieldMap::new());
    };

    Ok(attributes
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| (name.to_uppercase(), value_to_display(&value)))
        .collect())
}

fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            items.iter().map(value_to_display).collect::<Vec<_>>().join(", ")
        }
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Reads a custom attribute as a list of strings.
pub(crate) fn string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(yaml: &str) -> Entry {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn extracts_present_attributes_only() {
        let fields =
            extract_fields(&entry("company: Acme\nposition: Engineer\nstart_date: 2020-06"))
                .unwrap();
        assert_eq!(fields["COMPANY"], "Acme");
        assert_eq!(fields["POSITION"], "Engineer");
        assert_eq!(fields["START_DATE"], "2020-06");
        assert!(!fields.contains_key("LOCATION"));
        assert!(!fields.contains_key("END_DATE"));
    }

    #[test]
    fn keeps_empty_strings_distinct_from_absent() {
        let fields = extract_fields(&entry("name: Project\nlocation: ''")).unwrap();
        assert_eq!(fields["LOCATION"], "");
    }

    #[test]
    fn stringifies_lists_numbers_and_custom_fields() {
        let fields = extract_fields(&entry(
            "name: Talk\ndate: 2021\nhighlights: [one, two]\nattendees: 120\ntags: [a, b]",
        ))
        .unwrap();
        assert_eq!(fields["DATE"], "2021");
        assert_eq!(fields["HIGHLIGHTS"], "one, two");
        assert_eq!(fields["ATTENDEES"], "120");
        assert_eq!(fields["TAGS"], "a, b");
    }

    #[test]
    fn text_entries_have_no_fields() {
        assert!(extract_fields(&Entry::Text("plain".into())).unwrap().is_empty());
    }

    #[test]
    fn string_list_requires_strings() {
        assert_eq!(
            string_list(&serde_json::json!(["A", "B"])),
            Some(vec!["A".to_string(), "B".to_string()])
        );
        assert_eq!(string_list(&serde_json::json!(["A", 1])), None);
        assert_eq!(string_list(&serde_json::json!("A")), None);
    }
}
