//! Tests for the config module

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::config::{Document, InputFormat};
    use crate::entry::{DateValue, EntryKind};
    use crate::error::Error;

    const CV_YAML: &str = r#"
cv:
  name: Ada Lovelace
  sections:
    experience:
      - company: Acme
        position: Engineer
        start_date: 2020-06
        url: https://acme.example.com
    notes:
      - Plain text entry
design:
  templates:
    experience_entry:
      main_column: POSITION at COMPANY, LOCATION
  show_time_spans_in: [experience]
"#;

    #[test]
    fn loads_yaml_document() {
        let document = Document::from_str_with_format(CV_YAML, InputFormat::Yaml).unwrap();
        assert_eq!(document.cv.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(document.cv.sections.len(), 2);
        assert!(document.shows_time_span_in("experience"));
        assert!(!document.shows_time_span_in("notes"));

        let experience = &document.cv.sections["experience"][0];
        assert_eq!(experience.kind(), Some(EntryKind::Experience));
        assert_eq!(
            experience.core().unwrap().end_date,
            Some(DateValue::Present),
            "open ranges run until present"
        );
    }

    #[test]
    fn design_templates_merge_over_defaults() {
        let document = Document::from_str_with_format(CV_YAML, InputFormat::Yaml).unwrap();
        let templates = &document.design.templates;
        let experience = templates.for_kind(EntryKind::Experience).unwrap();
        assert_eq!(experience["main_column"], "POSITION at COMPANY, LOCATION");
        assert_eq!(experience["date_and_location_column"], "LOCATION\nDATE");
        assert!(templates.for_kind(EntryKind::Publication).is_some());
    }

    #[test]
    fn loads_json_document() {
        let json = r#"{"cv": {"sections": {"talks": [{"name": "Talk", "date": 2021}]}}}"#;
        let document = Document::from_str_with_format(json, InputFormat::Json).unwrap();
        let talk = &document.cv.sections["talks"][0];
        assert_eq!(talk.core().unwrap().date, Some(DateValue::Year(2021)));
    }

    #[test]
    fn unrecognized_entry_is_reported_with_position() {
        let yaml = "cv:\n  sections:\n    misc:\n      - name: Fine\n      - foo: bar\n";
        let err = Document::from_str_with_format(yaml, InputFormat::Yaml).unwrap_err();
        match err {
            Error::UnknownEntryType(message) => {
                assert!(message.contains("entry 2 of section 'misc'"), "{message}")
            }
            other => panic!("Expected UnknownEntryType, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_is_reported_as_invalid_date() {
        let yaml = r#"
cv:
  sections:
    experience:
      - company: Acme
        position: Engineer
        start_date: 2020-13
"#;
        let err = Document::from_str_with_format(yaml, InputFormat::Yaml).unwrap_err();
        match err {
            Error::InvalidDate { value, reason } => {
                assert_eq!(value, "2020-13");
                assert_eq!(reason, "month out of range");
            }
            other => panic!("Expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn lone_end_date_becomes_date() {
        let yaml = "cv:\n  sections:\n    talks:\n      - name: Talk\n        end_date: 2019\n";
        let document = Document::from_str_with_format(yaml, InputFormat::Yaml).unwrap();
        let core = document.cv.sections["talks"][0].core().unwrap();
        assert_eq!(core.date, Some(DateValue::Year(2019)));
        assert_eq!(core.end_date, None);
    }

    #[test]
    fn rejects_empty_date_template() {
        let yaml = "cv:\n  sections: {}\ndesign:\n  templates:\n    single_date: ''\n";
        let err = Document::from_str_with_format(yaml, InputFormat::Yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(_)));
    }

    #[test]
    fn rejects_short_locale() {
        let yaml = "cv:\n  sections: {}\nlocale:\n  month_names: [Jan]\n";
        let err = Document::from_str_with_format(yaml, InputFormat::Yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(_)));
    }

    #[test]
    fn rejects_non_http_urls() {
        let yaml = r#"
cv:
  sections:
    links:
      - name: Site
        url: ftp://example.com
"#;
        let err = Document::from_str_with_format(yaml, InputFormat::Yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(message) if message.contains("ftp")));
    }

    #[test]
    fn present_only_ends_ranges() {
        let yaml = "cv:\n  sections:\n    talks:\n      - name: Talk\n        date: present\n";
        let err = Document::from_str_with_format(yaml, InputFormat::Yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation(message) if message.contains("present")));
    }

    #[test]
    fn load_resolves_missing_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cv.yml"), CV_YAML).unwrap();

        let document = Document::load(dir.path().join("cv")).unwrap();
        assert_eq!(document.cv.name.as_deref(), Some("Ada Lovelace"));

        let document = Document::load(dir.path().join("cv.yml")).unwrap();
        assert_eq!(document.cv.sections.len(), 2);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Document::load(dir.path().join("absent")).unwrap_err();
        match err {
            Error::ConfigNotFound { extensions, .. } => assert_eq!(extensions, "yaml, yml, json"),
            other => panic!("Expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn input_format_from_extension() {
        use std::path::Path;
        assert_eq!(InputFormat::from_path(Path::new("cv.YML")), Some(InputFormat::Yaml));
        assert_eq!(InputFormat::from_path(Path::new("cv.json")), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path(Path::new("cv.toml")), None);
    }
}
