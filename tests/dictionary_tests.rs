use data_dictionary::dictionary::{parse_dictionary, render_table, DictionaryEntry};

#[test]
fn parses_valid_array_in_order() {
    let text = r#"[
        {"name":"id","type":"Integer","description":"Unique identifier"},
        {"name":"email","type":"String","description":"Contact address"}
    ]"#;
    let entries = parse_dictionary(text).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "id");
    assert_eq!(entries[0].data_type, "Integer");
    assert_eq!(entries[1].name, "email");
    assert_eq!(entries[1].description, "Contact address");
}

#[test]
fn rejects_non_json_text() {
    assert!(parse_dictionary("not json").is_err());
}

#[test]
fn rejects_non_array_json() {
    assert!(parse_dictionary(r#"{"name":"id","type":"Integer","description":"x"}"#).is_err());
}

#[test]
fn rejects_entry_missing_required_field() {
    assert!(parse_dictionary(r#"[{"name":"id","type":"Integer"}]"#).is_err());
}

#[test]
fn rejects_entry_with_non_string_field() {
    assert!(parse_dictionary(r#"[{"name":"id","type":42,"description":"x"}]"#).is_err());
}

#[test]
fn tolerates_extra_fields() {
    let entries =
        parse_dictionary(r#"[{"name":"id","type":"Integer","description":"x","extra":true}]"#)
            .unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn empty_array_parses_to_empty_table() {
    assert!(parse_dictionary("[]").unwrap().is_empty());
}

#[test]
fn renders_one_row_per_entry() {
    let entries = vec![
        DictionaryEntry {
            name: "id".into(),
            data_type: "Integer".into(),
            description: "Unique identifier".into(),
        },
        DictionaryEntry {
            name: "signup_date".into(),
            data_type: "Date".into(),
            description: "Date of signup".into(),
        },
    ];
    let table = render_table(&entries);
    let lines: Vec<&str> = table.lines().collect();

    // Header, separator, then one line per entry.
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[0].contains("Type"));
    assert!(lines[0].contains("Description"));
    assert!(lines[2].starts_with("id"));
    assert!(lines[2].contains("Unique identifier"));
    assert!(lines[3].starts_with("signup_date"));
    assert!(lines[3].contains("Date of signup"));
}
