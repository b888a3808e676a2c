use std::io::Write;

use data_dictionary::header::{read_header, HeaderError};
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn reads_column_names_in_order() {
    let file = csv_file("id,name,signup_date\n1,Ada,2021-05-01\n2,Grace,2021-06-12\n");
    let columns = read_header(file.path()).unwrap();
    assert_eq!(columns, vec!["id", "name", "signup_date"]);
}

#[test]
fn header_only_file_is_enough() {
    let file = csv_file("id,name\n");
    let columns = read_header(file.path()).unwrap();
    assert_eq!(columns, vec!["id", "name"]);
}

#[test]
fn empty_file_has_no_columns() {
    let file = csv_file("");
    assert!(matches!(read_header(file.path()), Err(HeaderError::NoColumns)));
}

#[test]
fn missing_file_is_a_csv_error() {
    assert!(matches!(
        read_header(std::path::Path::new("/nonexistent/input.csv")),
        Err(HeaderError::Csv(_))
    ));
}

#[test]
fn quoted_headers_keep_embedded_commas() {
    let file = csv_file("\"last, first\",age\nDoe,30\n");
    let columns = read_header(file.path()).unwrap();
    assert_eq!(columns, vec!["last, first", "age"]);
}
