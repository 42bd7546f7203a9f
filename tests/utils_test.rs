use playfeat::utils::*;

#[test]
fn test_parse_export_format_valid_inputs() {
    assert_eq!(parse_export_format("csv").unwrap(), ExportFormat::Csv);
    assert_eq!(parse_export_format("json").unwrap(), ExportFormat::Json);

    // Case insensitivity and surrounding whitespace
    assert_eq!(parse_export_format("CSV").unwrap(), ExportFormat::Csv);
    assert_eq!(parse_export_format("  Json ").unwrap(), ExportFormat::Json);
}

#[test]
fn test_parse_export_format_invalid_inputs() {
    // Empty and whitespace-only input
    let result = parse_export_format("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_export_format("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Unknown format
    let result = parse_export_format("parquet");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'parquet'"));
}

#[test]
fn test_export_format_display() {
    assert_eq!(ExportFormat::Csv.to_string(), "csv");
    assert_eq!(ExportFormat::Json.to_string(), "json");
}

#[test]
fn test_parse_release_year() {
    // Full dates and year-only dates
    assert_eq!(parse_release_year("1999-01-01"), Some(1999));
    assert_eq!(parse_release_year("2023"), Some(2023));
    assert_eq!(parse_release_year("2003-04"), Some(2003));

    // Placeholder dates on compilations keep their numeric prefix
    assert_eq!(parse_release_year("0000"), Some(0));

    // Non-numeric or too-short prefixes yield None instead of an error
    assert_eq!(parse_release_year(""), None);
    assert_eq!(parse_release_year("199"), None);
    assert_eq!(parse_release_year("19xx-01-01"), None);
    assert_eq!(parse_release_year("unknown"), None);
}

#[test]
fn test_page_offsets() {
    // 120 items at 50 per page: offsets 0, 50, 100
    assert_eq!(page_offsets(120, 50), vec![0, 50, 100]);

    // Exactly one page
    assert_eq!(page_offsets(50, 50), vec![0]);
    assert_eq!(page_offsets(1, 50), vec![0]);

    // One item over a page boundary
    assert_eq!(page_offsets(101, 50), vec![0, 50, 100]);

    // Empty collection needs no page requests
    assert_eq!(page_offsets(0, 50), Vec::<u64>::new());

    // Degenerate limit
    assert_eq!(page_offsets(10, 0), Vec::<u64>::new());
}

#[test]
fn test_parse_id_list() {
    assert_eq!(
        parse_id_list("a,b , c"),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );

    // Empty segments are dropped, order is kept
    assert_eq!(parse_id_list("a,,b"), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(parse_id_list(",,"), Vec::<String>::new());
    assert_eq!(parse_id_list(""), Vec::<String>::new());
}

#[test]
fn test_parse_id_lines() {
    let raw = "abc123\n\n# a comment\n  def456  \n#another\nghi789\n";
    assert_eq!(
        parse_id_lines(raw),
        vec![
            "abc123".to_string(),
            "def456".to_string(),
            "ghi789".to_string()
        ]
    );

    assert_eq!(parse_id_lines("# only comments\n\n"), Vec::<String>::new());
}
