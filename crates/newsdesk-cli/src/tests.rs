use super::*;

const TODAY: &str = "2025-11-03";

#[test]
fn no_flags_reproduces_default_search() {
    let cli = Cli::try_parse_from(["newsdesk"]).expect("expected valid cli args");
    let (query, date) = cli.into_query(TODAY);

    assert_eq!(query.query.as_deref(), Some(DEFAULT_QUERY));
    assert!(query.sources.is_none());
    assert_eq!(query.from.as_deref(), Some(TODAY));
    assert!(query.to.is_none());
    assert_eq!(query.language, "en");
    assert_eq!(query.page_size, 100);
    assert_eq!(date, TODAY);
}

#[test]
fn sources_alone_drop_default_query() {
    let cli = Cli::try_parse_from(["newsdesk", "--sources", "bbc-news,cnn"])
        .expect("expected valid cli args");
    let (query, _) = cli.into_query(TODAY);

    assert!(query.query.is_none());
    assert_eq!(query.sources.as_deref(), Some("bbc-news,cnn"));
}

#[test]
fn explicit_filters_are_passed_through() {
    let cli = Cli::try_parse_from([
        "newsdesk",
        "--query",
        "climate",
        "--sources",
        "reuters",
        "--from",
        "2025-10-01",
        "--to",
        "2025-10-31",
        "--language",
        "fr",
        "--page-size",
        "25",
        "--date",
        "october",
    ])
    .expect("expected valid cli args");
    let (query, date) = cli.into_query(TODAY);

    assert_eq!(
        query,
        EverythingQuery {
            query: Some("climate".to_string()),
            sources: Some("reuters".to_string()),
            from: Some("2025-10-01".to_string()),
            to: Some("2025-10-31".to_string()),
            language: "fr".to_string(),
            page_size: 25,
        }
    );
    assert_eq!(date, "october");
}

#[test]
fn page_size_must_be_numeric() {
    let result = Cli::try_parse_from(["newsdesk", "--page-size", "lots"]);
    assert!(result.is_err());
}
