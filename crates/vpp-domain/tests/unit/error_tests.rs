use vpp_domain::error::Error;

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::invalid_argument("page size must be greater than 0").to_string(),
        "Invalid argument: page size must be greater than 0"
    );
    assert_eq!(Error::not_found("battery").to_string(), "Not found: battery");
    assert_eq!(Error::cache("down").to_string(), "Cache error: down");
    assert_eq!(Error::database("down").to_string(), "Database error: down");
    assert_eq!(Error::event_bus("closed").to_string(), "Event bus error: closed");
}

#[test]
fn test_error_sources_are_kept() {
    let io = std::io::Error::other("connection reset");

    let err = Error::cache_with_source("Redis GET failed", io);

    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "connection reset");
}

#[test]
fn test_json_error_conversion() {
    let parse = serde_json::from_str::<u32>("not json").unwrap_err();

    let err: Error = parse.into();

    assert!(matches!(err, Error::Json { .. }));
}
