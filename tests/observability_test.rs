use axum::http::{HeaderMap, HeaderValue};

use automotive_rag::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, TracingConfig, sanitize_question,
};
use automotive_rag::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_blank_question_when_sanitizing_then_returns_placeholder() {
    assert_eq!(sanitize_question("   "), "[EMPTY]");
}

#[test]
fn given_short_question_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_question("  oil_change?  "), "oil_change?");
}

#[test]
fn given_long_multibyte_question_when_sanitizing_then_truncates_on_char_boundary() {
    let question = "é".repeat(150);

    let sanitized = sanitize_question(&question);

    assert!(sanitized.starts_with(&"é".repeat(100)));
    assert!(sanitized.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_values_are_redacted() {
    let sanitized = sanitize_question("oil_change token=abc123 and password=hunter2&x=1");

    assert_eq!(
        sanitized,
        "oil_change token=[REDACTED] and password=[REDACTED]&x=1"
    );
}

#[test]
fn given_bearer_header_when_sanitizing_then_token_is_redacted() {
    assert_eq!(
        sanitize_question("Bearer secret-value brake_pads"),
        "Bearer [REDACTED] brake_pads"
    );
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_header_with_id_when_extracting_then_reuses_it() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("abc"));

    assert_eq!(RequestId::from_headers(&headers), RequestId("abc".to_string()));
}

#[test]
fn given_no_header_when_extracting_then_generates_distinct_ids() {
    let headers = HeaderMap::new();

    let first = RequestId::from_headers(&headers);
    let second = RequestId::from_headers(&headers);

    assert!(!first.as_str().is_empty());
    assert_ne!(first, second);
}

#[test]
fn given_logging_settings_when_building_tracing_config_then_level_leads_filter() {
    let config = TracingConfig::new(
        Environment::Prod,
        &LoggingSettings {
            level: "warn".to_string(),
            json: true,
        },
    );

    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Prod);
    assert!(config.default_filter().starts_with("warn,"));
}
