use email_reflow::*;

// --- ReflowConfig ---

#[test]
fn test_config_default() {
    let config = ReflowConfig::default();
    assert_eq!(config.line_length, DEFAULT_LINE_LENGTH);
    assert_eq!(config.line_length, 72);
    assert_eq!(config.decode, DecodeMode::Drop);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_builder() {
    let config = ReflowConfig::with_line_length(40).decode(DecodeMode::Strict);
    assert_eq!(config.line_length, 40);
    assert_eq!(config.decode, DecodeMode::Strict);
}

#[test]
fn test_config_validate_zero() {
    let err = ReflowConfig::with_line_length(0).validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration: line_length must be at least 1"
    );
}

#[test]
fn test_config_deserialize_defaults() {
    let config: ReflowConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ReflowConfig::default());
}

#[test]
fn test_config_deserialize() {
    let config: ReflowConfig =
        serde_json::from_str(r#"{"line_length": 40, "decode": "replace"}"#).unwrap();
    assert_eq!(config.line_length, 40);
    assert_eq!(config.decode, DecodeMode::Replace);
}

// --- DecodeMode ---

#[test]
fn test_decode_mode_display() {
    assert_eq!(DecodeMode::Strict.to_string(), "strict");
    assert_eq!(DecodeMode::Drop.to_string(), "drop");
    assert_eq!(DecodeMode::Replace.to_string(), "replace");
}

#[test]
fn test_decode_mode_serde_matches_display() {
    for mode in [DecodeMode::Strict, DecodeMode::Drop, DecodeMode::Replace] {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{mode}\""));
    }
}

// --- Paragraph ---

#[test]
fn test_paragraph_counts() {
    let paragraph = Paragraph::new(1, " one  two three");
    assert_eq!(paragraph.word_count(), 3);
    assert!(!paragraph.is_blank());
}

#[test]
fn test_paragraph_blank() {
    assert!(Paragraph::default().is_blank());
    assert!(Paragraph::new(0, "   ").is_blank());
}

// --- ReflowError ---

#[test]
fn test_width_error_message() {
    let err = ReflowError::WidthTooSmall {
        line_length: 2,
        depth: 4,
    };
    assert_eq!(
        err.to_string(),
        "Line length 2 is too small for quote depth 4"
    );
}
