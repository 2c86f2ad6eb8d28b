//! Configuration tests.

use rv32_core::Config;

#[test]
fn default_configuration_matches_documented_layout() {
    let config = Config::default();
    assert_eq!(config.start_pc, 0);
    assert_eq!(config.data_base, 0x0010_0000);
    assert_eq!(config.max_steps, None);
    assert_eq!(config.mem_limit, None);
    assert!(!config.trace_instructions);
}

#[test]
fn json_overrides_only_named_fields() {
    let config = Config::from_json(
        r#"{ "start_pc": 128, "max_steps": 500, "trace_instructions": true }"#,
    )
    .unwrap();
    assert_eq!(config.start_pc, 128);
    assert_eq!(config.max_steps, Some(500));
    assert!(config.trace_instructions);
    assert_eq!(config.data_base, 0x0010_0000);
    assert_eq!(config.mem_limit, None);
}

#[test]
fn json_round_trip_preserves_every_field() {
    let config = Config {
        start_pc: 0x80,
        data_base: 0x4000,
        max_steps: Some(12),
        mem_limit: Some(0x1_0000),
        trace_instructions: true,
    };
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&text).unwrap(), config);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Config::from_json("{ start_pc: }").is_err());
    assert!(Config::from_json(r#"{ "start_pc": "zero" }"#).is_err());
}
