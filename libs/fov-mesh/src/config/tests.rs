//! Tests covering builder configuration behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = BuilderConfig::default();
    assert_eq!(cfg.ground_offset, GROUND_OFFSET);
    assert_eq!(cfg.parallel_threshold, PARALLEL_HEIGHT_THRESHOLD);
}

#[test]
fn builder_validates_input() {
    let err = BuilderConfig::new(-0.5, 16).unwrap_err();
    assert_eq!(err, BuilderConfigError(ConfigError::InvalidGroundOffset(-0.5)));

    let err = BuilderConfig::new(f64::NAN, 16).unwrap_err();
    assert!(matches!(err.0, ConfigError::InvalidGroundOffset(v) if v.is_nan()));
}

#[test]
fn global_config_converts() {
    let global = GlobalConfig::new(1.5, 10.0, 20.0, 8).unwrap();
    let cfg = BuilderConfig::from(global);
    assert_eq!(cfg.ground_offset, 1.5);
    assert_eq!(cfg.parallel_threshold, 8);
}

#[test]
fn sequential_disables_parallel_pass() {
    let cfg = BuilderConfig::default().sequential();
    assert_eq!(cfg.parallel_threshold, usize::MAX);
    assert_eq!(cfg.ground_offset, GROUND_OFFSET);
}

