//! Localizer configuration loading and validation.

use histogram_estimate::config::LocalizerConfig;
use histogram_estimate::HistogramError;

#[test]
fn test_defaults() {
    let config = LocalizerConfig::default();
    assert_eq!(config.blurring, 0.12);
    assert_eq!(config.p_hit, 3.0);
    assert_eq!(config.p_miss, 1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_deserialize_partial() {
    let config: LocalizerConfig = serde_json::from_str(r#"{ "blurring": 0.05 }"#).unwrap();
    assert_eq!(
        config,
        LocalizerConfig {
            blurring: 0.05,
            ..LocalizerConfig::default()
        }
    );
}

#[test]
fn test_serialize_round_trip() {
    let config = LocalizerConfig {
        blurring: 0.2,
        p_hit: 5.0,
        p_miss: 0.5,
    };
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<LocalizerConfig>(&text).unwrap(), config);
}

#[test]
fn test_invalid() {
    let config = LocalizerConfig {
        blurring: 1.2,
        ..LocalizerConfig::default()
    };
    assert!(matches!(config.validate(), Err(HistogramError::InvalidBlurring(_))));

    let config = LocalizerConfig {
        p_miss: 0.0,
        ..LocalizerConfig::default()
    };
    assert!(matches!(config.validate(), Err(HistogramError::InvalidLikelihood { .. })));
}

#[test]
fn test_models() {
    let config = LocalizerConfig::default();
    assert_eq!(config.kernel().unwrap().blurring(), 0.12);
    assert_eq!(config.sensor().unwrap().hit_ratio(), 0.75);
}
