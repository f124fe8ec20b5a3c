//! Integration tests for the public conversion API
//!
//! These tests validate the end-to-end behavior including:
//! - Construction and range enforcement
//! - Reference fixtures for hex, HSL and CMYK
//! - Output bounds over a sampled grid of colors
//! - Agreement with the palette crate's HSL conversion
//! - Report rendering and config files on disk

use palette::{FromColor, Srgb};
use rgb_conversions::{
    render, Channel, ColorReport, ConversionError, ReportConfig, ReportFormat, RgbColor,
};

/// Every channel value in steps of 15, plus the extremes
fn sample_grid() -> impl Iterator<Item = RgbColor> {
    let steps: Vec<u8> = (0..=255u8).step_by(15).collect();
    let mut colors = Vec::new();
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                colors.push(RgbColor::from_channels(r, g, b));
            }
        }
    }
    colors.into_iter()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_range() {
    assert!(RgbColor::new(0, 0, 0).is_ok());
    assert!(RgbColor::new(255, 255, 255).is_ok());

    for (r, g, b) in [(-1, 0, 0), (256, 0, 0), (0, -1, 0), (0, 0, 256), (i64::MIN, 0, i64::MAX)] {
        match RgbColor::new(r, g, b) {
            Err(ConversionError::RangeViolation { .. }) => {}
            other => panic!("Expected RangeViolation for ({r}, {g}, {b}), got: {:?}", other),
        }
    }
}

#[test]
fn test_range_violation_names_channel() {
    let err = RgbColor::new(0, 0, 999).unwrap_err();
    match err {
        ConversionError::RangeViolation { channel, value } => {
            assert_eq!(channel, Channel::Blue);
            assert_eq!(value, 999);
        }
        _ => panic!("Expected RangeViolation, got: {:?}", err),
    }
}

// ============================================================================
// Reference fixtures
// ============================================================================

#[test]
fn test_orange_fixture() {
    let orange = RgbColor::new(255, 165, 0).unwrap();

    assert_eq!(orange.to_hex(), "#FFA500");
    assert_eq!(orange.to_string(), "RGB(255, 165, 0)");

    let hsl = orange.to_hsl();
    assert!((hsl.hue - 38.82).abs() < 0.01, "hue was {}", hsl.hue);
    assert!((hsl.saturation - 100.0).abs() < 0.01);
    assert!((hsl.lightness - 50.0).abs() < 0.01);

    let cmyk = orange.to_cmyk();
    assert!((cmyk.cyan - 0.0).abs() < 0.001);
    assert!((cmyk.magenta - 0.3529).abs() < 0.001);
    assert!((cmyk.yellow - 1.0).abs() < 0.001);
    assert!((cmyk.black - 0.0).abs() < 0.001);
}

#[test]
fn test_achromatic_fixtures() {
    let black = RgbColor::new(0, 0, 0).unwrap().to_hsl();
    assert_eq!((black.hue, black.saturation, black.lightness), (0.0, 0.0, 0.0));

    let white = RgbColor::new(255, 255, 255).unwrap().to_hsl();
    assert_eq!((white.hue, white.saturation, white.lightness), (0.0, 0.0, 100.0));

    let gray = RgbColor::new(128, 128, 128).unwrap().to_hsl();
    assert_eq!(gray.saturation, 0.0);
}

#[test]
fn test_cmyk_pure_black_exact() {
    let cmyk = RgbColor::new(0, 0, 0).unwrap().to_cmyk();
    assert_eq!(cmyk.components(), [0.0, 0.0, 0.0, 1.0]);
}

// ============================================================================
// Sampled grid
// ============================================================================

#[test]
fn test_derived_outputs_within_bounds() {
    for color in sample_grid() {
        let hsl = color.to_hsl();
        assert!((0.0..360.0).contains(&hsl.hue), "{color}: hue {}", hsl.hue);
        assert!((0.0..=100.0).contains(&hsl.saturation), "{color}: saturation {}", hsl.saturation);
        assert!((0.0..=100.0).contains(&hsl.lightness), "{color}: lightness {}", hsl.lightness);

        for component in color.to_cmyk().components() {
            assert!((0.0..=1.0).contains(&component), "{color}: cmyk {component}");
        }
    }
}

#[test]
fn test_hex_inverts_for_grid() {
    for color in sample_grid() {
        let hex = color.to_hex();
        assert_eq!(hex.len(), 7);
        assert_eq!(RgbColor::from_hex(&hex).unwrap(), color);
    }
}

#[test]
fn test_hsl_agrees_with_palette() {
    for color in sample_grid() {
        let srgb: Srgb<f64> = Srgb::<u8>::from(color).into_format();
        let expected = palette::Hsl::<palette::encoding::Srgb, f64>::from_color(srgb);
        let actual = color.to_hsl().to_unit();

        assert!((actual.saturation - expected.saturation).abs() < 1e-6, "{color}");
        assert!((actual.lightness - expected.lightness).abs() < 1e-6, "{color}");
        if actual.saturation > 0.0 {
            let hue = expected.hue.into_positive_degrees();
            assert!((actual.hue - hue).abs() < 1e-6, "{color}: {} vs {}", actual.hue, hue);
        }
    }
}

// ============================================================================
// Reports and configuration
// ============================================================================

#[test]
fn test_report_matches_reference_output() {
    let orange = RgbColor::new(255, 165, 0).unwrap();
    let text = render(&[orange], &ReportConfig::default()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "RGB(255, 165, 0) in HEX: #FFA500",
            "RGB(255, 165, 0) in HSL: (38.82, 100.00%, 50.00%)",
            "RGB(255, 165, 0) in CMYK: (0.00, 0.35, 1.00, 0.00)",
        ]
    );
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    let config = ReportConfig {
        precision: 4,
        format: ReportFormat::Json,
        percent_cmyk: true,
    };
    config.to_json_file(&path).unwrap();

    let loaded = ReportConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ precision: ").unwrap();

    let err = ReportConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConversionError::Config { .. }));
    assert!(!err.is_input_error());
}

#[test]
fn test_shared_across_threads() {
    let color = RgbColor::new(12, 200, 99).unwrap();
    let expected = ColorReport::new(color);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || ColorReport::new(color)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
