use bst_collections::harness::{
    self, HarnessConfig, HarnessError, KeyGenerator, Measurement, Operation, ReportFormat,
    Structure, CSV_HEADER,
};

#[test]
fn int_test_key_generator_is_reproducible() {
    let first: Vec<i32> = KeyGenerator::new(42, 1, 10_000_000).unwrap().take(1000).collect();
    let second: Vec<i32> = KeyGenerator::new(42, 1, 10_000_000).unwrap().take(1000).collect();
    assert_eq!(first, second);
    assert!(first.iter().all(|key| (1..=10_000_000).contains(key)));
}

#[test]
fn int_test_key_generator_covers_small_range() {
    let mut seen = [false; 5];
    for key in KeyGenerator::new(7, 0, 4).unwrap().take(1000) {
        seen[key as usize] = true;
    }
    assert!(seen.iter().all(|seen| *seen));
}

#[test]
fn int_test_invalid_configs() {
    let configs = vec![
        HarnessConfig {
            sizes: Vec::new(),
            ..HarnessConfig::default()
        },
        HarnessConfig {
            iterations: 0,
            ..HarnessConfig::default()
        },
        HarnessConfig {
            min_key: 1,
            max_key: 0,
            ..HarnessConfig::default()
        },
        HarnessConfig {
            structures: Vec::new(),
            ..HarnessConfig::default()
        },
    ];

    for config in configs {
        match harness::run(&config) {
            Err(HarnessError::InvalidConfig(_)) => {},
            other => panic!("expected an invalid configuration, got {:?}", other),
        }
    }
}

#[test]
fn int_test_run_and_report() {
    let config = HarnessConfig {
        sizes: vec![50, 200],
        iterations: 2,
        min_key: 1,
        max_key: 100,
        ..HarnessConfig::default()
    };
    let measurements = harness::run(&config).unwrap();
    assert_eq!(measurements.len(), 2 * Structure::ALL.len() * Operation::ALL.len());
    assert!(measurements.iter().all(|m| m.micros >= 0.0));

    let mut buf = Vec::new();
    harness::write_report(&mut buf, &measurements, ReportFormat::Csv).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));

    let rows: Vec<Vec<&str>> = lines.map(|line| line.split(',').collect()).collect();
    assert_eq!(rows.len(), measurements.len());
    assert_eq!(&rows[0][..3], &["50", "BTreeSet", "insert"]);
    assert_eq!(&rows[rows.len() - 1][..3], &["200", "RedBlack", "erase"]);
    assert!(rows.iter().all(|row| row.len() == 4 && row[3].parse::<f64>().is_ok()));
}

#[test]
fn int_test_json_report() {
    let config = HarnessConfig {
        sizes: vec![10],
        structures: vec![Structure::Splay],
        format: ReportFormat::Json,
        ..HarnessConfig::default()
    };
    let measurements = harness::run(&config).unwrap();

    let mut buf = Vec::new();
    harness::write_report(&mut buf, &measurements, config.format).unwrap();
    let parsed: Vec<Measurement> = String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, measurements);
}
