use crate::harness::{HarnessError, Measurement, ReportFormat};
use std::io::Write;

pub const CSV_HEADER: &str = "N,Structure,Operation,Time_microseconds";

/// Writes `measurements` to `writer` in the given format and flushes it.
pub fn write_report<W>(
    mut writer: W,
    measurements: &[Measurement],
    format: ReportFormat,
) -> Result<(), HarnessError>
where
    W: Write,
{
    match format {
        ReportFormat::Csv => {
            writeln!(writer, "{}", CSV_HEADER)?;
            for measurement in measurements {
                writeln!(
                    writer,
                    "{},{},{},{}",
                    measurement.size,
                    measurement.structure,
                    measurement.operation,
                    measurement.micros,
                )?;
            }
        },
        ReportFormat::Json => {
            for measurement in measurements {
                serde_json::to_writer(&mut writer, measurement)?;
                writeln!(writer)?;
            }
        },
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_report, CSV_HEADER};
    use crate::harness::{Measurement, Operation, ReportFormat, Structure};

    fn sample() -> Vec<Measurement> {
        vec![
            Measurement {
                size: 1000,
                structure: Structure::Avl,
                operation: Operation::Insert,
                micros: 12.5,
            },
            Measurement {
                size: 1000,
                structure: Structure::Splay,
                operation: Operation::Erase,
                micros: 3.0,
            },
        ]
    }

    #[test]
    fn test_csv() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), ReportFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![CSV_HEADER, "1000,AVL,insert,12.5", "1000,Splay,erase,3"]);
    }

    #[test]
    fn test_json_lines() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), ReportFormat::Json).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let parsed: Vec<Measurement> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, sample());
        assert!(text.starts_with(
            r#"{"size":1000,"structure":"AVL","operation":"insert","micros":12.5}"#
        ));
    }

    #[test]
    fn test_empty_csv_has_header() {
        let mut buf = Vec::new();
        write_report(&mut buf, &[], ReportFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", CSV_HEADER));
    }
}
