// File: crates/skyai-demo/src/input.rs
// Summary: Dashboard CSV loader (time/label column plus numeric metric columns) into Samples.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use skyai_chart::Sample;
use tracing::{debug, warn};

const LABEL_HEADERS: [&str; 5] = ["time", "label", "timestamp", "date", "datetime"];

/// Load samples from a CSV file with a header row.
pub fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_samples(file).with_context(|| format!("reading {}", path.display()))
}

/// Cells that do not parse as finite numbers are left out of that sample.
/// Rows without a label column are labelled by row index.
pub fn read_samples(input: impl Read) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(input);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    debug!(?headers, "csv headers");

    let i_label = headers.iter().position(|h| LABEL_HEADERS.iter().any(|want| h.eq_ignore_ascii_case(want)));
    if i_label.is_none() {
        warn!("no time/label column; labelling rows by index");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = i_label
            .and_then(|ix| rec.get(ix))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| row.to_string());

        let mut sample = Sample::new(label);
        for (ix, cell) in rec.iter().enumerate() {
            if Some(ix) == i_label {
                continue;
            }
            let Some(key) = headers.get(ix) else { continue };
            match cell.parse::<f64>() {
                Ok(v) if v.is_finite() => sample = sample.with(key.as_str(), v),
                _ => debug!(row, column = %key, cell, "skipping non-numeric cell"),
            }
        }
        out.push(sample);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_dashboard_columns() {
        let csv = "time,temp,humidity,soilTemp\n00:00,22.5,65,21.8\n06:00, 20.1 ,70,n/a\n";
        let rows = read_samples(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "00:00");
        assert_eq!(rows[0].get("soilTemp"), Some(21.8));
        assert_eq!(rows[1].get("temp"), Some(20.1));
        assert_eq!(rows[1].get("soilTemp"), None);
    }

    #[test]
    fn missing_label_column_uses_row_index() {
        let rows = read_samples("co2\n400\n380\n".as_bytes()).unwrap();
        assert_eq!(rows[1].label, "1");
        assert_eq!(rows[1].get("co2"), Some(380.0));
    }
}
