// src/data/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

pub const DATASET_FILE: &str = "dataset.csv";
pub const AVG_PRICE_FILE: &str = "us_avg_price.csv";
pub const AVG_SALES_FILE: &str = "us_avg_sales.csv";

const STATE_YEAR_COLUMNS: [&str; 4] = ["state", "year", "adjusted_min_price", "sales"];
const AVERAGE_COLUMNS: [&str; 2] = ["year", "mean"];

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("table {path} is missing required column '{column}'")]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },
}

/// One row per state per year. Price and sales can be missing in the source
/// data; a pandas NaN round-trips through CSV as an empty field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateYearRecord {
    pub state: String,
    pub year: i32,
    pub adjusted_min_price: Option<f64>,
    pub sales: Option<f64>,
}

/// Year-indexed national mean, used for both the price and sales series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NationalAverageRecord {
    pub year: i32,
    pub mean: f64,
}

/// The three source tables, read-only after load.
#[derive(Debug)]
pub struct Dataset {
    pub state_years: Vec<StateYearRecord>,
    pub avg_price: Vec<NationalAverageRecord>,
    pub avg_sales: Vec<NationalAverageRecord>,
}

impl Dataset {
    /// Loads all three tables from `dir`. All-or-nothing: a missing file,
    /// a missing header column, or a bad field fails the whole load.
    pub fn load(dir: &Path) -> Result<Self, DataLoadError> {
        let read = |name: &str| -> Result<(PathBuf, String), DataLoadError> {
            let path = dir.join(name);
            let text = fs::read_to_string(&path).map_err(|source| DataLoadError::Io {
                path: path.clone(),
                source,
            })?;
            Ok((path, text))
        };

        let (dataset_path, dataset_csv) = read(DATASET_FILE)?;
        let (price_path, price_csv) = read(AVG_PRICE_FILE)?;
        let (sales_path, sales_csv) = read(AVG_SALES_FILE)?;

        Ok(Self {
            state_years: parse_table(&dataset_path, &dataset_csv, &STATE_YEAR_COLUMNS)?,
            avg_price: parse_table(&price_path, &price_csv, &AVERAGE_COLUMNS)?,
            avg_sales: parse_table(&sales_path, &sales_csv, &AVERAGE_COLUMNS)?,
        })
    }

    /// Parses the three tables from CSV text. `load` is a thin file-reading
    /// wrapper over the same row handling; tests come in through here.
    pub fn parse(
        dataset_csv: &str,
        avg_price_csv: &str,
        avg_sales_csv: &str,
    ) -> Result<Self, DataLoadError> {
        Ok(Self {
            state_years: parse_table(
                Path::new(DATASET_FILE),
                dataset_csv,
                &STATE_YEAR_COLUMNS,
            )?,
            avg_price: parse_table(Path::new(AVG_PRICE_FILE), avg_price_csv, &AVERAGE_COLUMNS)?,
            avg_sales: parse_table(Path::new(AVG_SALES_FILE), avg_sales_csv, &AVERAGE_COLUMNS)?,
        })
    }

    /// Rows for one state, in file (year) order.
    pub fn rows_for_state<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a StateYearRecord> + 'a {
        self.state_years.iter().filter(move |row| row.state == code)
    }
}

fn parse_table<T>(
    path: &Path,
    text: &str,
    required: &[&'static str],
) -> Result<Vec<T>, DataLoadError>
where
    T: serde::de::DeserializeOwned,
{
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = rdr
        .headers()
        .map_err(|source| DataLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    rdr.deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| DataLoadError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Small dataset shared by the chart and controller tests: VT has one row
/// with a missing sales value, KY one with a missing price.
#[cfg(test)]
pub(crate) fn sample() -> Dataset {
    let dataset_csv = "\
state,year,adjusted_min_price,sales
VT,1963,1.60,120.5
VT,1964,1.75,118.0
VT,1965,1.90,
VT,1966,2.10,110.2
NH,1963,1.50,200.1
NH,1964,1.55,195.4
KY,1963,,186.0
KY,1964,1.10,182.3
";
    let avg_price_csv = "\
year,mean
1963,1.55
1964,1.62
1965,1.71
1966,1.80
";
    let avg_sales_csv = "\
year,mean
1963,130.0
1964,128.5
1965,126.9
1966,125.0
";
    Dataset::parse(dataset_csv, avg_price_csv, avg_sales_csv).expect("sample dataset parses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_tables() {
        let dataset = sample();
        assert_eq!(dataset.state_years.len(), 8);
        assert_eq!(dataset.avg_price.len(), 4);
        assert_eq!(dataset.avg_sales.len(), 4);
        assert_eq!(
            dataset.state_years[0],
            StateYearRecord {
                state: "VT".to_string(),
                year: 1963,
                adjusted_min_price: Some(1.60),
                sales: Some(120.5),
            }
        );
    }

    #[test]
    fn empty_fields_parse_as_missing() {
        let dataset = sample();
        let vt_1965 = dataset
            .rows_for_state("VT")
            .find(|row| row.year == 1965)
            .unwrap();
        assert_eq!(vt_1965.adjusted_min_price, Some(1.90));
        assert!(vt_1965.sales.is_none());

        let ky_1963 = dataset
            .rows_for_state("KY")
            .find(|row| row.year == 1963)
            .unwrap();
        assert!(ky_1963.adjusted_min_price.is_none());
    }

    #[test]
    fn missing_column_is_rejected() {
        let result = Dataset::parse(
            "state,year,adjusted_min_price\nVT,1963,1.60\n",
            "year,mean\n1963,1.55\n",
            "year,mean\n1963,130.0\n",
        );
        match result {
            Err(DataLoadError::MissingColumn { column, .. }) => assert_eq!(column, "sales"),
            other => panic!("expected MissingColumn, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        let result = Dataset::parse(
            "state,year,adjusted_min_price,sales\nVT,not-a-year,1.60,120.5\n",
            "year,mean\n1963,1.55\n",
            "year,mean\n1963,130.0\n",
        );
        assert!(matches!(result, Err(DataLoadError::Csv { .. })));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = Dataset::load(Path::new("/nonexistent/cig-trends-data"));
        assert!(matches!(result, Err(DataLoadError::Io { .. })));
    }
}
