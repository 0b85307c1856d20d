use crate::grid::{Cell, Grid};
use serde_json::json;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

pub fn create_report_logger(filename: Option<String>) -> Box<dyn ReportLogger> {
    match filename {
        None => Box::new(NoOpReportLogger {}),
        Some(filename) => Box::new(JsonReportLogger::new(filename)),
    }
}

/// Records what happened during a check.
pub trait ReportLogger {
    #[allow(unused_variables)]
    fn log_grid(&mut self, label: &str, grid: &Grid) {}

    #[allow(unused_variables)]
    fn log_successor(&mut self, successor: &Grid) {}

    #[allow(unused_variables)]
    fn log_verdict(&mut self, is_next_state: bool, mismatches: &[(usize, usize)]) {}

    #[allow(unused_variables)]
    fn log_error(&mut self, message: String) {}

    fn save(&self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct GridRecord {
    label: String,
    width: usize,
    height: usize,
    population: usize,
    cells: Vec<Vec<Cell>>,
}

impl GridRecord {
    fn new(label: &str, grid: &Grid) -> GridRecord {
        GridRecord {
            label: label.to_string(),
            width: grid.width(),
            height: grid.height(),
            population: grid.population(),
            cells: grid.rows().map(<[Cell]>::to_vec).collect(),
        }
    }
}

struct NoOpReportLogger;
impl ReportLogger for NoOpReportLogger {}

struct JsonReportLogger {
    filename: String,
    grids: Vec<GridRecord>,
    successor: Option<GridRecord>,
    is_next_state: Option<bool>,
    mismatches: Vec<(usize, usize)>,
    error: Option<String>,
}

impl JsonReportLogger {
    fn new(filename: String) -> JsonReportLogger {
        JsonReportLogger {
            filename,
            grids: Vec::new(),
            successor: None,
            is_next_state: None,
            mismatches: Vec::new(),
            error: None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "grids": self.grids,
            "successor": self.successor,
            "is_next_state": self.is_next_state,
            "mismatches": self.mismatches,
            "error": self.error,
        })
    }
}

impl ReportLogger for JsonReportLogger {
    fn log_grid(&mut self, label: &str, grid: &Grid) {
        self.grids.push(GridRecord::new(label, grid));
    }

    fn log_successor(&mut self, successor: &Grid) {
        self.successor = Some(GridRecord::new("next(t0)", successor));
    }

    fn log_verdict(&mut self, is_next_state: bool, mismatches: &[(usize, usize)]) {
        self.is_next_state = Some(is_next_state);
        self.mismatches = mismatches.to_vec();
    }

    fn log_error(&mut self, message: String) {
        self.error = Some(message);
    }

    fn save(&self) -> io::Result<()> {
        let file = File::create(&self.filename)?;
        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &self.to_json())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life;
    use crate::reader::GridReader;
    use std::env;
    use std::fs;

    fn grid(text: &str) -> Grid {
        GridReader::new(text.as_bytes()).read_grid().unwrap()
    }

    #[test]
    fn when_a_verdict_is_logged_the_json_report_contains_grids_and_result() {
        let t0 = grid("0 0 0\n1 1 1\n0 0 0\n");
        let t1 = grid("0 1 0\n0 1 0\n0 1 0\n");
        let verdict = life::check(&t0, &t1);

        let mut logger = JsonReportLogger::new(String::new());
        logger.log_grid("t0", &t0);
        logger.log_grid("t1", &t1);
        logger.log_successor(&verdict.successor);
        logger.log_verdict(verdict.is_next_state, &verdict.mismatches);
        let report = logger.to_json();

        assert_eq!(report["grids"][0]["label"], "t0");
        assert_eq!(report["grids"][0]["population"], 3);
        assert_eq!(report["grids"][1]["cells"][1], json!([0, 1, 0]));
        assert_eq!(report["successor"]["width"], 3);
        assert_eq!(report["is_next_state"], true);
        assert_eq!(report["mismatches"], json!([]));
        assert!(report["error"].is_null());
    }

    #[test]
    fn when_an_error_is_logged_the_verdict_is_missing() {
        let mut logger = JsonReportLogger::new(String::new());
        logger.log_error("line 2: `x` is not an integer".to_string());
        let report = logger.to_json();

        assert_eq!(report["error"], "line 2: `x` is not an integer");
        assert!(report["is_next_state"].is_null());
    }

    #[test]
    fn when_saving_a_json_report_it_is_written_to_the_file() {
        let path = env::temp_dir().join(format!("life_check_report_{}.json", std::process::id()));
        let mut logger = create_report_logger(Some(path.to_string_lossy().into_owned()));
        logger.log_grid("t0", &grid("1 1\n1 1\n"));
        logger.log_verdict(false, &[(0, 1)]);
        logger.save().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let report: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(report["grids"][0]["cells"], json!([[1, 1], [1, 1]]));
        assert_eq!(report["is_next_state"], false);
        assert_eq!(report["mismatches"], json!([[0, 1]]));
    }

    #[test]
    fn when_no_file_is_given_nothing_is_saved() {
        let logger = create_report_logger(None);

        assert!(logger.save().is_ok());
    }
}
