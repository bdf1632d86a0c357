// File: crates/chart-core/src/source.rs
// Summary: Data-source seam and a CSV-backed implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::series::Record;

/// Default number of most recent records handed to one rendering pass.
pub const DEFAULT_MAX_RECORDS: usize = 500;

/// Yields the records for one rendering cycle, oldest first.
pub trait RecordSource {
    fn fetch(&mut self) -> ChartResult<Vec<Record>>;
}

/// Reads `node_id,timestamp,latency,jitter,packet_loss,bandwidth` rows.
#[derive(Clone, Debug)]
pub struct CsvSource {
    path: PathBuf,
    max_records: usize,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, max_records: usize) -> Self {
        Self { path: path.into(), max_records }
    }

    pub fn path(&self) -> &Path { &self.path }
}

impl RecordSource for CsvSource {
    fn fetch(&mut self) -> ChartResult<Vec<Record>> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            ChartError::Source(format!("opening {}: {e}", self.path.display()))
        })?;
        let records = read_records(file, self.max_records)?;
        debug!(path = %self.path.display(), rows = records.len(), "records fetched");
        Ok(records)
    }
}

/// Parse CSV rows, order them by timestamp (stable) and keep the newest `max_records`.
pub fn read_records<R: Read>(input: R, max_records: usize) -> ChartResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut out = Vec::new();
    for rec in rdr.deserialize::<Record>() {
        out.push(rec?);
    }
    out.sort_by_key(|r| r.timestamp);
    let excess = out.len().saturating_sub(max_records);
    out.drain(..excess);
    Ok(out)
}

/// In-memory source replaying a fixed snapshot.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    pub records: Vec<Record>,
}

impl RecordSource for StaticSource {
    fn fetch(&mut self) -> ChartResult<Vec<Record>> {
        Ok(self.records.clone())
    }
}
