// File: crates/chart-core/src/sink.rs
// Summary: Output seam for finished chart documents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::chart::ChartDocument;
use crate::error::{ChartError, ChartResult};
use crate::metric::MetricKind;

/// Accepts complete documents; one document per metric, latest wins.
pub trait OutputSink {
    fn write(&mut self, doc: &ChartDocument) -> ChartResult<()>;
}

/// Writes `<dir>/<stem>.svg`, overwriting the previous generation in place.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn path_for(&self, metric: MetricKind) -> PathBuf {
        self.dir.join(format!("{}.svg", metric.stem()))
    }
}

impl OutputSink for DirectorySink {
    fn write(&mut self, doc: &ChartDocument) -> ChartResult<()> {
        let path = self.path_for(doc.metric);
        let sink_err = |source| ChartError::Sink { name: path.display().to_string(), source };
        std::fs::create_dir_all(&self.dir).map_err(sink_err)?;
        std::fs::write(&path, doc.svg.as_bytes()).map_err(sink_err)?;
        info!(path = %path.display(), bytes = doc.svg.len(), "chart written");
        Ok(())
    }
}

/// Keeps the latest document per metric in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub docs: BTreeMap<MetricKind, ChartDocument>,
}

impl MemorySink {
    pub fn get(&self, metric: MetricKind) -> Option<&ChartDocument> {
        self.docs.get(&metric)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, doc: &ChartDocument) -> ChartResult<()> {
        self.docs.insert(doc.metric, doc.clone());
        Ok(())
    }
}
