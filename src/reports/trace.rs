use csv::Writer;
use orderchr::optimizer::IterationReport;
use orderchr::OrResult;
use std::fs::File;
use std::path::Path;

/// One CSV row per iteration. The first write error is kept and returned by
/// `finish`, later rows are skipped.
pub struct TraceWriter {
    writer: Writer<File>,
    rows: usize,
    error: Option<csv::Error>,
}

impl TraceWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> OrResult<Self> {
        Ok(Self {
            writer: Writer::from_path(path)?,
            rows: 0,
            error: None,
        })
    }

    pub fn record(&mut self, report: &IterationReport) {
        if self.error.is_some() {
            return;
        }
        match self.writer.serialize(report) {
            Ok(()) => self.rows += 1,
            Err(e) => self.error = Some(e),
        }
    }

    /// Flushes the file and returns the number of rows written.
    pub fn finish(mut self) -> OrResult<usize> {
        if let Some(e) = self.error.take() {
            return Err(e.into());
        }
        self.writer.flush()?;
        Ok(self.rows)
    }
}
