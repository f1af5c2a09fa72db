use crate::error::{OrResult, OrderError};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// One side of a link: chromosome label and the midpoint of its interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub chrom: String,
    pub pos: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub a: Endpoint,
    pub b: Endpoint,
}

impl LinkRecord {
    pub fn new(a: Endpoint, b: Endpoint) -> Self {
        Self { a, b }
    }

    pub fn is_self_link(&self) -> bool {
        self.a.chrom == self.b.chrom
    }
}

pub struct RawLinks {
    pub records: Vec<LinkRecord>,
    pub lines_read: usize,
    /// Trailing endpoint without a mate (odd line count).
    pub dropped_tail: bool,
}

pub fn load_links_from_path<P: AsRef<Path>>(path: P) -> OrResult<RawLinks> {
    let path = path.as_ref();
    debug!("   Loading Links from: {}", path.display());
    let file = File::open(path)?;
    load_links(file)
}

/// Parses endpoint lines `<id> <chrom> <start> <end> [...]`, pairing them two at
/// a time. Blank lines and `#` comments are skipped.
pub fn load_links<R: Read>(reader: R) -> OrResult<RawLinks> {
    let reader = BufReader::new(reader);

    let mut records = Vec::new();
    let mut pending: Option<Endpoint> = None;
    let mut lines_read = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines_read += 1;

        let endpoint = parse_endpoint(trimmed, line_no)?;
        match pending.take() {
            Some(first) => records.push(LinkRecord::new(first, endpoint)),
            None => pending = Some(endpoint),
        }
    }

    let dropped_tail = pending.is_some();
    if dropped_tail {
        warn!("⚠️  Link data has an odd number of endpoint lines. Last endpoint dropped.");
    }

    debug!(
        "   -> Scanned {} lines. Loaded: {} links.",
        lines_read,
        records.len()
    );

    Ok(RawLinks {
        records,
        lines_read,
        dropped_tail,
    })
}

fn parse_endpoint(line: &str, line_no: usize) -> OrResult<Endpoint> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(OrderError::Parse {
            line: line_no,
            reason: format!("expected at least 4 fields, found {}", tokens.len()),
        });
    }

    let parse_coord = |s: &str, what: &str| -> OrResult<f64> {
        s.parse::<f64>().map_err(|_| OrderError::Parse {
            line: line_no,
            reason: format!("invalid {} coordinate '{}'", what, s),
        })
    };

    let start = parse_coord(tokens[2], "start")?;
    let end = parse_coord(tokens[3], "end")?;

    Ok(Endpoint {
        chrom: tokens[1].to_string(),
        pos: (start + end) / 2.0,
    })
}
