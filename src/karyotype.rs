use crate::error::OrResult;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Reads chromosome ids from a karyotype file, in file order.
///
/// Only `chr` lines count (`chr - <id> <label> <start> <end> <color>`); band
/// lines and everything else are ignored.
pub fn load_karyotype<R: Read>(reader: R) -> OrResult<Vec<String>> {
    let reader = BufReader::new(reader);
    let mut seen = HashSet::new();
    let mut chroms = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !line.starts_with("chr") {
            continue;
        }
        if let Some(id) = line.split_whitespace().nth(2) {
            if seen.insert(id.to_string()) {
                chroms.push(id.to_string());
            }
        }
    }

    debug!("   -> Karyotype lists {} chromosomes.", chroms.len());
    Ok(chroms)
}

pub fn load_karyotype_from_path<P: AsRef<Path>>(path: P) -> OrResult<Vec<String>> {
    let path = path.as_ref();
    debug!("   Loading Karyotype from: {}", path.display());
    load_karyotype(File::open(path)?)
}

/// Reads a list of chromosome names separated by commas, whitespace or
/// newlines. Blank lines and `#` comments are skipped. Order is preserved,
/// duplicates are kept so callers can reject them.
pub fn load_name_list<R: Read>(reader: R) -> OrResult<Vec<String>> {
    let reader = BufReader::new(reader);
    let mut names = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        names.extend(
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }

    Ok(names)
}

pub fn load_name_list_from_path<P: AsRef<Path>>(path: P) -> OrResult<Vec<String>> {
    load_name_list(File::open(path)?)
}
