use crate::config::{SearchParams, SelectionParams};
use crate::error::{OrResult, OrderError};
use crate::karyotype;
use crate::links::loader::{self, LinkRecord};
use crate::links::{LinkIndex, LinkIndexBuilder};
use crate::optimizer::mutation;
use crate::optimizer::Annealer;
use crate::order::Order;
use crate::scorer::CrossingScorer;
use crate::selection::Selector;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Files a run is assembled from.
#[derive(Debug, Clone, Default)]
pub struct InputPaths {
    pub links: PathBuf,
    pub karyotype: Option<PathBuf>,
    pub init_order: Option<PathBuf>,
}

/// Everything the annealer needs, resolved from files and selectors.
#[derive(Debug)]
pub struct Problem {
    pub index: Arc<LinkIndex>,
    pub initial: Order,
    pub statics: Selector,
    pub flippable: Vec<usize>,
}

impl Problem {
    pub fn scorer(&self) -> Arc<CrossingScorer> {
        Arc::new(CrossingScorer::new(self.index.clone()))
    }

    pub fn annealer(&self, params: SearchParams) -> OrResult<Annealer> {
        Annealer::new(
            self.scorer(),
            params,
            self.initial.clone(),
            self.flippable.clone(),
        )
    }

    /// Resolves a comma/whitespace separated list of names against the index.
    pub fn parse_order(&self, text: &str) -> OrResult<Order> {
        let names = karyotype::load_name_list(text.as_bytes())?;
        if names.is_empty() {
            return Err(OrderError::Validation("Empty chromosome order".into()));
        }
        Order::from_names(&names, &self.index)
    }
}

/// Reads every input file and assembles the problem.
pub fn load_problem(paths: &InputPaths, selection: &SelectionParams) -> OrResult<Problem> {
    selection.validate()?;

    info!("📂 Loading Links: {}", paths.links.display());
    let raw = loader::load_links_from_path(&paths.links)?;

    let karyotype = match &paths.karyotype {
        Some(p) => {
            info!("🧬 Loading Karyotype: {}", p.display());
            Some(karyotype::load_karyotype_from_path(p)?)
        }
        None => None,
    };

    let init_order = match &paths.init_order {
        Some(p) => {
            info!("📜 Loading Initial Order: {}", p.display());
            Some(karyotype::load_name_list_from_path(p)?)
        }
        None => None,
    };

    let shuffle = match (&selection.shuffle_file, &selection.shuffle_rx) {
        (Some(file), None) => Selector::explicit(karyotype::load_name_list_from_path(file)?),
        (None, Some(rx)) => Selector::pattern(rx)?,
        (None, None) => Selector::All,
        (Some(_), Some(_)) => {
            return Err(OrderError::Config(
                "shuffle_file and shuffle_rx are mutually exclusive".into(),
            ))
        }
    };
    let statics = Selector::optional_pattern(selection.static_rx.as_deref())?;

    assemble_problem(&raw.records, karyotype, init_order, &shuffle, statics)
}

/// Builds the index and initial order from already-parsed inputs.
///
/// The universe is the karyotype when given, else the link chromosomes in
/// order of first appearance. An explicit initial order replaces the universe.
/// Only chromosomes selected by `shuffle` take part in the order.
pub fn assemble_problem(
    records: &[LinkRecord],
    karyotype: Option<Vec<String>>,
    init_order: Option<Vec<String>>,
    shuffle: &Selector,
    statics: Selector,
) -> OrResult<Problem> {
    let universe = match karyotype {
        Some(k) => k,
        None => first_seen_chromosomes(records),
    };
    let base = init_order.unwrap_or(universe);

    let names: Vec<String> = base.into_iter().filter(|n| shuffle.matches(n)).collect();
    if names.is_empty() {
        warn!("⚠️  No chromosome selected for reordering.");
    }

    let mut builder = LinkIndexBuilder::new();
    builder.add_records(records);
    for name in &names {
        builder.register(name);
    }
    let index = Arc::new(builder.build());

    let initial = Order::from_names(&names, &index)?;
    let flippable = mutation::flippable_positions(&initial, &statics, &index);

    debug!(
        "   {} chromosomes in index, {} in order, {} movable, {} link records",
        index.len(),
        initial.len(),
        flippable.len(),
        index.record_count()
    );

    Ok(Problem {
        index,
        initial,
        statics,
        flippable,
    })
}

fn first_seen_chromosomes(records: &[LinkRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for r in records {
        for chrom in [&r.a.chrom, &r.b.chrom] {
            if seen.insert(chrom.as_str()) {
                names.push(chrom.clone());
            }
        }
    }
    names
}
