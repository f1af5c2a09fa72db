pub mod loader;

pub use self::loader::{Endpoint, LinkRecord};

use fnv::FnvHashMap;

/// Dense handle for an interned chromosome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChromId(pub u32);

impl ChromId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed view of a link, seen from the chromosome that owns it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkEnd {
    /// Position on the owning chromosome.
    pub p1: f64,
    /// Position on the partner chromosome.
    pub p2: f64,
}

/// Per-chromosome link statistics.
#[derive(Debug, Clone, Default)]
pub struct ChromLinks {
    pub pair_count: FnvHashMap<ChromId, u32>,
    pub by_partner: FnvHashMap<ChromId, Vec<LinkEnd>>,
    pub total: u32,
    pub inbound: u32,
    pub outbound: u32,
}

#[derive(Debug, Default)]
pub struct LinkIndexBuilder {
    names: Vec<String>,
    lookup: FnvHashMap<String, ChromId>,
    chroms: Vec<ChromLinks>,
    records: usize,
}

impl LinkIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, creating an empty record on first sight.
    pub fn register(&mut self, name: &str) -> ChromId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = ChromId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        self.chroms.push(ChromLinks::default());
        id
    }

    pub fn add_record(&mut self, record: &LinkRecord) {
        let c1 = self.register(&record.a.chrom);
        let c2 = self.register(&record.b.chrom);
        let (p1, p2) = (record.a.pos, record.b.pos);

        self.records += 1;

        if c1 == c2 {
            let links = &mut self.chroms[c1.index()];
            *links.pair_count.entry(c1).or_insert(0) += 1;
            let ends = links.by_partner.entry(c1).or_default();
            ends.push(LinkEnd { p1, p2 });
            ends.push(LinkEnd { p1: p2, p2: p1 });
            return;
        }

        {
            let from = &mut self.chroms[c1.index()];
            *from.pair_count.entry(c2).or_insert(0) += 1;
            from.by_partner
                .entry(c2)
                .or_default()
                .push(LinkEnd { p1, p2 });
            from.total += 1;
            from.outbound += 1;
        }
        {
            let to = &mut self.chroms[c2.index()];
            *to.pair_count.entry(c1).or_insert(0) += 1;
            to.by_partner
                .entry(c1)
                .or_default()
                .push(LinkEnd { p1: p2, p2: p1 });
            to.total += 1;
            to.inbound += 1;
        }
    }

    pub fn add_records<'a, I: IntoIterator<Item = &'a LinkRecord>>(&mut self, records: I) {
        for r in records {
            self.add_record(r);
        }
    }

    pub fn build(self) -> LinkIndex {
        let n = self.names.len();
        let mut pair_matrix = vec![0u32; n * n];
        let mut partners = Vec::with_capacity(n);

        for (c, links) in self.chroms.iter().enumerate() {
            for (&d, &count) in &links.pair_count {
                pair_matrix[c * n + d.index()] = count;
            }
            let mut list: Vec<ChromId> = links
                .pair_count
                .keys()
                .copied()
                .filter(|d| d.index() != c)
                .collect();
            list.sort();
            partners.push(list);
        }

        LinkIndex {
            names: self.names,
            lookup: self.lookup,
            chroms: self.chroms,
            pair_matrix,
            partners,
            records: self.records,
        }
    }
}

/// Read-only link statistics shared by the scorer and the annealer.
#[derive(Debug)]
pub struct LinkIndex {
    names: Vec<String>,
    lookup: FnvHashMap<String, ChromId>,
    chroms: Vec<ChromLinks>,
    // Flattened n x n copy of the pair counts (row-major)
    pair_matrix: Vec<u32>,
    // Distinct partners per chromosome, self excluded, sorted by id
    partners: Vec<Vec<ChromId>>,
    records: usize,
}

impl LinkIndex {
    pub fn from_records<'a, I: IntoIterator<Item = &'a LinkRecord>>(records: I) -> Self {
        let mut builder = LinkIndexBuilder::new();
        builder.add_records(records);
        builder.build()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<ChromId> {
        self.lookup.get(name).copied()
    }

    pub fn name(&self, id: ChromId) -> &str {
        &self.names[id.index()]
    }

    /// Labels in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline(always)]
    pub fn pair_count(&self, c: ChromId, d: ChromId) -> u32 {
        self.pair_matrix[c.index() * self.names.len() + d.index()]
    }

    pub fn partners(&self, c: ChromId) -> &[ChromId] {
        &self.partners[c.index()]
    }

    pub fn positions(&self, c: ChromId, d: ChromId) -> &[LinkEnd] {
        self.chroms[c.index()]
            .by_partner
            .get(&d)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn links(&self, c: ChromId) -> &ChromLinks {
        &self.chroms[c.index()]
    }

    /// Number of records that join two different chromosomes.
    pub fn total_links(&self) -> u64 {
        self.chroms.iter().map(|c| c.outbound as u64).sum()
    }

    pub fn record_count(&self) -> usize {
        self.records
    }
}
