//! Outcome accumulation and canonical result ordering.

use std::collections::{BTreeMap, HashSet};

use webfolio_core::models::{ConversionRecord, ConversionSummary};

/// Request-local accumulator of per-item outcomes.
///
/// Entries arrive in completion order, which carries no guarantee when items
/// are transcoded concurrently; [`order_records`] re-imposes the canonical
/// order afterwards. Every uploaded item contributes at most one record or
/// one failure, never both.
#[derive(Debug, Default)]
pub struct ConversionLedger {
    records: Vec<ConversionRecord>,
    failures: Vec<String>,
}

impl ConversionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_record(&mut self, record: ConversionRecord) {
        self.records.push(record);
    }

    pub fn append_failure(&mut self, description: String) {
        self.failures.push(description);
    }

    /// Final snapshot, consumed once every item has been attempted.
    pub fn into_parts(self) -> (Vec<ConversionRecord>, Vec<String>) {
        (self.records, self.failures)
    }
}

/// Impose the canonical total order: folder ascending, then output filename
/// ascending, both by lexicographic byte-wise comparison.
///
/// Records whose folder and output name coincide (e.g. `a.jpg` and `a.JPG`
/// both becoming `a.webp`) are disambiguated deterministically by suffixing
/// `-1`, `-2`, ... to the stem of later records, so archive entries never
/// silently overwrite each other.
pub fn order_records(mut records: Vec<ConversionRecord>) -> Vec<ConversionRecord> {
    records.sort_by(|a, b| {
        (a.folder.as_str(), a.output_name.as_str()).cmp(&(b.folder.as_str(), b.output_name.as_str()))
    });

    let mut taken: HashSet<(String, String)> = HashSet::new();
    for record in records.iter_mut() {
        let mut candidate = record.output_name.clone();
        let mut attempt = 0;
        while !taken.insert((record.folder.clone(), candidate.clone())) {
            attempt += 1;
            candidate = disambiguate(&record.output_name, attempt);
        }
        if attempt > 0 {
            tracing::warn!(
                folder = %record.folder,
                original = %record.output_name,
                renamed = %candidate,
                "Output name collision, renaming"
            );
            record.output_name = candidate;
        }
    }

    // Renaming can perturb the lexicographic order ("a-1.webp" sorts before
    // "a.webp"), so sort once more on the final names.
    records.sort_by(|a, b| {
        (a.folder.as_str(), a.output_name.as_str()).cmp(&(b.folder.as_str(), b.output_name.as_str()))
    });

    records
}

fn disambiguate(output_name: &str, attempt: u32) -> String {
    match output_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => {
            format!("{}-{}.{}", stem, attempt, extension)
        }
        _ => format!("{}-{}", output_name, attempt),
    }
}

/// Partition the ordered records by folder, preserving intra-folder order.
/// The union of all sequences is exactly the success set.
pub fn group_by_folder(records: &[ConversionRecord]) -> BTreeMap<String, Vec<ConversionSummary>> {
    let mut grouped: BTreeMap<String, Vec<ConversionSummary>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.folder.clone())
            .or_default()
            .push(record.summary());
    }
    grouped
}
