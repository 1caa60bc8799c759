//! Fuzz test for the guide tipping split
//!
//! Generates tip amounts across the whole u64 range and checks that the
//! three-way split never creates or loses lamports and that the creator
//! only ever receives the division remainder on top of an equal share.

use review_dao::instructions::TipSplit;

/// Fuzz data - the inputs we're randomizing
#[derive(Debug, Clone)]
pub struct TipFuzzData {
    pub amount: u64,
}

impl TipFuzzData {
    /// Generate random fuzz data
    pub fn random() -> Self {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        let s = RandomState::new();
        let mut h = s.build_hasher();
        h.write_u64(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
        );

        Self { amount: h.finish() }
    }
}

/// Property: creator + 2 * reviewer == amount, with no overflow
fn check_conservation_property(data: &TipFuzzData) -> bool {
    match TipSplit::new(data.amount) {
        Ok(split) => split.total() == Some(data.amount),
        // Only a zero tip is refused
        Err(_) => data.amount == 0,
    }
}

/// Property: the creator gets the reviewer share plus a remainder below 3
fn check_remainder_property(data: &TipFuzzData) -> bool {
    match TipSplit::new(data.amount) {
        Ok(split) => {
            split.creator >= split.reviewer
                && split.creator - split.reviewer < 3
                && split.reviewer == data.amount / 3
        }
        Err(_) => true,
    }
}


// Entry point for trident fuzzer (when using full trident)
fn main() {
    let mut failures = 0u32;
    for _ in 0..10_000 {
        let data = TipFuzzData::random();
        if !check_conservation_property(&data) || !check_remainder_property(&data) {
            failures += 1;
            println!("Property violated: {:?}", data);
        }
    }
    println!("Tipping split fuzz: {} failure(s)", failures);
}
