use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

use super::catalog;
use crate::models::record::TransactionRecord;

/// Produces a plausible transaction list for demos and tests.
///
/// In production this would be replaced by a real data source; the
/// engine only ever sees the resulting record list.
///
/// Seeded construction is fully deterministic: record ids are built
/// from the generator's own RNG stream, so a fixed seed reproduces the
/// exact same records, ids included.
pub struct SampleDataGenerator {
    rng: StdRng,
}

impl SampleDataGenerator {
    /// Generator seeded from OS entropy (a fresh dataset every run).
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, reproducible across runs.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` records dated within the 90 days up to today.
    pub fn generate(&mut self, count: usize) -> Vec<TransactionRecord> {
        self.generate_as_of(count, Utc::now().date_naive())
    }

    /// Generate `count` records dated within the 90 days up to `today`.
    /// Passing a fixed date keeps seeded output stable across real days.
    pub fn generate_as_of(&mut self, count: usize, today: NaiveDate) -> Vec<TransactionRecord> {
        (0..count).map(|_| self.record(today)).collect()
    }

    fn record(&mut self, today: NaiveDate) -> TransactionRecord {
        let category = catalog::CATEGORIES[self.rng.gen_range(0..catalog::CATEGORIES.len())];
        let region = catalog::REGIONS[self.rng.gen_range(0..catalog::REGIONS.len())];
        let store = catalog::STORES[self.rng.gen_range(0..catalog::STORES.len())];
        let products = catalog::products_for(category);
        let product = products[self.rng.gen_range(0..products.len())];

        // Revenue lands in [base, 2·base) for the category, rounded to
        // whole currency. Cost is rounded ONCE and profit derived from
        // it, so cost + profit == revenue holds exactly; the cost
        // fraction stays below 0.8, keeping cost <= revenue.
        let base = catalog::base_price(category);
        let revenue = (base + self.rng.gen_range(0.0..base)).round();
        let cost_fraction = self.rng.gen_range(0.6..0.8);
        let cost = (revenue * cost_fraction).round();
        let profit = revenue - cost;

        let units = self.rng.gen_range(1..=5);
        let days_back = self.rng.gen_range(0..90);
        let date = today - Duration::days(days_back);

        TransactionRecord {
            id: self.next_id(),
            date,
            product: product.to_string(),
            category: category.to_string(),
            region: region.to_string(),
            store: store.to_string(),
            revenue,
            units,
            profit,
            cost,
        }
    }

    /// A v4 UUID drawn from this generator's RNG stream (deterministic
    /// under a fixed seed, unlike `Uuid::new_v4`).
    fn next_id(&mut self) -> Uuid {
        Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }
}

impl Default for SampleDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}
