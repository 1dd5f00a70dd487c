use log::info;

/// Track progress of round-by-round fixture fetching
pub struct FetchProgress {
    total_rounds: usize,
    fetched: usize,
    cached: usize,
}

impl FetchProgress {
    pub fn new(total_rounds: usize) -> Self {
        Self {
            total_rounds,
            fetched: 0,
            cached: 0,
        }
    }

    pub fn increment_fetched(&mut self) {
        self.fetched += 1;
        self.log_progress();
    }

    pub fn increment_cached(&mut self) {
        self.cached += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.fetched + self.cached
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if is_milestone(current) || current == self.total_rounds {
            info!(
                "  → Rounds: {}/{} ({} fetched, {} cached)",
                current, self.total_rounds, self.fetched, self.cached
            );
        }
    }
}

fn is_milestone(count: usize) -> bool {
    count % 5 == 0
}
