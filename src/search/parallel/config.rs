//! Configuration for parallel batch synthesis.

/// Configuration for parallel batch synthesis.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Set the number of worker threads (at least one).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the number of workers, keeping the default when `None`.
    pub fn with_workers_option(self, num_workers: Option<usize>) -> Self {
        match num_workers {
            Some(n) => self.with_workers(n),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_available_cores() {
        assert!(ParallelConfig::default().num_workers >= 1);
    }

    #[test]
    fn test_with_workers_clamps_zero() {
        assert_eq!(ParallelConfig::default().with_workers(0).num_workers, 1);
    }

    #[test]
    fn test_with_workers_option() {
        let config = ParallelConfig::default().with_workers(3);
        assert_eq!(config.clone().with_workers_option(None).num_workers, 3);
        assert_eq!(config.with_workers_option(Some(5)).num_workers, 5);
    }
}
