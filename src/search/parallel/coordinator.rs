//! Batch coordinator that spreads independent sets over worker threads.

use std::time::Instant;

use crate::search::config::SynthConfig;
use crate::search::parallel::channel::{create_channels, WorkerChannels, WorkerMessage};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::{SynthesisResult, SynthesisStatistics};
use crate::search::synthesis::Synthesizer;

/// Result from a parallel batch.
#[derive(Debug)]
pub struct BatchResult {
    /// One result per input set, in input order.
    pub results: Vec<SynthesisResult>,
    /// Statistics summed over every set.
    pub total_statistics: SynthesisStatistics,
    /// Number of sets each worker handled, indexed by worker id.
    pub sets_per_worker: Vec<usize>,
}

/// Synthesize a pattern for each of `sets`, running on a pool of workers.
///
/// Each set is handled by a single worker with its own synthesizer, so the
/// output is identical to running the sets one after another.
pub fn synthesize_batch<S>(
    sets: &[Vec<S>],
    config: &SynthConfig,
    parallel_config: &ParallelConfig,
) -> BatchResult
where
    S: AsRef<str> + Sync,
{
    let start_time = Instant::now();
    let num_workers = parallel_config.num_workers.clamp(1, sets.len().max(1));
    let (coordinator, worker_channels) = create_channels();

    for index in 0..sets.len() {
        // The receiver lives in `worker_channels`, so this cannot fail.
        let _ = coordinator.jobs.send(index);
    }
    drop(coordinator.jobs);

    let mut slots: Vec<Option<SynthesisResult>> = (0..sets.len()).map(|_| None).collect();
    let mut sets_per_worker = vec![0; num_workers];

    std::thread::scope(|scope| {
        for worker_id in 0..num_workers {
            let channels = worker_channels.clone();
            scope.spawn(move || run_worker(worker_id, sets, config, channels));
        }
        // Only the workers hold senders now; the loop ends when all exit.
        drop(worker_channels);

        for message in coordinator.from_workers.iter() {
            match message {
                WorkerMessage::Done { index, result, .. } => slots[index] = Some(result),
                WorkerMessage::Finished {
                    worker_id,
                    sets_done,
                } => sets_per_worker[worker_id] = sets_done,
            }
        }
    });

    let results: Vec<SynthesisResult> = slots
        .into_iter()
        .zip(sets)
        .map(|(slot, set)| slot.unwrap_or_else(|| Synthesizer::new(config.clone()).run(set)))
        .collect();

    let mut total_statistics = SynthesisStatistics::new();
    for result in &results {
        total_statistics.merge(&result.statistics);
    }
    total_statistics.elapsed_time = start_time.elapsed();

    if config.verbose {
        eprintln!(
            "Batch of {} sets on {} workers in {:.2?}",
            sets.len(),
            num_workers,
            total_statistics.elapsed_time
        );
    }

    BatchResult {
        results,
        total_statistics,
        sets_per_worker,
    }
}

/// Worker loop: take set indices until the job queue is drained.
fn run_worker<S>(worker_id: usize, sets: &[Vec<S>], config: &SynthConfig, channels: WorkerChannels)
where
    S: AsRef<str> + Sync,
{
    let mut synthesizer = Synthesizer::new(config.clone());
    let mut sets_done = 0;

    for index in channels.jobs.iter() {
        let result = synthesizer.run(&sets[index]);
        sets_done += 1;
        if channels
            .to_coordinator
            .send(WorkerMessage::Done {
                worker_id,
                index,
                result,
            })
            .is_err()
        {
            return;
        }
    }

    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        sets_done,
    });
}
