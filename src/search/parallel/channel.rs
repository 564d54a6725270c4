//! Job and result queues shared between the coordinator and its workers.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::search::result::SynthesisResult;

/// Message sent from workers to the coordinator.
#[derive(Debug)]
pub enum WorkerMessage {
    /// Worker finished one set.
    Done {
        worker_id: usize,
        index: usize,
        result: SynthesisResult,
    },
    /// Worker ran out of jobs and is exiting.
    Finished { worker_id: usize, sets_done: usize },
}

/// Coordinator side of the queues.
pub struct CoordinatorChannels {
    /// Indices of sets still to synthesize.
    pub jobs: Sender<usize>,
    /// Messages coming back from workers.
    pub from_workers: Receiver<WorkerMessage>,
}

/// Worker side of the queues.
#[derive(Clone)]
pub struct WorkerChannels {
    pub jobs: Receiver<usize>,
    pub to_coordinator: Sender<WorkerMessage>,
}

/// Create the job queue (shared by all workers) and the result queue.
pub fn create_channels() -> (CoordinatorChannels, WorkerChannels) {
    let (job_tx, job_rx) = unbounded();
    let (result_tx, result_rx) = unbounded();

    (
        CoordinatorChannels {
            jobs: job_tx,
            from_workers: result_rx,
        },
        WorkerChannels {
            jobs: job_rx,
            to_coordinator: result_tx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_are_shared_between_workers() {
        let (coordinator, worker) = create_channels();
        let other = worker.clone();
        coordinator.jobs.send(1).unwrap();
        coordinator.jobs.send(2).unwrap();
        drop(coordinator.jobs);

        let mut received = vec![worker.jobs.recv().unwrap(), other.jobs.recv().unwrap()];
        received.sort_unstable();
        assert_eq!(received, vec![1, 2]);
        assert!(worker.jobs.recv().is_err());
    }

    #[test]
    fn test_results_reach_coordinator() {
        let (coordinator, worker) = create_channels();
        worker
            .to_coordinator
            .send(WorkerMessage::Finished {
                worker_id: 0,
                sets_done: 4,
            })
            .unwrap();
        match coordinator.from_workers.recv().unwrap() {
            WorkerMessage::Finished { worker_id, sets_done } => {
                assert_eq!(worker_id, 0);
                assert_eq!(sets_done, 4);
            }
            other => panic!("unexpected message {:?}", other),
        }
    }
}
