//! Process-scoped payroll scheduler.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use super::cadence::CadenceTracker;
use crate::batch::BatchRunner;
use crate::config::EngineConfig;
use crate::models::PayFrequency;
use crate::store::{PayrollLedger, StaffDirectory};

/// Default interval between cadence evaluations.
pub(crate) const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(30);

/// Fires payroll batches on the three calendar cadences.
///
/// The scheduler polls the clock on a fixed tick, evaluates the cadence
/// predicates in UTC, and spawns one batch per due cadence. Cadences fire
/// independently and may run concurrently with each other; a second fire of
/// the *same* cadence is skipped while its previous batch is still running.
/// Batch failures are logged and never terminate the scheduler task.
///
/// `start` hands back a [`SchedulerHandle`]; the scheduler runs until the
/// handle is stopped or dropped.
pub struct PayrollScheduler<D, L> {
    runner: Arc<BatchRunner<D, L>>,
    tick_interval: Duration,
}

impl<D, L> PayrollScheduler<D, L>
where
    D: StaffDirectory + 'static,
    L: PayrollLedger + 'static,
{
    /// Creates a scheduler with the default tick interval.
    pub fn new(runner: Arc<BatchRunner<D, L>>) -> Self {
        Self {
            runner,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Creates a scheduler from engine settings.
    pub fn from_config(runner: Arc<BatchRunner<D, L>>, config: &EngineConfig) -> Self {
        Self::new(runner).with_tick_interval(config.tick_interval())
    }

    /// Overrides how often the cadence predicates are evaluated.
    ///
    /// Correctness does not depend on the tick rate: fires are deduplicated
    /// per calendar date, and the ledger deduplicates per pay period.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Starts the background scheduling task.
    pub fn start(self) -> SchedulerHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let runner = self.runner;
        let tick_interval = self.tick_interval;

        let task = tokio::spawn(async move {
            let mut tracker = CadenceTracker::new();
            let running: HashMap<PayFrequency, Arc<Mutex<()>>> = PayFrequency::ALL
                .iter()
                .map(|frequency| (*frequency, Arc::new(Mutex::new(()))))
                .collect();

            let mut ticker = tokio::time::interval(tick_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!("Payroll scheduler started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let now = Utc::now().naive_utc();
                        for frequency in tracker.due(now) {
                            let Some(slot) = running.get(&frequency) else {
                                continue;
                            };
                            match slot.clone().try_lock_owned() {
                                Ok(permit) => {
                                    let runner = runner.clone();
                                    tokio::spawn(async move {
                                        let _running = permit;
                                        match runner.run(frequency, now.date()).await {
                                            Ok(result) => info!(
                                                frequency = %frequency,
                                                paid = result.paid_count(),
                                                skipped = result.skipped_count(),
                                                failed = result.failed_count(),
                                                "Scheduled payroll batch finished"
                                            ),
                                            Err(err) => warn!(
                                                frequency = %frequency,
                                                error = %err,
                                                "Scheduled payroll batch aborted"
                                            ),
                                        }
                                    });
                                }
                                Err(_) => {
                                    warn!(
                                        frequency = %frequency,
                                        "Previous batch still running; skipping trigger"
                                    );
                                }
                            }
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            info!("Payroll scheduler stopped");
        });

        SchedulerHandle {
            shutdown: shutdown_tx,
            task,
        }
    }
}

/// Controls a running [`PayrollScheduler`].
///
/// Dropping the handle also stops the scheduler: the shutdown channel closes
/// and the background task exits on its next poll.
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signals the scheduler to stop and waits for the task to finish.
    ///
    /// Batches already in flight keep running to completion on the runtime;
    /// only the trigger loop is torn down.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }

    /// Whether the background task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryLedger, InMemoryStaffDirectory};

    fn create_scheduler() -> PayrollScheduler<InMemoryStaffDirectory, InMemoryLedger> {
        let directory = Arc::new(InMemoryStaffDirectory::new());
        let ledger = Arc::new(InMemoryLedger::new());
        let runner = Arc::new(BatchRunner::new(directory, ledger));
        PayrollScheduler::new(runner)
    }

    #[tokio::test]
    async fn test_start_and_stop_is_clean() {
        let handle = create_scheduler()
            .with_tick_interval(Duration::from_millis(10))
            .start();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished());

        handle.stop().await;
    }

    #[tokio::test]
    async fn test_scheduler_exits_when_handle_dropped() {
        let handle = create_scheduler()
            .with_tick_interval(Duration::from_millis(10))
            .start();

        let task = handle.task;
        drop(handle.shutdown);

        // The closed shutdown channel ends the loop on the next poll.
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("scheduler task did not exit")
            .expect("scheduler task panicked");
    }
}
