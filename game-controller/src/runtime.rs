use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use game_types::{GameError, Intent, Screen};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::controller::{Effect, GameController};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A spawned tokio task that is aborted when cancelled or dropped.
#[derive(Debug)]
pub struct ScheduledTask {
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct RuntimeInner {
    controller: Mutex<GameController>,
    countdown: Mutex<Option<(u64, ScheduledTask)>>,
    deferred: Mutex<Vec<(u64, ScheduledTask)>>,
    screens: watch::Sender<Screen>,
}

impl RuntimeInner {
    fn dispatch(self: &Arc<Self>, intent: Intent) -> Result<Screen, GameError> {
        // Effects are applied under the controller lock so they can never be
        // reordered against a later dispatch
        let mut controller = lock(&self.controller);
        let effects = controller.dispatch(intent)?;
        self.apply(effects, controller.epoch());
        let screen = controller.screen().clone();
        self.screens.send_replace(screen.clone());
        Ok(screen)
    }

    /// Returns false once the task that fired it should stop
    fn dispatch_scheduled(self: &Arc<Self>, epoch: u64, intent: Intent) -> bool {
        let mut controller = lock(&self.controller);
        match controller.dispatch_scheduled(epoch, intent) {
            Ok(Some(effects)) => {
                self.apply(effects, controller.epoch());
                self.screens.send_replace(controller.screen().clone());
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Scheduled {} failed: {}", intent.name(), e);
                false
            }
        }
    }

    fn apply(self: &Arc<Self>, effects: Vec<Effect>, current_epoch: u64) {
        for effect in effects {
            match effect {
                Effect::StartCountdown { epoch, interval } => {
                    let task = self.spawn_countdown(epoch, interval);
                    if lock(&self.countdown).replace((epoch, task)).is_some() {
                        debug!("Replaced running countdown");
                    }
                }
                Effect::StopCountdown => {
                    if let Some((_, task)) = lock(&self.countdown).take() {
                        task.cancel();
                    }
                }
                Effect::CancelAll => {
                    lock(&self.countdown).take();
                    let cancelled = std::mem::take(&mut *lock(&self.deferred));
                    if !cancelled.is_empty() {
                        debug!("Cancelled {} pending task(s)", cancelled.len());
                    }
                }
                Effect::Schedule {
                    epoch,
                    delay,
                    intent,
                } => {
                    let task = self.spawn_delayed(epoch, delay, intent);
                    lock(&self.deferred).push((epoch, task));
                }
            }
        }

        // Anything issued under an earlier screen is torn down
        let mut countdown = lock(&self.countdown);
        if countdown
            .as_ref()
            .is_some_and(|(epoch, _)| *epoch != current_epoch)
        {
            countdown.take();
        }
        lock(&self.deferred)
            .retain(|(epoch, task)| *epoch == current_epoch && !task.is_finished());
    }

    fn spawn_countdown(self: &Arc<Self>, epoch: u64, interval: Duration) -> ScheduledTask {
        let weak: Weak<Self> = Arc::downgrade(self);
        ScheduledTask::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                if !inner.dispatch_scheduled(epoch, Intent::Tick) {
                    break;
                }
            }
        })
    }

    fn spawn_delayed(
        self: &Arc<Self>,
        epoch: u64,
        delay: Duration,
        intent: Intent,
    ) -> ScheduledTask {
        let weak: Weak<Self> = Arc::downgrade(self);
        ScheduledTask::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.dispatch_scheduled(epoch, intent);
            }
        })
    }
}

/// Runs a [`GameController`] on tokio: owns the countdown and the
/// presentation delays the controller asks for. At most one countdown is
/// alive at a time, and every pending task is aborted when the screen it
/// was scheduled for is left.
///
/// `dispatch` spawns tasks, so it must be called from within a tokio runtime.
#[derive(Clone)]
pub struct GameRuntime {
    inner: Arc<RuntimeInner>,
}

impl GameRuntime {
    pub fn new(controller: GameController) -> Self {
        let (screens, _) = watch::channel(controller.screen().clone());
        Self {
            inner: Arc::new(RuntimeInner {
                controller: Mutex::new(controller),
                countdown: Mutex::new(None),
                deferred: Mutex::new(Vec::new()),
                screens,
            }),
        }
    }

    /// Every screen after a successful dispatch, including the ones caused
    /// by the countdown and delayed intents
    pub fn subscribe(&self) -> watch::Receiver<Screen> {
        self.inner.screens.subscribe()
    }

    pub fn dispatch(&self, intent: Intent) -> Result<Screen, GameError> {
        self.inner.dispatch(intent)
    }

    pub fn screen(&self) -> Screen {
        lock(&self.inner.controller).screen().clone()
    }

    pub fn with_controller<R>(&self, f: impl FnOnce(&GameController) -> R) -> R {
        f(&lock(&self.inner.controller))
    }

    pub fn has_countdown(&self) -> bool {
        lock(&self.inner.countdown).is_some()
    }

    pub fn pending_tasks(&self) -> usize {
        lock(&self.inner.deferred)
            .iter()
            .filter(|(_, task)| !task.is_finished())
            .count()
    }

    /// Abort the countdown and every pending delayed intent
    pub fn shutdown(&self) {
        lock(&self.inner.countdown).take();
        lock(&self.inner.deferred).clear();
        debug!("Runtime tasks torn down");
    }
}
