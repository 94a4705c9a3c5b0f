use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use zenith_core::Timestamp;
use zenith_ports::{Clock, TickSource};

use crate::ticker::IntervalTicks;
use crate::virtual_clock::{ClockState, RateCommand, VirtualClock};

/// Shared virtual clock with its repeating timer
///
/// The timer is a spawned task that applies one [`VirtualClock::tick`] per tick
/// of its source. A tick is applied while holding the write lock and without any
/// await in between, so aborting the task can only happen between ticks, never
/// in the middle of one.
pub struct LiveClock<C: Clock + 'static> {
    inner: Arc<RwLock<VirtualClock<C>>>,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl<C: Clock + 'static> LiveClock<C> {
    pub fn new(clock: VirtualClock<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(clock)),
            timer: Mutex::new(None),
        }
    }

    /// Handle to the underlying clock for read-heavy consumers
    pub fn shared(&self) -> Arc<RwLock<VirtualClock<C>>> {
        Arc::clone(&self.inner)
    }

    /// Start ticking from `ticks`, replacing a running timer
    ///
    /// Must be called inside a Tokio runtime.
    pub fn start<T: TickSource + 'static>(&self, mut ticks: T) {
        self.stop();

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            while ticks.tick().await {
                inner.write().await.tick();
            }
            log::debug!("clock tick source exhausted");
        });

        *self.timer.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
        log::info!("clock timer started");
    }

    /// Start a timer firing every base quantum
    pub async fn start_interval(&self) {
        let period = self.inner.read().await.base_quantum();
        let millis = period.num_milliseconds().max(1) as u64;
        self.start(IntervalTicks::every_millis(millis));
    }

    /// Cancel the timer; calling it again is a no-op
    pub fn stop(&self) {
        let handle = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            handle.abort();
            log::info!("clock timer stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub async fn now(&self) -> Timestamp {
        self.inner.read().await.now()
    }

    pub async fn state(&self) -> ClockState {
        self.inner.read().await.state()
    }

    pub async fn delay_ms(&self) -> i64 {
        self.inner.read().await.delay_ms()
    }

    pub async fn set_datetime(&self, datetime: Timestamp) {
        self.inner.write().await.set_datetime(datetime);
    }

    pub async fn increment_rate(&self) {
        self.inner.write().await.increment_rate();
    }

    pub async fn decrement_rate(&self) {
        self.inner.write().await.decrement_rate();
    }

    pub async fn freeze_rate(&self) {
        self.inner.write().await.freeze_rate();
    }

    pub async fn reset_rate(&self) {
        self.inner.write().await.reset_rate();
    }

    pub async fn apply(&self, command: RateCommand) {
        self.inner.write().await.apply(command);
    }
}

impl<C: Clock + 'static> Drop for LiveClock<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
