//! The autoplay timer as a scoped resource.
//!
//! The interval exists only while autoplay is enabled: it is armed on
//! enable, dropped on disable, and re-armed whenever the index changes
//! so any navigation restarts the countdown.  At most one interval is
//! alive at any time, and dropping this struct (or the main loop that
//! owns it) cancels the pending tick on every exit path.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

pub struct Autoplay {
    interval: Option<Interval>,
    period: Duration,
    armed_at_index: usize,
}

impl Autoplay {
    /// A disarmed timer.  Call [`sync`] each loop iteration to keep it
    /// paired with the controller's state.
    ///
    /// [`sync`]: Autoplay::sync
    pub fn new(period: Duration) -> Self {
        Self {
            interval: None,
            period,
            armed_at_index: 0,
        }
    }

    /// Reconcile the timer with the controller: arm on enable, disarm
    /// on disable, re-arm when the index moved since arming.
    pub fn sync(&mut self, enabled: bool, index: usize) {
        if !enabled {
            if self.interval.take().is_some() {
                tracing::debug!("autoplay timer disarmed");
            }
            return;
        }
        if self.interval.is_none() || self.armed_at_index != index {
            self.arm(index);
        }
    }

    fn arm(&mut self, index: usize) {
        // First tick a full period from now — `interval` would fire
        // immediately, which after a pointer-leave would advance the
        // slide the moment the pointer left.
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.armed_at_index = index;
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick.  Pends forever while disarmed, so this
    /// can sit in a `select!` without a guard.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn arm_and_disarm_are_paired() {
        let mut autoplay = Autoplay::new(Duration::from_millis(50));
        assert!(!autoplay.is_armed());

        autoplay.sync(true, 0);
        assert!(autoplay.is_armed());

        autoplay.sync(false, 0);
        assert!(!autoplay.is_armed());
    }

    #[tokio::test]
    async fn rapid_toggling_leaves_one_armed_timer() {
        let mut autoplay = Autoplay::new(Duration::from_millis(200));
        for _ in 0..10 {
            autoplay.sync(false, 0);
            autoplay.sync(true, 0);
        }
        assert!(autoplay.is_armed());
        // The surviving timer still owes a full period: no tick yet.
        assert!(timeout(Duration::from_millis(50), autoplay.tick())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn first_tick_fires_a_full_period_after_arming() {
        let mut autoplay = Autoplay::new(Duration::from_millis(80));
        autoplay.sync(true, 0);

        assert!(timeout(Duration::from_millis(20), autoplay.tick())
            .await
            .is_err());
        assert!(timeout(Duration::from_millis(200), autoplay.tick())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn index_change_restarts_the_countdown() {
        let mut autoplay = Autoplay::new(Duration::from_millis(120));
        autoplay.sync(true, 0);
        tokio::time::sleep(Duration::from_millis(80)).await;

        // Navigation happened — the pending tick is discarded.
        autoplay.sync(true, 1);
        assert!(timeout(Duration::from_millis(60), autoplay.tick())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn disarmed_timer_never_ticks() {
        let mut autoplay = Autoplay::new(Duration::from_millis(10));
        assert!(timeout(Duration::from_millis(40), autoplay.tick())
            .await
            .is_err());
    }
}
