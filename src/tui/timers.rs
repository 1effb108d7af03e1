//! Keyed timer bookkeeping for the runtime.
//!
//! Apps never hold timer handles. They declare timers in `subscriptions()`
//! and the runtime reconciles the declared set after every update:
//! new keys are armed, surviving keys keep their deadline and keys that
//! disappeared are cancelled before they can fire.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::tui::subscription::TimerKey;

/// Smallest period a repeating timer may use
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// A timer declaration extracted from a subscription
#[derive(Debug, Clone)]
pub struct TimerSpec<Msg> {
    pub key: TimerKey,
    pub period: Duration,
    pub repeat: bool,
    pub msg: Msg,
}

#[derive(Debug)]
struct ArmedTimer<Msg> {
    deadline: Instant,
    period: Duration,
    repeat: bool,
    msg: Msg,
}

#[derive(Debug)]
pub struct TimerSet<Msg> {
    armed: HashMap<TimerKey, ArmedTimer<Msg>>,
    /// One-shot keys that already fired and are still declared
    spent: HashSet<TimerKey>,
}

impl<Msg> Default for TimerSet<Msg> {
    fn default() -> Self {
        Self {
            armed: HashMap::new(),
            spent: HashSet::new(),
        }
    }
}

impl<Msg: Clone> TimerSet<Msg> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the armed set in line with the declared timers.
    pub fn reconcile(&mut self, declared: Vec<TimerSpec<Msg>>, now: Instant) {
        let declared_keys: HashSet<TimerKey> = declared.iter().map(|spec| spec.key.clone()).collect();

        self.armed.retain(|key, _| {
            let keep = declared_keys.contains(key);
            if !keep {
                log::debug!("Timer '{}' cancelled", key);
            }
            keep
        });
        self.spent.retain(|key| declared_keys.contains(key));

        for spec in declared {
            if let Some(timer) = self.armed.get_mut(&spec.key) {
                timer.msg = spec.msg;
                continue;
            }
            if self.spent.contains(&spec.key) {
                continue;
            }

            let period = if spec.repeat { spec.period.max(MIN_INTERVAL) } else { spec.period };
            log::debug!("Timer '{}' armed for {:?}", spec.key, period);
            self.armed.insert(
                spec.key,
                ArmedTimer {
                    deadline: now + period,
                    period,
                    repeat: spec.repeat,
                    msg: spec.msg,
                },
            );
        }
    }

    /// Take the earliest timer whose deadline has passed.
    ///
    /// One-shot timers move to the spent set; repeating timers are re-armed
    /// one period after `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Msg> {
        let key = self
            .armed
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .min_by_key(|(_, timer)| timer.deadline)
            .map(|(key, _)| key.clone())?;

        let timer = self.armed.get_mut(&key)?;
        if timer.repeat {
            timer.deadline = now + timer.period;
            return Some(timer.msg.clone());
        }

        let timer = self.armed.remove(&key)?;
        log::debug!("Timer '{}' fired", key);
        self.spent.insert(key);
        Some(timer.msg)
    }

    pub fn is_armed(&self, key: &str) -> bool {
        self.armed.keys().any(|armed| armed.as_str() == key)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.values().map(|timer| timer.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.armed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn once(key: &str, ms: u64, msg: u32) -> TimerSpec<u32> {
        TimerSpec {
            key: TimerKey::new(key),
            period: Duration::from_millis(ms),
            repeat: false,
            msg,
        }
    }

    fn every(key: &str, ms: u64, msg: u32) -> TimerSpec<u32> {
        TimerSpec {
            key: TimerKey::new(key),
            period: Duration::from_millis(ms),
            repeat: true,
            msg,
        }
    }

    #[test]
    fn test_one_shot_fires_once_while_declared() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.reconcile(vec![once("a", 100, 1)], start);

        assert_eq!(timers.pop_due(start + Duration::from_millis(99)), None);
        assert_eq!(timers.pop_due(start + Duration::from_millis(100)), Some(1));

        // Still declared after firing: must not re-arm
        timers.reconcile(vec![once("a", 100, 1)], start + Duration::from_millis(100));
        assert_eq!(timers.pop_due(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_undeclared_timer_is_cancelled() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.reconcile(vec![once("a", 100, 1)], start);
        timers.reconcile(Vec::new(), start + Duration::from_millis(50));

        assert!(timers.is_empty());
        assert_eq!(timers.pop_due(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_redeclared_key_keeps_deadline() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.reconcile(vec![once("a", 100, 1)], start);
        timers.reconcile(vec![once("a", 100, 2)], start + Duration::from_millis(60));

        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(100)));
        assert_eq!(timers.pop_due(start + Duration::from_millis(100)), Some(2));
    }

    #[test]
    fn test_key_can_rearm_after_being_dropped() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.reconcile(vec![once("a", 10, 1)], start);
        assert_eq!(timers.pop_due(start + Duration::from_millis(10)), Some(1));

        timers.reconcile(Vec::new(), start + Duration::from_millis(20));
        timers.reconcile(vec![once("a", 10, 1)], start + Duration::from_millis(30));
        assert!(timers.is_armed("a"));
    }

    #[test]
    fn test_repeating_timer_rearms_and_earliest_fires_first() {
        let start = Instant::now();
        let mut timers = TimerSet::new();
        timers.reconcile(vec![every("tick", 80, 7), once("late", 200, 9)], start);

        let t = start + Duration::from_millis(250);
        assert_eq!(timers.pop_due(t), Some(7));
        assert_eq!(timers.pop_due(t), Some(9));
        assert_eq!(timers.pop_due(t), None);
        assert!(timers.is_armed("tick"));
        assert_eq!(timers.next_deadline(), Some(t + Duration::from_millis(80)));
    }
}
