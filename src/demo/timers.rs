use std::time::Duration;

/// Work a demo session defers to later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    ClearHighlight,
    ScrollTo { element_id: String },
}

/// Owned handle to one scheduled event. Cancelling consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending {
    id: u64,
    deadline: Duration,
    event: TimerEvent,
}

/// Single-threaded timer queue driven by a virtual clock.
///
/// Nothing fires on its own: the host moves time forward with [`advance`]
/// (from a frame callback, an interval, or a test) and receives the events
/// that came due, in deadline order.
///
/// [`advance`]: Timers::advance
#[derive(Debug, Default)]
pub struct Timers {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Timers {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending { id, deadline: self.now + delay, event });
        TimerHandle(id)
    }

    /// Returns false when the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != handle.0);
        self.pending.len() != before
    }

    pub fn deadline(&self, handle: &TimerHandle) -> Option<Duration> {
        self.pending.iter().find(|p| p.id == handle.0).map(|p| p.deadline)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn advance(&mut self, by: Duration) -> Vec<TimerEvent> {
        self.now += by;
        let now = self.now;

        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = rest;

        due.sort_by_key(|p| (p.deadline, p.id));
        due.into_iter().map(|p| p.event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_only_once_deadline_is_reached() {
        let mut timers = Timers::default();
        timers.schedule(ms(100), TimerEvent::ClearHighlight);

        assert!(timers.advance(ms(99)).is_empty());
        assert_eq!(timers.advance(ms(1)), vec![TimerEvent::ClearHighlight]);
        assert!(timers.advance(ms(1000)).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Timers::default();
        let handle = timers.schedule(ms(50), TimerEvent::ClearHighlight);
        assert_eq!(timers.deadline(&handle), Some(ms(50)));
        assert!(timers.cancel(handle));
        assert!(timers.advance(ms(100)).is_empty());
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn due_events_come_out_in_deadline_order() {
        let mut timers = Timers::default();
        timers.schedule(ms(350), TimerEvent::ScrollTo { element_id: "fact-a".into() });
        timers.schedule(ms(100), TimerEvent::ScrollTo { element_id: "definition-b".into() });

        let fired = timers.advance(ms(400));
        assert_eq!(
            fired,
            vec![
                TimerEvent::ScrollTo { element_id: "definition-b".into() },
                TimerEvent::ScrollTo { element_id: "fact-a".into() },
            ]
        );
    }
}
