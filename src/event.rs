use std::collections::{BTreeMap, VecDeque};

use crate::config::ViewerConfig;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    // Time housekeeping
    Tick,

    // Input-derived intents
    DimensionSelected { dimension: usize },
    DimensionStepped { delta: i32 },
    ThemeToggled,
    PauseToggled,
    GridToggled,
    AutoRotateToggled,

    // Files
    ConfigReloaded(Box<ViewerConfig>),
}

#[derive(Debug)]
pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

pub struct EventQueue {
    // map of tick -> FIFO queue of events
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        self.emit_at(self.now, kind)
    }

    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick.get_mut(&self.now).and_then(|q| q.pop_front())
    }

    /// Events scheduled for the current tick that have not been popped yet.
    pub fn pending_now(&self) -> usize {
        self.by_tick.get(&self.now).map_or(0, |q| q.len())
    }

    pub fn advance_tick(&mut self) {
        if self.by_tick.get(&self.now).is_some_and(|q| q.is_empty()) {
            self.by_tick.remove(&self.now);
        }
        self.now = self.now.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_pop_in_emit_order_within_a_tick() {
        let mut q = EventQueue::new();
        let a = q.emit_now(Event::ThemeToggled);
        let b = q.emit_now(Event::DimensionSelected { dimension: 6 });
        assert!(b > a);
        assert_eq!(q.pending_now(), 2);
        assert_eq!(q.pop_ready().map(|e| e.kind), Some(Event::ThemeToggled));
        assert_eq!(
            q.pop_ready().map(|e| e.kind),
            Some(Event::DimensionSelected { dimension: 6 })
        );
        assert!(q.pop_ready().is_none());
    }

    #[test]
    fn future_events_wait_for_their_tick() {
        let mut q = EventQueue::new();
        q.emit_at(2, Event::PauseToggled);
        assert!(q.pop_ready().is_none());
        q.advance_tick();
        assert!(q.pop_ready().is_none());
        q.advance_tick();
        let env = q.pop_ready().unwrap();
        assert_eq!(env.tick, 2);
        assert_eq!(env.kind, Event::PauseToggled);
    }

    #[test]
    fn advancing_drops_drained_bucket() {
        let mut q = EventQueue::new();
        q.emit_now(Event::Tick);
        q.pop_ready();
        q.advance_tick();
        assert_eq!(q.now, 1);
        assert_eq!(q.pending_now(), 0);
    }
}
