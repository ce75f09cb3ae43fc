//! Deferred action scheduler
//!
//! An ordered queue of deferred units of work drained cooperatively once per
//! frame tick. Actions receive the scheduler itself so they can enqueue
//! follow-up work; anything enqueued during a drain runs on the *next*
//! `update()`, never the current one.

use std::collections::VecDeque;

/// A deferred unit of work, owned by the scheduler until executed
pub type Action = Box<dyn FnOnce(&mut Scheduler)>;

/// FIFO queue of deferred actions executed once per update tick.
///
/// No priorities and no cancellation by identity: an action that may become
/// obsolete guards inside itself (e.g. by checking a disposed flag).
#[derive(Default)]
pub struct Scheduler {
    queue: VecDeque<Action>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue an action for the next drain
    pub fn add(&mut self, action: impl FnOnce(&mut Scheduler) + 'static) {
        self.queue.push_back(Box::new(action));
    }

    /// Drain and execute every action queued at entry, in FIFO order.
    ///
    /// Actions enqueued while draining land in the fresh queue and run on the
    /// following `update()` call. Returns the number of actions executed.
    pub fn update(&mut self) -> usize {
        let mut batch = std::mem::take(&mut self.queue);
        let executed = batch.len();
        for action in batch.drain(..) {
            action(self);
        }
        executed
    }

    /// Number of actions currently pending
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn actions_run_in_fifo_order() {
        let mut scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let log = log.clone();
            scheduler.add(move |_| log.borrow_mut().push(i));
        }

        assert_eq!(scheduler.update(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn enqueue_during_drain_defers_to_next_update() {
        let mut scheduler = Scheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let outer_log = log.clone();
        scheduler.add(move |s| {
            outer_log.borrow_mut().push("first");
            let inner_log = outer_log.clone();
            s.add(move |_| inner_log.borrow_mut().push("follow-up"));
        });

        assert_eq!(scheduler.update(), 1);
        assert_eq!(*log.borrow(), vec!["first"]);
        assert_eq!(scheduler.pending(), 1);

        assert_eq!(scheduler.update(), 1);
        assert_eq!(*log.borrow(), vec!["first", "follow-up"]);
    }

    #[test]
    fn update_on_empty_queue_is_a_no_op() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.update(), 0);
    }
}
