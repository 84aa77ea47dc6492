//! Serialized execution of parsed commands.
//!
//! Parsed commands are appended by any number of producers and consumed one
//! per tick. Actions run under an execution guard, so two actions never run
//! at the same time even if `tick` is called from more than one thread.
//! A panicking `on_executed` hook is logged and skipped.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use spin::Mutex;

use super::fifo_queue::FifoQueue;
use crate::command::{CommandContext, CommandResult, ParseResult};
use crate::error::ActionFault;

/// Callback observing every executed command.
pub type ExecutedHook<S> = Box<dyn Fn(&str, &CommandContext<S>, &CommandResult) + Send + Sync>;

/// FIFO of parse results waiting for their action to run.
pub struct ExecutionQueue<S> {
    entries: Mutex<FifoQueue<ParseResult<S>>>,
    /// Held while an action runs.
    running: Mutex<()>,
    /// Queued plus running entries.
    pending: AtomicUsize,
    /// Signalled whenever `pending` drops to zero.
    idle_tx: Sender<()>,
    idle_rx: Receiver<()>,
    hooks: Vec<ExecutedHook<S>>,
}

impl<S> ExecutionQueue<S> {
    pub fn new() -> Self {
        let (idle_tx, idle_rx) = crossbeam_channel::bounded(1);
        Self {
            entries: Mutex::new(FifoQueue::new()),
            running: Mutex::new(()),
            pending: AtomicUsize::new(0),
            idle_tx,
            idle_rx,
            hooks: Vec::new(),
        }
    }

    /// Register a hook called after every execution, in registration order.
    pub fn on_executed<F>(&mut self, hook: F)
    where
        F: Fn(&str, &CommandContext<S>, &CommandResult) + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Append a parse result. Returns its zero-based position in the queue.
    pub fn push(&self, result: ParseResult<S>) -> usize {
        let mut entries = self.entries.lock();
        self.pending.fetch_add(1, Ordering::AcqRel);
        entries.push_back(result);
        entries.len() - 1
    }

    /// Number of entries queued or running.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    /// Number of entries waiting to run.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Pop the oldest entry and run its action.
    ///
    /// Returns `None` when the queue was empty.
    pub fn tick(&self) -> Option<CommandResult> {
        let _running = self.running.lock();

        // Release the queue before running so producers are never blocked on an action.
        let entry = self.entries.lock().pop_front()?;

        let result = execute(&entry);
        let context = entry.context();

        if let Some(fault) = result.error() {
            error!("'{}' failed: {}", entry.label(), fault);
        } else {
            debug!("'{}' completed", entry.label());
        }

        for hook in &self.hooks {
            let call = AssertUnwindSafe(|| hook(entry.command_name(), context, &result));
            if let Err(payload) = panic::catch_unwind(call) {
                error!(
                    "on_executed hook panicked for '{}': {}",
                    entry.label(),
                    panic_message(payload)
                );
            }
        }

        if self.pending.fetch_sub(1, Ordering::AcqRel) == 1 {
            // A full channel already holds a wakeup.
            let _ = self.idle_tx.try_send(());
        }
        Some(result)
    }

    /// Run every remaining entry in order. Returns how many ran.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        while self.tick().is_some() {
            ran += 1;
        }
        ran
    }

    /// Block until nothing is queued or running.
    ///
    /// Wakes when the last entry completes; `interval` bounds each wait so a
    /// wakeup taken by another waiter only delays the recheck.
    pub fn wait_idle(&self, interval: Duration) {
        while self.pending() > 0 {
            let _ = self.idle_rx.recv_timeout(interval);
        }
    }
}

impl<S> Default for ExecutionQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Invoke the action of the landing node, capturing errors and panics.
fn execute<S>(entry: &ParseResult<S>) -> CommandResult {
    let Some(action) = entry.node().action() else {
        return CommandResult::failure(ActionFault::Failed(anyhow::anyhow!(
            "'{}' landed on a node without an action",
            entry.label()
        )));
    };

    match panic::catch_unwind(AssertUnwindSafe(|| action(entry.context()))) {
        Ok(Ok(())) => CommandResult::success(),
        Ok(Err(err)) => CommandResult::failure(ActionFault::Failed(err)),
        Err(payload) => CommandResult::failure(ActionFault::Panicked(panic_message(payload))),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    use super::*;
    use crate::command::{Command, Dispatcher, NodeBuilder};

    fn dispatcher() -> Dispatcher<u32> {
        let mut d = Dispatcher::new();
        d.register(Command::new("ok", NodeBuilder::root().executes(|_| Ok(()))))
            .unwrap();
        d.register(Command::new(
            "fail",
            NodeBuilder::root().executes(|_| anyhow::bail!("Not permitted")),
        ))
        .unwrap();
        d.register(Command::new(
            "boom",
            NodeBuilder::root().executes(|_| panic!("kaboom")),
        ))
        .unwrap();
        d
    }

    #[test]
    fn empty_tick_returns_none() {
        let queue = ExecutionQueue::<u32>::new();
        assert!(queue.tick().is_none());
    }

    #[test]
    fn one_entry_per_tick() {
        let d = dispatcher();
        let queue = ExecutionQueue::new();
        assert_eq!(queue.push(d.parse("ok", 1).unwrap()), 0);
        assert_eq!(queue.push(d.parse("ok", 2).unwrap()), 1);
        assert_eq!(queue.pending(), 2);

        assert!(queue.tick().unwrap().is_ok());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pending(), 1);

        assert!(queue.tick().unwrap().is_ok());
        assert_eq!(queue.pending(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn returned_error_becomes_failed_fault() {
        let d = dispatcher();
        let queue = ExecutionQueue::new();
        queue.push(d.parse("fail", 1).unwrap());

        let result = queue.tick().unwrap();
        assert!(matches!(result.error(), Some(ActionFault::Failed(_))));
        assert_eq!(result.error().unwrap().to_string(), "Not permitted");
    }

    #[test]
    fn panic_is_captured_and_loop_continues() {
        let d = dispatcher();
        let queue = ExecutionQueue::new();
        queue.push(d.parse("boom", 1).unwrap());
        queue.push(d.parse("ok", 2).unwrap());

        let result = queue.tick().unwrap();
        match result.error() {
            Some(ActionFault::Panicked(msg)) => assert_eq!(msg, "kaboom"),
            other => panic!("expected panic fault, got {other:?}"),
        }
        assert!(queue.tick().unwrap().is_ok());
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn hooks_observe_name_source_and_result() {
        let d = dispatcher();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut queue = ExecutionQueue::new();
        let sink = Arc::clone(&seen);
        queue.on_executed(move |name, ctx, result| {
            sink.lock().push((name.to_string(), ctx.source, result.is_ok()));
        });

        queue.push(d.parse("ok", 7).unwrap());
        queue.push(d.parse("fail", 8).unwrap());
        assert_eq!(queue.drain(), 2);

        assert_eq!(
            *seen.lock(),
            vec![("ok".to_string(), 7, true), ("fail".to_string(), 8, false)]
        );
    }

    #[test]
    fn panicking_hook_does_not_stop_the_queue() {
        let d = dispatcher();
        let calls = Arc::new(AtomicUsize::new(0));
        let mut queue = ExecutionQueue::new();
        queue.on_executed(|_, _, _| panic!("hook failed"));
        let counter = Arc::clone(&calls);
        queue.on_executed(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        queue.push(d.parse("ok", 1).unwrap());
        queue.push(d.parse("ok", 2).unwrap());

        assert!(queue.tick().unwrap().is_ok());
        assert_eq!(queue.pending(), 1);
        assert!(queue.tick().unwrap().is_ok());
        assert_eq!(queue.pending(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn concurrent_tickers_never_overlap_actions() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let mut d = Dispatcher::new();
        let (now, max) = (Arc::clone(&in_flight), Arc::clone(&peak));
        d.register(Command::new(
            "slow",
            NodeBuilder::root().executes(move |_| {
                let running = now.fetch_add(1, Ordering::SeqCst) + 1;
                max.fetch_max(running, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(2));
                now.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            }),
        ))
        .unwrap();

        let queue = ExecutionQueue::new();
        for i in 0..16 {
            queue.push(d.parse("slow", i).unwrap());
        }

        let ran = AtomicUsize::new(0);
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    while let Some(result) = queue.tick() {
                        assert!(result.is_ok());
                        ran.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(ran.load(Ordering::SeqCst), 16);
        assert_eq!(peak.load(Ordering::SeqCst), 1);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn wait_idle_wakes_on_completion() {
        let d = dispatcher();
        let queue = ExecutionQueue::new();
        queue.push(d.parse("ok", 1).unwrap());

        let started = Instant::now();
        thread::scope(|s| {
            s.spawn(|| {
                thread::sleep(Duration::from_millis(20));
                queue.tick();
            });
            queue.wait_idle(Duration::from_secs(30));
        });

        assert_eq!(queue.pending(), 0);
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}
