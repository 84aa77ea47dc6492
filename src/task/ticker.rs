//! Background thread driving the execution queue at a fixed interval.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Sender, select, tick};

/// Something that can be advanced by one tick.
pub trait Tick: Send + Sync + 'static {
    /// Run at most one queued command.
    fn tick(&self);

    /// Run everything still queued.
    fn drain(&self) -> usize;
}

/// Handle to a running ticker thread.
pub struct Ticker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
    target: Arc<dyn Tick>,
}

impl Ticker {
    /// Spawn a thread calling `target.tick()` every `interval`.
    pub fn spawn(target: Arc<dyn Tick>, interval: Duration) -> std::io::Result<Self> {
        let (stop, stop_rx) = crossbeam_channel::bounded::<()>(1);
        let beat = tick(interval);
        let worker = Arc::clone(&target);

        let handle = thread::Builder::new()
            .name("cmd-ticker".into())
            .spawn(move || {
                debug!("Ticker started with interval {:?}", interval);
                loop {
                    select! {
                        recv(beat) -> _ => worker.tick(),
                        recv(stop_rx) -> _ => break,
                    }
                }
                debug!("Ticker stopped");
            })?;

        Ok(Self {
            stop,
            handle,
            target,
        })
    }

    /// Stop the thread, wait for it, then run whatever is still queued.
    ///
    /// Returns how many commands were drained.
    pub fn shutdown(self) -> usize {
        let _ = self.stop.send(());
        if self.handle.join().is_err() {
            warn!("Ticker thread panicked");
        }
        let drained = self.target.drain();
        if drained > 0 {
            info!("Drained {} queued command(s) on shutdown", drained);
        }
        drained
    }
}
