//! Command execution scheduling.
//!
//! This module provides:
//! - a FIFO queue built on an intrusive linked list
//! - the execution queue running one parsed command per tick
//! - a ticker thread driving the queue at a fixed interval

mod fifo_queue;

pub mod executor;
pub mod ticker;

pub use executor::{ExecutedHook, ExecutionQueue};
pub use fifo_queue::{FifoQueue, Queued};
pub use ticker::{Tick, Ticker};
