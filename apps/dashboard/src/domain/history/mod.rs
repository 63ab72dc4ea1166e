//! Fixed-capacity rolling history of recent samples.

pub mod ring_buffer;
pub mod store;

pub use ring_buffer::RingBuffer;
pub use store::{HISTORY_CAPACITY, HistorySnapshot, HistoryStore};
