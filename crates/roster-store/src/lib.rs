mod error;
mod memory;
mod store;
mod writer;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::RecordStore;
pub use writer::{BatchWriter, WriteSummary};
