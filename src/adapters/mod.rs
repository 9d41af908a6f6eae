// Adapters layer: concrete implementations of the domain ports.

pub mod csv_store;
pub mod memory;

pub use csv_store::CsvRoundStore;
pub use memory::MemoryRoundStore;
