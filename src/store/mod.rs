pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
pub use seed::seed_demo_data;
