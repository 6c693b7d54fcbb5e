pub mod memory;
pub mod traits;

pub use memory::MemoryTaskRepository;
pub use traits::TaskRepository;
