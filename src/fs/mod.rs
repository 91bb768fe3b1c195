pub mod locking;
pub mod stage_cache;

pub use stage_cache::{stage_cache_key, FileStageCache, MemoryStageCache, StageCache};
