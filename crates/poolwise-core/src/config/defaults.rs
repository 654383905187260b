// Single source of truth for all default values.

// --- Learner ---
pub const DEFAULT_BATCH_SIZE: usize = 5;
pub const DEFAULT_REBUILD_EACH_ITERATION: bool = true;
pub const DEFAULT_UNDERSAMPLE_BEFORE_REBUILD: bool = false;
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000_000; // pairs per model

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
