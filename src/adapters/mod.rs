// Adapters layer: concrete implementations for external systems (http source, storage, export).

pub mod export;
pub mod http_source;
pub mod storage;
