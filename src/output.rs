//! The two emitter variants sharing one level table and gating policy

pub mod structured;
pub mod text;

// Re-export types for convenient access
pub use structured::StructuredEmitter;
pub use text::TextEmitter;
