pub mod archive;
pub mod arrow;
pub mod paths;
pub mod session;
pub mod storage;

pub use archive::MatchArchive;
pub use arrow::ArrowGeometry;
pub use session::AnnotationSession;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
