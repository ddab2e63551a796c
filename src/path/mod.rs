//! Finished Paths and their annotated form.

mod generic_path;
pub use generic_path::Path;

mod annotated;
pub use annotated::{AnnotatedPath, Step};
