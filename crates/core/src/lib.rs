pub mod batch;
pub mod discover;
pub mod document;
pub mod extract;
pub mod normalize;
pub mod output;

pub use batch::{process_many, BatchOptions, FileReport, ProcessError};
pub use discover::find_files;
pub use document::{SourceMapDocument, SUPPORTED_VERSION};
pub use extract::{extract, ExtractError, ExtractOptions, ExtractedSource};
pub use normalize::{normalize, synthesized_name};
pub use output::{destination_root, ensure_output_dir, write_source};
