/// Filesystem adapters for document discovery and output
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, DEFAULT_EXTENSIONS};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
