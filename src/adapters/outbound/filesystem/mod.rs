/// Filesystem adapters for presenting the rendered trees
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
