/// Formatter adapters for rendering license trees
mod tree_formatter;

pub use tree_formatter::TextTreeFormatter;
