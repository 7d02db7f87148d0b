mod batch_progress;
mod result_sink;
mod reverse_resolver;

pub use batch_progress::BatchProgress;
pub use result_sink::ResultSink;
pub use reverse_resolver::ReverseResolver;
