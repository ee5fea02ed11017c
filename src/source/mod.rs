use crate::origin::ExecutionContext;

pub mod file;
pub mod http;
pub mod interface;

pub use file::FileSource;
pub use http::HttpSource;
pub use interface::TemplateSource;

/// Selects the materialization strategy for the captured execution context.
///
/// This is the only branch point between the local and remote strategies;
/// there is no fallback between them. A wrong strategy for the environment
/// fails outright when its backing store turns out to be unreachable.
pub fn from_context(context: ExecutionContext) -> Box<dyn TemplateSource> {
    match context {
        ExecutionContext::Local(store_root) => Box::new(FileSource::new(store_root)),
        ExecutionContext::Remote(origin) => Box::new(HttpSource::new(origin)),
    }
}
