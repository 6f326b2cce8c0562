/// Resolver adapters invoking the package manager's graph resolution
mod conan_graph_resolver;

pub use conan_graph_resolver::{ConanGraphResolver, DEFAULT_RESOLVER};
