//! Content documents compiled into the crate.

/// A named content document.
#[derive(Debug, Clone, Copy)]
pub struct ContentSource {
    /// Document name; prefixes the ids of the content it defines.
    pub name: &'static str,
    /// TOML text of the document.
    pub document: &'static str,
}

macro_rules! source {
    ($name:literal) => {
        ContentSource {
            name: $name,
            document: include_str!(concat!("../../content/", $name, ".toml")),
        }
    };
}

/// Shared steps referenced by content documents.
pub const EMBEDDED_SNIPPETS: &str = include_str!("../../content/snippets.toml");

/// Every content document, in load order.
pub const EMBEDDED_SOURCES: &[ContentSource] = &[
    source!("frontend"),
    source!("backend/go"),
    source!("backend/java"),
    source!("backend/js"),
    source!("backend/otlp"),
    source!("backend/php"),
    source!("backend/python"),
    source!("backend/ruby"),
    source!("backend/rust"),
    source!("backend/elixir"),
    source!("logging/infra"),
    source!("logging/otlp"),
    source!("logging/go"),
    source!("logging/hosting"),
    source!("logging/java"),
    source!("logging/js"),
    source!("logging/php"),
    source!("logging/python"),
    source!("logging/ruby"),
    source!("logging/rust"),
    source!("logging/elixir"),
    source!("self-host"),
    source!("traces/dotnet"),
    source!("traces/go"),
    source!("traces/node-js"),
    source!("traces/otlp"),
    source!("traces/php"),
    source!("traces/python"),
    source!("traces/ruby"),
    source!("traces/rust"),
    source!("traces/serverless"),
    source!("server/go"),
    source!("server/java"),
    source!("server/js"),
    source!("server/php"),
    source!("server/python"),
    source!("server/ruby"),
    source!("server/rust"),
    source!("server/elixir"),
    source!("server/otlp"),
    source!("server/dotnet"),
    source!("server/infra"),
];
