//! Generator configuration.

use std::path::{Path, PathBuf};

use cmpkit_registry::Arity;

pub const UNARY_SOURCE: &str = "operator_unary_const.rs";
pub const BINARY_SOURCE: &str = "operator_binary_const.rs";
pub const OUTPUT: &str = "api_gen.rs";

/// Where the operator list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// Scrape the declaration files under the source root
    #[default]
    Declarations,
    /// Use the operator table compiled into `cmpkit-registry`
    Registry,
}

/// Type name marking a declaration group, and the count marker to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroup {
    pub type_name: String,
    pub sentinel: String,
}

impl CatalogGroup {
    pub fn new(type_name: impl Into<String>, sentinel: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            sentinel: sentinel.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenConfig {
    pub root: PathBuf,
    pub unary_source: PathBuf,
    pub binary_source: PathBuf,
    pub output: PathBuf,
    pub unary_group: CatalogGroup,
    pub binary_group: CatalogGroup,
    pub source: CatalogSource,
}

impl GenConfig {
    /// Default file names and groups under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            unary_source: root.join(UNARY_SOURCE),
            binary_source: root.join(BINARY_SOURCE),
            output: root.join(OUTPUT),
            unary_group: CatalogGroup::new("UnaryOperatorType", "MaxUnaryOperator"),
            binary_group: CatalogGroup::new("BinaryOperatorType", "MaxBinaryOpType"),
            source: CatalogSource::Declarations,
            root,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_source(mut self, source: CatalogSource) -> Self {
        self.source = source;
        self
    }

    pub fn source_path(&self, arity: Arity) -> &Path {
        match arity {
            Arity::Unary => &self.unary_source,
            Arity::Binary => &self.binary_source,
        }
    }

    pub fn group(&self, arity: Arity) -> &CatalogGroup {
        match arity {
            Arity::Unary => &self.unary_group,
            Arity::Binary => &self.binary_group,
        }
    }
}
