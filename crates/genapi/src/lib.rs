//! cmpkit API generator
//!
//! Turns the unary and binary operator catalogs into `api_gen.rs`: one
//! wrapper per operator and a graph factory per binary operator.
//!
//! The run is sequential and all-or-nothing: parse, extract, normalize,
//! render, then write. The output is rendered in memory and moved into place
//! only after every step succeeded.

pub mod catalog;
pub mod config;
pub mod emit;
pub mod error;

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::{Path, PathBuf};

use cmpkit_registry::{Arity, OperatorDescriptor, normalize_catalog};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub use config::{CatalogGroup, CatalogSource, GenConfig};
pub use emit::BANNER;
pub use error::{GenError, Result};

use catalog::GroupKind;
use emit::Family;

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cmpkit_genapi=debug"));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Normalized operators of one arity.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyCatalog {
    pub opcode_type: String,
    #[serde(skip)]
    pub kind: GroupKind,
    pub operators: Vec<OperatorDescriptor>,
}

/// Both operator families, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub unary: FamilyCatalog,
    pub binary: FamilyCatalog,
}

impl Catalog {
    /// Load and normalize both families from the configured source.
    pub fn load(config: &GenConfig) -> Result<Self> {
        Ok(Self {
            unary: load_family(config, Arity::Unary)?,
            binary: load_family(config, Arity::Binary)?,
        })
    }

    /// Render the generated API source.
    pub fn render(&self) -> Result<String> {
        emit::render_file(
            family(Arity::Unary, &self.unary),
            family(Arity::Binary, &self.binary),
        )
    }
}

fn family(arity: Arity, catalog: &FamilyCatalog) -> Family<'_> {
    Family {
        arity,
        descriptors: &catalog.operators,
        opcode_type: &catalog.opcode_type,
        qualified: catalog.kind == GroupKind::Enum,
    }
}

fn load_family(config: &GenConfig, arity: Arity) -> Result<FamilyCatalog> {
    let group = config.group(arity);
    let (kind, operators) = match config.source {
        CatalogSource::Declarations => {
            let path = config.source_path(arity);
            let file = catalog::parse_source(path)?;
            match catalog::find_group(&file, &group.type_name, &group.sentinel) {
                Some(found) => (found.kind, normalize_catalog(found.names, arity)?),
                None => (GroupKind::Enum, Vec::new()),
            }
        }
        CatalogSource::Registry => (
            GroupKind::Enum,
            cmpkit_registry::operator::descriptors(arity)?,
        ),
    };
    Ok(FamilyCatalog {
        opcode_type: group.type_name.clone(),
        kind,
        operators,
    })
}

/// Render the API for `config` without touching the filesystem output.
pub fn generate(config: &GenConfig) -> Result<String> {
    Catalog::load(config)?.render()
}

/// Normalized catalog as pretty-printed JSON.
pub fn catalog_json(config: &GenConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Catalog::load(config)?)?)
}

/// Generate and write the API file. Returns the output path.
pub fn run(config: &GenConfig) -> Result<PathBuf> {
    info!(root = %config.root.display(), source = ?config.source, "generating operator API");
    let source = generate(config)?;
    write_atomic(&config.output, &source)?;
    info!(path = %config.output.display(), bytes = source.len(), "wrote operator API");
    Ok(config.output.clone())
}

/// Mode of a freshly generated file.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Permissions the written file should carry: those of the file being
/// replaced, or world-readable for a new file.
fn output_permissions(path: &Path) -> Option<Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(NEW_FILE_MODE))
    }
    #[cfg(not(unix))]
    None
}

/// Replace `path` with `contents` through a temporary file in the same
/// directory. On failure the previous file is left as it was.
///
/// The temporary file is created owner-only; it takes the replaced file's
/// permissions (or `0o644` on unix) before it is moved into place.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| GenError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    if let Some(permissions) = output_permissions(path) {
        file.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
