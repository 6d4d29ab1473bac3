#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

//! tsconfig `paths` / `baseUrl` resolution for bundlers.

pub mod config;
pub mod error;
pub mod options;
pub mod plugin;
pub mod resolver;
pub mod tsconfig;
pub mod version;

pub use config::Config;
pub use error::{Error, Result};
pub use options::{CompilerOptions, PathsMap};
pub use resolver::{
    is_package_name, is_virtual_module, resolve_path_mappings, MappingResolver, MappingSummary,
    PathMapping, Resolution, ResolveId, ResolveIdByPaths,
};
pub use tsconfig::{discover_tsconfig, find_tsconfig, load_tsconfig, LoadedTsconfig};
pub use version::VERSION;
