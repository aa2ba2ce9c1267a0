//! Core utilities and types for the Gosu code generator.
//!
//! This crate provides the file-system collaborator the generator writes
//! through, the generation options, and small string helpers.

mod file;
mod preferences;
mod utils;

// File operations
pub use file::{Entry, FileSystem, FsError, LocalFileSystem, MemoryFileSystem};
// Configuration
pub use preferences::{GenOptions, PREFERENCES_FILE, Preferences, PreferencesError};
// String utilities
pub use utils::{is_all_uppercase, lower_first, starts_uppercase};
