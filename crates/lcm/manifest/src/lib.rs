//! Manifest generation for the external infrastructure controller.
//!
//! Two layers live here. `template` is the raw positional renderer: pure
//! substitution, extra arguments ignored, missing arguments blank — rules
//! depend on partial renders not failing, so it never errors. The typed
//! builders (`SliceManifestParams`, `UeManifestParams`) produce the YAML
//! custom-resource documents with the declarative spec region plus the
//! fixed enforcement policy block; apply/retry semantics belong entirely to
//! the controller that consumes the document.

pub mod enforcement;
pub mod slice;
pub mod template;
pub mod ue;

pub use enforcement::EnforcementPolicy;
pub use slice::{SliceManifest, SliceManifestParams};
pub use ue::{UeManifest, UeManifestParams};

use thiserror::Error;

/// Manifest serialization errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for manifest operations
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;
