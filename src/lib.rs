//! # rpm-catalog
//!
//! RPM version ordering and an in-memory catalog of installed and available packages.
//!
//! [`rpmvercmp`] compares two version strings the way RPM does, [`Evr`] and
//! [`PackageIdentity`] build a total order over full package identities on top of it, and
//! [`PackageCatalog`] keeps one de-duplicated, newest-first list of identities per package
//! name along with which of them are installed and which are available. A
//! [`RefreshController`] fills the catalog from a [`PackageSource`], such as a
//! [`HelperSource`] running an external data-dump program, whenever it has been marked stale.
//!
//! # Example
//!
//! ```rust
//! use rpm_catalog::{
//!     source_fn, FetchOutput, RawEvr, RawRecord, RecordKind, RefreshController,
//! };
//! use std::cmp::Ordering;
//!
//! # fn main() -> Result<(), rpm_catalog::CatalogError> {
//! assert_eq!(rpm_catalog::rpmvercmp("1.20.b18.el5.extra", "1.20.b18.el5"), Ordering::Greater);
//!
//! let mut controller = RefreshController::new(source_fn(|_mode| {
//!     let record = |evr: &str, kind| RawRecord {
//!         name: "bash".to_string(),
//!         evr: RawEvr::Combined(evr.to_string()),
//!         arch: "x86_64".to_string(),
//!         kind,
//!     };
//!     Ok(FetchOutput {
//!         records: vec![
//!             record("4.1-1.el6", RecordKind::Installed),
//!             record("4.2-10.el6", RecordKind::Available),
//!         ],
//!         ..Default::default()
//!     })
//! }));
//!
//! let latest = controller.latest_available("bash", Some("x86_64"))?;
//! assert_eq!(latest.map(|p| p.to_string()).as_deref(), Some("bash-4.2-10.el6.x86_64"));
//! # Ok(())
//! # }
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

pub(crate) mod constants;
pub use crate::constants::*;

mod version;
pub use crate::version::*;

mod catalog;
pub use crate::catalog::*;

mod refresh;
pub use crate::refresh::*;

pub mod source;
pub use crate::source::*;
