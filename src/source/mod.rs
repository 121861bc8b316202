//! The boundary to whatever reports installed and available packages.
//!
//! A [`PackageSource`] is asked for a [`FetchOutput`] in one of two [`FetchMode`]s and answers
//! with raw records and global options. [`HelperSource`] does so by running an external helper
//! program and parsing its output with [`parse_output`].

use std::collections::BTreeMap;

use crate::catalog::PackageRecord;
use crate::errors::*;
use crate::version::{Evr, PackageIdentity};

mod helper;
mod parse;

pub use helper::*;
pub use parse::*;

/// What a refresh asks the source for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FetchMode {
    /// Installed and available packages, plus global options
    Full,
    /// Installed packages only
    InstalledOnly,
}

/// How the source saw a package.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordKind {
    Installed,
    Available,
    Both,
}

impl RecordKind {
    pub fn is_installed(self) -> bool {
        matches!(self, RecordKind::Installed | RecordKind::Both)
    }

    pub fn is_available(self) -> bool {
        matches!(self, RecordKind::Available | RecordKind::Both)
    }
}

/// The version of a raw record, either as one `[epoch:]version[-release]` string or already split.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RawEvr {
    Combined(String),
    Split {
        epoch: Option<u64>,
        version: String,
        release: Option<String>,
    },
}

impl From<RawEvr> for Evr {
    fn from(raw: RawEvr) -> Self {
        match raw {
            RawEvr::Combined(evr) => Evr::parse(&evr),
            RawEvr::Split {
                epoch,
                version,
                release,
            } => Evr::from_parts(epoch, Some(version).filter(|v| !v.is_empty()), release),
        }
    }
}

/// One package as reported by a source, before it becomes a [`PackageRecord`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawRecord {
    pub name: String,
    pub evr: RawEvr,
    pub arch: String,
    pub kind: RecordKind,
}

impl RawRecord {
    pub fn into_record(self) -> PackageRecord {
        let identity = PackageIdentity::new(self.name, self.evr.into(), self.arch);
        PackageRecord::new(identity, self.kind.is_installed(), self.kind.is_available())
    }
}

/// Everything one fetch reported.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FetchOutput {
    pub records: Vec<RawRecord>,
    pub options: BTreeMap<String, Vec<String>>,
}

/// Something that can report packages to a [`RefreshController`](crate::RefreshController).
pub trait PackageSource {
    fn fetch(&mut self, mode: FetchMode) -> Result<FetchOutput, CatalogError>;
}

/// A [`PackageSource`] backed by a closure, created with [`source_fn`].
pub struct SourceFn<F>(F);

/// Wrap a closure as a [`PackageSource`], mostly useful in tests.
pub fn source_fn<F>(fetch: F) -> SourceFn<F>
where
    F: FnMut(FetchMode) -> Result<FetchOutput, CatalogError>,
{
    SourceFn(fetch)
}

impl<F> PackageSource for SourceFn<F>
where
    F: FnMut(FetchMode) -> Result<FetchOutput, CatalogError>,
{
    fn fetch(&mut self, mode: FetchMode) -> Result<FetchOutput, CatalogError> {
        (self.0)(mode)
    }
}
