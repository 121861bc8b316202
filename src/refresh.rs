use itertools::Itertools;

use crate::catalog::PackageCatalog;
use crate::errors::*;
use crate::source::{FetchMode, FetchOutput, PackageSource};
use crate::version::PackageIdentity;

/// Whether the catalog has to be repopulated before it can answer queries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RefreshState {
    /// Everything must be fetched again
    #[default]
    NeedsFull,
    /// Only the installed packages must be fetched again
    NeedsInstalledOnly,
    Fresh,
}

/// Owns a [`PackageCatalog`] and keeps it in step with a [`PackageSource`].
///
/// Nothing is fetched until a query needs it. Callers mark the catalog stale at the points where
/// the system may have changed (for example after installing a package), and the next query
/// refreshes it, fully or just the installed half.
///
/// A controller is meant to live for one run and to be used from one thread at a time.
#[derive(Debug)]
pub struct RefreshController<S> {
    source: S,
    catalog: PackageCatalog,
    state: RefreshState,
}

impl<S: PackageSource> RefreshController<S> {
    pub fn new(source: S) -> Self {
        RefreshController {
            source,
            catalog: PackageCatalog::new(),
            state: RefreshState::NeedsFull,
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// The catalog as it is, without refreshing it
    pub fn catalog(&self) -> &PackageCatalog {
        &self.catalog
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Request a full refresh before the next query
    pub fn mark_needs_full(&mut self) {
        self.state = RefreshState::NeedsFull;
    }

    /// Request a refresh of the installed packages before the next query. A pending full
    /// refresh is kept.
    pub fn mark_needs_installed_only(&mut self) {
        if self.state != RefreshState::NeedsFull {
            self.state = RefreshState::NeedsInstalledOnly;
        }
    }

    /// Bring the catalog up to date if it has been marked stale.
    ///
    /// The catalog (or its installed set) is cleared before the source is asked, so when the
    /// fetch fails the catalog is left empty or partially filled. The state is left as it was,
    /// and the next call tries again.
    pub fn ensure_fresh(&mut self) -> Result<(), CatalogError> {
        let mode = match self.state {
            RefreshState::Fresh => return Ok(()),
            RefreshState::NeedsFull => {
                self.catalog.clear();
                FetchMode::Full
            }
            RefreshState::NeedsInstalledOnly => {
                self.catalog.clear_installed();
                FetchMode::InstalledOnly
            }
        };

        log::info!("refreshing package catalog ({:?})", mode);
        let FetchOutput { records, options } = self.source.fetch(mode)?;
        let count = records.len();

        for raw in records {
            self.catalog.ingest(raw.into_record())?;
        }
        for (key, values) in options {
            log::debug!("[option {}] {}", key, values.iter().join(" "));
            self.catalog.set_option(key, values)?;
        }

        self.state = RefreshState::Fresh;
        log::info!(
            "package catalog refreshed: {} records, {} identities",
            count,
            self.catalog.size()
        );
        Ok(())
    }

    /// All known identities of `name`, newest first
    pub fn versions(&mut self, name: &str) -> Result<Vec<&PackageIdentity>, CatalogError> {
        self.ensure_fresh()?;
        Ok(self.catalog.lookup(name))
    }

    /// Names of packages that may be installed in several versions at once
    pub fn allow_multi_install(&mut self) -> Result<&[String], CatalogError> {
        self.ensure_fresh()?;
        Ok(self.catalog.allow_multi_install())
    }

    pub fn latest_available(
        &mut self,
        name: &str,
        arch: Option<&str>,
    ) -> Result<Option<&PackageIdentity>, CatalogError> {
        self.ensure_fresh()?;
        Ok(self.catalog.latest_available(name, arch))
    }

    pub fn installed(
        &mut self,
        name: &str,
        arch: Option<&str>,
    ) -> Result<Vec<&PackageIdentity>, CatalogError> {
        self.ensure_fresh()?;
        Ok(self.catalog.installed(name, arch))
    }
}
