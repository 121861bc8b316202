use std::collections::BTreeMap;

use crate::constants::*;
use crate::errors::*;
use crate::version::PackageIdentity;

/// One package identity as reported by the package data helper, plus whether it was seen as
/// installed, as available for install, or both.
#[derive(Clone, Debug)]
pub struct PackageRecord {
    pub identity: PackageIdentity,
    pub installed: bool,
    pub available: bool,
}

impl PackageRecord {
    /// Create a new record with the given membership flags
    pub fn new(identity: PackageIdentity, installed: bool, available: bool) -> Self {
        PackageRecord {
            identity,
            installed,
            available,
        }
    }

    /// A record for an identity that is currently installed
    pub fn installed(identity: PackageIdentity) -> Self {
        Self::new(identity, true, false)
    }

    /// A record for an identity that can be installed from a repository
    pub fn available(identity: PackageIdentity) -> Self {
        Self::new(identity, false, true)
    }
}

/// A stored identity together with its membership in the installed and available sets.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    identity: PackageIdentity,
    installed: bool,
    available: bool,
}

impl CatalogEntry {
    /// The stored identity
    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    /// Whether the identity is in the installed set
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Whether the identity is in the available set
    pub fn is_available(&self) -> bool {
        self.available
    }

    fn matches_arch(&self, arch: Option<&str>) -> bool {
        arch.is_none() || self.identity.arch() == arch
    }
}

/// Known package identities, grouped by name.
///
/// Per name the identities are unique under [`PackageIdentity`]'s ordering and kept sorted
/// newest first. Installed and available are tracked per stored identity; once set they stay
/// set until [`clear`](Self::clear), [`clear_installed`](Self::clear_installed) or
/// [`clear_available`](Self::clear_available) is called.
///
/// Besides packages the catalog holds the global options reported by the data helper, such as
/// the list of packages that may be installed in several versions side by side.
#[derive(Clone, Debug, Default)]
pub struct PackageCatalog {
    by_name: BTreeMap<String, Vec<CatalogEntry>>,
    options: BTreeMap<String, Vec<String>>,
}

impl PackageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the catalog.
    ///
    /// If an identity comparing equal is already stored, that stored identity is kept and the
    /// record's installed/available flags are added to it. Otherwise the identity is inserted at
    /// its place in the descending order for its name.
    pub fn ingest(&mut self, record: PackageRecord) -> Result<(), CatalogError> {
        let PackageRecord {
            identity,
            installed,
            available,
        } = record;

        let name = match (identity.name(), identity.version()) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                name.to_owned()
            }
            _ => return Err(CatalogError::InvalidIdentity(identity.to_string())),
        };

        log::trace!(
            "ingesting {} (installed: {}, available: {})",
            identity,
            installed,
            available
        );

        let entries = self.by_name.entry(name).or_default();
        let entry = match entries.binary_search_by(|stored| identity.cmp(&stored.identity)) {
            Ok(position) => &mut entries[position],
            Err(position) => {
                entries.insert(
                    position,
                    CatalogEntry {
                        identity,
                        installed: false,
                        available: false,
                    },
                );
                &mut entries[position]
            }
        };
        entry.installed |= installed;
        entry.available |= available;

        Ok(())
    }

    /// Store a global option reported by the data helper, replacing an earlier value
    pub fn set_option<K: Into<String>>(
        &mut self,
        key: K,
        values: Vec<String>,
    ) -> Result<(), CatalogError> {
        let key = key.into();
        if !KNOWN_OPTIONS.contains(&key.as_str()) {
            return Err(CatalogError::UnknownOptionLine(key));
        }
        log::debug!("option {} = {:?}", key, values);
        self.options.insert(key, values);
        Ok(())
    }

    /// The value of a global option, if it was reported
    pub fn option(&self, key: &str) -> Option<&[String]> {
        self.options.get(key).map(Vec::as_slice)
    }

    /// Names of packages that may have several versions installed at the same time
    pub fn allow_multi_install(&self) -> &[String] {
        self.option(OPTION_INSTALL_ONLY_PKGS).unwrap_or_default()
    }

    /// Whether `name` is listed in the `installonlypkgs` option
    pub fn is_multi_install(&self, name: &str) -> bool {
        self.allow_multi_install().iter().any(|n| n == name)
    }

    /// All identities known for `name`, newest first
    pub fn lookup(&self, name: &str) -> Vec<&PackageIdentity> {
        self.entries(name).iter().map(CatalogEntry::identity).collect()
    }

    /// All entries known for `name`, newest first
    pub fn entries(&self, name: &str) -> &[CatalogEntry] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// The names that have at least one identity stored, in lexical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    /// The newest available identity of `name`, optionally restricted to one arch
    pub fn latest_available(&self, name: &str, arch: Option<&str>) -> Option<&PackageIdentity> {
        self.entries(name)
            .iter()
            .find(|entry| entry.available && entry.matches_arch(arch))
            .map(CatalogEntry::identity)
    }

    /// The installed identities of `name`, newest first, optionally restricted to one arch
    pub fn installed(&self, name: &str, arch: Option<&str>) -> Vec<&PackageIdentity> {
        self.entries(name)
            .iter()
            .filter(|entry| entry.installed && entry.matches_arch(arch))
            .map(CatalogEntry::identity)
            .collect()
    }

    /// Whether an identity comparing equal to `identity` is stored and available
    pub fn is_available(&self, identity: &PackageIdentity) -> bool {
        self.find(identity).is_some_and(CatalogEntry::is_available)
    }

    /// Whether an identity comparing equal to `identity` is stored and installed
    pub fn is_installed(&self, identity: &PackageIdentity) -> bool {
        self.find(identity).is_some_and(CatalogEntry::is_installed)
    }

    fn find(&self, identity: &PackageIdentity) -> Option<&CatalogEntry> {
        let entries = self.by_name.get(identity.name()?)?;
        let position = entries
            .binary_search_by(|stored| identity.cmp(&stored.identity))
            .ok()?;
        entries.get(position)
    }

    /// Forget every identity and option
    pub fn clear(&mut self) {
        log::debug!("clearing package catalog");
        self.by_name.clear();
        self.options.clear();
    }

    /// Mark every stored identity as not available, keeping the identities themselves
    pub fn clear_available(&mut self) {
        log::debug!("clearing available packages");
        self.by_name
            .values_mut()
            .flatten()
            .for_each(|entry| entry.available = false);
    }

    /// Mark every stored identity as not installed, keeping the identities themselves
    pub fn clear_installed(&mut self) {
        log::debug!("clearing installed packages");
        self.by_name
            .values_mut()
            .flatten()
            .for_each(|entry| entry.installed = false);
    }

    /// Number of stored identities across all names
    pub fn size(&self) -> usize {
        self.by_name.values().map(Vec::len).sum()
    }

    /// Whether no identity is stored
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Number of stored identities in the available set
    pub fn available_count(&self) -> usize {
        self.by_name.values().flatten().filter(|e| e.available).count()
    }

    /// Number of stored identities in the installed set
    pub fn installed_count(&self) -> usize {
        self.by_name.values().flatten().filter(|e| e.installed).count()
    }
}
