/// Placeholder the data helper prints for an epoch or release that is not set.
pub const NONE_PLACEHOLDER: &str = "(none)";

/// Argument appended to the helper command line when only installed packages are requested.
pub const DEFAULT_INSTALLED_ONLY_ARG: &str = "--installed-only";

/// Option key carrying the names of packages that may have several versions installed at once.
pub const OPTION_INSTALL_ONLY_PKGS: &str = "installonlypkgs";

/// Option keys the catalog knows how to store.
pub const KNOWN_OPTIONS: &[&str] = &[OPTION_INSTALL_ONLY_PKGS];
