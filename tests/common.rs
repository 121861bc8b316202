#![allow(dead_code)]

use rpm_catalog::{Evr, PackageIdentity, PackageRecord};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn identity(
    name: &str,
    epoch: Option<u64>,
    version: &str,
    release: &str,
    arch: &str,
) -> PackageIdentity {
    PackageIdentity::new(name, Evr::new(epoch, version, Some(release)), arch)
}

pub fn available(identity: PackageIdentity) -> PackageRecord {
    PackageRecord::available(identity)
}

pub fn installed(identity: PackageIdentity) -> PackageRecord {
    PackageRecord::installed(identity)
}

/// Fixture output in the format the package data helper prints
pub const HELPER_OUTPUT: &str = "\
[option installonlypkgs] kernel kernel-devel
installed bash (none) 4.1 1.el6 x86_64
available bash (none) 4.2 10.el6 x86_64
both kernel (none) 2.6.32 754.el6 x86_64
installed kernel (none) 2.6.32 696.el6 x86_64
available kernel 0 2.6.32 754.el6 x86_64
available perl-Data-Dumper 2.145-3.el7 noarch
";
