use std::cmp::Ordering;
use std::fmt;

/// The identity of one package build: Name, Epoch, Version, Release, and Architecture.
///
/// Every component may be absent. Identities are ordered field by field (name, epoch, version,
/// release, arch) and the first field that differs decides. An absent field sorts before a
/// present one, except the epoch, where "no epoch" is the same as epoch `0`.
///
/// Equality is defined by that ordering rather than by the stored fields, so `bash-4.2-1.x86_64`
/// and `bash-0:4.2-1.x86_64` are the same identity, and so are `1.0001` and `1.1`. This is the
/// equality the [`PackageCatalog`](crate::PackageCatalog) de-duplicates by.
#[derive(Clone, Debug, Default)]
pub struct PackageIdentity {
    name: Option<String>,
    evr: Evr,
    arch: Option<String>,
}

impl PackageIdentity {
    /// Create a new identity from a name, an EVR and an arch
    pub fn new<T: Into<String>>(name: T, evr: Evr, arch: T) -> PackageIdentity {
        Self {
            name: Some(name.into()),
            evr,
            arch: Some(arch.into()),
        }
    }

    /// Create an identity where any component may be absent
    pub fn from_parts(name: Option<String>, evr: Evr, arch: Option<String>) -> PackageIdentity {
        Self { name, evr, arch }
    }

    /// Create an identity parsed from a `name-[epoch:]version-release.arch` string
    ///
    /// The release is whatever follows the last `-`, the version whatever follows the one before
    /// it, so dashes inside the name are kept. The arch is split off the release at its last `.`.
    /// Like [`Evr::parse`] this never fails; missing pieces are left absent.
    pub fn parse(nevra: &str) -> Self {
        let mut parts = nevra.rsplitn(3, '-');
        let last = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (Some(version), Some(name)) => {
                let (release, arch) = match last.rsplit_once('.') {
                    Some((release, arch)) => (release, Some(arch)),
                    None => (last, None),
                };
                let (epoch, version) = Evr::split_epoch(version);
                Self {
                    name: non_empty(name).map(String::from),
                    evr: Evr::from_parts(
                        epoch,
                        non_empty(version).map(String::from),
                        non_empty(release).map(String::from),
                    ),
                    arch: arch.and_then(non_empty).map(String::from),
                }
            }
            (Some(name), None) => Self {
                name: non_empty(name).map(String::from),
                evr: Evr::parse(last),
                arch: None,
            },
            _ => Self {
                name: non_empty(last).map(String::from),
                ..Default::default()
            },
        }
    }

    /// The name value
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The EVR
    pub fn evr(&self) -> &Evr {
        &self.evr
    }

    /// The epoch value
    pub fn epoch(&self) -> Option<u64> {
        self.evr.epoch
    }

    /// The version value
    pub fn version(&self) -> Option<&str> {
        self.evr.version()
    }

    /// The release value
    pub fn release(&self) -> Option<&str> {
        self.evr.release()
    }

    /// The arch value
    pub fn arch(&self) -> Option<&str> {
        self.arch.as_deref()
    }

    /// Write an NVRA string - which doesn't include the epoch
    ///
    /// This is the form typically used for RPM filenames.
    pub fn nvra(&self) -> String {
        format!(
            "{}-{}-{}.{}",
            self.name().unwrap_or_default(),
            self.version().unwrap_or_default(),
            self.release().unwrap_or_default(),
            self.arch().unwrap_or_default()
        )
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name().unwrap_or_default(), self.evr)?;
        if let Some(arch) = &self.arch {
            write!(f, ".{}", arch)?;
        }
        Ok(())
    }
}

impl PartialEq for PackageIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageIdentity {}

impl PartialOrd for PackageIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackageIdentity {
    fn cmp(&self, other: &Self) -> Ordering {
        let name_cmp = compare_present(self.name(), other.name(), Ord::cmp);
        if name_cmp != Ordering::Equal {
            return name_cmp;
        }

        let evr_cmp = self.evr.cmp(&other.evr);
        if evr_cmp != Ordering::Equal {
            return evr_cmp;
        }

        compare_present(self.arch(), other.arch(), Ord::cmp)
    }
}

/// An RPM "version" specifier with 3 components - Epoch, Version, and Release.
///
/// Epoch overrides all other fields and is generally only used as a last resort - in cases where
/// a change to the versioning scheme or packaging error creates a situation where newer packages
/// might otherwise sort as being older. A missing epoch compares like epoch `0`, but is kept
/// distinct so it can be written back the way it was read.
///
/// Version is the normal version string used by the upstream project, and release counts the
/// builds of that version (often with a distribution tag such as `el6` or `fc38`). Both are
/// compared with [`rpmvercmp`], and an absent value sorts before a present one.
#[derive(Clone, Debug, Default)]
pub struct Evr {
    epoch: Option<u64>,
    version: Option<String>,
    release: Option<String>,
}

impl Evr {
    /// Create a new EVR
    pub fn new<T: Into<String>>(epoch: Option<u64>, version: T, release: Option<T>) -> Evr {
        Evr {
            epoch,
            version: Some(version.into()),
            release: release.map(Into::into),
        }
    }

    /// Create an EVR where any component may be absent
    pub fn from_parts(epoch: Option<u64>, version: Option<String>, release: Option<String>) -> Evr {
        Evr {
            epoch,
            version,
            release,
        }
    }

    /// Create an EVR parsed from a `[epoch:]version[-release]` string
    pub fn parse(evr: &str) -> Self {
        let (epoch, version, release) = Evr::parse_values(evr);
        Evr::from_parts(epoch, version.map(Into::into), release.map(Into::into))
    }

    /// Like [`Evr::parse`], with an absent input giving an all-absent EVR
    pub fn parse_opt(evr: Option<&str>) -> Self {
        evr.map(Evr::parse).unwrap_or_default()
    }

    /// The epoch value
    pub fn epoch(&self) -> Option<u64> {
        self.epoch
    }

    /// The version value
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The release value
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }

    /// Write an EVR string in a normalized form which always includes an epoch
    ///
    /// The standard string representation of an EVR will ignore the epoch if not set. A package
    /// having no epoch value is equivalent to having an epoch of zero, so the normalized form
    /// writes equivalent values identically.
    pub fn as_normalized_form(&self) -> String {
        let mut normalized = format!(
            "{}:{}",
            self.epoch.unwrap_or(0),
            self.version().unwrap_or_default()
        );
        if let Some(release) = self.release() {
            normalized.push('-');
            normalized.push_str(release);
        }
        normalized
    }

    /// Parse the epoch, version and release values and return them as a 3-element tuple
    ///
    /// A leading `<digits>:` is the epoch, and a bare leading `:` means epoch `0`. Everything
    /// after the last `-` is the release. Empty versions and releases come back as `None`.
    /// Malformed input never fails, it just yields whatever pieces could be recognized.
    pub fn parse_values(evr: &str) -> (Option<u64>, Option<&str>, Option<&str>) {
        let (epoch, vr) = Evr::split_epoch(evr);
        let (version, release) = match vr.rsplit_once('-') {
            Some((version, release)) => (version, non_empty(release)),
            None => (vr, None),
        };

        (epoch, non_empty(version), release)
    }

    fn split_epoch(evr: &str) -> (Option<u64>, &str) {
        if let Some(rest) = evr.strip_prefix(':') {
            return (Some(0), rest);
        }

        match evr.split_once(':') {
            Some((digits, rest))
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
            {
                match digits.parse() {
                    Ok(epoch) => (Some(epoch), rest),
                    Err(_) => {
                        log::warn!("epoch of {:?} is out of range, treating it as unset", evr);
                        (None, evr)
                    }
                }
            }
            _ => (None, evr),
        }
    }
}

impl From<(Option<u64>, &str, Option<&str>)> for Evr {
    fn from(val: (Option<u64>, &str, Option<&str>)) -> Self {
        Evr::new(val.0, val.1, val.2)
    }
}

impl fmt::Display for Evr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(epoch) = self.epoch {
            write!(f, "{}:", epoch)?;
        }

        write!(f, "{}", self.version().unwrap_or_default())?;

        if let Some(release) = self.release() {
            write!(f, "-{}", release)?;
        }
        Ok(())
    }
}

impl PartialEq for Evr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evr {}

impl PartialOrd for Evr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evr {
    fn cmp(&self, other: &Self) -> Ordering {
        let epoch_cmp = self.epoch.unwrap_or(0).cmp(&other.epoch.unwrap_or(0));
        if epoch_cmp != Ordering::Equal {
            return epoch_cmp;
        }

        let version_cmp = compare_present(self.version(), other.version(), rpmvercmp);
        if version_cmp != Ordering::Equal {
            return version_cmp;
        }

        compare_present(self.release(), other.release(), rpmvercmp)
    }
}

/// Absent values sort before present ones, present ones are compared with `cmp`
fn compare_present(
    a: Option<&str>,
    b: Option<&str>,
    cmp: fn(&str, &str) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp(a, b),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

/// Compare two version (or release) strings the way `rpmvercmp` does.
///
/// Both strings are cut into segments, maximal runs of ASCII digits or ASCII letters. Anything
/// else only separates segments and is otherwise ignored, so `1.0` and `1_0` are equal.
/// Segments are compared pairwise:
///
/// * the class of the left-hand segment decides what is taken from the right-hand side; if the
///   right-hand side has no run of that class at this point, the numeric side is newer
/// * numeric segments compare as integers, so leading zeroes don't matter
/// * alphabetic segments compare bytewise
///
/// When one side runs out of segments, the side with characters left over is newer.
pub fn rpmvercmp(version1: &str, version2: &str) -> Ordering {
    if version1 == version2 {
        return Ordering::Equal;
    }

    let mut version1_part = version1;
    let mut version2_part = version2;

    let separator = |c: char| !c.is_ascii_alphanumeric();

    loop {
        version1_part = version1_part.trim_start_matches(separator);
        version2_part = version2_part.trim_start_matches(separator);

        if version1_part.is_empty() || version2_part.is_empty() {
            break;
        }

        let numeric = version1_part.starts_with(|c: char| c.is_ascii_digit());
        let class: fn(char) -> bool = if numeric {
            |c: char| c.is_ascii_digit()
        } else {
            |c: char| c.is_ascii_alphabetic()
        };

        let (segment1, rest1) = split_segment(version1_part, class);
        let (segment2, rest2) = split_segment(version2_part, class);

        if segment2.is_empty() {
            return match numeric {
                true => Ordering::Greater,
                false => Ordering::Less,
            };
        }

        let ordering = match numeric {
            true => compare_numeric(segment1, segment2),
            false => segment1.cmp(segment2),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }

        version1_part = rest1;
        version2_part = rest2;
    }

    version1_part.len().cmp(&version2_part.len())
}

/// split off the leading run of characters matching `class` (possibly empty)
fn split_segment(string: &str, class: fn(char) -> bool) -> (&str, &str) {
    string.split_at(string.find(|c: char| !class(c)).unwrap_or(string.len()))
}

/// integer comparison of two digit strings of any length
fn compare_numeric(digits1: &str, digits2: &str) -> Ordering {
    let digits1 = digits1.trim_start_matches('0');
    let digits2 = digits2.trim_start_matches('0');

    digits1
        .len()
        .cmp(&digits2.len())
        .then_with(|| digits1.cmp(digits2))
}

/// [`rpmvercmp`] with absent strings treated as empty
pub fn compare_versions(version1: Option<&str>, version2: Option<&str>) -> Ordering {
    rpmvercmp(version1.unwrap_or_default(), version2.unwrap_or_default())
}

/// Compare two strings as RPM EVR values
pub fn rpm_evr_compare(evr1: &str, evr2: &str) -> Ordering {
    let evr1 = Evr::parse(evr1);
    let evr2 = Evr::parse(evr2);
    evr1.cmp(&evr2)
}

/// Compare a requested EVR against an installed one, consulting only what the request states.
///
/// The epoch is only compared when `wanted` carries one (an installed EVR without epoch counts as
/// epoch `0`). The version and release are likewise only compared when `wanted` carries them, so
/// a request for `4.2` is met by any `4.2-<release>` and a bare `1:` by anything with epoch `1`.
/// Returns how `wanted` relates to `current`.
pub fn compare_evr_request(wanted: &Evr, current: &Evr) -> Ordering {
    if let Some(epoch) = wanted.epoch {
        let epoch_cmp = epoch.cmp(&current.epoch.unwrap_or(0));
        if epoch_cmp != Ordering::Equal {
            return epoch_cmp;
        }
    }

    let Some(version) = wanted.version() else {
        return Ordering::Equal;
    };
    let version_cmp = compare_present(Some(version), current.version(), rpmvercmp);
    if version_cmp != Ordering::Equal {
        return version_cmp;
    }

    match wanted.release() {
        Some(release) => compare_present(Some(release), current.release(), rpmvercmp),
        None => Ordering::Equal,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn identity(
        name: &str,
        epoch: Option<u64>,
        version: &str,
        release: &str,
        arch: &str,
    ) -> PackageIdentity {
        PackageIdentity::new(name, Evr::new(epoch, version, Some(release)), arch)
    }

    fn without_arch(name: &str, evr: Evr) -> PackageIdentity {
        PackageIdentity::from_parts(Some(name.to_string()), evr, None)
    }

    /// Test that identities are printed as expected
    #[test]
    fn test_identity_tostr() {
        let ident = identity("foo", None, "1.2.3", "45", "x86_64");
        assert_eq!("foo-1.2.3-45.x86_64", ident.to_string());
        assert_eq!("foo-1.2.3-45.x86_64", ident.nvra());

        let ident = identity("foo", Some(1), "2.3.4", "5", "x86_64");
        assert_eq!("foo-1:2.3.4-5.x86_64", ident.to_string());
        assert_eq!("foo-2.3.4-5.x86_64", ident.nvra());

        let ident = without_arch("foo", Evr::new(None, "1.0", None));
        assert_eq!("foo-1.0", ident.to_string());
    }

    /// Test that a correctly formed NEVRA string is parsed correctly
    #[test]
    fn test_identity_parse() {
        let ident = PackageIdentity::parse("foo-1.2.3-45.x86_64");
        assert_eq!(ident.name(), Some("foo"));
        assert_eq!(ident.epoch(), None);
        assert_eq!(ident.version(), Some("1.2.3"));
        assert_eq!(ident.release(), Some("45"));
        assert_eq!(ident.arch(), Some("x86_64"));

        let ident = PackageIdentity::parse("perl-Data-Dumper-1:2.145-3.el7.x86_64");
        assert_eq!(ident.name(), Some("perl-Data-Dumper"));
        assert_eq!(ident.epoch(), Some(1));
        assert_eq!(ident.version(), Some("2.145"));
        assert_eq!(ident.release(), Some("3.el7"));
        assert_eq!(ident.arch(), Some("x86_64"));

        let ident = PackageIdentity::parse("python3.9-3.9.11-2.fc38.noarch");
        assert_eq!(ident.name(), Some("python3.9"));
        assert_eq!(ident.release(), Some("2.fc38"));
        assert_eq!(ident.arch(), Some("noarch"));
    }

    /// Test that various not-well-formed NEVRA strings still get parsed in a sensible way
    #[test]
    fn test_identity_parse_edge_cases() {
        let ident = PackageIdentity::parse("foo");
        assert_eq!(ident.name(), Some("foo"));
        assert_eq!(ident.version(), None);
        assert_eq!(ident.arch(), None);

        let ident = PackageIdentity::parse("foo-1.2");
        assert_eq!(ident.name(), Some("foo"));
        assert_eq!(ident.version(), Some("1.2"));
        assert_eq!(ident.release(), None);

        let ident = PackageIdentity::parse("foo-1.2-3");
        assert_eq!(ident.release(), Some("3"));
        assert_eq!(ident.arch(), None);

        let ident = PackageIdentity::parse("");
        assert_eq!(ident.name(), None);
    }

    /// Test comparing identities using comparison operators
    #[test]
    fn test_identity_ord() {
        let ident1 = PackageIdentity::parse("foo-1.2.3-45.noarch");
        let ident2 = PackageIdentity::parse("foo-0:1.2.3-45.noarch");
        assert!(ident1 == ident2);

        let ident1 = PackageIdentity::parse("bar-1.2.3-45.noarch");
        let ident2 = PackageIdentity::parse("foo-9:1.2.3-45.noarch");
        assert!(ident1 < ident2);

        // names compare lexically, not as versions
        let ident1 = PackageIdentity::parse("python3.9-3.9.12-2.fc39.x86_64");
        let ident2 = PackageIdentity::parse("python3.11-3.11.7-2.fc39.x86_64");
        assert!(ident1 > ident2);

        let ident1 = PackageIdentity::parse("foo-1.2.3-45.fc38.noarch");
        let ident2 = PackageIdentity::parse("foo-1.2.3-45.fc39.noarch");
        assert!(ident1 < ident2);

        let ident1 = PackageIdentity::parse("foo-1.2.3-45.fc39.i386");
        let ident2 = PackageIdentity::parse("foo-1.2.3-45.fc39.x86_64");
        assert!(ident1 < ident2);

        // leading zeroes make no difference, so these are the same identity
        let ident1 = PackageIdentity::parse("foo-1.0001-1.noarch");
        let ident2 = PackageIdentity::parse("foo-1.1-1.noarch");
        assert!(ident1 == ident2);
    }

    /// Test that absent fields sort before present ones
    #[test]
    fn test_identity_ord_absent_fields() {
        let unnamed = PackageIdentity::from_parts(None, Evr::new(Some(5), "9", None), None);
        let named = without_arch("a", Evr::default());
        assert!(unnamed < named);

        let no_release = without_arch("a", Evr::new(None, "1.0", None));
        let release = without_arch("a", Evr::new(None, "1.0", Some("1")));
        assert!(no_release < release);

        let no_arch = without_arch("a", Evr::new(None, "1.0", Some("1")));
        let arch = identity("a", None, "1.0", "1", "i686");
        assert!(no_arch < arch);

        let no_version = without_arch("a", Evr::parse("-9"));
        assert_eq!(no_version.version(), None);
        assert!(no_version < no_release);
    }

    /// Test that EVRs are printed as expected
    #[test]
    fn test_evr_tostr() {
        let evr = Evr::new(None, "1.2.3", Some("45"));
        assert_eq!("1.2.3-45", evr.to_string());
        assert_eq!("0:1.2.3-45", evr.as_normalized_form());

        let evr = Evr::new(Some(0), "1.2.3", Some("45"));
        assert_eq!("0:1.2.3-45", evr.to_string());
        assert_eq!("0:1.2.3-45", evr.as_normalized_form());

        let evr = Evr::new(Some(3), "1.2.3", None);
        assert_eq!("3:1.2.3", evr.to_string());
        assert_eq!("3:1.2.3", evr.as_normalized_form());
    }

    /// Test that a correctly formed EVR string is parsed correctly
    #[test]
    fn test_evr_parse() {
        assert_eq!(Evr::parse_values("1.2.3-45"), (None, Some("1.2.3"), Some("45")));
        assert_eq!(Evr::parse_values("0:1.2.3-45"), (Some(0), Some("1.2.3"), Some("45")));
        assert_eq!(Evr::parse_values("1:2.3.4-5"), (Some(1), Some("2.3.4"), Some("5")));
        assert_eq!(Evr::parse_values("4.2"), (None, Some("4.2"), None));
        // the release starts after the last dash
        assert_eq!(Evr::parse_values("1.0-rc1-3.el6"), (None, Some("1.0-rc1"), Some("3.el6")));

        let evr = Evr::parse("2:1.0-3.el6");
        assert_eq!(evr.epoch(), Some(2));
        assert_eq!(evr.version(), Some("1.0"));
        assert_eq!(evr.release(), Some("3.el6"));

        let evr = Evr::parse_opt(None);
        assert_eq!((evr.epoch(), evr.version(), evr.release()), (None, None, None));
    }

    /// Test that various not-well-formed EVR strings still get parsed in a sensible way
    #[test]
    fn test_evr_parse_edge_cases() {
        assert_eq!(Evr::parse_values(""), (None, None, None));
        assert_eq!(Evr::parse_values("-"), (None, None, None));
        assert_eq!(Evr::parse_values("."), (None, Some("."), None));
        assert_eq!(Evr::parse_values(":"), (Some(0), None, None));
        assert_eq!(Evr::parse_values(":-"), (Some(0), None, None));
        assert_eq!(Evr::parse_values(".-"), (None, Some("."), None));
        assert_eq!(Evr::parse_values("0"), (None, Some("0"), None));
        assert_eq!(Evr::parse_values("0-"), (None, Some("0"), None));
        assert_eq!(Evr::parse_values(":0"), (Some(0), Some("0"), None));
        assert_eq!(Evr::parse_values(":0-"), (Some(0), Some("0"), None));
        assert_eq!(Evr::parse_values("0:"), (Some(0), None, None));
        assert_eq!(Evr::parse_values("asdf:"), (None, Some("asdf:"), None));
        assert_eq!(Evr::parse_values("~:"), (None, Some("~:"), None));
        assert_eq!(
            Evr::parse_values("99999999999999999999999:1.0"),
            (None, Some("99999999999999999999999:1.0"), None)
        );
    }

    /// Test direct comparison of rpm EVR strings using rpm_evr_compare
    #[test]
    fn test_rpm_evr_compare() {
        assert_eq!(Ordering::Equal, rpm_evr_compare("0:1.2.3-45", "1.2.3-45"));
        assert_eq!(Ordering::Less, rpm_evr_compare("1.2.3-45", "1:1.2.3-45"));
        assert_eq!(Ordering::Greater, rpm_evr_compare("1.2.3-46", "1.2.3-45"));
        assert_eq!(Ordering::Greater, rpm_evr_compare("1.2.3-1", "1.2.3"));
    }

    /// Test comparing EVRs using comparison operators
    #[test]
    fn test_evr_ord() {
        // compare the same EVR with zero-epoch as equal to default-epoch
        let evr1 = Evr::parse("1.2.3-45");
        let evr2 = Evr::parse("0:1.2.3-45");
        assert!(evr1 == evr2);

        // a bare colon is epoch zero as well
        let evr1 = Evr::parse(":1.2.3-45");
        let evr2 = Evr::parse("1.2.3-45");
        assert!(evr1 == evr2);

        // compare EVR with higher epoch taken over EVR with higher version
        let evr1 = Evr::parse("4.2.3-45");
        let evr2 = Evr::parse("1:1.2.3-45");
        assert!(evr1 < evr2);

        let evr1 = Evr::parse("1.23.3-45");
        let evr2 = Evr::parse("1.2.3-45");
        assert!(evr1 > evr2);

        // compare release
        let evr1 = Evr::parse("1.2.3-45.fc39");
        let evr2 = Evr::parse("1.2.3-46.fc38");
        assert!(evr1 < evr2);

        let evr1 = Evr::parse("1.2.3-3.fc40");
        let evr2 = Evr::parse("1.2.3-10.fc39");
        assert!(evr1 < evr2);
    }

    #[test]
    fn test_compare_evr_request() {
        let current = Evr::parse("4.2-10.el6");

        // no release requested: any release of the version will do
        assert_eq!(Ordering::Equal, compare_evr_request(&Evr::parse("4.2"), &current));
        assert_eq!(Ordering::Greater, compare_evr_request(&Evr::parse("4.2-11.el6"), &current));
        assert_eq!(Ordering::Less, compare_evr_request(&Evr::parse("4.1"), &current));

        // epochs are only consulted when asked for
        assert_eq!(Ordering::Greater, compare_evr_request(&Evr::parse("1:4.2"), &current));
        assert_eq!(Ordering::Equal, compare_evr_request(&Evr::parse("0:4.2-10.el6"), &current));
        assert_eq!(
            Ordering::Equal,
            compare_evr_request(&Evr::parse("4.2"), &Evr::parse("3:4.2-1"))
        );

        // an epoch-only request is met by any version carrying that epoch
        let current = Evr::parse("1:4.2-1");
        assert_eq!(Ordering::Equal, compare_evr_request(&Evr::parse("1:"), &current));
        assert_eq!(Ordering::Greater, compare_evr_request(&Evr::parse("2:"), &current));
        assert_eq!(Ordering::Less, compare_evr_request(&Evr::parse("0:"), &current));
        assert_eq!(Ordering::Equal, compare_evr_request(&Evr::default(), &current));
    }

    /// Test many different combinations of version string comparison behavior
    #[test]
    fn test_rpmvercmp() {
        assert_eq!(Ordering::Equal, rpmvercmp("1.0", "1.0"));
        assert_eq!(Ordering::Less, rpmvercmp("1.0", "2.0"));
        assert_eq!(Ordering::Greater, rpmvercmp("2.0", "1.0"));

        assert_eq!(Ordering::Equal, rpmvercmp("2.0.1", "2.0.1"));
        assert_eq!(Ordering::Less, rpmvercmp("2.0", "2.0.1"));
        assert_eq!(Ordering::Greater, rpmvercmp("2.0.1", "2.0"));

        assert_eq!(Ordering::Less, rpmvercmp("5.0.1", "5.0.1a"));
        assert_eq!(Ordering::Greater, rpmvercmp("5.0.1a", "5.0.1"));

        assert_eq!(Ordering::Equal, rpmvercmp("5.0.a1", "5.0.a1"));
        assert_eq!(Ordering::Less, rpmvercmp("5.0.a1", "5.0.a2"));
        assert_eq!(Ordering::Greater, rpmvercmp("5.0.a2", "5.0.a1"));

        assert_eq!(Ordering::Less, rpmvercmp("10abc", "10.1abc"));
        assert_eq!(Ordering::Greater, rpmvercmp("10.1abc", "10abc"));

        assert_eq!(Ordering::Less, rpmvercmp("8.0", "8.0.rc1"));
        assert_eq!(Ordering::Greater, rpmvercmp("8.0.rc1", "8.0"));

        assert_eq!(Ordering::Greater, rpmvercmp("10b2", "10a1"));
        assert_eq!(Ordering::Less, rpmvercmp("10a2", "10b2"));

        assert_eq!(Ordering::Less, rpmvercmp("6.5p1", "6.5p10"));
        assert_eq!(Ordering::Greater, rpmvercmp("6.6p1", "6.5p2"));

        assert_eq!(Ordering::Less, rpmvercmp("abc10", "abc10.1"));

        assert_eq!(Ordering::Less, rpmvercmp("abc.4", "8"));
        assert_eq!(Ordering::Greater, rpmvercmp("8", "abc.4"));

        assert_eq!(Ordering::Less, rpmvercmp("1.0a", "1.0aa"));
        assert_eq!(Ordering::Greater, rpmvercmp("1.0aa", "1.0a"));

        // uppercase letters sort before lowercase ones
        assert_eq!(Ordering::Less, rpmvercmp("1.0Z", "1.0a"));
    }

    /// Numeric segments always beat alphabetic ones, whichever side they are on
    #[test]
    fn test_rpmvercmp_mixed_classes() {
        assert_eq!(Ordering::Greater, rpmvercmp("1.0", "1.a"));
        assert_eq!(Ordering::Less, rpmvercmp("1.a", "1.0"));
        assert_eq!(Ordering::Greater, rpmvercmp("2.0", "2a"));
        assert_eq!(Ordering::Less, rpmvercmp("2a", "2.0"));

        assert_eq!(Ordering::Less, rpmvercmp("1e.fc33", "1.fc33"));
        assert_eq!(Ordering::Greater, rpmvercmp("1g.fc33", "1.fc33"));
    }

    /// test handling of numeric-like values in version strings
    #[test]
    fn test_rpmvercmp_numeric_handling() {
        // sequences of leading zeroes are meant to be ignored
        assert_eq!(Ordering::Equal, rpmvercmp("10.0001", "10.1"));
        assert_eq!(Ordering::Equal, rpmvercmp("10.1", "10.0001"));
        assert_eq!(Ordering::Less, rpmvercmp("10.0001", "10.0039"));
        assert_eq!(Ordering::Equal, rpmvercmp("1.000", "1.0"));
        // but zeroes within a numeric segment are not
        assert_eq!(Ordering::Less, rpmvercmp("10.1", "10.10001"));
        assert_eq!(Ordering::Less, rpmvercmp("10.1111", "10.10001"));
        assert_eq!(Ordering::Greater, rpmvercmp("10.11111", "10.10001"));

        assert_eq!(Ordering::Less, rpmvercmp("20240521", "20240522"));
        assert_eq!(Ordering::Less, rpmvercmp("20240521", "202405210"));

        // longer than any machine integer
        assert_eq!(
            Ordering::Greater,
            rpmvercmp("1.123456789012345678901234567890", "1.123456789012345678901234567889")
        );
    }

    /// Tilde and caret have no special meaning here, they are plain separators
    #[test]
    fn test_rpmvercmp_tilde_and_caret_are_separators() {
        assert_eq!(Ordering::Greater, rpmvercmp("1.0~rc1", "1.0"));
        assert_eq!(Ordering::Greater, rpmvercmp("1.0^git1", "1.0"));
        assert_eq!(Ordering::Equal, rpmvercmp("1.0~1", "1.0.1"));
        assert_eq!(Ordering::Equal, rpmvercmp("1.0~", "1.0"));
    }

    /// Test handling of non-alphanumeric ascii characters
    #[test]
    fn test_rpmvercmp_separator_equivalence() {
        assert_eq!(Ordering::Equal, rpmvercmp("b+", "b_"));
        assert_eq!(Ordering::Equal, rpmvercmp("+b", "_b"));
        assert_eq!(Ordering::Equal, rpmvercmp("+b", "++b"));
        assert_eq!(Ordering::Equal, rpmvercmp("+b", "+b+"));
        assert_eq!(Ordering::Equal, rpmvercmp("+.", "+_"));
        assert_eq!(Ordering::Equal, rpmvercmp("+", "."));
        assert_eq!(Ordering::Equal, rpmvercmp("++", "_"));
        assert_eq!(Ordering::Equal, rpmvercmp("", "."));

        assert_eq!(Ordering::Equal, rpmvercmp("4_0", "4.0"));
        assert_eq!(Ordering::Less, rpmvercmp("4.999.9", "5.0"));
        assert_eq!(Ordering::Greater, rpmvercmp("5.0", "4.999_9"));

        // except when it comes to breaking up sequences that do impact the comparison
        assert_eq!(Ordering::Less, rpmvercmp("4.999", "4.999.9"));
        assert_eq!(Ordering::Greater, rpmvercmp("4.999", "4.99.9"));
    }

    /// Test handling of non-ascii characters
    #[test]
    fn test_rpmvercmp_non_ascii() {
        assert_eq!(Ordering::Equal, rpmvercmp("1.1.Á.1", "1.1.1"));
        assert_eq!(Ordering::Equal, rpmvercmp("1.1.Á", "1.1.Ê"));
        assert_eq!(Ordering::Equal, rpmvercmp("1.1.ÁÁ", "1.1.Á"));
        assert_eq!(Ordering::Less, rpmvercmp("1.1Á1", "1.11"));
    }

    #[test]
    fn test_compare_versions_absent() {
        assert_eq!(Ordering::Equal, compare_versions(None, None));
        assert_eq!(Ordering::Equal, compare_versions(None, Some("")));
        assert_eq!(Ordering::Less, compare_versions(None, Some("1")));
        assert_eq!(Ordering::Greater, compare_versions(Some("a"), None));
    }
}
