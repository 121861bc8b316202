use std::ffi::{OsStr, OsString};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;

use super::{FetchMode, FetchOutput, PackageSource, parse_output};
use crate::constants::DEFAULT_INSTALLED_ONLY_ARG;
use crate::errors::*;

/// Runs an external helper program that dumps package data, one line per package.
///
/// The helper is run with the configured arguments; in [`FetchMode::InstalledOnly`] one more
/// argument is appended (`--installed-only` unless configured otherwise). Its standard output
/// is parsed line by line as it arrives, see [`HelperLine`](super::HelperLine) for the format.
///
/// There is no timeout: a helper that never exits blocks the caller.
///
/// ```no_run
/// use rpm_catalog::{FetchMode, HelperSource, PackageSource};
///
/// # fn main() -> Result<(), rpm_catalog::CatalogError> {
/// let mut source = HelperSource::new("/usr/libexec/pkgdump")
///     .arg("--format=fields")
///     .env("LC_ALL", "C");
/// let output = source.fetch(FetchMode::Full)?;
/// println!("{} packages", output.records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HelperSource {
    program: PathBuf,
    args: Vec<OsString>,
    installed_only_arg: OsString,
    env: Vec<(OsString, OsString)>,
}

impl HelperSource {
    pub fn new<P: AsRef<Path>>(program: P) -> Self {
        HelperSource {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            installed_only_arg: DEFAULT_INSTALLED_ONLY_ARG.into(),
            env: Vec::new(),
        }
    }

    /// Add an argument passed on every run
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add several arguments passed on every run
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// The argument appended when only installed packages are requested
    pub fn installed_only_arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.installed_only_arg = arg.as_ref().to_os_string();
        self
    }

    /// Set an environment variable for the helper
    pub fn env<K: AsRef<OsStr>, V: AsRef<OsStr>>(mut self, key: K, val: V) -> Self {
        self.env
            .push((key.as_ref().to_os_string(), val.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, mode: FetchMode) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .envs(self.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if mode == FetchMode::InstalledOnly {
            command.arg(&self.installed_only_arg);
        }
        command
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn read_stdout(child: &mut Child) -> Result<FetchOutput, CatalogError> {
        match child.stdout.take() {
            Some(stdout) => parse_output(BufReader::new(stdout)),
            None => Ok(FetchOutput::default()),
        }
    }
}

impl PackageSource for HelperSource {
    fn fetch(&mut self, mode: FetchMode) -> Result<FetchOutput, CatalogError> {
        let program = self.program_name();
        log::debug!("running package data helper {} ({:?})", program, mode);

        let mut child = self
            .command(mode)
            .spawn()
            .map_err(|source| CatalogError::ToolSpawn {
                program: program.clone(),
                source,
            })?;

        // stderr is drained concurrently so a chatty helper can't block on a full pipe
        let stderr = child.stderr.take().map(|mut stderr| {
            thread::spawn(move || {
                let mut text = String::new();
                stderr.read_to_string(&mut text).map(|_| text)
            })
        });

        let output = match Self::read_stdout(&mut child) {
            Ok(output) => output,
            Err(e) => {
                // the helper may still be writing; don't leave it behind
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };

        let status = child.wait()?;
        let stderr = match stderr {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Ok(String::new()))?,
            None => String::new(),
        };

        if !status.success() {
            return Err(CatalogError::ToolExitStatus {
                program,
                status,
                stderr: stderr.trim().to_string(),
            });
        }

        log::debug!(
            "package data helper {} reported {} packages and {} options",
            program,
            output.records.len(),
            output.options.len()
        );
        Ok(output)
    }
}
