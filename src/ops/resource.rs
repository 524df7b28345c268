//! Resource acquisition with scoped release

use crate::diagnostics::errno;
use crate::exceptions::Failure;
use crate::outcome::{Outcome, Phase};
use log::{debug, trace};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// An open, readable resource.
///
/// The handle is released when the value is dropped, so every exit path
/// of the owner closes it.
#[derive(Debug)]
pub struct Resource {
    path: PathBuf,
    file: File,
}

impl Resource {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    /// Release the handle now instead of at end of scope
    pub fn release(self) {
        drop(self);
    }
}

impl Read for Resource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        debug!("🔓 Released {:?}", self.path);
    }
}

/// Open `path` for reading.
///
/// The path is passed to the OS untouched. Each call overwrites the
/// thread-local last-error slot: 0 on success, the failure's code otherwise.
pub fn open_resource<P: AsRef<Path>>(path: P) -> Outcome<Resource> {
    let path = path.as_ref();
    trace!("open({:?}): {} -> {}", path, Phase::Init, Phase::Validating);

    let outcome = acquire(path)
        .map(|file| Resource {
            path: path.to_path_buf(),
            file,
        })
        .map_err(|e| Failure::unavailable(path.display().to_string(), e));

    match &outcome {
        Ok(_) => {
            errno::clear_last_error();
            debug!("🔒 Acquired {:?}", path);
        }
        Err(failure) => {
            record(failure);
            debug!("❌ {}", failure);
        }
    }

    trace!(
        "open({:?}): {} -> {}",
        path,
        Phase::Validating,
        Phase::of(&outcome)
    );
    outcome
}

/// Open `path`, hand it to `f`, and release it on every exit path.
///
/// I/O errors from `f` are reported as `ResourceUnavailable` for `path`
/// and recorded in the last-error slot.
pub fn with_resource<P, F, T>(path: P, f: F) -> Outcome<T>
where
    P: AsRef<Path>,
    F: FnOnce(&mut Resource) -> io::Result<T>,
{
    let mut resource = open_resource(path)?;
    let result = f(&mut resource)
        .map_err(|e| Failure::unavailable(resource.path().display().to_string(), e));
    if let Err(failure) = &result {
        record(failure);
    }
    resource.release();
    result
}

fn record(failure: &Failure) {
    if let Some(code) = failure.os_code() {
        errno::set_last_error(code);
    }
}

fn acquire(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;

    // A directory opens fine on Unix but cannot be read as a file.
    if file.metadata()?.is_dir() {
        drop(file);
        debug!("🔓 Released {:?} after rejecting directory", path);
        return Err(is_a_directory());
    }

    Ok(file)
}

#[cfg(unix)]
fn is_a_directory() -> io::Error {
    io::Error::from_raw_os_error(libc::EISDIR)
}

#[cfg(not(unix))]
fn is_a_directory() -> io::Error {
    io::Error::from(io::ErrorKind::IsADirectory)
}
