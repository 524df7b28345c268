//! Thread-local "last error" slot for interop with errno-style callers
//!
//! Each recording call overwrites the previous value. Read it immediately
//! after the call that set it; `Outcome` is the primary carrier.

use std::cell::Cell;
use std::io;

thread_local! {
    static LAST_ERROR: Cell<i32> = const { Cell::new(0) };
}

/// Most recent code recorded on this thread (0 when none)
pub fn last_error() -> i32 {
    LAST_ERROR.with(Cell::get)
}

pub fn set_last_error(code: i32) {
    LAST_ERROR.with(|slot| slot.set(code));
}

pub fn clear_last_error() {
    set_last_error(0);
}

/// Code to record for an I/O error: the raw OS code when the OS produced
/// one, otherwise the errno closest to its kind. Never 0.
pub fn code_for(error: &io::Error) -> i32 {
    if let Some(code) = error.raw_os_error() {
        return code;
    }

    match error.kind() {
        io::ErrorKind::NotFound => libc::ENOENT,
        io::ErrorKind::PermissionDenied => libc::EACCES,
        io::ErrorKind::AlreadyExists => libc::EEXIST,
        io::ErrorKind::IsADirectory => libc::EISDIR,
        io::ErrorKind::InvalidInput => libc::EINVAL,
        _ => libc::EIO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_semantics() {
        clear_last_error();
        assert_eq!(last_error(), 0);

        set_last_error(2);
        set_last_error(13);
        assert_eq!(last_error(), 13);

        clear_last_error();
        assert_eq!(last_error(), 0);
    }

    #[test]
    fn test_code_for_prefers_raw_code() {
        let error = io::Error::from_raw_os_error(libc::EACCES);
        assert_eq!(code_for(&error), libc::EACCES);
    }

    #[test]
    fn test_code_for_maps_kinds() {
        assert_eq!(code_for(&io::Error::from(io::ErrorKind::NotFound)), libc::ENOENT);
        assert_eq!(code_for(&io::Error::from(io::ErrorKind::InvalidInput)), libc::EINVAL);
        assert_eq!(code_for(&io::Error::other("boom")), libc::EIO);
    }

    #[test]
    fn test_slot_is_per_thread() {
        set_last_error(5);
        let other = std::thread::spawn(|| {
            let seen = last_error();
            set_last_error(99);
            seen
        })
        .join()
        .unwrap();

        assert_eq!(other, 0);
        assert_eq!(last_error(), 5);
    }
}
