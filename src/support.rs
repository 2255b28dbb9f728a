//! Helpers for tests that write and run shell scripts.

use std::fs::{self, File};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

static LOCK: Mutex<()> = Mutex::new(());

/// Held while writing or running scripts; a script that's open for
/// writing in a forked child can't be executed (ETXTBSY).
pub fn lock() -> MutexGuard<'static, ()> {
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);

    {
        let mut file = File::create(&path).unwrap();
        write!(file, "#!/bin/sh\n{}\n", body).unwrap();
    }

    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
