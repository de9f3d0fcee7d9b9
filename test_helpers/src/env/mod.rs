//! Serialised environment variable mutation for tests.
//!
//! Every mutation takes a process-wide re-entrant mutex and returns an
//! [`EnvVarGuard`] that restores the previous state on drop. Guards for the
//! same key stack and restore in LIFO order.
//!
//! Tests that set several variables and then parse should hold an
//! [`EnvLock`] for the whole test so no other test mutates the environment
//! between the set and the parse.
//!
//! # Examples
//!
//! ```
//! use fieldflags_test_helpers::env;
//!
//! let lock = env::lock();
//! let _port = lock.set_var("GISTCLI_SERVER_PORT", "9000");
//! assert_eq!(
//!     std::env::var("GISTCLI_SERVER_PORT").as_deref(),
//!     Ok("9000")
//! );
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Restores one environment variable when dropped.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` serialises every mutation made through
            // this module.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: as above.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Holds the environment lock until dropped.
#[must_use = "dropping releases the environment lock"]
pub struct EnvLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl fmt::Debug for EnvLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvLock").finish_non_exhaustive()
    }
}

impl EnvLock {
    /// Sets `key` to `value` while the lock is held.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        set_var(key, value)
    }

    /// Removes `key` while the lock is held.
    pub fn remove_var<K>(&self, key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        remove_var(key)
    }
}

/// Acquires the environment lock.
///
/// The lock is re-entrant, so the module's own helpers still work on the
/// thread that holds it.
pub fn lock() -> EnvLock {
    EnvLock {
        _guard: ENV_MUTEX.lock(),
    }
}

/// Sets `key` to `value`, returning a guard that restores the prior state.
///
/// # Examples
///
/// ```
/// use fieldflags_test_helpers::env;
///
/// let guard = env::set_var("FIELDFLAGS_DOC_SET", "1");
/// assert_eq!(std::env::var("FIELDFLAGS_DOC_SET").as_deref(), Ok("1"));
/// drop(guard);
/// assert!(std::env::var("FIELDFLAGS_DOC_SET").is_err());
/// ```
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    let key = key.into();
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    // SAFETY: `ENV_MUTEX` serialises every mutation made through this module.
    unsafe { env::set_var(&key, value) };
    EnvVarGuard { key, original }
}

/// Removes `key`, returning a guard that restores the prior state.
pub fn remove_var<K>(key: K) -> EnvVarGuard
where
    K: Into<String>,
{
    let key = key.into();
    let _lock = ENV_MUTEX.lock();
    let original = env::var_os(&key);
    // SAFETY: `ENV_MUTEX` serialises every mutation made through this module.
    unsafe { env::remove_var(&key) };
    EnvVarGuard { key, original }
}
