//! Active-path state cell.
//!
//! A single shared string drives the whole component. Writes go through
//! [`NavCell::set`], which bumps a generation counter and notifies every
//! subscriber synchronously before returning. The generation counter lets
//! in-flight click actions detect that the path moved underneath them and
//! discard their stale follow-up navigation.

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};

pub type PathObserver = Box<dyn Fn(&str) + Send + Sync>;

struct NavShared {
    active: String,
    generation: u64,
}

/// Shared, clonable handle to the navigation state.
#[derive(Clone)]
pub struct NavCell {
    shared: Arc<RwLock<NavShared>>,
    observers: Arc<RwLock<Vec<PathObserver>>>,
}

impl NavCell {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            shared: Arc::new(RwLock::new(NavShared {
                active: initial.into(),
                generation: 0,
            })),
            observers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Run a closure against the current path. The closure may borrow; the
    /// result is returned by value.
    pub fn read<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&str) -> R,
    {
        let guard = self
            .shared
            .read()
            .map_err(|err| anyhow!("navigation state lock poisoned: {err}"))?;
        Ok(f(&guard.active))
    }

    pub fn get(&self) -> Result<String> {
        self.read(str::to_string)
    }

    pub fn generation(&self) -> Result<u64> {
        let guard = self
            .shared
            .read()
            .map_err(|err| anyhow!("navigation state lock poisoned: {err}"))?;
        Ok(guard.generation)
    }

    /// Path and generation from the same guard, for callers that must not
    /// see the two desynchronized by a concurrent write.
    pub fn snapshot(&self) -> Result<(String, u64)> {
        let guard = self
            .shared
            .read()
            .map_err(|err| anyhow!("navigation state lock poisoned: {err}"))?;
        Ok((guard.active.clone(), guard.generation))
    }

    /// Assign a new active path and notify subscribers synchronously.
    /// Observers run after the lock is released so they may read the cell.
    pub fn set(&self, path: &str) -> Result<()> {
        {
            let mut guard = self
                .shared
                .write()
                .map_err(|err| anyhow!("navigation state lock poisoned: {err}"))?;
            guard.active = path.to_string();
            guard.generation += 1;
        }
        let observers = self
            .observers
            .read()
            .map_err(|err| anyhow!("observer list lock poisoned: {err}"))?;
        for observer in observers.iter() {
            observer(path);
        }
        Ok(())
    }

    pub fn subscribe<F>(&self, observer: F) -> Result<()>
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.observers
            .write()
            .map_err(|err| anyhow!("observer list lock poisoned: {err}"))?
            .push(Box::new(observer));
        Ok(())
    }
}
