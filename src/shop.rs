use std::sync::Mutex;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::broadcast::{ChangeBroadcaster, SubscriptionId};
use crate::error::StoreError;
use crate::history::{HistoryEntry, HistoryLog, HistorySummary, KeyChange};
use crate::store::{MemoryBackend, StorageBackend};
use crate::toast::{Toast, ToastAction, ToastKind, ToastPresenter, ToastView};

/// Tunables for the undo log and toast countdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub history_depth: usize,
    pub success_toast: Duration,
    pub undo_toast: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            history_depth: 8,
            success_toast: Duration::from_millis(5000),
            undo_toast: Duration::from_millis(3000),
        }
    }
}

impl StoreConfig {
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }

    pub fn with_success_toast(mut self, duration: Duration) -> Self {
        self.success_toast = duration;
        self
    }

    pub fn with_undo_toast(mut self, duration: Duration) -> Self {
        self.undo_toast = duration;
        self
    }
}

/// The injectable core: a storage backend plus the undo log, change
/// broadcast, and toast state that every mutation flows through.
///
/// Reads fail open — an absent or unreadable value becomes the caller's
/// default, never an error. Writes go through [`mutate`]/[`transaction`] so
/// they are snapshot-logged, broadcast, and surfaced as an undoable toast;
/// [`write`] is the raw escape hatch for paths that bypass history (backup
/// import, shop profile).
///
/// [`mutate`]: ShopStore::mutate
/// [`transaction`]: ShopStore::transaction
/// [`write`]: ShopStore::write
pub struct ShopStore {
    backend: Mutex<Box<dyn StorageBackend>>,
    broadcaster: ChangeBroadcaster,
    log: Mutex<HistoryLog>,
    toasts: Mutex<ToastPresenter>,
    config: StoreConfig,
}

impl ShopStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    pub fn with_config(backend: impl StorageBackend + 'static, config: StoreConfig) -> Self {
        ShopStore {
            backend: Mutex::new(Box::new(backend)),
            broadcaster: ChangeBroadcaster::new(),
            log: Mutex::new(HistoryLog::new(config.history_depth)),
            toasts: Mutex::new(ToastPresenter::new()),
            config,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // --- key-value access ---

    /// Read and deserialize the value at `key`, or fall back to `default`
    /// when the key is absent or its value does not parse.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.lock() {
            Ok(backend) => backend.get(key),
            Err(_) => {
                warn!(key, "backend lock poisoned, returning default");
                return default;
            }
        };

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key, %err, "stored value unreadable, using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Serialize and persist `value` at `key`, overwriting unconditionally.
    /// Does not touch the history log and does not broadcast.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.backend
            .lock()
            .map_err(|_| StoreError::LockPoisoned("write"))?
            .set(key, &raw)
    }

    // --- change broadcast ---

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.broadcaster.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.broadcaster.unsubscribe(id);
    }

    /// Tell every subscriber to re-read. Fired automatically by history
    /// commits, undo and redo; callers that bypass history (import, profile
    /// updates) fire it themselves.
    pub fn notify_change(&self) {
        self.broadcaster.notify();
    }

    // --- history-wrapped mutation ---

    /// Run `mutator` against the collection at `key` and commit the result
    /// as one undoable history entry: snapshot, write, record, broadcast,
    /// success toast. Returns the new value.
    pub fn mutate<T, F>(&self, description: &str, key: &str, mutator: F) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(T) -> T,
    {
        self.transaction(description, |txn| txn.mutate(key, mutator))
    }

    /// Multi-key variant of [`mutate`]: every `txn.mutate` call inside the
    /// closure lands in the same history entry, so the whole group undoes
    /// and redoes together. Nothing is persisted unless the closure returns
    /// `Ok`; a closure that mutates nothing commits nothing.
    ///
    /// [`mutate`]: ShopStore::mutate
    pub fn transaction<R, F>(&self, description: &str, f: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<R, StoreError>,
    {
        let mut txn = Transaction {
            store: self,
            changes: Vec::new(),
        };
        let result = f(&mut txn)?;
        let changes = txn.changes;

        if !changes.is_empty() {
            self.commit(description, changes)?;
        }

        Ok(result)
    }

    fn commit(&self, description: &str, changes: Vec<KeyChange>) -> Result<(), StoreError> {
        {
            let mut backend = self
                .backend
                .lock()
                .map_err(|_| StoreError::LockPoisoned("commit"))?;
            for change in &changes {
                backend.set(&change.key, &change.after.to_string())?;
            }
        }

        let entry_id = self
            .log
            .lock()
            .map_err(|_| StoreError::LockPoisoned("commit"))?
            .record(description.to_string(), changes);
        debug!(description, entry_id, "recorded mutation");

        self.broadcaster.notify();
        self.show(Toast::success(description, entry_id, self.config.success_toast));
        Ok(())
    }

    /// Reverse the mutation with the given history id. The entry is
    /// consumed: it leaves the log and cannot be undone twice. An unknown or
    /// already-evicted id is a silent no-op.
    pub fn undo(&self, id: u64) -> Result<(), StoreError> {
        let entry = self
            .log
            .lock()
            .map_err(|_| StoreError::LockPoisoned("undo"))?
            .take(id);

        let Some(entry) = entry else {
            warn!(id, "undo target not in history, ignoring");
            return Ok(());
        };

        {
            let mut backend = self
                .backend
                .lock()
                .map_err(|_| StoreError::LockPoisoned("undo"))?;
            for change in entry.changes.iter().rev() {
                backend.set(&change.key, &change.before.to_string())?;
            }
        }
        debug!(id, description = %entry.description, "undid mutation");

        self.broadcaster.notify();
        let message = format!("Undid: {}", entry.description);
        self.show(Toast::undone(message, entry, self.config.undo_toast));
        Ok(())
    }

    fn redo(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        {
            let mut backend = self
                .backend
                .lock()
                .map_err(|_| StoreError::LockPoisoned("redo"))?;
            for change in &entry.changes {
                backend.set(&change.key, &change.after.to_string())?;
            }
        }
        debug!(id = entry.id, description = %entry.description, "redid mutation");

        self.broadcaster.notify();
        Ok(())
    }

    /// Recent mutations, most recent first, for a history panel.
    pub fn history(&self) -> Vec<HistorySummary> {
        match self.log.lock() {
            Ok(log) => log.summaries(),
            Err(_) => Vec::new(),
        }
    }

    // --- toast surface ---

    /// Show a plain toast with no action, replacing whatever is visible.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let duration = match kind {
            ToastKind::Success => self.config.success_toast,
            ToastKind::Undo | ToastKind::Redo => self.config.undo_toast,
        };
        self.show(Toast::new(message, kind, duration));
    }

    fn show(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.show(toast);
        }
    }

    pub fn toast(&self) -> Option<ToastView> {
        self.toasts.lock().ok().and_then(|toasts| toasts.view())
    }

    /// Advance the toast countdown by `dt` of unpaused time.
    pub fn tick(&self, dt: Duration) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.tick(dt);
        }
    }

    /// Freeze the countdown while the pointer hovers the toast.
    pub fn pause_toast(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.pause();
        }
    }

    /// Continue the countdown with the remaining time preserved.
    pub fn resume_toast(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.resume();
        }
    }

    pub fn dismiss_toast(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.hide();
        }
    }

    /// Press the visible toast's action button: Undo on a success toast
    /// (which swaps in the undo toast), Redo on an undo toast (which
    /// reapplies the mutation and hides the toast). No visible toast or no
    /// action is a no-op.
    pub fn invoke_toast_action(&self) -> Result<(), StoreError> {
        let action = self
            .toasts
            .lock()
            .map_err(|_| StoreError::LockPoisoned("toast"))?
            .take_action();

        match action {
            Some(ToastAction::Undo { entry_id }) => self.undo(entry_id),
            Some(ToastAction::Redo { entry }) => {
                self.redo(entry)?;
                self.dismiss_toast();
                Ok(())
            }
            None => Ok(()),
        }
    }
}

/// Collects the before/after snapshots of one history entry while the
/// transaction closure runs. Nothing is written until the closure succeeds.
pub struct Transaction<'a> {
    store: &'a ShopStore,
    changes: Vec<KeyChange>,
}

impl Transaction<'_> {
    /// Transform the collection at `key`, recording a snapshot pair for the
    /// entry. A later `mutate` of the same key inside this transaction sees
    /// the pending value.
    pub fn mutate<T, F>(&mut self, key: &str, mutator: F) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned + Default,
        F: FnOnce(T) -> T,
    {
        let current: T = match self.changes.iter().rev().find(|c| c.key == key) {
            Some(pending) => serde_json::from_value(pending.after.clone())?,
            None => self.store.read(key, T::default()),
        };

        let before = serde_json::to_value(&current)?;
        let next = mutator(current);
        let after = serde_json::to_value(&next)?;

        self.changes.push(KeyChange {
            key: key.to_string(),
            before,
            after,
        });
        Ok(next)
    }
}
