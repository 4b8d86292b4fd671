use std::time::Duration;

use crate::history::HistoryEntry;

/// Flavor of the active toast. Success offers Undo; Undo offers Redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Undo,
    Redo,
}

/// What the action button does. Data, not a closure: the store interprets it
/// when the host calls `invoke_toast_action`. A consumed history entry rides
/// along inside `Redo` — once this toast is replaced or expires, the redo
/// opportunity is gone with it.
#[derive(Debug)]
pub(crate) enum ToastAction {
    Undo { entry_id: u64 },
    Redo { entry: HistoryEntry },
}

#[derive(Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub action_label: Option<&'static str>,
    pub(crate) action: Option<ToastAction>,
}

impl Toast {
    /// Plain informational toast with no action button.
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration) -> Self {
        Toast {
            message: message.into(),
            kind,
            duration,
            action_label: None,
            action: None,
        }
    }

    pub(crate) fn success(message: impl Into<String>, entry_id: u64, duration: Duration) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Success,
            duration,
            action_label: Some("Undo"),
            action: Some(ToastAction::Undo { entry_id }),
        }
    }

    pub(crate) fn undone(message: impl Into<String>, entry: HistoryEntry, duration: Duration) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Undo,
            duration,
            action_label: Some("Redo"),
            action: Some(ToastAction::Redo { entry }),
        }
    }
}

/// Read-only snapshot of the visible toast, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
    pub remaining: Duration,
    pub paused: bool,
    pub action_label: Option<&'static str>,
}

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    elapsed: Duration,
    paused: bool,
}

/// Single-slot toast state machine.
///
/// Exactly one toast is active at a time; showing another replaces it and
/// restarts the countdown from zero. The countdown advances only through
/// [`tick`] while unpaused, so expiry is deterministic: the toast hides when
/// accumulated unpaused time reaches its duration. Pausing preserves the
/// remaining time; resuming continues from it.
///
/// [`tick`]: ToastPresenter::tick
#[derive(Debug, Default)]
pub struct ToastPresenter {
    active: Option<ActiveToast>,
}

impl ToastPresenter {
    pub fn new() -> Self {
        ToastPresenter::default()
    }

    /// Replace whatever is visible. The previous toast's countdown and
    /// pending action are discarded.
    pub fn show(&mut self, toast: Toast) {
        self.active = Some(ActiveToast {
            toast,
            elapsed: Duration::ZERO,
            paused: false,
        });
    }

    pub fn hide(&mut self) {
        self.active = None;
    }

    /// Advance the countdown. Hides the toast once unpaused elapsed time
    /// reaches its duration.
    pub fn tick(&mut self, dt: Duration) {
        let expired = match self.active.as_mut() {
            Some(active) if !active.paused => {
                active.elapsed += dt;
                active.elapsed >= active.toast.duration
            }
            _ => false,
        };
        if expired {
            self.active = None;
        }
    }

    pub fn pause(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.paused = true;
        }
    }

    pub fn resume(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.paused = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.active.is_some()
    }

    pub fn view(&self) -> Option<ToastView> {
        self.active.as_ref().map(|active| ToastView {
            message: active.toast.message.clone(),
            kind: active.toast.kind,
            duration: active.toast.duration,
            remaining: active.toast.duration.saturating_sub(active.elapsed),
            paused: active.paused,
            action_label: active.toast.action_label,
        })
    }

    /// Detach the action from the visible toast. The toast itself stays up;
    /// whatever the action triggers decides what replaces or hides it.
    pub(crate) fn take_action(&mut self) -> Option<ToastAction> {
        self.active.as_mut().and_then(|active| active.toast.action.take())
    }
}
