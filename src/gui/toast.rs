use super::constants::TOAST_LIFETIME;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub text: String,
    pub created: Instant,
}

/// Transient notifications shown in the corner of every screen.
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text.into());
    }

    fn push(&mut self, level: ToastLevel, text: String) {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            level,
            text,
            created: Instant::now(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Drops toasts older than the display lifetime.
    pub fn expire(&mut self, now: Instant) {
        self.items
            .retain(|toast| now.saturating_duration_since(toast.created) < TOAST_LIFETIME);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_and_dismiss() {
        let mut toasts = Toasts::default();
        toasts.success("ok");
        toasts.error("fail");
        assert_eq!(toasts.last().unwrap().level, ToastLevel::Error);

        let first = toasts.iter().next().unwrap().id;
        toasts.dismiss(first);
        assert_eq!(toasts.iter().count(), 1);

        toasts.expire(Instant::now() + TOAST_LIFETIME);
        assert!(toasts.is_empty());
    }
}
