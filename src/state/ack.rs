use crate::models::Note;
use crate::util::set_timeout;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum AckMode {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AckBody {
    Empty,
    Text(String),
    Detail(Note),
}

/// A transient success/error/info dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Ack {
    pub mode: AckMode,
    pub title: String,
    pub body: AckBody,
    /// Auto-dismiss after this many milliseconds. Timed acks have no close button.
    pub timer_ms: Option<u32>,
}

impl Ack {
    pub fn success(title: &str, text: &str) -> Self {
        Self {
            mode: AckMode::Success,
            title: title.to_string(),
            body: AckBody::Text(text.to_string()),
            timer_ms: None,
        }
    }

    pub fn failure(text: &str) -> Self {
        Self {
            mode: AckMode::Error,
            title: "Error".to_string(),
            body: AckBody::Text(text.to_string()),
            timer_ms: None,
        }
    }

    pub fn info(title: &str, text: &str) -> Self {
        Self {
            mode: AckMode::Info,
            title: title.to_string(),
            body: AckBody::Text(text.to_string()),
            timer_ms: None,
        }
    }

    pub fn note_detail(note: Note) -> Self {
        Self {
            mode: AckMode::Info,
            title: note.title.clone(),
            body: AckBody::Detail(note),
            timer_ms: None,
        }
    }

    pub fn toast(title: &str, timer_ms: u32) -> Self {
        Self {
            mode: AckMode::Success,
            title: title.to_string(),
            body: AckBody::Empty,
            timer_ms: Some(timer_ms),
        }
    }

    pub fn dismissable(&self) -> bool {
        self.timer_ms.is_none()
    }
}

/// Holds the acknowledgment currently on screen. A newer ack replaces the
/// older one, and a stale timer never closes a newer ack.
#[derive(Clone, Copy)]
pub(crate) struct AckCenter {
    current: RwSignal<Option<Ack>>,
    serial: RwSignal<u64>,
}

impl AckCenter {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            serial: RwSignal::new(0),
        }
    }

    pub fn current(&self) -> Option<Ack> {
        self.current.get()
    }

    pub fn is_open(&self) -> bool {
        self.current.with_untracked(|c| c.is_some())
    }

    pub fn show(&self, ack: Ack) {
        let serial = self.serial.get_untracked().wrapping_add(1);
        self.serial.set(serial);

        let timer = ack.timer_ms;
        self.current.set(Some(ack));

        if let Some(ms) = timer {
            let center = *self;
            set_timeout(ms as i32, move || {
                if center.serial.get_untracked() == serial {
                    center.current.set(None);
                }
            });
        }
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Closes the current ack on a user gesture (Escape, backdrop click).
    /// Timed acks only close on their own timer.
    pub fn dismiss_by_user(&self) -> bool {
        let dismissable = self
            .current
            .with_untracked(|c| c.as_ref().is_some_and(Ack::dismissable));
        if dismissable {
            self.dismiss();
        }
        dismissable
    }
}

impl Default for AckCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_are_lowercase() {
        assert_eq!(AckMode::Success.to_string(), "success");
        assert_eq!(AckMode::Error.as_ref(), "error");
        assert_eq!(AckMode::Info.to_string(), "info");
    }

    #[test]
    fn test_failure_ack_is_generic_error() {
        let ack = Ack::failure("Failed to delete note");
        assert_eq!(ack.mode, AckMode::Error);
        assert_eq!(ack.title, "Error");
        assert_eq!(ack.body, AckBody::Text("Failed to delete note".to_string()));
        assert!(ack.dismissable());
    }

    #[test]
    fn test_toast_is_timed_and_bodyless() {
        let ack = Ack::toast("Note added successfully!", 1500);
        assert_eq!(ack.timer_ms, Some(1500));
        assert_eq!(ack.body, AckBody::Empty);
        assert!(!ack.dismissable());
    }

    #[test]
    fn test_user_dismiss_skips_timed_acks() {
        let center = AckCenter::new();
        assert!(!center.dismiss_by_user());

        center.current.set(Some(Ack::toast("Note added successfully!", 1500)));
        assert!(!center.dismiss_by_user());
        assert!(center.is_open());

        center.show(Ack::failure("Failed to delete note"));
        assert!(center.dismiss_by_user());
        assert!(!center.is_open());
    }

    #[test]
    fn test_note_detail_uses_note_title() {
        let note = Note {
            id: "1".to_string(),
            title: "A".to_string(),
            body: "b".to_string(),
            created_at: "t".to_string(),
            archived: false,
        };
        let ack = Ack::note_detail(note.clone());
        assert_eq!(ack.title, "A");
        assert_eq!(ack.body, AckBody::Detail(note));
    }
}
