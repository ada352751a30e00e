use crate::models::NoteAdded;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, Weak};

type Listener = Arc<dyn Fn(&NoteAdded) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Typed "a note was added" channel between the form and the list.
///
/// Provided through `AppContext`, so components never reach for a global
/// document to talk to each other.
#[derive(Clone, Default)]
pub(crate) struct NoteBus {
    inner: Arc<Mutex<BusInner>>,
}

impl NoteBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&NoteAdded) + Send + Sync + 'static) -> Subscription {
        let id = match self.inner.lock() {
            Ok(mut inner) => {
                let id = inner.next_id;
                inner.next_id = inner.next_id.wrapping_add(1);
                inner.listeners.insert(id, Arc::new(listener));
                id
            }
            Err(_) => {
                log::warn!("note bus lock poisoned; subscription ignored");
                u64::MAX
            }
        };

        Subscription {
            bus: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers `event` to every current listener in subscription order and
    /// returns how many were called.
    pub fn publish(&self, event: &NoteAdded) -> usize {
        // Snapshot first: listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = match self.inner.lock() {
            Ok(inner) => inner.listeners.values().cloned().collect(),
            Err(_) => return 0,
        };

        for l in listeners.iter() {
            l(event);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.lock().map(|i| i.listeners.len()).unwrap_or(0)
    }
}

/// Handle returned by [`NoteBus::subscribe`]; unsubscribes on drop.
pub(crate) struct Subscription {
    bus: Weak<Mutex<BusInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            if let Ok(mut inner) = inner.lock() {
                inner.listeners.remove(&self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn added(title: &str) -> NoteAdded {
        NoteAdded {
            title: title.to_string(),
            body: "body".to_string(),
        }
    }

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let bus = NoteBus::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));

        let s1 = seen.clone();
        let _a = bus.subscribe(move |e| s1.lock().unwrap().push(format!("a:{}", e.title)));
        let s2 = seen.clone();
        let _b = bus.subscribe(move |e| s2.lock().unwrap().push(format!("b:{}", e.title)));

        assert_eq!(bus.publish(&added("x")), 2);
        assert_eq!(*seen.lock().unwrap(), vec!["a:x".to_string(), "b:x".to_string()]);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let bus = NoteBus::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let h = hits.clone();
        let sub = bus.subscribe(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        bus.publish(&added("1"));
        drop(sub);
        bus.publish(&added("2"));

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let bus = NoteBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }

    #[test]
    fn test_listener_may_unsubscribe_itself_while_publishing() {
        let bus = NoteBus::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let slot2 = slot.clone();
        let sub = bus.subscribe(move |_| {
            slot2.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(sub);

        assert_eq!(bus.publish(&added("once")), 1);
        assert_eq!(bus.publish(&added("twice")), 0);
    }
}
