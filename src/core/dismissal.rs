//! Outside-click dismissal.
//!
//! The page owns a [`Document`] that broadcasts pointer-down events. A mounted
//! [`OutsideClickDismissal`] holds one subscription for its lifetime; dropping it
//! removes the listener.

use tokio::sync::broadcast;

const POINTER_EVENT_CAPACITY: usize = 64;

/// Element ids from the document root down to the element that received the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerTarget {
    path: Vec<String>,
}

impl PointerTarget {
    pub fn new<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_within(&self, element_id: &str) -> bool {
        self.path.iter().any(|id| id == element_id)
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerDown {
    pub target: PointerTarget,
}

#[derive(Debug, Clone)]
pub struct Document {
    pointer_events: broadcast::Sender<PointerDown>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let (pointer_events, _) = broadcast::channel(POINTER_EVENT_CAPACITY);
        Self { pointer_events }
    }

    pub fn add_pointer_listener(&self) -> broadcast::Receiver<PointerDown> {
        self.pointer_events.subscribe()
    }

    /// Dispatches a pointer-down event; returns how many listeners received it.
    pub fn pointer_down(&self, target: PointerTarget) -> usize {
        self.pointer_events
            .send(PointerDown { target })
            .unwrap_or(0)
    }

    pub fn listener_count(&self) -> usize {
        self.pointer_events.receiver_count()
    }
}

#[derive(Debug)]
pub struct OutsideClickDismissal {
    container_id: String,
    events: broadcast::Receiver<PointerDown>,
}

impl OutsideClickDismissal {
    pub fn mount(document: &Document, container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            events: document.add_pointer_listener(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn is_outside(&self, target: &PointerTarget) -> bool {
        !target.is_within(&self.container_id)
    }

    /// Drains queued events without waiting. True if any landed outside the container.
    pub fn poll_outside(&mut self) -> bool {
        let mut outside = false;
        loop {
            match self.events.try_recv() {
                Ok(event) => outside |= self.is_outside(&event.target),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    // 略過的事件一律視為外部點擊
                    tracing::warn!("Pointer listener lagged, skipped {} events", skipped);
                    outside = true;
                }
                Err(broadcast::error::TryRecvError::Empty)
                | Err(broadcast::error::TryRecvError::Closed) => break,
            }
        }
        outside
    }

    /// Waits for the next event outside the container. `None` once the document is gone.
    /// After a lag the skipped events are reported as one event with an empty path.
    pub async fn next_outside(&mut self) -> Option<PointerDown> {
        loop {
            match self.events.recv().await {
                Ok(event) if self.is_outside(&event.target) => return Some(event),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("Pointer listener lagged, skipped {} events", skipped);
                    return Some(PointerDown {
                        target: PointerTarget::new(Vec::<String>::new()),
                    });
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
