//! Marshals work from runtime and platform callbacks onto the UI loop.

use tokio::{
    runtime::Handle,
    sync::mpsc::{self, error::TrySendError},
};

use crate::{error::DispatchError, manifest::Component, menu_actions::MenuAction};

#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    NavigatedTo,
    /// The page finished its initial layout.
    Loaded,
    MenuAction(MenuAction),
    ComponentsRegistered(Vec<Component>),
    PresentReactMenu,
    TitleBarMetricsChanged { height: f64 },
}

#[derive(Debug, Clone)]
pub struct UiDispatcher {
    sender: mpsc::Sender<UiMessage>,
}

/// Dispatcher handle that does not keep the ui loop alive.
#[derive(Debug, Clone)]
pub struct WeakUiDispatcher {
    sender: mpsc::WeakSender<UiMessage>,
}

#[derive(Debug)]
pub struct UiInbox {
    receiver: mpsc::Receiver<UiMessage>,
}

pub fn ui_channel(capacity: usize) -> (UiDispatcher, UiInbox) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (UiDispatcher { sender }, UiInbox { receiver })
}

impl UiDispatcher {
    /// Queues `message` without blocking the caller.
    pub fn dispatch(&self, message: UiMessage) -> Result<(), DispatchError> {
        self.sender.try_send(message).map_err(|error| match error {
            TrySendError::Full(_) => DispatchError::Full,
            TrySendError::Closed(_) => DispatchError::Closed,
        })
    }

    /// Like [`UiDispatcher::dispatch`], logging instead of returning failures.
    pub fn dispatch_logged(&self, task_name: &str, message: UiMessage) {
        if let Err(error) = self.dispatch(message) {
            tracing::warn!("failed to schedule {task_name} on ui loop: {error}");
        }
    }

    /// Queues `messages` in order. On a full queue the remainder waits for
    /// room: on a spawned task inside a tokio runtime, blocking otherwise.
    /// Must not be called from the ui loop itself.
    pub fn deliver(&self, task_name: &str, messages: Vec<UiMessage>) {
        let mut messages = messages.into_iter();
        while let Some(message) = messages.next() {
            match self.sender.try_send(message) {
                Ok(()) => {}
                Err(TrySendError::Closed(_)) => {
                    tracing::warn!(
                        "failed to schedule {task_name} on ui loop: {}",
                        DispatchError::Closed
                    );
                    return;
                }
                Err(TrySendError::Full(message)) => {
                    let remaining = std::iter::once(message).chain(messages).collect();
                    self.deliver_when_ready(task_name, remaining);
                    return;
                }
            }
        }
    }

    fn deliver_when_ready(&self, task_name: &str, messages: Vec<UiMessage>) {
        tracing::debug!("ui queue full; {task_name} waits for room");
        let sender = self.sender.clone();
        match Handle::try_current() {
            Ok(handle) => {
                let task_name = task_name.to_string();
                handle.spawn(async move {
                    for message in messages {
                        if sender.send(message).await.is_err() {
                            tracing::warn!("ui loop stopped before {task_name} was delivered");
                            return;
                        }
                    }
                });
            }
            Err(_) => {
                for message in messages {
                    if sender.blocking_send(message).is_err() {
                        tracing::warn!("ui loop stopped before {task_name} was delivered");
                        return;
                    }
                }
            }
        }
    }

    pub fn downgrade(&self) -> WeakUiDispatcher {
        WeakUiDispatcher {
            sender: self.sender.downgrade(),
        }
    }
}

impl WeakUiDispatcher {
    /// Returns `None` once every strong dispatcher is gone.
    pub fn upgrade(&self) -> Option<UiDispatcher> {
        self.sender.upgrade().map(|sender| UiDispatcher { sender })
    }
}

impl UiInbox {
    pub async fn recv(&mut self) -> Option<UiMessage> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<UiMessage> {
        self.receiver.try_recv().ok()
    }
}
