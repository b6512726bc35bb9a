use flume::{Receiver, Sender};
use log::warn;

/// Commands recorded during a frame and applied once the frame is drawn.
///
/// Widgets call [`CommandQueue::enqueue`] and never touch the states a command
/// changes, so rendering always sees one consistent frame.
#[derive(Debug)]
pub struct CommandQueue<C> {
    send: Sender<C>,
    recv: Receiver<C>,
}

impl<C> Default for CommandQueue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CommandQueue<C> {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn enqueue(&self, command: C) {
        if let Err(err) = self.send.send(command) {
            warn!("command dropped, queue disconnected: {err}");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recv.is_empty()
    }

    /// Takes every pending command in enqueue order.
    pub fn drain(&self) -> Vec<C> {
        self.recv.try_iter().collect()
    }
}
