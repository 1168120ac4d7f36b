//! Command Queue
//!
//! Serializes commands between whoever resolves input and the frame that
//! dispatches them. Any number of senders, one consumer.

use crossbeam_channel::{Receiver, Sender, TrySendError, unbounded};

use super::Command;

/// Cloneable handle for pushing commands into a [`CommandQueue`].
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    /// Queues a command. Returns false if the queue has been dropped.
    pub fn send(&self, command: Command) -> bool {
        match self.tx.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Disconnected(_)) | Err(TrySendError::Full(_)) => false,
        }
    }
}

/// Unbounded FIFO of pending commands.
#[derive(Debug)]
pub struct CommandQueue {
    tx: Sender<Command>,
    rx: Receiver<Command>,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    pub fn push(&self, command: Command) {
        // Cannot fail: `self` holds the receiver.
        let _ = self.tx.send(command);
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Drains everything queued so far, in arrival order.
    pub fn drain(&self) -> impl Iterator<Item = Command> + '_ {
        self.rx.try_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_fifo_order() {
        let queue = CommandQueue::new();
        queue.push(Command::ToggleBlockMode);
        queue.push(Command::RemoveBlock);
        queue.push(Command::Move { axis: Vec2::Y });

        assert_eq!(queue.len(), 3);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                Command::ToggleBlockMode,
                Command::RemoveBlock,
                Command::Move { axis: Vec2::Y }
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sender_from_other_thread() {
        let queue = CommandQueue::new();
        let sender = queue.sender();
        std::thread::spawn(move || {
            assert!(sender.send(Command::PlaceBlock));
        })
        .join()
        .unwrap();

        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![Command::PlaceBlock]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sender_detects_dropped_queue() {
        let queue = CommandQueue::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.send(Command::ToggleDebug));
    }
}
