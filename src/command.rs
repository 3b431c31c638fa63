#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// What a host UI can ask of the playhead
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransportCommand {
    /// Jump to a time in seconds, forwards or backwards
    Seek(f64),
    TogglePause,
    /// Back to the start
    Restart,
}

pub trait CommandReceiver {
    fn pop(&mut self) -> Option<TransportCommand>;
}

#[cfg(feature = "rtrb")]
impl CommandReceiver for Consumer<TransportCommand> {
    fn pop(&mut self) -> Option<TransportCommand> {
        Consumer::pop(self).ok()
    }
}

/// Nothing to receive. For hosts that drive the stage directly.
impl CommandReceiver for () {
    fn pop(&mut self) -> Option<TransportCommand> {
        None
    }
}

/// Commands queued in order, mostly for tests
impl CommandReceiver for std::collections::VecDeque<TransportCommand> {
    fn pop(&mut self) -> Option<TransportCommand> {
        self.pop_front()
    }
}
