//! Keyboard device abstraction
//!
//! This module provides the interface platform input layers implement to hand
//! raw key events to the rest of the system.
//!
//! ## Philosophy
//!
//! - **Platforms are just a source**: Devices supply raw codes, not key state
//! - **Poll-based**: The game loop pulls events when it is ready for them
//! - **Testable**: Devices can be faked or fed from a queue

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};

/// Raw keyboard event
///
/// A platform key code plus its direction, before translation to a portable key.
/// Auto-repeat arrives as further `pressed` events and needs no extra state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalKeyEvent<C> {
    /// Platform key code
    pub code: C,

    /// Whether the key went down (true) or up (false)
    pub pressed: bool,
}

impl<C> HalKeyEvent<C> {
    /// Creates a new keyboard event
    pub fn new(code: C, pressed: bool) -> Self {
        Self { code, pressed }
    }

    /// Creates a key-down event
    pub fn down(code: C) -> Self {
        Self::new(code, true)
    }

    /// Creates a key-up event
    pub fn up(code: C) -> Self {
        Self::new(code, false)
    }

    /// Returns true if this is a key press event
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true if this is a key release event
    pub fn is_released(&self) -> bool {
        !self.pressed
    }
}

/// Keyboard device trait
///
/// ## Implementation Notes
///
/// - **Non-blocking**: Returns `None` if no event is available
/// - **Raw codes**: Events carry platform codes, untranslated
/// - **Stateless**: The device does not track which keys are down
pub trait KeyboardDevice {
    /// Platform key-code type
    type Code;

    /// Polls for a keyboard event
    ///
    /// Returns `Some(event)` if a key event is available, or `None` if
    /// there are no pending events.
    fn poll_event(&mut self) -> Option<HalKeyEvent<Self::Code>>;
}

impl<D: KeyboardDevice + ?Sized> KeyboardDevice for Box<D> {
    type Code = D::Code;

    fn poll_event(&mut self) -> Option<HalKeyEvent<Self::Code>> {
        (**self).poll_event()
    }
}

/// FIFO keyboard device
///
/// Single-threaded queue: whoever owns the device pushes and polls. Events come
/// back out in the order they were pushed. For a producer on another thread use
/// [`channel_keyboard`].
#[derive(Debug, Clone)]
pub struct QueuedKeyboard<C> {
    pending: VecDeque<HalKeyEvent<C>>,
}

impl<C> QueuedKeyboard<C> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Enqueues an event
    pub fn push(&mut self, event: HalKeyEvent<C>) {
        self.pending.push_back(event);
    }

    /// Enqueues a key-down event
    pub fn push_down(&mut self, code: C) {
        self.push(HalKeyEvent::down(code));
    }

    /// Enqueues a key-up event
    pub fn push_up(&mut self, code: C) {
        self.push(HalKeyEvent::up(code));
    }

    /// Number of events not yet polled
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops all pending events
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<C> Default for QueuedKeyboard<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> KeyboardDevice for QueuedKeyboard<C> {
    type Code = C;

    fn poll_event(&mut self) -> Option<HalKeyEvent<C>> {
        self.pending.pop_front()
    }
}

/// Creates a cross-thread keyboard queue
///
/// The platform's key callbacks push through the returned sender (clonable,
/// `Send` when `C` is); the game loop owns the device and drains it once per tick.
pub fn channel_keyboard<C>() -> (KeyEventSender<C>, ChannelKeyboard<C>) {
    let (sender, receiver) = mpsc::channel();
    (KeyEventSender { sender }, ChannelKeyboard { receiver })
}

/// Producer half of [`channel_keyboard`]
#[derive(Debug)]
pub struct KeyEventSender<C> {
    sender: Sender<HalKeyEvent<C>>,
}

impl<C> KeyEventSender<C> {
    /// Sends an event to the device
    ///
    /// Returns false once the device has been dropped.
    pub fn send(&self, event: HalKeyEvent<C>) -> bool {
        self.sender.send(event).is_ok()
    }

    /// Sends a key-down event
    pub fn send_down(&self, code: C) -> bool {
        self.send(HalKeyEvent::down(code))
    }

    /// Sends a key-up event
    pub fn send_up(&self, code: C) -> bool {
        self.send(HalKeyEvent::up(code))
    }
}

impl<C> Clone for KeyEventSender<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Consumer half of [`channel_keyboard`]
///
/// Never blocks: `poll_event` returns `None` when nothing is pending, including
/// after every sender has been dropped.
#[derive(Debug)]
pub struct ChannelKeyboard<C> {
    receiver: Receiver<HalKeyEvent<C>>,
}

impl<C> KeyboardDevice for ChannelKeyboard<C> {
    type Code = C;

    fn poll_event(&mut self) -> Option<HalKeyEvent<C>> {
        self.receiver.try_recv().ok()
    }
}
