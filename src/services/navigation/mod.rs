//! Typed signal channel between the navigation bar and the router.
//!
//! Senders are fire-and-forget: a signal sent after the receiving side is gone
//! is logged and dropped. The router drains pending signals in send order.

use crate::models::navigation::NavigationSignal;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Create a connected sender/receiver pair.
pub fn signal_channel() -> (SignalSender, SignalReceiver) {
    let (tx, rx) = mpsc::channel();
    (SignalSender { tx }, SignalReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct SignalSender {
    tx: Sender<NavigationSignal>,
}

impl SignalSender {
    /// Returns whether a receiver was still listening.
    pub fn broadcast(&self, signal: NavigationSignal) -> bool {
        match self.tx.send(signal) {
            Ok(()) => {
                log::debug!("Broadcast {}", signal);
                true
            }
            Err(_) => {
                log::warn!("Dropped {}: no router is listening", signal);
                false
            }
        }
    }
}

#[derive(Debug)]
pub struct SignalReceiver {
    rx: Receiver<NavigationSignal>,
}

impl SignalReceiver {
    /// All signals sent since the last call, oldest first.
    pub fn drain(&self) -> Vec<NavigationSignal> {
        let mut signals = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(signal) => signals.push(signal),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        signals
    }
}

/// Page the shell is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    Home,
    #[default]
    Calendar,
    Community,
    CommunityBoards,
    Chat,
    Settings,
}

impl Destination {
    pub fn for_signal(signal: NavigationSignal) -> Self {
        match signal {
            NavigationSignal::Home => Destination::Home,
            NavigationSignal::Calendar => Destination::Calendar,
            NavigationSignal::Community => Destination::Community,
            NavigationSignal::CommunityBoards => Destination::CommunityBoards,
            NavigationSignal::Chat => Destination::Chat,
            NavigationSignal::Settings => Destination::Settings,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Destination::Home => "홈",
            Destination::Calendar => "캘린더",
            Destination::Community => "커뮤니티",
            Destination::CommunityBoards => "커뮤니티 게시판",
            Destination::Chat => "채팅",
            Destination::Settings => "설정",
        }
    }
}

/// Owns every destination and switches between them on incoming signals.
#[derive(Debug)]
pub struct NavigationRouter {
    receiver: SignalReceiver,
    active: Destination,
}

impl NavigationRouter {
    pub fn new(receiver: SignalReceiver) -> Self {
        Self {
            receiver,
            active: Destination::default(),
        }
    }

    pub fn active(&self) -> Destination {
        self.active
    }

    /// Direct switch for in-app links that bypass the navigation bar.
    pub fn open(&mut self, destination: Destination) {
        if self.active != destination {
            log::debug!("Destination {:?} -> {:?}", self.active, destination);
            self.active = destination;
        }
    }

    /// Apply pending signals; returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let signals = self.receiver.drain();
        for signal in &signals {
            self.open(Destination::for_signal(*signal));
        }
        signals.len()
    }
}
