//! Navigation dispatcher behind the bottom tab bar.
//!
//! Turns a key into exactly one signal on the router channel. It draws
//! nothing itself; the shell's tab bar calls [`BottomNavigation::navigate`].

use crate::models::navigation::{NavigationKey, NavigationSignal, SignalRouting};
use crate::services::navigation::SignalSender;

pub struct BottomNavigation {
    routing: SignalRouting,
    sender: SignalSender,
}

impl BottomNavigation {
    pub fn new(routing: SignalRouting, sender: SignalSender) -> Self {
        if routing == SignalRouting::AsShipped {
            log::info!("Navigation bar uses as-shipped routing: every key opens the community page");
        }
        Self { routing, sender }
    }

    /// Broadcast the signal for `key` and return it.
    pub fn navigate(&self, key: NavigationKey) -> NavigationSignal {
        let signal = self.routing.resolve(key);
        if signal != key.own_signal() {
            log::warn!(
                "Navigation key '{}' broadcast {} instead of {}",
                key.as_str(),
                signal,
                key.own_signal()
            );
        }
        self.sender.broadcast(signal);
        signal
    }
}
