// Navigation models
// Month-direction intents, navigation keys and the signals they broadcast

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which way to move the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Previous,
    Next,
}

impl NavigationDirection {
    /// Month delta applied by the calendar state
    pub fn month_delta(self) -> i32 {
        match self {
            NavigationDirection::Previous => -1,
            NavigationDirection::Next => 1,
        }
    }
}

/// A key on the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    Home,
    Calendar,
    Community,
    CommunityBoards,
    Chat,
    Settings,
}

impl NavigationKey {
    pub const ALL: [NavigationKey; 6] = [
        NavigationKey::Home,
        NavigationKey::Calendar,
        NavigationKey::Community,
        NavigationKey::CommunityBoards,
        NavigationKey::Chat,
        NavigationKey::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NavigationKey::Home => "home",
            NavigationKey::Calendar => "calendar",
            NavigationKey::Community => "community",
            NavigationKey::CommunityBoards => "community-boards",
            NavigationKey::Chat => "chat",
            NavigationKey::Settings => "settings",
        }
    }

    /// Tab caption shown on the navigation bar
    pub fn label(self) -> &'static str {
        match self {
            NavigationKey::Home => "홈",
            NavigationKey::Calendar => "캘린더",
            NavigationKey::Community => "커뮤니티",
            NavigationKey::CommunityBoards => "게시판",
            NavigationKey::Chat => "채팅",
            NavigationKey::Settings => "설정",
        }
    }

    /// The signal whose destination matches this key.
    pub fn own_signal(self) -> NavigationSignal {
        match self {
            NavigationKey::Home => NavigationSignal::Home,
            NavigationKey::Calendar => NavigationSignal::Calendar,
            NavigationKey::Community => NavigationSignal::Community,
            NavigationKey::CommunityBoards => NavigationSignal::CommunityBoards,
            NavigationKey::Chat => NavigationSignal::Chat,
            NavigationKey::Settings => NavigationSignal::Settings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown navigation key: {0}")]
pub struct UnknownNavigationKey(pub String);

impl FromStr for NavigationKey {
    type Err = UnknownNavigationKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavigationKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownNavigationKey(s.to_string()))
    }
}

/// Named, payload-less navigation target broadcast to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationSignal {
    Home,
    Calendar,
    Community,
    CommunityBoards,
    Chat,
    Settings,
}

impl NavigationSignal {
    /// Broadcast name, e.g. `navigate-community`
    pub fn name(self) -> &'static str {
        match self {
            NavigationSignal::Home => "navigate-home",
            NavigationSignal::Calendar => "navigate-calendar",
            NavigationSignal::Community => "navigate-community",
            NavigationSignal::CommunityBoards => "navigate-community-boards",
            NavigationSignal::Chat => "navigate-chat",
            NavigationSignal::Settings => "navigate-settings",
        }
    }
}

impl fmt::Display for NavigationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How navigation keys resolve to signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalRouting {
    /// Every key broadcasts `navigate-community`, matching the shipped bar.
    #[default]
    AsShipped,
    /// Each key broadcasts the signal named after it.
    PerDestination,
}

impl SignalRouting {
    pub fn resolve(self, key: NavigationKey) -> NavigationSignal {
        match self {
            SignalRouting::AsShipped => NavigationSignal::Community,
            SignalRouting::PerDestination => key.own_signal(),
        }
    }
}
