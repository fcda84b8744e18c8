//! Open/closed state of the mobile navigation drawer.

/// Drawer state. Starts closed and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Things the user can do that affect the drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    /// Menu button in the mobile top bar
    Trigger,
    /// Close button or backdrop click
    Close,
    /// A navigation link inside the drawer
    Navigate,
    /// "Store" in the drawer footer
    Store,
    /// Sign-out in the drawer footer
    SignOut,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    pub fn apply(self, event: DrawerEvent) -> Self {
        match (self, event) {
            (DrawerState::Closed, DrawerEvent::Trigger) => DrawerState::Open,
            (DrawerState::Open, DrawerEvent::Trigger) => DrawerState::Open,
            (_, DrawerEvent::Close | DrawerEvent::Navigate | DrawerEvent::Store | DrawerEvent::SignOut) => {
                DrawerState::Closed
            }
        }
    }
}

impl DrawerEvent {
    /// Map a controlled-panel `open` request to the matching event.
    pub fn from_open_request(open: bool) -> Self {
        if open {
            DrawerEvent::Trigger
        } else {
            DrawerEvent::Close
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
        assert!(!DrawerState::default().is_open());
    }

    #[test]
    fn test_trigger_then_navigate() {
        let state = DrawerState::default().apply(DrawerEvent::Trigger);
        assert!(state.is_open());
        let state = state.apply(DrawerEvent::Navigate);
        assert_eq!(state, DrawerState::Closed);
    }

    #[test]
    fn test_every_closing_event_closes() {
        for event in [
            DrawerEvent::Close,
            DrawerEvent::Navigate,
            DrawerEvent::Store,
            DrawerEvent::SignOut,
        ] {
            assert_eq!(DrawerState::Open.apply(event), DrawerState::Closed, "{event:?}");
            assert_eq!(DrawerState::Closed.apply(event), DrawerState::Closed, "{event:?}");
        }
    }

    #[test]
    fn test_trigger_while_open_stays_open() {
        assert_eq!(DrawerState::Open.apply(DrawerEvent::Trigger), DrawerState::Open);
    }

    #[test]
    fn test_open_request_mapping() {
        assert_eq!(DrawerEvent::from_open_request(true), DrawerEvent::Trigger);
        assert_eq!(DrawerEvent::from_open_request(false), DrawerEvent::Close);
    }
}
