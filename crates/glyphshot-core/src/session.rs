use std::fmt;

/// Lifecycle of one viewer window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the image and the word boxes.
    #[default]
    Loading,
    Ready,
    /// Primary pointer button held over the image.
    Selecting,
    /// Terminal.
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading"),
            Self::Ready => write!(f, "Ready"),
            Self::Selecting => write!(f, "Selecting"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// `Loading -> Ready -> (Selecting <-> Ready) -> Closed`. A failed load goes
/// straight from `Loading` to `Closed`.
///
/// Every method returns whether the state changed; events that do not apply
/// to the current state are ignored.
#[derive(Clone, Debug, Default)]
pub struct ViewerSession {
    state: SessionState,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True once input may be forwarded to the selection model.
    pub fn accepts_input(&self) -> bool {
        matches!(self.state, SessionState::Ready | SessionState::Selecting)
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    pub fn loaded(&mut self) -> bool {
        self.transition(SessionState::Loading, SessionState::Ready)
    }

    /// The image or its words could not be loaded. The session ends.
    pub fn load_failed(&mut self) -> bool {
        self.transition(SessionState::Loading, SessionState::Closed)
    }

    /// A new image was requested; back to waiting for the worker.
    pub fn reload(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.state = SessionState::Loading;
        true
    }

    pub fn pointer_pressed(&mut self) -> bool {
        self.transition(SessionState::Ready, SessionState::Selecting)
    }

    pub fn pointer_released(&mut self) -> bool {
        self.transition(SessionState::Selecting, SessionState::Ready)
    }

    /// Allowed from any state.
    pub fn close(&mut self) -> bool {
        if self.is_closed() {
            return false;
        }
        self.state = SessionState::Closed;
        true
    }

    fn transition(&mut self, from: SessionState, to: SessionState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}
