use tapline_core::{InputPipeline, SessionId};

/// Receives cursor lifecycle callbacks from the TUIO receive thread.
///
/// Coordinates are normalized to `[0, 1]` across the tracked display.
#[allow(unused_variables)]
pub trait TuioListener: Send + Sync {
    fn cursor_added(&self, session: SessionId, x: f32, y: f32) {}

    fn cursor_updated(&self, session: SessionId, x: f32, y: f32) {}

    fn cursor_removed(&self, session: SessionId, x: f32, y: f32) {}

    /// Called on connect and disconnect, before any cursor callback and
    /// after the last one respectively.
    fn connection_changed(&self, connected: bool) {}
}

/// Feeds cursors into the pipeline's contact handlers. While connected the
/// pipeline ignores native pointer motion and clicks.
impl TuioListener for InputPipeline {
    fn cursor_added(&self, session: SessionId, x: f32, y: f32) {
        self.contact_added(session, x, y);
    }

    fn cursor_updated(&self, session: SessionId, x: f32, y: f32) {
        self.contact_updated(session, x, y);
    }

    fn cursor_removed(&self, session: SessionId, x: f32, y: f32) {
        self.contact_removed(session, x, y);
    }

    fn connection_changed(&self, connected: bool) {
        self.set_tracking_active(connected);
    }
}
