//! `/tuio/2Dcur` frame assembly.
//!
//! A TUIO frame is a run of messages on the cursor profile: an optional
//! `source`, any number of `set` messages with cursor state, one `alive`
//! listing every session still on the surface, and a closing `fseq` with the
//! frame number. Nothing is reported until `fseq` arrives; the tracker then
//! diffs the frame against the cursors it already knows.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tapline_core::SessionId;

use crate::osc::{OscArg, OscMessage};

pub const CURSOR_PROFILE: &str = "/tuio/2Dcur";

/// Frames this far behind the current one are taken as a sender restart.
const MAX_FRAME_LAG: i64 = 100;

/// Frame number senders use for frames that must never be rejected.
const UNSEQUENCED_FRAME: i64 = -1;

/// Cursor position in normalized `[0, 1]` surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CursorChange {
    Added {
        session: SessionId,
        position: CursorPosition,
    },
    Updated {
        session: SessionId,
        position: CursorPosition,
    },
    Removed {
        session: SessionId,
        position: CursorPosition,
    },
}

pub type FrameChanges = SmallVec<[CursorChange; 8]>;

#[derive(Debug, Default)]
pub struct CursorTracker {
    cursors: FxHashMap<SessionId, CursorPosition>,
    pending_set: SmallVec<[(SessionId, CursorPosition); 8]>,
    pending_alive: Option<SmallVec<[SessionId; 16]>>,
    current_frame: Option<i64>,
    source: Option<String>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one message. Returns the cursor changes when it closes a frame.
    pub fn handle_message(&mut self, message: &OscMessage) -> FrameChanges {
        if message.address != CURSOR_PROFILE {
            return FrameChanges::new();
        }
        let Some(command) = message.args.first().and_then(OscArg::as_str) else {
            log::debug!("cursor message without a command");
            return FrameChanges::new();
        };
        let args = &message.args[1..];
        match command {
            "source" => {
                self.source = args.first().and_then(OscArg::as_str).map(str::to_owned);
            }
            "set" => self.stage_set(args),
            "alive" => {
                let alive = args
                    .iter()
                    .filter_map(OscArg::as_int)
                    .filter_map(|id| SessionId::try_from(id).ok())
                    .collect();
                self.pending_alive = Some(alive);
            }
            "fseq" => {
                let Some(fseq) = args.first().and_then(OscArg::as_int) else {
                    log::debug!("fseq without a frame number");
                    return FrameChanges::new();
                };
                return self.commit(i64::from(fseq));
            }
            other => log::trace!("ignoring cursor command {other}"),
        }
        FrameChanges::new()
    }

    fn stage_set(&mut self, args: &[OscArg]) {
        let session = args
            .first()
            .and_then(OscArg::as_int)
            .and_then(|id| SessionId::try_from(id).ok());
        let x = args.get(1).and_then(OscArg::as_float);
        let y = args.get(2).and_then(OscArg::as_float);
        match (session, x, y) {
            (Some(session), Some(x), Some(y)) => {
                self.pending_set.push((session, CursorPosition { x, y }));
            }
            _ => log::debug!("malformed cursor set message: {args:?}"),
        }
    }

    fn accept_frame(&mut self, fseq: i64) -> bool {
        if fseq == UNSEQUENCED_FRAME {
            return true;
        }
        let accepted = match self.current_frame {
            None => true,
            Some(current) => fseq > current || current - fseq > MAX_FRAME_LAG,
        };
        if accepted {
            self.current_frame = Some(fseq);
        }
        accepted
    }

    fn commit(&mut self, fseq: i64) -> FrameChanges {
        let set = std::mem::take(&mut self.pending_set);
        let alive = self.pending_alive.take();
        let mut changes = FrameChanges::new();

        if !self.accept_frame(fseq) {
            log::trace!("dropping late frame {fseq}");
            return changes;
        }

        if let Some(alive) = alive {
            let mut gone: SmallVec<[SessionId; 16]> = self
                .cursors
                .keys()
                .filter(|session| !alive.contains(*session))
                .copied()
                .collect();
            gone.sort_unstable();
            for session in gone {
                if let Some(position) = self.cursors.remove(&session) {
                    changes.push(CursorChange::Removed { session, position });
                }
            }
            for (session, position) in set {
                if !alive.contains(&session) {
                    continue;
                }
                let change = match self.cursors.insert(session, position) {
                    None => CursorChange::Added { session, position },
                    Some(previous) if previous == position => continue,
                    Some(_) => CursorChange::Updated { session, position },
                };
                changes.push(change);
            }
        } else {
            // Without an alive list only known cursors can move.
            for (session, position) in set {
                if let Some(known) = self.cursors.get_mut(&session) {
                    if *known != position {
                        *known = position;
                        changes.push(CursorChange::Updated { session, position });
                    }
                }
            }
        }
        changes
    }

    /// Ends every known cursor, as when the sender goes away.
    pub fn reset(&mut self) -> FrameChanges {
        let mut sessions: SmallVec<[(SessionId, CursorPosition); 16]> =
            self.cursors.drain().collect();
        sessions.sort_unstable_by_key(|(session, _)| *session);
        self.pending_set.clear();
        self.pending_alive = None;
        self.current_frame = None;
        sessions
            .into_iter()
            .map(|(session, position)| CursorChange::Removed { session, position })
            .collect()
    }

    pub fn cursor(&self, session: SessionId) -> Option<CursorPosition> {
        self.cursors.get(&session).copied()
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Name announced by the last `source` message, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cur(command: &str) -> OscMessage {
        OscMessage::new(CURSOR_PROFILE).with_arg(OscArg::Str(command.into()))
    }

    fn set(session: i32, x: f32, y: f32) -> OscMessage {
        cur("set")
            .with_arg(OscArg::Int(session))
            .with_arg(OscArg::Float(x))
            .with_arg(OscArg::Float(y))
            .with_arg(OscArg::Float(0.0))
            .with_arg(OscArg::Float(0.0))
            .with_arg(OscArg::Float(0.0))
    }

    fn alive(sessions: &[i32]) -> OscMessage {
        sessions
            .iter()
            .fold(cur("alive"), |message, id| message.with_arg(OscArg::Int(*id)))
    }

    fn fseq(frame: i32) -> OscMessage {
        cur("fseq").with_arg(OscArg::Int(frame))
    }

    fn frame(tracker: &mut CursorTracker, messages: &[OscMessage]) -> Vec<CursorChange> {
        messages
            .iter()
            .flat_map(|message| tracker.handle_message(message))
            .collect()
    }

    fn at(x: f32, y: f32) -> CursorPosition {
        CursorPosition { x, y }
    }

    #[test]
    fn new_cursor_is_added_on_fseq() {
        let mut tracker = CursorTracker::new();
        assert!(tracker.handle_message(&set(1, 0.5, 0.5)).is_empty());
        assert!(tracker.handle_message(&alive(&[1])).is_empty());
        assert_eq!(
            tracker.handle_message(&fseq(1)).into_vec(),
            vec![CursorChange::Added {
                session: 1,
                position: at(0.5, 0.5)
            }]
        );
    }

    #[test]
    fn moves_updates_and_removals() {
        let mut tracker = CursorTracker::new();
        frame(&mut tracker, &[set(1, 0.1, 0.1), set(2, 0.2, 0.2), alive(&[1, 2]), fseq(1)]);

        let changes = frame(&mut tracker, &[set(2, 0.3, 0.2), alive(&[2]), fseq(2)]);
        assert_eq!(
            changes,
            vec![
                CursorChange::Removed {
                    session: 1,
                    position: at(0.1, 0.1)
                },
                CursorChange::Updated {
                    session: 2,
                    position: at(0.3, 0.2)
                },
            ]
        );
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn unchanged_set_is_not_reported() {
        let mut tracker = CursorTracker::new();
        frame(&mut tracker, &[set(4, 0.4, 0.4), alive(&[4]), fseq(1)]);
        assert!(frame(&mut tracker, &[set(4, 0.4, 0.4), alive(&[4]), fseq(2)]).is_empty());
    }

    #[test]
    fn late_frames_are_dropped() {
        let mut tracker = CursorTracker::new();
        frame(&mut tracker, &[set(1, 0.1, 0.1), alive(&[1]), fseq(50)]);

        assert!(frame(&mut tracker, &[alive(&[]), fseq(50)]).is_empty());
        assert!(frame(&mut tracker, &[alive(&[]), fseq(10)]).is_empty());
        assert_eq!(tracker.len(), 1);

        // Staged state from a dropped frame does not leak into the next one.
        assert!(frame(&mut tracker, &[fseq(51)]).is_empty());
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn unsequenced_and_restarted_frames_are_accepted() {
        let mut tracker = CursorTracker::new();
        frame(&mut tracker, &[set(1, 0.1, 0.1), alive(&[1]), fseq(500)]);

        let changes = frame(&mut tracker, &[set(1, 0.2, 0.1), alive(&[1]), fseq(-1)]);
        assert_eq!(changes.len(), 1);

        // More than 100 frames behind: the sender restarted.
        let changes = frame(&mut tracker, &[alive(&[]), fseq(3)]);
        assert_eq!(
            changes,
            vec![CursorChange::Removed {
                session: 1,
                position: at(0.2, 0.1)
            }]
        );
    }

    #[test]
    fn alive_without_set_does_not_add() {
        let mut tracker = CursorTracker::new();
        assert!(frame(&mut tracker, &[alive(&[9]), fseq(1)]).is_empty());
        assert!(tracker.is_empty());
    }

    #[test]
    fn other_profiles_and_source_are_handled() {
        let mut tracker = CursorTracker::new();
        let object = OscMessage::new("/tuio/2Dobj").with_arg(OscArg::Str("fseq".into()));
        assert!(tracker.handle_message(&object).is_empty());

        tracker.handle_message(&cur("source").with_arg(OscArg::Str("table@10.0.0.2".into())));
        assert_eq!(tracker.source(), Some("table@10.0.0.2"));
    }

    #[test]
    fn reset_removes_everything() {
        let mut tracker = CursorTracker::new();
        frame(&mut tracker, &[set(2, 0.2, 0.2), set(1, 0.1, 0.1), alive(&[1, 2]), fseq(1)]);
        let removed: Vec<SessionId> = tracker
            .reset()
            .into_iter()
            .map(|change| match change {
                CursorChange::Removed { session, .. } => session,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(removed, vec![1, 2]);
        assert!(tracker.is_empty());
    }
}
