use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// What happened to a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Reveal,
    Flag,
    Unflag,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reveal => "reveal",
            Self::Flag => "flag",
            Self::Unflag => "unflag",
        })
    }
}

/// Observer notified synchronously for every square a move changes, cascaded reveals included.
///
/// Should do minimal work, it runs inline with the move.
pub trait MoveListener {
    fn on_move(&mut self, point: &[Coord], kind: MoveKind);
}

impl<F> MoveListener for F
where
    F: FnMut(&[Coord], MoveKind),
{
    fn on_move(&mut self, point: &[Coord], kind: MoveKind) {
        self(point, kind)
    }
}

/// Listeners in registration order.
#[derive(Default)]
pub(crate) struct Listeners(Vec<Box<dyn MoveListener>>);

impl Listeners {
    pub fn push(&mut self, listener: Box<dyn MoveListener>) {
        self.0.push(listener);
    }

    pub fn notify(&mut self, point: &[Coord], kind: MoveKind) {
        for listener in &mut self.0 {
            listener.on_move(point, kind);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners").field("len", &self.0.len()).finish()
    }
}
