//! Engine-owner thread.
//!
//! The engine is single-threaded and does no locking. A shell that takes
//! input on other threads hands the engine to a [`Session`]: one worker
//! thread owns it exclusively, and every other thread talks to it through
//! a cloneable [`SessionHandle`] that sends [`Intent`]s and waits for the
//! matching [`IntentOutcome`].
//!
//! The worker stops on [`Intent::Quit`] or when every handle is dropped.
//! A game still in progress at that point is aborted.
//!
//! ```
//! use brique::core::{Position, Stone};
//! use brique::game::GameEngine;
//! use brique::session::{IntentOutcome, Session};
//!
//! let session = Session::spawn(GameEngine::new(3).unwrap());
//! let handle = session.handle();
//!
//! let outcome = handle.place(Position::new(1, 1)).unwrap();
//! assert!(matches!(outcome, IntentOutcome::Placed(_)));
//!
//! drop(handle);
//! let state = session.join();
//! assert_eq!(state.board().stone(Position::new(1, 1)), Stone::Black);
//! ```

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::core::{GameError, GameState, GameStatus, Move, Position, Result};
use crate::game::GameEngine;

/// A single request from a shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Place the current player's stone.
    Place(Position),
    /// Apply the pie rule.
    Swap,
    /// Stop the session, aborting a game in progress.
    Quit,
    /// Copy of the current state for rendering.
    Snapshot,
}

/// Reply to an [`Intent`].
#[derive(Clone, Debug)]
pub enum IntentOutcome {
    /// The stone was placed. Carries the move with its fills and captures.
    Placed(Move),
    /// The placement was illegal; nothing changed.
    Rejected(Position),
    /// Colors were swapped.
    Swapped,
    /// The session is stopping; carries the final status.
    Ended(GameStatus),
    /// Current state.
    Snapshot(GameState),
    /// The engine refused the request.
    Failed(GameError),
}

struct Request {
    intent: Intent,
    reply: Sender<IntentOutcome>,
}

/// Owns the worker thread.
pub struct Session {
    handle: SessionHandle,
    worker: JoinHandle<GameState>,
}

impl Session {
    /// Move `engine` onto a new worker thread.
    #[must_use]
    pub fn spawn(engine: GameEngine) -> Self {
        let (tx, rx) = channel();
        let worker = thread::spawn(move || run(engine, rx));
        Self {
            handle: SessionHandle { tx },
            worker,
        }
    }

    /// A new handle for submitting intents.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Wait for the worker to stop and return the final state.
    ///
    /// Blocks until `Quit` is sent or every other handle is dropped.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from the worker thread.
    #[must_use]
    pub fn join(self) -> GameState {
        drop(self.handle);
        match self.worker.join() {
            Ok(state) => state,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

/// Cloneable sender side of a [`Session`].
#[derive(Clone)]
pub struct SessionHandle {
    tx: Sender<Request>,
}

impl SessionHandle {
    /// Send `intent` and wait for the reply.
    ///
    /// Fails with [`GameError::SessionClosed`] if the worker has stopped.
    pub fn submit(&self, intent: Intent) -> Result<IntentOutcome> {
        let (reply, rx) = channel();
        self.tx
            .send(Request { intent, reply })
            .map_err(|_| GameError::SessionClosed)?;
        rx.recv().map_err(|_| GameError::SessionClosed)
    }

    /// Place a stone at `position`.
    pub fn place(&self, position: Position) -> Result<IntentOutcome> {
        self.submit(Intent::Place(position))
    }

    /// Apply the pie rule.
    pub fn swap(&self) -> Result<IntentOutcome> {
        self.submit(Intent::Swap)
    }

    /// Stop the session.
    pub fn quit(&self) -> Result<GameStatus> {
        match self.submit(Intent::Quit)? {
            IntentOutcome::Ended(status) => Ok(status),
            _ => Err(GameError::SessionClosed),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Result<GameState> {
        match self.submit(Intent::Snapshot)? {
            IntentOutcome::Snapshot(state) => Ok(state),
            _ => Err(GameError::SessionClosed),
        }
    }
}

fn run(mut engine: GameEngine, rx: Receiver<Request>) -> GameState {
    while let Ok(Request { intent, reply }) = rx.recv() {
        let quit = intent == Intent::Quit;
        let outcome = dispatch(&mut engine, intent);
        if let IntentOutcome::Failed(err) = &outcome {
            warn!(?intent, error = %err, "intent failed");
        }
        // A requester that stopped waiting is not an error.
        let _ = reply.send(outcome);
        if quit {
            break;
        }
    }

    if !engine.is_game_over() {
        engine.abort();
    }
    debug!(status = %engine.state().status(), "session stopped");
    engine.into_state()
}

fn dispatch(engine: &mut GameEngine, intent: Intent) -> IntentOutcome {
    match intent {
        Intent::Place(position) => match engine.play_move(position) {
            Ok(true) => engine
                .state()
                .last_move()
                .cloned()
                .map_or(IntentOutcome::Rejected(position), IntentOutcome::Placed),
            Ok(false) => IntentOutcome::Rejected(position),
            Err(err) => IntentOutcome::Failed(err),
        },
        Intent::Swap => match engine.apply_pie_rule() {
            Ok(()) => IntentOutcome::Swapped,
            Err(err) => IntentOutcome::Failed(err),
        },
        Intent::Quit => {
            if !engine.is_game_over() {
                engine.abort();
            }
            IntentOutcome::Ended(engine.state().status())
        }
        Intent::Snapshot => IntentOutcome::Snapshot(engine.state().clone()),
    }
}
