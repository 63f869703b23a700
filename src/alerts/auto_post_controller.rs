//! Speed mode: delayed, cancelable posting of alerts.
//!
//! This module provides the [`AutoPostController`] which decides whether a post
//! request is executed right away or turned into a [`CountdownSession`], and
//! drives that countdown until it posts the alert or gets cancelled.
//!
//! # State Machine
//!
//! ```text
//!             request_post (speed mode on)
//!   ┌──────┐ ─────────────────────────────▶ ┌──────────┐
//!   │ Idle │                                │ Counting │ ◀─┐ tick (remaining > 0)
//!   └──────┘ ◀───────────────────────────── └──────────┘ ──┘
//!      ▲  │     tick (remaining = 0) / cancel
//!      └──┘
//!   request_post (speed mode off)
//! ```
//!
//! The controller owns no timer: something else calls [`AutoPostController::tick`]
//! once per second. Decrementing and posting happen in the same tick, so a
//! cancel is either applied before the tick or finds no session at all.

use log::{debug, info, warn};

use crate::alerts::{AlertError, AlertId, AlertStore};

/// Value a countdown starts from, in seconds.
pub const COUNTDOWN_START: u32 = 10;

/// A post waiting for its countdown to expire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownSession {
    /// Alert that will be posted on expiry
    pub target_alert_id: AlertId,
    /// Seconds left before the post, never negative
    pub remaining_seconds: u32,
}

/// What a post request led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostRequest {
    /// The alert was posted immediately.
    Posted(AlertId),
    /// A countdown started for the alert.
    CountdownStarted(CountdownSession),
}

/// What a countdown tick led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No countdown was running.
    Idle,
    /// The countdown went one second down and keeps running.
    Counting(CountdownSession),
    /// The countdown expired and the alert was posted.
    Posted(AlertId),
}

/// Governs immediate versus delayed posting.
///
/// At most one [`CountdownSession`] exists at a time. Switching speed mode
/// off does not end a running countdown: only [`cancel`](Self::cancel) or
/// expiry does.
///
/// # Examples
///
/// ```
/// # use minefeed::alerts::{AlertLoader, AlertStore, AutoPostController, PostRequest, TickOutcome};
/// let mut store = AlertStore::new(AlertLoader::builtin());
/// let mut controller = AutoPostController::new(true);
///
/// let request = controller.request_post(&mut store, 1).unwrap();
/// assert!(matches!(request, PostRequest::CountdownStarted(_)));
///
/// for _ in 0..9 {
///     controller.tick(&mut store).unwrap();
/// }
/// assert_eq!(controller.tick(&mut store).unwrap(), TickOutcome::Posted(1));
/// ```
#[derive(Debug, Default)]
pub struct AutoPostController {
    speed_mode: bool,
    session: Option<CountdownSession>,
}

impl AutoPostController {
    pub fn new(speed_mode: bool) -> Self {
        AutoPostController {
            speed_mode,
            session: None,
        }
    }

    pub fn speed_mode(&self) -> bool {
        self.speed_mode
    }

    /// Changes how future post requests are handled.
    ///
    /// A countdown already running is kept.
    pub fn set_speed_mode(&mut self, speed_mode: bool) {
        if let Some(session) = self.session
            && !speed_mode
        {
            info!(
                "speed mode off, countdown for alert {} keeps running",
                session.target_alert_id
            );
        }
        self.speed_mode = speed_mode;
    }

    /// The running countdown, if any.
    pub fn countdown(&self) -> Option<CountdownSession> {
        self.session
    }

    /// Asks for an alert to be posted.
    ///
    /// With speed mode off the alert is posted right away. With speed mode on
    /// a countdown of [`COUNTDOWN_START`] seconds starts instead.
    ///
    /// # Errors
    ///
    /// - [`AlertError::NotFound`] if the id is unknown
    /// - [`AlertError::AlreadyPosted`] if the alert was already posted
    /// - [`AlertError::SessionBusy`] if a countdown is running and either speed
    ///   mode is on or the alert is the countdown's own target
    pub fn request_post(
        &mut self,
        store: &mut AlertStore,
        id: AlertId,
    ) -> Result<PostRequest, AlertError> {
        let alert = store
            .get(id)
            .inspect_err(|_| warn!("refused to post alert {}, not found", id))?;
        if alert.posted() {
            warn!("refused to post alert {}, already posted", id);
            return Err(AlertError::AlreadyPosted(id));
        }

        if let Some(session) = self.session
            && (self.speed_mode || session.target_alert_id == id)
        {
            warn!(
                "refused to post alert {}, countdown running for alert {}",
                id, session.target_alert_id
            );
            return Err(AlertError::SessionBusy {
                active: session.target_alert_id,
            });
        }

        if !self.speed_mode {
            store.mark_posted(id)?;
            return Ok(PostRequest::Posted(id));
        }

        let session = CountdownSession {
            target_alert_id: id,
            remaining_seconds: COUNTDOWN_START,
        };
        self.session = Some(session);
        info!(
            "auto-posting alert {} in {} seconds",
            id, session.remaining_seconds
        );

        Ok(PostRequest::CountdownStarted(session))
    }

    /// Advances the running countdown by one second.
    ///
    /// When the countdown reaches zero the session is destroyed and the target
    /// alert is posted. If posting fails the session is destroyed all the same
    /// and the error is returned.
    pub fn tick(&mut self, store: &mut AlertStore) -> Result<TickOutcome, AlertError> {
        let Some(mut session) = self.session else {
            return Ok(TickOutcome::Idle);
        };

        session.remaining_seconds = session.remaining_seconds.saturating_sub(1);
        debug!(
            "countdown for alert {}: {} seconds left",
            session.target_alert_id, session.remaining_seconds
        );

        if session.remaining_seconds > 0 {
            self.session = Some(session);
            return Ok(TickOutcome::Counting(session));
        }

        self.session = None;
        store.mark_posted(session.target_alert_id)?;
        info!(
            "countdown expired, posted alert {}",
            session.target_alert_id
        );

        Ok(TickOutcome::Posted(session.target_alert_id))
    }

    /// Stops the running countdown without posting.
    ///
    /// Returns the cancelled session, or `None` when nothing was running.
    pub fn cancel(&mut self) -> Option<CountdownSession> {
        let session = self.session.take();
        if let Some(session) = session {
            info!("cancelled countdown for alert {}", session.target_alert_id);
        }
        session
    }
}
