//! Scoped ownership of the run's web session
//!
//! The orchestrator owns exactly one [`SessionHandle`]. Checkers borrow it for
//! the duration of a single check. Variants that need a fresh browser call
//! [`SessionHandle::recycle`], which swaps the session behind the handle; the
//! handle itself never changes hands. The session is released by
//! [`SessionHandle::close`] or, failing that, when the handle is dropped.

use std::time::Duration;

use crate::core::ports::{SessionError, SessionLauncher, WebSession};
use crate::logging::Logger;

/// Owner of the live web session
pub struct SessionHandle {
    launcher: Box<dyn SessionLauncher>,
    session: Option<Box<dyn WebSession>>,
    recycled: usize,
    log: Logger,
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("open", &self.session.is_some())
            .field("recycled", &self.recycled)
            .finish_non_exhaustive()
    }
}

impl SessionHandle {
    /// Launch a session and take ownership of it
    pub fn open(launcher: Box<dyn SessionLauncher>, log: Logger) -> Result<Self, SessionError> {
        let session = launcher.launch()?;
        log.info(format_args!("Web session started"));
        Ok(Self {
            launcher,
            session: Some(session),
            recycled: 0,
            log,
        })
    }

    /// The live session
    pub fn session(&mut self) -> Result<&mut (dyn WebSession + 'static), SessionError> {
        self.session.as_deref_mut().ok_or(SessionError::Closed)
    }

    /// Whether a session is currently held
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Number of times the session has been replaced
    #[must_use]
    pub const fn recycled(&self) -> usize {
        self.recycled
    }

    /// Quit the current session, wait `pause`, and launch a replacement
    ///
    /// If the relaunch fails the handle is left closed and later checks
    /// see [`SessionError::Closed`].
    pub fn recycle(&mut self, pause: Duration) -> Result<(), SessionError> {
        self.log.info(format_args!("Recycling web session"));
        self.quit_current();
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
        let session = self.launcher.launch()?;
        self.session = Some(session);
        self.recycled += 1;
        Ok(())
    }

    /// Release the session; calling it again is a no-op
    pub fn close(&mut self) {
        if self.session.is_some() {
            self.quit_current();
            self.log.info(format_args!("Web session closed"));
        }
    }

    fn quit_current(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if let Err(e) = session.quit() {
            self.log.error(format_args!("Error closing web session: {e}"));
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.close();
    }
}
