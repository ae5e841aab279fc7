//! Web session port
//!
//! The minimal browser surface the checkers drive: navigation, element
//! lookup, form input, clicks and text reads. Bounded waits are built on top
//! of these primitives as default methods, so every implementation (the
//! WebDriver client, test doubles) gets identical polling behaviour.

use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// WebDriver key code for Enter, sent through [`WebSession::send_keys`]
pub const ENTER_KEY: &str = "\u{E007}";

/// Errors raised by a web session
#[derive(Debug, Error)]
pub enum SessionError {
    /// No element matched the locator
    #[error("no element matches {0}")]
    NoSuchElement(String),

    /// A bounded wait expired
    #[error("timed out after {after:?} waiting for {what}")]
    Timeout {
        /// What was being waited for
        what: String,
        /// The bound that expired
        after: Duration,
    },

    /// The browser could not be started
    #[error("failed to launch browser: {0}")]
    Launch(String),

    /// The session was already released
    #[error("web session is closed")]
    Closed,

    /// The driver rejected a command
    #[error("webdriver error '{error}': {message}")]
    Protocol {
        /// W3C error code
        error: String,
        /// Driver-supplied message
        message: String,
    },

    /// The driver could not be reached
    #[error("webdriver transport error: {0}")]
    Transport(String),
}

impl SessionError {
    /// Whether the error means "the thing is not on the page (yet)"
    #[must_use]
    pub fn is_absence(&self) -> bool {
        match self {
            Self::NoSuchElement(_) | Self::Timeout { .. } => true,
            Self::Protocol { error, .. } => error == "no such element" || error == "stale element reference",
            _ => false,
        }
    }

    /// Whether the error is an expired wait
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// How to find elements on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// CSS selector
    Css(String),
    /// XPath expression
    XPath(String),
}

impl Locator {
    /// CSS selector locator
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// XPath locator
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css '{s}'"),
            Self::XPath(s) => write!(f, "xpath '{s}'"),
        }
    }
}

/// Opaque reference to an element in the current page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub String);

/// Upper bound and polling interval for a wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wait {
    /// Give up after this long
    pub timeout: Duration,
    /// Delay between polls
    pub poll: Duration,
}

impl Wait {
    /// A wait of `timeout`, polling every `poll`
    #[must_use]
    pub const fn new(timeout: Duration, poll: Duration) -> Self {
        Self { timeout, poll }
    }

    /// Poll `attempt` until it yields a value or the bound expires
    ///
    /// The attempt always runs at least once. Absence errors are retried; any
    /// other error ends the wait immediately.
    fn until<T>(
        self,
        what: impl Fn() -> String,
        mut attempt: impl FnMut() -> Result<Option<T>, SessionError>,
    ) -> Result<T, SessionError> {
        // No deadline when the timeout is too large to represent.
        let deadline = Instant::now().checked_add(self.timeout);
        loop {
            match attempt() {
                Ok(Some(found)) => return Ok(found),
                Ok(None) => {},
                Err(e) if e.is_absence() => {},
                Err(e) => return Err(e),
            }
            if deadline.is_some_and(|at| Instant::now() >= at) {
                return Err(SessionError::Timeout {
                    what: what(),
                    after: self.timeout,
                });
            }
            if !self.poll.is_zero() {
                thread::sleep(self.poll);
            }
        }
    }
}

/// A live browser session
pub trait WebSession {
    /// Load `url` in the current window
    fn navigate(&mut self, url: &str) -> Result<(), SessionError>;

    /// All elements matching `locator`, possibly none
    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementId>, SessionError>;

    /// All descendants of `parent` matching `locator`
    fn find_within(&mut self, parent: &ElementId, locator: &Locator) -> Result<Vec<ElementId>, SessionError>;

    /// Clear a text input
    fn clear(&mut self, element: &ElementId) -> Result<(), SessionError>;

    /// Type `text` into an element
    fn send_keys(&mut self, element: &ElementId, text: &str) -> Result<(), SessionError>;

    /// Click an element
    fn click(&mut self, element: &ElementId) -> Result<(), SessionError>;

    /// Rendered text of an element
    fn text(&mut self, element: &ElementId) -> Result<String, SessionError>;

    /// Whether an element is displayed
    fn is_displayed(&mut self, element: &ElementId) -> Result<bool, SessionError>;

    /// End the session and close the browser
    fn quit(&mut self) -> Result<(), SessionError>;

    /// First element matching `locator`
    fn find(&mut self, locator: &Locator) -> Result<ElementId, SessionError> {
        self.find_all(locator)?
            .into_iter()
            .next()
            .ok_or_else(|| SessionError::NoSuchElement(locator.to_string()))
    }

    /// Wait until at least one element matches `locator`
    fn wait_present(&mut self, locator: &Locator, wait: Wait) -> Result<Vec<ElementId>, SessionError> {
        wait.until(
            || format!("presence of {locator}"),
            || {
                let found = self.find_all(locator)?;
                Ok((!found.is_empty()).then_some(found))
            },
        )
    }

    /// Wait until an element matching `locator` is displayed
    fn wait_visible(&mut self, locator: &Locator, wait: Wait) -> Result<ElementId, SessionError> {
        wait.until(
            || format!("visibility of {locator}"),
            || {
                for element in self.find_all(locator)? {
                    if self.is_displayed(&element)? {
                        return Ok(Some(element));
                    }
                }
                Ok(None)
            },
        )
    }

    /// Wait until any of `locators` matches
    ///
    /// Returns the index of the first matching locator (in slice order) and
    /// its first element.
    fn wait_any(&mut self, locators: &[Locator], wait: Wait) -> Result<(usize, ElementId), SessionError> {
        wait.until(
            || {
                let names: Vec<String> = locators.iter().map(Locator::to_string).collect();
                format!("any of [{}]", names.join(", "))
            },
            || {
                for (index, locator) in locators.iter().enumerate() {
                    if let Some(element) = self.find_all(locator)?.into_iter().next() {
                        return Ok(Some((index, element)));
                    }
                }
                Ok(None)
            },
        )
    }

    /// Wait until any of `locators` has a displayed element
    ///
    /// Like [`WebSession::wait_any`], but elements present in the page and
    /// hidden do not count.
    fn wait_any_visible(&mut self, locators: &[Locator], wait: Wait) -> Result<(usize, ElementId), SessionError> {
        wait.until(
            || {
                let names: Vec<String> = locators.iter().map(Locator::to_string).collect();
                format!("visibility of any of [{}]", names.join(", "))
            },
            || {
                for (index, locator) in locators.iter().enumerate() {
                    for element in self.find_all(locator)? {
                        if self.is_displayed(&element)? {
                            return Ok(Some((index, element)));
                        }
                    }
                }
                Ok(None)
            },
        )
    }
}

/// Starts browser sessions
///
/// Held by the session handle so a checker can ask for a fresh browser
/// without knowing how one is built.
pub trait SessionLauncher {
    /// Start a new session
    fn launch(&self) -> Result<Box<dyn WebSession>, SessionError>;
}
