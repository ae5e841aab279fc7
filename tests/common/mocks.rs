//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for run-level tests without a
//! browser or network. Shared counters are `Rc` handles so a test can keep
//! one side while the run owns the other.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use company_scope::core::models::{CheckVerdict, Jurisdiction};
use company_scope::core::ports::{
    DomainChecker, ElementId, JurisdictionChecker, Locator, SessionError, SessionLauncher, WebSession,
};
use company_scope::core::services::SessionHandle;

/// Launch and quit counts observed by a [`CountingLauncher`]
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    pub launches: Rc<Cell<usize>>,
    pub quits: Rc<Cell<usize>>,
}

impl SessionLog {
    /// Sessions started and not yet quit
    pub fn open_sessions(&self) -> usize {
        self.launches.get() - self.quits.get()
    }
}

/// A page with nothing on it
pub struct BlankSession {
    log: SessionLog,
}

impl WebSession for BlankSession {
    fn navigate(&mut self, _url: &str) -> Result<(), SessionError> {
        Ok(())
    }

    fn find_all(&mut self, _locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        Ok(Vec::new())
    }

    fn find_within(&mut self, _parent: &ElementId, _locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        Ok(Vec::new())
    }

    fn clear(&mut self, _element: &ElementId) -> Result<(), SessionError> {
        Ok(())
    }

    fn send_keys(&mut self, _element: &ElementId, _text: &str) -> Result<(), SessionError> {
        Ok(())
    }

    fn click(&mut self, _element: &ElementId) -> Result<(), SessionError> {
        Ok(())
    }

    fn text(&mut self, _element: &ElementId) -> Result<String, SessionError> {
        Ok(String::new())
    }

    fn is_displayed(&mut self, _element: &ElementId) -> Result<bool, SessionError> {
        Ok(false)
    }

    fn quit(&mut self) -> Result<(), SessionError> {
        self.log.quits.set(self.log.quits.get() + 1);
        Ok(())
    }
}

/// Launcher handing out [`BlankSession`]s and counting their lifecycle
#[derive(Default)]
pub struct CountingLauncher {
    pub log: SessionLog,
}

impl CountingLauncher {
    pub fn new() -> (Self, SessionLog) {
        let launcher = Self::default();
        let log = launcher.log.clone();
        (launcher, log)
    }
}

impl SessionLauncher for CountingLauncher {
    fn launch(&self) -> Result<Box<dyn WebSession>, SessionError> {
        self.log.launches.set(self.log.launches.get() + 1);
        Ok(Box::new(BlankSession { log: self.log.clone() }))
    }
}

/// Launcher whose browser never starts
pub struct FailingLauncher;

impl SessionLauncher for FailingLauncher {
    fn launch(&self) -> Result<Box<dyn WebSession>, SessionError> {
        Err(SessionError::Launch("no browser available".to_string()))
    }
}

/// Jurisdiction checker answering from a table keyed by search token
pub struct ScriptedJurisdictionChecker {
    jurisdiction: Jurisdiction,
    verdicts: HashMap<String, CheckVerdict>,
    panic_on: Option<String>,
    pub seen: Rc<RefCell<Vec<String>>>,
}

impl ScriptedJurisdictionChecker {
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            verdicts: HashMap::new(),
            panic_on: None,
            seen: Rc::default(),
        }
    }

    pub fn answer(mut self, token: &str, verdict: CheckVerdict) -> Self {
        self.verdicts.insert(token.to_string(), verdict);
        self
    }

    /// Panic mid-check when asked about `token`
    pub fn panic_on(mut self, token: &str) -> Self {
        self.panic_on = Some(token.to_string());
        self
    }
}

impl JurisdictionChecker for ScriptedJurisdictionChecker {
    fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    fn check_availability(&mut self, session: &mut SessionHandle, name: &str) -> CheckVerdict {
        self.seen.borrow_mut().push(name.to_string());
        assert!(session.is_open(), "checker ran without a session");
        if self.panic_on.as_deref() == Some(name) {
            panic!("registry page changed layout");
        }
        self.verdicts.get(name).cloned().unwrap_or(CheckVerdict::StatusUnknown)
    }
}

/// Domain checker answering from a table keyed by full domain
#[derive(Default)]
pub struct ScriptedDomainChecker {
    verdicts: HashMap<String, CheckVerdict>,
    pub seen: Rc<RefCell<Vec<String>>>,
}

impl ScriptedDomainChecker {
    pub fn answer(mut self, domain: &str, verdict: CheckVerdict) -> Self {
        self.verdicts.insert(domain.to_string(), verdict);
        self
    }
}

impl DomainChecker for ScriptedDomainChecker {
    fn check_domain(&mut self, _session: &mut SessionHandle, domain: &str) -> CheckVerdict {
        self.seen.borrow_mut().push(domain.to_string());
        self.verdicts.get(domain).cloned().unwrap_or(CheckVerdict::StatusUnknown)
    }
}
