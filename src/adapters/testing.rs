//! Scripted pages for exercising adapters without a browser

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::ports::{ElementId, Locator, SessionError, SessionLauncher, WebSession};
use crate::core::services::SessionHandle;
use crate::logging::Logger;

/// Page state: which elements each selector resolves to, and what happened
#[derive(Debug, Default, Clone)]
pub struct ScriptedPage {
    elements: HashMap<String, Vec<String>>,
    failing: HashMap<String, String>,
    hidden: Vec<String>,
    pub typed: Vec<(String, String)>,
    pub clicked: Vec<String>,
    pub visited: Vec<String>,
    pub quits: usize,
}

fn key(locator: &Locator) -> String {
    match locator {
        Locator::Css(s) | Locator::XPath(s) => s.clone(),
    }
}

fn split(element: &ElementId) -> (&str, usize) {
    let (selector, index) = element.0.rsplit_once('#').unwrap_or((element.0.as_str(), "0"));
    (selector, index.parse().unwrap_or(0))
}

impl ScriptedPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// `selector` resolves to one element per entry of `texts`
    pub fn with(mut self, selector: &str, texts: &[&str]) -> Self {
        self.elements
            .insert(selector.to_string(), texts.iter().map(ToString::to_string).collect());
        self
    }

    /// `selector` resolves to a single element with empty text
    pub fn with_element(self, selector: &str) -> Self {
        self.with(selector, &[""])
    }

    /// Lookups of `selector` fail with a protocol error
    pub fn failing(mut self, selector: &str, error: &str) -> Self {
        self.failing.insert(selector.to_string(), error.to_string());
        self
    }

    /// Elements of `selector` report as not displayed
    pub fn hidden(mut self, selector: &str) -> Self {
        self.hidden.push(selector.to_string());
        self
    }

    /// Everything typed into elements of `selector`, concatenated
    pub fn typed_into(&self, selector: &str) -> String {
        self.typed
            .iter()
            .filter(|(element, _)| split(&ElementId(element.clone())).0 == selector)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// Whether any element of `selector` was clicked
    pub fn was_clicked(&self, selector: &str) -> bool {
        self.clicked.iter().any(|element| split(&ElementId(element.clone())).0 == selector)
    }
}

impl WebSession for ScriptedPage {
    fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        self.visited.push(url.to_string());
        Ok(())
    }

    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        let selector = key(locator);
        if let Some(error) = self.failing.get(&selector) {
            return Err(SessionError::Protocol {
                error: error.clone(),
                message: selector,
            });
        }
        let count = self.elements.get(&selector).map_or(0, Vec::len);
        Ok((0..count).map(|i| ElementId(format!("{selector}#{i}"))).collect())
    }

    /// Descendants are scripted as `"<parent selector> <child selector>"`
    fn find_within(&mut self, parent: &ElementId, locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        let (selector, _) = split(parent);
        let nested = format!("{selector} {}", key(locator));
        self.find_all(&Locator::Css(nested))
    }

    fn clear(&mut self, _element: &ElementId) -> Result<(), SessionError> {
        Ok(())
    }

    fn send_keys(&mut self, element: &ElementId, text: &str) -> Result<(), SessionError> {
        self.typed.push((element.0.clone(), text.to_string()));
        Ok(())
    }

    fn click(&mut self, element: &ElementId) -> Result<(), SessionError> {
        self.clicked.push(element.0.clone());
        Ok(())
    }

    fn text(&mut self, element: &ElementId) -> Result<String, SessionError> {
        let (selector, index) = split(element);
        Ok(self
            .elements
            .get(selector)
            .and_then(|texts| texts.get(index))
            .cloned()
            .unwrap_or_default())
    }

    fn is_displayed(&mut self, element: &ElementId) -> Result<bool, SessionError> {
        let (selector, _) = split(element);
        Ok(!self.hidden.iter().any(|h| h == selector))
    }

    fn quit(&mut self) -> Result<(), SessionError> {
        self.quits += 1;
        Ok(())
    }
}

/// Session view of a page the test keeps a handle on
struct SharedPage(Rc<RefCell<ScriptedPage>>);

impl WebSession for SharedPage {
    fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        self.0.borrow_mut().navigate(url)
    }
    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        self.0.borrow_mut().find_all(locator)
    }
    fn find_within(&mut self, parent: &ElementId, locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        self.0.borrow_mut().find_within(parent, locator)
    }
    fn clear(&mut self, element: &ElementId) -> Result<(), SessionError> {
        self.0.borrow_mut().clear(element)
    }
    fn send_keys(&mut self, element: &ElementId, text: &str) -> Result<(), SessionError> {
        self.0.borrow_mut().send_keys(element, text)
    }
    fn click(&mut self, element: &ElementId) -> Result<(), SessionError> {
        self.0.borrow_mut().click(element)
    }
    fn text(&mut self, element: &ElementId) -> Result<String, SessionError> {
        self.0.borrow_mut().text(element)
    }
    fn is_displayed(&mut self, element: &ElementId) -> Result<bool, SessionError> {
        self.0.borrow_mut().is_displayed(element)
    }
    fn quit(&mut self) -> Result<(), SessionError> {
        self.0.borrow_mut().quit()
    }
}

/// Every launch hands out the same shared page
struct ScriptedLauncher {
    page: Rc<RefCell<ScriptedPage>>,
    launches: Rc<Cell<usize>>,
}

impl SessionLauncher for ScriptedLauncher {
    fn launch(&self) -> Result<Box<dyn WebSession>, SessionError> {
        self.launches.set(self.launches.get() + 1);
        Ok(Box::new(SharedPage(Rc::clone(&self.page))))
    }
}

/// A session handle over `page`, plus handles on the page and launch count
pub struct Harness {
    pub handle: SessionHandle,
    pub page: Rc<RefCell<ScriptedPage>>,
    pub launches: Rc<Cell<usize>>,
}

impl Harness {
    pub fn new(page: ScriptedPage) -> Self {
        let page = Rc::new(RefCell::new(page));
        let launches = Rc::new(Cell::new(0));
        let launcher = ScriptedLauncher {
            page: Rc::clone(&page),
            launches: Rc::clone(&launches),
        };
        let handle = SessionHandle::open(Box::new(launcher), Logger::root()).expect("scripted launch");
        Self { handle, page, launches }
    }

    /// Swap in a different page state between checks
    pub fn script(&self, page: ScriptedPage) {
        *self.page.borrow_mut() = page;
    }
}
