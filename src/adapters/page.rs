//! Form-driving helpers shared by the page-based checkers

use std::thread;
use std::time::Duration;

use crate::core::ports::{ElementId, Locator, SessionError, Wait, WebSession};

/// Sleep for `pause` unless it is zero
pub fn settle(pause: Duration) {
    if !pause.is_zero() {
        thread::sleep(pause);
    }
}

/// Wait for `locator`, clear it and type `text`
pub fn fill(
    session: &mut dyn WebSession,
    locator: &Locator,
    text: &str,
    wait: Wait,
) -> Result<ElementId, SessionError> {
    let field = first(session.wait_present(locator, wait)?, locator)?;
    session.clear(&field)?;
    session.send_keys(&field, text)?;
    Ok(field)
}

/// Find `locator` and click it
pub fn click(session: &mut dyn WebSession, locator: &Locator) -> Result<(), SessionError> {
    let element = session.find(locator)?;
    session.click(&element)
}

/// Text of every element matching `locator`, in page order
pub fn texts(session: &mut dyn WebSession, locator: &Locator) -> Result<Vec<String>, SessionError> {
    session
        .find_all(locator)?
        .iter()
        .map(|element| session.text(element))
        .collect()
}

fn first(elements: Vec<ElementId>, locator: &Locator) -> Result<ElementId, SessionError> {
    elements
        .into_iter()
        .next()
        .ok_or_else(|| SessionError::NoSuchElement(locator.to_string()))
}

/// Type `text` one character at a time, pausing `delay` after each
pub fn type_slowly(
    session: &mut dyn WebSession,
    element: &ElementId,
    text: &str,
    delay: Duration,
) -> Result<(), SessionError> {
    let mut buffer = [0_u8; 4];
    for character in text.chars() {
        session.send_keys(element, character.encode_utf8(&mut buffer))?;
        settle(delay);
    }
    Ok(())
}
