//! WebDriver-backed web sessions
//!
//! Talks the W3C WebDriver protocol over HTTP to a running driver
//! (chromedriver, geckodriver or a Selenium server). The driver must be
//! started separately; its address comes from `session.webdriver_url`.

mod capabilities;
mod protocol;

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use serde_json::{Value, json};

pub use capabilities::{browser_args, capabilities};

use crate::config::SessionConfig;
use crate::core::ports::{ElementId, Locator, SessionError, SessionLauncher, WebSession};
use crate::logging::Logger;

fn transport(err: &reqwest::Error) -> SessionError {
    SessionError::Transport(err.to_string())
}

fn send(client: &Client, method: Method, url: &str, body: Option<&Value>) -> Result<Value, SessionError> {
    let request = client.request(method, url);
    let request = match body {
        Some(body) => request.json(body),
        None => request,
    };
    let response = request.send().map_err(|e| transport(&e))?;
    let payload: Value = response.json().map_err(|e| transport(&e))?;
    protocol::unwrap_value(payload)
}

/// Starts sessions on a WebDriver endpoint
#[derive(Debug, Clone)]
pub struct WebDriverLauncher {
    endpoint: String,
    capabilities: Value,
    request_timeout: Duration,
    log: Logger,
}

impl WebDriverLauncher {
    /// Launcher for the driver and browser described by `config`
    #[must_use]
    pub fn from_config(config: &SessionConfig, log: Logger) -> Self {
        Self {
            endpoint: config.webdriver_url.trim_end_matches('/').to_string(),
            capabilities: capabilities(config),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            log,
        }
    }

    /// Capabilities sent with every new-session request
    #[must_use]
    pub const fn capabilities(&self) -> &Value {
        &self.capabilities
    }
}

impl SessionLauncher for WebDriverLauncher {
    fn launch(&self) -> Result<Box<dyn WebSession>, SessionError> {
        let client = Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| SessionError::Launch(e.to_string()))?;
        let url = format!("{}/session", self.endpoint);
        let value = send(&client, Method::POST, &url, Some(&self.capabilities)).map_err(|e| match e {
            SessionError::Transport(reason) => {
                SessionError::Launch(format!("cannot reach webdriver at {}: {reason}", self.endpoint))
            },
            other => other,
        })?;
        let id = protocol::session_id(&value)?;
        self.log.debug(format_args!("WebDriver session {id} started"));
        Ok(Box::new(WebDriverSession {
            client,
            base: format!("{url}/{id}"),
            open: true,
            log: self.log.clone(),
        }))
    }
}

/// A live WebDriver session
#[derive(Debug)]
pub struct WebDriverSession {
    client: Client,
    base: String,
    open: bool,
    log: Logger,
}

impl WebDriverSession {
    fn command(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, SessionError> {
        if !self.open {
            return Err(SessionError::Closed);
        }
        send(&self.client, method, &format!("{}{path}", self.base), body)
    }

    fn element_command(&self, element: &ElementId, action: &str, body: Option<&Value>) -> Result<Value, SessionError> {
        let method = if body.is_some() { Method::POST } else { Method::GET };
        self.command(method, &format!("/element/{}/{action}", element.0), body)
    }
}

impl WebSession for WebDriverSession {
    fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        self.log.debug(format_args!("Navigating to {url}"));
        self.command(Method::POST, "/url", Some(&json!({ "url": url })))?;
        Ok(())
    }

    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        let value = self.command(Method::POST, "/elements", Some(&protocol::locator_body(locator)))?;
        protocol::element_ids(&value)
    }

    fn find_within(&mut self, parent: &ElementId, locator: &Locator) -> Result<Vec<ElementId>, SessionError> {
        let value = self.element_command(parent, "elements", Some(&protocol::locator_body(locator)))?;
        protocol::element_ids(&value)
    }

    fn clear(&mut self, element: &ElementId) -> Result<(), SessionError> {
        self.element_command(element, "clear", Some(&json!({})))?;
        Ok(())
    }

    fn send_keys(&mut self, element: &ElementId, text: &str) -> Result<(), SessionError> {
        self.element_command(element, "value", Some(&json!({ "text": text })))?;
        Ok(())
    }

    fn click(&mut self, element: &ElementId) -> Result<(), SessionError> {
        self.element_command(element, "click", Some(&json!({})))?;
        Ok(())
    }

    fn text(&mut self, element: &ElementId) -> Result<String, SessionError> {
        let value = self.element_command(element, "text", None)?;
        Ok(value.as_str().unwrap_or_default().to_string())
    }

    fn is_displayed(&mut self, element: &ElementId) -> Result<bool, SessionError> {
        let value = self.element_command(element, "displayed", None)?;
        Ok(value.as_bool().unwrap_or(false))
    }

    fn quit(&mut self) -> Result<(), SessionError> {
        if !self.open {
            return Ok(());
        }
        let result = self.command(Method::DELETE, "", None);
        self.open = false;
        result.map(|_| ())
    }
}

impl Drop for WebDriverSession {
    fn drop(&mut self) {
        if self.open
            && let Err(e) = self.quit()
        {
            self.log.warn(format_args!("Failed to end WebDriver session on drop: {e}"));
        }
    }
}
