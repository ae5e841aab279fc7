//! Session capabilities
//!
//! Translates [`SessionConfig`] into the W3C `capabilities` request body.
//! Chromium-family browsers get their switches through `goog:chromeOptions`;
//! Firefox gets the equivalent prefs through `moz:firefoxOptions`.

use serde_json::{Value, json};

use crate::config::SessionConfig;

/// Switches applied to every Chromium session
const CHROME_ARGS: &[&str] = &[
    "--no-first-run",
    "--no-default-browser-check",
    "--start-maximized",
    "--window-size=1920,1080",
    "--disable-infobars",
    "--disable-logging",
    "--disable-notifications",
    "--disable-default-apps",
    "--disable-popup-blocking",
    "--disable-blink-features=AutomationControlled",
    "--disable-gpu",
    "--accept-lang=en-US,en;q=0.9",
];

fn is_firefox(browser: &str) -> bool {
    browser.eq_ignore_ascii_case("firefox")
}

/// Browser switches for `config`
#[must_use]
pub fn browser_args(config: &SessionConfig) -> Vec<String> {
    if is_firefox(&config.browser) {
        return if config.headless { vec!["-headless".to_string()] } else { vec![] };
    }
    let mut args: Vec<String> = CHROME_ARGS.iter().map(ToString::to_string).collect();
    if let Some(agent) = config.user_agent.as_deref() {
        args.push(format!("--user-agent={agent}"));
    }
    if config.headless {
        args.push("--headless".to_string());
    }
    if let Some(proxy) = config.proxy.server_url() {
        args.push(format!("--proxy-server={proxy}"));
    }
    args
}

/// The `capabilities` body for `POST /session`
#[must_use]
pub fn capabilities(config: &SessionConfig) -> Value {
    let timeouts = json!({
        "implicit": config.implicit_wait_secs.saturating_mul(1000),
        "pageLoad": config.page_load_timeout_secs.saturating_mul(1000),
    });
    let args = browser_args(config);

    let mut always_match = json!({
        "browserName": config.browser.to_lowercase(),
        "timeouts": timeouts,
    });

    if is_firefox(&config.browser) {
        let mut prefs = serde_json::Map::new();
        if let Some(agent) = config.user_agent.as_deref() {
            prefs.insert("general.useragent.override".to_string(), json!(agent));
        }
        prefs.insert("intl.accept_languages".to_string(), json!("en-US, en"));
        always_match["moz:firefoxOptions"] = json!({ "args": args, "prefs": prefs });
        if let (true, Some(host), Some(port)) =
            (config.proxy.enabled, config.proxy.host.as_deref(), config.proxy.port)
        {
            let address = format!("{host}:{port}");
            always_match["proxy"] = json!({
                "proxyType": "manual",
                "httpProxy": address,
                "sslProxy": address,
            });
        }
    } else {
        always_match["goog:chromeOptions"] = json!({
            "args": args,
            "excludeSwitches": ["enable-automation"],
        });
    }

    json!({ "capabilities": { "alwaysMatch": always_match } })
}
