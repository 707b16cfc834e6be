//! Browser capability sniffing from the user-agent string.
//!
//! The glass effect relies on `backdrop-filter` plus SVG displacement,
//! which only renders faithfully in desktop Chrome.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

const MOBILE_TOKENS: [&str; 8] = ["Mobi", "Android", "iPhone", "iPad", "iPod", "Mobile", "Tablet", "Touch"];

/// Chromium forks that also advertise `Chrome/`.
const NOT_CHROME_TOKENS: [&str; 3] = ["Edge/", "Edg/", "OPR/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub desktop: bool,
    pub chrome: bool,
}

impl Capabilities {
    #[must_use]
    pub fn supported(self) -> bool {
        self.desktop && self.chrome
    }
}

#[must_use]
pub fn detect(user_agent: &str) -> Capabilities {
    let desktop = !MOBILE_TOKENS.iter().any(|t| user_agent.contains(t));
    let chrome = user_agent.contains("Chrome/") && !NOT_CHROME_TOKENS.iter().any(|t| user_agent.contains(t));
    Capabilities { desktop, chrome }
}
