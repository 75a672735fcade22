//! Platform Detection
//!
//! Classifies the browser user agent into the `platform` analytics tag.

/// Platform tag attached to every analytics event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    DesktopWeb,
    MobileWeb,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::DesktopWeb => "desktop_web",
            Platform::MobileWeb => "mobile_web",
        }
    }
}

const MOBILE_MARKERS: &[&str] = &[
    "android", "iphone", "ipad", "ipod", "mobile", "mobi", "tablet",
];

/// Pure user-agent classification.
pub fn classify_user_agent(user_agent: &str) -> Platform {
    let ua = user_agent.to_lowercase();
    if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
        Platform::MobileWeb
    } else {
        Platform::DesktopWeb
    }
}

/// Detect the platform from the live browser environment. Defaults to
/// desktop when the user agent is unavailable.
pub fn detect() -> Platform {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| classify_user_agent(&ua))
        .unwrap_or(Platform::DesktopWeb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_user_agents() {
        assert_eq!(
            classify_user_agent("Mozilla/5.0 (X11; Linux x86_64) Firefox/128.0"),
            Platform::DesktopWeb
        );
        assert_eq!(
            classify_user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)"),
            Platform::DesktopWeb
        );
    }

    #[test]
    fn test_mobile_user_agents() {
        assert_eq!(
            classify_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"),
            Platform::MobileWeb
        );
        assert_eq!(
            classify_user_agent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"),
            Platform::MobileWeb
        );
        // Marker match is case-insensitive
        assert_eq!(classify_user_agent("SomeBrowser MOBI/1.0"), Platform::MobileWeb);
    }

    #[test]
    fn test_empty_user_agent_is_desktop() {
        assert_eq!(classify_user_agent(""), Platform::DesktopWeb);
    }
}
