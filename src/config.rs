use log::Level;

pub const SITE_NAME: &str = "ThinkBit Edge Corp";

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Target of the skip link; the `<main>` element carries this id.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// Viewport width above which the mobile menu is closed on resize.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
