/// Time between automatic background theme changes.
pub const THEME_ROTATION_MS: u32 = 20_000;

/// Delay before the background videos are preloaded, so the first paint is not competing with them.
pub const VIDEO_PRELOAD_DELAY_MS: u32 = 2_000;

/// How long a notification banner stays on screen before it starts leaving.
pub const NOTIFICATION_DISPLAY_MS: u32 = 5_000;

/// Length of the exit animation, after which the banner is removed.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Viewports wider than this never show the mobile menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// A section counts as current once the scroll position is within this distance of its top.
pub const SCROLL_LOOKAHEAD_PX: f64 = 200.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_CLASS: &str = "fade-in-up";
pub const REVEAL_SELECTOR: &str = "section, .service-card, .team-card, .about-card";

const DEFAULT_CONTACT_EMAIL: &str = "stratachip@gmail.com";

/// Recipient of every mail draft the site opens.
///
/// Fixed at build time; set `STRATACHIP_CONTACT_EMAIL` when running `trunk build`
/// to point a staging deployment at another inbox.
pub fn get_contact_email() -> &'static str {
    option_env!("STRATACHIP_CONTACT_EMAIL").unwrap_or(DEFAULT_CONTACT_EMAIL)
}

pub fn get_company_name() -> &'static str {
    "Stratachip"
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
