//! Slack emoji shortcodes used in the info context block.

/// Prefix for the device name.
pub const DEVICE: &str = ":iphone:";

/// Prefix for the OS version.
pub const OS_VERSION: &str = ":minidisc:";

/// Prefix for the app version.
pub const APP_VERSION: &str = ":cd:";

/// Prefix for the composition timestamp.
pub const DATE: &str = ":calendar:";

/// Prefix for the user identifier.
pub const USER: &str = ":bust_in_silhouette:";
