//! Environment metadata attached to every message.
//!
//! Values are supplied by the host application; this crate only reads them.
//! [`device_name`] is a convenience for hosts that only know a raw machine
//! identifier.

/// Description of the environment the feedback was written in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    /// Operating system name and version, e.g. `"iOS 17.2"`
    pub os_version: String,
    /// Human readable device name, e.g. `"iPhone 15 Pro"`
    pub device_name: String,
    /// Host application version, if known
    pub app_version: Option<String>,
}

impl Metadata {
    /// Creates metadata without an app version.
    #[must_use]
    pub fn new(os_version: impl Into<String>, device_name: impl Into<String>) -> Self {
        Self {
            os_version: os_version.into(),
            device_name: device_name.into(),
            app_version: None,
        }
    }

    /// Sets the app version.
    #[must_use]
    pub fn with_app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }
}

/// Machine identifier prefixes reported by simulators.
const SIMULATOR_PREFIXES: [&str; 3] = ["i386", "x86_64", "arm64"];

/// Known Apple machine identifiers.
const DEVICES: &[(&str, &str)] = &[
    ("iPod5,1", "iPod touch (5th generation)"),
    ("iPod7,1", "iPod touch (6th generation)"),
    ("iPod9,1", "iPod touch (7th generation)"),
    ("iPhone3,1", "iPhone 4"),
    ("iPhone3,2", "iPhone 4"),
    ("iPhone3,3", "iPhone 4"),
    ("iPhone4,1", "iPhone 4s"),
    ("iPhone5,1", "iPhone 5"),
    ("iPhone5,2", "iPhone 5"),
    ("iPhone5,3", "iPhone 5c"),
    ("iPhone5,4", "iPhone 5c"),
    ("iPhone6,1", "iPhone 5s"),
    ("iPhone6,2", "iPhone 5s"),
    ("iPhone7,2", "iPhone 6"),
    ("iPhone7,1", "iPhone 6 Plus"),
    ("iPhone8,1", "iPhone 6s"),
    ("iPhone8,2", "iPhone 6s Plus"),
    ("iPhone8,4", "iPhone SE"),
    ("iPhone9,1", "iPhone 7"),
    ("iPhone9,3", "iPhone 7"),
    ("iPhone9,2", "iPhone 7 Plus"),
    ("iPhone9,4", "iPhone 7 Plus"),
    ("iPhone10,1", "iPhone 8"),
    ("iPhone10,4", "iPhone 8"),
    ("iPhone10,2", "iPhone 8 Plus"),
    ("iPhone10,5", "iPhone 8 Plus"),
    ("iPhone10,3", "iPhone X"),
    ("iPhone10,6", "iPhone X"),
    ("iPhone11,2", "iPhone XS"),
    ("iPhone11,4", "iPhone XS Max"),
    ("iPhone11,6", "iPhone XS Max"),
    ("iPhone11,8", "iPhone XR"),
    ("iPhone12,1", "iPhone 11"),
    ("iPhone12,3", "iPhone 11 Pro"),
    ("iPhone12,5", "iPhone 11 Pro Max"),
    ("iPhone12,8", "iPhone SE (2nd generation)"),
    ("iPhone13,1", "iPhone 12 mini"),
    ("iPhone13,2", "iPhone 12"),
    ("iPhone13,3", "iPhone 12 Pro"),
    ("iPhone13,4", "iPhone 12 Pro Max"),
    ("iPhone14,4", "iPhone 13 mini"),
    ("iPhone14,5", "iPhone 13"),
    ("iPhone14,2", "iPhone 13 Pro"),
    ("iPhone14,3", "iPhone 13 Pro Max"),
    ("iPhone14,6", "iPhone SE (3rd generation)"),
    ("iPhone14,7", "iPhone 14"),
    ("iPhone14,8", "iPhone 14 Plus"),
    ("iPhone15,2", "iPhone 14 Pro"),
    ("iPhone15,3", "iPhone 14 Pro Max"),
    ("iPhone16,1", "iPhone 15"),
    ("iPhone16,2", "iPhone 15 Plus"),
    ("iPhone16,3", "iPhone 15 Pro"),
    ("iPhone16,4", "iPhone 15 Pro Max"),
    ("iPhone17,1", "iPhone 16"),
    ("iPhone17,2", "iPhone 16 Plus"),
    ("iPhone17,3", "iPhone 16 Pro"),
    ("iPhone17,4", "iPhone 16 Pro Max"),
    ("iPad2,1", "iPad 2"),
    ("iPad2,2", "iPad 2"),
    ("iPad2,3", "iPad 2"),
    ("iPad2,4", "iPad 2"),
    ("iPad3,1", "iPad (3rd generation)"),
    ("iPad3,2", "iPad (3rd generation)"),
    ("iPad3,3", "iPad (3rd generation)"),
    ("iPad3,4", "iPad (4th generation)"),
    ("iPad3,5", "iPad (4th generation)"),
    ("iPad3,6", "iPad (4th generation)"),
    ("iPad6,11", "iPad (5th generation)"),
    ("iPad6,12", "iPad (5th generation)"),
    ("iPad7,5", "iPad (6th generation)"),
    ("iPad7,6", "iPad (6th generation)"),
    ("iPad7,11", "iPad (7th generation)"),
    ("iPad7,12", "iPad (7th generation)"),
    ("iPad11,6", "iPad (8th generation)"),
    ("iPad11,7", "iPad (8th generation)"),
    ("iPad12,1", "iPad (9th generation)"),
    ("iPad12,2", "iPad (9th generation)"),
    ("iPad13,18", "iPad (10th generation)"),
    ("iPad13,19", "iPad (10th generation)"),
    ("iPad14,1", "iPad mini (6th generation)"),
    ("iPad15,1", "iPad (11th generation)"),
    ("iPad15,2", "iPad (12th generation)"),
    ("iPad16,1", "iPad Air (6th generation)"),
    ("iPad17,1", "iPad Pro (11-inch) (5th generation)"),
    ("iPad17,2", "iPad Pro (12.9-inch) (7th generation)"),
    ("AppleTV5,3", "Apple TV 4"),
    ("AppleTV6,2", "Apple TV 4K"),
    ("AppleTV11,1", "Apple TV 4K (2nd generation)"),
    ("AppleTV14,1", "Apple TV 4K (3rd generation)"),
];

/// Maps a machine identifier (e.g. `"iPhone16,1"`) to a device name.
///
/// Simulator identifiers resolve to `"Simulator <model>"`, where `<model>` is
/// the mapped `simulator_model` or `"iOS"` when none is given. Unknown
/// identifiers are returned unchanged.
#[must_use]
pub fn device_name(identifier: &str, simulator_model: Option<&str>) -> String {
    if let Some(name) = lookup(identifier) {
        return name.to_string();
    }

    if SIMULATOR_PREFIXES
        .iter()
        .any(|prefix| identifier.starts_with(prefix))
    {
        let model = simulator_model.unwrap_or("iOS");
        let inner = lookup(model).unwrap_or(model);
        return format!("Simulator {inner}");
    }

    identifier.to_string()
}

fn lookup(identifier: &str) -> Option<&'static str> {
    DEVICES
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, name)| *name)
}
