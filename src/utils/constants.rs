//! Application constants

pub const PRODUCT_NAME: &str = "AI Bildwerk";
pub const PRODUCT_TAGLINE: &str = "Revolutionäre KI-Bildbearbeitung für kreative Köpfe";

// Contact block (footer)
pub const CONTACT_EMAIL: &str = "info@aibildwerk.de";
pub const CONTACT_PHONE: &str = "+49 (0) 123 456789";

// In-page anchor targets
pub const ANCHOR_FEATURES: &str = "#features";
pub const ANCHOR_UPLOAD: &str = "#upload";
pub const ANCHOR_EXAMPLES: &str = "#examples";
pub const ANCHOR_CONTACT: &str = "#contact";

// UI constants
pub const BACKDROP_ORB_COUNT: u32 = 14;
pub const BACKDROP_MOUNT_DELAY_MS: u32 = 100;
