// Browser-local storage keys. Both are last-write-wins string flags.
pub const THEME_STORAGE_KEY: &str = "techvancer-theme";
pub const COOKIE_CONSENT_KEY: &str = "cookies-accepted";

// Mobile browser chrome colors, mirrored into <meta name="theme-color">.
pub const LIGHT_META_COLOR: &str = "#E6F4FF";
pub const DARK_META_COLOR: &str = "#001423";
