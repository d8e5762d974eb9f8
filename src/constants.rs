use crate::core::spotlight::{PulseSpotlightOptions, SpotlightOptions, StaticSpotlightOptions};
use crate::core::surface::Rgba;

/// Particle field and page tuning constants.
///
/// These constants express intended behavior (counts, distances, margins)
/// and keep magic numbers out of the engine and the DOM adapters.
// Particle population
pub const PARTICLE_COUNT_WIDE: usize = 80;
pub const PARTICLE_COUNT_NARROW: usize = 40;
pub const NARROW_VIEWPORT_BREAKPOINT: f64 = 768.0; // widths below this use the narrow count

// Spawn ranges
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f64 = 2.0; // radius in [MIN, MIN + SPAN)
pub const PARTICLE_SPEED_MAX: f64 = 0.2; // each velocity axis in [-MAX, MAX)

// Connections
pub const CONNECTION_DISTANCE: f64 = 150.0;
pub const CONNECTION_ALPHA_MAX: f32 = 0.2;
pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

// Pointer repulsion
pub const POINTER_RADIUS: f64 = 150.0;
pub const REPEL_STEP: f64 = 1.0; // units per axis per frame
pub const EDGE_MARGIN_RADII: f64 = 10.0; // repulsion stops this many radii from an edge

// Colors (r, g, b, alpha)
pub const PARTICLE_RGBA: (u8, u8, u8, f32) = (124, 92, 255, 0.4);
pub const CONNECTION_RGB: (u8, u8, u8) = (0, 212, 255);

// Telemetry
pub const FPS_LOG_INTERVAL_MS: f64 = 1000.0;

// DOM
pub const CANVAS_ID: &str = "bg-canvas";
pub const CANVAS_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
z-index:-1;pointer-events:none;background:transparent;";
pub const PAGE_ATTRIBUTE: &str = "data-page";
pub const PARTICLE_PAGE_ID: &str = "home";

// Theme
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const THEME_TOGGLE_CLASS: &str = "theme-toggle";
pub const THEME_TOGGLE_LABEL: &str = "Toggle Dark Mode";
pub const THEME_TOGGLE_HTML: &str =
    "<span class=\"sun-icon\">\u{1F31E}</span><span class=\"moon-icon\">\u{1F319}</span>";

// Spotlights
pub const SPOTLIGHT_EASING: f64 = 0.1;
pub const SPOTLIGHT_CLASS: &str = "spotlight-effect";
pub const STATIC_SPOTLIGHT_CLASS: &str = "static-spotlight-effect";
pub const PULSE_SPOTLIGHT_CLASS: &str = "pulse-spotlight-effect";
pub const PULSE_KEYFRAMES_ID: &str = "pulse-spotlight-keyframes";
pub const PULSE_ANIMATION: &str = "pulse-spotlight";
pub const PULSE_KEYFRAMES_CSS: &str = "@keyframes pulse-spotlight {\
0%, 100% { transform: translate(-50%, -50%) scale(1); opacity: 0.3; }\
50% { transform: translate(-50%, -50%) scale(1.2); opacity: 0.15; }}";

/// Cursor-following glows, keyed by container selector.
pub const INTERACTIVE_SPOTLIGHTS: [(&str, SpotlightOptions); 3] = [
    (
        ".why",
        SpotlightOptions {
            size: 350.0,
            opacity: 0.25,
            blur: 80.0,
            color: Rgba::new(124, 92, 255, 0.4),
            easing: SPOTLIGHT_EASING,
        },
    ),
    (
        ".stats",
        SpotlightOptions {
            size: 400.0,
            opacity: 0.2,
            blur: 100.0,
            color: Rgba::new(0, 212, 255, 0.3),
            easing: SPOTLIGHT_EASING,
        },
    ),
    (
        ".cta",
        SpotlightOptions {
            size: 350.0,
            opacity: 0.25,
            blur: 90.0,
            color: Rgba::new(124, 92, 255, 0.35),
            easing: SPOTLIGHT_EASING,
        },
    ),
];

pub const STATIC_SPOTLIGHTS: [(&str, StaticSpotlightOptions); 1] = [(
    ".services-preview",
    StaticSpotlightOptions {
        size: 500.0,
        x: "50%",
        y: "-20%",
        blur: 120.0,
        color: Rgba::new(124, 92, 255, 0.15),
    },
)];

pub const PULSE_SPOTLIGHTS: [(&str, PulseSpotlightOptions); 1] = [(
    ".hero",
    PulseSpotlightOptions {
        size: 600.0,
        duration_ms: 4000,
        blur: 100.0,
        color: Rgba::new(124, 92, 255, 0.25),
    },
)];
