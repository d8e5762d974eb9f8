//! Platform-independent pieces of the backdrop.
//!
//! Nothing in here touches `web_sys`; the web adapters translate browser
//! events and canvas calls into these types, which keeps the physics
//! testable on the host.

pub mod driver;
pub mod field;
pub mod page;
pub mod particles;
pub mod spotlight;
pub mod surface;
pub mod theme;

pub use driver::{FrameDriver, FrameOutcome, FrameStats};
pub use field::{FieldConfig, ParticleField, PointerState};
pub use page::wants_particle_field;
pub use particles::{connection_alpha, Bounds, Particle};
pub use spotlight::{
    PulseSpotlightOptions, Spotlight, SpotlightOptions, StaticSpotlightOptions,
};
pub use surface::{Rgba, Surface};
pub use theme::Theme;
