pub mod guidance;
pub mod quality;
pub mod reference;
pub mod skill;

pub use reference::{format_api_reference, DEFAULT_MAX_PER_CATEGORY};
pub use skill::render_skill;
