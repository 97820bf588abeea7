pub mod choreographer;
pub mod config;
pub mod constants;
pub mod cues;
pub mod error;
pub mod flight;
pub mod geo;
pub mod markers;
pub mod progress;
pub mod rotation;
pub mod scene;
pub mod stage;
pub mod stars;
pub mod state;
pub mod timeline;

pub use choreographer::*;
pub use config::*;
pub use constants::*;
pub use cues::*;
pub use error::*;
pub use flight::*;
pub use geo::*;
pub use markers::*;
pub use progress::*;
pub use rotation::*;
pub use scene::*;
pub use stage::*;
pub use stars::*;
pub use state::*;
pub use timeline::*;
