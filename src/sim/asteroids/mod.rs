//! Asteroids: catch falling rocks for points, hearts for lives

pub mod falling;
pub mod robot;
pub mod state;
pub mod tick;

pub use falling::{FallingKind, FallingObject};
pub use robot::{CatcherRobot, Stance};
pub use state::AsteroidsState;
pub use tick::tick;
