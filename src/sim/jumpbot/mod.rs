//! Jumpbot: the platformer
//!
//! A robot walks, runs and double-jumps across static platform tables,
//! grabs every coin to open the portal, and avoids patrolling monsters.

pub mod level;
pub mod monster;
pub mod pickups;
pub mod robot;
pub mod screens;
pub mod state;
pub mod tick;
pub mod world;

pub use level::{LEVELS, LevelData, TOTAL_LEVELS};
pub use monster::{Monster, PatrolPath};
pub use pickups::{Coin, CoinState, Portal};
pub use robot::{HorizontalLock, Robot, RobotState};
pub use state::JumpbotState;
pub use tick::tick;
pub use world::build_world;
