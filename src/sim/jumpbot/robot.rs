//! Player robot for the platformer
//!
//! Movement is frame-based integer-ish kinematics: a horizontal velocity built
//! from the held keys, a vertical velocity that loses one pixel per frame, and
//! collision resolution against the platform hitboxes of the current frame.

use glam::Vec2;

use crate::consts::{ROBOT_HEIGHT, ROBOT_WIDTH};
use crate::sim::geometry::{Rect, SideOffsets, side_offsets};
use crate::sim::input::InputState;
use crate::sim::kinematics::{Steering, clamp_to_window, decelerate};

pub const WALK_SPEED: f32 = 3.0;
pub const RUN_BONUS: f32 = 1.0;
/// Extra horizontal speed while the jump flag is set
pub const AIR_NUDGE: f32 = 1.0;
pub const JUMP_HEIGHT: f32 = 13.0;
pub const DOUBLE_JUMP_HEIGHT: f32 = 18.0;
pub const GRAVITY: f32 = 1.0;
/// Frames of lost horizontal control after hitting a wall
pub const BUMP_FRAMES: u32 = 15;
/// Frames the robot stays frozen after (re)spawning
pub const SPAWN_FRAMES: u32 = 15;
pub const SPAWN_POINT: Vec2 = Vec2::new(0.0, 579.0);

/// Vertical movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotState {
    /// Frozen, ignoring input until the counter runs out
    Spawning { frames_left: u32 },
    /// Standing on a platform
    Grounded,
    /// Airborne after a jump press
    Jumping { double_jumped: bool },
    /// Airborne after walking off a ledge or a head bump
    Falling { double_jumped: bool },
}

impl RobotState {
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping { .. } | Self::Falling { .. })
    }

    fn double_jumped(&self) -> bool {
        match self {
            Self::Jumping { double_jumped } | Self::Falling { double_jumped } => *double_jumped,
            _ => false,
        }
    }

    fn with_double_jump(self) -> Self {
        match self {
            Self::Falling { .. } => Self::Falling {
                double_jumped: true,
            },
            _ => Self::Jumping {
                double_jumped: true,
            },
        }
    }
}

/// Horizontal control lock after a wall bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalLock {
    Free,
    Bumped { frames_left: u32 },
}

#[derive(Debug, Clone)]
pub struct Robot {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    pub vx: f32,
    pub prev_vx: f32,
    /// Upward velocity, positive means rising
    pub vy: f32,
    pub state: RobotState,
    pub lock: HorizontalLock,
    window_width: f32,
    window_height: f32,
}

impl Robot {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        Self {
            pos: SPAWN_POINT,
            prev_pos: SPAWN_POINT,
            vx: 0.0,
            prev_vx: 0.0,
            vy: JUMP_HEIGHT,
            state: RobotState::Spawning {
                frames_left: SPAWN_FRAMES,
            },
            lock: HorizontalLock::Free,
            window_width,
            window_height,
        }
    }

    /// Back to the spawn point, frozen
    pub fn reset(&mut self) {
        *self = Self::new(self.window_width, self.window_height);
    }

    pub fn size() -> Vec2 {
        Vec2::new(ROBOT_WIDTH, ROBOT_HEIGHT)
    }

    /// Sprite rect shrunk to the visible body
    pub fn hitbox(&self) -> Rect {
        Self::hitbox_at(self.pos)
    }

    fn hitbox_at(pos: Vec2) -> Rect {
        Rect::at(pos, Self::size())
            .inflate(-12.0, -10.0)
            .translate(0.0, 5.0)
    }

    fn offsets(&self, platforms: &[Rect]) -> SideOffsets {
        side_offsets(&self.hitbox(), platforms)
    }

    /// Fell out of the window, or touched a monster last frame
    pub fn is_dead(&self, hit_monster: bool) -> bool {
        self.pos.y > self.window_height || hit_monster
    }

    /// Advance one frame
    pub fn step(&mut self, input: &mut InputState, platforms: &[Rect]) {
        if let RobotState::Spawning { frames_left } = self.state {
            self.state = match frames_left {
                0 => RobotState::Grounded,
                n => RobotState::Spawning { frames_left: n - 1 },
            };
            return;
        }

        let mut steering = Steering::from_input(input);
        if let HorizontalLock::Bumped { frames_left } = self.lock {
            steering = steering.without_direction();
            self.lock = match frames_left {
                0 | 1 => HorizontalLock::Free,
                n => HorizontalLock::Bumped { frames_left: n - 1 },
            };
        }
        self.vx = self.horizontal_velocity(steering, input.jumping);
        self.pos.x += self.vx;

        // Look one pixel down: a -1 bottom offset means a platform is underfoot
        if !input.jumping && !self.state.is_airborne() {
            self.pos.y += 1.0;
            if self.offsets(platforms).bottom != -1.0 {
                self.state = RobotState::Falling {
                    double_jumped: false,
                };
                self.vy = 0.0;
            } else {
                self.vy = JUMP_HEIGHT;
            }
            self.pos.y -= 1.0;
        }

        let offsets = if input.jumping || self.state.is_airborne() {
            self.step_airborne(input, platforms)
        } else {
            self.offsets(platforms)
        };

        if offsets.left != 0.0
            && self.vx < 0.0
            && self.prev_pos.x >= self.pos.x + offsets.left
        {
            self.pos.x += offsets.left;
            self.bump();
        }
        if offsets.right != 0.0
            && self.vx > 0.0
            && self.prev_pos.x <= self.pos.x + offsets.right
        {
            self.pos.x += offsets.right;
            self.bump();
        }

        clamp_to_window(
            &mut self.pos.x,
            &mut self.vx,
            self.window_width - ROBOT_WIDTH,
        );

        self.prev_vx = self.vx;
        self.prev_pos = self.pos;
    }

    fn step_airborne(&mut self, input: &mut InputState, platforms: &[Rect]) -> SideOffsets {
        if self.state == RobotState::Grounded {
            self.state = RobotState::Jumping {
                double_jumped: false,
            };
        }
        if input.double_jump && !self.state.double_jumped() {
            self.state = self.state.with_double_jump();
            self.vy = DOUBLE_JUMP_HEIGHT;
        }

        self.pos.y -= self.vy;
        let offsets = self.offsets(platforms);

        if offsets.top != 0.0 && self.vy >= 0.0 && self.prev_pos.y >= self.pos.y + offsets.top {
            // Head bump: start falling next frame
            self.pos.y += offsets.top;
            self.vy = 0.0;
        } else if offsets.bottom != 0.0
            && self.vy <= 0.0
            && self.prev_pos.y <= self.pos.y + offsets.bottom
        {
            self.pos.y += offsets.bottom;
            self.vy = JUMP_HEIGHT;
            self.state = RobotState::Grounded;
            input.clear_jump();
        } else {
            self.vy -= GRAVITY;
        }

        offsets
    }

    fn bump(&mut self) {
        self.vx = -self.vx;
        self.lock = HorizontalLock::Bumped {
            frames_left: BUMP_FRAMES,
        };
    }

    fn horizontal_velocity(&self, steering: Steering, jumping: bool) -> f32 {
        let direction = steering.direction();
        let mut vx = direction * WALK_SPEED;
        if steering.running {
            vx += direction * RUN_BONUS;
        }
        if jumping {
            vx += direction * AIR_NUDGE;
        }
        if steering.is_idle() {
            vx += decelerate(self.prev_vx);
        }
        vx
    }
}
