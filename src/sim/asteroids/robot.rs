//! Catcher robot for Asteroids: runs along the window floor and jumps

use glam::Vec2;

use crate::consts::{ROBOT_HEIGHT, ROBOT_WIDTH};
use crate::renderer::Sprite;
use crate::sim::geometry::Rect;
use crate::sim::input::InputState;
use crate::sim::kinematics::{Steering, clamp_to_window, decelerate};

pub const WALK_SPEED: f32 = 2.0;
pub const RUN_BONUS: f32 = 1.0;
pub const JUMP_NUDGE: f32 = 0.5;
pub const DOUBLE_JUMP_NUDGE: f32 = 1.0;
pub const JUMP_HEIGHT: f32 = 13.0;
pub const DOUBLE_JUMP_HEIGHT: f32 = 18.0;
pub const GRAVITY: f32 = 1.0;
pub const HITBOX_SCALE: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Grounded,
    Jumping { double_jumped: bool },
}

#[derive(Debug, Clone)]
pub struct CatcherRobot {
    pub pos: Vec2,
    pub vx: f32,
    pub vy: f32,
    pub stance: Stance,
    floor_y: f32,
    window_width: f32,
}

impl CatcherRobot {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        Self {
            pos: Vec2::new(window_width / 2.0, window_height - ROBOT_HEIGHT),
            vx: 0.0,
            vy: JUMP_HEIGHT,
            stance: Stance::Grounded,
            floor_y: window_height - ROBOT_HEIGHT,
            window_width,
        }
    }

    pub fn reset(&mut self) {
        let window_height = self.floor_y + ROBOT_HEIGHT;
        *self = Self::new(self.window_width, window_height);
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, Vec2::new(ROBOT_WIDTH, ROBOT_HEIGHT)).scale_by(HITBOX_SCALE)
    }

    /// Image for the current jump direction
    pub fn sprite(&self, input: &InputState) -> Sprite {
        if !input.jumping {
            Sprite::Robot
        } else if input.to_right && !input.to_left {
            Sprite::RobotJumpingRight
        } else {
            Sprite::RobotJumpingLeft
        }
    }

    pub fn step(&mut self, input: &mut InputState) {
        let steering = Steering::from_input(input);
        let direction = steering.direction();

        let mut vx = direction * WALK_SPEED;
        if steering.running {
            vx += direction * RUN_BONUS;
        }
        if input.double_jump {
            vx += direction * DOUBLE_JUMP_NUDGE;
        } else if input.jumping {
            vx += direction * JUMP_NUDGE;
        }
        if steering.is_idle() {
            vx += decelerate(self.vx);
        }

        self.pos.x += vx;
        clamp_to_window(&mut self.pos.x, &mut vx, self.window_width - ROBOT_WIDTH);
        self.vx = vx;

        if input.jumping {
            self.jump(input);
        }
    }

    fn jump(&mut self, input: &mut InputState) {
        let double_jumped = match self.stance {
            Stance::Jumping { double_jumped } => double_jumped,
            Stance::Grounded => false,
        };

        self.pos.y -= self.vy;
        self.vy -= GRAVITY;
        self.stance = Stance::Jumping { double_jumped };

        if input.double_jump && !double_jumped {
            self.stance = Stance::Jumping {
                double_jumped: true,
            };
            self.vy = DOUBLE_JUMP_HEIGHT;
        }

        if self.pos.y >= self.floor_y {
            self.pos.y = self.floor_y;
            self.vy = JUMP_HEIGHT;
            self.stance = Stance::Grounded;
            input.clear_jump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ASTEROIDS_WINDOW_HEIGHT, ASTEROIDS_WINDOW_WIDTH};
    use crate::sim::input::Action;

    fn robot() -> CatcherRobot {
        CatcherRobot::new(ASTEROIDS_WINDOW_WIDTH, ASTEROIDS_WINDOW_HEIGHT)
    }

    #[test]
    fn test_starts_centered_on_floor() {
        let robot = robot();
        assert_eq!(robot.pos, Vec2::new(320.0, 394.0));
        let hb = robot.hitbox();
        assert_eq!(hb.center(), Vec2::new(345.0, 437.0));
        assert!((hb.width - 47.5).abs() < 1e-4);
    }

    #[test]
    fn test_jump_arc_returns_to_floor() {
        let mut robot = robot();
        let mut input = InputState::default();
        input.press(Action::Jump);

        let mut peak = robot.pos.y;
        let mut frames = 0;
        while input.jumping && frames < 100 {
            robot.step(&mut input);
            peak = peak.min(robot.pos.y);
            frames += 1;
        }
        assert_eq!(robot.pos.y, 394.0);
        assert_eq!(robot.stance, Stance::Grounded);
        assert_eq!(peak, 394.0 - 91.0);
        assert_eq!(frames, 27);
    }

    #[test]
    fn test_double_jump_nudge() {
        let mut robot = robot();
        let mut input = InputState {
            to_right: true,
            ..Default::default()
        };
        input.press(Action::Jump);
        robot.step(&mut input);
        assert_eq!(robot.vx, WALK_SPEED + JUMP_NUDGE);

        input.press(Action::Jump);
        robot.step(&mut input);
        assert_eq!(robot.vx, WALK_SPEED + DOUBLE_JUMP_NUDGE);
        assert_eq!(robot.vy, DOUBLE_JUMP_HEIGHT);
        assert_eq!(robot.stance, Stance::Jumping { double_jumped: true });
        assert_eq!(robot.sprite(&input), Sprite::RobotJumpingRight);
    }

    #[test]
    fn test_right_border_clamp() {
        let mut robot = robot();
        let mut input = InputState {
            to_right: true,
            running: true,
            ..Default::default()
        };
        for _ in 0..200 {
            robot.step(&mut input);
        }
        assert_eq!(robot.pos.x, ASTEROIDS_WINDOW_WIDTH - ROBOT_WIDTH);
        assert_eq!(robot.vx, 0.0);

        input.to_right = false;
        robot.step(&mut input);
        assert_eq!(robot.vx, 0.0);
    }
}
