//! Coins and the exit portal

use glam::Vec2;

use crate::renderer::{Canvas, Sprite, SpriteDraw};
use crate::sim::geometry::Rect;

pub const COIN_SIZE: Vec2 = Vec2::new(40.0, 40.0);
/// Pixels a grabbed coin rises per frame
pub const COIN_RISE: f32 = 2.0;
/// Grabbed coins stop rising above this y
pub const COIN_RISE_LIMIT: f32 = -100.0;
pub const COIN_FADE_STEP: f32 = 2.5;

pub const PORTAL_SIZE: Vec2 = Vec2::new(64.0, 96.0);
pub const PORTAL_HITBOX: Vec2 = Vec2::new(15.0, 20.0);

/// Lightness runs 0..=100, like an HSL lightness percentage
const FULL_LIGHTNESS: f32 = 100.0;

/// Coin lifecycle; never goes backwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoinState {
    Idle,
    /// Latched this frame, still drawn normally
    Grabbed,
    /// Rising and fading out
    Fading { lightness: f32 },
}

#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: Vec2,
    pub state: CoinState,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            state: CoinState::Idle,
        }
    }

    pub fn is_grabbed(&self) -> bool {
        self.state != CoinState::Idle
    }

    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, COIN_SIZE)
    }

    /// Collide with the robot and draw. Returns true on the frame the coin is grabbed.
    pub fn place(&mut self, robot_hitbox: &Rect, canvas: &mut dyn Canvas) -> bool {
        match self.state {
            CoinState::Idle => {
                let grabbed = robot_hitbox.overlaps(&self.hitbox());
                if grabbed {
                    self.state = CoinState::Grabbed;
                }
                canvas.sprite(SpriteDraw::new(Sprite::Coin, self.pos, COIN_SIZE));
                grabbed
            }
            CoinState::Grabbed => {
                self.fade(FULL_LIGHTNESS, canvas);
                false
            }
            CoinState::Fading { lightness } => {
                self.fade(lightness, canvas);
                false
            }
        }
    }

    fn fade(&mut self, lightness: f32, canvas: &mut dyn Canvas) {
        if self.pos.y > COIN_RISE_LIMIT {
            self.pos.y -= COIN_RISE;
        }
        let mut draw = SpriteDraw::new(Sprite::Coin, self.pos, COIN_SIZE);
        draw.lightness = lightness / FULL_LIGHTNESS;
        canvas.sprite(draw);
        self.state = CoinState::Fading {
            lightness: (lightness - COIN_FADE_STEP).max(0.0),
        };
    }
}

/// Level exit; only placed once every coin is grabbed
#[derive(Debug, Clone)]
pub struct Portal {
    pub pos: Vec2,
    pub entered: bool,
    pub lightness: f32,
}

impl Portal {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            entered: false,
            lightness: 0.0,
        }
    }

    /// Small box in the middle of the door, snapped to whole pixels
    pub fn hitbox(&self) -> Rect {
        let center = self.pos.floor() + (PORTAL_SIZE / 2.0).floor();
        Rect::at(center - (PORTAL_HITBOX / 2.0).floor(), PORTAL_HITBOX)
    }

    /// Collide and draw with the fade-in applied. Returns `entered`.
    pub fn place(&mut self, robot_hitbox: &Rect, canvas: &mut dyn Canvas) -> bool {
        if !self.entered {
            self.entered = robot_hitbox.overlaps(&self.hitbox());
        }

        let mut draw = SpriteDraw::new(Sprite::Portal, self.pos, PORTAL_SIZE);
        draw.lightness = self.lightness / FULL_LIGHTNESS;
        canvas.sprite(draw);
        self.lightness = (self.lightness + 1.0).min(FULL_LIGHTNESS);

        self.entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawList;

    #[test]
    fn test_coin_latches_and_fades() {
        let mut coin = Coin::new(Vec2::new(500.0, 600.0));
        let mut canvas = DrawList::new();
        let far = Rect::new(0.0, 0.0, 10.0, 10.0);
        let near = Rect::new(510.0, 610.0, 38.0, 76.0);

        assert!(!coin.place(&far, &mut canvas));
        assert!(!coin.is_grabbed());

        assert!(coin.place(&near, &mut canvas));
        assert_eq!(coin.state, CoinState::Grabbed);
        assert_eq!(coin.pos.y, 600.0);

        // Grabbing never fires twice, even while still overlapping
        assert!(!coin.place(&near, &mut canvas));
        assert_eq!(coin.pos.y, 598.0);
        assert_eq!(coin.state, CoinState::Fading { lightness: 97.5 });

        for _ in 0..1000 {
            coin.place(&near, &mut canvas);
            assert!(coin.is_grabbed());
        }
        assert_eq!(coin.state, CoinState::Fading { lightness: 0.0 });
        assert!(coin.pos.y <= COIN_RISE_LIMIT && coin.pos.y > COIN_RISE_LIMIT - COIN_RISE);
    }

    #[test]
    fn test_portal_fade_in_and_entry() {
        let mut portal = Portal::new(Vec2::new(1150.0, 575.0));
        let mut canvas = DrawList::new();
        // Odd width: the half width rounds down, like the sprite's integer rect
        assert_eq!(portal.hitbox(), Rect::new(1175.0, 613.0, 15.0, 20.0));

        let away = Rect::new(0.0, 589.0, 38.0, 76.0);
        for _ in 0..150 {
            assert!(!portal.place(&away, &mut canvas));
        }
        assert_eq!(portal.lightness, 100.0);
        let first = canvas.sprites().next().map(|d| d.lightness);
        assert_eq!(first, Some(0.0));

        let inside = Rect::new(1160.0, 589.0, 38.0, 76.0);
        assert!(portal.place(&inside, &mut canvas));
        assert!(portal.place(&away, &mut canvas));
    }
}
