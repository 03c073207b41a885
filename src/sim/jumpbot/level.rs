//! Static level tables
//!
//! Every level has five platform rows, lowest first. A row alternates gap
//! pixels and run lengths in build units, always starting with a gap. The
//! lowest row must start with a run at x = 0 so the robot spawns on solid
//! ground.

use super::monster::PatrolPath;

/// Highest playable level; level 0 is a test stage
pub const TOTAL_LEVELS: u32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct LevelData {
    pub platforms: &'static [&'static [i32]],
    pub coins: &'static [(f32, f32)],
    pub monsters: &'static [PatrolPath],
    pub portal: (f32, f32),
}

const fn patrol(start: (f32, f32), end: (f32, f32), speed: f32) -> PatrolPath {
    PatrolPath::new(start, end, speed)
}

pub static LEVELS: [LevelData; TOTAL_LEVELS as usize + 1] = [
    // 0: test stage
    LevelData {
        platforms: &[&[0, 3, 200, 3], &[0], &[0], &[0], &[0]],
        coins: &[(500.0, 500.0), (120.0, 600.0), (800.0, 450.0)],
        monsters: &[patrol((0.0, 0.0), (0.0, 0.0), 0.0)],
        portal: (600.0, 100.0),
    },
    // 1
    LevelData {
        platforms: &[&[0, 12], &[0], &[0], &[0], &[0]],
        coins: &[(500.0, 600.0), (120.0, 600.0), (800.0, 500.0)],
        monsters: &[],
        portal: (1150.0, 575.0),
    },
    // 2
    LevelData {
        platforms: &[&[0, 12], &[0], &[300, 3], &[0], &[0]],
        coins: &[(450.0, 200.0), (120.0, 600.0), (1100.0, 450.0)],
        monsters: &[],
        portal: (500.0, 320.0),
    },
    // 3
    LevelData {
        platforms: &[&[0, 1, 150, 2, 300, 2], &[1200, 1], &[0], &[820, 3], &[500, 1]],
        coins: &[(900.0, 600.0), (1224.0, 400.0), (850.0, 100.0)],
        monsters: &[],
        portal: (520.0, 100.0),
    },
    // 4
    LevelData {
        platforms: &[&[0, 2, 250, 9], &[0], &[700, 3], &[500, 1], &[0]],
        coins: &[(900.0, 600.0), (320.0, 400.0), (500.0, 200.0)],
        monsters: &[
            patrol((600.0, 600.0), (1200.0, 600.0), 2.0),
            patrol((700.0, 300.0), (700.0, 100.0), 1.0),
        ],
        portal: (300.0, 650.0),
    },
    // 5
    LevelData {
        platforms: &[
            &[0, 5, 150, 5],
            &[120, 1, 880, 1],
            &[250, 3, 150, 3],
            &[0, 1, 150, 7, 150, 1],
            &[0],
        ],
        coins: &[(100.0, 300.0), (380.0, 360.0), (890.0, 360.0), (1120.0, 480.0)],
        monsters: &[
            patrol((250.0, 360.0), (1000.0, 360.0), 2.0),
            patrol((110.0, 460.0), (110.0, 100.0), 2.0),
            patrol((1110.0, 100.0), (1110.0, 460.0), 2.0),
        ],
        portal: (630.0, 220.0),
    },
    // 6
    LevelData {
        platforms: &[
            &[0, 1, 250, 1, 700, 2],
            &[130, 2, 140, 2],
            &[380, 1, 260, 1],
            &[520, 2, 250, 1],
            &[0, 4, 700, 2],
        ],
        coins: &[
            (20.0, 130.0),
            (250.0, 240.0),
            (900.0, 10.0),
            (1200.0, 600.0),
            (570.0, 420.0),
        ],
        monsters: &[
            patrol((0.0, 120.0), (400.0, 120.0), 3.0),
            patrol((250.0, 600.0), (1000.0, 100.0), 2.0),
            patrol((1000.0, 600.0), (240.0, 240.0), 2.0),
        ],
        portal: (950.0, 600.0),
    },
    // 7
    LevelData {
        platforms: &[
            &[0, 1, 150, 1, 600, 1],
            &[180, 1, 400, 1],
            &[0, 1, 1000, 2],
            &[800, 3],
            &[180, 1, 850, 2],
        ],
        coins: &[(550.0, 250.0), (990.0, 590.0), (1200.0, 50.0), (180.0, 50.0)],
        monsters: &[
            patrol((750.0, 230.0), (1100.0, 230.0), 1.0),
            patrol((0.0, 25.0), (1220.0, 25.0), 6.0),
            patrol((350.0, 350.0), (550.0, 650.0), 2.0),
        ],
        portal: (270.0, 580.0),
    },
    // 8
    LevelData {
        platforms: &[
            &[0, 1, 250, 1, 250, 1, 250, 1],
            &[1270, 1],
            &[374, 1, 250, 1, 250, 1],
            &[150, 1],
            &[374, 1, 250, 1, 250, 1],
        ],
        coins: &[
            (375.0, 600.0),
            (740.0, 600.0),
            (1110.0, 600.0),
            (375.0, 360.0),
            (740.0, 360.0),
            (1110.0, 360.0),
            (375.0, 120.0),
            (740.0, 120.0),
            (155.0, 240.0),
        ],
        monsters: &[
            patrol((730.0, 0.0), (730.0, 650.0), 3.0),
            patrol((730.0, 0.0), (80.0, 650.0), 3.0),
            patrol((730.0, 0.0), (1110.0, 650.0), 3.0),
        ],
        portal: (1110.0, 100.0),
    },
    // 9
    LevelData {
        platforms: &[
            &[0, 1, 300, 4],
            &[0],
            &[620, 1],
            &[400, 1, 340, 1],
            &[0, 1, 1120, 1],
        ],
        coins: &[(10.0, 100.0), (1230.0, 100.0), (400.0, 220.0), (860.0, 220.0)],
        monsters: &[
            patrol((0.0, 340.0), (540.0, 340.0), 8.0),
            patrol((540.0, 340.0), (0.0, 340.0), 8.0),
            patrol((200.0, 0.0), (200.0, 650.0), 8.0),
            patrol((1240.0, 340.0), (700.0, 340.0), 8.0),
            patrol((700.0, 340.0), (1240.0, 340.0), 8.0),
            patrol((1050.0, 650.0), (1050.0, 0.0), 8.0),
        ],
        portal: (600.0, 580.0),
    },
    // 10
    LevelData {
        platforms: &[
            &[0, 5, 530, 1],
            &[-60, 5],
            &[124, 4, 670, 1],
            &[-60, 5],
            &[124, 4, 300, 1, 250, 1],
        ],
        coins: &[(520.0, 600.0), (130.0, 360.0), (1240.0, 360.0), (910.0, 120.0)],
        monsters: &[
            patrol((300.0, 600.0), (1200.0, 600.0), 3.0),
            patrol((0.0, 480.0), (900.0, 480.0), 2.0),
            patrol((60.0, 360.0), (1200.0, 360.0), 4.0),
            patrol((900.0, 240.0), (0.0, 240.0), 2.0),
            patrol((1200.0, 120.0), (60.0, 120.0), 4.0),
        ],
        portal: (800.0, 550.0),
    },
];

/// Table for `level`, falling back to the test stage for out-of-range indices
pub fn level(level: u32) -> &'static LevelData {
    LEVELS.get(level as usize).unwrap_or(&LEVELS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_spawns_on_ground() {
        for (i, data) in LEVELS.iter().enumerate() {
            assert_eq!(data.platforms.len(), 5, "level {i}");
            let ground = data.platforms[0];
            assert_eq!(ground[0], 0, "level {i}");
            assert!(ground.len() >= 2 && ground[1] >= 1, "level {i}");
            assert!(!data.coins.is_empty(), "level {i}");
        }
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(level(99).portal, LEVELS[0].portal);
        assert_eq!(level(TOTAL_LEVELS).portal, (800.0, 550.0));
    }
}
