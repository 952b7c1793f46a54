//! Core types module - shared data structures, constants and boundary traits
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the simulation core, the terminal adapters and the tests.
//!
//! # Braille geometry
//!
//! One terminal glyph covers a 2x4 block of pseudo-pixels:
//!
//! ~~~text
//!   ,___,
//!   |1 4|      dot bits:  0x01 0x08
//!   |2 5|                 0x02 0x10
//!   |3 6|                 0x04 0x20
//!   |7 8|                 0x40 0x80
//!   `````
//! ~~~
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BRAILLE_OFFSET` | 0x2800 | Codepoint of the empty Braille pattern |
//! | `H_STEP` | 2 | Pixels per glyph horizontally |
//! | `V_STEP` | 4 | Pixels per glyph vertically |
//!
//! # Examples
//!
//! ```
//! use tui_shooter_types::{Key, Kind, Sound, H_STEP, V_STEP};
//!
//! assert_eq!(Kind::from_str("bullet"), Some(Kind::Bullet));
//! assert_eq!(Kind::Enemy.as_str(), "Enemy");
//!
//! assert_eq!(Key::from_char('w'), Some(Key::Up));
//! assert_eq!(Sound::SpiderHit.as_str(), "spider_hit");
//!
//! assert_eq!((H_STEP, V_STEP), (2, 4));
//! ```

use std::io;

/// Codepoint of the blank Braille pattern (U+2800)
pub const BRAILLE_OFFSET: u32 = 0x2800;

/// Glyph cell width in pixels
pub const H_STEP: usize = 2;

/// Glyph cell height in pixels
pub const V_STEP: usize = 4;

/// Bit contributed by each dot, indexed `[row][col]` within a cell.
pub const DOT_BITS: [[u8; H_STEP]; V_STEP] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Player vertical step per key press, in pixels
pub const PLAYER_STEP: i32 = 1;

/// Default explosion animation rate
pub const DEFAULT_EXPLOSION_FPS: u32 = 10;

/// Default enemy animation rate
pub const DEFAULT_ENEMY_FPS: u32 = 5;


/// Entity kind tag used for registry lookups, collision rules and dispatch
///
/// The declaration order is also the manager's traversal order, which keeps
/// update and collision scans deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Player,
    Goal,
    Block,
    Enemy,
    Bullet,
    Explosion,
}

impl Kind {
    /// Every kind, in traversal order
    pub const ALL: [Kind; 6] = [
        Kind::Player,
        Kind::Goal,
        Kind::Block,
        Kind::Enemy,
        Kind::Bullet,
        Kind::Explosion,
    ];

    /// Number of kinds
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index in `0..Kind::COUNT`
    pub fn index(&self) -> usize {
        match self {
            Kind::Player => 0,
            Kind::Goal => 1,
            Kind::Block => 2,
            Kind::Enemy => 3,
            Kind::Bullet => 4,
            Kind::Explosion => 5,
        }
    }

    /// Parse kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_shooter_types::Kind;
    ///
    /// assert_eq!(Kind::from_str("Player"), Some(Kind::Player));
    /// assert_eq!(Kind::from_str("GOAL"), Some(Kind::Goal));
    /// assert_eq!(Kind::from_str("wall"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "player" => Some(Kind::Player),
            "goal" => Some(Kind::Goal),
            "block" => Some(Kind::Block),
            "enemy" => Some(Kind::Enemy),
            "bullet" => Some(Kind::Bullet),
            "explosion" => Some(Kind::Explosion),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Player => "Player",
            Kind::Goal => "Goal",
            Kind::Block => "Block",
            Kind::Enemy => "Enemy",
            Kind::Bullet => "Bullet",
            Kind::Explosion => "Explosion",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys recognized by the game
///
/// Absence of a keypress is represented as `Option::<Key>::None` by the
/// input source, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Leave the game immediately
    Quit,
    /// Move the player one pixel up
    Up,
    /// Move the player one pixel down
    Down,
    /// Fire a bullet
    Shoot,
}

impl Key {
    /// Map a plain character to a key
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_shooter_types::Key;
    ///
    /// assert_eq!(Key::from_char('q'), Some(Key::Quit));
    /// assert_eq!(Key::from_char('S'), Some(Key::Down));
    /// assert_eq!(Key::from_char(' '), Some(Key::Shoot));
    /// assert_eq!(Key::from_char('x'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'q' | 'Q' => Some(Key::Quit),
            'w' | 'W' => Some(Key::Up),
            's' | 'S' => Some(Key::Down),
            ' ' => Some(Key::Shoot),
            _ => None,
        }
    }
}

/// Symbolic sound effect names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sound {
    Shoot,
    BlockHit,
    PlayerHit,
    SpiderHit,
}

impl Sound {
    pub const ALL: [Sound; 4] = [
        Sound::Shoot,
        Sound::BlockHit,
        Sound::PlayerHit,
        Sound::SpiderHit,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "shoot" => Some(Sound::Shoot),
            "block_hit" => Some(Sound::BlockHit),
            "player_hit" => Some(Sound::PlayerHit),
            "spider_hit" => Some(Sound::SpiderHit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Shoot => "shoot",
            Sound::BlockHit => "block_hit",
            Sound::PlayerHit => "player_hit",
            Sound::SpiderHit => "spider_hit",
        }
    }
}

/// Outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchResult {
    /// The player reached the goal
    Win,
    /// The player hit a block or an enemy
    Loss,
    /// The run was quit before either happened
    #[default]
    Undetermined,
}

/// Integer 2D point in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance
    pub fn dist2(&self, other: Vec2) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// One rasterized frame, ready for a presentation sink
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Pre-rasterized glyph rows, top to bottom
    pub rows: Vec<String>,
    /// Display attribute index: 0 = terminal default, 1 = configured colors
    pub color_pair: u8,
    /// Terminal cell where row 0 starts (column, row)
    pub origin: (u16, u16),
    /// Optional status line drawn over the first row (FPS in debug mode)
    pub status: Option<String>,
}

/// Non-blocking key source, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> io::Result<Option<Key>>;
}

/// Screen sink for rasterized frames
pub trait Presenter {
    fn present(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Fire-and-forget sound effects
pub trait SoundSink {
    fn play(&mut self, sound: Sound);
}

/// Sound sink that drops every request
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _sound: Sound) {}
}
