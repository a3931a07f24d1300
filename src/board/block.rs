//! Block vocabulary
//!
//! Every tile on the board holds exactly one `Block`. The vocabulary is a
//! closed registry with stable two-character wire codes, plus `Custom` as
//! an escape hatch for tags the registry does not know about.

/// Facing of a one-way wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Backdrop panel flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Cobble,
    Waterfall,
    Skullfall,
    Concrete,
}

/// Everything a tile can hold.
///
/// `Empty` is the absence of content; all other variants fully occupy the
/// tile. `Mask` is the dark-mode marker and is only ever placed on empty
/// tiles. `Note` carries free text that survives the array format but is
/// degraded to a bare `N0` marker by the line format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Empty,
    /// Dark-mode mask circle
    Mask,
    Brick,
    Lock,
    Key,
    Exit,
    SecretExit,
    Spawn,
    OneWay(Direction),
    PipeIn,
    PipeOut,
    PipePhase,
    PipeSolid,
    Toggle { solid: bool },
    Switch,
    SwitchCeiling,
    Scaffold,
    Torch,
    PowerUpBurrow,
    PowerUpRecall,
    Wire,
    Backdrop(Backdrop),
    Note { text: String },
    /// Opaque tag outside the registry; not representable on the wire
    Custom(String),
}

impl Block {
    /// Decode a single registry code. Returns `None` for anything outside
    /// the closed table; callers decide whether that is lenient (line
    /// format) or fatal (array format).
    pub fn from_code(code: &str) -> Option<Block> {
        match code {
            "00" => Some(Block::Empty),
            "A0" => Some(Block::Mask),
            "B0" => Some(Block::Brick),
            "BK" => Some(Block::Lock),
            "IK" => Some(Block::Key),
            "E0" => Some(Block::Exit),
            "E1" => Some(Block::SecretExit),
            "X0" => Some(Block::Spawn),
            "OU" => Some(Block::OneWay(Direction::Up)),
            "OD" => Some(Block::OneWay(Direction::Down)),
            "OL" => Some(Block::OneWay(Direction::Left)),
            "OR" => Some(Block::OneWay(Direction::Right)),
            "CI" => Some(Block::PipeIn),
            "CO" => Some(Block::PipeOut),
            "CP" => Some(Block::PipePhase),
            "CS" => Some(Block::PipeSolid),
            "T0" => Some(Block::Toggle { solid: true }),
            "T1" => Some(Block::Toggle { solid: false }),
            "S0" => Some(Block::Switch),
            "S1" => Some(Block::SwitchCeiling),
            "D0" => Some(Block::Scaffold),
            "D1" => Some(Block::Torch),
            "P0" => Some(Block::PowerUpBurrow),
            "P1" => Some(Block::PowerUpRecall),
            "WR" => Some(Block::Wire),
            "M0" => Some(Block::Backdrop(Backdrop::Cobble)),
            "M1" => Some(Block::Backdrop(Backdrop::Waterfall)),
            "M2" => Some(Block::Backdrop(Backdrop::Skullfall)),
            "M3" => Some(Block::Backdrop(Backdrop::Concrete)),
            "N0" => Some(Block::Note {
                text: String::new(),
            }),
            _ => None,
        }
    }

    /// The wire code for this block.
    ///
    /// Notes lose their payload here (the line format cannot carry it);
    /// `Custom` tags pass through verbatim and will not survive a decode.
    pub fn code(&self) -> &str {
        match self {
            Block::Empty => "00",
            Block::Mask => "A0",
            Block::Brick => "B0",
            Block::Lock => "BK",
            Block::Key => "IK",
            Block::Exit => "E0",
            Block::SecretExit => "E1",
            Block::Spawn => "X0",
            Block::OneWay(Direction::Up) => "OU",
            Block::OneWay(Direction::Down) => "OD",
            Block::OneWay(Direction::Left) => "OL",
            Block::OneWay(Direction::Right) => "OR",
            Block::PipeIn => "CI",
            Block::PipeOut => "CO",
            Block::PipePhase => "CP",
            Block::PipeSolid => "CS",
            Block::Toggle { solid: true } => "T0",
            Block::Toggle { solid: false } => "T1",
            Block::Switch => "S0",
            Block::SwitchCeiling => "S1",
            Block::Scaffold => "D0",
            Block::Torch => "D1",
            Block::PowerUpBurrow => "P0",
            Block::PowerUpRecall => "P1",
            Block::Wire => "WR",
            Block::Backdrop(Backdrop::Cobble) => "M0",
            Block::Backdrop(Backdrop::Waterfall) => "M1",
            Block::Backdrop(Backdrop::Skullfall) => "M2",
            Block::Backdrop(Backdrop::Concrete) => "M3",
            Block::Note { .. } => "N0",
            Block::Custom(tag) => tag,
        }
    }

    /// Symbolic asset name used by the renderer's texture lookup
    pub fn asset_name(&self) -> &str {
        match self {
            Block::Empty => "empty",
            Block::Mask => "mask_circle",
            Block::Brick => "brick",
            Block::Lock => "lock",
            Block::Key => "key",
            Block::Exit => "exit",
            Block::SecretExit => "secret_exit",
            Block::Spawn => "spawn",
            Block::OneWay(Direction::Up) => "oneway_up",
            Block::OneWay(Direction::Down) => "oneway_down",
            Block::OneWay(Direction::Left) => "oneway_left",
            Block::OneWay(Direction::Right) => "oneway_right",
            Block::PipeIn => "pipe_in",
            Block::PipeOut => "pipe_out",
            Block::PipePhase => "pipe_phase",
            Block::PipeSolid => "pipe_solid",
            Block::Toggle { solid: true } => "toggle_solid",
            Block::Toggle { solid: false } => "toggle_phase",
            Block::Switch => "switch",
            Block::SwitchCeiling => "switch_ceiling",
            Block::Scaffold => "scaffold",
            Block::Torch => "torch",
            Block::PowerUpBurrow => "powerup_burrow",
            Block::PowerUpRecall => "powerup_recall",
            Block::Wire => "wire",
            Block::Backdrop(Backdrop::Cobble) => "backdrop_cobble",
            Block::Backdrop(Backdrop::Waterfall) => "backdrop_waterfall",
            Block::Backdrop(Backdrop::Skullfall) => "backdrop_skullfall",
            Block::Backdrop(Backdrop::Concrete) => "backdrop_concrete",
            Block::Note { .. } => "note",
            Block::Custom(tag) => tag,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Block::Empty)
    }

    /// All blocks offered by the palette strip, in display order.
    ///
    /// Notes are excluded (they need a text entry dialog and currently only
    /// arrive via import); `Custom` has no fixed art to offer.
    pub fn palette() -> &'static [Block] {
        const PALETTE: &[Block] = &[
            Block::Brick,
            Block::Scaffold,
            Block::Exit,
            Block::SecretExit,
            Block::Spawn,
            Block::Key,
            Block::Lock,
            Block::Switch,
            Block::SwitchCeiling,
            Block::Toggle { solid: true },
            Block::Toggle { solid: false },
            Block::OneWay(Direction::Up),
            Block::OneWay(Direction::Down),
            Block::OneWay(Direction::Left),
            Block::OneWay(Direction::Right),
            Block::PipeIn,
            Block::PipeOut,
            Block::PipePhase,
            Block::PipeSolid,
            Block::PowerUpBurrow,
            Block::PowerUpRecall,
            Block::Torch,
            Block::Wire,
            Block::Backdrop(Backdrop::Cobble),
            Block::Backdrop(Backdrop::Waterfall),
            Block::Backdrop(Backdrop::Skullfall),
            Block::Backdrop(Backdrop::Concrete),
            Block::Mask,
        ];
        PALETTE
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::Empty
    }
}
