//! Display style enumerations for TEXT file animation blocks
//!
//! Each animation block carries a vertical position, a display mode and a
//! text color. Their wire codes are fixed byte strings; modes and colors are
//! not all the same width (special modes are `n` + one byte, the PRISM RGB
//! color is an eight byte escape).

/// Vertical position of a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Center text vertically
    #[default]
    Middle,
    /// Text begins at the top and uses at most n-1 lines
    Top,
    /// Text immediately follows the TOP block
    Bottom,
    /// Center vertically and use all available lines
    Fill,
}

impl Position {
    /// Wire code for this position
    pub fn code(self) -> &'static [u8] {
        match self {
            Position::Middle => b" ",
            Position::Top => b"\"",
            Position::Bottom => b"&",
            Position::Fill => b"0",
        }
    }
}

/// Display mode (how a block enters and leaves the display)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Rotate,
    Hold,
    Flash,
    RollUp,
    RollDown,
    RollLeft,
    RollRight,
    WipeUp,
    WipeDown,
    WipeLeft,
    WipeRight,
    Scroll,
    /// Sign picks a mode at random
    #[default]
    Auto,
    RollIn,
    RollOut,
    WipeIn,
    WipeOut,
    /// Rotate with half-width characters
    CompressedRotate,
    Twinkle,
    Sparkle,
    Snow,
    Interlock,
    Switch,
    Slide,
    Spray,
    Starburst,
    Welcome,
    SlotMachine,
    Newsflash,
    Trumpet,
    ThankYou,
    NoSmoking,
    DrinkDrive,
    Animal,
    /// BetaBrite alternate for `Animal`
    Fish,
    Fireworks,
    TurboCar,
    /// BetaBrite alternate for `TurboCar`
    Balloons,
    CherryBomb,
}

impl Mode {
    /// Wire code for this mode
    pub fn code(self) -> &'static [u8] {
        match self {
            Mode::Rotate => b"a",
            Mode::Hold => b"b",
            Mode::Flash => b"c",
            Mode::RollUp => b"e",
            Mode::RollDown => b"f",
            Mode::RollLeft => b"g",
            Mode::RollRight => b"h",
            Mode::WipeUp => b"i",
            Mode::WipeDown => b"j",
            Mode::WipeLeft => b"k",
            Mode::WipeRight => b"l",
            Mode::Scroll => b"m",
            Mode::Auto => b"o",
            Mode::RollIn => b"p",
            Mode::RollOut => b"q",
            Mode::WipeIn => b"r",
            Mode::WipeOut => b"s",
            Mode::CompressedRotate => b"t",
            Mode::Twinkle => b"n0",
            Mode::Sparkle => b"n1",
            Mode::Snow => b"n2",
            Mode::Interlock => b"n3",
            Mode::Switch => b"n4",
            Mode::Slide => b"n5",
            Mode::Spray => b"n6",
            Mode::Starburst => b"n7",
            Mode::Welcome => b"n8",
            Mode::SlotMachine => b"n9",
            Mode::Newsflash => b"nA",
            Mode::Trumpet => b"nB",
            Mode::ThankYou => b"nS",
            Mode::NoSmoking => b"nU",
            Mode::DrinkDrive => b"nV",
            Mode::Animal | Mode::Fish => b"nW",
            Mode::Fireworks => b"nX",
            Mode::TurboCar | Mode::Balloons => b"nY",
            Mode::CherryBomb => b"nZ",
        }
    }
}

/// Text color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Green,
    Amber,
    DimRed,
    DimGreen,
    Brown,
    Orange,
    Yellow,
    /// Rainbow across all characters
    Rainbow1,
    /// Rainbow per character
    Rainbow2,
    /// Each character gets a different color
    Mix,
    /// Cycle through color modes
    #[default]
    Auto,
    /// RGB escape, PRISM signs only
    Blue,
}

impl Color {
    /// Wire code for this color
    pub fn code(self) -> &'static [u8] {
        match self {
            Color::Red => b"\x1c1",
            Color::Green => b"\x1c2",
            Color::Amber => b"\x1c3",
            Color::DimRed => b"\x1c4",
            Color::DimGreen => b"\x1c5",
            Color::Brown => b"\x1c6",
            Color::Orange => b"\x1c7",
            Color::Yellow => b"\x1c8",
            Color::Rainbow1 => b"\x1c9",
            Color::Rainbow2 => b"\x1cA",
            Color::Mix => b"\x1cB",
            Color::Auto => b"\x1cC",
            Color::Blue => b"\x1cZ0000FF",
        }
    }
}

/// Style applied to one animation block
///
/// Defaults are automatic mode, automatic color, middle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StyleState {
    pub mode: Mode,
    pub color: Color,
    pub position: Position,
}

impl StyleState {
    /// Restore all three fields to their defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
