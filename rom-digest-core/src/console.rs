/// Console identifiers for all platforms the recipes know how to hash.
///
/// This enum centralizes console identity — short names, display names,
/// manufacturer, and aliases — so the dispatcher, iterator, and CLI agree
/// on one taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Console {
    // Nintendo
    Nes,
    Snes,
    N64,
    GameBoy,
    GameBoyColor,
    GameBoyAdvance,
    NintendoDs,
    PokemonMini,
    VirtualBoy,

    // Sega
    Sg1000,
    GameGear,
    MegaDrive,
    SegaCd,
    Saturn,
    Dreamcast,

    // Sony
    Ps1,
    Ps2,

    // NEC
    PcEngine,
    PcFx,
    Pc8800,

    // Atari
    Atari7800,
    AtariLynx,
    Jaguar,

    // Others
    AppleII,
    Arcade,
    ColecoVision,
    Msx,
    NeoGeoPocket,
    Oric,
    SharpX1,
    Supervision,
    ThomsonTo8,
    ThreeDo,
    Tic80,
    WonderSwan,
}

/// All console variants in registration order.
const ALL_CONSOLES: &[Console] = &[
    Console::Nes,
    Console::Snes,
    Console::N64,
    Console::GameBoy,
    Console::GameBoyColor,
    Console::GameBoyAdvance,
    Console::NintendoDs,
    Console::PokemonMini,
    Console::VirtualBoy,
    Console::Sg1000,
    Console::GameGear,
    Console::MegaDrive,
    Console::SegaCd,
    Console::Saturn,
    Console::Dreamcast,
    Console::Ps1,
    Console::Ps2,
    Console::PcEngine,
    Console::PcFx,
    Console::Pc8800,
    Console::Atari7800,
    Console::AtariLynx,
    Console::Jaguar,
    Console::AppleII,
    Console::Arcade,
    Console::ColecoVision,
    Console::Msx,
    Console::NeoGeoPocket,
    Console::Oric,
    Console::SharpX1,
    Console::Supervision,
    Console::ThomsonTo8,
    Console::ThreeDo,
    Console::Tic80,
    Console::WonderSwan,
];

impl Console {
    /// Canonical short name used by the CLI and log messages.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::N64 => "n64",
            Self::GameBoy => "gb",
            Self::GameBoyColor => "gbc",
            Self::GameBoyAdvance => "gba",
            Self::NintendoDs => "nds",
            Self::PokemonMini => "pokemini",
            Self::VirtualBoy => "vb",
            Self::Sg1000 => "sg1000",
            Self::GameGear => "gamegear",
            Self::MegaDrive => "megadrive",
            Self::SegaCd => "segacd",
            Self::Saturn => "saturn",
            Self::Dreamcast => "dreamcast",
            Self::Ps1 => "ps1",
            Self::Ps2 => "ps2",
            Self::PcEngine => "pce",
            Self::PcFx => "pcfx",
            Self::Pc8800 => "pc8800",
            Self::Atari7800 => "7800",
            Self::AtariLynx => "lynx",
            Self::Jaguar => "jaguar",
            Self::AppleII => "appleii",
            Self::Arcade => "arcade",
            Self::ColecoVision => "coleco",
            Self::Msx => "msx",
            Self::NeoGeoPocket => "ngp",
            Self::Oric => "oric",
            Self::SharpX1 => "x1",
            Self::Supervision => "supervision",
            Self::ThomsonTo8 => "to8",
            Self::ThreeDo => "3do",
            Self::Tic80 => "tic80",
            Self::WonderSwan => "wonderswan",
        }
    }

    /// Full display name for the console.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nes => "Nintendo Entertainment System",
            Self::Snes => "Super Nintendo Entertainment System",
            Self::N64 => "Nintendo 64",
            Self::GameBoy => "Game Boy",
            Self::GameBoyColor => "Game Boy Color",
            Self::GameBoyAdvance => "Game Boy Advance",
            Self::NintendoDs => "Nintendo DS",
            Self::PokemonMini => "Pokemon Mini",
            Self::VirtualBoy => "Virtual Boy",
            Self::Sg1000 => "Sega SG-1000",
            Self::GameGear => "Sega Game Gear",
            Self::MegaDrive => "Sega Mega Drive / Genesis",
            Self::SegaCd => "Sega CD / Mega CD",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
            Self::Ps1 => "Sony PlayStation",
            Self::Ps2 => "Sony PlayStation 2",
            Self::PcEngine => "NEC PC Engine / TurboGrafx-16",
            Self::PcFx => "NEC PC-FX",
            Self::Pc8800 => "NEC PC-8800",
            Self::Atari7800 => "Atari 7800",
            Self::AtariLynx => "Atari Lynx",
            Self::Jaguar => "Atari Jaguar",
            Self::AppleII => "Apple II",
            Self::Arcade => "Arcade",
            Self::ColecoVision => "ColecoVision",
            Self::Msx => "MSX",
            Self::NeoGeoPocket => "SNK Neo Geo Pocket",
            Self::Oric => "Oric",
            Self::SharpX1 => "Sharp X1",
            Self::Supervision => "Watara Supervision",
            Self::ThomsonTo8 => "Thomson TO8",
            Self::ThreeDo => "3DO Interactive Multiplayer",
            Self::Tic80 => "TIC-80",
            Self::WonderSwan => "Bandai WonderSwan",
        }
    }

    /// Console manufacturer.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::Nes
            | Self::Snes
            | Self::N64
            | Self::GameBoy
            | Self::GameBoyColor
            | Self::GameBoyAdvance
            | Self::NintendoDs
            | Self::PokemonMini
            | Self::VirtualBoy => "Nintendo",

            Self::Sg1000
            | Self::GameGear
            | Self::MegaDrive
            | Self::SegaCd
            | Self::Saturn
            | Self::Dreamcast => "Sega",

            Self::Ps1 | Self::Ps2 => "Sony",

            Self::PcEngine | Self::PcFx | Self::Pc8800 => "NEC",

            Self::Atari7800 | Self::AtariLynx | Self::Jaguar => "Atari",

            Self::AppleII => "Apple",
            Self::Arcade => "Various",
            Self::ColecoVision => "Coleco",
            Self::Msx => "Microsoft",
            Self::NeoGeoPocket => "SNK",
            Self::Oric => "Tangerine",
            Self::SharpX1 => "Sharp",
            Self::Supervision => "Watara",
            Self::ThomsonTo8 => "Thomson",
            Self::ThreeDo => "Panasonic",
            Self::Tic80 => "Nesbox",
            Self::WonderSwan => "Bandai",
        }
    }

    /// All accepted names for this console (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Nes => &["nes", "famicom", "fds"],
            Self::Snes => &["snes", "sfc", "super famicom"],
            Self::N64 => &["n64", "nintendo 64"],
            Self::GameBoy => &["gb", "gameboy"],
            Self::GameBoyColor => &["gbc"],
            Self::GameBoyAdvance => &["gba"],
            Self::NintendoDs => &["nds", "ds"],
            Self::PokemonMini => &["pokemini", "min"],
            Self::VirtualBoy => &["vb", "virtualboy"],
            Self::Sg1000 => &["sg1000", "sg-1000"],
            Self::GameGear => &["gamegear", "gg"],
            Self::MegaDrive => &["megadrive", "md", "genesis"],
            Self::SegaCd => &["segacd", "megacd"],
            Self::Saturn => &["saturn"],
            Self::Dreamcast => &["dreamcast", "dc"],
            Self::Ps1 => &["ps1", "psx", "playstation"],
            Self::Ps2 => &["ps2", "playstation2"],
            Self::PcEngine => &["pce", "pcengine", "tg16", "turbografx"],
            Self::PcFx => &["pcfx", "pc-fx"],
            Self::Pc8800 => &["pc8800", "pc88"],
            Self::Atari7800 => &["7800", "atari7800"],
            Self::AtariLynx => &["lynx"],
            Self::Jaguar => &["jaguar", "jag"],
            Self::AppleII => &["appleii", "apple2"],
            Self::Arcade => &["arcade", "mame", "fbneo"],
            Self::ColecoVision => &["coleco", "colecovision"],
            Self::Msx => &["msx"],
            Self::NeoGeoPocket => &["ngp", "ngpc"],
            Self::Oric => &["oric"],
            Self::SharpX1 => &["x1", "sharpx1"],
            Self::Supervision => &["supervision", "sv"],
            Self::ThomsonTo8 => &["to8", "thomson"],
            Self::ThreeDo => &["3do"],
            Self::Tic80 => &["tic80", "tic-80"],
            Self::WonderSwan => &["wonderswan", "ws", "wsc"],
        }
    }

    /// All console variants.
    pub fn all() -> &'static [Console] {
        ALL_CONSOLES
    }
}

impl std::fmt::Display for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Console`.
#[derive(Debug, Clone)]
pub struct ConsoleParseError(pub String);

impl std::fmt::Display for ConsoleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown console: '{}'", self.0)
    }
}

impl std::error::Error for ConsoleParseError {}

impl std::str::FromStr for Console {
    type Err = ConsoleParseError;

    /// Parse a console from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &console in ALL_CONSOLES {
            if console.short_name() == lower {
                return Ok(console);
            }
            for alias in console.aliases() {
                if *alias == lower {
                    return Ok(console);
                }
            }
        }
        Err(ConsoleParseError(s.to_string()))
    }
}
