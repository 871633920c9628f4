pub const STAR_COUNT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformIcon {
    PlayStation,
    Xbox,
    Steam,
    Nintendo,
    Apple,
    Gamepad,
}

impl PlatformIcon {
    /// Resolve a platform name to its icon. First match wins, so a name
    /// mentioning both PlayStation and Xbox resolves to PlayStation.
    pub fn for_platform(name: &str) -> Self {
        if name.contains("PlayStation") {
            PlatformIcon::PlayStation
        } else if name.contains("Xbox") {
            PlatformIcon::Xbox
        } else if name == "PC" {
            PlatformIcon::Steam
        } else if name == "Nintendo Switch" {
            PlatformIcon::Nintendo
        } else if name.contains("OS") {
            PlatformIcon::Apple
        } else {
            PlatformIcon::Gamepad
        }
    }

    pub fn asset(self) -> &'static str {
        match self {
            PlatformIcon::PlayStation => "/img/playstation.svg",
            PlatformIcon::Xbox => "/img/xbox.svg",
            PlatformIcon::Steam => "/img/steam.svg",
            PlatformIcon::Nintendo => "/img/nintendo.svg",
            PlatformIcon::Apple => "/img/apple.svg",
            PlatformIcon::Gamepad => "/img/gamepad.svg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarIcon {
    Full,
    Empty,
}

impl StarIcon {
    pub fn asset(self) -> &'static str {
        match self {
            StarIcon::Full => "/img/star-full.svg",
            StarIcon::Empty => "/img/star-empty.svg",
        }
    }
}

/// Star `i` (1-based) is full when `i <= floor(rating)`. NaN fills nothing.
pub fn star_row(rating: f64) -> [StarIcon; STAR_COUNT] {
    let filled = rating.floor();
    std::array::from_fn(|i| {
        if (i + 1) as f64 <= filled {
            StarIcon::Full
        } else {
            StarIcon::Empty
        }
    })
}
