//! Static navigation catalogs: the six clickable continents, the 22 API sub-regions and the
//! selectable base maps.

/// Regions queried to assemble the full country list (Antarctic territories are left out).
pub const WORLD_REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// Which REST Countries endpoint answers for a continent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinentQuery {
    /// `GET /v3.1/region/{name}`
    Region(&'static str),
    /// `GET /v3.1/subregion/{name}`
    Subregion(&'static str),
}

/// Clickable rectangle on the base map, in percent of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    pub x: u8,
    pub y: u8,
    pub width: u8,
    pub height: u8,
}

impl Hotspot {
    /// Inline CSS placing the hotspot over the map image.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}%; height: {}%;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Accent colors used when a continent is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Translucent fill of a hovered hotspot.
    pub fill: &'static str,
    /// Solid accent used for borders and text gradients.
    pub accent: &'static str,
    /// Second gradient stop.
    pub accent_alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continent {
    pub name: &'static str,
    /// Label used by the navigation menu.
    pub menu_name: &'static str,
    pub slug: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub query: ContinentQuery,
    pub hotspot: Hotspot,
    pub palette: Palette,
}

impl Continent {
    pub const ALL: [Self; 6] = [
        Self {
            name: "North America",
            menu_name: "North America",
            slug: "north-america",
            emoji: "🏔️",
            description: "Mountains, forests, and modern cities",
            query: ContinentQuery::Subregion("North America"),
            hotspot: Hotspot { x: 1, y: 2, width: 41, height: 54 },
            palette: Palette {
                fill: "rgba(59, 130, 246, 0.15)",
                accent: "#3b82f6",
                accent_alt: "#0891b2",
            },
        },
        Self {
            name: "South America",
            menu_name: "South America",
            slug: "south-america",
            emoji: "🏞️",
            description: "Amazon rainforest and ancient cultures",
            query: ContinentQuery::Subregion("South America"),
            hotspot: Hotspot { x: 22, y: 56, width: 17, height: 42 },
            palette: Palette {
                fill: "rgba(34, 197, 94, 0.15)",
                accent: "#22c55e",
                accent_alt: "#ca8a04",
            },
        },
        Self {
            name: "Europe",
            menu_name: "Europe",
            slug: "europe",
            emoji: "🏰",
            description: "Rich history and diverse cultures",
            query: ContinentQuery::Region("Europe"),
            hotspot: Hotspot { x: 45, y: 2, width: 22, height: 40 },
            palette: Palette {
                fill: "rgba(147, 51, 234, 0.15)",
                accent: "#9333ea",
                accent_alt: "#4f46e5",
            },
        },
        Self {
            name: "Africa",
            menu_name: "Africa",
            slug: "africa",
            emoji: "🦁",
            description: "Wildlife safaris and ancient civilizations",
            query: ContinentQuery::Region("Africa"),
            hotspot: Hotspot { x: 42, y: 40, width: 20, height: 45 },
            palette: Palette {
                fill: "rgba(249, 115, 22, 0.15)",
                accent: "#f97316",
                accent_alt: "#dc2626",
            },
        },
        Self {
            name: "Asia",
            menu_name: "Asia",
            slug: "asia",
            emoji: "🏯",
            description: "Temples, technology, and traditions",
            query: ContinentQuery::Region("Asia"),
            hotspot: Hotspot { x: 58, y: 3, width: 40, height: 60 },
            palette: Palette {
                fill: "rgba(239, 68, 68, 0.15)",
                accent: "#ef4444",
                accent_alt: "#db2777",
            },
        },
        Self {
            name: "Australia",
            menu_name: "Australia & Oceania",
            slug: "australia",
            emoji: "🦘",
            description: "Unique wildlife and stunning landscapes",
            query: ContinentQuery::Region("Oceania"),
            hotspot: Hotspot { x: 78, y: 67, width: 20, height: 27 },
            palette: Palette {
                fill: "rgba(20, 184, 166, 0.15)",
                accent: "#14b8a6",
                accent_alt: "#2563eb",
            },
        },
    ];

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<&'static Self> {
        Self::all().iter().find(|c| c.slug == slug)
    }

    /// Inline CSS gradient for headings in this continent's colors.
    #[must_use]
    pub fn gradient_css(&self) -> String {
        format!(
            "background-image: linear-gradient(90deg, {}, {});",
            self.palette.accent, self.palette.accent_alt
        )
    }
}

/// A REST Countries sub-region; its display name doubles as the API query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub slug: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

macro_rules! region {
    ($name:literal, $slug:literal, $emoji:literal, $description:literal) => {
        Region { name: $name, slug: $slug, emoji: $emoji, description: $description }
    };
}

impl Region {
    pub const ALL: [Self; 22] = [
        region!("Northern Europe", "northern-europe", "🏔️", "Nordic and Baltic countries"),
        region!("Western Europe", "western-europe", "🏰", "France, Germany, UK and neighbors"),
        region!("Southern Europe", "southern-europe", "🌅", "Mediterranean countries"),
        region!("Eastern Europe", "eastern-europe", "🏛️", "Slavic and former Soviet states"),
        region!("Central America", "central-america", "🌴", "Between North and South America"),
        region!("Caribbean", "caribbean", "🏝️", "Island nations of the Caribbean"),
        region!("North America", "north-america", "🗽", "USA, Canada, Mexico"),
        region!("South America", "south-america", "⛰️", "Amazon and Andes region"),
        region!("Western Africa", "western-africa", "🌍", "Atlantic coast of Africa"),
        region!("Eastern Africa", "eastern-africa", "🦒", "Horn of Africa and Great Lakes"),
        region!("Northern Africa", "northern-africa", "🐪", "Sahara and Mediterranean Africa"),
        region!("Middle Africa", "middle-africa", "🌳", "Central African rainforests"),
        region!("Southern Africa", "southern-africa", "💎", "South of Zambezi River"),
        region!("Western Asia", "western-asia", "🕌", "Middle East region"),
        region!("Central Asia", "central-asia", "🏔️", "Former Soviet Central Asian republics"),
        region!("Eastern Asia", "eastern-asia", "🏯", "China, Japan, Korea"),
        region!("South-Eastern Asia", "south-eastern-asia", "🌺", "ASEAN countries"),
        region!("Southern Asia", "southern-asia", "🕉️", "Indian subcontinent"),
        region!("Australia and New Zealand", "australia-and-new-zealand", "🦘", "Oceania mainland"),
        region!("Melanesia", "melanesia", "🏊", "Pacific island groups"),
        region!("Micronesia", "micronesia", "🐠", "Small Pacific islands"),
        region!("Polynesia", "polynesia", "🌺", "Hawaii and Pacific triangles"),
    ];

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<&'static Self> {
        Self::all().iter().find(|r| r.slug == slug)
    }
}

/// A selectable base map image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStyle {
    pub id: &'static str,
    pub name: &'static str,
    pub src: &'static str,
    pub description: &'static str,
}

impl MapStyle {
    pub const ALL: [Self; 3] = [
        Self {
            id: "world-map",
            name: "Classic World Map",
            src: "/images/world-map.jpg",
            description: "Clean and professional design",
        },
        Self {
            id: "world-map-countries",
            name: "Detailed Countries Map",
            src: "/images/world-map-countries.jpg",
            description: "Shows country boundaries and details",
        },
        Self {
            id: "world-countries-map-colored",
            name: "Vibrant Countries Map",
            src: "/images/world-countries-map-colored.jpg",
            description: "Colorful and engaging visualization",
        },
    ];

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    #[must_use]
    pub const fn default_style() -> &'static Self {
        &Self::ALL[0]
    }

    /// The style stored under `src`, if it is one of ours.
    #[must_use]
    pub fn find(src: &str) -> Option<&'static Self> {
        Self::all().iter().find(|m| m.src == src)
    }

    /// Finds the style for a stored `src`, falling back to the classic map for unknown values.
    #[must_use]
    pub fn resolve(src: &str) -> &'static Self {
        Self::find(src).unwrap_or(Self::default_style())
    }
}
