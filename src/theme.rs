//! Cosmetic variants and their static data tables
//!
//! Both themes share every rate, cost and rule; only text and colours differ.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::economy::BuildingKind;

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    /// AI / quantum computing look
    #[default]
    Quantum,
    /// Deep-sea look
    Ocean,
}

/// Unlock state of a game card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardStatus {
    Active,
    Locked,
}

/// One card in the games grid
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GameCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: CardStatus,
    /// Market cap at which the card unlocks, if announced
    pub market_cap: Option<&'static str>,
    /// Placeholder card without a button
    pub coming_soon: bool,
}

impl GameCard {
    /// Whether clicking this card opens the mini-game
    pub fn is_playable(&self) -> bool {
        self.status == CardStatus::Active && !self.coming_soon
    }
}

/// Display text for a building kind
#[derive(Debug, Clone, Copy)]
pub struct BuildingText {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Outbound link shown in the top bar (inert in the demo)
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// RGBA colours fed to the renderer
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: [f32; 4],
    pub field: [f32; 4],
    pub player: [f32; 4],
    pub bullet: [f32; 4],
    pub enemy: [f32; 4],
    pub enemy_fast: [f32; 4],
}

/// Every piece of copy that differs between themes
#[derive(Debug, Clone, Copy)]
pub struct ThemeText {
    pub title: &'static str,
    pub tagline: &'static str,
    pub loading_title: &'static str,
    pub games_tab: &'static str,
    pub buildings_tab: &'static str,
    pub currency: &'static str,
    pub balance_label: &'static str,
    pub play_action: &'static str,
    pub minigame_title: &'static str,
    pub convert_button: &'static str,
    pub convert_title: &'static str,
    pub convert_body: &'static str,
    pub meter_labels: [&'static str; 4],
    pub loading_logs: [&'static str; 6],
}

const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "Twitter",
        href: "https://x.com/SatoVerseAI",
    },
    SocialLink {
        label: "pump.fun",
        href: "https://pump.fun",
    },
];

const QUANTUM_TEXT: ThemeText = ThemeText {
    title: "SATOVERSE",
    tagline: "Experience the future of AI-powered blockchain gaming with quantum-enhanced neural networks",
    loading_title: "INITIALIZING SATOVERSE",
    games_tab: "Models",
    buildings_tab: "Infrastructure",
    currency: "$SATO",
    balance_label: "Total Computing Power",
    play_action: "Train Model",
    minigame_title: "Neural Defense",
    convert_button: "Convert to Token",
    convert_title: "Convert $SATO to Tokens",
    convert_body: "Token conversion will be available soon! You'll be able to convert your earned $SATO to our official tokens at a rate to be announced.",
    meter_labels: ["SYSTEM LOAD", "MEMORY USAGE", "NEURAL SYNC", "QUANTUM BITS"],
    loading_logs: [
        "Initializing neural architecture...",
        "Configuring quantum pathways...",
        "Syncing neural networks...",
        "Establishing AI protocols...",
        "Loading model parameters...",
        "Calibrating synaptic responses...",
    ],
};

const OCEAN_TEXT: ThemeText = ThemeText {
    title: "SATOVERSE",
    tagline: "Dive into blockchain gaming beneath the waves and harvest the riches of the deep",
    loading_title: "DIVING INTO SATOVERSE",
    games_tab: "Expeditions",
    buildings_tab: "Reef",
    currency: "$SATO",
    balance_label: "Total Treasure",
    play_action: "Dive In",
    minigame_title: "Reef Defense",
    convert_button: "Convert to Token",
    convert_title: "Convert $SATO to Tokens",
    convert_body: "Token conversion will be available soon! You'll be able to convert the $SATO you hauled up to our official tokens at a rate to be announced.",
    meter_labels: ["TIDE LEVEL", "CURRENT FLOW", "SONAR SYNC", "DEPTH PRESSURE"],
    loading_logs: [
        "Flooding ballast tanks...",
        "Charting ocean currents...",
        "Syncing sonar arrays...",
        "Calibrating pressure hull...",
        "Mapping the reef...",
        "Releasing the anchor...",
    ],
};

const QUANTUM_GAMES: [GameCard; 6] = [
    GameCard {
        icon: "🧠",
        title: "Neural Lab",
        description: "Train your AI models and defend against data corruption. Earn $SATO tokens through successful training.",
        status: CardStatus::Active,
        market_cap: None,
        coming_soon: false,
    },
    GameCard {
        icon: "🏆",
        title: "Data Arena",
        description: "Compete with other AIs in the quantum computing arena. Climb the neural leaderboard!",
        status: CardStatus::Locked,
        market_cap: Some("300K"),
        coming_soon: false,
    },
    GameCard {
        icon: "🖥",
        title: "Quantum Core",
        description: "Build and manage your quantum computing infrastructure in this strategic simulation.",
        status: CardStatus::Locked,
        market_cap: Some("500K"),
        coming_soon: false,
    },
    GameCard {
        icon: "🔌",
        title: "Mind Forge",
        description: "Coming soon: Create new AI architectures through advanced quantum algorithms.",
        status: CardStatus::Locked,
        market_cap: Some("1M"),
        coming_soon: false,
    },
    GameCard {
        icon: "🌐",
        title: "Nexus Hub",
        description: "Coming soon: Connect to the global AI network and unlock true potential.",
        status: CardStatus::Locked,
        market_cap: Some("2M"),
        coming_soon: false,
    },
    GameCard {
        icon: "➕",
        title: "More Models Coming Soon",
        description: "Stay tuned for more exciting AI-powered experiences!",
        status: CardStatus::Locked,
        market_cap: None,
        coming_soon: true,
    },
];

const OCEAN_GAMES: [GameCard; 6] = [
    GameCard {
        icon: "🐠",
        title: "Reef Patrol",
        description: "Guard the reef against drifting invaders. Earn $SATO tokens for every one you stop.",
        status: CardStatus::Active,
        market_cap: None,
        coming_soon: false,
    },
    GameCard {
        icon: "🏆",
        title: "Tide Arena",
        description: "Race other divers through the tidal arena. Climb the deep-sea leaderboard!",
        status: CardStatus::Locked,
        market_cap: Some("300K"),
        coming_soon: false,
    },
    GameCard {
        icon: "⚓",
        title: "Deep Trench",
        description: "Build and manage a trench outpost in this strategic simulation.",
        status: CardStatus::Locked,
        market_cap: Some("500K"),
        coming_soon: false,
    },
    GameCard {
        icon: "🦑",
        title: "Kraken Forge",
        description: "Coming soon: Tame the creatures of the abyss and forge new legends.",
        status: CardStatus::Locked,
        market_cap: Some("1M"),
        coming_soon: false,
    },
    GameCard {
        icon: "🌊",
        title: "Harbor Hub",
        description: "Coming soon: Connect to ports around the globe and trade your haul.",
        status: CardStatus::Locked,
        market_cap: Some("2M"),
        coming_soon: false,
    },
    GameCard {
        icon: "➕",
        title: "More Waters Coming Soon",
        description: "Stay tuned for more adventures from the deep!",
        status: CardStatus::Locked,
        market_cap: None,
        coming_soon: true,
    },
];

const QUANTUM_PALETTE: Palette = Palette {
    background: [0.02, 0.0, 0.05, 1.0],
    field: [0.23, 0.07, 0.35, 0.5],
    player: [0.13, 0.83, 0.93, 1.0],
    bullet: [0.13, 0.83, 0.93, 1.0],
    enemy: [0.13, 0.83, 0.93, 1.0],
    enemy_fast: [0.91, 0.47, 0.98, 1.0],
};

const OCEAN_PALETTE: Palette = Palette {
    background: [0.0, 0.03, 0.08, 1.0],
    field: [0.03, 0.2, 0.35, 0.5],
    player: [0.98, 0.85, 0.35, 1.0],
    bullet: [0.75, 0.95, 1.0, 1.0],
    enemy: [0.2, 0.85, 0.65, 1.0],
    enemy_fast: [1.0, 0.45, 0.35, 1.0],
};

impl FromStr for Theme {
    type Err = ();

    /// Case-insensitive theme name (`quantum`/`ai`, `ocean`/`sea`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quantum" | "ai" => Ok(Theme::Quantum),
            "ocean" | "sea" => Ok(Theme::Ocean),
            _ => Err(()),
        }
    }
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Quantum => "quantum",
            Theme::Ocean => "ocean",
        }
    }

    pub fn text(&self) -> &'static ThemeText {
        match self {
            Theme::Quantum => &QUANTUM_TEXT,
            Theme::Ocean => &OCEAN_TEXT,
        }
    }

    pub fn games(&self) -> &'static [GameCard] {
        match self {
            Theme::Quantum => &QUANTUM_GAMES,
            Theme::Ocean => &OCEAN_GAMES,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Quantum => &QUANTUM_PALETTE,
            Theme::Ocean => &OCEAN_PALETTE,
        }
    }

    pub fn social_links(&self) -> &'static [SocialLink] {
        &SOCIAL_LINKS
    }

    /// Name, icon and blurb for a building in this theme
    pub fn building(&self, kind: BuildingKind) -> BuildingText {
        let (icon, name, description) = match (self, kind) {
            (Theme::Quantum, BuildingKind::DataNode) => ("⬡", "Data Node", "Basic data processing unit"),
            (Theme::Quantum, BuildingKind::NeuralCore) => ("🧠", "Neural Core", "Advanced AI model training center"),
            (Theme::Quantum, BuildingKind::MemoryBank) => ("🗄", "Memory Bank", "Enhanced data storage system"),
            (Theme::Quantum, BuildingKind::QuantumProcessor) => ("🖥", "Quantum Processor", "Quantum computing accelerator"),
            (Theme::Quantum, BuildingKind::TimeMatrix) => ("⏱", "Time Matrix", "Temporal processing enhancement"),
            (Theme::Quantum, BuildingKind::SyncCore) => ("⚡", "Sync Core", "Neural network synchronization"),
            (Theme::Ocean, BuildingKind::DataNode) => ("🌿", "Kelp Farm", "Slow but steady seaweed harvest"),
            (Theme::Ocean, BuildingKind::NeuralCore) => ("🪸", "Coral Reef", "A thriving reef full of life"),
            (Theme::Ocean, BuildingKind::MemoryBank) => ("🦪", "Pearl Bed", "Oysters quietly growing pearls"),
            (Theme::Ocean, BuildingKind::QuantumProcessor) => ("🌀", "Tide Generator", "Harnesses the pull of the moon"),
            (Theme::Ocean, BuildingKind::TimeMatrix) => ("🌊", "Current Engine", "Rides the deep ocean currents"),
            (Theme::Ocean, BuildingKind::SyncCore) => ("🌋", "Abyss Vent", "Volcanic energy from the sea floor"),
        };
        BuildingText {
            icon,
            name,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_playable_card_per_theme() {
        for theme in [Theme::Quantum, Theme::Ocean] {
            let playable = theme.games().iter().filter(|c| c.is_playable()).count();
            assert_eq!(playable, 1, "{:?}", theme);
            assert!(theme.games()[0].is_playable());
        }
    }

    #[test]
    fn test_locked_cards_announce_unlock_unless_placeholder() {
        for theme in [Theme::Quantum, Theme::Ocean] {
            for card in theme.games().iter().filter(|c| c.status == CardStatus::Locked) {
                assert_eq!(card.market_cap.is_none(), card.coming_soon, "{}", card.title);
            }
        }
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Ocean".parse::<Theme>(), Ok(Theme::Ocean));
        assert_eq!("quantum".parse::<Theme>(), Ok(Theme::Quantum));
        assert_eq!("lava".parse::<Theme>(), Err(()));
        assert_eq!(Theme::Ocean.as_str().parse::<Theme>(), Ok(Theme::Ocean));
    }

    #[test]
    fn test_building_names_differ_between_themes() {
        for kind in BuildingKind::ALL {
            assert_ne!(
                Theme::Quantum.building(kind).name,
                Theme::Ocean.building(kind).name
            );
        }
    }
}
