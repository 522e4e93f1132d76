use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NavigationError;
use crate::menu::MenuCategory;

/// Screens of the order wizard, in flow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Screen {
    Start,
    Entree,
    SideDish,
    Accompaniment,
    Checkout,
}

/// Display metadata attached to each screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    pub screen: Screen,
    pub route: &'static str,
    pub title: &'static str,
}

static SCREEN_TABLE: [ScreenInfo; 5] = [
    ScreenInfo { screen: Screen::Start, route: "START", title: "Start Order" },
    ScreenInfo { screen: Screen::Entree, route: "ENTREE", title: "Choose Entree" },
    ScreenInfo { screen: Screen::SideDish, route: "SIDE_DISH", title: "Choose Side Dish" },
    ScreenInfo { screen: Screen::Accompaniment, route: "ACCOMPANIMENT", title: "Choose Accompaniment" },
    ScreenInfo { screen: Screen::Checkout, route: "CHECKOUT", title: "Order Checkout" },
];

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Start,
        Screen::Entree,
        Screen::SideDish,
        Screen::Accompaniment,
        Screen::Checkout,
    ];

    pub fn info(&self) -> &'static ScreenInfo {
        // The table is indexed in declaration order
        &SCREEN_TABLE[*self as usize]
    }

    pub fn route(&self) -> &'static str {
        self.info().route
    }

    pub fn title(&self) -> &'static str {
        self.info().title
    }

    /// Menu category picked on this screen, if it is a selection screen
    pub fn category(&self) -> Option<MenuCategory> {
        match self {
            Screen::Entree => Some(MenuCategory::Entree),
            Screen::SideDish => Some(MenuCategory::SideDish),
            Screen::Accompaniment => Some(MenuCategory::Accompaniment),
            Screen::Start | Screen::Checkout => None,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Screen {
    type Err = NavigationError;

    /// Accepts route names such as `SIDE_DISH`, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        SCREEN_TABLE
            .iter()
            .find(|info| info.route.eq_ignore_ascii_case(&wanted))
            .map(|info| info.screen)
            .ok_or_else(|| NavigationError::UnknownScreen { name: s.to_string() })
    }
}
