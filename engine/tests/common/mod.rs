#![allow(dead_code)]

use engine::{AccentManager, Catalog, InMemoryGateway, UserId};
use std::sync::Arc;

pub const USER: UserId = UserId::SYSTEM;

/// Accents 1-5 are plain, 6/7 are the monochrome pair, 8 is a user accent.
pub const TEST_CATALOG: &str = r#"
accents = [
    "default",
    "accent.red",
    "accent.pink",
    "accent.purple",
    "accent.deeppurple",
    "accent.indigo",
    "accent.black",
    "accent.white",
    "accent.user1",
]
black_accent = 6
white_accent = 7
stock_dark = "theme.stock.dark"

[families.dark]
overlays = ["dark.android", "dark.settings", "dark.systemui", "dark.dialer"]
paired_accent = 2

[families.black]
overlays = ["black.android", "black.settings", "black.systemui"]
paired_accent = 4

[families.night-variant]
overlays = ["night.android", "night.settings"]
paired_accent = 1

[families.alternate-palette]
overlays = ["alt.android", "alt.settings", "alt.systemui", "alt.wellbeing", "alt.gboard"]
paired_accent = 8
"#;

pub const BLACK: usize = 6;
pub const WHITE: usize = 7;

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_toml_str(TEST_CATALOG).expect("test catalog is valid"))
}

/// Manager over a gateway that knows every catalog overlay, all disabled.
pub fn manager() -> AccentManager<InMemoryGateway> {
    let catalog = catalog();
    let gateway = InMemoryGateway::from_catalog(&catalog);
    AccentManager::new(catalog, gateway, USER)
}

pub fn accent(manager: &AccentManager<InMemoryGateway>, index: usize) -> String {
    manager.catalog().accents()[index].to_string()
}

pub fn enable_family(manager: &AccentManager<InMemoryGateway>, family: engine::ThemeFamily) {
    for overlay in manager.catalog().family_members(family) {
        manager.gateway().seed(USER, overlay.clone(), true);
    }
}

pub fn enabled_accents(manager: &AccentManager<InMemoryGateway>) -> Vec<usize> {
    manager
        .catalog()
        .toggleable_accents()
        .filter(|(_, overlay)| manager.gateway().is_on(USER, (*overlay).clone()))
        .map(|(index, _)| index)
        .collect()
}
