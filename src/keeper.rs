use serde::Serialize;

use crate::rng::ShopRng;

/// Syllable tables for shopkeeper names, picked in order: prefix, root,
/// link, suffix.
const NAME_TABLE: [[&str; 20]; 4] = [
    [
        "Ir", "Van", "Cyr", "Den", "Cor", "Hil", "Sal", "Bri", "Mar", "Gar", "Tin", "Vor", "Nel",
        "Ri", "Quor", "Bal", "Mur", "Par", "Tor", "Lem",
    ],
    [
        "an", "ish", "tos", "zar", "ven", "sen", "win", "on", "en", "lin", "sor", "oc", "vyn",
        "al", "osh", "er", "in", "el", "un", "nar",
    ],
    [
        "l", "n", "pil", "g", "z", "bor", "t", "c", "ar", "q", "v", "iv", "ov", "b", "den", "k",
        "s", "r", "jen", "w",
    ],
    [
        "int", "us", "ios", "el", "inne", "os", "ian", "ius", "iol", "an", "isk", "erg", "ent",
        "ial", "ant", "iel", "onne", "org", "enne", "ynne",
    ],
];

const ANCESTRIES: [&str; 6] = ["Dwarf", "Elf", "Goblin", "Halfling", "Half-Orc", "Human"];

#[derive(Debug, Clone, Serialize)]
pub struct Shopkeeper {
    pub name: String,
    pub ancestry: String,
}

/// Synthesize a shopkeeper: four uniform syllable picks in table order, then
/// one ancestry pick. Consumes exactly five draws, and must run after all
/// shop inventory draws or seed reproducibility breaks.
pub fn generate(rng: &mut ShopRng) -> Shopkeeper {
    let mut name = String::new();
    for table in &NAME_TABLE {
        if let Some(syllable) = rng.pick(table) {
            name.push_str(syllable);
        }
    }
    let ancestry = rng.pick(&ANCESTRIES).copied().unwrap_or("Human").to_string();
    Shopkeeper { name, ancestry }
}
