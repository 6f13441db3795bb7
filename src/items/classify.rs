//! Name-based item classification
//!
//! Authored templates carry explicit typed fields. For ids that have no
//! template, a [`Classifier`] guesses category, material, slot and glyph
//! from the readable name.

use super::item::{EquipSlot, ItemCategory, Material};

/// Infers template fields from a human-readable item name
pub trait Classifier {
    fn category_from_name(&self, name: &str) -> ItemCategory;
    fn material_from_name(&self, name: &str) -> Option<Material>;
    fn equipment_slot(&self, name: &str, category: ItemCategory) -> Option<EquipSlot>;
    fn emoji_from_name(&self, name: &str, category: ItemCategory) -> String;
}

/// Keyword tables matched against the words of a name, last word first
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

const CATEGORY_KEYWORDS: &[(ItemCategory, &[&str])] = &[
    (ItemCategory::Weapon, &[
        "sword", "spear", "axe", "bow", "dagger", "club", "mace", "sling", "arrows", "javelin",
        "lance", "halberd", "macuahuitl", "atlatl", "scimitar", "saber", "sabre", "katana",
        "blowgun", "crossbow", "warhammer", "dao", "jian", "glaive", "trident",
    ]),
    (ItemCategory::Apparel, &[
        "cloak", "tunic", "robe", "shirt", "trousers", "breeches", "boots", "sandals", "shoes",
        "moccasins", "hat", "cap", "helmet", "hood", "gloves", "gauntlets", "belt", "sash",
        "dress", "mantle", "shawl", "cape", "poncho", "vest", "skirt", "leggings", "kilt",
        "necklace", "amulet", "pendant", "ring", "bracelet", "earrings", "headband", "shield",
        "loincloth", "wrap", "turban", "veil", "armor", "armour", "kimono", "sari", "toga",
    ]),
    (ItemCategory::Tool, &[
        "knife", "hammer", "saw", "needle", "chisel", "hoe", "sickle", "shovel", "spade", "awl",
        "tongs", "adze", "net", "hook", "trowel", "pick", "scythe", "flail", "plough", "plow",
        "spindle", "loom", "quill", "brush", "staff", "lantern", "tinderbox", "whetstone", "crook",
    ]),
    (ItemCategory::Food, &[
        "bread", "cheese", "meat", "fish", "apple", "apples", "maize", "corn", "rice", "beans",
        "jerky", "porridge", "cake", "cakes", "tortilla", "tortillas", "fruit", "nuts", "honey",
        "dates", "figs", "olives", "flatbread", "sausage", "lentils", "millet", "barley",
        "potatoes", "quinoa", "chocolate", "pemmican", "dumplings", "noodles",
    ]),
    (ItemCategory::Consumable, &[
        "herbs", "salve", "potion", "tea", "medicine", "tobacco", "poultice", "wine", "ale",
        "beer", "mead", "incense", "balm", "tincture", "remedy", "candle", "candles", "torch",
        "chicha", "pulque", "sake",
    ]),
    (ItemCategory::Vessel, &[
        "waterskin", "jug", "jar", "cup", "bowl", "flask", "gourd", "pot", "amphora", "bottle",
        "canteen", "kettle", "cauldron", "pitcher", "goblet", "tankard",
    ]),
    (ItemCategory::Container, &[
        "bag", "pouch", "sack", "basket", "chest", "satchel", "backpack", "purse", "box", "quiver",
        "case", "bundle", "crate",
    ]),
    (ItemCategory::Document, &[
        "letter", "map", "scroll", "book", "deed", "ledger", "codex", "manuscript", "charter",
        "writ", "journal", "almanac", "sutra", "quipu",
    ]),
    (ItemCategory::Special, &[
        "coin", "coins", "charm", "relic", "idol", "token", "talisman", "seal", "rosary",
        "fetish", "totem", "dice", "cowries",
    ]),
    (ItemCategory::Material, &[
        "cloth", "thread", "rope", "twine", "ore", "ingot", "log", "logs", "planks", "feathers",
        "pelt", "pelts", "fleece", "yarn", "dye", "resin", "wax", "salt", "clay", "stone",
        "kindling", "firewood",
    ]),
];

const MATERIAL_KEYWORDS: &[(&str, Material)] = &[
    ("leather", Material::Leather),
    ("hide", Material::Hide),
    ("buckskin", Material::Hide),
    ("fur", Material::Fur),
    ("straw", Material::Straw),
    ("iron", Material::Iron),
    ("steel", Material::Steel),
    ("bronze", Material::Bronze),
    ("copper", Material::Copper),
    ("silver", Material::Silver),
    ("gold", Material::Gold),
    ("golden", Material::Gold),
    ("tin", Material::Tin),
    ("wooden", Material::Wood),
    ("wood", Material::Wood),
    ("oak", Material::Oak),
    ("pine", Material::Pine),
    ("cedar", Material::Cedar),
    ("yew", Material::Yew),
    ("ash", Material::Ash),
    ("wool", Material::Wool),
    ("woolen", Material::Wool),
    ("woollen", Material::Wool),
    ("linen", Material::Linen),
    ("cotton", Material::Cotton),
    ("silk", Material::Silk),
    ("silken", Material::Silk),
    ("felt", Material::Felt),
    ("cloth", Material::Cloth),
    ("bamboo", Material::Bamboo),
    ("stone", Material::Stone),
    ("flint", Material::Flint),
    ("obsidian", Material::Obsidian),
    ("bone", Material::Bone),
    ("horn", Material::Horn),
    ("shell", Material::Shell),
    ("clay", Material::Clay),
    ("ceramic", Material::Clay),
    ("glass", Material::Glass),
    ("jade", Material::Jade),
    ("paper", Material::Paper),
    ("parchment", Material::Parchment),
    ("vellum", Material::Parchment),
    ("reed", Material::Reed),
    ("feather", Material::Feather),
    ("feathers", Material::Feather),
    ("beeswax", Material::Beeswax),
    ("herbs", Material::Herb),
];

const SLOT_KEYWORDS: &[(&str, EquipSlot)] = &[
    ("boots", EquipSlot::Feet),
    ("sandals", EquipSlot::Feet),
    ("shoes", EquipSlot::Feet),
    ("moccasins", EquipSlot::Feet),
    ("hat", EquipSlot::Head),
    ("cap", EquipSlot::Head),
    ("helmet", EquipSlot::Head),
    ("hood", EquipSlot::Head),
    ("headband", EquipSlot::Head),
    ("turban", EquipSlot::Head),
    ("veil", EquipSlot::Head),
    ("cloak", EquipSlot::Back),
    ("mantle", EquipSlot::Back),
    ("cape", EquipSlot::Back),
    ("shawl", EquipSlot::Back),
    ("tunic", EquipSlot::Body),
    ("robe", EquipSlot::Body),
    ("shirt", EquipSlot::Body),
    ("dress", EquipSlot::Body),
    ("poncho", EquipSlot::Body),
    ("vest", EquipSlot::Body),
    ("armor", EquipSlot::Body),
    ("armour", EquipSlot::Body),
    ("kimono", EquipSlot::Body),
    ("sari", EquipSlot::Body),
    ("toga", EquipSlot::Body),
    ("trousers", EquipSlot::Legs),
    ("breeches", EquipSlot::Legs),
    ("skirt", EquipSlot::Legs),
    ("leggings", EquipSlot::Legs),
    ("kilt", EquipSlot::Legs),
    ("loincloth", EquipSlot::Legs),
    ("gloves", EquipSlot::Hands),
    ("gauntlets", EquipSlot::Hands),
    ("belt", EquipSlot::Waist),
    ("sash", EquipSlot::Waist),
    ("necklace", EquipSlot::Neck),
    ("amulet", EquipSlot::Neck),
    ("pendant", EquipSlot::Neck),
    ("ring", EquipSlot::Ring),
    ("bracelet", EquipSlot::Accessory),
    ("earrings", EquipSlot::Accessory),
    ("shield", EquipSlot::OffHand),
];

const EMOJI_KEYWORDS: &[(&str, &str)] = &[
    ("bread", "🍞"),
    ("flatbread", "🫓"),
    ("cheese", "🧀"),
    ("fish", "🐟"),
    ("apple", "🍎"),
    ("maize", "🌽"),
    ("corn", "🌽"),
    ("rice", "🍚"),
    ("meat", "🍖"),
    ("jerky", "🥩"),
    ("honey", "🍯"),
    ("sword", "🗡"),
    ("dagger", "🔪"),
    ("knife", "🔪"),
    ("axe", "🪓"),
    ("bow", "🏹"),
    ("hammer", "🔨"),
    ("boots", "👢"),
    ("sandals", "👡"),
    ("hat", "👒"),
    ("gloves", "🧤"),
    ("ring", "💍"),
    ("necklace", "📿"),
    ("amulet", "📿"),
    ("coin", "🪙"),
    ("coins", "🪙"),
    ("scroll", "📜"),
    ("book", "📖"),
    ("map", "🗺"),
    ("log", "🪵"),
    ("rope", "🪢"),
    ("shield", "🛡"),
];

fn words(name: &str) -> Vec<String> {
    name.split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

fn category_emoji(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Food => "🍲",
        ItemCategory::Material => "🧶",
        ItemCategory::Tool => "🛠",
        ItemCategory::Weapon => "⚔",
        ItemCategory::Apparel => "👕",
        ItemCategory::Vessel => "🏺",
        ItemCategory::Special => "✨",
        ItemCategory::Document => "📜",
        ItemCategory::Consumable => "🧪",
        ItemCategory::Container => "👜",
    }
}

impl Classifier for KeywordClassifier {
    fn category_from_name(&self, name: &str) -> ItemCategory {
        // The head noun usually comes last ("leather boots", "bronze knife")
        for word in words(name).iter().rev() {
            for (category, keywords) in CATEGORY_KEYWORDS {
                if keywords.contains(&word.as_str()) {
                    return *category;
                }
            }
        }
        ItemCategory::Material
    }

    fn material_from_name(&self, name: &str) -> Option<Material> {
        words(name).iter().find_map(|word| {
            MATERIAL_KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == word.as_str())
                .map(|(_, material)| *material)
        })
    }

    fn equipment_slot(&self, name: &str, category: ItemCategory) -> Option<EquipSlot> {
        let found = words(name).iter().rev().find_map(|word| {
            SLOT_KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == word.as_str())
                .map(|(_, slot)| *slot)
        });
        match (found, category) {
            (Some(slot), _) => Some(slot),
            (None, ItemCategory::Weapon) => Some(EquipSlot::MainHand),
            _ => None,
        }
    }

    fn emoji_from_name(&self, name: &str, category: ItemCategory) -> String {
        words(name)
            .iter()
            .rev()
            .find_map(|word| {
                EMOJI_KEYWORDS
                    .iter()
                    .find(|(keyword, _)| *keyword == word.as_str())
                    .map(|(_, emoji)| *emoji)
            })
            .unwrap_or_else(|| category_emoji(category))
            .to_string()
    }
}
