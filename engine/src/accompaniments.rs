//! Accompaniment rule table.
//!
//! Given a liquor category, a price tier and the product name, this module
//! answers the one question the customization modal needs: which mixers,
//! juices and sodas may legally be offered, and which hint message to show.
//!
//! The lookup is ordered. Special product names override everything, then the
//! tier-sensitive digestivo rules, then sparkling wines, then the per-category
//! tables. The returned option list is never empty — worst case it contains
//! "Ninguno".

use crate::classify::{FoodKind, LiquorCategory};
use crate::text::normalize;
use crate::types::PriceTier;

/// Legal options plus the UI hint for one category × tier lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet {
    /// Display strings for the selectable accompaniments
    pub options: Vec<String>,
    /// Hint shown at the top of the modal
    pub message: String,
}

impl OptionSet {
    fn new(options: &[&str], message: &str) -> Self {
        Self {
            options: options.iter().map(ToString::to_string).collect(),
            message: message.to_string(),
        }
    }
}

/// Hint for the special-bottle three-way combination rule.
pub const MSG_COMBINATION: &str =
    "Elige hasta 2 jugos, o hasta 5 refrescos, o 1 jugo y 2 refrescos";
/// Hint for soda-only option lists.
pub const MSG_SODAS: &str = "Elige hasta 5 refrescos";
/// Generic ceiling hint.
pub const MSG_GENERIC: &str = "Elige hasta 5 acompañamientos";
/// Shown when a product sells without accompaniments.
pub const MSG_NONE: &str = "Sin acompañamientos disponibles";

/// Juice markers, pre-normalized.
const JUICE_TOKENS: &[&str] = &[
    "PINA", "UVA", "NARANJA", "ARANDANO", "MANGO", "DURAZNO", "JUGO",
];

/// Whether an accompaniment option counts as a juice.
///
/// Case- and accent-insensitive; pure and total.
#[must_use]
pub fn is_juice(option_text: &str) -> bool {
    let text = normalize(option_text);
    JUICE_TOKENS.iter().any(|token| text.contains(token))
}

/// Bottle-tier option lists per category. Mixed-drink names differ at liter
/// and cup tiers, so bottles get their own table.
fn bottle_options(category: LiquorCategory) -> &'static [&'static str] {
    match category {
        LiquorCategory::Ron => &["Coca", "Mineral", "Sprite", "Jugo de Piña", "Jugo de Arándano"],
        LiquorCategory::Tequila => &["Derecho", "Bandera", "Mineral", "Quina", "Sprite"],
        LiquorCategory::Whisky => &["Mineral", "Agua", "Coca", "Manzana", "Ginger Ale"],
        LiquorCategory::Vodka => &[
            "Mineral",
            "Quina",
            "Sprite",
            "Jugo de Piña",
            "Jugo de Arándano",
            "Jugo de Naranja",
        ],
        LiquorCategory::Brandy => &["Coca", "Mineral", "Manzana"],
        LiquorCategory::Ginebra => &["Quina", "Mineral", "Sprite", "Jugo de Piña"],
        LiquorCategory::Mezcal => &["Derecho", "Quina", "Mineral", "Jugo de Naranja"],
        LiquorCategory::Cognac => &["Derecho", "Mineral", "Coca"],
        LiquorCategory::Digestivos | LiquorCategory::Espumosos | LiquorCategory::Otro => {
            DEFAULT_OPTIONS
        }
    }
}

/// Liter/cup option lists per category (mixed-drink styles).
fn mixed_options(category: LiquorCategory) -> &'static [&'static str] {
    match category {
        LiquorCategory::Ron => &["Coca", "Mineral", "Sprite", "Jugo de Piña"],
        LiquorCategory::Tequila => &["Paloma", "Charro Negro", "Mineral", "Quina"],
        LiquorCategory::Whisky => &["Coca", "Mineral", "Agua", "Ginger Ale"],
        LiquorCategory::Vodka => &[
            "Quina",
            "Mineral",
            "Sprite",
            "Jugo de Piña",
            "Jugo de Arándano",
        ],
        LiquorCategory::Brandy => &["Coca", "Mineral"],
        LiquorCategory::Ginebra => &["Quina", "Mineral", "Jugo de Piña"],
        LiquorCategory::Mezcal => &["Quina", "Mineral", "Jugo de Naranja"],
        LiquorCategory::Cognac => &["Derecho", "Mineral"],
        LiquorCategory::Digestivos | LiquorCategory::Espumosos | LiquorCategory::Otro => {
            DEFAULT_OPTIONS
        }
    }
}

/// Fallback set for unknown categories.
const DEFAULT_OPTIONS: &[&str] = &["Mineral", "Agua", "Coca", "Manzana"];

/// Digestivo bottles that sell with water/mineral instead of "Ninguno".
const DIGESTIVO_BOTTLE_EXCEPTIONS: &[&str] = &["LICOR 43", "CADENAS DULCE", "ZAMBUCA NEGRO"];

/// Whether this product runs the Jäger-exclusive "2 Boost" bottle flow.
#[must_use]
pub fn is_jager(product_name: &str) -> bool {
    normalize(product_name).contains("JAGERMEISTER")
}

/// Options offered to the boost-exclusive group on a Jäger bottle.
pub const JAGER_GROUP: &[&str] = &["Mineral", "Botella de Agua"];
/// The exclusive toggle label on a Jäger bottle.
pub const BOOST_OPTION: &str = "2 Boost";

fn special_name_options(name: &str, tier: PriceTier) -> Option<OptionSet> {
    if name.contains("BACARDI MANGO") || name.contains("BACARDI RASPBERRY") {
        return Some(OptionSet::new(
            &["Sprite", "Mineral", "Quina", "Jugo de Mango", "Jugo de Arándano"],
            MSG_COMBINATION,
        ));
    }
    if name.contains("MALIBU") {
        let options: &[&str] = match tier {
            PriceTier::Liter | PriceTier::Cup => {
                &["Sprite", "Mineral", "Jugo de Piña", "Mineral-Piña"]
            }
            PriceTier::Bottle | PriceTier::Unit | PriceTier::None => {
                &["Sprite", "Mineral", "Jugo de Piña"]
            }
        };
        return Some(OptionSet::new(options, MSG_COMBINATION));
    }
    None
}

fn digestivo_options(name: &str, tier: PriceTier) -> OptionSet {
    match tier {
        PriceTier::Bottle => {
            if is_jager(name) {
                let mut options = vec![BOOST_OPTION.to_string()];
                options.extend(JAGER_GROUP.iter().map(ToString::to_string));
                return OptionSet {
                    options,
                    message: MSG_SODAS.to_string(),
                };
            }
            if DIGESTIVO_BOTTLE_EXCEPTIONS.iter().any(|p| name.contains(p)) {
                OptionSet::new(&["Botella de Agua", "Mineral"], MSG_SODAS)
            } else {
                OptionSet::new(&["Ninguno"], MSG_NONE)
            }
        }
        PriceTier::Cup => {
            if name.contains("BAILEYS") {
                OptionSet::new(&["Rocas"], MSG_GENERIC)
            } else {
                OptionSet::new(&["Ninguno"], MSG_NONE)
            }
        }
        PriceTier::Liter | PriceTier::Unit | PriceTier::None => {
            OptionSet::new(&["Mineral", "Botella de Agua"], MSG_SODAS)
        }
    }
}

fn message_for(category: LiquorCategory, options: &[&str]) -> &'static str {
    if matches!(category, LiquorCategory::Vodka | LiquorCategory::Ginebra) {
        return MSG_COMBINATION;
    }
    if options.iter().any(|o| is_juice(o)) {
        MSG_GENERIC
    } else {
        MSG_SODAS
    }
}

/// Legal accompaniments for a product at a price tier.
///
/// Guaranteed non-empty: unknown categories fall back to the default set and
/// no-accompaniment products return `["Ninguno"]`.
#[must_use]
pub fn options_for(category: LiquorCategory, tier: PriceTier, product_name: &str) -> OptionSet {
    let name = normalize(product_name);

    // Special names override category rules outright.
    if let Some(set) = special_name_options(&name, tier) {
        return set;
    }

    match category {
        LiquorCategory::Digestivos => digestivo_options(&name, tier),
        LiquorCategory::Espumosos => OptionSet::new(&["Ninguno"], MSG_NONE),
        _ => {
            let options = match tier {
                PriceTier::Bottle => bottle_options(category),
                PriceTier::Liter | PriceTier::Cup => mixed_options(category),
                PriceTier::Unit | PriceTier::None => DEFAULT_OPTIONS,
            };
            OptionSet::new(options, message_for(category, options))
        }
    }
}

/// Customization choices for a food item.
#[must_use]
pub fn food_options(kind: FoodKind) -> OptionSet {
    match kind {
        FoodKind::Pizza => OptionSet::new(
            &[
                "Con todos los ingredientes",
                "Sin cebolla",
                "Sin champiñones",
                "Orilla rellena de queso",
            ],
            "Elige la preparación",
        ),
        FoodKind::Alitas => OptionSet::new(
            &["BBQ", "Buffalo", "Mango Habanero", "Lemon Pepper"],
            "Elige la salsa",
        ),
        FoodKind::Sopa => OptionSet::new(
            &["Con tortilla", "Con aguacate", "Sin picante"],
            "Elige la preparación",
        ),
        FoodKind::Ensalada => OptionSet::new(
            &["Aderezo Ranch", "Aderezo César", "Sin aderezo"],
            "Elige el aderezo",
        ),
    }
}

/// Cooking terms for the meat modal.
#[must_use]
pub fn meat_options() -> OptionSet {
    OptionSet::new(&["1/2", "3/4", "Bien cocido"], "Elige el término")
}
