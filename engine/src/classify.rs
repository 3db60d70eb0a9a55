//! Liquor classification and unit-item routing.
//!
//! Classification is a pure function of normalized name text: deterministic,
//! total, and it never fails — unknown products degrade to [`LiquorCategory::Otro`]
//! and pick up the generic accompaniment rules.

use crate::text::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of liquor categories carried on the menu.
///
/// Derived from the product name on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquorCategory {
    /// Rum
    Ron,
    /// Tequila
    Tequila,
    /// Whisky
    Whisky,
    /// Vodka
    Vodka,
    /// Brandy
    Brandy,
    /// Gin
    Ginebra,
    /// Mezcal
    Mezcal,
    /// Cognac
    Cognac,
    /// Digestifs and liqueurs
    Digestivos,
    /// Sparkling wines
    Espumosos,
    /// Anything unrecognized
    Otro,
}

impl LiquorCategory {
    /// Every category, in declaration order.
    pub const ALL: [LiquorCategory; 11] = [
        LiquorCategory::Ron,
        LiquorCategory::Tequila,
        LiquorCategory::Whisky,
        LiquorCategory::Vodka,
        LiquorCategory::Brandy,
        LiquorCategory::Ginebra,
        LiquorCategory::Mezcal,
        LiquorCategory::Cognac,
        LiquorCategory::Digestivos,
        LiquorCategory::Espumosos,
        LiquorCategory::Otro,
    ];
}

impl fmt::Display for LiquorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ron => "Ron",
            Self::Tequila => "Tequila",
            Self::Whisky => "Whisky",
            Self::Vodka => "Vodka",
            Self::Brandy => "Brandy",
            Self::Ginebra => "Ginebra",
            Self::Mezcal => "Mezcal",
            Self::Cognac => "Cognac",
            Self::Digestivos => "Digestivos",
            Self::Espumosos => "Espumosos",
            Self::Otro => "Otro",
        };
        write!(f, "{label}")
    }
}

/// Brand → category table, scanned in order; first substring match wins.
///
/// Tokens are stored pre-normalized (no accents, uppercase) so the scan can
/// run against the normalized product name directly.
const BRAND_TABLE: &[(&str, LiquorCategory)] = &[
    // Ron
    ("BACARDI", LiquorCategory::Ron),
    ("CAPITAN MORGAN", LiquorCategory::Ron),
    ("MATUSALEM", LiquorCategory::Ron),
    ("APPLETON", LiquorCategory::Ron),
    ("HAVANA CLUB", LiquorCategory::Ron),
    ("ZACAPA", LiquorCategory::Ron),
    ("FLOR DE CANA", LiquorCategory::Ron),
    // Tequila
    ("CUERVO", LiquorCategory::Tequila),
    ("DON JULIO", LiquorCategory::Tequila),
    ("HERRADURA", LiquorCategory::Tequila),
    ("CENTENARIO", LiquorCategory::Tequila),
    ("CAZADORES", LiquorCategory::Tequila),
    ("TRADICIONAL", LiquorCategory::Tequila),
    ("PATRON", LiquorCategory::Tequila),
    ("1800", LiquorCategory::Tequila),
    // Whisky
    ("BUCHANAN", LiquorCategory::Whisky),
    ("ETIQUETA ROJA", LiquorCategory::Whisky),
    ("ETIQUETA NEGRA", LiquorCategory::Whisky),
    ("JACK DANIEL", LiquorCategory::Whisky),
    ("CHIVAS", LiquorCategory::Whisky),
    ("OLD PARR", LiquorCategory::Whisky),
    ("MACALLAN", LiquorCategory::Whisky),
    ("JAMESON", LiquorCategory::Whisky),
    // Vodka
    ("ABSOLUT", LiquorCategory::Vodka),
    ("SMIRNOFF", LiquorCategory::Vodka),
    ("GREY GOOSE", LiquorCategory::Vodka),
    ("STOLICHNAYA", LiquorCategory::Vodka),
    ("BELVEDERE", LiquorCategory::Vodka),
    // Brandy
    ("TORRES", LiquorCategory::Brandy),
    ("TERRY", LiquorCategory::Brandy),
    ("FUNDADOR", LiquorCategory::Brandy),
    ("CARLOS I", LiquorCategory::Brandy),
    // Ginebra
    ("BOMBAY", LiquorCategory::Ginebra),
    ("TANQUERAY", LiquorCategory::Ginebra),
    ("BEEFEATER", LiquorCategory::Ginebra),
    ("HENDRICK", LiquorCategory::Ginebra),
    // Mezcal
    ("400 CONEJOS", LiquorCategory::Mezcal),
    ("MONTELOBOS", LiquorCategory::Mezcal),
    ("AMORES", LiquorCategory::Mezcal),
    ("UNION", LiquorCategory::Mezcal),
    // Cognac
    ("HENNESSY", LiquorCategory::Cognac),
    ("REMY MARTIN", LiquorCategory::Cognac),
    ("MARTELL", LiquorCategory::Cognac),
    ("COURVOISIER", LiquorCategory::Cognac),
    // Digestivos
    ("JAGERMEISTER", LiquorCategory::Digestivos),
    ("BAILEYS", LiquorCategory::Digestivos),
    ("LICOR 43", LiquorCategory::Digestivos),
    ("HIPNOTIQ", LiquorCategory::Digestivos),
    ("ZAMBUCA", LiquorCategory::Digestivos),
    ("CADENAS DULCE", LiquorCategory::Digestivos),
    ("FRANGELICO", LiquorCategory::Digestivos),
    // Espumosos
    ("MOET", LiquorCategory::Espumosos),
    ("CHANDON", LiquorCategory::Espumosos),
    ("VEUVE CLICQUOT", LiquorCategory::Espumosos),
    ("FREIXENET", LiquorCategory::Espumosos),
];

/// Generic category keywords, used when no brand matches.
const KEYWORD_TABLE: &[(&str, LiquorCategory)] = &[
    ("RON", LiquorCategory::Ron),
    ("TEQUILA", LiquorCategory::Tequila),
    ("WHISKY", LiquorCategory::Whisky),
    ("VODKA", LiquorCategory::Vodka),
    ("BRANDY", LiquorCategory::Brandy),
    ("GINEBRA", LiquorCategory::Ginebra),
    ("GIN", LiquorCategory::Ginebra),
    ("MEZCAL", LiquorCategory::Mezcal),
    ("COGNAC", LiquorCategory::Cognac),
    ("DIGESTIVO", LiquorCategory::Digestivos),
    ("ESPUMOSO", LiquorCategory::Espumosos),
];

/// Classify a product name into a liquor category.
///
/// Ordered scan, first match wins:
/// 1. Hard overrides for naming collisions: MALIBU is a rum even though it is
///    shelved with liqueurs elsewhere, and TRIPAS DE MAGUEY is a mezcal whose
///    name would otherwise miss every brand row.
/// 2. Brand table, by normalized substring containment.
/// 3. Generic category keywords.
/// 4. [`LiquorCategory::Otro`].
#[must_use]
pub fn classify(product_name: &str) -> LiquorCategory {
    let name = normalize(product_name);

    if name.contains("MALIBU") {
        return LiquorCategory::Ron;
    }
    if name.contains("TRIPAS DE MAGUEY") {
        return LiquorCategory::Mezcal;
    }

    for (brand, category) in BRAND_TABLE {
        if name.contains(brand) {
            return *category;
        }
    }

    for (keyword, category) in KEYWORD_TABLE {
        if name.contains(keyword) {
            return *category;
        }
    }

    LiquorCategory::Otro
}

/// How a unit-priced (single price) item is routed through the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    /// Pizzas, wings, soups, salads — opens the food modal
    Food(FoodKind),
    /// Cuts of meat — opens the meat modal (cooking term)
    Meat,
    /// Plain beverages — no customization, straight onto the order
    Beverage,
}

/// Food families with distinct customization option sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodKind {
    /// Pizza
    Pizza,
    /// Wings / boneless
    Alitas,
    /// Soups
    Sopa,
    /// Salads
    Ensalada,
}

/// Route a unit-priced item by keyword.
///
/// Anything not recognized as food or meat is a beverage and bypasses
/// customization entirely.
#[must_use]
pub fn classify_unit(product_name: &str) -> UnitKind {
    let name = normalize(product_name);

    if name.contains("PIZZA") {
        return UnitKind::Food(FoodKind::Pizza);
    }
    if name.contains("ALITAS") || name.contains("BONELESS") {
        return UnitKind::Food(FoodKind::Alitas);
    }
    if name.contains("SOPA") || name.contains("CONSOME") {
        return UnitKind::Food(FoodKind::Sopa);
    }
    if name.contains("ENSALADA") {
        return UnitKind::Food(FoodKind::Ensalada);
    }

    const MEAT_KEYWORDS: &[&str] = &["ARRACHERA", "RIB EYE", "FILETE", "T-BONE", "CORTE", "CARNE"];
    if MEAT_KEYWORDS.iter().any(|k| name.contains(k)) {
        return UnitKind::Meat;
    }

    UnitKind::Beverage
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn brand_classification() {
        assert_eq!(classify("BACARDÍ BLANCO"), LiquorCategory::Ron);
        assert_eq!(classify("Jose Cuervo Tradicional"), LiquorCategory::Tequila);
        assert_eq!(classify("ABSOLUT AZUL"), LiquorCategory::Vodka);
        assert_eq!(classify("BOMBAY SAPPHIRE"), LiquorCategory::Ginebra);
        assert_eq!(classify("Jägermeister"), LiquorCategory::Digestivos);
        assert_eq!(classify("MOËT & CHANDON"), LiquorCategory::Espumosos);
        assert_eq!(classify("BUCHANAN'S 12"), LiquorCategory::Whisky);
        assert_eq!(classify("HENNESSY VS"), LiquorCategory::Cognac);
        assert_eq!(classify("TORRES 10"), LiquorCategory::Brandy);
        assert_eq!(classify("400 CONEJOS JOVEN"), LiquorCategory::Mezcal);
    }

    #[test]
    fn malibu_override_beats_brand_table() {
        // Malibu is shelved as a liqueur but sells under the rum rules.
        assert_eq!(classify("MALIBU"), LiquorCategory::Ron);
        assert_eq!(classify("malibú coco"), LiquorCategory::Ron);
    }

    #[test]
    fn tripas_de_maguey_override() {
        assert_eq!(classify("Tripas de Maguey Espadín"), LiquorCategory::Mezcal);
    }

    #[test]
    fn keyword_fallback() {
        assert_eq!(classify("RON AÑEJO DE LA CASA"), LiquorCategory::Ron);
        assert_eq!(classify("GIN ARTESANAL"), LiquorCategory::Ginebra);
        assert_eq!(classify("DIGESTIVO DEL DÍA"), LiquorCategory::Digestivos);
    }

    #[test]
    fn unknown_degrades_to_otro() {
        assert_eq!(classify(""), LiquorCategory::Otro);
        assert_eq!(classify("AGUA DE HORCHATA"), LiquorCategory::Otro);
    }

    #[test]
    fn unit_routing() {
        assert_eq!(
            classify_unit("Pizza Hawaiana"),
            UnitKind::Food(FoodKind::Pizza)
        );
        assert_eq!(
            classify_unit("ALITAS BBQ 10pz"),
            UnitKind::Food(FoodKind::Alitas)
        );
        assert_eq!(
            classify_unit("Sopa Azteca"),
            UnitKind::Food(FoodKind::Sopa)
        );
        assert_eq!(
            classify_unit("Ensalada César"),
            UnitKind::Food(FoodKind::Ensalada)
        );
        assert_eq!(classify_unit("Arrachera 300g"), UnitKind::Meat);
        assert_eq!(classify_unit("Coca-Cola"), UnitKind::Beverage);
    }

    proptest! {
        // Classification totality: any string yields one of the closed set,
        // without panicking.
        #[test]
        fn classify_is_total(name in "\\PC{0,60}") {
            let category = classify(&name);
            prop_assert!(LiquorCategory::ALL.contains(&category));
        }

        // Classification only depends on normalized text.
        #[test]
        fn classify_is_case_insensitive(name in "[a-zA-ZÁÉÍÓÚáéíóúñÑ ]{0,30}") {
            prop_assert_eq!(classify(&name), classify(&name.to_lowercase()));
        }
    }
}
