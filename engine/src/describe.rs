//! Customization description builder.
//!
//! Pure formatting: the final [`SelectionState`](crate::types::SelectionState)
//! becomes the human-readable string stored verbatim on the order line.

use crate::types::PriceTier;

/// Compose the customization description for a liquor line.
///
/// Counts are rendered in insertion order with zero entries omitted. The
/// boost flag only applies to the bottled Jäger flow.
#[must_use]
pub fn describe(
    tier: PriceTier,
    selected: &[String],
    counts: &[(String, u32)],
    jager_boost: bool,
) -> String {
    match tier {
        PriceTier::Bottle | PriceTier::Unit | PriceTier::None => {
            if jager_boost {
                return "Con: 2 Boost".to_string();
            }
            let counted: Vec<String> = counts
                .iter()
                .filter(|(_, n)| *n > 0)
                .map(|(option, n)| format!("{n}x {option}"))
                .collect();
            if !counted.is_empty() {
                return format!("Con: {}", counted.join(", "));
            }
            if selected.iter().any(|s| s == "Ninguno") || selected.is_empty() {
                return "Sin acompañamientos".to_string();
            }
            format!("Con: {}", selected.join(", "))
        }
        PriceTier::Liter => format!("Mezclador: {}", first_or_ninguno(selected)),
        PriceTier::Cup => format!("Estilo: {}", first_or_ninguno(selected)),
    }
}

/// Description for a food line: the chosen preparations, verbatim.
#[must_use]
pub fn describe_food(selected: &[String]) -> String {
    if selected.is_empty() {
        "Sin especificaciones".to_string()
    } else {
        selected.join(", ")
    }
}

/// Description for a meat line: the cooking term.
#[must_use]
pub fn describe_meat(selected: &[String]) -> String {
    format!("Término: {}", first_or_ninguno(selected))
}

fn first_or_ninguno(selected: &[String]) -> &str {
    selected.first().map_or("Ninguno", String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn bottle_with_boost() {
        let out = describe(PriceTier::Bottle, &[], &[], true);
        assert_eq!(out, "Con: 2 Boost");
    }

    #[test]
    fn bottle_with_counts_in_insertion_order() {
        let counts = vec![
            ("Jugo de Piña".to_string(), 2),
            ("Mineral".to_string(), 0),
            ("Sprite".to_string(), 1),
        ];
        let out = describe(PriceTier::Bottle, &[], &counts, false);
        assert_eq!(out, "Con: 2x Jugo de Piña, 1x Sprite");
    }

    #[test]
    fn bottle_counts_beat_selections() {
        let counts = vec![("Mineral".to_string(), 1)];
        let out = describe(PriceTier::Bottle, &s(&["Derecho"]), &counts, false);
        assert_eq!(out, "Con: 1x Mineral");
    }

    #[test]
    fn bottle_ninguno() {
        let out = describe(PriceTier::Bottle, &s(&["Ninguno"]), &[], false);
        assert_eq!(out, "Sin acompañamientos");
    }

    #[test]
    fn bottle_single_selects() {
        let out = describe(PriceTier::Bottle, &s(&["Derecho", "Bandera"]), &[], false);
        assert_eq!(out, "Con: Derecho, Bandera");
    }

    #[test]
    fn bottle_nothing_chosen_degrades_to_plain() {
        let out = describe(PriceTier::Bottle, &[], &[], false);
        assert_eq!(out, "Sin acompañamientos");
    }

    #[test]
    fn liter_uses_first_selection() {
        let out = describe(PriceTier::Liter, &s(&["Paloma", "Quina"]), &[], false);
        assert_eq!(out, "Mezclador: Paloma");
        let empty = describe(PriceTier::Liter, &[], &[], false);
        assert_eq!(empty, "Mezclador: Ninguno");
    }

    #[test]
    fn cup_uses_first_selection() {
        let out = describe(PriceTier::Cup, &s(&["Rocas"]), &[], false);
        assert_eq!(out, "Estilo: Rocas");
    }

    #[test]
    fn food_and_meat_forms() {
        assert_eq!(
            describe_food(&s(&["Sin cebolla", "Orilla rellena de queso"])),
            "Sin cebolla, Orilla rellena de queso"
        );
        assert_eq!(describe_food(&[]), "Sin especificaciones");
        assert_eq!(describe_meat(&s(&["3/4"])), "Término: 3/4");
    }
}
