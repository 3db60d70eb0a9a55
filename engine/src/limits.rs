//! Selection limit validation.
//!
//! Two predicates gate every count mutation in the customization modal:
//! [`can_add`] decides whether one more unit of an option may be taken, and
//! [`should_disable`] decides whether the increment control for that option
//! should be greyed out.
//!
//! `should_disable` is NOT the logical negation of `can_add`. Each is written
//! per-branch with its own thresholds, and near the combination boundaries a
//! control may look enabled for one click that `can_add` rejects on the other
//! axis. This asymmetry is observed, accepted behavior; both predicates are
//! pinned by tests and must not be derived from one another.

use crate::classify::LiquorCategory;
use crate::text::normalize;

/// Ceiling for total accompaniment units in the default bucket.
pub const MAX_TOTAL: u32 = 5;

/// RON products that run under the special-bottle combination rule.
const SPECIAL_RON_NAMES: &[&str] = &["BACARDI MANGO", "BACARDI RASPBERRY", "MALIBU"];

/// Categories restricted to sodas only. Currently none ship, but the bucket
/// is an extension point the rule table relies on.
const SODA_ONLY_CATEGORIES: &[LiquorCategory] = &[];

/// Whether the product falls under the three-way juice/soda combination rule:
/// vodka, gin, or one of the named rums.
#[must_use]
pub fn has_combination_rule(category: LiquorCategory, product_name: &str) -> bool {
    match category {
        LiquorCategory::Vodka | LiquorCategory::Ginebra => true,
        LiquorCategory::Ron => {
            let name = normalize(product_name);
            SPECIAL_RON_NAMES.iter().any(|s| name.contains(s))
        }
        _ => false,
    }
}

const fn is_soda_only(category: LiquorCategory) -> bool {
    // const-friendly scan; the slice is tiny
    let mut i = 0;
    while i < SODA_ONLY_CATEGORIES.len() {
        if SODA_ONLY_CATEGORIES[i] as u8 == category as u8 {
            return true;
        }
        i += 1;
    }
    false
}

/// Legal final combinations for the special bottle bucket:
/// up to 2 juices with no soda, or up to 5 sodas with no juice, or exactly
/// 1 juice with up to 2 sodas.
#[must_use]
pub const fn combination_is_legal(juices: u32, sodas: u32) -> bool {
    (juices <= 2 && sodas == 0) || (juices == 0 && sodas <= 5) || (juices == 1 && sodas <= 2)
}

/// Whether one more unit of an option may be added.
///
/// `is_juice` classifies the option being added; `total_juices` and
/// `total_sodas` are the counts before the addition.
#[must_use]
pub fn can_add(
    is_juice: bool,
    total_juices: u32,
    total_sodas: u32,
    category: LiquorCategory,
    product_name: &str,
) -> bool {
    if is_soda_only(category) {
        return !is_juice && total_sodas < MAX_TOTAL;
    }

    if has_combination_rule(category, product_name) {
        let (juices, sodas) = if is_juice {
            (total_juices + 1, total_sodas)
        } else {
            (total_juices, total_sodas + 1)
        };
        return combination_is_legal(juices, sodas);
    }

    total_juices + total_sodas < MAX_TOTAL
}

/// Whether the increment control for an option should be disabled.
///
/// Evaluated per-branch with its own thresholds rather than as `!can_add`;
/// see the module docs.
#[must_use]
pub fn should_disable(
    is_juice: bool,
    total_juices: u32,
    total_sodas: u32,
    category: LiquorCategory,
    product_name: &str,
) -> bool {
    if is_soda_only(category) {
        return is_juice || total_sodas >= MAX_TOTAL;
    }

    if has_combination_rule(category, product_name) {
        if is_juice {
            // Juice controls grey out at 2 juices, when a soda is already
            // mixed with 1 juice, or past the 2-soda mark.
            return total_juices >= 2
                || (total_sodas >= 1 && total_juices >= 1)
                || total_sodas > 2;
        }
        // Soda controls grey out at 2 juices, when the 1-juice/2-soda
        // combination is exhausted, or past the 2-soda mark.
        return total_juices >= 2
            || (total_juices == 1 && total_sodas >= 2)
            || total_sodas > 2;
    }

    total_juices + total_sodas >= MAX_TOTAL
}
