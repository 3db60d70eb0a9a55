//! End-to-end ordering session flows.
//!
//! Each test drives a full session through the public [`SessionStore`]
//! surface: tap, customize, confirm, and check the resulting order lines —
//! the same sequence the presentation adapter produces.

#![allow(clippy::expect_used, clippy::unwrap_used)] // Test code can use unwrap/expect

use comanda_engine::reducer::SessionEnvironment;
use comanda_engine::store::SessionStore;
use comanda_engine::surface::{NullSurface, PresentationSurface};
use comanda_engine::types::{ModalKind, Money, SessionPhase};
use comanda_testing::test_clock;
use std::sync::{Arc, Mutex};

fn test_store() -> SessionStore {
    SessionStore::with_environment(SessionEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(NullSurface),
    ))
}

/// Surface recording only the disable flags, keyed by option.
#[derive(Default)]
struct DisableTracker {
    flags: Mutex<Vec<(String, bool)>>,
}

impl DisableTracker {
    fn last_flag(&self, option: &str) -> Option<bool> {
        self.flags
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(o, _)| o == option)
            .map(|(_, d)| *d)
    }
}

impl PresentationSurface for DisableTracker {
    fn open_modal(&self, _kind: ModalKind, _options: &[String], _message: &str) {}
    fn close_modal(&self) {}
    fn show_validation_message(&self, _text: &str) {}
    fn update_count_display(&self, _option: &str, _value: u32) {}
    fn disable_control(&self, option: &str, disabled: bool) {
        self.flags
            .lock()
            .unwrap()
            .push((option.to_string(), disabled));
    }
}

#[test]
fn vodka_bottle_two_juice_limit() {
    let mut store = test_store();

    store.on_product_tap("ABSOLUT AZUL", "$980.00", Some("Botella"));
    store.increment("Jugo de Piña");
    store.increment("Jugo de Piña");
    // Third juice violates the combination rule and is rejected.
    store.increment("Jugo de Piña");
    store.confirm();

    let items = store.order().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "ABSOLUT AZUL");
    assert_eq!(items[0].category, "Vodka");
    assert_eq!(items[0].customizations, vec!["Con: 2x Jugo de Piña"]);
    assert_eq!(items[0].price, Money::from_pesos(980));
    assert_eq!(store.state().phase, SessionPhase::Idle);
}

#[test]
fn juice_controls_grey_out_at_the_limit() {
    let tracker = Arc::new(DisableTracker::default());
    let mut store = SessionStore::with_environment(SessionEnvironment::new(
        Arc::new(test_clock()),
        Arc::clone(&tracker) as Arc<dyn PresentationSurface>,
    ));

    store.on_product_tap("ABSOLUT AZUL", "$980.00", Some("Botella"));
    store.increment("Jugo de Piña");
    assert_eq!(tracker.last_flag("Jugo de Arándano"), Some(false));

    store.increment("Jugo de Piña");
    assert_eq!(tracker.last_flag("Jugo de Arándano"), Some(true));
    // With 2 juices on board the soda controls grey out too.
    assert_eq!(tracker.last_flag("Mineral"), Some(true));
}

#[test]
fn malibu_bottle_single_mixer() {
    let mut store = test_store();

    store.on_product_tap("MALIBU", "$750.00", Some("Botella"));
    store.select("Sprite");
    store.confirm();

    let items = store.order().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "Ron");
    assert_eq!(items[0].customizations, vec!["Con: Sprite"]);
}

#[test]
fn jager_bottle_boost_flow() {
    let mut store = test_store();

    store.on_product_tap("JÄGERMEISTER", "$850.00", Some("Botella"));
    store.increment("Mineral");
    store.toggle_boost(true);
    store.confirm();

    let items = store.order().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category, "Digestivos");
    // Boost is exclusive: the earlier mineral count was zeroed.
    assert_eq!(items[0].customizations, vec!["Con: 2 Boost"]);
}

#[test]
fn order_aggregate_add_total_remove() {
    let mut store = test_store();

    store.on_product_tap("Coca-Cola", "$35.00", Some("precio"));
    store.on_product_tap("Pizza Hawaiana", "$110.00", Some("precio"));
    store.select("Sin cebolla");
    store.select("Orilla rellena de queso");
    store.confirm();

    assert_eq!(store.order().len(), 2);
    assert_eq!(store.order().total(), Money::from_pesos(145));

    let pizza = store
        .order()
        .items()
        .into_iter()
        .find(|line| line.name == "Pizza Hawaiana")
        .unwrap();
    assert_eq!(
        pizza.customizations,
        vec!["Sin cebolla, Orilla rellena de queso"]
    );

    assert!(store.remove_item(&pizza.id));
    assert_eq!(store.order().total(), Money::from_pesos(35));

    let completed = store.complete_order().unwrap();
    assert_eq!(completed.total, Money::from_pesos(35));
    assert!(store.order().is_empty());
}

#[test]
fn liter_and_cup_sessions() {
    let mut store = test_store();

    store.on_product_tap("DON JULIO 70", "$1,100.00", Some("Litro"));
    store.select("Paloma");
    store.confirm();

    store.on_product_tap("BUCHANAN'S 12", "$120.00", Some("Copa"));
    store.confirm(); // nothing chosen: rejected
    assert_eq!(store.state().phase, SessionPhase::ModalOpen(ModalKind::Cup));
    store.select("Mineral");
    store.confirm();

    let items = store.order().items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].customizations, vec!["Mezclador: Paloma"]);
    assert_eq!(items[1].customizations, vec!["Estilo: Mineral"]);
}

#[test]
fn meat_session_records_the_cooking_term() {
    let mut store = test_store();

    store.on_product_tap("Arrachera 300g", "$240.00", Some("precio"));
    store.select("3/4");
    store.confirm();

    let items = store.order().items();
    assert_eq!(items[0].customizations, vec!["Término: 3/4"]);
    assert_eq!(items[0].category, "comida");
}

#[test]
fn cancelled_session_leaves_no_trace() {
    let mut store = test_store();

    store.on_product_tap("ABSOLUT AZUL", "$980.00", Some("Botella"));
    store.increment("Mineral");
    store.cancel();

    assert!(store.order().is_empty());
    assert_eq!(store.state().phase, SessionPhase::Idle);
    assert!(store.state().selection.is_none());

    // The next session starts clean.
    store.on_product_tap("MALIBU", "$750.00", Some("Botella"));
    store.select("Sprite");
    store.confirm();
    assert_eq!(store.order().len(), 1);
}
