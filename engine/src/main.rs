//! Comanda demo binary
//!
//! Walks a few ordering sessions end to end: a special-rule vodka bottle, the
//! Jäger boost flow, a food item and a plain beverage, then completes the
//! order and prints the ticket.

use comanda_engine::store::SessionStore;
use comanda_engine::surface::PresentationSurface;
use comanda_engine::types::ModalKind;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Surface that prints what a real rendering layer would draw.
struct ConsoleSurface;

impl PresentationSurface for ConsoleSurface {
    fn open_modal(&self, kind: ModalKind, options: &[String], message: &str) {
        println!("  [modal {kind:?}] {message}");
        println!("  opciones: {}", options.join(", "));
    }
    fn close_modal(&self) {
        println!("  [modal cerrado]");
    }
    fn show_validation_message(&self, text: &str) {
        println!("  !! {text}");
    }
    fn update_count_display(&self, option: &str, value: u32) {
        println!("  {option} = {value}");
    }
    fn disable_control(&self, _option: &str, _disabled: bool) {}
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "comanda_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Comanda: motor de comandas ===\n");

    let mut store = SessionStore::new(Arc::new(ConsoleSurface));

    // Special-rule vodka bottle: two juices, third rejected.
    println!(">>> ABSOLUT AZUL (botella)");
    store.on_product_tap("ABSOLUT AZUL", "$980.00", Some("Botella"));
    store.increment("Jugo de Piña");
    store.increment("Jugo de Piña");
    store.increment("Jugo de Piña"); // over the juice limit; ignored
    store.confirm();

    // Jäger bottle with the exclusive boost.
    println!("\n>>> JÄGERMEISTER (botella)");
    store.on_product_tap("JÄGERMEISTER", "$850.00", Some("Botella"));
    store.toggle_boost(true);
    store.confirm();

    // Food with a preparation choice.
    println!("\n>>> Pizza Hawaiana");
    store.on_product_tap("Pizza Hawaiana", "$110.00", Some("precio"));
    store.select("Sin cebolla");
    store.confirm();

    // Plain beverage, straight onto the order.
    println!("\n>>> Coca-Cola");
    store.on_product_tap("Coca-Cola", "$35.00", Some("precio"));

    println!("\n--- Comanda ---");
    for line in store.order().items() {
        println!("{} {} — {}", line.price, line.name, line.customizations.join("; "));
    }
    println!("Total: {}", store.order().total());

    match store.complete_order() {
        Ok(completed) => {
            println!(
                "\nOrden cerrada: {} líneas, total {}",
                completed.items.len(),
                completed.total
            );
        }
        Err(error) => println!("\n!! {}", error.user_message()),
    }
}
