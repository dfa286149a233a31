//! Turnstile
//!
//! The classic coin-operated turnstile, with one twist: `Push` is
//! declared from both states, and from Locked it is a self-loop, so
//! pushing a locked turnstile is a successful (if unproductive) trigger.
//!
//! Run with: cargo run --example turnstile

use impetus::{event_enum, state_enum, Definition, Machine};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
    }
}

event_enum! {
    enum TurnstileEvent {
        Coin,
        Push,
    }
}

fn main() {
    println!("=== Turnstile Example ===\n");

    let definition = Definition::builder()
        .initial(Turnstile::Locked)
        .event(TurnstileEvent::Coin, Turnstile::Locked, [Turnstile::Unlocked])
        .event(TurnstileEvent::Push, Turnstile::Unlocked, [Turnstile::Locked])
        .event(TurnstileEvent::Push, Turnstile::Locked, [Turnstile::Locked])
        .build()
        .expect("turnstile definition should build");

    let mut turnstile = Machine::new(definition);
    println!("Initial state: {:?}", turnstile.current_state());

    // Pushing while locked is the self-loop arm.
    turnstile
        .trigger(&TurnstileEvent::Push)
        .expect("pushing a locked turnstile stays locked");
    println!("After Push: {:?}", turnstile.current_state());

    turnstile
        .trigger(&TurnstileEvent::Coin)
        .expect("a coin unlocks the turnstile");
    println!("After Coin: {:?}", turnstile.current_state());

    turnstile
        .trigger(&TurnstileEvent::Push)
        .expect("pushing an unlocked turnstile locks it again");
    println!("After Push: {:?}", turnstile.current_state());

    println!("\nStates traversed: {:?}", turnstile.history().path());
    println!("\n=== Example Complete ===");
}
