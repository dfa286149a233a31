//! Document Workflow
//!
//! A review pipeline driven entirely by events: submitting, publishing,
//! and rejecting a document. The `Publish` event declares two candidate
//! outcomes and lets guards pick between them at trigger time.
//!
//! Run with: cargo run --example document_workflow

use impetus::{event_enum, state_enum, Definition, Machine, Metadata};

state_enum! {
    enum DocState {
        Draft,
        InReview,
        Published,
        Rejected,
    }
    final: [Published, Rejected]
    error: [Rejected]
}

event_enum! {
    enum DocEvent {
        Submit,
        Publish,
        Withdraw,
    }
}

fn main() {
    println!("=== Document Workflow Example ===\n");

    // Publish attempts Published first; if the approval guard rejects it,
    // the document falls back to Rejected.
    let definition = Definition::builder()
        .initial(DocState::Draft)
        .event(DocEvent::Submit, DocState::Draft, [DocState::InReview])
        .event(
            DocEvent::Publish,
            DocState::InReview,
            [DocState::Published, DocState::Rejected],
        )
        .event(DocEvent::Withdraw, DocState::InReview, [DocState::Draft])
        .guard(DocState::InReview, DocState::Published, |t| {
            t.metadata.contains_key("approved_by")
        })
        .build()
        .expect("workflow definition should build");
    let definition = std::sync::Arc::new(definition);

    let mut doc = Machine::new(definition.clone());
    println!("Initial state: {:?}", doc.current_state());
    println!("Available events: {:?}\n", doc.available_events());

    doc.trigger(&DocEvent::Submit)
        .expect("submitting a draft should succeed");
    println!("After Submit: {:?}", doc.current_state());
    println!("Available events: {:?}\n", doc.available_events());

    // A sibling document published without approval falls through to the
    // second candidate, Rejected.
    let mut other = Machine::new(definition);
    other
        .trigger(&DocEvent::Submit)
        .expect("submitting a draft should succeed");
    other
        .trigger(&DocEvent::Publish)
        .expect("unapproved publish falls back to Rejected");
    println!("Publish without approval lands in: {:?}\n", other.current_state());

    let mut approval = Metadata::new();
    approval.insert("approved_by".to_string(), "managing-editor".into());
    doc.trigger_with(&DocEvent::Publish, approval)
        .expect("approved publish should succeed");
    println!("After Publish with approval: {:?}", doc.current_state());
    println!("Is final: {}\n", doc.is_final());

    println!("History:");
    for record in doc.history().transitions() {
        println!("  {:?} -> {:?} ({} metadata keys)", record.from, record.to, record.metadata.len());
    }

    println!("\n=== Example Complete ===");
}
