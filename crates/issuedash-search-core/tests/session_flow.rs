//! End-to-end session flow against a scripted store.
//!
//! Drives a [`SearchSession`] the way the UI shell would: tick, hand the
//! issued plan to a store (here a canned responder), deliver the completion
//! back through `apply_results`/`apply_failure`, then navigate and activate.

use issuedash_core::{DashConfig, IssueRecord};
use issuedash_search_core::{
    ApplyOutcome, IssuedQuery, Modifiers, PlanMethod, PlanParam, SearchSession,
};

fn schema() -> DashConfig {
    DashConfig::from_json_str(
        r#"{
            "gui": {
                "columns": ["key", "summary", "status", "assignee"],
                "filters": {
                    "status":   { "default_filters": ["Open"] },
                    "assignee": { "default_filters": [] }
                }
            }
        }"#,
    )
    .unwrap()
}

fn issue(key: &str, summary: &str, status: &str, assignee: &str) -> IssueRecord {
    IssueRecord::new(vec![
        key.to_string(),
        summary.to_string(),
        status.to_string(),
        assignee.to_string(),
    ])
}

/// Tick until the session issues a query.
fn next_query(session: &mut SearchSession) -> IssuedQuery {
    for _ in 0..8 {
        if let Some(issued) = session.tick() {
            return issued;
        }
    }
    panic!("session never issued a query");
}

#[test]
fn startup_query_carries_default_filters() {
    let mut session = SearchSession::new(schema());

    let issued = next_query(&mut session);
    assert_eq!(issued.seq, 1);
    assert_eq!(issued.plan.method, PlanMethod::FiltersOnly);
    assert_eq!(issued.plan.facets_applied, ["status"]);
    assert!(issued.plan.params.contains(&PlanParam::Text("Open".into())));
}

#[test]
fn type_then_navigate_then_activate() {
    let mut session = SearchSession::new(schema());
    let startup = next_query(&mut session);
    session.apply_results(
        startup.seq,
        vec![
            issue("PROJ-3", "Login flaky", "Open", "alice"),
            issue("PROJ-1", "Crash on save", "Open", "bob"),
        ],
    );

    session.set_text("crash");
    let q = next_query(&mut session);
    assert_eq!(q.plan.method, PlanMethod::TextAndFilters);

    // store responds with the single hit, most recently updated first
    session.apply_results(q.seq, vec![issue("PROJ-1", "Crash on save", "Open", "bob")]);
    assert_eq!(session.results().selected_index(), Some(0));

    let activation = session.activate(Modifiers::default()).unwrap();
    assert_eq!(activation.key, "PROJ-1");
    assert!(!activation.keep_open);
}

#[test]
fn burst_typing_resolves_to_final_text_only() {
    let mut session = SearchSession::new(schema());
    let startup = next_query(&mut session);
    session.apply_results(startup.seq, Vec::new());

    // Simulate a typing burst where each keystroke's query is issued and the
    // store answers out of order.
    session.set_text("c");
    let q_c = next_query(&mut session);
    session.set_text("cr");
    let q_cr = next_query(&mut session);
    session.set_text("cra");
    let q_cra = next_query(&mut session);

    let respond = |text: &str| vec![issue(&format!("HIT-{}", text.len()), text, "Open", "")];

    assert_eq!(
        session.apply_results(q_cr.seq, respond("cr")),
        ApplyOutcome::Superseded
    );
    assert_eq!(
        session.apply_results(q_cra.seq, respond("cra")),
        ApplyOutcome::Applied
    );
    assert_eq!(
        session.apply_results(q_c.seq, respond("c")),
        ApplyOutcome::Superseded
    );

    // Only the final query's records are visible.
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.results().selected().unwrap().key(), "HIT-3");
}

#[test]
fn store_failure_keeps_stale_but_usable_list() {
    let mut session = SearchSession::new(schema());
    let startup = next_query(&mut session);
    session.apply_results(
        startup.seq,
        vec![
            issue("PROJ-1", "Crash on save", "Open", "bob"),
            issue("PROJ-2", "Slow search", "Open", "alice"),
        ],
    );
    session.move_down();

    session.set_text("slow");
    let q = next_query(&mut session);
    assert_eq!(session.apply_failure(q.seq), ApplyOutcome::Applied);

    // Previous list survives, selection included; activation still works.
    assert_eq!(session.results().len(), 2);
    let activation = session.activate(Modifiers::default()).unwrap();
    assert_eq!(activation.key, "PROJ-2");
}

#[test]
fn toggling_a_default_off_widens_the_search() {
    let mut session = SearchSession::new(schema());
    next_query(&mut session);

    // Turn the default "Open" constraint off — the group goes empty, which
    // means unconstrained rather than match-nothing.
    assert!(!session.toggle_filter("status", "Open").unwrap());
    let q = next_query(&mut session);
    assert_eq!(q.plan.method, PlanMethod::RecencyScan);
    assert!(q.plan.facets_applied.is_empty());
}
