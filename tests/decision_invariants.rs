//! Decision Invariant Tests
//!
//! End-to-end properties of the decision pipeline:
//! - The cheapest fully-covering column wins, ties go to the first column
//! - Decisions do not depend on selection order or duplicates
//! - A BGN exam finding pre-empts matching unless a BGN organism is selected
//! - Escalation peels atypicals, then MRSA, then S. aureus
//! - Empty selections and unknown names are rejected, "no treatment" is not

use abxadvisor::engine::{
    CommonTreatmentMatcher, DecisionOrchestrator, DecisionPath, DecisionRules, EngineErrorCode,
    EscalationStage, ExamFindings, Selection,
};
use abxadvisor::errors::ErrorClass;
use abxadvisor::table::{Item, TreatmentTable};

// =============================================================================
// Helper Functions
// =============================================================================

fn enterobacteria_table() -> TreatmentTable {
    TreatmentTable::new(
        vec!["T1".into(), "T2".into()],
        vec![
            Item::bacterium("Escherichia coli")
                .with_bgn(true)
                .with_score("T1", 2)
                .with_score("T2", 5),
            Item::bacterium("Klebsiella pneumoniae")
                .with_bgn(true)
                .with_score("T1", 3)
                .with_score("T2", 1),
        ],
    )
    .unwrap()
}

fn pneumonia_table() -> TreatmentTable {
    TreatmentTable::new(
        vec![
            "Amoxicilline".into(),
            "Ceftriaxone".into(),
            "Vancomycine".into(),
        ],
        vec![
            Item::bacterium("Streptococcus pneumoniae")
                .with_score("Amoxicilline", 1)
                .with_score("Ceftriaxone", 2)
                .with_score("Vancomycine", 3),
            Item::bacterium("Haemophilus influenzae")
                .with_score("Amoxicilline", 2)
                .with_score("Ceftriaxone", 1),
            Item::bacterium("Staphylococcus aureus").with_score("Vancomycine", 2),
            Item::bacterium("Escherichia coli")
                .with_bgn(true)
                .with_score("Ceftriaxone", 1),
            Item::bacterium("Mycoplasma pneumoniae"),
            Item::bacterium("Legionella pneumophila"),
            Item::bacterium("Chlamydia pneumoniae"),
            Item::resistance("MRSA"),
        ],
    )
    .unwrap()
}

fn decide(table: &TreatmentTable, items: &[&str], exam: &[&str]) -> Option<String> {
    let rules = DecisionRules::default();
    DecisionOrchestrator::new(table, &rules)
        .decide(
            &Selection::new(items.iter().copied()),
            &ExamFindings::new(exam.iter().copied()),
        )
        .unwrap()
}

fn path(table: &TreatmentTable, items: &[&str], exam: &[&str]) -> DecisionPath {
    let rules = DecisionRules::default();
    DecisionOrchestrator::new(table, &rules)
        .evaluate(
            &Selection::new(items.iter().copied()),
            &ExamFindings::new(exam.iter().copied()),
        )
        .unwrap()
        .path
}

// =============================================================================
// Common Treatment Tests
// =============================================================================

/// Minimum summed score wins (5 over 6).
#[test]
fn test_minimum_sum_wins() {
    let table = enterobacteria_table();
    let result = decide(&table, &["Escherichia coli", "Klebsiella pneumoniae"], &[]);
    assert_eq!(result.as_deref(), Some("T1"));
    assert_eq!(
        path(&table, &["Escherichia coli", "Klebsiella pneumoniae"], &[]),
        DecisionPath::CommonTreatment { total_score: 5 }
    );
}

/// A column must cover every selected item.
#[test]
fn test_partial_column_is_skipped() {
    let table = pneumonia_table();
    let result = decide(
        &table,
        &["Streptococcus pneumoniae", "Staphylococcus aureus"],
        &[],
    );
    assert_eq!(result.as_deref(), Some("Vancomycine"));
}

/// Equal sums go to the first column, whichever order the items arrive in.
#[test]
fn test_tie_goes_to_first_column() {
    let table = TreatmentTable::new(
        vec!["T1".into(), "T2".into()],
        vec![
            Item::bacterium("A").with_score("T1", 1).with_score("T2", 2),
            Item::bacterium("B").with_score("T1", 2).with_score("T2", 1),
        ],
    )
    .unwrap();

    for order in [["A", "B"], ["B", "A"]] {
        assert_eq!(decide(&table, &order, &[]).as_deref(), Some("T1"));
    }

    let swapped = TreatmentTable::new(
        vec!["T2".into(), "T1".into()],
        vec![
            Item::bacterium("A").with_score("T1", 1).with_score("T2", 2),
            Item::bacterium("B").with_score("T1", 2).with_score("T2", 1),
        ],
    )
    .unwrap();
    assert_eq!(decide(&swapped, &["A", "B"], &[]).as_deref(), Some("T2"));
}

/// The matcher alone returns nothing for an empty selection.
#[test]
fn test_matcher_empty_selection() {
    let table = pneumonia_table();
    let matcher = CommonTreatmentMatcher::new(&table);
    assert!(matcher.find(&Selection::new(Vec::<String>::new())).is_none());
}

// =============================================================================
// Order Independence Tests
// =============================================================================

/// Every permutation, with or without duplicates, decides the same way.
#[test]
fn test_decision_is_order_independent() {
    let table = pneumonia_table();
    let permutations: [&[&str]; 6] = [
        &["Streptococcus pneumoniae", "Haemophilus influenzae", "Legionella pneumophila"],
        &["Streptococcus pneumoniae", "Legionella pneumophila", "Haemophilus influenzae"],
        &["Haemophilus influenzae", "Streptococcus pneumoniae", "Legionella pneumophila"],
        &["Haemophilus influenzae", "Legionella pneumophila", "Streptococcus pneumoniae"],
        &["Legionella pneumophila", "Streptococcus pneumoniae", "Haemophilus influenzae"],
        &[
            "Legionella pneumophila",
            "Haemophilus influenzae",
            "Streptococcus pneumoniae",
            "Legionella pneumophila",
        ],
    ];

    let expected = decide(&table, permutations[0], &[]);
    assert!(expected.is_some());
    for items in permutations {
        assert_eq!(decide(&table, items, &[]), expected);
    }
}

/// Same input always yields the same output.
#[test]
fn test_decision_is_deterministic() {
    let table = pneumonia_table();
    let first = decide(&table, &["MRSA", "Haemophilus influenzae"], &[]);
    for _ in 0..100 {
        assert_eq!(decide(&table, &["MRSA", "Haemophilus influenzae"], &[]), first);
    }
}

// =============================================================================
// BGN Override Tests
// =============================================================================

/// MRSA with a BGN exam gets the empirical base plus the MRSA adjunct.
#[test]
fn test_bgn_with_mrsa() {
    let table = pneumonia_table();
    assert_eq!(
        decide(&table, &["MRSA"], &["BGN"]).as_deref(),
        Some("Cefepime + Amikacine + Linezolide")
    );
}

#[test]
fn test_bgn_rule_ladder() {
    let table = pneumonia_table();

    assert_eq!(
        decide(&table, &["Mycoplasma pneumoniae", "MRSA"], &["BGN"]).as_deref(),
        Some("Cefepime + Amikacine + Spiramycine + Linezolide")
    );
    assert_eq!(
        decide(&table, &["Chlamydia pneumoniae"], &["BGN"]).as_deref(),
        Some("Cefepime + Amikacine + Spiramycine")
    );
    assert_eq!(
        decide(&table, &["Streptococcus pneumoniae"], &["BGN"]).as_deref(),
        Some("Cefepime + Amikacine")
    );
}

/// The override wins even when a common treatment exists.
#[test]
fn test_bgn_pre_empts_common_match() {
    let table = pneumonia_table();
    let items = ["Streptococcus pneumoniae", "Haemophilus influenzae"];

    assert_eq!(decide(&table, &items, &[]).as_deref(), Some("Amoxicilline"));
    assert_eq!(
        decide(&table, &items, &["BGN", "CGP"]).as_deref(),
        Some("Cefepime + Amikacine")
    );
}

/// A selected BGN organism disables the override.
#[test]
fn test_bgn_organism_disables_override() {
    let table = pneumonia_table();
    let items = ["Escherichia coli", "Haemophilus influenzae"];

    assert_eq!(decide(&table, &items, &["BGN"]).as_deref(), Some("Ceftriaxone"));
    assert_eq!(
        path(&table, &items, &["BGN"]),
        DecisionPath::CommonTreatment { total_score: 2 }
    );
}

/// Findings other than BGN are ignored.
#[test]
fn test_other_findings_ignored() {
    let table = pneumonia_table();
    assert_eq!(
        decide(&table, &["Haemophilus influenzae"], &["CGP", "bgn"]).as_deref(),
        Some("Ceftriaxone")
    );
}

// =============================================================================
// Escalation Tests
// =============================================================================

/// An atypical organism alone escalates to the adjunct alone.
#[test]
fn test_atypical_alone() {
    let table = pneumonia_table();
    assert_eq!(
        decide(&table, &["Mycoplasma pneumoniae"], &[]).as_deref(),
        Some("Spiramycine")
    );
}

/// When stage 1 succeeds the label ends with the atypical adjunct and
/// carries nothing from later stages.
#[test]
fn test_stage_one_success_stops_escalation() {
    let table = pneumonia_table();
    let result = decide(
        &table,
        &["Streptococcus pneumoniae", "Legionella pneumophila"],
        &[],
    )
    .unwrap();

    assert_eq!(result, "Amoxicilline + Spiramycine");
    assert!(result.ends_with(" + Spiramycine"));
    assert!(!result.contains("Linezolide"));
}

/// MRSA removal also drops S. aureus, so the S. aureus stage never fires.
#[test]
fn test_mrsa_stage_removes_staph_aureus() {
    let table = pneumonia_table();
    let items = ["MRSA", "Staphylococcus aureus", "Haemophilus influenzae"];

    assert_eq!(
        decide(&table, &items, &[]).as_deref(),
        Some("Ceftriaxone + Linezolide")
    );
    match path(&table, &items, &[]) {
        DecisionPath::Escalation { stages, base } => {
            assert_eq!(stages, vec![EscalationStage::Mrsa]);
            assert_eq!(base.unwrap().treatment, "Ceftriaxone");
        }
        other => panic!("expected escalation, got {:?}", other),
    }
}

/// Stages accumulate in order when earlier retries fail.
#[test]
fn test_stages_accumulate() {
    let table = pneumonia_table();
    assert_eq!(
        decide(
            &table,
            &["Legionella pneumophila", "MRSA", "Haemophilus influenzae"],
            &[]
        )
        .as_deref(),
        Some("Ceftriaxone + Spiramycine + Linezolide")
    );
}

#[test]
fn test_staph_aureus_stage() {
    let table = pneumonia_table();
    assert_eq!(
        decide(
            &table,
            &["Staphylococcus aureus", "Haemophilus influenzae"],
            &[]
        )
        .as_deref(),
        Some("Ceftriaxone + Oracilline (ou Cefazoline si récurrence)")
    );
}

// =============================================================================
// Outcome Classification Tests
// =============================================================================

/// No covering column and nothing to peel is a normal empty outcome.
#[test]
fn test_no_common_treatment_is_not_an_error() {
    let table = TreatmentTable::new(
        vec!["T1".into(), "T2".into()],
        vec![
            Item::bacterium("A").with_score("T1", 1),
            Item::bacterium("B").with_score("T2", 1),
        ],
    )
    .unwrap();

    assert_eq!(decide(&table, &["A", "B"], &[]), None);
    assert_eq!(path(&table, &["A", "B"], &[]), DecisionPath::NoCommonTreatment);
}

#[test]
fn test_empty_selection_is_input_error() {
    let table = pneumonia_table();
    let rules = DecisionRules::default();
    let err = DecisionOrchestrator::new(&table, &rules)
        .decide(&Selection::new(Vec::<String>::new()), &ExamFindings::new(["BGN"]))
        .unwrap_err();

    assert_eq!(err.code(), EngineErrorCode::AbxEmptySelection);
    assert_eq!(err.class(), ErrorClass::Input);
}

#[test]
fn test_unknown_item_is_collaborator_failure() {
    let table = pneumonia_table();
    let rules = DecisionRules::default();
    let err = DecisionOrchestrator::new(&table, &rules)
        .decide(
            &Selection::new(["Haemophilus influenzae", "Nocardia"]),
            &ExamFindings::none(),
        )
        .unwrap_err();

    assert_eq!(err.code(), EngineErrorCode::AbxUnknownItem);
    assert_eq!(err.class(), ErrorClass::Collaborator);
    assert_eq!(err.item(), Some("Nocardia"));
}

// =============================================================================
// Rule Override Tests
// =============================================================================

#[test]
fn test_custom_rules_change_labels() {
    let table = pneumonia_table();
    let rules = DecisionRules {
        bgn_empirical_base: vec!["Meropenem".into()],
        mrsa_adjunct: "Vancomycine".into(),
        ..DecisionRules::default()
    };

    let result = DecisionOrchestrator::new(&table, &rules)
        .decide(&Selection::new(["MRSA"]), &ExamFindings::new(["BGN"]))
        .unwrap();
    assert_eq!(result.as_deref(), Some("Meropenem + Vancomycine"));
}
