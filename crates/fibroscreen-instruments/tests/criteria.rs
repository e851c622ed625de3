use fibroscreen_instruments::criteria::CriteriaBreakdown;
use fibroscreen_instruments::engine::evaluate_diagnostic_criteria;

#[test]
fn breakdown_reports_each_branch() {
    let breakdown = CriteriaBreakdown::evaluate(5, 10);
    assert!(!breakdown.criterion_1a.wpi_met);
    assert!(breakdown.criterion_1a.ss_met);
    assert!(!breakdown.criterion_1a.met());
    assert!(breakdown.criterion_1b.wpi_met);
    assert!(breakdown.criterion_1b.ss_met);
    assert!(breakdown.criterion_1b.met());
    assert!(breakdown.meets_criteria());
}

#[test]
fn wpi_between_branches_needs_nothing_else_to_fail() {
    let breakdown = CriteriaBreakdown::evaluate(2, 12);
    assert!(!breakdown.criterion_1a.wpi_met);
    assert!(!breakdown.criterion_1b.wpi_met);
    assert!(!breakdown.meets_criteria());
}

#[test]
fn breakdown_agrees_with_rule_over_whole_domain() {
    for wpi in 0..=19u8 {
        for ss in 0..=12u8 {
            assert_eq!(
                CriteriaBreakdown::evaluate(wpi, ss).meets_criteria(),
                evaluate_diagnostic_criteria(wpi, ss),
                "wpi={wpi} ss={ss}"
            );
        }
    }
}
