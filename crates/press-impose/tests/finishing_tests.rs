use press_impose::*;

fn spec(technique: FinishingTechnique, side: FinishingSide, quantity: u32) -> FinishingSpec {
    FinishingSpec {
        technique,
        side,
        quantity,
        sheet_count: 0,
        item_footprint_area: None,
    }
}

#[test]
fn test_uv_spot() {
    let front = spec(FinishingTechnique::UvSpot, FinishingSide::Front, 3500);
    assert_eq!(billed_impressions(3500), 3500);
    assert_eq!(finishing_cost(&front), 1400.0);

    let both = spec(FinishingTechnique::UvSpot, FinishingSide::Both, 3500);
    assert_eq!(finishing_cost(&both), 2800.0);
}

#[test]
fn test_impression_floor_is_billed() {
    assert_eq!(billed_impressions(0), 1000);
    assert_eq!(billed_impressions(250), 1000);

    let small = spec(FinishingTechnique::Embossing, FinishingSide::Front, 250);
    // One block at 50, minimum 75
    assert_eq!(finishing_cost(&small), 75.0);

    let foiling = spec(FinishingTechnique::Foiling, FinishingSide::Back, 2001);
    assert_eq!(finishing_cost(&foiling), 225.0);
}

#[test]
fn test_lamination_is_sheet_based() {
    let mut lam = spec(FinishingTechnique::Lamination, FinishingSide::Front, 5000);
    lam.sheet_count = 100;
    assert_eq!(finishing_cost(&lam), 150.0);

    lam.side = FinishingSide::Both;
    assert_eq!(finishing_cost(&lam), 300.0);

    let mut velvet = spec(FinishingTechnique::VelvetLamination, FinishingSide::Front, 10);
    velvet.sheet_count = 40;
    assert_eq!(finishing_cost(&velvet), 140.0);

    velvet.sheet_count = 0;
    assert_eq!(finishing_cost(&velvet), 100.0);
}

#[test]
fn test_die_cut_size_tiers() {
    let mut die = spec(FinishingTechnique::DieCutting, FinishingSide::Both, 1000);
    assert_eq!(finishing_cost(&die), 75.0);

    die.item_footprint_area = Some(9.0 * 5.5);
    assert_eq!(finishing_cost(&die), 75.0);

    die.item_footprint_area = Some(21.0 * 29.7);
    assert_eq!(finishing_cost(&die), 100.0);

    die.item_footprint_area = Some(29.7 * 42.0);
    assert_eq!(finishing_cost(&die), 150.0);

    die.item_footprint_area = Some(42.0 * 59.4);
    assert_eq!(finishing_cost(&die), 200.0);

    // Rate takes over from the minimum on long runs; no side doubling
    die.quantity = 10_000;
    assert_eq!(finishing_cost(&die), 500.0);
}

#[test]
fn test_fixed_charges_ignore_sides_and_quantity() {
    let padding = spec(FinishingTechnique::Padding, FinishingSide::Both, 50_000);
    assert_eq!(finishing_cost(&padding), 25.0);

    let varnish = spec(FinishingTechnique::Varnishing, FinishingSide::Both, 1);
    assert_eq!(finishing_cost(&varnish), 30.0);
}

#[test]
fn test_folding_never_doubles() {
    let folding = spec(FinishingTechnique::Folding, FinishingSide::Both, 4200);
    assert_eq!(finishing_cost(&folding), 125.0);
}

#[test]
fn test_summary_counts_each_technique_once() {
    let specs = [
        spec(FinishingTechnique::UvSpot, FinishingSide::Front, 3500),
        spec(FinishingTechnique::Padding, FinishingSide::Front, 3500),
        spec(FinishingTechnique::UvSpot, FinishingSide::Both, 3500),
    ];
    let summary = finishing_summary(&specs);

    assert_eq!(summary.lines.len(), 2);
    assert_eq!(summary.lines[0].technique, FinishingTechnique::UvSpot);
    assert_eq!(summary.lines[0].side, FinishingSide::Front);
    assert_eq!(summary.total, 1425.0);
}

#[test]
fn test_empty_summary() {
    let summary = finishing_summary(&[]);
    assert!(summary.lines.is_empty());
    assert_eq!(summary.total, 0.0);
}

#[test]
fn test_parse_technique_names() {
    assert_eq!("UV Spot".parse::<FinishingTechnique>(), Ok(FinishingTechnique::UvSpot));
    assert_eq!("uv_spot".parse::<FinishingTechnique>(), Ok(FinishingTechnique::UvSpot));
    assert_eq!(
        "velvet-lamination".parse::<FinishingTechnique>(),
        Ok(FinishingTechnique::VelvetLamination)
    );
    assert_eq!("Die Cutting".parse::<FinishingTechnique>(), Ok(FinishingTechnique::DieCutting));
    assert!("gilding".parse::<FinishingTechnique>().is_err());

    for technique in FinishingTechnique::ALL {
        assert_eq!(technique.to_string().parse::<FinishingTechnique>(), Ok(technique));
    }
}
