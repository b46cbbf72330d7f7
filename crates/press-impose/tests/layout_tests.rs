use press_impose::*;

fn params(gap: f64) -> ProductionParameters {
    ProductionParameters {
        gripper_width: 0.9,
        edge_margin: 0.5,
        gap_width: gap,
        bleed_width: 0.3,
    }
}

fn grid(sheet: SheetSize, w: f64, h: f64) -> LayoutResult {
    packed(sheet, w, h, PackingStrategy::Grid)
}

fn packed(sheet: SheetSize, w: f64, h: f64, strategy: PackingStrategy) -> LayoutResult {
    impose_rect(sheet, w, h, &ProductionParameters::default(), strategy)
}

const STRATEGIES: [PackingStrategy; 3] = [
    PackingStrategy::Grid,
    PackingStrategy::Dieline,
    PackingStrategy::CircularBase,
];

const SHEETS: [(f64, f64); 5] = [
    (35.0, 50.0),
    (50.0, 35.0),
    (70.0, 100.0),
    (32.0, 45.0),
    (40.0, 40.0),
];

const ITEMS: [(f64, f64); 8] = [
    (9.0, 5.5),
    (21.0, 29.7),
    (14.8, 21.0),
    (10.0, 10.0),
    (42.0, 59.4),
    (3.0, 17.0),
    (20.0, 8.0),
    (54.0, 32.0),
];

#[test]
fn test_business_card_on_35x50() {
    let layout = impose_rect(
        SheetSize::new(35.0, 50.0),
        9.0,
        5.5,
        &params(0.5),
        PackingStrategy::Grid,
    );

    // Compact item: gap drops to 0.2
    assert_eq!(layout.gap_used, 0.2);
    assert_eq!(layout.gripper_edge, GripperEdge::LeftOrRight);
    assert!(layout.items_per_sheet > 0);
    assert_eq!(layout.items_per_sheet, 25);
    assert_eq!(layout.orientation, Orientation::Rotated);

    let expected =
        layout.items_per_row as f64 * layout.items_per_col as f64 * 9.0 * 5.5 / (35.0 * 50.0) * 100.0;
    assert!((layout.efficiency_percent - expected).abs() < 1e-9);
}

#[test]
fn test_infeasible_item() {
    let layout = grid(SheetSize::new(10.0, 10.0), 20.0, 20.0);
    assert_eq!(layout.items_per_sheet, 0);
    assert_eq!(layout.efficiency_percent, 0.0);

    let rotated = grid(SheetSize::new(10.0, 10.0), 20.0, 5.0);
    assert_eq!(rotated.items_per_sheet, 0);
}

#[test]
fn test_insufficient_dimensions_are_empty() {
    for (w, h) in [(0.0, 5.0), (5.0, -1.0), (f64::NAN, 5.0), (f64::INFINITY, 5.0)] {
        let layout = grid(SheetSize::new(35.0, 50.0), w, h);
        assert!(layout.is_empty(), "{}x{} should not pack", w, h);
    }

    let layout = grid(SheetSize::new(-35.0, 50.0), 5.0, 5.0);
    assert!(layout.is_empty());
    assert_eq!(layout.usable_width, 0.0);
}

#[test]
fn test_idempotent() {
    for &(sw, sh) in &SHEETS {
        for &(w, h) in &ITEMS {
            let sheet = SheetSize::new(sw, sh);
            assert_eq!(grid(sheet, w, h), grid(sheet, w, h));
        }
    }
}

#[test]
fn test_grid_consistency_and_efficiency_bound() {
    for strategy in STRATEGIES {
        for &(sw, sh) in &SHEETS {
            for &(w, h) in &ITEMS {
                let layout = packed(SheetSize::new(sw, sh), w, h, strategy);
                assert_eq!(
                    layout.items_per_sheet,
                    layout.items_per_row * layout.items_per_col
                );
                assert!((0.0..=100.0).contains(&layout.efficiency_percent));
            }
        }
    }
}

#[test]
fn test_rotation_symmetry() {
    for strategy in STRATEGIES {
        for &(sw, sh) in &SHEETS {
            for &(w, h) in &ITEMS {
                let a = packed(SheetSize::new(h.max(sw), w.max(sh)), w, h, strategy);
                let b = packed(SheetSize::new(w.max(sh), h.max(sw)), h, w, strategy);
                assert_eq!(a.items_per_sheet, b.items_per_sheet, "{:?} {}x{}", strategy, w, h);

                let c = packed(SheetSize::new(sw, sh), w, h, strategy);
                let d = packed(SheetSize::new(sh, sw), h, w, strategy);
                assert_eq!(
                    c.items_per_sheet, d.items_per_sheet,
                    "{:?} {}x{} on {}x{}",
                    strategy, w, h, sw, sh
                );
            }
        }
    }
}

#[test]
fn test_cup_stack_ignores_sheet_orientation() {
    // Long side of the cup only fits along the sheet's long axis
    let portrait = packed(SheetSize::new(18.0, 30.0), 20.0, 8.0, PackingStrategy::CircularBase);
    let landscape = packed(SheetSize::new(30.0, 18.0), 8.0, 20.0, PackingStrategy::CircularBase);

    assert_eq!(portrait.items_per_sheet, 4);
    assert_eq!(landscape.items_per_sheet, 4);
    assert_eq!(portrait.adjustment, Some(LayoutAdjustment::MinimumYieldStack));
    assert_eq!(landscape.adjustment, Some(LayoutAdjustment::MinimumYieldStack));
}

#[test]
fn test_larger_sheet_never_packs_fewer() {
    for strategy in STRATEGIES {
        for &(w, h) in &ITEMS {
            let mut previous = 0;
            // Portrait sheets growing in both directions keep the gripper on the height
            for step in 0..20 {
                let width = 30.0 + step as f64 * 2.5;
                let sheet = SheetSize::new(width, width * 1.4);
                let count = packed(sheet, w, h, strategy).items_per_sheet;
                assert!(count >= previous, "{:?} {}x{} on {:?}", strategy, w, h, sheet);
                previous = count;
            }

            let mut previous = 0;
            // Taller sheets of a fixed width
            for step in 0..20 {
                let sheet = SheetSize::new(35.0, 50.0 + step as f64 * 3.0);
                let count = packed(sheet, w, h, strategy).items_per_sheet;
                assert!(count >= previous, "{:?} {}x{} on {:?}", strategy, w, h, sheet);
                previous = count;
            }
        }
    }
}

#[test]
fn test_tiny_item_count_saturates() {
    let zero = ProductionParameters {
        gripper_width: 0.0,
        edge_margin: 0.0,
        gap_width: 0.0,
        bleed_width: 0.0,
    };
    let layout = impose_rect(
        SheetSize::new(100.0, 100.0),
        1e-6,
        1e-6,
        &zero,
        PackingStrategy::Grid,
    );

    assert_eq!(layout.items_per_sheet, u32::MAX);
    assert!((0.0..=100.0).contains(&layout.efficiency_percent));
}

#[test]
fn test_normal_wins_ties() {
    let layout = grid(SheetSize::new(40.0, 40.0), 10.0, 10.0);
    assert_eq!(layout.orientation, Orientation::Normal);
}

#[test]
fn test_bleed_does_not_change_packing() {
    let sheet = SheetSize::new(50.0, 70.0);
    let mut with_bleed = params(0.5);
    with_bleed.bleed_width = 3.0;

    let a = impose_rect(sheet, 21.0, 29.7, &params(0.5), PackingStrategy::Grid);
    let b = impose_rect(sheet, 21.0, 29.7, &with_bleed, PackingStrategy::Grid);
    assert_eq!(a, b);
}

#[test]
fn test_negative_parameters_are_clamped() {
    let sheet = SheetSize::new(35.0, 50.0);
    let bad = ProductionParameters {
        gripper_width: -1.0,
        edge_margin: f64::NAN,
        gap_width: -0.5,
        bleed_width: 0.0,
    };
    let zero = ProductionParameters {
        gripper_width: 0.0,
        edge_margin: 0.0,
        gap_width: 0.0,
        bleed_width: 0.0,
    };

    let a = impose_rect(sheet, 10.0, 10.0, &bad, PackingStrategy::Grid);
    let b = impose_rect(sheet, 10.0, 10.0, &zero, PackingStrategy::Grid);
    assert_eq!(a, b);
    assert_eq!(a.items_per_sheet, 15);
}

#[test]
fn test_resolved_bag_gets_large_dieline_target() {
    // Heuristic: 54 × 32 small bag raised from the greedy 2 to 3
    let item = resolve_geometry(&ProductSpec {
        kind: ProductKind::PaperBag,
        bag_preset: Some("small".to_string()),
        ..Default::default()
    });
    let layout = impose(SheetSize::new(64.0, 90.0), &item, &ProductionParameters::default());

    assert_eq!(layout.items_per_sheet, 3);
    assert_eq!(
        layout.adjustment,
        Some(LayoutAdjustment::LargeDielineTarget { target: 3 })
    );
}

#[test]
fn test_flat_rectangle_of_bag_size_is_not_adjusted() {
    let layout = grid(SheetSize::new(64.0, 90.0), 54.0, 32.0);
    assert_eq!(layout.items_per_sheet, 2);
    assert_eq!(layout.adjustment, None);
}

#[test]
fn test_cup_reduced_gap() {
    // Heuristic: 3 cups at 0.5 gap become 4 at 0.2
    let item = resolve_geometry(&ProductSpec::new(ProductKind::PaperCup, 20.0, 8.0));
    let layout = impose(SheetSize::new(22.0, 34.0), &item, &ProductionParameters::default());

    assert_eq!(layout.items_per_sheet, 4);
    assert_eq!(layout.gap_used, 0.2);
    assert_eq!(layout.adjustment, Some(LayoutAdjustment::ReducedGap));
}

#[test]
fn test_cup_with_enough_room_is_plain_grid() {
    let item = resolve_geometry(&ProductSpec::new(ProductKind::PaperCup, 20.0, 8.0));
    let layout = impose(SheetSize::new(70.0, 100.0), &item, &ProductionParameters::default());

    assert!(layout.items_per_sheet >= 4);
    assert_eq!(layout.adjustment, None);
}
