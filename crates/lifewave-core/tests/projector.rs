use lifewave_core::output::hw::CvOut;
use lifewave_core::output::projector::{cv_level, render_cv, render_matrix, render_ring, RingInputs};
use lifewave_core::output::Levels;
use lifewave_core::{Generation, RuleParams, VirtualPanel};

fn ring_inputs(live_max: u8, birth_min: u8, birth_max: u8, wave_repeat: u16) -> RingInputs {
    RingInputs {
        params: RuleParams {
            live_min: 2,
            live_max,
            birth_min,
            birth_max,
        },
        wave_repeat,
    }
}

#[test]
fn cv_is_linear_in_row_population() {
    let mut g = Generation::empty();
    for x in 0..8 {
        g.set(x, 4, true);
    }
    assert_eq!(cv_level(&g, 4, 65535), 32760);
    assert_eq!(cv_level(&g, 5, 65535), 0);

    for x in 8..16 {
        g.set(x, 4, true);
    }
    assert_eq!(cv_level(&g, 4, 65535), 65520);
    // 14-bit DAC
    assert_eq!(cv_level(&g, 4, 16383), 1023 * 16);
}

#[test]
fn cv_goes_to_channel_zero_with_panel_scale() {
    let mut g = Generation::empty();
    g.set(0, 2, true);
    let mut panel = VirtualPanel::new(16, 16, 16383);
    assert_eq!(panel.max_level(), 16383);
    let level = render_cv(&g, 2, &mut panel);
    assert_eq!(level, 1023);
    assert_eq!(panel.cv(0), 1023);
    assert_eq!(panel.cv(1), 0);
}

#[test]
fn matrix_clips_to_smaller_hardware() {
    let mut g = Generation::empty();
    g.set(7, 3, true);
    g.set(8, 3, true);
    g.set(7, 4, true);

    let mut panel = VirtualPanel::new(8, 4, 65535);
    render_matrix(&g, &Levels::default(), &mut panel);
    assert_eq!(panel.matrix_level(7, 3), 8);
    assert_eq!(panel.matrix_level(6, 3), 0);
    assert_eq!(panel.grid_refreshes, 1);
}

#[test]
fn matrix_leaves_extra_hardware_columns_dark() {
    let mut g = Generation::empty();
    for x in 0..16 {
        g.set(x, 0, true);
    }
    let mut panel = VirtualPanel::new(32, 16, 65535);
    render_matrix(&g, &Levels::default(), &mut panel);
    assert_eq!(panel.matrix_level(15, 0), 8);
    assert_eq!(panel.matrix_level(16, 0), 0);
    assert_eq!(panel.matrix_level(31, 0), 0);
}

#[test]
fn threshold_indicators_cover_one_eighth_per_step() {
    let g = Generation::empty();
    let mut panel = VirtualPanel::default();

    render_ring(&g, ring_inputs(8, 2, 1, 0), &Levels::default(), &mut panel);
    assert_eq!(panel.ring_lit(0), (56..64).collect::<Vec<_>>());
    assert_eq!(panel.ring_lit(1), (8..16).collect::<Vec<_>>());
    assert_eq!(panel.ring_lit(2), (0..8).collect::<Vec<_>>());
    assert!(panel.ring_lit(3).is_empty());
    assert_eq!(panel.ring_level(0, 56), 15);

    render_ring(&g, ring_inputs(0, 0, 0, 32), &Levels::default(), &mut panel);
    assert!(panel.ring_lit(0).is_empty());
    assert!(panel.ring_lit(1).is_empty());
    assert!(panel.ring_lit(2).is_empty());
    assert_eq!(panel.ring_lit(3), vec![62, 63]);
}

#[test]
fn wave_indicator_scales_to_full_ring() {
    let g = Generation::empty();
    let mut panel = VirtualPanel::default();
    render_ring(&g, ring_inputs(0, 0, 0, 1), &Levels::default(), &mut panel);
    assert_eq!(panel.ring_lit(3), vec![0, 1]);
    render_ring(&g, ring_inputs(0, 0, 0, 16), &Levels::default(), &mut panel);
    assert_eq!(panel.ring_lit(3), vec![30, 31]);
}

#[test]
fn cells_land_on_product_index() {
    let mut g = Generation::empty();
    g.set(15, 15, true); // 225 -> ring 3, position 33
    g.set(15, 1, true); // 15 -> ring 0, position 15 (last of the pairs with product 15)
    let mut panel = VirtualPanel::default();
    render_ring(&g, ring_inputs(0, 0, 0, 0), &Levels::default(), &mut panel);
    assert_eq!(panel.ring_lit(3), vec![33]);
    assert_eq!(panel.ring_level(3, 33), 4);
    assert_eq!(panel.ring_lit(0), vec![15]);
}

#[test]
fn later_cell_wins_a_shared_slot() {
    // (2,8), (4,4) and (8,2) all map to index 16; x-major order visits (8,2) last
    let mut panel = VirtualPanel::default();
    let inputs = ring_inputs(0, 0, 0, 0);

    let mut g = Generation::empty();
    g.set(2, 8, true);
    render_ring(&g, inputs, &Levels::default(), &mut panel);
    assert_eq!(panel.ring_level(0, 16), 0);

    let mut g = Generation::empty();
    g.set(8, 2, true);
    render_ring(&g, inputs, &Levels::default(), &mut panel);
    assert_eq!(panel.ring_level(0, 16), 4);
}

#[test]
fn indicator_overrides_cell_level() {
    let mut g = Generation::empty();
    g.set(1, 57, true); // wraps to (1, 9): index 9 -> ring 0 pos 9
    let mut panel = VirtualPanel::default();
    render_ring(&g, ring_inputs(2, 0, 0, 0), &Levels::default(), &mut panel);
    assert_eq!(panel.ring_level(0, 9), 15);
    assert_eq!(panel.ring_lit(0), (8..16).collect::<Vec<_>>());
}

#[test]
fn out_of_range_ring_reads_are_empty() {
    let mut panel = VirtualPanel::default();
    render_ring(&Generation::empty(), ring_inputs(3, 3, 3, 32), &Levels::default(), &mut panel);
    assert!(panel.ring(3).is_some());
    assert!(panel.ring(4).is_none());
    assert!(panel.ring_lit(4).is_empty());
    assert_eq!(panel.ring_level(9, 0), 0);
}
