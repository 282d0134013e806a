use lifewave_core::error::LifeError;
use lifewave_core::preset::bank::{self, Bank};
use lifewave_core::preset::defaults::{default_preset, default_shared, PRESET_COUNT};
use lifewave_core::preset::format::{decode, encode, preset_id_16, preset_id_hex};
use lifewave_core::preset::store::{init_engine, init_presets, save_engine, PresetStore};
use lifewave_core::{Generation, LifeEngine, Preset, PresetMeta, RuleParams, VirtualPanel, WaveState};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_preset() -> (Preset, PresetMeta) {
    let preset = Preset {
        params: RuleParams::CONWAY,
        wave: WaveState {
            wave_repeat: 5,
            wave_count: 2,
            cv_row: 9,
        },
        cells: Generation::from_rows(&[".#.", "..#", "###"]),
    };
    let meta = PresetMeta {
        glyph: [0x18, 0x3C, 0x7E, 0xFF, 0xFF, 0x7E, 0x3C, 0x18],
    };
    (preset, meta)
}

#[test]
fn preset_record_restores_all_fields() {
    let (p, m) = sample_preset();
    let bytes = encode(&p, &m);
    assert_eq!(&bytes[0..4], b"WLP1");
    assert_eq!(bytes.len(), 4 + 2 + 4 + 5 + 32 + 8 + 4 + 16);

    let (p2, m2) = decode(&bytes).unwrap();
    assert_eq!(p2, p);
    assert_eq!(m2, m);
    assert_eq!(p2.cells.to_rows()[2], "###.............");
}

#[test]
fn corrupted_record_is_rejected() {
    let (p, m) = sample_preset();
    let mut bytes = encode(&p, &m);
    bytes[20] ^= 0x01;
    assert!(matches!(decode(&bytes), Err(LifeError::PresetFormat(_))));

    let bytes = encode(&p, &m);
    assert!(decode(&bytes[..bytes.len() - 1]).is_err());
    assert!(decode(b"NOPE").is_err());

    let mut long = bytes.clone();
    long.push(0);
    assert!(decode(&long).is_err());
}

#[test]
fn preset_id_tracks_content() {
    let (p, m) = sample_preset();
    assert_eq!(preset_id_16(&p, &m), preset_id_16(&p, &m));
    assert_eq!(preset_id_hex(&p, &m).len(), 32);

    let mut q = p;
    q.params.live_max = 4;
    assert_ne!(preset_id_16(&p, &m), preset_id_16(&q, &m));

    let mut q = p;
    q.cells.set(10, 10, true);
    assert_ne!(preset_id_16(&p, &m), preset_id_16(&q, &m));
}

#[test]
fn engine_rejects_out_of_range_presets() {
    let mut p = default_preset();
    p.params.birth_max = 9;
    assert!(matches!(
        LifeEngine::with_seed(&p, &default_shared(), 0),
        Err(LifeError::Validation(_))
    ));

    let mut p = default_preset();
    p.wave.wave_repeat = 33;
    assert!(LifeEngine::with_seed(&p, &default_shared(), 0).is_err());

    let mut shared = default_shared();
    shared.levels.matrix_on = 16;
    assert!(LifeEngine::with_seed(&default_preset(), &shared, 0).is_err());
}

#[test]
fn bank_survives_encode_decode() {
    let (p, m) = sample_preset();
    let mut b = Bank::default();
    assert_eq!(b.preset_count(), PRESET_COUNT);
    b.store_preset(3, &p, &m).unwrap();
    b.store_preset_index(3).unwrap();
    b.shared.levels.matrix_on = 12;

    let bytes = bank::encode(&b).unwrap();
    let b2 = bank::decode(&bytes).unwrap();
    assert_eq!(b2, b);

    let mut bad = bytes.clone();
    let last = bad.len() - 1;
    bad[last] ^= 0xFF;
    assert!(bank::decode(&bad).is_err());
}

#[test]
fn first_boot_resets_every_slot() {
    let (p, m) = sample_preset();
    let mut b = Bank::with_slots(4);
    b.store_preset(2, &p, &m).unwrap();
    b.store_preset_index(2).unwrap();

    init_presets(&mut b).unwrap();
    assert_eq!(b.preset_index(), 0);
    for i in 0..4 {
        assert_eq!(b.load_preset(i).unwrap(), default_preset());
        assert_eq!(b.load_meta(i).unwrap(), PresetMeta::default());
    }
    assert!(b.store_preset_index(4).is_err());
    assert!(b.load_preset(4).is_err());
}

#[test]
fn startup_loads_selected_slot_and_save_writes_it_back() {
    let (p, m) = sample_preset();
    let mut b = Bank::with_slots(4);
    b.store_preset(1, &p, &m).unwrap();
    b.store_preset_index(1).unwrap();

    let (index, mut e) = init_engine(&b, StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(index, 1);
    assert_eq!(e.snapshot(), p);

    let mut panel = VirtualPanel::default();
    e.press(12, 12, true, &mut panel);
    save_engine(&mut b, 2, &e).unwrap();

    assert_eq!(b.preset_index(), 2);
    let saved = b.load_preset(2).unwrap();
    assert!(saved.cells.get(12, 12));
    assert_eq!(saved.params, RuleParams::CONWAY);
    // slot 2 keeps its own (default) glyph
    assert_eq!(b.load_meta(2).unwrap(), PresetMeta::default());
}

#[test]
fn switching_presets_keeps_counters() {
    let (p, _) = sample_preset();
    let mut e = LifeEngine::with_seed(&default_preset(), &default_shared(), 8).unwrap();
    let mut panel = VirtualPanel::default();
    e.tick(&mut panel);
    e.load(&p).unwrap();
    assert_eq!(e.snapshot(), p);
    assert_eq!(e.stats.ticks, 1);

    let mut bad = p;
    bad.wave.cv_row = 16;
    assert!(e.load(&bad).is_err());
    assert_eq!(e.snapshot(), p);
}
