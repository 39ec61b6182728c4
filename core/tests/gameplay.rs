use quantum_painter_core::*;

fn all_coords() -> impl Iterator<Item = Coord2> {
    let (x_end, y_end) = BOARD_SIZE;
    (0..y_end).flat_map(move |y| (0..x_end).map(move |x| (x, y)))
}

#[test]
fn fresh_board_is_unrevealed() {
    let engine = PaintEngine::with_seed(1);

    assert!(all_coords().all(|coords| engine.cell_at(coords).is_none()));
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.level(), 1);
    assert_eq!(engine.lives(), 3);
    assert!(!engine.is_game_over());
    assert!(Color::PALETTE.contains(&engine.current_color()));
}

#[test]
fn score_and_level_never_decrease() {
    for seed in 0..20 {
        let mut engine = PaintEngine::with_seed(seed);
        let (mut score, mut level) = (engine.score(), engine.level());

        for coords in all_coords() {
            let threshold = engine.next_level_threshold();
            let outcome = engine.reveal(coords).unwrap();
            let RevealOutcome::Painted {
                color, leveled_up, ..
            } = outcome
            else {
                panic!("fresh cell {coords:?} was not painted");
            };

            assert_eq!(engine.cell_at(coords), Some(color));
            assert!(engine.score() >= score);
            assert!(engine.level() >= level);
            assert_eq!(leveled_up, engine.score() >= threshold);
            assert_eq!(engine.level(), level + u32::from(leveled_up));
            if !leveled_up {
                assert_eq!(engine.current_color(), color);
            }

            score = engine.score();
            level = engine.level();
        }

        assert!(engine.is_board_full());
    }
}

#[test]
fn every_painted_cell_uses_the_palette() {
    let mut engine = PaintEngine::with_seed(99);
    for coords in all_coords() {
        engine.reveal(coords).unwrap();
    }

    for coords in all_coords() {
        let color = engine.cell_at(coords).unwrap();
        assert!(Color::PALETTE.contains(&color));
    }
}

#[test]
fn restart_replays_like_a_fresh_engine() {
    let draws = [
        Color::Blue,
        Color::Red,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Red,
    ];

    let mut fresh = PaintEngine::new(ScriptedSource::from_colors(draws));

    let mut source = ScriptedSource::from_colors([Color::Yellow, Color::Green, Color::Green]);
    source.extend_colors(draws);
    let mut restarted = PaintEngine::new(source);
    restarted.reveal((0, 0)).unwrap();
    restarted.reveal((0, 1)).unwrap();
    restarted.end_game();
    restarted.restart();

    for coords in [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1)] {
        assert_eq!(fresh.reveal(coords), restarted.reveal(coords));
    }
    assert_eq!(
        Snapshot::from_engine(&fresh),
        Snapshot::from_engine(&restarted)
    );
}

#[test]
fn certain_power_up_marks_every_cell() {
    let config = PainterConfig::new(10, 1.0, 3);
    let mut engine = PaintEngine::with_config(config, seeded_source(3)).unwrap();

    for coords in all_coords() {
        engine.reveal(coords).unwrap();
        assert!(engine.is_power_up_cell(coords));
    }
    assert_eq!(engine.power_up_cells().count(), 25);

    engine.restart();
    assert!(all_coords().all(|coords| !engine.is_power_up_cell(coords)));
}

#[test]
fn invalid_config_is_rejected() {
    let config = PainterConfig::new_unchecked(10, 2.0, 3);

    assert_eq!(
        PaintEngine::with_config(config, seeded_source(0)).err(),
        Some(GameError::InvalidConfig)
    );
}

#[test]
fn default_rates_match_palette_and_power_up_chance() {
    let mut color_counts = [0u32; 4];
    let mut power_ups = 0u32;
    let mut reveals = 0u32;

    for seed in 0..2000 {
        let mut engine = PaintEngine::with_seed(seed);
        for coords in all_coords() {
            let RevealOutcome::Painted {
                color, power_up, ..
            } = engine.reveal(coords).unwrap()
            else {
                panic!("fresh cell {coords:?} was not painted");
            };
            color_counts[color.index()] += 1;
            power_ups += u32::from(power_up);
            reveals += 1;
        }
    }

    let power_up_rate = f64::from(power_ups) / f64::from(reveals);
    assert!(
        (0.09..=0.11).contains(&power_up_rate),
        "power-up rate {power_up_rate}"
    );

    for (color, &count) in Color::PALETTE.iter().zip(&color_counts) {
        let share = f64::from(count) / f64::from(reveals);
        assert!((0.235..=0.265).contains(&share), "{color} share {share}");
    }
}
