use std::io::Write;

use midnight_fireworks::countdown_engine::{config, CountdownConfig, CountdownEngine, TimeLeft};

fn engine(target_ms: i64) -> CountdownEngine {
    CountdownEngine::new(target_ms, &CountdownConfig::default())
}

// ==================================
// 1. Décomposition du temps restant
// ==================================

#[test]
fn test_breakdown_consistency_over_many_diffs() {
    // Pseudo-aléatoire maison, reproductible
    let mut x: i64 = 987_654_321;
    let mut diffs = vec![
        1,
        999,
        1_000,
        59_999,
        60_000,
        3_599_999,
        3_600_000,
        86_399_999,
        86_400_000,
        90_061_000,
    ];
    for _ in 0..500 {
        x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        diffs.push(x.rem_euclid(400 * 86_400_000));
    }

    for diff in diffs {
        let tl = TimeLeft::from_millis(diff);
        assert!(tl.hours < 24);
        assert!(tl.minutes < 60);
        assert!(tl.seconds < 60);
        assert_eq!(
            (tl.days * 86_400 + tl.hours * 3_600 + tl.minutes * 60 + tl.seconds) as i64,
            diff / 1_000,
            "inconsistent breakdown for diff={}",
            diff
        );
    }
}

#[test]
fn test_breakdown_past_or_now_is_all_zero() {
    let engine = engine(10_000);
    assert!(engine.breakdown(10_000).is_zero());
    assert!(engine.breakdown(20_000).is_zero());
}

#[test]
fn test_breakdown_is_idempotent() {
    let engine = engine(1_000_000);
    assert_eq!(engine.breakdown(123_456), engine.breakdown(123_456));
}

// ==================================
// 2. Tick d'affichage
// ==================================

#[test]
fn test_tick_fires_at_one_second_period() {
    let mut engine = engine(100_000);
    assert!(engine.tick(0).is_some()); // premier appel
    assert!(engine.tick(500).is_none());
    assert!(engine.tick(999).is_none());
    assert!(engine.tick(1_000).is_some());
    assert!(engine.tick(1_100).is_none());
}

// ==================================
// 3. Signal « arrivé » (front montant unique)
// ==================================

#[test]
fn test_arrival_fires_exactly_once() {
    let mut engine = engine(10_000);

    assert!(!engine.poll(9_000));
    assert!(!engine.arrived());

    assert!(engine.poll(10_000));
    assert!(engine.arrived());

    // Verrouillé : aucun re-déclenchement tant que la cible ne change pas.
    for t in (10_500..20_000).step_by(500) {
        assert!(!engine.poll(t));
    }
    assert!(engine.arrived());
}

#[test]
fn test_arrival_respects_poll_period() {
    let mut engine = engine(1_000);
    assert!(!engine.poll(900)); // arme le timer (période 500 ms)
    // La cible est franchie mais le poll n'est pas encore dû.
    assert!(!engine.poll(1_100));
    assert!(engine.poll(1_400));
}

#[test]
fn test_retarget_rearms_the_signal() {
    let mut engine = engine(1_000);
    assert!(engine.poll(1_000));

    // Reprogrammation vers le futur : le signal doit se réarmer.
    engine.set_target(5_000);
    assert!(!engine.arrived());
    assert!(!engine.poll(4_000));
    assert!(engine.poll(5_200));
    assert!(!engine.poll(6_000));
}

#[test]
fn test_preview_scenario_now_plus_five_seconds() {
    // Cible = maintenant + 5000 ms ; après 5.5 s simulées : arrivé,
    // décomposition à zéro.
    let now = 1_700_000_000_000_u64;
    let mut engine = engine(now as i64 + 5_000);

    let mut fired = 0;
    let mut t = now;
    while t <= now + 5_500 {
        if engine.poll(t) {
            fired += 1;
        }
        t += 100;
    }

    assert_eq!(fired, 1);
    assert!(engine.arrived());
    assert!(engine.breakdown(now + 5_500).is_zero());
}

// ==================================
// 4. Configuration
// ==================================

#[test]
fn test_config_from_file_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "target = \"1970-01-02T00:00:00\"\ntick_period_ms = 250\npoll_period_ms = 100"
    )
    .unwrap();

    let config = CountdownConfig::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.tick_period_ms, 250);
    assert_eq!(config.poll_period_ms, 100);
    assert_eq!(config.target_epoch_ms().unwrap(), 86_400_000);
}

#[test]
fn test_config_missing_file_is_an_error() {
    assert!(CountdownConfig::from_file("definitely/not/here.toml").is_err());
}

#[test]
fn test_parse_target_known_instants() {
    assert_eq!(config::parse_target("1970-01-01T00:00:00").unwrap(), 0);
    // 2026-01-01 = 20454 days after the epoch
    assert_eq!(
        config::parse_target("2026-01-01T00:00:00").unwrap(),
        20_454_i64 * 86_400_000
    );
}
