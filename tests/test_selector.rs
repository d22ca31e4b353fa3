//! Integration tests for FCBF selection

use fcbf::datasets::{play_tennis, PLAY_TENNIS_TARGET};
use fcbf::pipeline::{
    fcbf, symmetric_uncertainty, CorrelationKey, Dataset, DiscreteColumn, FcbfConfig, FcbfError,
    FcbfSelector, LogBase,
};

#[path = "common/mod.rs"]
mod common;

fn play_tennis_dataset() -> Dataset {
    Dataset::from_dataframe(&play_tennis().unwrap(), PLAY_TENNIS_TARGET).unwrap()
}

#[test]
fn test_redundant_and_irrelevant_features_removed() {
    let dataset = common::create_redundancy_dataset();
    let selection = fcbf(&dataset, 0.1, LogBase::TWO).unwrap();

    assert_eq!(selection.relevant_names(), vec!["f1"]);
    assert_eq!(selection.irrelevant, vec!["f2", "f3"]);
    assert_eq!(selection.below_threshold, vec!["f3"]);
    assert_eq!(selection.redundant_names(), vec!["f2"]);

    let table = &selection.correlations;
    assert_eq!(table.len(), 4, "three label entries plus the one compared pair");
    for feature in ["f1", "f2", "f3"] {
        assert!(table.get(&CorrelationKey::label(feature)).is_some());
    }
    assert!(table.pair_su("f2", "f1").is_some());
    assert_eq!(table.label_su("f3"), Some(0.0));
    assert!((table.label_su("f1").unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_play_tennis_threshold_filters_weak_features() {
    let selection = fcbf(&play_tennis_dataset(), 0.1, LogBase::TWO).unwrap();

    assert_eq!(selection.relevant_names(), vec!["Outlook", "Humidity"]);
    assert_eq!(selection.irrelevant, vec!["Temperature", "Wind"]);
    assert!(selection.redundancies.is_empty());

    let outlook = selection.relevant[0].su_label;
    let humidity = selection.relevant[1].su_label;
    assert!((outlook - 0.196).abs() < 1e-3, "SU(Outlook, Play) = {}", outlook);
    assert!((humidity - 0.156).abs() < 1e-3, "SU(Humidity, Play) = {}", humidity);
}

#[test]
fn test_play_tennis_temperature_dominated_by_outlook() {
    let selection = fcbf(&play_tennis_dataset(), 0.0, LogBase::E).unwrap();

    assert_eq!(selection.relevant_names(), vec!["Outlook", "Humidity", "Wind"]);
    assert_eq!(selection.redundancies.len(), 1);
    let redundancy = &selection.redundancies[0];
    assert_eq!(redundancy.feature, "Temperature");
    assert_eq!(redundancy.dominated_by, "Outlook");
    assert!(redundancy.su_pair >= redundancy.su_label);
}

#[test]
fn test_base_does_not_change_selection() {
    let dataset = play_tennis_dataset();
    let bits = fcbf(&dataset, 0.1, LogBase::TWO).unwrap();
    let nats = fcbf(&dataset, 0.1, LogBase::E).unwrap();
    assert_eq!(bits.relevant_names(), nats.relevant_names());
    for (a, b) in bits.relevant.iter().zip(&nats.relevant) {
        assert!((a.su_label - b.su_label).abs() < 1e-9);
    }
}

#[test]
fn test_fractional_base_matches_base_two() {
    // Two independent bits that together determine a four-class label
    let f1 = DiscreteColumn::from_values("f1", [0, 0, 1, 1, 0, 0, 1, 1]);
    let f2 = DiscreteColumn::from_values("f2", [0, 1, 0, 1, 0, 1, 0, 1]);
    let label = DiscreteColumn::from_values("y", [0, 1, 2, 3, 0, 1, 2, 3]);
    let dataset = Dataset::new(vec![f1, f2], label).unwrap();

    let half = LogBase::new(0.5).unwrap();
    let bits = fcbf(&dataset, 0.0, LogBase::TWO).unwrap();
    let halves = fcbf(&dataset, 0.0, half).unwrap();

    assert_eq!(bits.relevant_names(), vec!["f1", "f2"]);
    assert_eq!(halves.relevant_names(), bits.relevant_names());
    for (a, b) in bits.relevant.iter().zip(&halves.relevant) {
        assert!((a.su_label - b.su_label).abs() < 1e-12);
        assert!(b.su_label > 0.0);
    }
}

#[test]
fn test_su_symmetry_and_bounds() {
    let dataset = common::create_random_dataset(300, 12, 7);
    let features = dataset.features();
    for a in features {
        for b in features {
            let ab = symmetric_uncertainty(a, b, LogBase::TWO).unwrap();
            let ba = symmetric_uncertainty(b, a, LogBase::TWO).unwrap();
            assert_eq!(ab, ba, "SU({}, {}) not symmetric", a.name(), b.name());
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}

#[test]
fn test_constant_feature_has_zero_su_with_any_label() {
    let constant = DiscreteColumn::from_values("constant", ["x"; 6]);
    let labels = [
        DiscreteColumn::from_values("binary", [0, 1, 0, 1, 0, 1]),
        DiscreteColumn::from_values("multi", [0, 1, 2, 3, 4, 5]),
        DiscreteColumn::from_values("same", [9; 6]),
    ];
    for label in &labels {
        assert_eq!(symmetric_uncertainty(&constant, label, LogBase::E).unwrap(), 0.0);
    }
}

#[test]
fn test_threshold_monotonicity() {
    for seed in 0..5 {
        let dataset = common::create_random_dataset(200, 16, seed);
        let mut previous = usize::MAX;
        for step in 0..=20 {
            let threshold = step as f64 / 20.0;
            let selected = fcbf(&dataset, threshold, LogBase::TWO).unwrap().relevant.len();
            assert!(
                selected <= previous,
                "seed {}: threshold {} selected {} > {}",
                seed,
                threshold,
                selected,
                previous
            );
            previous = selected;
        }
    }
}

#[test]
fn test_determinism() {
    let dataset = common::create_random_dataset(250, 20, 42);
    let config = FcbfConfig::new(0.02, LogBase::TWO).unwrap();
    let first = FcbfSelector::new(config).select(&dataset).unwrap();
    let second = FcbfSelector::new(config).select(&dataset).unwrap();
    assert_eq!(first, second);

    let sequential = FcbfSelector::new(config.with_parallel(false))
        .select(&dataset)
        .unwrap();
    assert_eq!(first, sequential);
}

#[test]
fn test_rerun_on_selected_subset_is_unchanged() {
    for seed in 0..5 {
        let dataset = common::create_random_dataset(250, 20, seed);
        let selection = fcbf(&dataset, 0.01, LogBase::E).unwrap();
        let names = selection.relevant_names();
        if names.is_empty() {
            continue;
        }

        let subset = dataset.subset(&names).unwrap();
        let rerun = fcbf(&subset, 0.01, LogBase::E).unwrap();
        assert_eq!(rerun.relevant_names(), names, "seed {}", seed);
        assert!(rerun.redundancies.is_empty());
    }
}

#[test]
fn test_every_relevant_pair_below_label_su() {
    let dataset = common::create_random_dataset(300, 16, 3);
    let selection = fcbf(&dataset, 0.0, LogBase::TWO).unwrap();
    let table = &selection.correlations;
    for (i, p) in selection.relevant.iter().enumerate() {
        for q in &selection.relevant[i + 1..] {
            let su_pq = table.pair_su(&p.name, &q.name).unwrap();
            assert!(su_pq < q.su_label);
        }
    }
    for redundancy in &selection.redundancies {
        assert!(selection.is_relevant(&redundancy.dominated_by));
        assert!(redundancy.su_pair >= redundancy.su_label);
    }
}

#[test]
fn test_invalid_parameters_fail_fast() {
    let dataset = common::create_redundancy_dataset();
    assert!(matches!(
        fcbf(&dataset, -0.5, LogBase::E),
        Err(FcbfError::InvalidThreshold(_))
    ));
    assert!(matches!(
        fcbf(&dataset, 1.01, LogBase::E),
        Err(FcbfError::InvalidThreshold(_))
    ));
    assert!(matches!(LogBase::new(-1.0), Err(FcbfError::InvalidBase(_))));
}

#[test]
fn test_relevant_sorted_by_descending_su() {
    let dataset = common::create_random_dataset(400, 24, 11);
    let selection = fcbf(&dataset, 0.0, LogBase::TWO).unwrap();
    for pair in selection.relevant.windows(2) {
        assert!(pair[0].su_label >= pair[1].su_label);
    }
}
