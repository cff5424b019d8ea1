use rand::SeedableRng;
use rand::rngs::StdRng;

use online_mlp::{
    Classifier, Dataset, Init, InitialWeights, Instance, Network, NodeKind, TrainConfig,
};

fn separable() -> Dataset {
    let xs = vec![
        vec![-1.0, -1.0],
        vec![-2.0, -1.0],
        vec![-1.0, -2.0],
        vec![-1.5, -0.5],
        vec![1.0, 1.0],
        vec![2.0, 1.0],
        vec![1.0, 2.0],
        vec![0.5, 1.5],
    ];
    let ys: Vec<Vec<f64>> = (0..8)
        .map(|i| if i < 4 { vec![1.0, 0.0] } else { vec![0.0, 1.0] })
        .collect();
    Dataset::from_rows(&xs, &ys).unwrap()
}

fn hidden() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 1.0, 0.0],
        vec![-1.0, -1.0, 0.0],
        vec![0.5, -0.5, 0.1],
        vec![-0.5, 0.5, 0.1],
    ]
}

fn output() -> Vec<Vec<f64>> {
    vec![
        vec![0.1, -0.1, 0.05, -0.05, 0.0],
        vec![-0.1, 0.1, -0.05, 0.05, 0.0],
    ]
}

fn config(learning_rate: f64, max_epoch: usize, seed: u64) -> TrainConfig {
    TrainConfig {
        hidden_node_count: 4,
        learning_rate,
        max_epoch,
        seed,
    }
}

#[test]
fn separable_data_drives_loss_toward_zero() {
    let train = separable();
    let mut clf = Classifier::with_seed(train.clone(), &config(0.05, 400, 11), &hidden(), &output())
        .unwrap();
    let untrained = clf.mean_loss();

    let report = clf.train();
    assert_eq!(report.epochs.len(), 400);
    assert!(report.epochs.iter().all(|e| e.loss.is_finite()));
    assert!(
        report.epochs.windows(2).all(|w| w[1].loss <= w[0].loss),
        "loss rose between epochs"
    );

    let first = report.epochs[0].loss;
    let early = report.epochs[49].loss;
    let last = report.final_loss().unwrap();
    assert!(first < untrained, "first={first} untrained={untrained}");
    assert!(early < first, "early={early} first={first}");
    assert!(last < early, "last={last} early={early}");
    assert!(last < 0.05, "last={last}");

    assert_eq!(clf.accuracy(&train).unwrap(), 1.0);
}

#[test]
fn fixed_seed_reproduces_shuffles_and_weights() {
    let run = || {
        let mut clf =
            Classifier::with_seed(separable(), &config(0.1, 25, 42), &hidden(), &output())
                .unwrap();
        let report = clf.train();
        (report, clf.train_set().clone(), clf.into_network())
    };

    let (report_a, order_a, net_a) = run();
    let (report_b, order_b, net_b) = run();

    assert_eq!(report_a, report_b);
    assert_eq!(order_a, order_b);
    assert_eq!(net_a.hidden_weights(), net_b.hidden_weights());
    assert_eq!(net_a.output_weights(), net_b.output_weights());
}

#[test]
fn injected_rng_matches_seeded_constructor() {
    let cfg = config(0.1, 10, 5);
    let mut seeded = Classifier::with_seed(separable(), &cfg, &hidden(), &output()).unwrap();
    let mut injected = Classifier::new(
        separable(),
        &cfg,
        StdRng::seed_from_u64(5),
        &hidden(),
        &output(),
    )
    .unwrap();

    assert_eq!(seeded.train(), injected.train());
    assert_eq!(seeded.network(), injected.network());
}

#[test]
fn zero_learning_rate_is_a_no_op() {
    let mut clf =
        Classifier::with_seed(separable(), &config(0.0, 3, 1), &hidden(), &output()).unwrap();
    let report = clf.train();

    assert_eq!(report.epochs.len(), 3);
    assert_eq!(clf.network().hidden_weights(), hidden());
    assert_eq!(clf.network().output_weights(), output());
}

#[test]
fn zero_epochs_report_untrained_loss() {
    let mut clf =
        Classifier::with_seed(separable(), &config(0.1, 0, 1), &hidden(), &output()).unwrap();
    assert!(clf.train().epochs.is_empty());

    let mut fresh = Network::for_dataset(&separable(), &hidden(), &output()).unwrap();
    assert_eq!(clf.mean_loss(), fresh.mean_loss(&separable()).unwrap());
    assert_eq!(clf.network().hidden_weights(), hidden());
    assert_eq!(clf.network().output_weights(), output());
}

#[test]
fn bias_nodes_stay_at_one_through_training() {
    let mut clf =
        Classifier::with_seed(separable(), &config(0.1, 20, 2), &hidden(), &output()).unwrap();

    let check = |net: &Network| {
        let input_bias = net.input_layer().nodes().last().unwrap();
        let hidden_bias = net.hidden_layer().nodes().last().unwrap();
        assert_eq!(input_bias.kind(), NodeKind::HiddenBias);
        assert_eq!(hidden_bias.kind(), NodeKind::OutputBias);
        assert_eq!(input_bias.output(), 1.0);
        assert_eq!(hidden_bias.output(), 1.0);
    };

    check(clf.network());
    clf.train();
    check(clf.network());
}

#[test]
fn predictions_are_valid_class_indices() {
    let mut rng = StdRng::seed_from_u64(3);
    let weights = InitialWeights::generate(3, 5, 4, Init::He, &mut rng).unwrap();

    let instances: Vec<Instance> = (0..12)
        .map(|i| {
            let x = vec![i as f64 * 0.5 - 3.0, (i % 3) as f64, -(i as f64)];
            Instance::one_hot(x, i % 4, 4).unwrap()
        })
        .collect();
    let train = Dataset::from_instances(instances).unwrap();

    let cfg = TrainConfig {
        hidden_node_count: 5,
        learning_rate: 0.01,
        max_epoch: 5,
        seed: 0,
    };
    let mut clf = Classifier::with_seed(train.clone(), &cfg, &weights.hidden, &weights.output)
        .unwrap();
    clf.train();

    for instance in &train {
        let class = clf.predict(instance).unwrap();
        assert!(class < 4);
    }
}

#[test]
fn prediction_rejects_wrong_attribute_count() {
    let mut clf =
        Classifier::with_seed(separable(), &config(0.1, 0, 1), &hidden(), &output()).unwrap();
    let bad = Instance::new(vec![1.0, 2.0, 3.0], vec![1.0, 0.0]);
    assert!(clf.predict(&bad).is_err());
}
