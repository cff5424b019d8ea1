use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use online_mlp::{Classifier, Dataset, Init, InitialWeights, Instance, TrainConfig};

fn main() -> online_mlp::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Tiny synthetic 3-class dataset in 2D.
    // Each class is a uniform blob around a different center.
    let mut rng = StdRng::seed_from_u64(0);

    let centers = [[-1.0_f64, -1.0], [1.0, -1.0], [0.0, 1.0]];
    let n_per_class = 64;
    let mut instances = Vec::with_capacity(3 * n_per_class);
    for (class, center) in centers.iter().enumerate() {
        for _ in 0..n_per_class {
            let x0 = center[0] + rng.gen_range(-0.3..0.3);
            let x1 = center[1] + rng.gen_range(-0.3..0.3);
            instances.push(Instance::one_hot(vec![x0, x1], class, centers.len())?);
        }
    }
    let train = Dataset::from_instances(instances)?;

    let config = TrainConfig {
        hidden_node_count: 8,
        learning_rate: 0.01,
        max_epoch: 30,
        seed: 1,
    };

    // Weight init draws from its own RNG; the config seed only drives shuffling.
    let weights = InitialWeights::generate(
        train.attribute_count(),
        config.hidden_node_count,
        train.class_count(),
        Init::He,
        &mut StdRng::seed_from_u64(7),
    )?;

    let mut clf = Classifier::with_seed(train.clone(), &config, &weights.hidden, &weights.output)?;
    let report = clf.train();

    if let Some(last) = report.epochs.last() {
        println!("final: {last}");
    }
    println!("train accuracy={:.3}", clf.accuracy(&train)?);

    for (x, expected) in [([-1.0, -1.0], 0), ([1.0, -1.0], 1), ([0.0, 1.0], 2)] {
        let sample = Instance::one_hot(x.to_vec(), expected, centers.len())?;
        println!("x={x:?} predicted={} expected={expected}", clf.predict(&sample)?);
    }

    Ok(())
}
