use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use online_mlp::{Dataset, Init, InitialWeights, Instance, Network, Sgd};

fn network(attributes: usize, hidden: usize, classes: usize) -> Network {
    let mut rng = StdRng::seed_from_u64(0);
    let w = InitialWeights::generate(attributes, hidden, classes, Init::He, &mut rng).unwrap();
    Network::new(attributes, &w.hidden, &w.output).unwrap()
}

fn forward_bench(c: &mut Criterion) {
    let mut net = network(64, 128, 10);
    let input = vec![0.1_f64; net.attribute_count()];

    c.bench_function("network_forward_64_128_10", |b| {
        b.iter(|| {
            net.forward(black_box(&input));
            black_box(net.probabilities().next());
        })
    });
}

fn train_step_bench(c: &mut Criterion) {
    let mut net = network(64, 128, 10);
    let input = vec![0.1_f64; net.attribute_count()];
    let mut target = vec![0.0_f64; net.class_count()];
    target[3] = 1.0;
    let sgd = Sgd::new(1e-3).unwrap();
    let instance = Instance::new(input, target);

    c.bench_function("network_train_step_64_128_10", |b| {
        b.iter(|| sgd.step(&mut net, black_box(&instance)))
    });
}

fn epoch_loss_bench(c: &mut Criterion) {
    let mut net = network(16, 32, 4);
    let xs: Vec<Vec<f64>> = (0..256).map(|i| vec![(i % 13) as f64 * 0.1; 16]).collect();
    let ys: Vec<Vec<f64>> = (0..256)
        .map(|i| {
            let mut y = vec![0.0; 4];
            y[i % 4] = 1.0;
            y
        })
        .collect();
    let data = Dataset::from_rows(&xs, &ys).unwrap();

    c.bench_function("network_mean_loss_256x16", |b| {
        b.iter(|| black_box(net.mean_loss(black_box(&data)).unwrap()))
    });
}

criterion_group!(benches, forward_bench, train_step_bench, epoch_loss_bench);
criterion_main!(benches);
