criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_forward_likelihoods,
        decoding_viterbi_hand,
        decoding_viterbi_history,
        computing_sequential_posterior,
        estimating_census_model,
        evaluating_player_batch,
}

fn actions(n: usize) -> Vec<Action> {
    (0..n).map(|_| Action::random()).collect()
}

fn strengths(n: usize) -> Vec<Strength> {
    (0..n).map(|_| Strength::random()).collect()
}

fn computing_forward_likelihoods(c: &mut criterion::Criterion) {
    let model = Model::default();
    let actions = actions(400);
    c.bench_function("forward likelihoods of a 100-hand history", |b| {
        b.iter(|| Forward::from(&model).likelihoods(&actions))
    });
}

fn decoding_viterbi_hand(c: &mut criterion::Criterion) {
    let model = Model::default();
    let actions = actions(4);
    c.bench_function("viterbi decode one hand", |b| {
        b.iter(|| Viterbi::from(&model).decode(Strategy::LooseAggressive, &actions))
    });
}

fn decoding_viterbi_history(c: &mut criterion::Criterion) {
    let model = Model::default();
    let actions = actions(400);
    c.bench_function("viterbi decode a 100-hand history", |b| {
        b.iter(|| Viterbi::from(&model).decode_hands(Strategy::Maniac, &actions))
    });
}

fn computing_sequential_posterior(c: &mut criterion::Criterion) {
    let model = Model::default();
    let actions = actions(400);
    let states = strengths(400);
    c.bench_function("sequential posterior over 100 hands", |b| {
        b.iter(|| Estimator::from(&model).sequential(hands(&actions).zip(hands(&states)), None))
    });
}

fn estimating_census_model(c: &mut criterion::Criterion) {
    let rows = (0..10_000)
        .map(|_| [(); N_STREETS].map(|_| Strength::random()))
        .collect::<Vec<Trajectory>>();
    let emissions = Strategy::all().map(|s| *Model::default().emission(s));
    c.bench_function("estimate a model from 10k hands", |b| {
        b.iter(|| rows.iter().copied().collect::<Census>().model(emissions))
    });
}

fn evaluating_player_batch(c: &mut criterion::Criterion) {
    let model = Model::default();
    let records = (0..64)
        .map(|_| Record::new(Strategy::random(), actions(80), strengths(80)))
        .collect::<Result<Vec<Record>, Error>>()
        .expect("equal lengths");
    c.bench_function("evaluate 64 players", |b| {
        b.iter(|| Evaluation::from(&model).evaluate(&records))
    });
}

use pokerhmm::*;
