use cipherforge::cipher::{caesar, vigenere, SubstitutionMapping};
use cipherforge::config::{Config, KeyLengthParams};
use cipherforge::keylength;
use cipherforge::language::LanguageProfile;
use cipherforge::optimizer::mutation;
use cipherforge::scorer::FitnessScorer;
use cipherforge::solvers::caesar::CaesarSolver;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

const PROSE: &str = "It was late in the evening when the old man finally came down the hill \
to the village. He had walked for most of the day, and the road had been hard on his feet, \
but he did not complain. There was a small inn at the edge of the market square, and he knew \
that the woman who kept it would give him a bed and a warm meal if he asked.";

fn criterion_benchmark(c: &mut Criterion) {
    let profile = Arc::new(LanguageProfile::english());
    let scorer = FitnessScorer::new(profile.clone());

    c.bench_function("fitness score (prose)", |b| {
        b.iter(|| scorer.score(black_box(PROSE)))
    });

    let shifted = caesar::encrypt(PROSE, 11);
    let solver = CaesarSolver::new(profile.clone(), &Config::default());
    c.bench_function("caesar solve (26 shifts)", |b| {
        b.iter(|| solver.solve(black_box(&shifted)))
    });

    let mapping = SubstitutionMapping::from_key("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
    let substituted = mapping.encrypt(PROSE);
    c.bench_function("bigram refinement", |b| {
        b.iter(|| {
            let seed = mutation::seed_by_frequency(black_box(&substituted), &profile);
            mutation::refine_with_bigrams(seed, &substituted, &scorer, 10)
        })
    });

    let keyed = vigenere::encrypt(PROSE, "LEMON");
    let params = KeyLengthParams::default();
    c.bench_function("key length analysis", |b| {
        b.iter(|| keylength::analyze(black_box(&keyed), &params))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
