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
        scanning_account_block,
        ranking_random_hand,
        decomposing_lattice_figure,
        searching_snaking_word,
        exhausting_permutations,
        extracting_ranges,
}

use puzzlekit::Arbitrary;
use puzzlekit::ocr::Account;
use puzzlekit::permute::permutations;
use puzzlekit::poker::Hand;
use puzzlekit::ranges::extract;
use puzzlekit::rectangles::decompose;
use puzzlekit::search::Grid;

fn scanning_account_block(c: &mut criterion::Criterion) {
    let block = Account::random().glyphs();
    c.bench_function("scan a 9-digit account block", |b| {
        b.iter(|| Account::try_from(block.as_str()))
    });
}

fn ranking_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("rank a random 5-card Hand", |b| {
        b.iter(|| Hand::random().ranking())
    });
}

fn decomposing_lattice_figure(c: &mut criterion::Criterion) {
    let edge = "+--".repeat(16) + "+";
    let wall = "|  ".repeat(16) + "|";
    let figure = std::iter::repeat_n(format!("{}\n{}", edge, wall), 16)
        .chain(std::iter::once(edge.clone()))
        .collect::<Vec<String>>()
        .join("\n");
    c.bench_function("decompose a 16x16 lattice", |b| {
        b.iter(|| decompose(&figure).count())
    });
}

fn searching_snaking_word(c: &mut criterion::Criterion) {
    let rows = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];
    let grid = Grid::try_from(&rows[..]).unwrap();
    c.bench_function("search a grid for an absent word", |b| {
        b.iter(|| grid.contains("FUNCTION"))
    });
}

fn exhausting_permutations(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 8! permutations", |b| {
        b.iter(|| permutations("abcdefgh").count())
    });
}

fn extracting_ranges(c: &mut criterion::Criterion) {
    let values = (0..4096i64).filter(|n| n % 7 != 0).collect::<Vec<_>>();
    c.bench_function("extract ranges from 4096 integers", |b| {
        b.iter(|| extract(&values))
    });
}
