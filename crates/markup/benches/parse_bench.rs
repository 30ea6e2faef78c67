use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markup::{build, tokenize};

fn sample_page(paragraphs: usize) -> String {
    let mut page = String::from("<html><head><title>Bench</title></head><body>");
    for i in 0..paragraphs {
        page.push_str(&format!(
            "<h2>Section {i}</h2><p>Some <strong>bold</strong> and <em>italic</em> text in paragraph {i}.</p>"
        ));
    }
    page.push_str("</body></html>");
    page
}

fn bench_tokenize(c: &mut Criterion) {
    let page = sample_page(500);
    c.bench_function("tokenize_500_paragraphs", |b| {
        b.iter(|| tokenize(black_box(&page)))
    });
}

fn bench_build(c: &mut Criterion) {
    let tokens = tokenize(&sample_page(500));
    c.bench_function("build_500_paragraphs", |b| {
        b.iter(|| build(black_box(&tokens)))
    });
}

criterion_group!(benches, bench_tokenize, bench_build);
criterion_main!(benches);
