// Criterion benchmarks for Maigen Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maigen_algo::parse_sections;

fn realistic_completion() -> String {
    "\
1. Technical expertise level:\n\
- Prompt engineering: advanced\n\
- LLM development: strong\n\
- AI integration: expert\n\
\n\
2. Project relevance score:\n\
8 out of 10\n\
\n\
3. Communication skills assessment:\n\
Clear written communication demonstrated across portfolio case studies.\n\
\n\
4. Red flags or concerns:\n\
- None identified\n\
\n\
5. Unique strengths:\n\
- Production RAG systems\n\
- Enterprise chatbot delivery\n\
- Measurable efficiency gains"
        .to_string()
}

fn bench_parse_sections(c: &mut Criterion) {
    let completion = realistic_completion();

    c.bench_function("parse_sections", |b| {
        b.iter(|| parse_sections(black_box(&completion)));
    });
}

fn bench_parse_sections_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sections_scaling");

    for repeats in [1, 10, 50] {
        let completion = realistic_completion().repeat(repeats);
        group.bench_with_input(
            BenchmarkId::from_parameter(repeats),
            &completion,
            |b, text| {
                b.iter(|| parse_sections(black_box(text)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse_sections, bench_parse_sections_scaling);
criterion_main!(benches);
