use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use formsmith_core::{render_preview, sample::INITIAL_SCHEMA, validate_schema};

/// A schema with `n` text fields, roughly what a long survey looks like
fn wide_schema(n: usize) -> String {
    let fields: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{ "id": "q{i}", "type": "text", "label": "Question {i}", "required": {} }}"#,
                i % 2 == 0
            )
        })
        .collect();
    format!(
        r#"{{ "formTitle": "Wide", "formDescription": "", "fields": [{}] }}"#,
        fields.join(",")
    )
}

fn benchmark_keystroke(c: &mut Criterion) {
    // what one edit costs: the validator and the renderer each parse the text
    c.bench_function("keystroke_initial_schema", |b| {
        b.iter(|| {
            let result = validate_schema(black_box(INITIAL_SCHEMA));
            let preview = render_preview(black_box(INITIAL_SCHEMA));
            (result, preview)
        })
    });
}

fn benchmark_wide_schema(c: &mut Criterion) {
    let text = wide_schema(200);
    let mut group = c.benchmark_group("wide_schema");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("validate", |b| b.iter(|| validate_schema(black_box(&text))));
    group.bench_function("render", |b| b.iter(|| render_preview(black_box(&text))));
    group.bench_function("submit", |b| {
        let form = render_preview(&text).into_form().unwrap();
        let mut values = form.initial_values();
        for control in &form.controls {
            values.set(&control.id, "answer");
        }
        b.iter(|| form.submit(black_box(&values)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_keystroke, benchmark_wide_schema);
criterion_main!(benches);
