use chrono_json_editor::{EditorConfig, TextDocument, compute_bracket_pairs, inline_numeric_arrays};
use chrono_json_editor_jsonc::to_pretty_string;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

/// A tire/engine style document: a few scalar fields and long numeric curves.
fn vehicle_document(curve_points: usize) -> String {
    let curve: Vec<Value> = (0..curve_points)
        .map(|i| json!([i as f64 * 10.0, (i as f64).sqrt()]))
        .collect();
    let value = json!({
        "Name": "Benchmark Engine",
        "Type": "Engine",
        "Template": "ShaftsEngine",
        "Torque Map": curve,
        "Losses Map": curve,
    });
    to_pretty_string(&value, "  ").unwrap_or_default()
}

fn bench_load(c: &mut Criterion) {
    let text = vehicle_document(2_000);
    c.bench_function("load/2k_point_curves", |b| {
        b.iter(|| {
            let doc = TextDocument::load(black_box(&text), EditorConfig::default()).unwrap();
            black_box(doc.line_count());
        })
    });
}

fn bench_typing(c: &mut Criterion) {
    let text = inline_numeric_arrays(&vehicle_document(2_000));
    c.bench_function("typing/50_keystrokes", |b| {
        b.iter_batched(
            || {
                let mut doc = TextDocument::new(&text);
                doc.set_caret(1, 10);
                doc
            },
            |mut doc| {
                for _ in 0..50 {
                    doc.insert_text("x");
                }
                black_box(doc.is_valid());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_bracket_pairs(c: &mut Criterion) {
    let text = vehicle_document(2_000);
    c.bench_function("brackets/compute_pairs", |b| {
        b.iter(|| black_box(compute_bracket_pairs(black_box(&text)).len()))
    });
}

criterion_group!(benches, bench_load, bench_typing, bench_bracket_pairs);
criterion_main!(benches);
