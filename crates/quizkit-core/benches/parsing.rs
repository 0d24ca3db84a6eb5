use std::fmt::Write;
use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizkit_core::parser::{parse_question_bank_str, validate_question_bank};

fn bank_toml(questions: usize) -> String {
    let mut toml = String::from("[bank]\nid = \"bench\"\nname = \"Bench\"\n");
    for i in 0..questions {
        let _ = write!(
            toml,
            "\n[[questions]]\nprompt = \"Question {i}?\"\noptions = [\"A\", \"B\", \"C\", \"D\"]\nanswer = \"C\"\nexplanation = \"Because {i}.\"\n"
        );
    }
    toml
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_question_bank");

    for size in [10, 100, 1000] {
        let content = bank_toml(size);
        group.bench_function(format!("questions={size}"), |b| {
            b.iter(|| parse_question_bank_str(black_box(&content), Path::new("bench.toml")).unwrap())
        });
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let bank = parse_question_bank_str(&bank_toml(1000), Path::new("bench.toml")).unwrap();
    c.bench_function("validate,questions=1000", |b| {
        b.iter(|| validate_question_bank(black_box(&bank)))
    });
}

criterion_group!(benches, bench_parsing, bench_validation);
criterion_main!(benches);
