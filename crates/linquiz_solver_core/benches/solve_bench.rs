use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linquiz_ast::Equation;
use linquiz_solver_core::{solve_steps, GeneratorConfig, ProblemGenerator};

fn bench_generate(c: &mut Criterion) {
    let mut generator = ProblemGenerator::seeded(2024, GeneratorConfig::default());
    c.bench_function("generate_problem", |b| {
        b.iter(|| black_box(generator.generate()))
    });
}

fn bench_solve(c: &mut Criterion) {
    let equation = Equation::new(-7, 12, 4, -9);
    c.bench_function("solve_steps", |b| {
        b.iter(|| black_box(solve_steps(black_box(&equation))))
    });
}

criterion_group!(benches, bench_generate, bench_solve);
criterion_main!(benches);
