use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pipekit::{ApplyRequest, Args, FunctionStage, Pipeline, Value, MAP, PIPE};

// --- Helper: Simple Arithmetic Stage ---
fn create_increment_stage() -> FunctionStage {
  FunctionStage::new(|x: Value| Ok(Value::Int(x.as_int()?.wrapping_add(1))))
}

fn build_pipeline(num_steps: usize) -> Pipeline {
  (0..num_steps).fold(PIPE.copy(), |p, _| p >> create_increment_stage())
}

// --- Benchmark Functions ---

fn bench_apply(c: &mut Criterion) {
  let mut group = c.benchmark_group("Apply");

  for num_steps in [1usize, 10, 100].iter() {
    let pipeline = build_pipeline(*num_steps);
    group.throughput(Throughput::Elements(*num_steps as u64));
    group.bench_with_input(BenchmarkId::new("steps", num_steps), num_steps, |b, _| {
      b.iter(|| pipeline.apply(Args::unary(black_box(0))).unwrap())
    });
  }
  group.finish();
}

fn bench_compose(c: &mut Criterion) {
  let mut group = c.benchmark_group("Compose");

  for num_steps in [10usize, 100].iter() {
    let left = build_pipeline(*num_steps);
    let right = build_pipeline(*num_steps);
    group.bench_with_input(BenchmarkId::new("right", num_steps), num_steps, |b, _| {
      b.iter(|| black_box(&left >> &right))
    });
    group.bench_with_input(BenchmarkId::new("left", num_steps), num_steps, |b, _| {
      b.iter(|| black_box(&left << &right))
    });
  }
  group.finish();
}

fn bench_map_application(c: &mut Criterion) {
  let mut group = c.benchmark_group("MapApplication");
  let pipeline = build_pipeline(5);

  for num_elements in [10usize, 1000].iter() {
    let items: Vec<i64> = (0..*num_elements as i64).collect();
    group.throughput(Throughput::Elements(*num_elements as u64));
    group.bench_with_input(BenchmarkId::new("eager", num_elements), num_elements, |b, _| {
      b.iter(|| (MAP.call(items.clone()) | &pipeline).unwrap())
    });
    let lazy = &pipeline >> MAP;
    group.bench_with_input(BenchmarkId::new("lazy_step", num_elements), num_elements, |b, _| {
      b.iter(|| lazy.apply(Args::unary(items.clone())).unwrap().into_vec().unwrap())
    });
  }
  group.finish();
}

fn bench_apply_request(c: &mut Criterion) {
  let pipeline = build_pipeline(10);
  c.bench_function("ApplyRequest/pipe", |b| {
    b.iter(|| (ApplyRequest::new(Args::unary(black_box(1))) | &pipeline).unwrap())
  });
}

criterion_group!(
  benches,
  bench_apply,
  bench_compose,
  bench_map_application,
  bench_apply_request
);
criterion_main!(benches);
