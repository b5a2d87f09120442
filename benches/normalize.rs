use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use drawgeom::data::*;
use drawgeom::Angle;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// Mostly straight route with the occasional kink, so normalization has to
// make several passes.
pub fn gen_route<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Polyline<i64> {
  let mut pos = Point::new([0i64, 0]);
  let mut step = Vector([1i64, 0]);
  let mut route = Polyline::new();
  for _ in 0..n {
    route.push(pos);
    if rng.gen_ratio(1, 8) {
      step = Vector([rng.gen_range(-3..=3), rng.gen_range(-3..=3)]);
    }
    pos += step;
  }
  route
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let short = gen_route(&mut rng, 100);
  let long = gen_route(&mut rng, 10_000);
  let random: Polyline<f64> = (0..1_000).map(|_| rng.gen::<Point<f64>>()).collect();

  c.bench_function("Polyline::normalize(1e2)", |b| {
    b.iter_batched(|| short.clone(), |mut route| route.normalize(), BatchSize::SmallInput)
  });
  c.bench_function("Polyline::normalize(1e4)", |b| {
    b.iter_batched(|| long.clone(), |mut route| route.normalize(), BatchSize::LargeInput)
  });
  let params = Normalization::new().with_min_angle(Angle::RIGHT);
  c.bench_function("Polyline::normalize_with(random 1e3, 90 degrees)", |b| {
    b.iter_batched(
      || random.clone(),
      |mut route| route.normalize_with(&params),
      BatchSize::SmallInput,
    )
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
