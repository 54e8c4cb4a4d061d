pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $table: expr, $value: ty) => {
        #[inline(never)]
        fn $test(lookup: &dyn Fn(u32) -> $value, source: &[u32])
        {
            for &code in source {
                criterion::black_box(lookup(code));
            }
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let lookup = $table;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (input_name, codes) in unicode_tables_benches::inputs() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, input_name),
                    &codes,
                    |b, codes| b.iter(|| $test(&lookup, criterion::black_box(codes.as_slice()))),
                );
            }

            group.finish();
        }
    };
}
