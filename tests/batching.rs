use idranges::{Bucket, Buckets, Error, Interval, bucketize, merge_intervals, split_even};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // run with RUST_LOG=idranges=trace to see every flushed bucket
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ivals(pairs: &[(i64, i64)]) -> Vec<Interval> {
    pairs
        .iter()
        .map(|&pair| Interval::try_from(pair).expect("start <= end"))
        .collect()
}

fn pairs(ivals: &[Interval]) -> Vec<(i64, i64)> {
    ivals.iter().map(|&ival| ival.into()).collect()
}

#[test]
fn merge_then_bucketize_raw_ranges() {
    init_tracing();

    // overlapping, unsorted ranges as they might come out of a query
    let raw = ivals(&[(100, 120), (1, 3), (110, 130), (2, 6), (8, 10), (15, 18), (16, 17)]);
    let merged = merge_intervals(raw);
    assert_eq!(pairs(&merged), [(1, 6), (8, 10), (15, 18), (100, 130)]);

    let buckets = bucketize(merged.iter().copied(), 10).unwrap();
    let total: u64 = merged.iter().map(Interval::count).sum();
    assert_eq!(total, 44);
    assert_eq!(
        buckets.iter().map(Bucket::total_count).collect::<Vec<_>>(),
        [10, 10, 10, 10, 4]
    );
    assert_eq!(pairs(buckets[0].intervals()), [(1, 6), (8, 10), (15, 15)]);
    assert_eq!(pairs(buckets[1].intervals()), [(16, 18), (100, 106)]);
    assert_eq!(pairs(buckets[4].intervals()), [(127, 130)]);
}

#[test]
fn distribute_buckets_over_workers() {
    init_tracing();

    let buckets = bucketize(ivals(&[(1, 1000)]), 64).unwrap();
    assert_eq!(buckets.len(), 16);
    assert_eq!(buckets.last().map(Bucket::total_count), Some(1000 - 15 * 64));

    let per_worker = split_even(&buckets, 3).unwrap();
    assert_eq!(
        per_worker.iter().map(|w| w.len()).collect::<Vec<_>>(),
        [6, 5, 5]
    );
    let ids: Vec<i64> = per_worker
        .iter()
        .flat_map(|w| w.iter())
        .flat_map(Bucket::values)
        .collect();
    assert_eq!(ids, (1..=1000).collect::<Vec<_>>());
}

#[test]
fn stream_buckets_lazily() {
    init_tracing();

    let huge = ivals(&[(0, 1 << 40), (1 << 41, 1 << 42)]);
    let first: Vec<_> = Buckets::new(huge, 1 << 20).unwrap().take(3).collect();
    assert_eq!(first.len(), 3);
    assert!(first.iter().all(|b| b.total_count() == 1 << 20));
    assert_eq!(first[2].intervals()[0].start(), 2 << 20);
}

#[test]
fn rejects_invalid_arguments() {
    init_tracing();

    assert!(matches!(
        bucketize(ivals(&[(1, 2)]), 0),
        Err(Error::InvalidArgument {
            name: "split_size",
            ..
        })
    ));
    assert_eq!(
        Interval::new(10, 1),
        Err(Error::InvalidInterval { start: 10, end: 1 })
    );
    assert!(bucketize(Vec::new(), 5).unwrap().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn serde_shapes() {
    let buckets = bucketize(ivals(&[(1, 6), (8, 10)]), 4).unwrap();
    let json = serde_json::to_value(&buckets).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "intervals": [[1, 4]], "total_count": 4 },
            { "intervals": [[5, 6], [8, 9]], "total_count": 4 },
            { "intervals": [[10, 10]], "total_count": 1 },
        ])
    );
    let back: Vec<Bucket> = serde_json::from_value(json).unwrap();
    assert_eq!(back, buckets);

    assert!(serde_json::from_str::<Interval>("[5, 1]").is_err());
    assert!(
        serde_json::from_value::<Bucket>(
            serde_json::json!({ "intervals": [[1, 4]], "total_count": 3 })
        )
        .is_err()
    );

    // an empty bucket never comes out of bucketize
    assert!(
        serde_json::from_value::<Bucket>(serde_json::json!({ "intervals": [], "total_count": 0 }))
            .is_err()
    );

    // each interval alone is valid, but their counts overflow when summed
    let wide = [i64::MIN, i64::MAX - 1];
    let overflowing = serde_json::from_value::<Bucket>(serde_json::json!({
        "intervals": [wide, wide],
        "total_count": 0,
    }));
    assert!(overflowing.is_err());
}
