//! Benchmarks for balance valuation and feed fan-out
//!
//! Run with: cargo bench

use assetboard::exchange::{RawBalance, TickerPrice};
use assetboard::websocket::{ConnectionHub, HubConfig, ServerMessage};
use assetboard::{value_balances, Balance};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tokio::sync::mpsc;

fn create_account(count: usize) -> (Vec<RawBalance>, Vec<TickerPrice>) {
    let balances = (0..count)
        .map(|i| RawBalance::new(format!("COIN{}", i), i as f64 + 0.5, (i % 3) as f64))
        .collect();
    // Every other asset has a quote market
    let prices = (0..count)
        .step_by(2)
        .map(|i| TickerPrice {
            symbol: format!("COIN{}USDT", i),
            price: 1.25 + i as f64,
        })
        .collect();
    (balances, prices)
}

fn bench_valuation(c: &mut Criterion) {
    let mut group = c.benchmark_group("valuation");

    for size in [10, 100, 1000] {
        let (balances, prices) = create_account(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("value_{}", size), |b| {
            b.iter(|| value_balances(black_box(&balances), black_box(&prices), "USDT"))
        });
    }

    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("frames");

    let balances: Vec<Balance> = (0..100)
        .map(|i| Balance::new(format!("COIN{}", i), i as f64, 0.0))
        .collect();
    let message = ServerMessage::Balances(balances);

    group.bench_function("serialize_100", |b| {
        b.iter(|| black_box(&message).to_text().unwrap())
    });

    group.finish();
}

fn bench_hub(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("hub");

    for clients in [1, 64, 256] {
        let hub = ConnectionHub::new(HubConfig {
            max_connections: clients,
        });
        let mut receivers: Vec<_> = rt.block_on(async {
            let mut receivers = Vec::with_capacity(clients);
            for _ in 0..clients {
                let (tx, rx) = mpsc::unbounded_channel();
                hub.register(tx).await.unwrap();
                receivers.push(rx);
            }
            receivers
        });

        let balances = vec![Balance::new("BTC", 1.0, 0.0), Balance::new("USDT", 10.0, 0.0)];

        group.throughput(Throughput::Elements(clients as u64));
        group.bench_function(format!("publish_{}", clients), |b| {
            b.iter_custom(|iters| {
                rt.block_on(async {
                    let start = std::time::Instant::now();
                    for _ in 0..iters {
                        hub.publish_balances(black_box(balances.clone())).await;
                        for rx in receivers.iter_mut() {
                            while rx.try_recv().is_ok() {}
                        }
                    }
                    start.elapsed()
                })
            })
        });

        drop(receivers);
    }

    group.finish();
}

criterion_group!(benches, bench_valuation, bench_frames, bench_hub);
criterion_main!(benches);
