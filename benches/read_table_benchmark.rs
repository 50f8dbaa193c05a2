use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ohlcv_sheet::{read_table_from_string, SymbolSelection};

fn build_csv(rows: usize) -> String {
    let symbols = ["NABIL", "NICA", "HDHPC", "UPPER"];
    let mut csv = String::from("Date,Symbol,Open,High,Low,Close,Volume\n");
    for i in 0..rows {
        csv.push_str(&format!(
            "2024-01-{:02},{},{},{},{},{},{}\n",
            i % 28 + 1,
            symbols[i % symbols.len()],
            100 + i % 7,
            105 + i % 7,
            95 + i % 7,
            101 + i % 7,
            1000 + i
        ));
    }
    csv
}

fn benchmark_read_table(c: &mut Criterion) {
    let csv = build_csv(5_000);

    c.bench_function("read_table_from_string", |b| {
        b.iter(|| read_table_from_string(black_box(&csv)))
    });

    let table = read_table_from_string(&csv).unwrap();
    let session = ohlcv_sheet::start_session(&table).unwrap();
    let selection = SymbolSelection::from_search(" hdhpc ");

    c.bench_function("chart_view", |b| {
        b.iter(|| session.chart_view(black_box(&selection)))
    });
}

criterion_group!(benches, benchmark_read_table);
criterion_main!(benches);
