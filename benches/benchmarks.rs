use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use serde_json::json;
use xrpl::core::binarycodec::{decode, encode};
use xrpl::core::definitions::get_field_type_name;
use xrpl::utils::xrpl_conversion::xrp_to_drops;

pub fn bench_xrp_to_drops(c: &mut Criterion) {
    c.bench_function("utils::xrpl_conversion::xrp_to_drops", |b| {
        b.iter(|| xrp_to_drops(black_box(Decimal::new(100000001, 6))))
    });
}

pub fn bench_get_field_type_name(c: &mut Criterion) {
    c.bench_function("core::definitions::get_field_type_name", |b| {
        b.iter(|| get_field_type_name(black_box("HighLimit")))
    });
}

fn sample_payment() -> serde_json::Value {
    json!({
        "Account": "rU4EE5NgLG5dVfR8cYYGQoKkE2ZFtrhyzk",
        "Destination": "rweYz56rfmQ98cAdRaeTxQS9wVMGnrdsFp",
        "TransactionType": "Payment",
        "Amount": "1000",
        "Fee": "10",
        "Sequence": 1,
        "SigningPubKey": "",
    })
}

pub fn bench_encode(c: &mut Criterion) {
    let tx = sample_payment();
    c.bench_function("core::binarycodec::encode", |b| {
        b.iter(|| encode(black_box(&tx)))
    });
}

pub fn bench_decode(c: &mut Criterion) {
    let hex = encode(&sample_payment()).unwrap();
    c.bench_function("core::binarycodec::decode", |b| {
        b.iter(|| decode(black_box(&hex)))
    });
}

criterion_group!(
    benches,
    bench_xrp_to_drops,
    bench_get_field_type_name,
    bench_encode,
    bench_decode
);
criterion_main!(benches);
