#![allow(missing_docs)]
//! Historical encoder strategies, benchmarked against the production one
//!
//! The adaptive encoder went through several shapes before settling on the
//! single-upgrade, bulk-prefix-copy form. The superseded strategies are kept
//! here as fixtures so the comparison stays reproducible: collect-then-
//! classify (two passes), an eager per-element width re-check, a pre-sized
//! worst-case buffer narrowed on finish, and a single-upgrade variant that
//! copies its prefix element by element instead of in bulk.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use blobkit::codec::{BinaryBuffer, ElementWidth};

/// Two passes: collect into a plain vector, classify, then build the buffer
fn collect_then_classify(text: &str) -> BinaryBuffer {
    let codes: Vec<u64> = text.chars().map(|c| c as u64).collect();
    match ElementWidth::classify(codes.iter().copied()) {
        ElementWidth::W8 => BinaryBuffer::W8(codes.iter().map(|&c| c as u8).collect()),
        ElementWidth::W16 => BinaryBuffer::W16(codes.iter().map(|&c| c as u16).collect()),
        ElementWidth::W32 => BinaryBuffer::W32(codes.iter().map(|&c| c as u32).collect()),
        ElementWidth::W64 => BinaryBuffer::W64(codes),
    }
}

/// One pass, but the upgrade condition is re-tested on every element even
/// after the width is already known
fn checked_loop(text: &str) -> BinaryBuffer {
    let mut narrow: Vec<u8> = Vec::with_capacity(text.len());
    let mut wide: Vec<u16> = Vec::new();
    let mut upgraded = false;
    for c in text.chars() {
        let code = c as u64;
        if !upgraded && code > u64::from(u8::MAX) {
            upgraded = true;
            wide = Vec::with_capacity(text.len());
            wide.extend(narrow.iter().copied().map(u16::from));
        }
        if upgraded {
            wide.push(code as u16);
        } else {
            narrow.push(code as u8);
        }
    }
    if upgraded {
        BinaryBuffer::W16(wide)
    } else {
        BinaryBuffer::W8(narrow)
    }
}

/// Pre-size the worst-case 16-bit buffer up front, narrow on finish when
/// everything fit 8 bits after all
fn presized_then_narrow(text: &str) -> BinaryBuffer {
    let mut buf: Vec<u16> = Vec::with_capacity(text.len());
    let mut max = 0u16;
    for c in text.chars() {
        let code = c as u16;
        max = max.max(code);
        buf.push(code);
    }
    if max <= u16::from(u8::MAX) {
        BinaryBuffer::W8(buf.into_iter().map(|v| v as u8).collect())
    } else {
        BinaryBuffer::W16(buf)
    }
}

/// Single upgrade, but the prefix is copied element by element
fn elementwise_copy_upgrade(text: &str) -> BinaryBuffer {
    let mut narrow: Vec<u8> = Vec::with_capacity(text.len());
    let mut iter = text.chars();
    for c in iter.by_ref() {
        let code = c as u64;
        if code > u64::from(u8::MAX) {
            let mut wide: Vec<u16> = Vec::with_capacity(text.len());
            for &v in &narrow {
                wide.push(u16::from(v));
            }
            wide.push(code as u16);
            for c in iter {
                wide.push(c as u16);
            }
            return BinaryBuffer::W16(wide);
        }
        narrow.push(code as u8);
    }
    BinaryBuffer::W8(narrow)
}

/// Production strategy: single upgrade, bulk prefix copy, unchecked hot loop
fn bulk_copy_upgrade(text: &str) -> BinaryBuffer {
    blobkit::codec::encode_text(text)
}

fn make_latin1(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn make_mixed(len: usize) -> String {
    // Wide characters from the midpoint on: the upgrade lands mid-buffer
    let half = len / 2;
    let mut s = make_latin1(half);
    s.extend("编码基准测试字符串".chars().cycle().take(len - half));
    s
}

fn bench_encode_strategies(c: &mut Criterion) {
    let strategies: &[(&str, fn(&str) -> BinaryBuffer)] = &[
        ("collect_then_classify", collect_then_classify),
        ("checked_loop", checked_loop),
        ("presized_then_narrow", presized_then_narrow),
        ("elementwise_copy_upgrade", elementwise_copy_upgrade),
        ("bulk_copy_upgrade", bulk_copy_upgrade),
    ];

    for (input_name, input) in [
        ("latin1", make_latin1(16_384)),
        ("mixed", make_mixed(16_384)),
    ] {
        let mut group = c.benchmark_group(format!("encode_{input_name}"));
        for (name, strategy) in strategies {
            group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
                b.iter(|| black_box(strategy(black_box(input))));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_encode_strategies);
criterion_main!(benches);
