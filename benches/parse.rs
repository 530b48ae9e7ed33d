// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Railyard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Railyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use railyard::format::wsn::{export_grammar, parse_grammar, Scanner};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `wsn.scan`, `wsn.parse`, `wsn.export`
// - Case IDs are `fixtures::Case::id()` values.
fn benches_parse(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("wsn.scan");
        for case in fixtures::Case::ALL {
            let source = fixtures::source(case);
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter(|| Scanner::new(black_box(&source)).filter(Result::is_ok).count())
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("wsn.parse");
        for case in fixtures::Case::ALL {
            let source = fixtures::source(case);
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let syntax = parse_grammar(black_box(&source)).expect("parse_grammar");
                    black_box(syntax.productions().len())
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("wsn.export");
        for case in fixtures::Case::ALL {
            let grammar = fixtures::grammar(case);
            black_box(fixtures::checksum_grammar(&grammar));
            group.throughput(Throughput::Elements(grammar.productions().len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter(|| black_box(export_grammar(black_box(grammar.syntax()))))
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_parse
}
criterion_main!(benches);
