use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_merge::ast;
use libgraphql_merge::merge_documents;
use libgraphql_merge::merge_operations;

/// Build a query selecting `width` composite fields, each nested `depth`
/// levels deep, with field names offset by `offset` so that two documents
/// built with different offsets only partially overlap.
fn synthetic_query(width: usize, depth: usize, offset: usize) -> String {
    fn selection_set(width: usize, depth: usize, offset: usize) -> String {
        let fields: Vec<String> =
            (offset..offset + width)
                .map(|idx| {
                    if depth == 0 {
                        format!("leaf{idx}")
                    } else {
                        format!(
                            "node{idx} {}",
                            selection_set(width, depth - 1, offset),
                        )
                    }
                })
                .collect();
        format!("{{ id {} }}", fields.join(" "))
    }

    format!("query Synthetic {}", selection_set(width, depth, offset))
}

fn parse(source: &str) -> ast::Document {
    ast::parse(source).expect("synthetic query should parse")
}

// ─── Group 1: Two-way merges ────────────────────────────

fn two_way_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_way_merge");

    for (width, depth) in [(4, 2), (8, 3), (16, 2)] {
        let definitions: Vec<ast::Definition> =
            [synthetic_query(width, depth, 0), synthetic_query(width, depth, width / 2)]
                .iter()
                .flat_map(|src| parse(src).definitions)
                .collect();

        group.bench_with_input(
            BenchmarkId::new("partial_overlap", format!("{width}x{depth}")),
            &definitions,
            |b, definitions| {
                b.iter(|| black_box(merge_operations(black_box(definitions))))
            },
        );
    }

    group.finish();
}

// ─── Group 2: Many-document folds ───────────────────────

fn many_document_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_document_fold");

    for num_docs in [4, 16, 64] {
        let documents: Vec<ast::Document> =
            (0..num_docs)
                .map(|idx| parse(&synthetic_query(6, 2, idx % 6)))
                .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_docs),
            &documents,
            |b, documents| {
                b.iter(|| black_box(merge_documents(black_box(documents))))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, two_way_merge, many_document_fold);
criterion_main!(benches);
