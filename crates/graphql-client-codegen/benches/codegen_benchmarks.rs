use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use graphql_client_codegen::CodegenOptions;
use graphql_client_codegen::SchemaDocument;
use graphql_client_codegen::codegen::CodeSynthesizer;
use graphql_client_codegen::model::ClientModelBuilder;

/// Builds a schema with `type_count` object types that reference each other,
/// an input type and an enum per object type.
fn synthetic_schema(type_count: usize) -> String {
    let mut sdl = String::from("schema { query: Query mutation: Mutation }\n");

    sdl.push_str("type Query {\n");
    for idx in 0..type_count {
        sdl.push_str(&format!(
            "  item{idx}(id: ID!, filter: Filter{idx}): Item{idx}\n  \
            items{idx}(first: Int = 10): [Item{idx}!]!\n",
        ));
    }
    sdl.push_str("}\n");

    sdl.push_str("type Mutation {\n");
    for idx in 0..type_count {
        sdl.push_str(&format!("  save{idx}(input: Filter{idx}!): Item{idx}\n"));
    }
    sdl.push_str("}\n");

    for idx in 0..type_count {
        let next = (idx + 1) % type_count;
        sdl.push_str(&format!(
            "\"\"\"\nItem number {idx}.\n\"\"\"\n\
            type Item{idx} {{\n  \
              id: ID!\n  \
              name: String\n  \
              score: Float\n  \
              status: Status{idx}!\n  \
              tags: [String!]\n  \
              next: Item{next}\n  \
              grid: [[Item{next}]]\n\
            }}\n\
            input Filter{idx} {{\n  \
              query: String!\n  \
              limit: Int = 25\n  \
              statuses: [Status{idx}!] = [ACTIVE]\n\
            }}\n\
            enum Status{idx} {{ ACTIVE INACTIVE ARCHIVED }}\n",
        ));
    }

    sdl
}

// ─── Group 1: End-to-end generation ──────────────────────

fn generate_client(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_client");
    let options = CodegenOptions::new("bench::api");

    for type_count in [5, 50, 250] {
        let sdl = synthetic_schema(type_count);
        group.throughput(Throughput::Bytes(sdl.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &sdl,
            |b, sdl| {
                b.iter(|| black_box(graphql_client_codegen::generate_client(sdl, &options)))
            },
        );
    }

    group.finish();
}

// ─── Group 2: Pipeline stages ────────────────────────────

fn pipeline_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_stages");
    let options = CodegenOptions::new("bench::api");
    let sdl = synthetic_schema(50);

    group.bench_function("parse", |b| {
        b.iter(|| black_box(SchemaDocument::parse(&sdl)))
    });

    let document = SchemaDocument::parse(&sdl).expect("synthetic schema must parse");
    group.bench_function("build_model", |b| {
        b.iter(|| black_box(ClientModelBuilder::new(&document, &options).build()))
    });

    let model = ClientModelBuilder::new(&document, &options)
        .build()
        .expect("synthetic schema must build");
    group.bench_function("synthesize", |b| {
        b.iter(|| black_box(CodeSynthesizer::new(&model, &options).synthesize()))
    });

    group.finish();
}

criterion_group!(benches, generate_client, pipeline_stages);
criterion_main!(benches);
