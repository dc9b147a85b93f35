use annocheck::check::{annotate_matches, check_matching_annotations, CheckParams, LibraryMode};
use annocheck::table::{Delimiter, FeatureTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const HEADERS: [&str; 24] = [
    "row ID",
    "GNPS_LIB_IonMode",
    "GNPS_LIB_SpecCharge",
    "GNPS_LIB_MQScore",
    "GNPS_LIB_SharedPeaks",
    "GNPS_LIB_MZErrorPPM",
    "GNPS_LIB_INCHI",
    "GNPS_LIB_Adduct",
    "GNPS_LIB_superclass",
    "GNPS_LIB_class",
    "GNPS_LIB_subclass",
    "GNPS_LIBA_IonMode",
    "GNPS_LIBA_SpecCharge",
    "GNPS_LIBA_MQScore",
    "GNPS_LIBA_SharedPeaks",
    "GNPS_LIBA_superclass",
    "GNPS_LIBA_class",
    "GNPS_LIBA_subclass",
    "SIR_MF_Zod_molecularFormula",
    "SIR_MF_Zod_ZodiacScore",
    "CAN_superclass",
    "CAN_class",
    "CAN_subclass",
    "CAN_all classifications",
];

const INCHIS: [&str; 4] = [
    "InChI=1S/C8H10N4O2/c1-10-4-9-6-5(10)7(13)12(3)8(14)11(6)2/h4H,1-3H3",
    "InChI=1S/C6H6/c1-2-4-6-5-3-1/h1-6H",
    "InChI=1S/C5H11NO2/c1-6(2,3)4-5(7)8/h4H2,1-3H3/p+1",
    "InChI=1S/H2O/h1H2",
];

const FORMULAS: [&str; 3] = ["C8H10N4O2", "C6H6", "C10H14N2"];

const CLASSES: [(&str, &str, &str); 2] = [
    (
        "Organoheterocyclic compounds",
        "Imidazopyrimidines",
        "Purines and purine derivatives",
    ),
    (
        "Benzenoids",
        "Benzene and substituted derivatives",
        "Toluenes",
    ),
];

/// Build a feature table where roughly half the rows survive every filter
fn create_feature_table(num_features: usize) -> FeatureTable {
    let mut table = FeatureTable::new(&HEADERS).unwrap();

    for i in 0..num_features {
        let ion_mode = if i % 7 == 0 { "Negative" } else { "Positive" };
        let charge = if i % 11 == 0 { "2" } else { "1" };
        let similarity = format!("{:.2}", 0.6 + (i % 40) as f64 * 0.01);
        let shared_peaks = (4 + i % 12).to_string();
        let ppm = format!("{:.1}", (i % 15) as f64);
        let adduct = if i % 13 == 0 { "M-C2H4+H" } else { "M+H" };
        let (superclass, class, subclass) = CLASSES[i % CLASSES.len()];
        let (can_superclass, can_class, can_subclass) = CLASSES[(i / 3) % CLASSES.len()];
        let score = format!("{:.2}", 0.5 + (i % 50) as f64 * 0.01);
        let all = format!(
            "Organic compounds; {}; {}; {}",
            can_superclass, can_class, can_subclass
        );

        let id = i.to_string();
        let cells = [
            id.as_str(),
            ion_mode,
            charge,
            similarity.as_str(),
            shared_peaks.as_str(),
            ppm.as_str(),
            INCHIS[i % INCHIS.len()],
            adduct,
            superclass,
            class,
            subclass,
            ion_mode,
            charge,
            similarity.as_str(),
            shared_peaks.as_str(),
            superclass,
            class,
            subclass,
            FORMULAS[i % FORMULAS.len()],
            score.as_str(),
            can_superclass,
            can_class,
            can_subclass,
            all.as_str(),
        ]
        .iter()
        .map(|c| Some(c.to_string()))
        .collect();
        table.push_row(cells);
    }

    table
}

/// Benchmark filtering and verdict columns without the summaries
fn bench_annotate_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate_matches");

    for num_features in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(num_features as u64));
        let table = create_feature_table(num_features);

        for mode in [LibraryMode::Regular, LibraryMode::Analogue] {
            let params = CheckParams {
                library_mode: mode,
                ..Default::default()
            };
            group.bench_with_input(
                BenchmarkId::new(mode.to_string(), num_features),
                &table,
                |b, table| {
                    b.iter(|| {
                        let pairs = annotate_matches(black_box(table), &params).unwrap();
                        black_box(pairs);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the full check including both summary tables
fn bench_check_matching_annotations(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_matching_annotations");

    for num_features in [1_000, 10_000] {
        group.throughput(Throughput::Elements(num_features as u64));
        let table = create_feature_table(num_features);
        let params = CheckParams::default();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_features),
            &table,
            |b, table| {
                b.iter(|| {
                    let report = check_matching_annotations(black_box(table), &params).unwrap();
                    black_box(report);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark parsing a tab separated export
fn bench_read_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_table");

    let num_features = 10_000;
    let mut buffer = Vec::new();
    create_feature_table(num_features)
        .write_to(&mut buffer, Delimiter::Tab)
        .unwrap();

    group.throughput(Throughput::Bytes(buffer.len() as u64));
    group.bench_function("tsv_10000_features", |b| {
        b.iter(|| {
            let table = FeatureTable::from_reader(black_box(buffer.as_slice()), Delimiter::Tab)
                .unwrap();
            black_box(table);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_annotate_matches,
    bench_check_matching_annotations,
    bench_read_table
);
criterion_main!(benches);
