// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for Chord Nebula
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Match predicate cost per policy
//! - Inversion selection
//! - Chord generation through a full progression cycle
//! - Note-on handling with many chords on screen

use chord_nebula::generators::{ChordGenerator, ChordShape, TargetGenerator};
use chord_nebula::matching::{HeldNotes, MatchPolicy};
use chord_nebula::music::pitch::PitchClass;
use chord_nebula::music::scale::{Key, Mode};
use chord_nebula::music::closest_inversion;
use chord_nebula::{InputEvent, Session, SessionConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark each match policy on a matching and a mismatching hand
fn bench_match_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_policy");
    let target = [PitchClass::E, PitchClass::C, PitchClass::G];

    let mut good = HeldNotes::new();
    for n in [52, 60, 67] {
        good.press(n);
    }
    let mut bad = HeldNotes::new();
    for n in [60, 52, 67] {
        bad.press(n);
    }

    for policy in [MatchPolicy::Set, MatchPolicy::Ordered, MatchPolicy::BassConstrained] {
        let name = format!("{:?}", policy);
        group.bench_with_input(BenchmarkId::new("match", &name), &policy, |b, policy| {
            b.iter(|| black_box(policy.matches(black_box(&good), &target)))
        });
        group.bench_with_input(BenchmarkId::new("reject", &name), &policy, |b, policy| {
            b.iter(|| black_box(policy.matches(black_box(&bad), &target)))
        });
    }

    group.finish();
}

/// Benchmark voice-led inversion selection across all degree pairs
fn bench_closest_inversion(c: &mut Criterion) {
    let key = Key::new("Db", Mode::Major).unwrap();
    let triads: Vec<_> = Mode::Major.degrees().iter().map(|d| key.triad(d)).collect();

    c.bench_function("closest_inversion_all_pairs", |b| {
        b.iter(|| {
            let mut total = 0;
            for previous in &triads {
                for chord in &triads {
                    total += closest_inversion(Some(black_box(previous)), chord).index;
                }
            }
            black_box(total)
        })
    });
}

/// Benchmark chord generation through one progression cycle
fn bench_chord_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("chord_generator");

    for mode in [Mode::Major, Mode::Minor] {
        let key = Key::new("A", mode).unwrap();
        group.bench_with_input(BenchmarkId::new("cycle", mode), &key, |b, key| {
            b.iter(|| {
                let mut generator = ChordGenerator::new(key.clone(), ChordShape::SlashBass);
                for _ in 0..12 {
                    black_box(generator.next_target());
                }
            })
        });
    }

    group.finish();
}

/// Benchmark a note-on rescan with a full screen of chords
fn bench_note_on_rescan(c: &mut Criterion) {
    let mut group = c.benchmark_group("note_on_rescan");

    for chords in [4u64, 16, 64].iter() {
        let config = SessionConfig {
            level: 3,
            input_device: Some("bench".to_string()),
            spawn_interval_ms: 1,
            fall_duration_ms: 1_000_000,
            speedup_per_spawn: 0.0,
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::from_parameter(chords), chords, |b, &chords| {
            b.iter_batched(
                || {
                    let mut session = Session::start(&config).unwrap();
                    session.advance(chords);
                    session.handle(InputEvent::NoteOn { note: 61, velocity: 90 });
                    session.handle(InputEvent::NoteOn { note: 63, velocity: 90 });
                    session
                },
                |mut session| {
                    black_box(session.handle(InputEvent::NoteOn { note: 66, velocity: 90 }))
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_match_policies,
    bench_closest_inversion,
    bench_chord_generator,
    bench_note_on_rescan,
);
criterion_main!(benches);
