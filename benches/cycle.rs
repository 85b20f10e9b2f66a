use chip8_vm::{chip8::ChipSet, resources::Rom};
use criterion::{criterion_group, criterion_main, Criterion};

static BASE_ROM: once_cell::sync::Lazy<Rom> = once_cell::sync::Lazy::new(|| {
    // a small endless loop of arithmetic, a draw and the jump back
    let image = [
        0x60, 0x05, // V0 = 5
        0x70, 0x01, // V0 += 1
        0xD0, 0x05, // draw the glyph rows at I to (V0, V0)
        0x12, 0x00, // back to the start
    ];
    Rom::new("bench-loop", image.to_vec()).expect("The bench image always fits.")
});

fn get_default_chip() -> ChipSet {
    ChipSet::new(BASE_ROM.clone())
}

pub fn cycle_bench(c: &mut Criterion) {
    let mut chip = get_default_chip();
    c.bench_function("cycle_bench", |b| {
        b.iter(|| {
            chip.next().expect("The bench program has no fatal faults.");
        });
    });
}

criterion_group!(benches, cycle_bench);
criterion_main!(benches);
