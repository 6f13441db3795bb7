//! Benchmarks for inventory stacking and encumbrance.
//!
//! Run with: cargo bench --bench inventory

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use heirloom::items::{
    add_item_to_inventory, calculate_encumbrance, next_item_id, remove_item_from_inventory, Item,
    ItemCategory, ItemDefinition,
};

const CATEGORIES: [ItemCategory; 5] = [
    ItemCategory::Food,
    ItemCategory::Material,
    ItemCategory::Tool,
    ItemCategory::Weapon,
    ItemCategory::Consumable,
];

/// An inventory of `size` distinct stacks
fn create_inventory(size: usize) -> Vec<Item> {
    (0..size)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let mut def = ItemDefinition::new(format!("item_{}", i), format!("Item {}", i), category);
            def.weight = 0.5 + (i % 7) as f32;
            Item::from_definition(next_item_id(), &def)
        })
        .collect()
}

fn bench_add_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_item");

    for size in [10, 100, 1000].iter() {
        let inventory = create_inventory(*size);
        let mut def = ItemDefinition::new("item_1", "Item 1", ItemCategory::Material);
        def.weight = 1.5;
        let incoming = Item::from_definition(next_item_id(), &def);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let next = add_item_to_inventory(black_box(&inventory), incoming.clone());
                black_box(next)
            });
        });
    }

    group.finish();
}

fn bench_remove_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_item");

    for size in [10, 100, 1000].iter() {
        let inventory = create_inventory(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let removal = remove_item_from_inventory(black_box(&inventory), "item 0", 1);
                black_box(removal)
            });
        });
    }

    group.finish();
}

fn bench_encumbrance(c: &mut Criterion) {
    let mut group = c.benchmark_group("encumbrance");

    for size in [10, 100, 1000].iter() {
        let inventory = create_inventory(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let report = calculate_encumbrance(black_box(&inventory), black_box(10.0));
                black_box(report)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_item, bench_remove_item, bench_encumbrance);
criterion_main!(benches);
