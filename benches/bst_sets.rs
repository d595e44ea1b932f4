use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn keys() -> Vec<u32> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS).map(|_| rng.gen()).collect()
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for key in &keys {
                set.insert(*key);
            }
        })
    });
}

fn bench_btreeset_find(c: &mut Criterion) {
    let keys = keys();
    let set: BTreeSet<u32> = keys.iter().cloned().collect();
    c.bench_function("bench btreeset find", move |b| {
        b.iter(|| {
            for key in &keys {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_btreeset_remove(c: &mut Criterion) {
    let keys = keys();
    c.bench_function("bench btreeset remove", move |b| {
        b.iter(|| {
            let mut set: BTreeSet<u32> = keys.iter().cloned().collect();
            for key in &keys {
                set.remove(key);
            }
        })
    });
}

macro_rules! bst_set_benches {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use bst_collections::$module_name::$type_name;
                use bst_collections::OrderedSet;
                use criterion::{black_box, Criterion};

                pub fn bench_insert(c: &mut Criterion) {
                    let keys = super::keys();
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set = $type_name::new();
                        for key in &keys {
                            set.insert(*key);
                        }
                    }));
                }

                pub fn bench_find(c: &mut Criterion) {
                    let keys = super::keys();
                    let mut set: $type_name<u32> = keys.iter().cloned().collect();
                    c.bench_function(&format!("bench {} find", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(OrderedSet::find(&mut set, key));
                        }
                    }));
                }

                pub fn bench_remove(c: &mut Criterion) {
                    let keys = super::keys();
                    c.bench_function(&format!("bench {} remove", stringify!($module_name)), move |b| b.iter(|| {
                        let mut set: $type_name<u32> = keys.iter().cloned().collect();
                        for key in &keys {
                            set.remove(key);
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            bench_btreeset_insert,
            bench_btreeset_find,
            bench_btreeset_remove,
            $(
                $module_name::bench_insert,
                $module_name::bench_find,
                $module_name::bench_remove,
            )*
        );
    }
}

bst_set_benches!(
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
    splay_tree: SplayTree,
);

criterion_main!(benches);
