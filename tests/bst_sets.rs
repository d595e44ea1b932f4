use bst_collections::avl_tree::AvlTree;
use bst_collections::splay_tree::SplayTree;
use bst_collections::{OrderedSet, Traverse};
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100_000;

macro_rules! bst_set_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use bst_collections::$module_name::$type_name;
                use bst_collections::{OrderedSet, Traverse};
                use rand::{Rng, SeedableRng};
                use rand_xoshiro::Xoshiro256PlusPlus;
                use std::collections::BTreeSet;
                use super::NUM_OF_OPERATIONS;

                #[test]
                fn int_test_set() {
                    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0..NUM_OF_OPERATIONS as u32);
                        assert_eq!(set.insert(key), expected.insert(key));
                    }

                    assert_eq!(set.len(), expected.len());
                    assert_eq!(
                        set.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                    assert_eq!(set.min(), expected.iter().next());
                    assert_eq!(set.max(), expected.iter().next_back());

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0..NUM_OF_OPERATIONS as u32);
                        assert_eq!(OrderedSet::find(&mut set, &key), expected.contains(&key));
                    }

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0..NUM_OF_OPERATIONS as u32);
                        let expected_key = if expected.remove(&key) { Some(key) } else { None };
                        assert_eq!(set.remove(&key), expected_key);
                    }

                    assert_eq!(set.len(), expected.len());
                    assert_eq!(
                        set.in_order(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                }

                #[test]
                fn int_test_ascending_then_descending_removal() {
                    let mut set: $type_name<u32> = (0..NUM_OF_OPERATIONS as u32).collect();
                    assert_eq!(set.len(), NUM_OF_OPERATIONS);

                    for key in (0..NUM_OF_OPERATIONS as u32).rev() {
                        assert_eq!(set.remove(&key), Some(key));
                    }
                    assert!(set.is_empty());
                    assert!(set.pre_order().is_empty());
                }

                #[test]
                fn int_test_traversal_shapes() {
                    let mut set = $type_name::new();
                    for key in &[50, 20, 80, 10, 30, 70, 90, 60, 40] {
                        set.insert(*key);
                    }

                    let root = *set.root().unwrap();
                    let pre_order = Traverse::pre_order(&set);
                    let post_order = Traverse::post_order(&set);
                    let level_order = Traverse::level_order(&set);

                    assert_eq!(pre_order[0], &root);
                    assert_eq!(post_order[post_order.len() - 1], &root);
                    assert_eq!(level_order[0], &root);

                    let mut sorted = pre_order.clone();
                    sorted.sort();
                    assert_eq!(sorted, set.in_order());
                    assert_eq!(
                        set.in_order(),
                        vec![&10, &20, &30, &40, &50, &60, &70, &80, &90],
                    );
                }

                #[test]
                fn int_test_empty() {
                    let mut set: $type_name<u32> = $type_name::default();
                    assert!(!OrderedSet::find(&mut set, &1));
                    assert_eq!(set.remove(&1), None);
                    assert!(set.pre_order().is_empty());
                    assert!(set.in_order().is_empty());
                    assert!(set.post_order().is_empty());
                    assert!(set.level_order().is_empty());
                    assert_eq!(set.root(), None);
                }

                #[test]
                fn int_test_clear() {
                    let mut set: $type_name<u32> = (0..1000).collect();
                    set.clear();
                    assert!(set.is_empty());
                    assert!(set.insert(1));
                    assert_eq!(set.len(), 1);
                }
            }
        )*
    }
}

bst_set_tests!(
    avl_tree: AvlTree,
    red_black_tree: RedBlackTree,
    splay_tree: SplayTree,
);

fn round_trip<S>()
where
    S: OrderedSet<i32> + Traverse<i32> + Default,
{
    let mut set = S::default();
    set.insert(7);
    assert!(set.find(&7));
    set.remove(&7);
    assert!(!set.find(&7));

    for key in &[3, 1, 2] {
        set.insert(*key);
    }
    set.insert(2);
    assert_eq!(set.len(), 3);

    set.remove(&100);
    assert_eq!(set.in_order(), vec![&1, &2, &3]);
}

#[test]
fn int_test_round_trip_through_traits() {
    round_trip::<AvlTree<i32>>();
    round_trip::<SplayTree<i32>>();
    round_trip::<bst_collections::red_black_tree::RedBlackTree<i32>>();

    let mut baseline = BTreeSet::new();
    OrderedSet::insert(&mut baseline, 1);
    assert!(OrderedSet::find(&mut baseline, &1));
    assert_eq!(<BTreeSet<i32> as OrderedSet<i32>>::NAME, "BTreeSet");
}

#[test]
fn int_test_ascending_insert_shapes() {
    let avl: AvlTree<u32> = (1..=7).collect();
    assert_eq!(avl.height(), 3);
    assert_eq!(avl.root(), Some(&4));

    let splay: SplayTree<u32> = (1..=7).collect();
    assert_eq!(splay.root(), Some(&7));
    assert_eq!(splay.depth(), 7);
}

#[test]
fn int_test_avl_remove_with_two_children() {
    let mut avl: AvlTree<u32> = vec![5, 3, 8, 2, 4, 7, 9].into_iter().collect();
    assert_eq!(avl.remove(&5), Some(5));
    assert_eq!(avl.root(), Some(&4));
    assert_eq!(avl.in_order(), vec![&2, &3, &4, &7, &8, &9]);
    assert!(avl.height() <= 3);
}

#[test]
fn int_test_splay_find_moves_last_compared_key_to_root() {
    let mut splay = SplayTree::new();
    for key in &[10, 20, 30] {
        splay.insert(*key);
    }
    assert_eq!(splay.root(), Some(&30));

    assert!(splay.find(&10));
    assert_eq!(splay.root(), Some(&10));

    assert!(!splay.find(&25));
    assert_eq!(splay.root(), Some(&30));
    assert_eq!(splay.in_order(), vec![&10, &20, &30]);
}

#[test]
fn int_test_splay_deep_chain() {
    let mut splay: SplayTree<u32> = (0..NUM_OF_OPERATIONS as u32).collect();
    assert_eq!(splay.depth(), NUM_OF_OPERATIONS);
    assert_eq!(splay.in_order().len(), NUM_OF_OPERATIONS);
    assert_eq!(splay.post_order().len(), NUM_OF_OPERATIONS);

    assert!(splay.find(&0));
    assert_eq!(splay.root(), Some(&0));
    assert!(splay.depth() < NUM_OF_OPERATIONS);
}
