//! Drive harness for the B-tree backend: scripted add/remove, random fill,
//! structural snapshots, and a backend metrics table, all on stdout.

use rand::rngs::StdRng;
use rand::SeedableRng;

use sparsedict::{random_fill, BTree, DictMetrics, Dictionary, HashTable, TreeSnapshot};

fn print_snapshot(snapshot: &TreeSnapshot<i64, String>) {
    if snapshot.nodes.is_empty() {
        println!("  (empty)");
        return;
    }
    for depth in 0..snapshot.depth() {
        let boxes: Vec<String> = snapshot
            .level(depth)
            .map(|node| {
                let keys: Vec<String> = node.entries.iter().map(|(k, _)| k.to_string()).collect();
                format!("[{}]", keys.join(" "))
            })
            .collect();
        println!("  {}", boxes.join(" "));
    }
}

fn scripted_walkthrough() {
    println!("== scripted add/remove (degree 3) ==");
    let mut tree = BTree::new(3).expect("degree 3 is valid");

    for key in [10, 20, 5, 6, 12, 30, 7, 17] {
        tree.set(key, key.to_string());
    }
    println!("after adding 8 keys (height {}):", tree.height());
    print_snapshot(&tree.snapshot());

    tree.remove(&6);
    println!("after removing 6 (height {}):", tree.height());
    print_snapshot(&tree.snapshot());

    tree.remove(&7);
    println!("after removing 7 (height {}):", tree.height());
    print_snapshot(&tree.snapshot());
}

fn random_fill_walkthrough() {
    println!("== random fill (degree 3, 40 draws from 1..=99) ==");
    let mut rng = StdRng::seed_from_u64(0xf111);
    let mut tree = BTree::new(3).expect("degree 3 is valid");
    tree.extend(random_fill::pairs(&mut rng, 40, 1..=99));

    println!(
        "tree holds {} distinct keys at height {}:",
        tree.len(),
        tree.height()
    );
    print_snapshot(&tree.snapshot());
}

fn probe(dict: &mut dyn Dictionary<i64, i64>, size: usize) -> DictMetrics {
    for i in 0..size as i64 {
        dict.set(i * 31 % size as i64, i);
    }
    // The metrics row reports the comparisons of one representative lookup.
    dict.get(&(size as i64 / 2));
    dict.metrics()
}

fn metrics_table() {
    println!("== backend metrics (comparisons for one mid-range get) ==");
    println!("{:<12} {:>8} {:>8} {:>13}", "backend", "size", "height", "comparisons");
    for size in [100usize, 1000, 10000] {
        let mut table: HashTable<i64, i64> = HashTable::new();
        let m = probe(&mut table, size);
        println!(
            "{:<12} {:>8} {:>8} {:>13}",
            "hash table", m.len, m.height, m.last_comparisons
        );

        let mut tree: BTree<i64, i64> = BTree::new(3).expect("degree 3 is valid");
        let m = probe(&mut tree, size);
        println!(
            "{:<12} {:>8} {:>8} {:>13}",
            "btree", m.len, m.height, m.last_comparisons
        );
    }
}

fn main() {
    scripted_walkthrough();
    println!();
    random_fill_walkthrough();
    println!();
    metrics_table();
}
