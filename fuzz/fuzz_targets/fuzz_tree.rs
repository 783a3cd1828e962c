//! Replays an arbitrary sequence of insert/remove operations against
//! `Tree<i32>`, validating red-black invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use jsonscalar::Tree;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(i32),
    Remove(i32),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut tree = Tree::new();
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v);
            }
            Op::Remove(v) => {
                tree.remove(&v);
            }
        }
        assert!(tree.validate());
    }
});
