//! Property-based tests for vault operations.
//!
//! Any sequence of adds and removes leaves the vault listing exactly the
//! surviving entries, in insertion order, with unique ids.

use glassdesk::database::Database;
use glassdesk::managers::vault_manager::{VaultManager, VaultManagerTrait};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String, String, String),
    /// Removes the n-th live entry (modulo the live count).
    Remove(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => ("[A-Za-z][A-Za-z0-9 ]{0,15}", "[a-z0-9]{0,8}", "[!-~]{1,20}")
            .prop_map(|(s, u, p)| Op::Add(s, u, p)),
        1 => any::<usize>().prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn listing_matches_model(ops in proptest::collection::vec(arb_op(), 1..30)) {
        let db = Database::open_in_memory().unwrap();
        let mut mgr = VaultManager::new(db.connection());
        let mut model: Vec<(i64, String, String, String)> = Vec::new();

        for op in ops {
            match op {
                Op::Add(s, u, p) => {
                    let id = mgr.add_entry(&s, &u, &p).unwrap();
                    prop_assert!(model.iter().all(|(existing, ..)| *existing != id));
                    model.push((id, s, u, p));
                }
                Op::Remove(n) => {
                    if model.is_empty() {
                        continue;
                    }
                    let (id, ..) = model.remove(n % model.len());
                    mgr.remove_entry(id).unwrap();
                }
            }
        }

        let listed: Vec<(i64, String, String, String)> = mgr
            .list_entries()
            .unwrap()
            .into_iter()
            .map(|e| (e.id, e.service, e.username, e.password))
            .collect();
        prop_assert_eq!(listed, model);
    }
}
