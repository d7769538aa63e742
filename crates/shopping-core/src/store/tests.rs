//! Item Store Tests
//!
//! Scenario tests against the standard catalog.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::domain::{Catalog, Category, DomainError, ItemId, ReferenceKind, Shop};
    use crate::store::ItemStore;

    fn setup_store() -> ItemStore {
        ItemStore::default()
    }

    #[test]
    fn test_add_item() {
        let mut store = setup_store();

        let item = store.add("Bread", 4, 5).expect("Failed to add");

        assert_eq!(item.name, "Bread");
        assert!(!item.is_bought);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0], item);
    }

    #[test]
    fn test_add_resolves_catalog_names() {
        let mut store = setup_store();

        let item = store.add("Sneakers", 3, 2).expect("Failed to add");

        assert_eq!(item.shop.name, "Nike");
        assert_eq!(item.category.name, "Sağlık");
        assert_eq!(&item.shop, store.catalog().shop(3).unwrap());
        assert_eq!(&item.category, store.catalog().category(2).unwrap());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = setup_store();

        store.add("First", 1, 1).unwrap();
        store.add("Second", 2, 2).unwrap();
        store.add("Third", 3, 3).unwrap();

        let names: Vec<&str> = store.list().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_add_rejects_unknown_shop() {
        let mut store = setup_store();

        let result = store.add("Ghost", 99, 1);

        assert_eq!(result, Err(DomainError::InvalidReference { kind: ReferenceKind::Shop, id: 99 }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        let mut store = setup_store();

        let result = store.add("Ghost", 1, 0);

        assert_eq!(result, Err(DomainError::InvalidReference { kind: ReferenceKind::Category, id: 0 }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Arc::new(Catalog::new(
            vec![Shop::new(10, "Corner")],
            vec![Category::new(20, "Snacks")],
        ));
        let mut store = ItemStore::new(catalog);

        assert!(store.add("Chips", 10, 20).is_ok());
        assert!(store.add("Chips", 1, 1).is_err());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = setup_store();
        let item = store.add("Milk", 1, 5).unwrap();

        assert!(store.toggle_bought(&item.id));
        assert!(store.get(&item.id).unwrap().is_bought);

        assert!(store.toggle_bought(&item.id));
        assert!(!store.get(&item.id).unwrap().is_bought);
    }

    #[test]
    fn test_toggle_touches_only_matching_item() {
        let mut store = setup_store();
        let a = store.add("A", 1, 1).unwrap();
        let b = store.add("B", 1, 1).unwrap();

        store.toggle_bought(&b.id);

        assert!(!store.get(&a.id).unwrap().is_bought);
        assert!(store.get(&b.id).unwrap().is_bought);
        assert_eq!(store.bought_count(), 1);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = setup_store();
        store.add("Milk", 1, 5).unwrap();
        let before = store.list().to_vec();

        assert!(!store.toggle_bought(&ItemId::from("missing")));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_remove_item() {
        let mut store = setup_store();
        let a = store.add("A", 1, 1).unwrap();
        let b = store.add("B", 2, 2).unwrap();

        let removed = store.remove(&a.id).expect("Item should be removed");

        assert_eq!(removed.id, a.id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, b.id);
        assert!(store.get(&a.id).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = setup_store();
        store.add("Milk", 1, 5).unwrap();
        let before = store.list().to_vec();

        assert!(store.remove(&ItemId::from("missing")).is_none());
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut store = setup_store();
        let item = store.add("Milk", 1, 5).unwrap();

        assert!(store.remove(&item.id).is_some());
        assert!(store.remove(&item.id).is_none());
        assert!(store.is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u32, u32),
        Toggle(usize),
        Remove(usize),
        RemoveMissing,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u32..=6, 1u32..=6).prop_map(|(s, c)| Op::Add(s, c)),
            (0usize..16).prop_map(Op::Toggle),
            (0usize..16).prop_map(Op::Remove),
            Just(Op::RemoveMissing),
        ]
    }

    proptest! {
        #[test]
        fn prop_len_tracks_adds_and_removes(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let mut store = setup_store();
            let mut seen: Vec<ItemId> = Vec::new();
            let mut adds = 0usize;
            let mut removes = 0usize;

            for op in ops {
                match op {
                    Op::Add(shop, category) => {
                        let item = store.add("item", shop, category).unwrap();
                        seen.push(item.id);
                        adds += 1;
                    }
                    Op::Toggle(i) => {
                        if let Some(id) = seen.get(i) {
                            store.toggle_bought(id);
                        }
                    }
                    Op::Remove(i) => {
                        if let Some(id) = seen.get(i) {
                            if store.remove(id).is_some() {
                                removes += 1;
                            }
                        }
                    }
                    Op::RemoveMissing => {
                        prop_assert!(store.remove(&ItemId::from("missing")).is_none());
                    }
                }
            }

            prop_assert_eq!(store.len(), adds - removes);
            let ids: HashSet<&ItemId> = store.list().iter().map(|i| &i.id).collect();
            prop_assert_eq!(ids.len(), store.len());
        }
    }
}
