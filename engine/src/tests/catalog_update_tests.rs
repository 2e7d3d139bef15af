#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;

    fn keys(catalog: &Catalog) -> Vec<(String, i32)> {
        catalog.iter().map(|r| (r.name.clone(), r.id)).collect()
    }

    #[test]
    fn test_rename_moves_record_to_front() {
        let mut catalog = Catalog::new();
        catalog.insert("banana", 1, 0.3);
        catalog.insert("apple", 2, 0.4);

        assert!(catalog.rename_by_id(1, "aardvark"));
        assert_eq!(
            keys(&catalog),
            vec![("aardvark".to_string(), 1), ("apple".to_string(), 2)]
        );
    }

    #[test]
    fn test_rename_moves_record_to_back() {
        let mut catalog = Catalog::new();
        catalog.insert("apple", 1, 0.4);
        catalog.insert("banana", 2, 0.3);
        catalog.insert("cherry", 3, 2.0);

        assert!(catalog.rename_by_id(1, "zebra cake"));
        let ids: Vec<_> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_rename_joins_same_name_group_by_id() {
        let mut catalog = Catalog::new();
        catalog.insert("soup", 1, 1.0);
        catalog.insert("soup", 5, 1.0);
        catalog.insert("bread", 3, 1.0);

        assert!(catalog.rename_by_id(3, "soup"));
        let ids: Vec<_> = catalog.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_rename_keeps_price() {
        let mut catalog = Catalog::new();
        catalog.insert("latte", 8, 4.75);
        assert!(catalog.rename_by_id(8, "flat white"));

        let record = catalog.get(8).expect("Failed to find renamed record");
        assert_eq!(record.name, "flat white");
        assert_eq!(record.price, 4.75);
    }

    #[test]
    fn test_rename_missing_id() {
        let mut catalog = Catalog::new();
        assert!(!catalog.rename_by_id(1, "ghost"));

        catalog.insert("real", 1, 1.0);
        assert!(!catalog.rename_by_id(2, "ghost"));
        assert_eq!(keys(&catalog), vec![("real".to_string(), 1)]);
    }

    #[test]
    fn test_reprice_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.insert("melon", 3, 2.0);
        catalog.insert("kiwi", 1, 0.5);
        catalog.insert("melon", 2, 2.5);
        let before = keys(&catalog);

        for id in [1, 2, 3] {
            assert!(catalog.reprice_by_id(id, 100.0 - id as f64));
        }

        assert_eq!(keys(&catalog), before);
        assert_eq!(catalog.get(2).map(|r| r.price), Some(98.0));
    }

    #[test]
    fn test_reprice_missing_id() {
        let mut catalog = Catalog::new();
        assert!(!catalog.reprice_by_id(1, 1.0));

        catalog.insert("cake", 1, 3.0);
        assert!(!catalog.reprice_by_id(2, 1.0));
        assert_eq!(catalog.get(1).map(|r| r.price), Some(3.0));
    }

    #[test]
    fn test_reprice_accepts_negative_price() {
        let mut catalog = Catalog::new();
        catalog.insert("coupon", 1, 0.0);
        assert!(catalog.reprice_by_id(1, -2.5));
        assert_eq!(catalog.get(1).map(|r| r.price), Some(-2.5));
    }
}
