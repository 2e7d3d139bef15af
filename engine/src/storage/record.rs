use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub id: i32,
    pub price: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, id: i32, price: f64) -> Self {
        Self {
            name: name.into(),
            id,
            price,
        }
    }

    /// Sort key of the catalog: name first, id breaks ties.
    pub fn key(&self) -> (&str, i32) {
        (self.name.as_str(), self.id)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}   {}     {}", self.name, self.id, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_orders_by_name_then_id() {
        let kiwi = Record::new("kiwi", 10, 1.5);
        assert!(kiwi.key() < Record::new("lime", 1, 0.5).key());
        assert!(kiwi.key() > Record::new("fig", 99, 0.5).key());
        assert!(kiwi.key() < Record::new("kiwi", 11, 0.5).key());
        // Uppercase sorts before lowercase byte-wise.
        assert!(Record::new("Zucchini", 1, 0.8).key() < Record::new("apple", 1, 0.8).key());
    }

    #[test]
    fn test_display_lists_name_id_price() {
        let record = Record::new("bagel", 7, 2.25);
        assert_eq!(record.to_string(), "bagel   7     2.25");
    }

    #[test]
    fn test_record_json_shape() {
        let record = Record::new("bagel", 7, 2.25);
        let json = serde_json::to_value(&record).expect("Failed to serialize record");
        assert_eq!(
            json,
            serde_json::json!({ "name": "bagel", "id": 7, "price": 2.25 })
        );
    }
}
