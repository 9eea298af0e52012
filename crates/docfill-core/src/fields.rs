//! Form field set stamped onto the template

use serde::{Deserialize, Serialize};

use crate::rules::Field;

/// The four field values a caller supplies for one document.
///
/// Date and price are display text, not parsed values. Validation only
/// requires that every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFields {
    pub full_name: String,
    pub address: String,
    pub date: String,
    pub price: String,
}

impl DocumentFields {
    /// Check that all four fields are present as non-empty strings.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.full_name.is_empty()
            || self.address.is_empty()
            || self.date.is_empty()
            || self.price.is_empty()
        {
            return Err("All fields are required");
        }
        Ok(())
    }

    /// Resolve a placement's field to its value.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Address => &self.address,
            Field::Date => &self.date,
            Field::Price => &self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DocumentFields {
        DocumentFields {
            full_name: "Jane Buyer".to_string(),
            address: "12 Ocean Ave".to_string(),
            date: "2026-08-25".to_string(),
            price: "$450,000".to_string(),
        }
    }

    #[test]
    fn complete_fields_validate() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn any_empty_field_is_rejected() {
        for blank in 0..4 {
            let mut fields = sample();
            match blank {
                0 => fields.full_name.clear(),
                1 => fields.address.clear(),
                2 => fields.date.clear(),
                _ => fields.price.clear(),
            }
            assert_eq!(fields.validate(), Err("All fields are required"));
        }
    }

    #[test]
    fn value_maps_each_field() {
        let fields = sample();
        assert_eq!(fields.value(Field::FullName), "Jane Buyer");
        assert_eq!(fields.value(Field::Address), "12 Ocean Ave");
        assert_eq!(fields.value(Field::Date), "2026-08-25");
        assert_eq!(fields.value(Field::Price), "$450,000");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn non_empty() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ,.$-]{1,40}"
    }

    proptest! {
        #[test]
        fn non_empty_field_sets_always_validate(
            full_name in non_empty(),
            address in non_empty(),
            date in non_empty(),
            price in non_empty(),
        ) {
            let fields = DocumentFields { full_name, address, date, price };
            prop_assert!(fields.validate().is_ok());
        }

        #[test]
        fn emptying_any_member_fails_validation(
            full_name in non_empty(),
            address in non_empty(),
            date in non_empty(),
            price in non_empty(),
            which in 0usize..4,
        ) {
            let mut fields = DocumentFields { full_name, address, date, price };
            match which {
                0 => fields.full_name.clear(),
                1 => fields.address.clear(),
                2 => fields.date.clear(),
                _ => fields.price.clear(),
            }
            prop_assert_eq!(fields.validate(), Err("All fields are required"));
        }
    }
}
