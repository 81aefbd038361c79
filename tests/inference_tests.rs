//! Schema inference tests

use json2sql::import::normalize;
use json2sql::inference::{
    InferenceConfig, InferenceError, ParentLink, RelationalInferrer, ScalarArrays,
};
use json2sql::models::{PARENT_ID_COLUMN, PRIMARY_KEY_COLUMN, Schema, SqlType};
use serde_json::{Value, json};

fn people() -> Value {
    json!([
        {"name": "Alice", "age": 30, "pets": [{"species": "cat"}, {"species": "dog"}]},
        {"name": "Bob", "age": 25, "pets": [{"species": "fish"}]}
    ])
}

/// Ids the rows of `table` get on load: an explicit integral `id`, or the
/// next AUTOINCREMENT value.
fn loaded_ids(schema: &Schema, table: &str) -> Vec<i64> {
    let mut last = 0;
    schema
        .rows(table)
        .iter()
        .map(|row| {
            let id = row
                .get(PRIMARY_KEY_COLUMN)
                .and_then(Value::as_i64)
                .unwrap_or(last + 1);
            last = last.max(id);
            id
        })
        .collect()
}

/// Every child table points at an existing table and each parent_id value
/// is the id of a row in that table.
fn assert_links_resolve(schema: &Schema) {
    for table in schema.tables.values() {
        for fk in &table.foreign_keys {
            assert!(
                schema.table(&fk.referenced_table).is_some(),
                "{} references missing table {}",
                table.name,
                fk.referenced_table
            );
            let parent_ids = loaded_ids(schema, &fk.referenced_table);
            for row in schema.rows(&table.name) {
                let id = row[PARENT_ID_COLUMN].as_i64().unwrap();
                assert!(parent_ids.contains(&id), "{} has dangling parent_id {}", table.name, id);
            }
        }
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_people_with_pets() {
        let schema = RelationalInferrer::new().infer(&people()).unwrap();

        assert_eq!(
            schema.table_names().collect::<Vec<_>>(),
            vec!["root", "root_pets"]
        );

        let root = schema.table("root").unwrap();
        assert_eq!(root.column_names().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(root.columns["name"].data_type, SqlType::Text);
        assert_eq!(root.columns["age"].data_type, SqlType::Integer);
        assert!(root.foreign_keys.is_empty());

        let pets = schema.table("root_pets").unwrap();
        assert_eq!(
            pets.column_names().collect::<Vec<_>>(),
            vec!["parent_id", "species"]
        );
        assert_eq!(pets.parent_table(), Some("root"));

        let parent_ids: Vec<&Value> = schema
            .rows("root_pets")
            .iter()
            .map(|row| &row[PARENT_ID_COLUMN])
            .collect();
        assert_eq!(parent_ids, vec![&json!(1), &json!(1), &json!(2)]);
        assert_links_resolve(&schema);
    }

    #[test]
    fn test_literal_ids_become_parent_ids() {
        let data = json!([
            {"id": 10, "pets": [{"s": "cat"}]},
            {"id": 20, "pets": [{"s": "dog"}]},
            {"pets": [{"s": "eel"}]}
        ]);
        let schema = RelationalInferrer::new().infer(&data).unwrap();

        let parent_ids: Vec<&Value> = schema
            .rows("root_pets")
            .iter()
            .map(|row| &row[PARENT_ID_COLUMN])
            .collect();
        assert_eq!(parent_ids, vec![&json!(10), &json!(20), &json!(21)]);
        assert_links_resolve(&schema);
    }

    #[test]
    fn test_placeholder_links() {
        let config = InferenceConfig::builder()
            .parent_link(ParentLink::Placeholder)
            .build();
        let schema = RelationalInferrer::with_config(config)
            .infer(&people())
            .unwrap();

        assert!(
            schema
                .rows("root_pets")
                .iter()
                .all(|row| row[PARENT_ID_COLUMN] == json!(1))
        );
    }

    #[test]
    fn test_nested_object_chain() {
        let data = json!({"order": {"customer": {"address": {"city": "Bonn"}}}});
        let schema = RelationalInferrer::new().infer(&data).unwrap();

        assert_eq!(
            schema.table_names().collect::<Vec<_>>(),
            vec![
                "root",
                "root_order",
                "root_order_customer",
                "root_order_customer_address"
            ]
        );
        assert_eq!(
            schema
                .table("root_order_customer_address")
                .unwrap()
                .parent_table(),
            Some("root_order_customer")
        );
        assert_links_resolve(&schema);
    }

    #[test]
    fn test_ndjson_input() {
        let value = normalize("{\"sku\": \"A1\", \"qty\": 2}\n{\"sku\": \"B2\", \"qty\": 5}").unwrap();
        let schema = RelationalInferrer::new().infer(&value).unwrap();

        assert_eq!(schema.rows("root").len(), 2);
        assert_eq!(schema.table("root").unwrap().columns["qty"].data_type, SqlType::Integer);
    }

    #[test]
    fn test_loose_input() {
        let value = normalize("[{id: 7, label: 'first'}, {id: 8, label: 'second'},]").unwrap();
        let schema = RelationalInferrer::new().infer(&value).unwrap();

        assert_eq!(schema.rows("root").len(), 2);
        assert_eq!(schema.rows("root")[1]["label"], json!("second"));
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_inference_is_deterministic() {
        let inferrer = RelationalInferrer::new();
        let first = inferrer.infer(&people()).unwrap();
        let second = inferrer.infer(&people()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_flat_array_keeps_every_record() {
        let records: Vec<Value> = (0..25)
            .map(|i| json!({"n": i, "label": format!("item {}", i)}))
            .collect();
        let schema = RelationalInferrer::new().infer(&Value::Array(records)).unwrap();

        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.rows("root").len(), 25);
        assert_eq!(schema.rows("root")[24]["n"], json!(24));
    }

    #[test]
    fn test_columns_are_union_in_first_seen_order() {
        let data = json!([{"a": 1}, {"b": "x", "a": 2}, {"c": true}]);
        let schema = RelationalInferrer::new().infer(&data).unwrap();
        let root = schema.table("root").unwrap();

        assert_eq!(root.column_names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(root.columns["c"].data_type, SqlType::Boolean);
    }

    #[test]
    fn test_first_observed_type_wins() {
        let data = json!([{"v": "2024-05-01"}, {"v": 3.5}]);
        let schema = RelationalInferrer::new().infer(&data).unwrap();
        assert_eq!(schema.table("root").unwrap().columns["v"].data_type, SqlType::Date);
    }

    #[test]
    fn test_type_table() {
        let data = json!({
            "int": 3,
            "float": 2.5,
            "flag": false,
            "text": "hello",
            "numeric_text": "12",
            "decimal_text": "1.25",
            "day": "2023-12-24",
            "moment": "2023-12-24T18:00:00Z",
            "nothing": null
        });
        let schema = RelationalInferrer::new().infer(&data).unwrap();
        let types: Vec<SqlType> = schema
            .table("root")
            .unwrap()
            .columns
            .values()
            .map(|c| c.data_type)
            .collect();

        assert_eq!(
            types,
            vec![
                SqlType::Integer,
                SqlType::Real,
                SqlType::Boolean,
                SqlType::Text,
                SqlType::Integer,
                SqlType::Real,
                SqlType::Date,
                SqlType::Datetime,
                SqlType::Text,
            ]
        );
    }

    #[test]
    fn test_scalar_policies() {
        let data = json!({"name": "post", "tags": ["rust", "sql"]});

        let dropped = RelationalInferrer::new().infer(&data).unwrap();
        assert!(dropped.table("root_tags").is_none());

        let config = InferenceConfig::builder()
            .scalar_arrays(ScalarArrays::ValueColumn)
            .build();
        let kept = RelationalInferrer::with_config(config).infer(&data).unwrap();
        let values: Vec<&Value> = kept.rows("root_tags").iter().map(|r| &r["value"]).collect();
        assert_eq!(values, vec![&json!("rust"), &json!("sql")]);
        assert_links_resolve(&kept);
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_scalar_root_rejected() {
        for value in [json!(1), json!("text"), json!(null), json!(true)] {
            assert!(matches!(
                RelationalInferrer::new().infer(&value),
                Err(InferenceError::InputShapeError(_))
            ));
        }
    }

    #[test]
    fn test_depth_limit() {
        let mut value = json!({"leaf": 1});
        for _ in 0..10 {
            value = json!({ "child": value });
        }

        let config = InferenceConfig::builder().max_depth(5).build();
        assert!(matches!(
            RelationalInferrer::with_config(config).infer(&value),
            Err(InferenceError::MaxDepthExceeded { max: 5, .. })
        ));
        assert!(RelationalInferrer::new().infer(&value).is_ok());
    }
}
