//! End-to-end generation over the Income fixture catalog.

use serde_json::json;
use typegen_core::prelude::*;

#[test]
fn income_catalog_emits_one_union_document() {
    let catalog = typegen_fixtures::catalog();
    catalog.validate().expect("fixture catalog is valid");

    let run = generate(&catalog);

    // enums never emit; both variants are consumed by the union mapping
    assert_eq!(run.documents.len(), 1);
    assert!(run.diagnostics.is_empty());
    assert!(run.consumed.contains("EmploymentIncome"));
    assert!(run.consumed.contains("PassiveIncome"));

    let doc = run.document("Income").expect("Income document");
    let value = serde_json::to_value(&doc.schema).unwrap();

    assert_eq!(
        value,
        json!({
            "discriminator": "incomeType",
            "mapping": {
                "EmploymentIncome": {
                    "properties": {
                        "incomeType": {"enum": ["Employment", "Passive"]},
                        "employmentType": {"enum": ["Salaried", "Hourly", "Contract"]},
                        "amount": {"type": "string"},
                        "source": {"type": "string"},
                    }
                },
                "PassiveIncome": {
                    "properties": {
                        "passiveIncomeType": {"enum": ["Investment", "Rental", "Royalties"]},
                        "incomeType": {"enum": ["Employment", "Passive"]},
                        "amount": {"type": "string"},
                        "source": {"type": "string"},
                    }
                },
            }
        })
    );
}

#[test]
fn generation_is_idempotent_byte_for_byte() {
    let catalog = typegen_fixtures::catalog();

    let first = generate(&catalog);
    let second = generate(&catalog);

    assert_eq!(first.documents.len(), second.documents.len());
    for (a, b) in first.documents.iter().zip(&second.documents) {
        assert_eq!(a.name, b.name);
        assert_eq!(
            a.schema.to_json().unwrap(),
            b.schema.to_json().unwrap()
        );
    }
}

#[test]
fn mapping_order_follows_variant_declaration_order() {
    let run = generate(&typegen_fixtures::catalog());
    let doc = run.document("Income").unwrap();

    let SchemaDoc::Union(union) = &doc.schema else {
        panic!("Income must be a union document");
    };
    let keys: Vec<_> = union.mapping.keys().collect();
    assert_eq!(keys, vec!["EmploymentIncome", "PassiveIncome"]);
}
