//! The Income demo model: one polymorphic type with two concrete variants,
//! declared as a fully static catalog. Variant field lists are complete —
//! they repeat the shared fields and the discriminator field — so each
//! variant's object schema stands on its own.

use typegen_catalog::prelude::*;

///
/// Enums
///

pub static INCOME_TYPE: EnumDef = EnumDef {
    name: "IncomeType",
    values: &["Employment", "Passive"],
};

pub static EMPLOYMENT_TYPE: EnumDef = EnumDef {
    name: "EmploymentType",
    values: &["Salaried", "Hourly", "Contract"],
};

pub static PASSIVE_INCOME_TYPE: EnumDef = EnumDef {
    name: "PassiveIncomeType",
    values: &["Investment", "Rental", "Royalties"],
};

///
/// EmploymentIncome
///

pub static EMPLOYMENT_INCOME: RecordDef = RecordDef {
    name: "EmploymentIncome",
    fields: FieldList {
        fields: &[
            Field::new("IncomeType", TypeRef::Enum(&INCOME_TYPE)),
            Field::new("EmploymentType", TypeRef::Enum(&EMPLOYMENT_TYPE)),
            Field::new("Amount", TypeRef::Primitive(Primitive::Decimal)),
            Field::new("Source", TypeRef::Primitive(Primitive::Text)),
        ],
    },
};

///
/// PassiveIncome
///

pub static PASSIVE_INCOME: RecordDef = RecordDef {
    name: "PassiveIncome",
    fields: FieldList {
        fields: &[
            Field::new("PassiveIncomeType", TypeRef::Enum(&PASSIVE_INCOME_TYPE)),
            Field::new("IncomeType", TypeRef::Enum(&INCOME_TYPE)),
            Field::new("Amount", TypeRef::Primitive(Primitive::Decimal)),
            Field::new("Source", TypeRef::Primitive(Primitive::Text)),
        ],
    },
};

///
/// Income
///

static EMPLOYMENT_INCOME_DEF: TypeDef = TypeDef::Record(&EMPLOYMENT_INCOME);
static PASSIVE_INCOME_DEF: TypeDef = TypeDef::Record(&PASSIVE_INCOME);

pub static INCOME: UnionDef = UnionDef {
    name: "Income",
    fields: FieldList {
        fields: &[
            Field::new("Amount", TypeRef::Primitive(Primitive::Decimal)),
            Field::new("Source", TypeRef::Primitive(Primitive::Text)),
            Field::new("IncomeType", TypeRef::Enum(&INCOME_TYPE)),
        ],
    },
    discriminator: Some("IncomeType"),
    variants: &[
        Variant {
            tag: "EmploymentIncome",
            def: &EMPLOYMENT_INCOME_DEF,
        },
        Variant {
            tag: "PassiveIncome",
            def: &PASSIVE_INCOME_DEF,
        },
    ],
};

///
/// Catalog
///

static TYPES: &[TypeDef] = &[
    TypeDef::Union(&INCOME),
    TypeDef::Enum(&INCOME_TYPE),
    TypeDef::Record(&EMPLOYMENT_INCOME),
    TypeDef::Enum(&EMPLOYMENT_TYPE),
    TypeDef::Record(&PASSIVE_INCOME),
    TypeDef::Enum(&PASSIVE_INCOME_TYPE),
];

/// The demo catalog, in source declaration order.
#[must_use]
pub const fn catalog() -> Catalog {
    Catalog::new(TYPES)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_catalog_is_structurally_valid() {
        assert!(catalog().validate().is_ok());
    }
}
