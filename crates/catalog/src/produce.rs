use std::fmt;

use grocer_db::table;
use sea_query::{Expr, ExprTrait, InsertStatement, Order, Query, SelectStatement};
use sqlx::prelude::FromRow;

use crate::{Category, Record};

/// Loose produce sold by weight.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Produce {
    #[sqlx(rename = "produce_id")]
    pub id: Option<i64>,
    pub name: String,
    pub unit_price: f64,
    /// Pounds.
    weight: f64,
    pub is_organic: bool,
    tax_rate: f64,
    total_price: f64,
}

impl Produce {
    pub const TAX_RATE: f64 = 0.0;

    pub fn new(name: impl Into<String>, unit_price: f64, weight: f64) -> Self {
        let mut produce = Self {
            id: None,
            name: name.into(),
            unit_price,
            weight,
            is_organic: false,
            tax_rate: Self::TAX_RATE,
            total_price: 0.0,
        };
        produce.reprice();

        produce
    }

    pub fn organic(mut self, is_organic: bool) -> Self {
        self.is_organic = is_organic;
        self
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Price computed at construction or by the last [`Produce::reprice`].
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Re-weighing at the register. The total price is left untouched.
    pub fn set_weight(&mut self, weight: f64) -> f64 {
        self.weight = weight;
        self.weight
    }

    /// Lowers the unit price by `percent_off` percent. The total price is
    /// left untouched.
    pub fn discount(&mut self, percent_off: f64) {
        self.unit_price *= 1.0 - percent_off / 100.0;
    }

    pub fn reprice(&mut self) -> f64 {
        self.total_price = self.unit_price * self.weight * (1.0 + self.tax_rate);
        self.total_price
    }
}

impl fmt::Display for Produce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}\nUnit Price: ${:.2}\nWeight: {:.2} lbs.\nTotal Price: ${:.2}\n",
            self.name, self.unit_price, self.weight, self.total_price
        )
    }
}

impl Record for Produce {
    const CATEGORY: Category = Category::Produce;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn insert_statement(&self) -> InsertStatement {
        Query::insert()
            .into_table(table::Produce::Table)
            .columns([
                table::Produce::Name,
                table::Produce::UnitPrice,
                table::Produce::Weight,
                table::Produce::IsOrganic,
                table::Produce::TaxRate,
                table::Produce::TotalPrice,
            ])
            .values_panic([
                self.name.to_owned().into(),
                self.unit_price.into(),
                self.weight.into(),
                self.is_organic.into(),
                self.tax_rate.into(),
                self.total_price.into(),
            ])
            .to_owned()
    }

    fn select_by_name(name: &str) -> SelectStatement {
        Query::select()
            .columns([
                table::Produce::ProduceId,
                table::Produce::Name,
                table::Produce::UnitPrice,
                table::Produce::Weight,
                table::Produce::IsOrganic,
                table::Produce::TaxRate,
                table::Produce::TotalPrice,
            ])
            .from(table::Produce::Table)
            .and_where(Expr::col(table::Produce::Name).eq(name))
            .order_by(table::Produce::ProduceId, Order::Asc)
            .limit(1)
            .to_owned()
    }
}
