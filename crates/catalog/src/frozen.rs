use std::fmt;

use grocer_db::table;
use sea_query::{Expr, ExprTrait, InsertStatement, Order, Query, SelectStatement};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use time::{Date, PrimitiveDateTime};

use crate::{Category, Record};

#[derive(Debug, Clone, PartialEq)]
pub struct Frozen {
    pub id: Option<i64>,
    pub name: String,
    pub unit_price: f64,
    pub expiration: Date,
    quantity: i64,
    tax_rate: f64,
    total_price: f64,
}

impl Frozen {
    pub const TAX_RATE: f64 = 0.0;

    /// A single unit expiring on `expiration`.
    pub fn new(name: impl Into<String>, unit_price: f64, expiration: Date) -> Self {
        let mut frozen = Self {
            id: None,
            name: name.into(),
            unit_price,
            expiration,
            quantity: 1,
            tax_rate: Self::TAX_RATE,
            total_price: 0.0,
        };
        frozen.reprice();

        frozen
    }

    /// Same as [`Frozen::new`] with the expiration given as calendar parts.
    pub fn from_ymd(
        name: impl Into<String>,
        unit_price: f64,
        year: i32,
        month: u8,
        day: u8,
    ) -> grocer_shared::Result<Self> {
        let expiration = grocer_shared::date(year, month, day)?;

        Ok(Self::new(name, unit_price, expiration))
    }

    /// Constructs with `quantity` units; the total is priced for them.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self.reprice();
        self
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Changes the unit count instead of scanning the item again. The total
    /// price is left untouched.
    pub fn set_quantity(&mut self, quantity: i64) -> i64 {
        self.quantity = quantity;
        self.quantity
    }

    pub fn reprice(&mut self) -> f64 {
        self.total_price = self.unit_price * self.quantity as f64 * (1.0 + self.tax_rate);
        self.total_price
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(grocer_shared::now())
    }

    /// An item expires at midnight at the start of its expiration date.
    pub fn is_expired_at(&self, now: PrimitiveDateTime) -> bool {
        if now > self.expiration.midnight() {
            tracing::warn!(name = %self.name, expiration = %self.expiration, "Item has expired, please replace.");

            return true;
        }

        false
    }
}

impl fmt::Display for Frozen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}\nUnit Price: ${:.2}\nQuantity: {}\nTotal Price: ${:.2}\n",
            self.name, self.unit_price, self.quantity, self.total_price
        )
    }
}

impl<'r> FromRow<'r, SqliteRow> for Frozen {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let expiration: i64 = row.try_get("expiration")?;
        let expiration =
            grocer_shared::from_timestamp(expiration).map_err(|e| sqlx::Error::ColumnDecode {
                index: "expiration".to_owned(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("frozen_id")?,
            name: row.try_get("name")?,
            unit_price: row.try_get("unit_price")?,
            expiration,
            quantity: row.try_get("quantity")?,
            tax_rate: row.try_get("tax_rate")?,
            total_price: row.try_get("total_price")?,
        })
    }
}

impl Record for Frozen {
    const CATEGORY: Category = Category::Frozen;

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
            .into_table(table::Frozen::Table)
            .columns([
                table::Frozen::Name,
                table::Frozen::UnitPrice,
                table::Frozen::Expiration,
                table::Frozen::Quantity,
                table::Frozen::TaxRate,
                table::Frozen::TotalPrice,
            ])
            .values_panic([
                self.name.to_owned().into(),
                self.unit_price.into(),
                grocer_shared::to_timestamp(self.expiration).into(),
                self.quantity.into(),
                self.tax_rate.into(),
                self.total_price.into(),
            ])
            .to_owned()
    }

    fn select_by_name(name: &str) -> SelectStatement {
        Query::select()
            .columns([
                table::Frozen::FrozenId,
                table::Frozen::Name,
                table::Frozen::UnitPrice,
                table::Frozen::Expiration,
                table::Frozen::Quantity,
                table::Frozen::TaxRate,
                table::Frozen::TotalPrice,
            ])
            .from(table::Frozen::Table)
            .and_where(Expr::col(table::Frozen::Name).eq(name))
            .order_by(table::Frozen::FrozenId, Order::Asc)
            .limit(1)
            .to_owned()
    }
}
