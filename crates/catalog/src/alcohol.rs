use std::fmt;

use grocer_db::table;
use sea_query::{Expr, ExprTrait, InsertStatement, Order, Query, SelectStatement};
use sqlx::prelude::FromRow;
use time::Date;

use crate::{Category, Record};

pub const LEGAL_DRINKING_AGE: i64 = 21;

/// Tax band for a given alcohol-by-volume percentage.
///
/// Beer and most wine (up to 10%) pay 5%, fortified wine (up to 20%) pays
/// 10%, spirits pay 20%.
pub fn tax_for_abv(abv: f64) -> f64 {
    if abv <= 10.0 {
        0.05
    } else if abv <= 20.0 {
        0.1
    } else {
        0.2
    }
}

/// Whole calendar years between `birth` and `today`.
///
/// A birthday counts on its own day. Someone born on February 29 ages on
/// March 1 in common years.
pub fn age_on(birth: Date, today: Date) -> i64 {
    let mut age = i64::from(today.year() - birth.year());

    if (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day()) {
        age -= 1;
    }

    age
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Alcohol {
    #[sqlx(rename = "alcohol_id")]
    pub id: Option<i64>,
    pub name: String,
    pub unit_price: f64,
    pub abv: f64,
    age_verified: bool,
    tax_rate: f64,
    total_price: f64,
}

impl Alcohol {
    pub fn new(name: impl Into<String>, unit_price: f64, abv: f64) -> Self {
        let mut alcohol = Self {
            id: None,
            name: name.into(),
            unit_price,
            abv,
            age_verified: false,
            tax_rate: tax_for_abv(abv),
            total_price: 0.0,
        };
        alcohol.reprice();

        alcohol
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn is_age_verified(&self) -> bool {
        self.age_verified
    }

    pub fn reprice(&mut self) -> f64 {
        self.tax_rate = tax_for_abv(self.abv);
        self.total_price = self.unit_price * (1.0 + self.tax_rate);
        self.total_price
    }

    /// Checks a customer ID against today's date. See [`Alcohol::verify_id_on`].
    pub fn verify_id(&mut self, year: i32, month: u8, day: u8) -> grocer_shared::Result<bool> {
        self.verify_id_on(year, month, day, grocer_shared::today())
    }

    /// Marks the purchase as age verified when the birth date makes the
    /// customer at least [`LEGAL_DRINKING_AGE`] on `today`.
    ///
    /// Returns whether this ID passed. A refused ID is not an error: the
    /// rejection is logged and a previous verification is kept. An impossible
    /// birth date is an error.
    pub fn verify_id_on(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
        today: Date,
    ) -> grocer_shared::Result<bool> {
        let birthday = grocer_shared::date(year, month, day)?;
        let age = age_on(birthday, today);

        if age < LEGAL_DRINKING_AGE {
            tracing::warn!(name = %self.name, age, "Not of age. Purchase prohibited.");

            return Ok(false);
        }

        self.age_verified = true;

        Ok(true)
    }
}

impl fmt::Display for Alcohol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n{}\nUnit Price: ${:.2}\nABV: {:.1}%\nAlcohol Tax: {:.1}%\nTotal Price: ${:.2}\n",
            self.name,
            self.unit_price,
            self.abv,
            self.tax_rate * 100.0,
            self.total_price
        )
    }
}

impl Record for Alcohol {
    const CATEGORY: Category = Category::Alcohol;

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
            .into_table(table::Alcohol::Table)
            .columns([
                table::Alcohol::Name,
                table::Alcohol::UnitPrice,
                table::Alcohol::Abv,
                table::Alcohol::AgeVerified,
                table::Alcohol::TaxRate,
                table::Alcohol::TotalPrice,
            ])
            .values_panic([
                self.name.to_owned().into(),
                self.unit_price.into(),
                self.abv.into(),
                self.age_verified.into(),
                self.tax_rate.into(),
                self.total_price.into(),
            ])
            .to_owned()
    }

    fn select_by_name(name: &str) -> SelectStatement {
        Query::select()
            .columns([
                table::Alcohol::AlcoholId,
                table::Alcohol::Name,
                table::Alcohol::UnitPrice,
                table::Alcohol::Abv,
                table::Alcohol::AgeVerified,
                table::Alcohol::TaxRate,
                table::Alcohol::TotalPrice,
            ])
            .from(table::Alcohol::Table)
            .and_where(Expr::col(table::Alcohol::Name).eq(name))
            .order_by(table::Alcohol::AlcoholId, Order::Asc)
            .limit(1)
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tax_bands() {
        assert_eq!(tax_for_abv(5.0), 0.05);
        assert_eq!(tax_for_abv(10.0), 0.05);
        assert_eq!(tax_for_abv(15.0), 0.1);
        assert_eq!(tax_for_abv(20.0), 0.1);
        assert_eq!(tax_for_abv(25.0), 0.2);
        assert_eq!(tax_for_abv(40.0), 0.2);
    }

    #[test]
    fn total_includes_abv_tax() {
        for (abv, tax) in [(5.0, 0.05), (15.0, 0.1), (25.0, 0.2)] {
            let alcohol = Alcohol::new("Drink", 20.0, abv);
            assert_eq!(alcohol.tax_rate(), tax);
            assert!(close(alcohol.total_price(), 20.0 * (1.0 + tax)));
        }
    }

    #[test]
    fn not_verified_by_default() {
        assert!(!Alcohol::new("Lager", 8.99, 4.5).is_age_verified());
    }

    #[test]
    fn exactly_twenty_one_is_of_age() {
        let today = date!(2024 - 03 - 01);
        let mut alcohol = Alcohol::new("Whiskey", 25.0, 40.0);

        assert!(alcohol.verify_id_on(2003, 3, 1, today).unwrap());
        assert!(alcohol.is_age_verified());
    }

    #[test]
    fn one_day_short_is_refused() {
        let today = date!(2024 - 03 - 01);
        let mut alcohol = Alcohol::new("Whiskey", 25.0, 40.0);

        assert!(!alcohol.verify_id_on(2003, 3, 2, today).unwrap());
        assert!(!alcohol.is_age_verified());
    }

    #[test]
    fn twenty_first_birthday_passes_and_the_day_before_fails() {
        let cases = [
            ((2003, 3, 1), date!(2024 - 03 - 01)),
            ((2005, 3, 1), date!(2026 - 03 - 01)),
            ((2004, 6, 15), date!(2025 - 06 - 15)),
            ((2005, 10, 19), date!(2026 - 10 - 19)),
            ((2004, 2, 29), date!(2025 - 03 - 01)),
        ];

        for ((year, month, day), birthday) in cases {
            let mut alcohol = Alcohol::new("Whiskey", 25.0, 40.0);
            assert!(
                alcohol.verify_id_on(year, month, day, birthday).unwrap(),
                "born {year}-{month}-{day}, refused on {birthday}"
            );
            assert!(alcohol.is_age_verified());

            let eve = birthday.previous_day().unwrap();
            let mut alcohol = Alcohol::new("Whiskey", 25.0, 40.0);
            assert!(
                !alcohol.verify_id_on(year, month, day, eve).unwrap(),
                "born {year}-{month}-{day}, accepted on {eve}"
            );
            assert!(!alcohol.is_age_verified());
        }
    }

    #[test]
    fn leap_day_birth_ages_on_march_first() {
        let birth = date!(2004 - 02 - 29);
        assert_eq!(age_on(birth, date!(2025 - 02 - 28)), 20);
        assert_eq!(age_on(birth, date!(2025 - 03 - 01)), 21);
        assert_eq!(age_on(birth, date!(2028 - 02 - 29)), 24);
    }

    #[test]
    fn refusal_keeps_earlier_verification() {
        let today = date!(2024 - 03 - 01);
        let mut alcohol = Alcohol::new("Gin", 30.0, 37.5);

        assert!(alcohol.verify_id_on(1980, 6, 15, today).unwrap());
        assert!(!alcohol.verify_id_on(2010, 6, 15, today).unwrap());
        assert!(alcohol.is_age_verified());
    }

    #[test]
    fn impossible_birth_date_is_an_error() {
        let mut alcohol = Alcohol::new("Rum", 22.0, 40.0);
        let err = alcohol.verify_id_on(1990, 2, 30, date!(2024 - 03 - 01));

        assert!(matches!(err, Err(grocer_shared::Error::InvalidDate(_))));
        assert!(!alcohol.is_age_verified());
    }

    #[test]
    fn ages_past_one_hundred() {
        assert_eq!(age_on(date!(1920 - 01 - 01), date!(2024 - 06 - 01)), 104);
    }

    #[test]
    fn summary_layout() {
        let alcohol = Alcohol::new("Whiskey", 25.0, 40.0);
        assert_eq!(
            alcohol.to_string(),
            "\nWhiskey\nUnit Price: $25.00\nABV: 40.0%\nAlcohol Tax: 20.0%\nTotal Price: $30.00\n"
        );
    }
}
