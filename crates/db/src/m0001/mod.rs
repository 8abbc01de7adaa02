mod alcohol;
mod frozen;
mod produce;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "grocer",
    "m0001",
    vec_box![],
    vec_box![
        produce::CreateTable,
        produce::CreateIdx1,
        alcohol::CreateTable,
        alcohol::CreateIdx1,
        frozen::CreateTable,
        frozen::CreateIdx1
    ]
);
