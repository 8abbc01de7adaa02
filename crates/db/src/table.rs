use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Produce {
    Table,
    ProduceId,
    Name,
    UnitPrice,
    Weight,
    IsOrganic,
    TaxRate,
    TotalPrice,
}

#[derive(Iden, Clone, Copy)]
pub enum Alcohol {
    Table,
    AlcoholId,
    Name,
    UnitPrice,
    Abv,
    AgeVerified,
    TaxRate,
    TotalPrice,
}

#[derive(Iden, Clone, Copy)]
pub enum Frozen {
    Table,
    FrozenId,
    Name,
    UnitPrice,
    Expiration,
    Quantity,
    TaxRate,
    TotalPrice,
}
