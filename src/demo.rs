use grocer_catalog::{Alcohol, Frozen, Produce, Repository};

/// What the demo read back from storage.
#[derive(Debug, Default)]
pub struct Receipt {
    pub produce: Option<Produce>,
    pub alcohol: Option<Alcohol>,
    pub frozen: Option<Frozen>,
}

/// Fixed walk-through: price one item per category, store them, then look
/// each one up again by name. Expects a migrated database.
pub async fn run(repository: &Repository) -> anyhow::Result<Receipt> {
    let mut produce = Produce::new("Apple", 1.00, 1.0);
    println!("{produce}");

    let mut alcohol = Alcohol::new("Whiskey", 25.00, 40.0);
    println!("{alcohol}");

    let mut frozen = Frozen::from_ymd("Ice Cream", 10.00, 2020, 8, 29)?;

    repository.add(&mut produce).await?;
    repository.add(&mut alcohol).await?;
    repository.add(&mut frozen).await?;

    let receipt = Receipt {
        produce: repository.find_by_name::<Produce>("Apple").await?,
        alcohol: repository.find_by_name::<Alcohol>("Whiskey").await?,
        frozen: repository.find_by_name::<Frozen>("Ice Cream").await?,
    };

    for line in [
        receipt.produce.as_ref().map(ToString::to_string),
        receipt.alcohol.as_ref().map(ToString::to_string),
        receipt.frozen.as_ref().map(ToString::to_string),
    ]
    .into_iter()
    .flatten()
    {
        println!("{line}");
    }

    Ok(receipt)
}
