use grocer_catalog::Frozen;
use temp_dir::TempDir;
use time::macros::date;

mod helpers;

#[tokio::test]
async fn stored_frozen_is_found_by_name() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let repository = helpers::setup_repository(dir.child("db.sqlite3")).await?;

    let mut ice_cream = Frozen::from_ymd("Ice Cream", 10.0, 2020, 8, 29)?;
    let id = repository.add(&mut ice_cream).await?;

    let found = repository
        .find_by_name::<Frozen>("Ice Cream")
        .await?
        .unwrap();

    assert_eq!(found.id, Some(id));
    assert_eq!(found.expiration, date!(2020 - 08 - 29));
    assert_eq!(found.total_price(), 10.0);
    assert_eq!(found, ice_cream);

    Ok(())
}

#[tokio::test]
async fn quantity_round_trips() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let repository = helpers::setup_repository(dir.child("db.sqlite3")).await?;

    let mut peas = Frozen::new("Peas", 1.5, date!(2031 - 12 - 31)).with_quantity(6);
    peas.set_quantity(8);
    repository.add(&mut peas).await?;

    let found = repository.find_by_name::<Frozen>("Peas").await?.unwrap();
    assert_eq!(found.quantity(), 8);
    assert!((found.total_price() - 9.0).abs() < 1e-9);
    assert_eq!(found, peas);

    Ok(())
}
