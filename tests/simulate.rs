use mealswipe::{
    Config,
    cli::{FilterArgs, simulate::Step, simulate::simulate},
};
use mealswipe_shared::{MealSlot, PriceTier, SwipeDirection};
use temp_dir::TempDir;

fn steps(specs: &[&str]) -> Vec<Step> {
    specs.iter().map(|s| s.parse().unwrap()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_simulation_reports_committed_swipes() -> anyhow::Result<()> {
    let config = Config::default();

    let report = simulate(
        &config,
        &FilterArgs::default(),
        &steps(&["breakfast:-120", "lunch:30", "dinner:cancel:-200", "dinner:75"]),
    )
    .await?;

    assert_eq!(
        report.swipes,
        vec![
            (MealSlot::Breakfast, SwipeDirection::Left),
            (MealSlot::Dinner, SwipeDirection::Right),
        ]
    );
    assert!(report.settled);
    assert!(report.frames > 16);
    assert!(report.menu.contains("Greek Yogurt Bowl"));
    assert!(report.menu.contains("Chicken Caesar Salad"));
    assert!(report.menu.contains("Vegetable Stir Fry"));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_simulation_on_empty_slot() -> anyhow::Result<()> {
    let filters = FilterArgs {
        budget: Some(PriceTier::High),
        cuisines: vec![],
    };

    let report = simulate(&Config::default(), &filters, &steps(&["breakfast:-300"])).await?;

    assert!(report.swipes.is_empty());
    assert!(report.settled);
    assert!(report.menu.contains("No breakfast options match your filters"));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_simulation_with_catalog_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("catalog.json");
    std::fs::write(
        &path,
        r#"{"lunch": [
            {"id": "l1", "name": "Pad Thai", "cuisine": "Asian", "price": "$"},
            {"id": "l2", "name": "Pho", "cuisine": "Asian", "price": "$"},
            {"id": "l3", "name": "Ramen", "cuisine": "Asian", "price": "$$"}
        ]}"#,
    )?;

    let mut config = Config::default();
    config.catalog.path = Some(path.to_string_lossy().into_owned());

    let report = simulate(
        &config,
        &FilterArgs::default(),
        &steps(&["lunch:60", "lunch:60"]),
    )
    .await?;

    assert_eq!(report.swipes.len(), 2);
    assert!(report.menu.contains("Pho"));
    assert!(report.menu.contains("(2/3)"));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_missing_catalog_file_is_an_error() {
    let mut config = Config::default();
    config.catalog.path = Some("no/such/catalog.json".to_string());

    let result = simulate(&config, &FilterArgs::default(), &steps(&["lunch:60"])).await;

    assert!(result.is_err());
}
