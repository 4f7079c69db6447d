use super::*;

#[test]
fn parses_search_filters_as_pairs() {
    let cli = Cli::try_parse_from(["roost-cli", "search", "type=commercial", "minPrice=20,000"])
        .expect("expected valid cli args");

    let Commands::Search { filters } = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(
        filters,
        [
            ("type".to_string(), "commercial".to_string()),
            ("minPrice".to_string(), "20,000".to_string()),
        ]
    );

    let params = commands::build_params(filters);
    assert_eq!(params.types, ["Commercial"]);
    assert_eq!(params.price_min, Some(20_000.0));
}

#[test]
fn search_without_filters_uses_defaults() {
    let cli = Cli::try_parse_from(["roost-cli", "search"]).expect("expected valid cli args");
    let Commands::Search { filters } = cli.command else {
        panic!("expected search command");
    };
    let params = commands::build_params(filters);
    assert_eq!(params.page, 1);
    assert_eq!(params.limit, roost_core::DEFAULT_LIMIT);
}

#[test]
fn rejects_filter_without_equals() {
    assert!(Cli::try_parse_from(["roost-cli", "search", "commercial"]).is_err());
    assert!(Cli::try_parse_from(["roost-cli", "search", "=x"]).is_err());
}

#[test]
fn value_may_contain_equals() {
    assert_eq!(
        parse_filter("q=a=b"),
        Ok(("q".to_string(), "a=b".to_string()))
    );
}

#[test]
fn parses_top_neighborhoods_flags() {
    let cli = Cli::try_parse_from([
        "roost-cli",
        "--mock",
        "top-neighborhoods",
        "--limit",
        "3",
        "--city",
        "Dhaka",
    ])
    .expect("expected valid cli args");

    assert!(cli.mock);
    assert!(matches!(
        cli.command,
        Commands::TopNeighborhoods { limit: 3, city: Some(ref c) } if c == "Dhaka"
    ));
}

#[test]
fn top_neighborhoods_limit_defaults_to_ten() {
    let cli = Cli::try_parse_from(["roost-cli", "top-neighborhoods"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::TopNeighborhoods {
            limit: 10,
            city: None
        }
    ));
}

#[test]
fn parses_property_and_neighborhoods() {
    let cli = Cli::try_parse_from(["roost-cli", "property", "mock-res-uttara-01"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Property { ref id } if id == "mock-res-uttara-01"));

    let cli = Cli::try_parse_from(["roost-cli", "neighborhoods", "Sylhet", "--mock"])
        .expect("expected valid cli args");
    assert!(cli.mock);
    assert!(matches!(cli.command, Commands::Neighborhoods { ref city } if city == "Sylhet"));
}

#[tokio::test]
async fn commands_run_against_mock_catalog() {
    let client = ListingsClient::with_base_url("http://127.0.0.1:1/api/v1", 1)
        .expect("client")
        .with_mock(true);

    commands::run_search(&client, vec![("type".into(), "Commercial".into())])
        .await
        .expect("search");
    commands::run_property(&client, "mock-res-uttara-01")
        .await
        .expect("property");
    assert!(commands::run_property(&client, "missing").await.is_err());
    assert!(commands::run_neighborhoods(&client, "any").await.is_err());
    commands::run_top_neighborhoods(&client, 3, None)
        .await
        .expect("top");
    commands::run_documents(&client, "residential")
        .await
        .expect("documents");

    let add = ShortlistAction::Add {
        asset_id: "mock-str-01".into(),
    };
    commands::run_shortlist(&client, "", add)
        .await
        .expect("shortlist add");
    let blank = ShortlistAction::Check {
        asset_id: " ".into(),
    };
    assert!(commands::run_shortlist(&client, "", blank).await.is_err());
}

#[test]
fn parses_documents_with_default_type() {
    let cli = Cli::try_parse_from(["roost-cli", "documents"]).expect("expected valid cli args");
    assert!(
        matches!(cli.command, Commands::Documents { ref asset_type } if asset_type == "default")
    );
}

#[test]
fn parses_shortlist_actions() {
    let cli = Cli::try_parse_from([
        "roost-cli",
        "shortlist",
        "--token",
        "user-7",
        "list",
        "--limit",
        "4",
    ])
    .expect("expected valid cli args");
    let Commands::Shortlist { token, action } = cli.command else {
        panic!("expected shortlist command");
    };
    assert_eq!(token, "user-7");
    assert!(matches!(action, ShortlistAction::List { page: 1, limit: 4 }));

    let cli = Cli::try_parse_from(["roost-cli", "shortlist", "remove", "a1"])
        .expect("expected valid cli args");
    let Commands::Shortlist { action, .. } = cli.command else {
        panic!("expected shortlist command");
    };
    assert!(matches!(action, ShortlistAction::Remove { ref asset_id } if asset_id == "a1"));
}
