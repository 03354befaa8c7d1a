use clap::Parser;
use std::io::Write as _;
use tempfile::NamedTempFile;
use vpp::cli::{Cli, Command, run};
use vpp_infrastructure::AppConfig;

fn seed_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

async fn output_of(command: Command) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(command, &AppConfig::default(), &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_query_with_all_options() {
    let cli = Cli::try_parse_from([
        "vpp", "--config", "vpp.toml", "query", "--from", "6000", "--to", "6999", "--min",
        "100", "--max", "500", "--page", "1", "--size", "10",
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("vpp.toml")));
    assert_eq!(
        cli.command,
        Command::Query {
            from: "6000".to_string(),
            to: "6999".to_string(),
            min: Some(100),
            max: Some(500),
            page: Some(1),
            size: Some(10),
            seed: None,
        }
    );
}

#[test]
fn test_parse_query_requires_bounds() {
    assert!(Cli::try_parse_from(["vpp", "query", "--from", "6000"]).is_err());
}

#[test]
fn test_parse_ingest() {
    let cli = Cli::try_parse_from(["vpp", "ingest", "batteries.json"]).unwrap();

    assert_eq!(
        cli.command,
        Command::Ingest {
            file: "batteries.json".into()
        }
    );
}

#[tokio::test]
async fn test_providers_lists_registered_caches() {
    let out = output_of(Command::Providers).await.unwrap();

    assert!(out.contains("moka"));
    assert!(out.contains("redis"));
    assert!(out.contains("null"));
}

#[tokio::test]
async fn test_ingest_reports_registration_and_persistence() {
    let file = seed_file(
        r#"[
            {"name": "Cannington", "postcode": "6107", "capacity": 13500},
            {"name": "Midland", "postcode": "6057", "capacity": 50500}
        ]"#,
    );

    let out = output_of(Command::Ingest {
        file: file.path().to_path_buf(),
    })
    .await
    .unwrap();

    assert!(out.contains("Successfully registered 2 batteries"));
    assert!(out.contains("Persisted 2 batteries"));
}

#[tokio::test]
async fn test_ingest_rejects_invalid_batch() {
    let file = seed_file(r#"[{"name": "Bad", "postcode": "61", "capacity": 1}]"#);

    let result = output_of(Command::Ingest {
        file: file.path().to_path_buf(),
    })
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_query_second_run_hits_cache() {
    let file = seed_file(
        r#"[
            {"name": "Cannington", "postcode": "6107", "capacity": 13500},
            {"name": "Midland", "postcode": "6057", "capacity": 50500},
            {"name": "Akunda Bay", "postcode": "2084", "capacity": 13500}
        ]"#,
    );

    let out = output_of(Command::Query {
        from: "6000".to_string(),
        to: "6999".to_string(),
        min: None,
        max: None,
        page: None,
        size: None,
        seed: Some(file.path().to_path_buf()),
    })
    .await
    .unwrap();

    assert_eq!(out.matches("\"totalBatteries\": 2").count(), 2);
    assert!(out.contains("\"batteryNames\""));
    assert!(out.contains("cache=moka hits=1 misses=1"));
}

#[tokio::test]
async fn test_missing_seed_file_is_an_error() {
    let result = output_of(Command::Query {
        from: "6000".to_string(),
        to: "6999".to_string(),
        min: None,
        max: None,
        page: None,
        size: None,
        seed: Some("does-not-exist.json".into()),
    })
    .await;

    assert!(result.unwrap_err().to_string().contains("does-not-exist.json"));
}
