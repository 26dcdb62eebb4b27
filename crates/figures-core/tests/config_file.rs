use figures_core::{ConfigError, DashboardConfig, DashboardController};
use figures_gateway::{FigureField, SimulatedGateway};
use std::io::Write;
use std::sync::Arc;

#[test]
fn load_reads_toml_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
currency_symbol = "$ "
document_type = "FESP"

[[cards]]
field = "grandTotal"
label = "Total"
style_tag = "border-green-500"

[[cards]]
field = "portTariff"
label = "Port Tariff"
style_tag = "border-teal-500"
"#
    )
    .unwrap();

    let config = DashboardConfig::load(file.path()).unwrap();
    assert_eq!(config.currency_symbol, "$ ");
    assert_eq!(config.document_type, "FESP");
    let fields: Vec<FigureField> = config.cards.specs().iter().map(|s| s.field).collect();
    assert_eq!(fields, vec![FigureField::GrandTotal, FigureField::PortTariff]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DashboardConfig::load(dir.path().join("absent.toml")).unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("absent.toml")),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn custom_layout_drives_rendering() {
    let config = DashboardConfig::from_toml_str(
        r#"
currency_symbol = ""

[[cards]]
field = "vat"
label = "VAT"
style_tag = "border-blue-500"

[[cards]]
field = "documentCount"
label = "Documents"
style_tag = "border-indigo-500"
"#,
    )
    .unwrap();

    let dashboard = DashboardController::new(Arc::new(SimulatedGateway::new()), config).unwrap();
    dashboard.refresh().await;

    let rendered: Vec<String> = dashboard
        .render()
        .unwrap()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        vec![
            "VAT\t54,321.12\tborder-blue-500".to_string(),
            "Documents\t128.00\tborder-indigo-500".to_string(),
        ]
    );
}
