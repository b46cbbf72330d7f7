use press_impose::*;

fn valid_request() -> QuoteRequest {
    QuoteRequest {
        quantity: 500,
        papers: vec![PaperJob::new(
            "300gsm gloss",
            SheetSize::new(70.0, 100.0),
            PaperPricing::per_sheet(3.2),
        )],
        ..Default::default()
    }
}

#[test]
fn test_validation_accepts_valid_request() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_validation_no_papers() {
    let mut request = valid_request();
    request.papers.clear();
    match request.validate() {
        Err(ImposeError::Config(msg)) => assert!(msg.contains("No paper")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_zero_quantity() {
    let mut request = valid_request();
    request.quantity = 0;
    assert!(request.validate().is_err());
}

#[test]
fn test_validation_bad_production_parameters() {
    let mut request = valid_request();
    request.production.gap_width = -0.1;
    assert!(request.validate().is_err());

    let mut request = valid_request();
    request.production.gripper_width = f64::NAN;
    assert!(request.validate().is_err());
}

#[test]
fn test_validation_bad_sheet_and_prices() {
    let mut request = valid_request();
    request.papers[0].sheet = SheetSize::new(0.0, 100.0);
    assert!(request.validate().is_err());

    let mut request = valid_request();
    request.papers[0].pricing = PaperPricing::per_packet(-5.0, 100);
    assert!(request.validate().is_err());

    let mut request = valid_request();
    request.finishing_override = Some(-1.0);
    assert!(request.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_request() {
    use tempfile::NamedTempFile;

    let mut request = valid_request();
    request.product = ProductSpec {
        kind: ProductKind::PaperBag,
        bag_preset: Some("medium".to_string()),
        ..Default::default()
    };
    request.papers[0].entered_sheets = Some(120);
    request.finishing.push(FinishingSelection {
        technique: FinishingTechnique::Foiling,
        side: FinishingSide::Both,
    });

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    request.save(path).await.unwrap();
    let loaded = QuoteRequest::load(path).await.unwrap();

    assert_eq!(loaded, request);
}

#[cfg(feature = "serde")]
#[test]
fn test_partial_json_uses_defaults() {
    let json = r#"{
        "quantity": 250,
        "papers": [{ "name": "bond", "sheet": { "width": 45.0, "height": 64.0 } }]
    }"#;
    let request: QuoteRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.production, ProductionParameters::default());
    assert_eq!(request.product.kind, ProductKind::Flyer);
    assert_eq!(request.papers[0].pricing, PaperPricing::default());
    assert!(request.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"{ not json").unwrap();

    match QuoteRequest::load(temp_file.path()).await {
        Err(ImposeError::Json(e)) => assert!(e.is_syntax()),
        other => panic!("Expected Json error, got {:?}", other.map(|_| ())),
    }
}
