use vpp_domain::entities::Battery;
use vpp_domain::error::Error;
use vpp_domain::value_objects::{BatteryRegistration, IngestedRecord};

#[test]
fn test_valid_registration() {
    assert!(BatteryRegistration::new("Cannington", "6107", 13_500)
        .validate()
        .is_ok());
    assert!(BatteryRegistration::new("Zero", "0000", 0).validate().is_ok());
}

#[test]
fn test_invalid_registrations() {
    for registration in [
        BatteryRegistration::new("", "6107", 1),
        BatteryRegistration::new("   ", "6107", 1),
        BatteryRegistration::new("Short", "610", 1),
        BatteryRegistration::new("Long", "61070", 1),
        BatteryRegistration::new("Letters", "61a7", 1),
        BatteryRegistration::new("Negative", "6107", -1),
    ] {
        assert!(
            matches!(registration.validate(), Err(Error::InvalidArgument { .. })),
            "{registration:?} should be rejected"
        );
    }
}

#[test]
fn test_registration_json_shape() {
    let registration: BatteryRegistration =
        serde_json::from_str(r#"{"name": "Midland", "postcode": "6057", "capacity": 50500}"#)
            .unwrap();

    assert_eq!(registration, BatteryRegistration::new("Midland", "6057", 50_500));
}

#[test]
fn test_battery_from_registration_has_no_id() {
    let battery = Battery::from(BatteryRegistration::new("Midland", "6057", 50_500));

    assert_eq!(battery.id, None);
    assert_eq!(battery.name, "Midland");
}

#[test]
fn test_battery_ingested_record() {
    let battery = Battery::new("Midland", "6057", 50_500);

    assert_eq!(
        battery.to_ingested_record(),
        IngestedRecord::new("6057", 50_500.0)
    );
}
