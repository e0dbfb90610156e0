//! Process-wide configuration. Kept in its own test binary since it mutates
//! global state.

use ferrum_models::config::{self, ModelConfig};
use ferrum_models::resource::Signer;
use ferrum_models::types::{Coding, FhirString};
use ferrum_models::Error;

mod test_support;
use test_support::*;

#[test]
fn test_config_switches_apply_to_builds() {
    let role = Coding::builder().code(code("CONSENTER")).build().unwrap();
    let builder = Signer::builder(role, reference("Device/d1"), [signature("Patient/p1")]);

    assert!(matches!(
        builder.build().unwrap_err(),
        Error::InvalidReferenceType { field: "party", .. }
    ));
    assert!(FhirString::of("bell\u{0007}").is_err());

    config::set(ModelConfig::from_json(r#"{"checkReferenceTypes": false, "checkControlChars": false}"#).unwrap());
    assert!(builder.build().is_ok());
    assert!(FhirString::of("bell\u{0007}").is_ok());

    config::set(ModelConfig::default());
    assert_eq!(config::current(), ModelConfig::default());
    assert!(builder.build().is_err());
}
