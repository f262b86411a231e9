//! Reference catalog of the devices a TellStick can drive.

use crate::error::CatalogError;

use super::Catalog;

const A_TO_P: &str = "[A-P]";
const ONE_TO_FOUR: &str = "[1-4]";
const ONE_TO_FIFTEEN: &str = "[2-9]|1[0-5]?";
const ONE_TO_SIXTEEN: &str = "[2-9]|1[0-6]?";
const TRUE_FALSE: &str = "true|false";

/// Build the TellStick catalog.
///
/// `kangtai` is left out: it is only supported by TellStick Net.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the built-in definitions are inconsistent.
pub fn telldus() -> Result<Catalog, CatalogError> {
    Catalog::builder()
        .protocol("arctech", |p| {
            p.model("codeswitch", |m| {
                m.parameter_matching("house", A_TO_P)
                    .parameter_matching("unit", ONE_TO_SIXTEEN)
            })
            .model("bell", |m| m.parameter_matching("house", A_TO_P))
            .model("selflearning-switch", |m| {
                m.parameter("house").parameter_matching("unit", ONE_TO_SIXTEEN)
            })
            .model("selflearning-dimmer", |m| {
                m.parameter("house").parameter_matching("unit", ONE_TO_SIXTEEN)
            })
        })
        .protocol("brateck", |p| p.model("codeswitch", |m| m.parameter("house")))
        .protocol("everflourish", |p| {
            p.model("codeswitch", |m| m.parameter("house").parameter("unit"))
                .model("selflearning", |m| m.parameter("house").parameter("unit"))
        })
        .protocol("fuhaote", |p| p.model("codeswitch", |m| m.parameter("code")))
        .protocol("hasta", |p| {
            p.model("selflearning", |m| {
                m.parameter("house").parameter_matching("unit", ONE_TO_FIFTEEN)
            })
        })
        .protocol("ikea", |p| {
            p.model("selflearning-switch", |m| {
                m.parameter_matching("system", ONE_TO_SIXTEEN).parameter("units")
            })
            .model("selflearning", |m| {
                m.parameter_matching("system", ONE_TO_SIXTEEN)
                    .parameter("units")
                    .parameter_matching("fade", TRUE_FALSE)
            })
        })
        .protocol("risingsun", |p| {
            p.model("codeswitch", |m| {
                m.parameter_matching("house", ONE_TO_FOUR)
                    .parameter_matching("unit", ONE_TO_FOUR)
            })
            .model("selflearning", |m| {
                m.parameter("house").parameter_matching("unit", ONE_TO_SIXTEEN)
            })
        })
        .protocol("sartano", |p| {
            p.model("codeswitch", |m| m.parameter_matching("code", ONE_TO_FOUR))
        })
        .protocol("silvanchip", |p| {
            p.model("ecosavers", |m| {
                m.parameter("house").parameter_matching("unit", ONE_TO_FOUR)
            })
            .model("kp100", |m| m.parameter("house"))
        })
        .protocol("upm", |p| {
            p.model("selflearning", |m| {
                m.parameter("house").parameter_matching("unit", ONE_TO_FOUR)
            })
        })
        .protocol("waveman", |p| {
            p.model("codeswitch", |m| {
                m.parameter_matching("house", A_TO_P)
                    .parameter_matching("unit", ONE_TO_SIXTEEN)
            })
        })
        .protocol("x10", |p| {
            p.model("codeswitch", |m| {
                m.parameter_matching("house", A_TO_P)
                    .parameter_matching("unit", ONE_TO_SIXTEEN)
            })
        })
        .protocol("yidong", |p| {
            p.model("codeswitch", |m| m.parameter_matching("unit", ONE_TO_FOUR))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_without_defects() {
        assert!(telldus().is_ok());
    }

    #[test]
    fn should_list_thirteen_protocols() {
        let catalog = telldus().unwrap();
        let protocols = catalog.protocols();
        assert_eq!(protocols.len(), 13);
        assert!(protocols.contains(&"arctech"));
        assert!(!protocols.contains(&"kangtai"));
        assert!(protocols.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn should_list_seven_distinct_models() {
        let catalog = telldus().unwrap();
        assert_eq!(
            catalog.all_models(),
            vec![
                "codeswitch",
                "bell",
                "selflearning-switch",
                "selflearning-dimmer",
                "selflearning",
                "ecosavers",
                "kp100",
            ]
        );
    }

    #[test]
    fn should_list_arctech_models_in_order() {
        let catalog = telldus().unwrap();
        assert_eq!(
            catalog.models_for("arctech"),
            vec![
                "codeswitch",
                "bell",
                "selflearning-switch",
                "selflearning-dimmer"
            ]
        );
    }

    #[test]
    fn should_count_models_per_protocol() {
        let catalog = telldus().unwrap();
        assert_eq!(catalog.models_for("everflourish").len(), 2);
        assert_eq!(catalog.models_for("sartano").len(), 1);
    }

    #[test]
    fn should_have_models_for_every_protocol() {
        let catalog = telldus().unwrap();
        for protocol in catalog.protocols() {
            let models = catalog.models_for(protocol);
            assert!(!models.is_empty(), "{protocol} has no models");
            assert!(models.iter().all(|m| !m.is_empty()));
        }
    }

    #[test]
    fn should_list_parameters_of_bell() {
        let catalog = telldus().unwrap();
        assert_eq!(catalog.parameters_for("arctech", "bell"), vec!["house"]);
    }

    #[test]
    fn should_list_parameters_of_codeswitches() {
        let catalog = telldus().unwrap();
        assert_eq!(
            catalog.parameters_for("arctech", "codeswitch"),
            vec!["house", "unit"]
        );
        assert_eq!(
            catalog.parameters_for("risingsun", "codeswitch"),
            vec!["house", "unit"]
        );
    }

    #[test]
    fn should_constrain_ikea_fade_to_booleans() {
        let catalog = telldus().unwrap();
        let fade = catalog
            .model("ikea", "selflearning")
            .and_then(|m| m.parameter("fade"))
            .and_then(|p| p.pattern())
            .unwrap();
        assert_eq!(fade.as_str(), TRUE_FALSE);
    }
}
