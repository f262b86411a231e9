//! One-time construction of the shared device catalog.

use std::sync::Arc;

use tellhub_domain::catalog::{self, Catalog};
use tellhub_domain::error::CatalogError;

/// Build the TellStick catalog and wrap it for sharing.
///
/// Call this once during startup and hand the result to every consumer.
/// The catalog is immutable, so readers need no further synchronisation.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the built-in definitions are defective.
/// Callers should treat this as fatal.
pub fn init() -> Result<Arc<Catalog>, CatalogError> {
    let catalog = catalog::telldus()?;
    tracing::info!(
        protocols = catalog.protocols().len(),
        models = catalog.all_models().len(),
        "device catalog initialized"
    );
    Ok(Arc::new(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tellhub_domain::descriptor::ParameterSet;

    #[test]
    fn should_initialize_reference_catalog() {
        let catalog = init().unwrap();
        assert_eq!(catalog.protocols().len(), 13);
    }

    #[test]
    fn should_serve_concurrent_readers() {
        let catalog = init().unwrap();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                let catalog = Arc::clone(&catalog);
                scope.spawn(move || {
                    let validator = catalog.validator();
                    for _ in 0..100 {
                        assert!(validator.is_valid_model("arctech", "bell"));
                        assert!(validator.is_valid_parameters(
                            "arctech",
                            "codeswitch",
                            &ParameterSet::values([("house", "B"), ("unit", "5")])
                        ));
                        assert_eq!(catalog.parameters_for("arctech", "bell"), vec!["house"]);
                    }
                });
            }
        });
    }
}
