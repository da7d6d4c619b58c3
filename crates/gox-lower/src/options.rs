//! Lowering options.

use crate::error::{LowerError, LowerResult};

/// Names of the Go packages the lowered code calls into.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct LowerOptions {
    /// Package holding one constructor per HTML element (`elem.Div`).
    pub element_package: String,
    /// Package holding `Text`, `Markup`, `Class`, `Attribute` and `EventListener`.
    pub core_package: String,
    /// Package holding controlled property constructors (`prop.href`).
    pub prop_package: String,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            element_package: "elem".to_string(),
            core_package: "vecty".to_string(),
            prop_package: "prop".to_string(),
        }
    }
}

impl LowerOptions {
    /// Check that every package name is usable as a selector base.
    pub fn validate(&self) -> LowerResult<()> {
        for (field, value) in [
            ("elementPackage", &self.element_package),
            ("corePackage", &self.core_package),
            ("propPackage", &self.prop_package),
        ] {
            if value.trim().is_empty() {
                return Err(LowerError::invalid_options(format!("`{}` is empty", field)));
            }
        }
        Ok(())
    }

    /// Load options from a JSON document. Missing keys keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> LowerResult<Self> {
        let options: Self = serde_json::from_str(json).map_err(LowerError::invalid_options)?;
        options.validate()?;
        Ok(options)
    }
}
