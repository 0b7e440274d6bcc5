//! Construction parameters for both table variants.

use crate::error::ConfigError;
use crate::table::KeyPolicy;

pub const DEFAULT_CAPACITY: usize = 16;
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

fn check_capacity(capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    Ok(())
}

/// Parameters for [`ChainedHashTable`](crate::ChainedHashTable). The bucket
/// count is fixed for the lifetime of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainedConfig {
    pub capacity: usize,
    pub key_policy: KeyPolicy,
}

impl Default for ChainedConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            key_policy: KeyPolicy::default(),
        }
    }
}

impl ChainedConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_capacity(self.capacity)
    }
}

/// Parameters for [`OpenAddressingTable`](crate::OpenAddressingTable).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenAddressingConfig {
    /// Initial slot count; doubles whenever an insert would push the load
    /// factor above `max_load_factor`.
    pub capacity: usize,
    /// Must lie in `(0, 1]`.
    pub max_load_factor: f64,
    pub key_policy: KeyPolicy,
}

impl Default for OpenAddressingConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            key_policy: KeyPolicy::default(),
        }
    }
}

impl OpenAddressingConfig {
    pub fn new(capacity: usize, max_load_factor: f64) -> Self {
        Self {
            capacity,
            max_load_factor,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_capacity(self.capacity)?;
        if !(self.max_load_factor > 0.0 && self.max_load_factor <= 1.0) {
            return Err(ConfigError::InvalidLoadFactor(self.max_load_factor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(ChainedConfig::default().validate(), Ok(()));
        assert_eq!(OpenAddressingConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            ChainedConfig::with_capacity(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
        assert_eq!(
            OpenAddressingConfig::new(0, 0.5).validate(),
            Err(ConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn load_factor_bounds() {
        assert_eq!(OpenAddressingConfig::new(4, 1.0).validate(), Ok(()));
        assert_eq!(OpenAddressingConfig::new(4, 0.01).validate(), Ok(()));
        for bad in [0.0, -0.5, 1.5] {
            assert_eq!(
                OpenAddressingConfig::new(4, bad).validate(),
                Err(ConfigError::InvalidLoadFactor(bad))
            );
        }
        assert!(matches!(
            OpenAddressingConfig::new(4, f64::NAN).validate(),
            Err(ConfigError::InvalidLoadFactor(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn configs_deserialize_from_json() {
        let c: OpenAddressingConfig = serde_json::from_str(
            r#"{"capacity":10,"max_load_factor":1.0,"key_policy":"RejectDuplicates"}"#,
        )
        .unwrap();
        assert_eq!(c.capacity, 10);
        assert_eq!(c.key_policy, KeyPolicy::RejectDuplicates);

        let chained = ChainedConfig::with_capacity(5);
        let json = serde_json::to_string(&chained).unwrap();
        assert_eq!(serde_json::from_str::<ChainedConfig>(&json).unwrap(), chained);
    }
}
