use crate::config::DemoConfig;
use crate::error::SortResult;
use crate::method::SortMethod;

/// Command line arguments for the demo driver
#[derive(Debug, Clone, Default)]
pub struct DemoArgs {
    pub items: Option<usize>,
    pub insertion: bool,
    pub bubble: bool,
    pub shell: bool,
    pub quick: bool,
    pub merge: bool,
    pub heap: bool,
    pub radix: bool,
    pub all: bool,
    pub debug: bool,
    pub seed: Option<u64>,
}

impl DemoArgs {
    /// Methods switched on by individual flags (or `all`)
    pub fn selected_methods(&self) -> Vec<SortMethod> {
        if self.all {
            return SortMethod::ALL.to_vec();
        }

        let flags = [
            (self.insertion, SortMethod::Insertion),
            (self.bubble, SortMethod::Bubble),
            (self.shell, SortMethod::Shell),
            (self.quick, SortMethod::Quick),
            (self.merge, SortMethod::Merge),
            (self.heap, SortMethod::Heap),
            (self.radix, SortMethod::Radix),
        ];
        flags
            .into_iter()
            .filter_map(|(selected, method)| selected.then_some(method))
            .collect()
    }

    /// Turn the raw flags into a validated configuration
    pub fn into_config(self) -> SortResult<DemoConfig> {
        let num_items = self.items.unwrap_or_else(|| {
            log::info!(
                "number of items to sort is unspecified, defaulting to {}",
                crate::config::DEFAULT_NUM_ITEMS
            );
            crate::config::DEFAULT_NUM_ITEMS
        });

        let config = self
            .selected_methods()
            .into_iter()
            .fold(DemoConfig::new(), DemoConfig::with_method)
            .with_num_items(num_items)
            .with_debug(self.debug)
            .with_seed(self.seed);

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;

    #[test]
    fn test_selected_methods() {
        let args = DemoArgs {
            quick: true,
            radix: true,
            ..Default::default()
        };
        assert_eq!(
            args.selected_methods(),
            vec![SortMethod::Quick, SortMethod::Radix]
        );
    }

    #[test]
    fn test_all_overrides_individual_flags() {
        let args = DemoArgs {
            heap: true,
            all: true,
            ..Default::default()
        };
        assert_eq!(args.selected_methods(), SortMethod::ALL.to_vec());
    }

    #[test]
    fn test_into_config_defaults_item_count() {
        let args = DemoArgs {
            merge: true,
            ..Default::default()
        };
        let config = args.into_config().expect("valid args");
        assert_eq!(config.num_items, crate::config::DEFAULT_NUM_ITEMS);
        assert_eq!(config.methods, vec![SortMethod::Merge]);
    }

    #[test]
    fn test_into_config_rejects_missing_methods() {
        let args = DemoArgs {
            items: Some(10),
            ..Default::default()
        };
        assert!(matches!(
            args.into_config(),
            Err(SortError::NoMethodSelected)
        ));
    }
}
