//! Instance type and preference hints attached to images

use std::collections::BTreeMap;

/// Label key naming the default instance type for VMs booted from the image
pub const DEFAULT_INSTANCETYPE_LABEL: &str = "instancetype.kubevirt.io/default-instancetype";

/// Label key naming the default preference for VMs booted from the image
pub const DEFAULT_PREFERENCE_LABEL: &str = "instancetype.kubevirt.io/default-preference";

/// Label set carried by an artifact
pub type Labels = BTreeMap<String, String>;

/// Build the conventional two-key label set
pub fn default_labels(instancetype: &str, preference: &str) -> Labels {
    Labels::from([
        (
            DEFAULT_INSTANCETYPE_LABEL.to_string(),
            instancetype.to_string(),
        ),
        (DEFAULT_PREFERENCE_LABEL.to_string(), preference.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_has_exactly_two_keys() {
        let labels = default_labels("u1.small", "rhel.8");
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[DEFAULT_INSTANCETYPE_LABEL], "u1.small");
        assert_eq!(labels[DEFAULT_PREFERENCE_LABEL], "rhel.8");
    }
}
