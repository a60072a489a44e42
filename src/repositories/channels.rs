//! # Channel and Field Repositories
//!
//! The channel repository indexes all channels by ID and by name and wires
//! each channel with the field catalog of its field group. Both repositories
//! are built once from preloaded definitions and are immutable thereafter.

use crate::collection::FieldCollection;
use crate::models::{Channel, Field};
use std::collections::HashMap;
use std::sync::Arc;

/// Repository of all field definitions, grouped by field group.
#[derive(Debug, Default)]
pub struct FieldRepository {
    by_group: HashMap<i64, FieldCollection>,
}

impl FieldRepository {
    pub fn new(fields: Vec<Field>) -> Self {
        let mut by_group: HashMap<i64, FieldCollection> = HashMap::new();
        for field in fields {
            by_group.entry(field.group_id).or_default().push(field);
        }
        Self { by_group }
    }

    /// Field catalog for the given field group (empty when unknown)
    pub fn fields_by_group(&self, group_id: i64) -> FieldCollection {
        self.by_group.get(&group_id).cloned().unwrap_or_default()
    }
}

/// Repository of all channels, indexed by ID and by name.
#[derive(Debug, Default)]
pub struct ChannelRepository {
    by_id: HashMap<i64, Arc<Channel>>,
    by_name: HashMap<String, Arc<Channel>>,
}

impl ChannelRepository {
    /// Build the repository, attaching each channel's field catalog
    pub fn new(channels: Vec<Channel>, field_repository: &FieldRepository) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();

        for channel in channels {
            let fields = field_repository.fields_by_group(channel.field_group);
            let channel = Arc::new(channel.with_fields(fields));
            by_id.insert(channel.channel_id, Arc::clone(&channel));
            by_name.insert(channel.channel_name.clone(), channel);
        }

        Self { by_id, by_name }
    }

    /// Channel by ID
    pub fn find(&self, channel_id: i64) -> Option<Arc<Channel>> {
        self.by_id.get(&channel_id).cloned()
    }

    /// Channel by name
    pub fn find_by_name(&self, channel_name: &str) -> Option<Arc<Channel>> {
        self.by_name.get(channel_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_carry_their_field_group_catalog() {
        let fields = FieldRepository::new(vec![
            Field::new(1, "event_date", "date", 100),
            Field::new(2, "body", "wygwam", 200),
        ]);
        let channels = ChannelRepository::new(
            vec![
                Channel::new(1, "events", 100),
                Channel::new(2, "pages", 200),
            ],
            &fields,
        );

        let events = channels.find(1).unwrap();
        assert!(events.fields.has_field("event_date"));
        assert!(!events.fields.has_field("body"));

        let pages = channels.find_by_name("pages").unwrap();
        assert!(pages.fields.has_field("body"));
    }

    #[test]
    fn test_unknown_channel() {
        let channels = ChannelRepository::new(vec![], &FieldRepository::default());
        assert!(channels.find(99).is_none());
        assert!(channels.is_empty());
    }
}
