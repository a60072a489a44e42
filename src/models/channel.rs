//! # Channel Model
//!
//! A channel is a content group: every entry belongs to exactly one channel,
//! and the channel's field group determines which custom fields the entry
//! carries.

use crate::collection::FieldCollection;
use serde::{Deserialize, Serialize};

/// A content group with its field catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub channel_id: i64,
    pub channel_name: String,
    pub field_group: i64,
    /// Catalog of fields belonging to this channel's field group.
    #[serde(skip)]
    pub fields: FieldCollection,
}

impl Channel {
    pub fn new(channel_id: i64, channel_name: impl Into<String>, field_group: i64) -> Self {
        Self {
            channel_id,
            channel_name: channel_name.into(),
            field_group,
            fields: FieldCollection::default(),
        }
    }

    /// Attach the field catalog for this channel's field group
    pub fn with_fields(mut self, fields: FieldCollection) -> Self {
        self.fields = fields;
        self
    }
}
