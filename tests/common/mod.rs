//! Shared fixture for the hydration pipeline tests: one channel with every
//! built-in fieldtype represented, two entries, and a seeded in-memory
//! storage backend.

use entries_core::repositories::{ChannelRepository, FieldRepository};
use entries_core::storage::MemoryStorage;
use entries_core::{
    Channel, EntriesConfig, EntryLoader, Field, HydratorFactory, InMemorySiteRepository,
    InMemoryUploadLocationRepository, RawRow, UploadLocation,
};
use serde_json::json;
use std::sync::Arc;

pub fn channel_repository() -> Arc<ChannelRepository> {
    let fields = FieldRepository::new(vec![
        Field::new(1, "event_date", "date", 100),
        Field::new(2, "body", "wygwam", 100),
        Field::new(3, "tags", "multi_select", 100),
        Field::new(4, "schedule", "matrix", 100),
        Field::new(5, "specs", "grid", 100),
        Field::new(6, "attachment", "file", 100),
        Field::new(7, "notes", "fieldpack_list", 100),
        Field::new(8, "color", "swatch", 100),
    ]);
    Arc::new(ChannelRepository::new(
        vec![Channel::new(1, "events", 100)],
        &fields,
    ))
}

pub fn factory() -> HydratorFactory {
    let sites = Arc::new(InMemorySiteRepository::new([(5, "/about".to_string())]));
    let uploads = Arc::new(InMemoryUploadLocationRepository::new(vec![
        UploadLocation::new(2, "Images", "/uploads/images/"),
        UploadLocation::new(4, "Files", "/uploads/files/"),
    ]));
    HydratorFactory::new(sites, uploads)
}

/// Storage seeded with two entries covering every fieldtype. Matrix rows are
/// deliberately stored out of ordinal order and one row is sparse.
pub fn seeded_storage() -> MemoryStorage {
    MemoryStorage::new()
        .with_table(
            "channel_titles",
            vec![
                RawRow::new()
                    .with("entry_id", json!(10))
                    .with("channel_id", json!(1))
                    .with("title", json!("Launch event"))
                    .with("url_title", json!("launch-event")),
                RawRow::new()
                    .with("entry_id", json!(11))
                    .with("channel_id", json!(1))
                    .with("title", json!("Placeholder"))
                    .with("url_title", json!("placeholder")),
            ],
        )
        .with_table(
            "channel_data",
            vec![
                RawRow::new()
                    .with("entry_id", json!(10))
                    .with("field_id_1", json!("1700000000"))
                    .with(
                        "field_id_2",
                        json!("Visit {page_5} or {filedir_2}hero.png, logo at {assets_3:/assets/logo.png}, broken {page_99}"),
                    )
                    .with("field_id_3", json!("red|green|blue"))
                    .with("field_id_6", json!("{filedir_4}report.pdf"))
                    .with("field_id_7", json!("alpha\nbeta"))
                    .with("field_id_8", json!("#ff0000")),
                RawRow::new()
                    .with("entry_id", json!(11))
                    .with("field_id_1", json!(""))
                    .with("field_id_3", json!(""))
                    .with("field_id_6", json!("{filedir_9}missing.pdf")),
            ],
        )
        .with_table(
            "matrix_cols",
            vec![
                RawRow::new()
                    .with("col_id", json!(1))
                    .with("col_name", json!("when"))
                    .with("col_type", json!("date"))
                    .with("field_id", json!(4)),
                RawRow::new()
                    .with("col_id", json!(2))
                    .with("col_name", json!("topics"))
                    .with("col_type", json!("multi_select"))
                    .with("field_id", json!(4)),
                RawRow::new()
                    .with("col_id", json!(3))
                    .with("col_name", json!("summary"))
                    .with("col_type", json!("text"))
                    .with("field_id", json!(4)),
            ],
        )
        .with_table(
            "matrix_data",
            vec![
                RawRow::new()
                    .with("row_id", json!(103))
                    .with("entry_id", json!(10))
                    .with("field_id", json!(4))
                    .with("row_order", json!(2))
                    .with("col_id_1", json!("1700003600"))
                    .with("col_id_2", json!("x|y"))
                    .with("col_id_3", json!("third")),
                RawRow::new()
                    .with("row_id", json!(101))
                    .with("entry_id", json!(10))
                    .with("field_id", json!(4))
                    .with("row_order", json!(0))
                    .with("col_id_1", json!("1700000000"))
                    .with("col_id_2", json!("a|b"))
                    .with("col_id_3", json!("first")),
                // Sparse row: the topics column is absent from storage and
                // the date column is present but empty.
                RawRow::new()
                    .with("row_id", json!(102))
                    .with("entry_id", json!(10))
                    .with("field_id", json!(4))
                    .with("row_order", json!(1))
                    .with("col_id_1", json!(""))
                    .with("col_id_3", json!("second")),
            ],
        )
        .with_table(
            "grid_columns",
            vec![
                RawRow::new()
                    .with("col_id", json!(10))
                    .with("col_name", json!("measured_on"))
                    .with("col_type", json!("date"))
                    .with("field_id", json!(5)),
                RawRow::new()
                    .with("col_id", json!(11))
                    .with("col_name", json!("label"))
                    .with("col_type", json!("text"))
                    .with("field_id", json!(5)),
            ],
        )
        .with_table(
            "channel_grid_field_5",
            vec![
                RawRow::new()
                    .with("row_id", json!(202))
                    .with("entry_id", json!(10))
                    .with("row_order", json!(1))
                    .with("col_id_10", json!("1700007200"))
                    .with("col_id_11", json!("after")),
                RawRow::new()
                    .with("row_id", json!(201))
                    .with("entry_id", json!(10))
                    .with("row_order", json!(0))
                    .with("col_id_10", json!("1700000000"))
                    .with("col_id_11", json!("before")),
            ],
        )
}

pub fn loader() -> EntryLoader {
    EntryLoader::new(
        Arc::new(seeded_storage()),
        channel_repository(),
        factory(),
        EntriesConfig::default(),
    )
}
